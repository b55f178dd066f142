//! Branching reference implementations of the [`crate::ct`] primitives.
//!
//! These functions have the same signatures and the same results as their constant-time
//! counterparts, but use ordinary comparisons and `if`s. They exist as a test oracle and as a
//! benchmark baseline.
//!
//! # Not oblivious
//! * Control flow depends on the operand values. Never use these on secret data.
//!

/// Returns `when_true` if `selector == 1`, `when_false` otherwise.
#[inline]
#[must_use]
pub const fn select(selector: u32, when_true: u32, when_false: u32) -> u32 {
  if selector == 1 {
    when_true
  } else {
    when_false
  }
}

/// Returns `1` if `x < y`, `0` otherwise.
#[inline]
#[must_use]
pub const fn less_than(x: u32, y: u32) -> u32 {
  if x < y {
    1
  } else {
    0
  }
}

/// Returns `1` if `x <= y`, `0` otherwise.
#[inline]
#[must_use]
pub const fn less_or_equal(x: u32, y: u32) -> u32 {
  if x <= y {
    1
  } else {
    0
  }
}

/// Returns `1` if `x == y`, `0` otherwise.
#[inline]
#[must_use]
pub const fn equal(x: u32, y: u32) -> u32 {
  if x == y {
    1
  } else {
    0
  }
}
