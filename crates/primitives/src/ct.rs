//! Constant-time comparison, equality and selection on `u32`.
//!
//! Every function here returns a boolean-as-integer (`0` or `1`) or one of its operands, and is
//! written without branches or memory lookups that depend on the operand values. Results can be
//! combined with `&`, `|` and `^` to build larger branch-free expressions.
//!
//! # Oblivious
//! * No data-dependent control flow or memory access.
//! * Leaks: nothing beyond the operand width.
//!
//! No protection is claimed against instruction-level timing variance of the target CPU.
//!
use static_assertions::const_assert;

// The widened difference of two `u32` must fit, sign included.
const_assert!(i64::BITS > u32::BITS);

/// Position of the sign bit of the widened difference.
const WIDE_SIGN_SHIFT: u32 = i64::BITS - 1;

#[inline(always)]
const fn widened_diff(x: u32, y: u32) -> i64 {
  x as i64 - y as i64
}

#[inline(always)]
const fn sign_bit(v: i64) -> u32 {
  ((v >> WIDE_SIGN_SHIFT) & 1) as u32
}

/// Expands a selector into a full-width mask: `u32::MAX` for `1`, `0` for `0`.
/// # Requires
/// * `selector` is `0` or `1`, otherwise the result is unspecified.
/// # Oblivious
/// * Branch-free.
///
#[inline]
#[must_use]
pub const fn mask(selector: u32) -> u32 {
  !selector.wrapping_sub(1)
}

/// Returns `when_true` if `selector == 1` and `when_false` if `selector == 0`.
/// # Requires
/// * `selector` is `0` or `1`, otherwise the result is unspecified. The precondition is not
///   checked.
/// # Oblivious
/// * Branch-free.
///
#[inline]
#[must_use]
pub const fn select(selector: u32, when_true: u32, when_false: u32) -> u32 {
  let m = mask(selector);
  (m & when_true) | (!m & when_false)
}

/// Returns `1` if `x < y` as unsigned magnitudes, `0` otherwise.
///
/// The difference is taken in `i64` so that it cannot wrap, and its sign bit is the answer.
/// # Oblivious
/// * Branch-free.
///
#[inline]
#[must_use]
pub const fn less_than(x: u32, y: u32) -> u32 {
  sign_bit(widened_diff(x, y))
}

/// Returns `1` if `x <= y` as unsigned magnitudes, `0` otherwise.
///
/// `x - y - 1` is negative exactly when `x <= y`. The subtraction stays within `i64`.
/// # Oblivious
/// * Branch-free.
///
#[inline]
#[must_use]
pub const fn less_or_equal(x: u32, y: u32) -> u32 {
  sign_bit(widened_diff(x, y) - 1)
}

/// Returns `1` if `x > y`, `0` otherwise.
#[inline]
#[must_use]
pub const fn greater_than(x: u32, y: u32) -> u32 {
  less_than(y, x)
}

/// Returns `1` if `x >= y`, `0` otherwise.
#[inline]
#[must_use]
pub const fn greater_or_equal(x: u32, y: u32) -> u32 {
  less_or_equal(y, x)
}

/// Returns `1` if `x == y`, `0` otherwise.
///
/// Uses the widened difference `d = x - y`: the sign bit of `(d - 1) ^ d` is set only when
/// `d == 0`. Produces the same results as [`equal_fold`].
/// # Oblivious
/// * Branch-free.
///
#[inline]
#[must_use]
pub const fn equal(x: u32, y: u32) -> u32 {
  let d = widened_diff(x, y);
  sign_bit((d - 1) ^ d)
}

/// Returns `1` if `x == y`, `0` otherwise.
///
/// Bit-folding variant: ANDs every bit of `!(x ^ y)` down into bit 0. Produces the same results
/// as [`equal`].
/// # Oblivious
/// * Branch-free.
///
#[inline]
#[must_use]
pub const fn equal_fold(x: u32, y: u32) -> u32 {
  let mut z = !(x ^ y);
  z &= z >> 16;
  z &= z >> 8;
  z &= z >> 4;
  z &= z >> 2;
  z &= z >> 1;
  z & 1
}

/// Returns `1` if `x < y`, `0` otherwise, without widening.
///
/// Reads the borrow out of the wrapping subtraction `x - y` directly.
/// # Oblivious
/// * Branch-free.
///
#[inline]
#[must_use]
pub const fn less_than_borrow(x: u32, y: u32) -> u32 {
  ((!x & y) | (!(x ^ y) & x.wrapping_sub(y))) >> (u32::BITS - 1)
}
