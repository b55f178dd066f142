//! Traits extending the primitives to every fixed-width unsigned integer.
use crate::{branching, ct};
use static_assertions::const_assert;

/// Constant-time comparison, equality and selection.
///
/// Every method returns either a boolean-as-integer (`0` or `1` of type `Self`) or one of its
/// operands.
///
pub trait CtOps: Copy {
  /// All-ones if `self == 1`, all-zeros if `self == 0`.
  /// # Requires
  /// * `self` is `0` or `1`.
  /// @Oblivious
  fn ct_mask(self) -> Self;
  /// Uses `self` as the selector: `when_true` if `self == 1`, `when_false` if `self == 0`.
  /// # Requires
  /// * `self` is `0` or `1`.
  /// @Oblivious
  fn ct_select(self, when_true: Self, when_false: Self) -> Self;
  /// `1` if `self < other`.
  /// @Oblivious
  fn ct_lt(self, other: Self) -> Self;
  /// `1` if `self <= other`.
  /// @Oblivious
  fn ct_le(self, other: Self) -> Self;
  /// `1` if `self == other`, widened-difference variant.
  /// @Oblivious
  fn ct_eq(self, other: Self) -> Self;
  /// `1` if `self == other`, bit-folding variant.
  /// @Oblivious
  fn ct_eq_fold(self, other: Self) -> Self;
}

/// Branching counterpart of [`CtOps`]. Test oracle and benchmark baseline only.
///
/// Not oblivious: never use on secret data.
pub trait BranchingOps: Copy {
  /// `when_true` if `self == 1`, `when_false` otherwise.
  fn br_select(self, when_true: Self, when_false: Self) -> Self;
  /// `1` if `self < other`.
  fn br_lt(self, other: Self) -> Self;
  /// `1` if `self <= other`.
  fn br_le(self, other: Self) -> Self;
  /// `1` if `self == other`.
  fn br_eq(self, other: Self) -> Self;
}

/// Implements [`CtOps`] for an unsigned integer, using `$wide` to hold differences.
/// `$wide` must be a signed type strictly wider than `$ty`.
///
macro_rules! impl_ct_ops {
  ($ty:ty, $wide:ty) => {
    const_assert!(<$wide>::BITS > <$ty>::BITS);

    impl CtOps for $ty {
      #[inline]
      fn ct_mask(self) -> Self {
        !self.wrapping_sub(1)
      }

      #[inline]
      fn ct_select(self, when_true: Self, when_false: Self) -> Self {
        let m = self.ct_mask();
        (m & when_true) | (!m & when_false)
      }

      #[inline]
      fn ct_lt(self, other: Self) -> Self {
        let d = self as $wide - other as $wide;
        ((d >> (<$wide>::BITS - 1)) & 1) as Self
      }

      #[inline]
      fn ct_le(self, other: Self) -> Self {
        let d = self as $wide - other as $wide - 1;
        ((d >> (<$wide>::BITS - 1)) & 1) as Self
      }

      #[inline]
      fn ct_eq(self, other: Self) -> Self {
        let d = self as $wide - other as $wide;
        ((((d - 1) ^ d) >> (<$wide>::BITS - 1)) & 1) as Self
      }

      #[inline]
      fn ct_eq_fold(self, other: Self) -> Self {
        let mut z = !(self ^ other);
        // Trip count depends only on the width.
        let mut shift = Self::BITS / 2;
        while shift > 0 {
          z &= z >> shift;
          shift /= 2;
        }
        z & 1
      }
    }
  };
}

/// Implements [`BranchingOps`] for an unsigned integer.
macro_rules! impl_branching_ops {
  ($ty:ty) => {
    impl BranchingOps for $ty {
      #[inline]
      fn br_select(self, when_true: Self, when_false: Self) -> Self {
        if self == 1 {
          when_true
        } else {
          when_false
        }
      }

      #[inline]
      fn br_lt(self, other: Self) -> Self {
        Self::from(self < other)
      }

      #[inline]
      fn br_le(self, other: Self) -> Self {
        Self::from(self <= other)
      }

      #[inline]
      fn br_eq(self, other: Self) -> Self {
        Self::from(self == other)
      }
    }
  };
}

impl_ct_ops!(u8, i16);
impl_ct_ops!(u16, i32);
impl_ct_ops!(u64, i128);

impl CtOps for u32 {
  #[inline]
  fn ct_mask(self) -> Self {
    ct::mask(self)
  }

  #[inline]
  fn ct_select(self, when_true: Self, when_false: Self) -> Self {
    ct::select(self, when_true, when_false)
  }

  #[inline]
  fn ct_lt(self, other: Self) -> Self {
    ct::less_than(self, other)
  }

  #[inline]
  fn ct_le(self, other: Self) -> Self {
    ct::less_or_equal(self, other)
  }

  #[inline]
  fn ct_eq(self, other: Self) -> Self {
    ct::equal(self, other)
  }

  #[inline]
  fn ct_eq_fold(self, other: Self) -> Self {
    ct::equal_fold(self, other)
  }
}

impl_branching_ops!(u8);
impl_branching_ops!(u16);
impl_branching_ops!(u64);

impl BranchingOps for u32 {
  #[inline]
  fn br_select(self, when_true: Self, when_false: Self) -> Self {
    branching::select(self, when_true, when_false)
  }

  #[inline]
  fn br_lt(self, other: Self) -> Self {
    branching::less_than(self, other)
  }

  #[inline]
  fn br_le(self, other: Self) -> Self {
    branching::less_or_equal(self, other)
  }

  #[inline]
  fn br_eq(self, other: Self) -> Self {
    branching::equal(self, other)
  }
}
