//! Arithmetic on [`BigInt`](crate::BigInt).
//!
//! Each operation is a pass over limbs. Operands of differing length are
//! aligned by reading missing limbs as their sign extension
//! (`BigInt::limb_at`), so there is no special-casing
//! of signs. Results are collected into a fresh limb vector, which then
//! replaces the receiver's and gets canonicalized.
//!
//! The slice-level helpers (`adc`, `sbb`, `add_assign_carry`, ...) work on
//! little-endian unsigned digit strings and are shared with the division
//! engine and the decimal conversions.

/// Assert that an op works for all val/ref combinations
#[cfg(test)]
macro_rules! assert_op {
    ($left:ident $op:tt $right:ident == $expected:expr) => {
        assert_eq!((&$left) $op (&$right), $expected);
        assert_eq!((&$left) $op $right.clone(), $expected);
        assert_eq!($left.clone() $op (&$right), $expected);
        assert_eq!($left.clone() $op $right.clone(), $expected);
    };
}

/// Assert that an assign-op works for all val/ref combinations
#[cfg(test)]
macro_rules! assert_assign_op {
    ($left:ident $op:tt $right:ident == $expected:expr) => {{
        let mut left = $left.clone();
        assert_eq!({ left $op &$right; left }, $expected);

        let mut left = $left.clone();
        assert_eq!({ left $op $right.clone(); left }, $expected);
    }};
}

pub(crate) mod add;
pub(crate) mod bitwise;
pub(crate) mod divide;
mod impls;
pub(crate) mod multiply;
pub(crate) mod shift;
pub(crate) mod subtract;
