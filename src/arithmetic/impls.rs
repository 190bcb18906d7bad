//! The remaining val/ref combinations of the binary operators.
//!
//! Each operator is implemented once, as `OpAssign<&BigInt> for BigInt`,
//! in its own module. Everything here delegates to that.

use core::ops::{
    Add, AddAssign, BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, BitXorAssign,
    Div, DivAssign, Mul, MulAssign, Rem, RemAssign, Sub, SubAssign,
};

use crate::BigInt;

macro_rules! forward_binop {
    ($($Op:ident::$op:ident, $OpAssign:ident::$op_assign:ident;)*) => {$(
        impl $OpAssign<BigInt> for BigInt {
            #[inline]
            fn $op_assign(&mut self, other: BigInt) {
                <BigInt as $OpAssign<&BigInt>>::$op_assign(self, &other);
            }
        }

        impl $Op<&BigInt> for BigInt {
            type Output = BigInt;

            #[inline]
            fn $op(mut self, other: &BigInt) -> Self::Output {
                <BigInt as $OpAssign<&BigInt>>::$op_assign(&mut self, other);
                self
            }
        }

        impl $Op<BigInt> for BigInt {
            type Output = BigInt;

            #[inline]
            fn $op(mut self, other: BigInt) -> Self::Output {
                <BigInt as $OpAssign<&BigInt>>::$op_assign(&mut self, &other);
                self
            }
        }

        impl $Op<&BigInt> for &BigInt {
            type Output = BigInt;

            #[inline]
            fn $op(self, other: &BigInt) -> Self::Output {
                let mut result = self.clone();
                <BigInt as $OpAssign<&BigInt>>::$op_assign(&mut result, other);
                result
            }
        }

        impl $Op<BigInt> for &BigInt {
            type Output = BigInt;

            #[inline]
            fn $op(self, other: BigInt) -> Self::Output {
                let mut result = self.clone();
                <BigInt as $OpAssign<&BigInt>>::$op_assign(&mut result, &other);
                result
            }
        }
    )*};
}

forward_binop! {
    Add::add, AddAssign::add_assign;
    Sub::sub, SubAssign::sub_assign;
    Mul::mul, MulAssign::mul_assign;
    Div::div, DivAssign::div_assign;
    Rem::rem, RemAssign::rem_assign;
    BitAnd::bitand, BitAndAssign::bitand_assign;
    BitOr::bitor, BitOrAssign::bitor_assign;
    BitXor::bitxor, BitXorAssign::bitxor_assign;
}
