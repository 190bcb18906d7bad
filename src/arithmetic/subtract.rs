use core::ops::{Neg, SubAssign};

use alloc::vec::Vec;

use crate::{BigInt, Zero};
use crate::numbers::{Digit, SignedDoubleDigit};

/// Subtract with borrow:
#[inline]
pub fn sbb(a: Digit, b: Digit, acc: &mut SignedDoubleDigit) -> Digit {
    *acc += a as SignedDoubleDigit;
    *acc -= b as SignedDoubleDigit;
    let lo = *acc as Digit;
    *acc >>= Digit::BITS;
    lo
}

// A non-zero borrow (if a.len() == b.len()) is -1, which as unsigned is
// the same as "all bits set", i.e., 0xFFFF_FFFF
pub(crate) fn sub_assign_borrow(a: &mut [Digit], b: &[Digit]) -> Digit {
    debug_assert!(a.len() >= b.len());
    let mut borrow = 0;

    let (a_lo, a_hi) = a.split_at_mut(b.len());

    for (a, b) in a_lo.iter_mut().zip(b) {
        *a = sbb(*a, *b, &mut borrow);
    }

    if borrow != 0 {
        for a in a_hi {
            *a = sbb(*a, 0, &mut borrow);
            if borrow == 0 {
                break;
            }
        }
    }

    borrow as Digit
}

impl SubAssign<&BigInt> for BigInt {
    fn sub_assign(&mut self, subtrahend: &BigInt) {
        let l = self.limbs.len().max(subtrahend.limbs.len()) + 1;
        let mut borrow = 0;
        let difference: Vec<Digit> = (0..l)
            .map(|i| sbb(self.limb_at(i), subtrahend.limb_at(i), &mut borrow))
            .collect();

        *self = BigInt::from_twos_complement(difference);
    }
}

impl SubAssign<Digit> for BigInt {
    /// Subtracts an unsigned digit.
    fn sub_assign(&mut self, subtrahend: Digit) {
        let l = self.limbs.len() + 1;
        self.ensure_length(l);
        sub_assign_borrow(&mut self.limbs, &[subtrahend]);

        self.negative = self.leading_bit();
        self.canonicalize();
    }
}

impl BigInt {
    /// Two's complement negation, `!x + 1`. Zero stays zero.
    pub(crate) fn negate(&mut self) {
        if self.is_zero() {
            self.canonicalize();
        } else {
            self.invert();
            *self += 1;
        }
    }
}

impl Neg for BigInt {
    type Output = BigInt;

    fn neg(mut self) -> Self::Output {
        self.negate();
        self
    }
}

impl Neg for &BigInt {
    type Output = BigInt;

    fn neg(self) -> Self::Output {
        -self.clone()
    }
}
