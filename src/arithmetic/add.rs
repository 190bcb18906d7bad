use core::ops::AddAssign;

use alloc::vec::Vec;

use crate::BigInt;
use crate::numbers::{Digit, DoubleDigit};

//
// from num-bigint
//

// Add with carry:
#[inline]
pub fn adc(a: Digit, b: Digit, acc: &mut DoubleDigit) -> Digit {
    *acc += a as DoubleDigit;
    *acc += b as DoubleDigit;
    let lo = *acc as Digit;
    *acc >>= Digit::BITS;
    lo
}

/// Two argument addition of raw slices:
/// a += b
///
/// The caller _must_ ensure that a is big enough to store the result, or
/// handle the returned carry.
pub(crate) fn add_assign_carry(a: &mut [Digit], b: &[Digit]) -> Digit {
    debug_assert!(a.len() >= b.len());

    let mut carry = 0;
    let (a_lo, a_hi) = a.split_at_mut(b.len());

    for (a, b) in a_lo.iter_mut().zip(b) {
        *a = adc(*a, *b, &mut carry);
    }

    if carry != 0 {
        for a in a_hi {
            *a = adc(*a, 0, &mut carry);
            if carry == 0 {
                break;
            }
        }
    }

    carry as Digit
}

impl AddAssign<&BigInt> for BigInt {
    /// One limb more than the longer summand, so the carry can't get lost.
    fn add_assign(&mut self, summand: &BigInt) {
        let l = self.limbs.len().max(summand.limbs.len()) + 1;
        let mut carry = 0;
        let sum: Vec<Digit> = (0..l)
            .map(|i| adc(self.limb_at(i), summand.limb_at(i), &mut carry))
            .collect();

        *self = BigInt::from_twos_complement(sum);
    }
}

impl AddAssign<Digit> for BigInt {
    /// Adds an unsigned digit.
    fn add_assign(&mut self, summand: Digit) {
        let l = self.limbs.len() + 1;
        self.ensure_length(l);
        // a carry out of the extension limb is exactly the two's complement wrap
        add_assign_carry(&mut self.limbs, &[summand]);

        self.negative = self.leading_bit();
        self.canonicalize();
    }
}
