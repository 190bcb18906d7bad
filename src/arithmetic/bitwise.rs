use core::ops::{BitAndAssign, BitOrAssign, BitXorAssign, Not};

use alloc::vec::Vec;

use crate::BigInt;
use crate::numbers::Digit;

impl BigInt {
    /// Applies `op` limb by limb, both operands sign-extended to a common length.
    ///
    /// Sign extension beyond that length commutes with any bitwise `op`,
    /// so the infinite two's complement semantics come for free.
    fn zip_limbs_with(&mut self, other: &BigInt, op: impl Fn(Digit, Digit) -> Digit) {
        let l = self.limbs.len().max(other.limbs.len()) + 1;
        let limbs: Vec<Digit> = (0..l)
            .map(|i| op(self.limb_at(i), other.limb_at(i)))
            .collect();

        *self = BigInt::from_twos_complement(limbs);
    }

    /// Bitwise NOT, i.e. `-self - 1`.
    pub(crate) fn invert(&mut self) {
        self.negative = !self.negative;
        for limb in self.limbs.iter_mut() {
            *limb = !*limb;
        }
        self.canonicalize();
    }
}

impl BitAndAssign<&BigInt> for BigInt {
    fn bitand_assign(&mut self, other: &BigInt) {
        self.zip_limbs_with(other, |a, b| a & b);
    }
}

impl BitOrAssign<&BigInt> for BigInt {
    fn bitor_assign(&mut self, other: &BigInt) {
        self.zip_limbs_with(other, |a, b| a | b);
    }
}

impl BitXorAssign<&BigInt> for BigInt {
    fn bitxor_assign(&mut self, other: &BigInt) {
        self.zip_limbs_with(other, |a, b| a ^ b);
    }
}

impl Not for BigInt {
    type Output = BigInt;

    fn not(mut self) -> Self::Output {
        self.invert();
        self
    }
}

impl Not for &BigInt {
    type Output = BigInt;

    fn not(self) -> Self::Output {
        !self.clone()
    }
}
