use core::ops::{Shl, ShlAssign, Shr, ShrAssign};

use alloc::vec::Vec;

use crate::{BigInt, Zero};
use crate::numbers::Digit;

impl ShlAssign<usize> for BigInt {
    #[inline]
    /// Multiplies by `2^bits`; the limb vector grows as needed.
    ///
    /// Note that "left" means "higher number".
    fn shl_assign(&mut self, bits: usize) {
        if self.is_zero() {
            self.canonicalize();
            return;
        }

        let n_digits = bits / Digit::BITS as usize;
        let n_bits = (bits % Digit::BITS as usize) as u32;

        let fill = self.sign_fill();
        let mut shifted = Vec::with_capacity(n_digits + self.limbs.len() + 1);
        shifted.resize(n_digits, 0);

        // one extension limb catches the bits shifted out of the top
        let mut carry = 0;
        for &elem in self.limbs.iter().chain(core::iter::once(&fill)) {
            shifted.push((elem << n_bits) | carry);
            carry = if n_bits > 0 { elem >> (Digit::BITS - n_bits) } else { 0 };
        }

        self.limbs = shifted;
        self.canonicalize();
    }
}

impl ShrAssign<usize> for BigInt {
    #[inline]
    /// Arithmetic shift, i.e. division by `2^bits` rounding toward negative infinity.
    ///
    /// Note that "right" means "lower number".
    fn shr_assign(&mut self, bits: usize) {
        let n_digits = bits / Digit::BITS as usize;
        let n_bits = (bits % Digit::BITS as usize) as u32;

        if n_digits >= self.limbs.len() {
            self.limbs = alloc::vec![self.sign_fill()];
            return;
        }

        // the limb above the top one is the sign extension
        let shifted: Vec<Digit> = (n_digits..self.limbs.len())
            .map(|i| match n_bits {
                0 => self.limbs[i],
                _ => (self.limbs[i] >> n_bits) | (self.limb_at(i + 1) << (Digit::BITS - n_bits)),
            })
            .collect();

        self.limbs = shifted;
        self.canonicalize();
    }
}

impl Shl<usize> for BigInt {
    type Output = BigInt;

    #[inline]
    fn shl(mut self, bits: usize) -> Self::Output {
        self <<= bits;
        self
    }
}

impl Shl<usize> for &BigInt {
    type Output = BigInt;

    #[inline]
    fn shl(self, bits: usize) -> Self::Output {
        let mut result = self.clone();
        result <<= bits;
        result
    }
}

impl Shr<usize> for BigInt {
    type Output = BigInt;

    #[inline]
    fn shr(mut self, bits: usize) -> Self::Output {
        self >>= bits;
        self
    }
}

impl Shr<usize> for &BigInt {
    type Output = BigInt;

    #[inline]
    fn shr(self, bits: usize) -> Self::Output {
        let mut result = self.clone();
        result >>= bits;
        result
    }
}
