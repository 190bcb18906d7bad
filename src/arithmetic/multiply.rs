use core::ops::MulAssign;

use alloc::vec::Vec;

use crate::BigInt;
use crate::numbers::{Digit, DoubleDigit};

/// `a + b * c + carry`, as low digit and new carry.
///
/// Can't overflow: `(2^w - 1) + (2^w - 1)^2 + (2^w - 1) < 2^(2w)`.
#[inline]
pub fn mac_with_carry(a: Digit, b: Digit, c: Digit, acc: &mut DoubleDigit) -> Digit {
    *acc += a as DoubleDigit;
    *acc += (b as DoubleDigit) * (c as DoubleDigit);
    let lo = *acc as Digit;
    *acc >>= Digit::BITS;
    lo
}

/// a *= factor, returning the digit that spills out of the top.
pub(crate) fn mul_digit_assign(a: &mut [Digit], factor: Digit) -> Digit {
    let mut carry = 0;
    for a in a.iter_mut() {
        *a = mac_with_carry(0, *a, factor, &mut carry);
    }
    carry as Digit
}

/// Schoolbook product of two unsigned digit strings, `a.len() + b.len()` digits long.
pub(crate) fn mul_magnitudes(a: &[Digit], b: &[Digit]) -> Vec<Digit> {
    let mut product = alloc::vec![0; a.len() + b.len()];

    for (i, &a) in a.iter().enumerate() {
        if a == 0 {
            continue;
        }
        let mut carry = 0;
        for (j, &b) in b.iter().enumerate() {
            product[i + j] = mac_with_carry(product[i + j], a, b, &mut carry);
        }
        // row `i` is the first to reach this digit
        product[i + b.len()] = carry as Digit;
    }
    product
}

impl MulAssign<&BigInt> for BigInt {
    /// Multiplies magnitudes, then fixes up the sign.
    fn mul_assign(&mut self, factor: &BigInt) {
        let negative = self.negative ^ factor.negative;
        let a = self.abs();
        let b = factor.abs();

        let mut product = BigInt::from_magnitude(mul_magnitudes(&a.limbs, &b.limbs));
        if negative {
            product.negate();
        }
        *self = product;
    }
}

impl MulAssign<Digit> for BigInt {
    /// Multiplies by an unsigned digit.
    ///
    /// After sign extension by one limb the product fits, so the wrapping
    /// unsigned multiplication is exact for negative values too.
    fn mul_assign(&mut self, factor: Digit) {
        let l = self.limbs.len() + 1;
        self.ensure_length(l);
        mul_digit_assign(&mut self.limbs, factor);

        self.negative = self.leading_bit();
        self.canonicalize();
    }
}

#[cfg(test)]
pub(crate) mod test {
    use super::*;

    pub const N1: Digit = -1i64 as Digit;
    pub const N2: Digit = -2i64 as Digit;
    pub const M: Digit = Digit::MAX;

    pub const MUL_TRIPLES: &'static [(&'static [Digit], &'static [Digit], &'static [Digit])] = &[
        (&[], &[], &[]),
        (&[], &[1], &[]),
        (&[2], &[], &[]),
        (&[1], &[1], &[1]),
        (&[2], &[3], &[6]),
        (&[1], &[1, 1, 1], &[1, 1, 1]),
        (&[1, 2, 3], &[3], &[3, 6, 9]),
        (&[1, 1, 1], &[N1], &[N1, N1, N1]),
        (&[1, 2, 3], &[N1], &[N1, N2, N2, 2]),
        (&[1, 2, 3, 4], &[N1], &[N1, N2, N2, N2, 3]),
        (&[N1], &[N1], &[1, N2]),
        (&[N1, N1], &[N1], &[1, N1, N2]),
        (&[N1, N1, N1], &[N1], &[1, N1, N1, N2]),
        (&[N1, N1, N1, N1], &[N1], &[1, N1, N1, N1, N2]),
        (&[M / 2 + 1], &[2], &[0, 1]),
        (&[0, M / 2 + 1], &[2], &[0, 0, 1]),
        (&[1, 2], &[1, 2, 3], &[1, 4, 7, 6]),
        (&[N1, N1], &[N1, N1, N1], &[1, 0, N1, N2, N1]),
        (&[N1, N1, N1], &[N1, N1, N1, N1], &[1, 0, 0, N1, N2, N1, N1]),
        (&[0, 0, 1], &[1, 2, 3], &[0, 0, 1, 2, 3]),
        (&[0, 0, 1], &[0, 0, 0, 1], &[0, 0, 0, 0, 0, 1]),
    ];

    #[test]
    fn magnitudes() {
        for &(a, b, c) in MUL_TRIPLES {
            let product = mul_magnitudes(a, b);
            assert_eq!(product.len(), a.len() + b.len());
            // compare up to trailing zero padding
            assert_eq!(BigInt::from_magnitude(product), BigInt::from_magnitude(c.to_vec()));
        }
    }

    #[test]
    fn mul() {
        for &(a, b, c) in MUL_TRIPLES {
            let a = BigInt::from_magnitude(a.to_vec());
            let b = BigInt::from_magnitude(b.to_vec());
            let c = BigInt::from_magnitude(c.to_vec());

            assert_op!(a * b == c);
            assert_op!(b * a == c);
            assert_assign_op!(a *= b == c);

            // all sign combinations
            let minus_a = -&a;
            let minus_b = -&b;
            let minus_c = -&c;
            assert_op!(minus_a * b == minus_c);
            assert_op!(a * minus_b == minus_c);
            assert_op!(minus_a * minus_b == c);
        }
    }

    #[test]
    fn mul_native() {
        let cases: &[(i64, i64)] = &[
            (0, -1),
            (-1, -1),
            (i64::MIN, -1),
            (i64::MIN, i64::MIN),
            (i64::MAX, i64::MIN),
            (i32::MIN as i64, 2),
            (-3, 1 << 40),
        ];
        for &(a, b) in cases {
            let expected = BigInt::from(a as i128 * b as i128);
            let (a, b) = (BigInt::from(a), BigInt::from(b));
            assert_op!(a * b == expected);
        }
    }

    #[test]
    fn mul_digit() {
        let mut x = BigInt::from(-1i32);
        x *= M;
        assert_eq!(x, BigInt::from(-(M as i64)));

        let mut x = BigInt::from(i64::MIN);
        x *= 10;
        assert_eq!(x, BigInt::from(i64::MIN as i128 * 10));

        let mut x = BigInt::from(u64::MAX);
        x *= M;
        assert_eq!(x, BigInt::from(u64::MAX as u128 * M as u128));

        let mut x = BigInt::from(-7i32);
        x *= 0;
        assert_eq!(x, BigInt::ZERO);

        let mut x = BigInt::ZERO;
        x *= 3;
        assert_eq!(x.limbs, [0]);
    }

    #[test]
    fn mul_zero() {
        assert_eq!((BigInt::ZERO * BigInt::ZERO).limbs, [0]);
        assert_eq!((BigInt::ZERO * BigInt::from(-5i8)).limbs, [0]);
        assert_eq!((BigInt::from(1u128 << 100) * BigInt::ZERO).limbs, [0]);
        assert_eq!((BigInt::from(-1i8) * BigInt::from(0u8)).limbs, [0]);
    }
}
