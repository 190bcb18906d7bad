use core::ops::{DivAssign, RemAssign};

use alloc::vec::Vec;
use ref_cast::RefCast;

use crate::{BigInt, Zero};
use crate::numbers::{Digit, DoubleDigit, Magnitude};
use super::add::add_assign_carry;
use super::multiply::mul_digit_assign;
use super::subtract::sub_assign_borrow;

/// Divide a two digit numerator by a one digit divisor, returns quotient and remainder:
///
/// Note: the caller must ensure that both the quotient and remainder will fit into a single digit.
/// This is _not_ true for an arbitrary numerator/denominator.
///
/// (This function also matches what the x86 divide instruction does).
///
/// REMARK: This is Knuth's operation c0), "memorizing the multiplication table in reverse."
#[inline]
pub fn div_digits(hi: Digit, lo: Digit, divisor: Digit) -> (Digit, Digit) {
    debug_assert!(hi < divisor);

    let x = ((hi as DoubleDigit) << Digit::BITS) + lo as DoubleDigit;
    let divisor = divisor as DoubleDigit;

    let q = x / divisor;
    debug_assert!(q <= Digit::MAX as _);
    let r = x % divisor;
    debug_assert!(r <= Digit::MAX as _);

    (q as Digit, r as Digit)
}

/// Divides `digits` in-place by `divisor`, returning the remainder.
pub(crate) fn div_rem_assign_digit(digits: &mut [Digit], divisor: Digit) -> Digit {
    let mut remainder = 0;

    // run down the digits, dividing each by the divisor, while carrying along the remainder
    for digit in digits.iter_mut().rev() {
        let (quotient, r) = div_digits(remainder, *digit, divisor);
        *digit = quotient;
        remainder = r;
    }

    remainder
}

/// `digits << bits` for `bits < Digit::BITS`, with the spilled digit on top.
fn shifted_left(digits: &[Digit], bits: u32) -> Vec<Digit> {
    let mut shifted = Vec::with_capacity(digits.len() + 1);
    let mut carry = 0;
    for &digit in digits {
        shifted.push((digit << bits) | carry);
        carry = if bits > 0 { digit >> (Digit::BITS - bits) } else { 0 };
    }
    shifted.push(carry);
    shifted
}

/// `digits >>= bits` for `bits < Digit::BITS`.
fn shift_right_assign(digits: &mut [Digit], bits: u32) {
    if bits == 0 {
        return;
    }
    let mut borrow = 0;
    for digit in digits.iter_mut().rev() {
        let new_borrow = *digit << (Digit::BITS - bits);
        *digit = (*digit >> bits) | borrow;
        borrow = new_borrow;
    }
}

/// "Multi-precision division of x by n".
///
/// Meaning: Return unique values `(q, r)` with `x = q*n + r`, and `0 <= r < n`,
/// where all four are unsigned little-endian digit strings.
///
/// The caller must ensure `n` is non-zero and `x >= n`.
///
/// Knuth, TAOCP vol 2 section 4.3, algorithm D(ivision).
pub(crate) fn div_rem_magnitudes(x: &[Digit], n: &[Digit]) -> (Vec<Digit>, Vec<Digit>) {
    let x = Magnitude::ref_cast(x).significant_digits();
    let n = Magnitude::ref_cast(n).significant_digits();
    debug_assert!(!n.is_empty());
    debug_assert!(Magnitude::ref_cast(x) >= Magnitude::ref_cast(n));

    if n.len() == 1 {
        let mut q = x.to_vec();
        let r = div_rem_assign_digit(&mut q, n[0]);
        return (q, alloc::vec![r]);
    }

    // D1. Normalize: shift until the divisor's leading digit has its top bit set.
    // This has no influence on `q`, and will be reverted for `r` at the end.
    let shift_bits = n[n.len() - 1].leading_zeros();
    let mut n = shifted_left(n, shift_bits);
    // the divisor's spill digit is zero by choice of shift
    n.pop();

    // we now want to calculate x/n, in the sense x = qn + r
    // in this sense, r starts at x and goes down by removing multiples of n,
    // the multipliers recorded in q
    let mut r = shifted_left(x, shift_bits);

    let l = n.len();
    let q_len = r.len() - l;
    let mut q = alloc::vec![0; q_len];
    let leading = n[l - 1] as DoubleDigit;
    let mut product = alloc::vec![0; l + 1];

    for j in (0..q_len).rev() {
        // D3. Trial digit from the two leading digits of the current window.
        // Normalization bounds its excess to at most 2.
        let top = ((r[j + l] as DoubleDigit) << Digit::BITS) | r[j + l - 1] as DoubleDigit;
        let mut trial = (top / leading).min(Digit::MAX as DoubleDigit) as Digit;

        // D4. Multiply and subtract.
        product[..l].copy_from_slice(&n);
        product[l] = mul_digit_assign(&mut product[..l], trial);
        let window = &mut r[j..=j + l];
        let mut borrow = sub_assign_borrow(window, &product);

        // D6. Add back. The window went negative (wrapped), so it turns
        // non-negative again exactly when adding `n` carries out of it.
        while borrow != 0 {
            trace!("division: correcting trial digit {} at position {}", trial, j);
            trial -= 1;
            if add_assign_carry(window, &n) != 0 {
                borrow = 0;
            }
        }

        q[j] = trial;
    }

    // D8. Unnormalize; the remainder is smaller than the divisor, hence fits in `l` digits.
    r.truncate(l);
    shift_right_assign(&mut r, shift_bits);
    (q, r)
}

impl BigInt {
    /// Truncating division: the quotient rounds toward zero, the remainder
    /// takes the sign of `self`.
    ///
    /// Returns `None` if `divisor` is zero.
    pub fn checked_div_rem(&self, divisor: &BigInt) -> Option<(BigInt, BigInt)> {
        if divisor.is_zero() {
            return None;
        }

        let x = self.abs();
        let n = divisor.abs();

        // Required or the quotient length in `div_rem_magnitudes` can underflow.
        if Magnitude::ref_cast(&x.limbs) < Magnitude::ref_cast(&n.limbs) {
            let mut remainder = self.clone();
            remainder.canonicalize();
            return Some((BigInt::zero(), remainder));
        }

        let (q, r) = div_rem_magnitudes(&x.limbs, &n.limbs);

        let mut quotient = BigInt::from_magnitude(q);
        if self.negative ^ divisor.negative {
            quotient.negate();
        }
        let mut remainder = BigInt::from_magnitude(r);
        if self.negative {
            remainder.negate();
        }
        Some((quotient, remainder))
    }

    /// Truncating division and remainder at once.
    ///
    /// # Panics
    ///
    /// If `divisor` is zero, like the native integers.
    pub fn div_rem(&self, divisor: &BigInt) -> (BigInt, BigInt) {
        match self.checked_div_rem(divisor) {
            Some(quotient_remainder) => quotient_remainder,
            None => panic!("attempt to divide by zero"),
        }
    }

    pub fn checked_div(&self, divisor: &BigInt) -> Option<BigInt> {
        self.checked_div_rem(divisor).map(|(quotient, _)| quotient)
    }

    pub fn checked_rem(&self, divisor: &BigInt) -> Option<BigInt> {
        self.checked_div_rem(divisor).map(|(_, remainder)| remainder)
    }
}

impl DivAssign<&BigInt> for BigInt {
    fn div_assign(&mut self, divisor: &BigInt) {
        let (quotient, _) = self.div_rem(divisor);
        *self = quotient;
    }
}

impl RemAssign<&BigInt> for BigInt {
    fn rem_assign(&mut self, divisor: &BigInt) {
        let (_, remainder) = self.div_rem(divisor);
        *self = remainder;
    }
}
