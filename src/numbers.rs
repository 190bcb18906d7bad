use core::cmp::Ordering;

use alloc::vec::Vec;
use ref_cast::RefCast;
use zeroize::Zeroize;

mod trait_implementations;

/// A word on the machine. [`BigInt`] is composed of many digits (limbs).
pub type Digit = u32;
/// Unsigned type with twice as many bits as [`Digit`].
pub(crate) type DoubleDigit = u64;
/// Signed type with twice as many bits as [`Digit`].
pub(crate) type SignedDoubleDigit = i64;

/// Arbitrary-precision signed integer.
///
/// Internal representation is little-endian two's complement: the value is
/// `limbs` read as one long word, sign-extended to infinity by `negative`.
///
/// Every operation leaves `self` canonical:
/// - the top bit of the last limb equals `negative`,
/// - no further limb can be dropped without breaking the above.
///
/// The one exception is the empty limb vector of [`BigInt::ZERO`]
/// (and `Default`, and a zeroized value), which reads as zero everywhere.
/// Operations never return it: their zero is `[0]`.
#[derive(Clone, Zeroize)]
pub struct BigInt {
    pub(crate) negative: bool,
    pub(crate) limbs: Vec<Digit>,
}

/// Little-endian digits read as a non-negative number, ignoring leading zeros.
#[derive(RefCast)]
#[repr(transparent)]
pub(crate) struct Magnitude(pub(crate) [Digit]);

impl Magnitude {
    /// 0 digits if zero, else up to and including the last non-zero digit.
    pub fn significant_digits(&self) -> &[Digit] {
        let l = self.0.iter()
            .rposition(|&x| x != 0)
            .map(|i| i + 1)
            .unwrap_or(0);
        &self.0[..l]
    }
}

// Since we store little-endian, comparison needs to start at the last
// digit, instead of at the first as the default ordering on slices would.
impl Ord for Magnitude {
    fn cmp(&self, other: &Self) -> Ordering {
        let m = self.significant_digits();
        let n = other.significant_digits();
        match m.len().cmp(&n.len()) {
            Ordering::Equal => {}
            not_equal => return not_equal,
        }
        m.iter().rev().cmp(n.iter().rev())
    }
}

impl PartialOrd for Magnitude {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Magnitude {
    fn eq(&self, other: &Self) -> bool {
        self.significant_digits() == other.significant_digits()
    }
}

impl Eq for Magnitude {}

// representation and its invariant
impl BigInt {
    pub const ZERO: Self = Self { negative: false, limbs: Vec::new() };

    /// The value of every limb beyond the stored ones.
    #[inline]
    pub(crate) fn sign_fill(&self) -> Digit {
        if self.negative { Digit::MAX } else { 0 }
    }

    /// Stored limb `i`, or its sign extension.
    #[inline]
    pub(crate) fn limb_at(&self, i: usize) -> Digit {
        self.limbs.get(i).copied().unwrap_or_else(|| self.sign_fill())
    }

    /// Sign-extends to at least `n` limbs; never shrinks.
    pub(crate) fn ensure_length(&mut self, n: usize) {
        if self.limbs.len() < n {
            let fill = self.sign_fill();
            self.limbs.resize(n, fill);
        }
    }

    #[inline]
    pub(crate) fn leading_bit(&self) -> bool {
        self.limbs.last()
            .map(|&x| x >> (Digit::BITS - 1) == 1)
            .unwrap_or(false)
    }

    /// Restores the canonical form after limb-level surgery.
    ///
    /// `negative` is trusted, the limbs are trimmed (or extended by one)
    /// to agree with it. At least one limb remains.
    pub(crate) fn canonicalize(&mut self) {
        let fill = self.sign_fill();
        while self.limbs.len() > 1 && self.limbs.last() == Some(&fill) {
            self.limbs.pop();
        }
        if self.limbs.is_empty() || self.leading_bit() != self.negative {
            self.limbs.push(fill);
        }
    }

    /// Takes the sign from the top bit of `limbs`, then canonicalizes.
    pub(crate) fn from_twos_complement(limbs: Vec<Digit>) -> Self {
        let mut x = Self { negative: false, limbs };
        x.negative = x.leading_bit();
        x.canonicalize();
        x
    }

    /// Reads `limbs` as a non-negative number.
    pub(crate) fn from_magnitude(limbs: Vec<Digit>) -> Self {
        let mut x = Self { negative: false, limbs };
        x.canonicalize();
        x
    }

    /// Canonical limbs, with zero always as `[0]`.
    pub(crate) fn digits(&self) -> &[Digit] {
        if self.limbs.is_empty() { &[0] } else { &self.limbs }
    }
}

impl BigInt {
    /// Big-endian bytes, read as an unsigned number.
    pub fn from_be_bytes(bytes: &[u8]) -> Self {
        let limbs = bytes
            .rchunks(4)
            .map(|chunk| chunk.iter().fold(0, |acc, &byte| (acc << 8) | byte as Digit))
            .collect();
        Self::from_magnitude(limbs)
    }

    /// Stored limbs as big-endian bytes (two's complement, not trimmed).
    #[cfg(feature = "hex-debug")]
    pub(crate) fn to_be_bytes(&self) -> Vec<u8> {
        self.limbs.iter().rev().flat_map(|x| x.to_be_bytes()).collect()
    }

    pub fn is_negative(&self) -> bool {
        self.negative
    }

    /// `-1`, `0` or `1`.
    pub fn signum(&self) -> Self {
        if self.negative {
            Self::from(-1i32)
        } else if self.is_zero() {
            Self::zero()
        } else {
            Self::one()
        }
    }

    pub fn abs(&self) -> Self {
        let mut x = self.clone();
        if x.negative {
            x.negate();
        } else {
            x.canonicalize();
        }
        x
    }

    /// `++x`
    pub fn increment(&mut self) -> &mut Self {
        *self += 1;
        self
    }

    /// `--x`
    pub fn decrement(&mut self) -> &mut Self {
        *self -= 1;
        self
    }
}

pub trait One: Sized + PartialEq {
    fn one() -> Self;

    fn is_one(&self) -> bool { *self == Self::one() }
    fn set_one(&mut self) { *self = Self::one(); }
}

pub trait Zero: Sized + PartialEq {
    fn zero() -> Self;

    fn is_zero(&self) -> bool { *self == Self::zero() }
    fn set_zero(&mut self) { *self = Self::zero(); }
}

impl One for BigInt {
    fn one() -> Self {
        Self { negative: false, limbs: alloc::vec![1] }
    }
}

impl Zero for BigInt {
    fn zero() -> Self {
        Self { negative: false, limbs: alloc::vec![0] }
    }

    fn is_zero(&self) -> bool {
        !self.negative && self.limbs.iter().all(|&x| x == 0)
    }
}
