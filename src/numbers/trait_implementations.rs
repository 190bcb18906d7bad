use core::{cmp::Ordering, convert::TryFrom, fmt, hash::{Hash, Hasher}};

use super::{BigInt, Digit};
use crate::{Error, Result};

// Every native integer goes through its 128-bit sibling; canonicalization
// then drops whatever limbs the narrower type did not need.

impl From<i128> for BigInt {
    fn from(value: i128) -> Self {
        let bits = value as u128;
        let limbs = (0..4).map(|i| (bits >> (i * Digit::BITS)) as Digit).collect();
        let mut x = Self { negative: value < 0, limbs };
        x.canonicalize();
        x
    }
}

impl From<u128> for BigInt {
    fn from(value: u128) -> Self {
        let limbs = (0..4).map(|i| (value >> (i * Digit::BITS)) as Digit).collect();
        Self::from_magnitude(limbs)
    }
}

macro_rules! from_native {
    ($via:ty: $($native:ty),*) => {$(
        impl From<$native> for BigInt {
            #[inline]
            fn from(value: $native) -> Self {
                Self::from(value as $via)
            }
        }
    )*};
}

from_native!(i128: i8, i16, i32, i64, isize);
from_native!(u128: u8, u16, u32, u64, usize);

impl TryFrom<&BigInt> for i128 {
    type Error = Error;
    fn try_from(x: &BigInt) -> Result<Self> {
        if x.limbs.len() > 4 {
            return Err(Error::Overflow);
        }
        let bits = (0..4).fold(0u128, |acc, i| acc | (x.limb_at(i) as u128) << (i * Digit::BITS as usize));
        Ok(bits as i128)
    }
}

impl TryFrom<&BigInt> for u128 {
    type Error = Error;
    fn try_from(x: &BigInt) -> Result<Self> {
        // canonical form keeps a zero guard limb above a set top bit
        if x.negative || x.limbs.iter().skip(4).any(|&limb| limb != 0) {
            return Err(Error::Overflow);
        }
        Ok((0..4).fold(0u128, |acc, i| acc | (x.limb_at(i) as u128) << (i * Digit::BITS as usize)))
    }
}

macro_rules! try_into_native {
    ($via:ty: $($native:ty),*) => {$(
        impl TryFrom<&BigInt> for $native {
            type Error = Error;
            fn try_from(x: &BigInt) -> Result<Self> {
                let wide = <$via>::try_from(x)?;
                <$native>::try_from(wide).map_err(|_| Error::Overflow)
            }
        }
    )*};
}

try_into_native!(i128: i8, i16, i32, i64, isize);
try_into_native!(u128: u8, u16, u32, u64, usize);

impl Default for BigInt {
    fn default() -> Self {
        Self::ZERO
    }
}

/// Two's complement ordering.
///
/// Differing signs decide at once. Otherwise the limbs (sign-extended to a
/// common length) compare as unsigned words, from the top.
fn cmp_signed(a: &BigInt, b: &BigInt) -> Ordering {
    match (a.negative, b.negative) {
        (false, true) => return Ordering::Greater,
        (true, false) => return Ordering::Less,
        _ => {}
    }

    let l = a.limbs.len().max(b.limbs.len());
    for i in (0..l).rev() {
        match a.limb_at(i).cmp(&b.limb_at(i)) {
            Ordering::Equal => (),
            not_equal => return not_equal,
        }
    }
    Ordering::Equal
}

impl Ord for BigInt {
    fn cmp(&self, other: &Self) -> Ordering {
        cmp_signed(self, other)
    }
}

impl PartialOrd for BigInt {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(cmp_signed(self, other))
    }
}

impl PartialEq for BigInt {
    fn eq(&self, other: &Self) -> bool {
        self.negative == other.negative && self.digits() == other.digits()
    }
}

impl Eq for BigInt {}

impl Hash for BigInt {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.negative.hash(state);
        self.digits().hash(state);
    }
}

#[cfg(feature = "ct-maybe")]
impl subtle::ConstantTimeEq for BigInt {
    fn ct_eq(&self, other: &Self) -> subtle::Choice {
        use subtle::ConstantTimeEq;
        (self.negative as u8).ct_eq(&(other.negative as u8)) & self.digits().ct_eq(other.digits())
    }
}

impl fmt::Debug for BigInt {
    /// The stored limbs, most significant first.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        #[cfg(feature = "hex-debug")] {
            let bytes = self.to_be_bytes();
            f.debug_struct("BigInt")
                .field("negative", &self.negative)
                .field("limbs", &format_args!("{}", delog::hex_str!(&bytes, 4)))
                .finish()
        }

        #[cfg(not(feature = "hex-debug"))] {
            let mut limbs = self.limbs.clone();
            limbs.reverse();
            f.debug_struct("BigInt")
                .field("negative", &self.negative)
                .field("limbs", &limbs)
                .finish()
        }
    }
}
