//! Decimal text, in and out.
//!
//! Both directions work in chunks of nine decimal digits, the largest power
//! of ten that fits a [`Digit`], so that only single-digit multiplication
//! and division are needed.

use core::{convert::TryFrom, fmt::{self, Write}, str::FromStr};

use alloc::{string::String, vec::Vec};

use crate::{BigInt, Error, Result};
use crate::arithmetic::divide::div_rem_assign_digit;
use crate::numbers::Digit;

const CHUNK_DIGITS: usize = 9;
const CHUNK_RADIX: Digit = 1_000_000_000;

impl BigInt {
    /// Parses an optional `-` followed by one or more decimal digits.
    ///
    /// The whole input is validated before any arithmetic happens.
    pub fn from_decimal(text: &str) -> Result<Self> {
        let (negative, digits) = match text.strip_prefix('-') {
            Some(digits) => (true, digits),
            None => (false, text),
        };

        if digits.is_empty() {
            debug!("rejecting decimal input without digits: {:?}", text);
            return Err(Error::Empty);
        }
        if !digits.bytes().all(|byte| byte.is_ascii_digit()) {
            debug!("rejecting decimal input with non-digits: {:?}", text);
            return Err(Error::InvalidDigit);
        }

        // most significant chunk first: value = value * 10^len + chunk
        let mut value = BigInt::from(0u32);
        for group in digits.as_bytes().chunks(CHUNK_DIGITS) {
            let (chunk, scale) = group.iter().fold((0 as Digit, 1 as Digit), |(chunk, scale), &byte| {
                (chunk * 10 + (byte - b'0') as Digit, scale * 10)
            });
            value *= scale;
            value += chunk;
        }

        if negative {
            value.negate();
        }
        Ok(value)
    }
}

impl FromStr for BigInt {
    type Err = Error;

    fn from_str(text: &str) -> Result<Self> {
        Self::from_decimal(text)
    }
}

impl TryFrom<&str> for BigInt {
    type Error = Error;

    fn try_from(text: &str) -> Result<Self> {
        Self::from_decimal(text)
    }
}

impl fmt::Display for BigInt {
    /// Canonical decimal: no leading zeros, `-` for negative values, `0` for zero.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut magnitude = self.abs().limbs;

        // least significant chunk first
        let mut chunks = Vec::new();
        loop {
            while magnitude.last() == Some(&0) {
                magnitude.pop();
            }
            if magnitude.is_empty() {
                break;
            }
            chunks.push(div_rem_assign_digit(&mut magnitude, CHUNK_RADIX));
        }

        let mut text = String::with_capacity(CHUNK_DIGITS * chunks.len().max(1));
        match chunks.split_last() {
            None => text.push('0'),
            Some((leading, rest)) => {
                write!(text, "{}", leading)?;
                for chunk in rest.iter().rev() {
                    write!(text, "{:09}", chunk)?;
                }
            }
        }

        f.pad_integral(!self.negative, "", &text)
    }
}
