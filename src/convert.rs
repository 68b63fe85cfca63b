//! Decimal and hex string conversion.
//!
//! Decimal: optional leading `-`, then ASCII digits. Hex: optional `-`, an
//! optional case-insensitive `0x` prefix, then hex digits consumed in 16-digit
//! limb groups from the tail. Whitespace is trimmed and interior spaces are
//! removed before parsing. Output hex is lower case; zero prints as `0x00`.

use std::fmt;
use std::str::FromStr;

use crate::bigint::BigInt;
use crate::error::Error;

impl<const LIMBS: usize> BigInt<LIMBS> {
    /// Parse a decimal string.
    ///
    /// The accumulator must stay non-negative throughout the Horner walk; the
    /// sign bit flipping on is how overflow is detected.
    pub fn from_decimal(text: &str) -> Result<Self, Error> {
        let cleaned: String = text.trim().chars().filter(|&c| c != ' ').collect();
        let (negative, digits) = match cleaned.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, cleaned.as_str()),
        };
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(Error::InvalidFormat);
        }

        let mut result = Self::ZERO;
        let mut place = Self::ONE;
        for digit in digits.bytes().rev() {
            result += place * (digit - b'0') as i64;
            if result.is_negative() {
                return Err(Error::Overflow);
            }
            place *= 10;
        }

        Ok(if negative { -result } else { result })
    }

    /// Parse a hex string, with or without a `0x`/`0X` prefix.
    pub fn from_hex(text: &str) -> Result<Self, Error> {
        let cleaned: String = text.trim().chars().filter(|&c| c != ' ').collect();
        let (negative, rest) = match cleaned.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, cleaned.as_str()),
        };
        let digits = rest
            .strip_prefix("0x")
            .or_else(|| rest.strip_prefix("0X"))
            .unwrap_or(rest);
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(Error::InvalidFormat);
        }

        // Consume 16-digit groups from the tail into successive limbs.
        let mut result = Self::ZERO;
        let mut index = 0;
        let mut end = digits.len();
        while end > 0 {
            if index == LIMBS {
                return Err(Error::Overflow);
            }
            let start = end.saturating_sub(16);
            result.limbs[index] =
                u64::from_str_radix(&digits[start..end], 16).map_err(|_| Error::InvalidFormat)?;
            index += 1;
            end = start;
        }
        if result.is_negative() {
            return Err(Error::Overflow);
        }

        Ok(if negative { -result } else { result })
    }

    /// Decimal rendering of the value.
    pub fn to_decimal_string(&self) -> String {
        if self.is_zero() {
            return "0".to_string();
        }

        let ten = Self::from(10);
        let mut out = String::new();
        let mut value = self.abs();
        while value > Self::ZERO {
            let (quotient, remainder) = value.div_rem_nonzero(&ten);
            out.insert(0, (b'0' + remainder.low_limb() as u8) as char);
            value = quotient;
        }
        if self.is_negative() {
            out.insert(0, '-');
        }
        out
    }

    /// Hex rendering: `[-]0x` then the magnitude, leading zero limbs
    /// suppressed, inner limbs zero-padded to 16 digits.
    pub fn to_hex_string(&self) -> String {
        use fmt::Write;

        let mut out = String::new();
        let mut value = *self;
        if value.is_negative() {
            out.push('-');
            value = -value;
        }
        out.push_str("0x");
        let mut printing = false;
        for i in (0..LIMBS).rev() {
            if !printing && value.limbs[i] == 0 {
                continue;
            }
            if printing {
                let _ = write!(out, "{:016x}", value.limbs[i]);
            } else {
                let _ = write!(out, "{:x}", value.limbs[i]);
            }
            printing = true;
        }
        if !printing {
            out.push_str("00");
        }
        out
    }

    /// Raw limb dump, most significant first.
    pub fn to_word_string(&self) -> String {
        let words: Vec<String> = self
            .limbs
            .iter()
            .rev()
            .map(|limb| format!("0x{limb:016x}"))
            .collect();
        words.join(" ")
    }
}

impl<const LIMBS: usize> FromStr for BigInt<LIMBS> {
    type Err = Error;

    /// Parse either radix; hex is detected by a `0x`/`-0x` prefix.
    fn from_str(text: &str) -> Result<Self, Self::Err> {
        let trimmed = text.trim();
        let unsigned = trimmed.strip_prefix('-').unwrap_or(trimmed).as_bytes();
        if unsigned.len() >= 2 && unsigned[0] == b'0' && (unsigned[1] | 0x20) == b'x' {
            Self::from_hex(trimmed)
        } else {
            Self::from_decimal(trimmed)
        }
    }
}

impl<const LIMBS: usize> fmt::Display for BigInt<LIMBS> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_decimal_string())
    }
}
