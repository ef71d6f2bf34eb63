// Copyright (c) 2025 - Cowboy AI, Inc.
//! Magnitude coder for sizes and amounts
//!
//! Drive sizes, memory and subscription amounts arrive either as decimal
//! strings (`"1024000000"`) or JSON integers. Burst-priced disk sizes can
//! exceed 64 bits, so the domain value is an arbitrary-precision integer.

use num_bigint::BigUint;
use serde::{Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

use crate::errors::{DecodeError, DecodeResult};
use crate::wire::WireNumber;

/// Largest integer an `f64` holds exactly (2^53). Integer literals past
/// `u64::MAX` reach the decoder as floats, already rounded, so anything
/// beyond this bound cannot be trusted.
const MAX_EXACT_FLOAT: f64 = 9_007_199_254_740_992.0;

/// Whether a float is a whole number that survived parsing without rounding
fn is_exact_integer(value: f64) -> bool {
    value.is_finite() && value.fract() == 0.0 && value.abs() <= MAX_EXACT_FLOAT
}

/// Non-negative arbitrary-precision integer (bytes, units, counts)
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Magnitude(BigUint);

impl Magnitude {
    /// Wrap an existing big integer
    pub fn new(value: BigUint) -> Self {
        Self(value)
    }

    /// Parse a plain decimal string (ASCII digits only, no sign or separators)
    pub fn parse(raw: &str) -> DecodeResult<Self> {
        let digits = raw.trim();
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(DecodeError::Magnitude(raw.to_string()));
        }
        BigUint::parse_bytes(digits.as_bytes(), 10)
            .map(Self)
            .ok_or_else(|| DecodeError::Magnitude(raw.to_string()))
    }

    /// Decode a wire number in any of its encodings
    pub fn from_wire(raw: &WireNumber) -> DecodeResult<Self> {
        match raw {
            WireNumber::Unsigned(value) => Ok(Self::from(*value)),
            WireNumber::Signed(value) => u64::try_from(*value)
                .map(Self::from)
                .map_err(|_| DecodeError::Magnitude(value.to_string())),
            WireNumber::Float(value) => {
                if *value >= 0.0 && is_exact_integer(*value) {
                    Self::parse(&format!("{:.0}", value))
                } else {
                    Err(DecodeError::Magnitude(value.to_string()))
                }
            }
            WireNumber::Text(text) => Self::parse(text),
        }
    }

    /// Borrow the underlying big integer
    pub fn as_biguint(&self) -> &BigUint {
        &self.0
    }

    /// Value as `u64`, when it fits
    pub fn to_u64(&self) -> Option<u64> {
        u64::try_from(&self.0).ok()
    }

    /// Whether the value is zero
    pub fn is_zero(&self) -> bool {
        self.0 == BigUint::default()
    }
}

impl From<u64> for Magnitude {
    fn from(value: u64) -> Self {
        Self(BigUint::from(value))
    }
}

impl From<BigUint> for Magnitude {
    fn from(value: BigUint) -> Self {
        Self(value)
    }
}

impl FromStr for Magnitude {
    type Err = DecodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Magnitude {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// Serialized as a decimal string, matching the wire encoding
impl Serialize for Magnitude {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0.to_string())
    }
}

/// Decode an optional magnitude; `None` stays unset
pub fn decode_magnitude(raw: Option<&WireNumber>) -> DecodeResult<Option<Magnitude>> {
    raw.map(Magnitude::from_wire).transpose()
}

/// Decode an optional bounded integer such as a CPU frequency or boot order
pub fn decode_integer<T>(field: &'static str, raw: Option<&WireNumber>) -> DecodeResult<Option<T>>
where
    T: TryFrom<i64>,
{
    let Some(raw) = raw else {
        return Ok(None);
    };

    let invalid = || DecodeError::Integer {
        field,
        value: raw.to_string(),
    };

    let wide: i64 = match raw {
        WireNumber::Unsigned(value) => i64::try_from(*value).map_err(|_| invalid())?,
        WireNumber::Signed(value) => *value,
        WireNumber::Float(value) if is_exact_integer(*value) => *value as i64,
        WireNumber::Float(_) => return Err(invalid()),
        WireNumber::Text(text) => text.trim().parse().map_err(|_| invalid())?,
    };

    T::try_from(wide).map(Some).map_err(|_| invalid())
}
