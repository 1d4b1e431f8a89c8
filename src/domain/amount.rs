use std::fmt;
use std::ops::{Add, Sub};

use serde::de::{self, DeserializeOwned, MapAccess, Visitor};
use serde::ser;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::error::DomainError;

/// Trait representing a monetary amount with fixed precision
pub trait AmountType:
    Copy
    + Ord
    + Add<Output = Self>
    + Sub<Output = Self>
    + Default
    + Send
    + Sync
    + fmt::Debug
    + fmt::Display
    + Serialize
    + DeserializeOwned
    + 'static
{
    /// Parse from decimal string (e.g., "1.5000")
    fn from_decimal_str(s: &str) -> Result<Self, DomainError>;

    /// Convert to decimal string with 4 decimal places
    fn to_decimal_string(&self) -> String;

    /// Checked addition, returns None on overflow
    fn checked_add(&self, other: Self) -> Option<Self>;

    /// Checked subtraction, returns None on underflow
    fn checked_sub(&self, other: Self) -> Option<Self>;

    /// Zero value
    fn zero() -> Self;

    /// Strictly greater than zero
    fn is_positive(&self) -> bool {
        *self > Self::zero()
    }
}

/// Fixed-point decimal representation using i64 (multiply by 10,000)
/// Represents amounts with 4 decimal places of precision
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Hash)]
pub struct FixedPoint(i64);

impl FixedPoint {
    const SCALE: i64 = 10_000;

    /// Create from raw scaled value (for internal use)
    pub const fn from_raw(raw: i64) -> Self {
        Self(raw)
    }

    /// Create from a whole number of currency units
    pub fn from_units(units: i64) -> Result<Self, DomainError> {
        units
            .checked_mul(Self::SCALE)
            .map(Self)
            .ok_or(DomainError::Overflow)
    }

    /// Create from a float, rounding to 4 decimal places
    pub fn from_f64(value: f64) -> Result<Self, DomainError> {
        if !value.is_finite() {
            return Err(DomainError::InvalidAmount);
        }

        let scaled = (value * Self::SCALE as f64).round();
        if scaled >= i64::MAX as f64 || scaled <= i64::MIN as f64 {
            return Err(DomainError::Overflow);
        }

        Ok(Self(scaled as i64))
    }

    /// Get raw scaled value
    pub const fn raw(&self) -> i64 {
        self.0
    }

    fn is_whole(&self) -> bool {
        self.0 % Self::SCALE == 0
    }

    /// Shortest exact decimal form (`12.5` rather than `12.5000`)
    fn to_json_literal(&self) -> String {
        let decimal = self.to_decimal_string();
        decimal.trim_end_matches('0').trim_end_matches('.').to_string()
    }

    /// Parse a JSON number literal exactly, falling back to float rounding for
    /// exponents or more than four decimal places
    fn from_json_literal(literal: &str) -> Result<Self, DomainError> {
        match Self::from_decimal_str(literal) {
            Ok(amount) => Ok(amount),
            Err(DomainError::Overflow) => Err(DomainError::Overflow),
            Err(_) => {
                let value: f64 = literal.parse().map_err(|_| DomainError::InvalidAmount)?;
                Self::from_f64(value)
            }
        }
    }
}

impl AmountType for FixedPoint {
    fn from_decimal_str(s: &str) -> Result<Self, DomainError> {
        let s = s.trim();

        let (is_negative, s) = match s.strip_prefix('-') {
            Some(stripped) => (true, stripped),
            None => (false, s),
        };

        let (integer_part, decimal_part) = match s.split_once('.') {
            Some((integer, decimal)) => (integer, decimal),
            None => (s, ""),
        };

        // Max 4 decimal places, digits only
        if decimal_part.len() > 4 || !decimal_part.chars().all(|c| c.is_ascii_digit()) {
            return Err(DomainError::InvalidAmount);
        }
        if !integer_part.chars().all(|c| c.is_ascii_digit()) {
            return Err(DomainError::InvalidAmount);
        }

        let integer: i64 = integer_part
            .parse()
            .map_err(|_| DomainError::InvalidAmount)?;

        let decimal: i64 = format!("{:0<4}", decimal_part)
            .parse()
            .map_err(|_| DomainError::InvalidAmount)?;

        let scaled = integer
            .checked_mul(Self::SCALE)
            .and_then(|v| v.checked_add(decimal))
            .ok_or(DomainError::Overflow)?;

        Ok(Self(if is_negative { -scaled } else { scaled }))
    }

    fn to_decimal_string(&self) -> String {
        let abs_value = self.0.unsigned_abs();
        let scale = Self::SCALE as u64;
        let sign = if self.0 < 0 { "-" } else { "" };
        format!("{}{}.{:04}", sign, abs_value / scale, abs_value % scale)
    }

    fn checked_add(&self, other: Self) -> Option<Self> {
        self.0.checked_add(other.0).map(Self)
    }

    fn checked_sub(&self, other: Self) -> Option<Self> {
        self.0.checked_sub(other.0).map(Self)
    }

    fn zero() -> Self {
        Self(0)
    }
}

impl fmt::Display for FixedPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_decimal_string())
    }
}

impl Add for FixedPoint {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self(self.0 + other.0)
    }
}

impl Sub for FixedPoint {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self(self.0 - other.0)
    }
}

// Whole amounts are written as JSON integers (`1000`), the rest as exact
// decimal literals (`12.5`), never through `f64`
impl Serialize for FixedPoint {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        if self.is_whole() {
            serializer.serialize_i64(self.0 / Self::SCALE)
        } else {
            let literal: serde_json::Number = self
                .to_json_literal()
                .parse()
                .map_err(ser::Error::custom)?;
            literal.serialize(serializer)
        }
    }
}

impl<'de> Deserialize<'de> for FixedPoint {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(FixedPointVisitor)
    }
}

struct FixedPointVisitor;

impl<'de> Visitor<'de> for FixedPointVisitor {
    type Value = FixedPoint;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a number or a decimal string")
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<FixedPoint, E> {
        FixedPoint::from_units(v).map_err(E::custom)
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<FixedPoint, E> {
        let units = i64::try_from(v).map_err(|_| E::custom(DomainError::Overflow))?;
        self.visit_i64(units)
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<FixedPoint, E> {
        FixedPoint::from_f64(v).map_err(E::custom)
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<FixedPoint, E> {
        FixedPoint::from_decimal_str(v).map_err(E::custom)
    }

    // serde_json with `arbitrary_precision` hands non-integer numbers over as a
    // one-entry map holding the literal text
    fn visit_map<M: MapAccess<'de>>(self, mut map: M) -> Result<FixedPoint, M::Error> {
        let (_, literal): (String, String) = map
            .next_entry()?
            .ok_or_else(|| de::Error::invalid_length(0, &self))?;
        FixedPoint::from_json_literal(&literal).map_err(de::Error::custom)
    }
}
