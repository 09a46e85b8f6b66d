use serde::de::{self, Deserialize, Deserializer, Visitor};
use std::fmt;

/// University identifier as found in the input.
///
/// Numbers with an integral value share one key whatever their spelling, so
/// `1` and `1.0` are the same id. Strings never equal numbers: `1` and `"1"`
/// are two different identifiers.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum UniversityId {
    Integer(i64),
    /// Integral values above `i64::MAX`.
    Unsigned(u64),
    /// Bit pattern of a non-integral float; all NaNs share one pattern.
    Float(u64),
    Text(String),
}

impl UniversityId {
    pub fn from_f64(value: f64) -> Self {
        if value.is_nan() {
            return UniversityId::Float(f64::NAN.to_bits());
        }
        if value.is_finite() && value.fract() == 0.0 {
            if value >= i64::MIN as f64 && value < i64::MAX as f64 {
                return UniversityId::Integer(value as i64);
            }
            if value >= 0.0 && value < u64::MAX as f64 {
                return UniversityId::from(value as u64);
            }
        }
        UniversityId::Float(value.to_bits())
    }
}

impl fmt::Display for UniversityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UniversityId::Integer(n) => write!(f, "{n}"),
            UniversityId::Unsigned(n) => write!(f, "{n}"),
            UniversityId::Float(bits) => write!(f, "{}", f64::from_bits(*bits)),
            UniversityId::Text(s) => write!(f, "{s:?}"),
        }
    }
}

impl From<i64> for UniversityId {
    fn from(n: i64) -> Self {
        UniversityId::Integer(n)
    }
}

impl From<u64> for UniversityId {
    fn from(n: u64) -> Self {
        match i64::try_from(n) {
            Ok(n) => UniversityId::Integer(n),
            Err(_) => UniversityId::Unsigned(n),
        }
    }
}

impl From<&str> for UniversityId {
    fn from(s: &str) -> Self {
        UniversityId::Text(s.to_string())
    }
}

struct IdVisitor;

impl<'de> Visitor<'de> for IdVisitor {
    type Value = UniversityId;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a string or a number")
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Self::Value, E> {
        Ok(UniversityId::Integer(v))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Self::Value, E> {
        Ok(UniversityId::from(v))
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<Self::Value, E> {
        Ok(UniversityId::from_f64(v))
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
        Ok(UniversityId::Text(v.to_string()))
    }

    fn visit_string<E: de::Error>(self, v: String) -> Result<Self::Value, E> {
        Ok(UniversityId::Text(v))
    }
}

impl<'de> Deserialize<'de> for UniversityId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(IdVisitor)
    }
}
