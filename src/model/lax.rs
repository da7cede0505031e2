//! Lenient field deserializers
//!
//! Open-data exports are not consistent about numeric types: integer
//! columns sometimes arrive as floats (`652000.0`) or strings (`"12"`), and
//! some identifiers arrive as numbers.

use serde::de::Error;
use serde::{Deserialize, Deserializer};

#[derive(Deserialize)]
#[serde(untagged)]
enum LaxNumber {
    Int(i64),
    Float(f64),
    Text(String),
}

/// Integral float inside the i64 range
///
/// `i64::MAX as f64` rounds up to 2^63, hence the strict upper bound.
fn float_to_i64(v: f64) -> Option<i64> {
    if v.is_finite() && v.fract() == 0.0 && v >= i64::MIN as f64 && v < i64::MAX as f64 {
        Some(v as i64)
    } else {
        None
    }
}

impl LaxNumber {
    fn into_i64(self) -> Result<i64, String> {
        match self {
            LaxNumber::Int(v) => Ok(v),
            LaxNumber::Float(v) => {
                float_to_i64(v).ok_or_else(|| format!("expected an integer, got {}", v))
            }
            LaxNumber::Text(s) => {
                let trimmed = s.trim();
                if let Ok(v) = trimmed.parse::<i64>() {
                    return Ok(v);
                }
                trimmed
                    .parse::<f64>()
                    .ok()
                    .and_then(float_to_i64)
                    .ok_or_else(|| format!("expected an integer, got '{}'", s))
            }
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum LaxString {
    Text(String),
    Int(i64),
    UInt(u64),
}

/// Integer from a JSON integer, an integral float or a numeric string
pub fn integer<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    LaxNumber::deserialize(deserializer)?.into_i64().map_err(D::Error::custom)
}

/// Like [`integer`], accepting `null`
pub fn optional_integer<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<LaxNumber>::deserialize(deserializer)? {
        None => Ok(None),
        Some(value) => value.into_i64().map(Some).map_err(D::Error::custom),
    }
}

/// String from a JSON string or integer
pub fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match LaxString::deserialize(deserializer)? {
        LaxString::Text(s) => s,
        LaxString::Int(v) => v.to_string(),
        LaxString::UInt(v) => v.to_string(),
    })
}
