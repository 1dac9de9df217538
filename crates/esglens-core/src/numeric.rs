//! Lenient numeric deserialization.
//!
//! The backend is known to deliver numeric fields as numbers, numeric
//! strings, `null`, or to omit them entirely. Aggregation treats all of
//! those as zero rather than failing the whole view, so the coercion
//! happens once, at the model boundary.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Coerce a JSON value to `f64`, mapping anything non-numeric to 0.0.
pub fn coerce_f64(value: &Value) -> f64 {
    match value {
        Value::Number(n) => n.as_f64().unwrap_or(0.0),
        Value::String(s) => s.trim().parse().unwrap_or(0.0),
        _ => 0.0,
    }
}

/// Coerce a JSON value to `u32`, mapping anything non-numeric or
/// negative to 0. Fractional counts are truncated.
pub fn coerce_u32(value: &Value) -> u32 {
    let n = coerce_f64(value);
    if n.is_finite() && n > 0.0 {
        n.min(u32::MAX as f64) as u32
    } else {
        0
    }
}

pub fn lenient_f64<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(coerce_f64(&value))
}

pub fn lenient_u32<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(coerce_u32(&value))
}
