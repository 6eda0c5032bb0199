//! Integer survey codes as they arrive from JSON clients

use std::fmt;

use serde::Deserializer;
use serde::de::{self, Unexpected, Visitor};

/// Deserialize a categorical code, taking `1` and `1.0` alike.
/// A float with a fractional part or outside the `i64` range is still rejected.
pub(crate) fn integral<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    deserializer.deserialize_i64(IntegralVisitor)
}

struct IntegralVisitor;

impl Visitor<'_> for IntegralVisitor {
    type Value = i64;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("an integer code")
    }

    fn visit_i64<E: de::Error>(self, value: i64) -> Result<i64, E> {
        Ok(value)
    }

    fn visit_u64<E: de::Error>(self, value: u64) -> Result<i64, E> {
        i64::try_from(value).map_err(|_| E::invalid_value(Unexpected::Unsigned(value), &self))
    }

    fn visit_f64<E: de::Error>(self, value: f64) -> Result<i64, E> {
        // 2^63 is exactly representable, anything at or above it overflows i64
        let integral = value.is_finite() && value.fract() == 0.0;
        if integral && value.abs() < 9_223_372_036_854_775_808.0 {
            Ok(value as i64)
        } else {
            Err(E::invalid_value(Unexpected::Float(value), &self))
        }
    }
}
