//! Helpers for presenting monetary amounts.

use serde::Serializer;

/// Round an amount to whole cents.
pub fn round_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// `serialize_with` adapter that emits amounts rounded to two decimals while
/// keeping full precision in memory.
pub fn serialize_cents<S>(value: &f64, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_f64(round_cents(*value))
}
