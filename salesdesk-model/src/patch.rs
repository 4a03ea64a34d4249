//! Support for partial-update payloads.
//!
//! Update requests need to tell "key absent" apart from "key present but
//! null". Fields use `Option<Option<T>>` together with
//! `#[serde(default, deserialize_with = "deserialize_some")]`: an absent key
//! stays `None`, an explicit `null` becomes `Some(None)`.

use serde::{Deserialize, Deserializer};

pub fn deserialize_some<'de, T, D>(deserializer: D) -> Result<Option<T>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    T::deserialize(deserializer).map(Some)
}
