//! Serde helper for PATCH fields that distinguish "absent" from `null`.
//!
//! Use with `#[serde(default, deserialize_with = "nullable::deserialize")]`
//! on an `Option<Option<T>>`: absent -> `None`, `null` -> `Some(None)`,
//! value -> `Some(Some(v))`.

use serde::{Deserialize, Deserializer};

pub fn deserialize<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}
