//! Helpers for partial update payloads.

use serde::{Deserialize, Deserializer};

/// Deserializer for `Option<Option<T>>` update fields.
///
/// A missing field stays `None` (via `#[serde(default)]`), an explicit
/// `null` becomes `Some(None)` and clears the column.
pub fn nullable<'de, T, D>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}
