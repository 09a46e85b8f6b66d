use super::id::UniversityId;
use indexmap::IndexMap;
use serde::{Deserialize, Deserializer};

/// Top level of the input. Fields other than `data` are ignored.
#[derive(Debug, Deserialize)]
pub struct RawDocument {
    pub data: IndexMap<String, RawCountry>,
}

/// One country entry; `universities` may be absent.
#[derive(Debug, Default, Deserialize)]
pub struct RawCountry {
    #[serde(default)]
    pub universities: Option<Vec<RawUniversity>>,
}

/// University entry before the required fields have been checked.
///
/// The outer `Option` is `None` when the key is absent; `Some(None)` is an
/// explicit `null`.
#[derive(Debug, Deserialize)]
pub struct RawUniversity {
    #[serde(default, deserialize_with = "present")]
    pub id: Option<Option<UniversityId>>,
    #[serde(default, deserialize_with = "present")]
    pub name: Option<Option<String>>,
}

fn present<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}
