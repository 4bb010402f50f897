// src/types/mod.rs
pub mod jobs;
pub mod response;

pub use jobs::{JobDetail, JobDetailsPayload, JobSummary, LifeAtCompany, Profile, Skill};

use serde::{Deserialize, Deserializer};

/// Read a list that the API may send as `null`
pub(crate) fn null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}
