//! Wire schema for the research-brief REST API.
//!
//! Field names mirror the backend JSON exactly; optional or
//! sometimes-omitted fields default so older briefs still decode.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Deserializer, Serialize};

/// Key points and conflicts are passed through from model output unchecked,
/// so any of their text fields may be missing or `null`.
fn lenient_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// One attributed insight extracted from a specific source.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyPoint {
    #[serde(default, deserialize_with = "lenient_string")]
    pub point: String,
    /// Expected to match a `Source::url` of the same brief. Not enforced.
    #[serde(default, deserialize_with = "lenient_string")]
    pub source_url: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub snippet: String,
}

/// Two contradictory statements on the same topic, side A and side B.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConflictingClaim {
    #[serde(default, deserialize_with = "lenient_string")]
    pub topic: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub claim_a: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub source_a: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub claim_b: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub source_b: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Source {
    pub id: i64,
    pub url: String,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub snippet: Option<String>,
}

/// A synthesized research brief as returned by `GET /api/briefs/{id}`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Brief {
    pub id: i64,
    pub title: String,
    pub summary: String,
    #[serde(default)]
    pub key_points: Vec<KeyPoint>,
    #[serde(default)]
    pub conflicting_claims: Vec<ConflictingClaim>,
    #[serde(default)]
    pub verify_checklist: Vec<String>,
    #[serde(default)]
    pub topic_tags: Vec<String>,
    pub created_at: String,
    #[serde(default)]
    pub sources: Vec<Source>,
}

/// Summary projection of [`Brief`] used by the saved-briefs list.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BriefListItem {
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub topic_tags: Vec<String>,
    pub created_at: String,
    pub source_count: usize,
}

/// Liveness report. Each field is `"ok"` when healthy, otherwise an error
/// message meant to be shown verbatim.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthStatus {
    pub backend: String,
    pub database: String,
    pub llm: String,
}

/// Body of `POST /api/briefs`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateBriefRequest {
    pub urls: Vec<String>,
}
