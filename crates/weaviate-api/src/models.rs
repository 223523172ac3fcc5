use std::fmt;

use serde::{Deserialize, Deserializer};

// --- Response types for GET /v1/nodes ---

/// Body of `GET /v1/nodes`: one entry per cluster member, in the order the
/// server reported them.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ClusterReport {
    pub nodes: Vec<NodeStatus>,
}

/// One cluster member. Only `status` is required; the informational fields
/// accept `null` as well as a missing key.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NodeStatus {
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    pub status: NodeHealth,
    #[serde(default, deserialize_with = "null_as_default")]
    pub version: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub git_hash: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub stats: NodeStats,
    #[serde(default, deserialize_with = "null_as_default")]
    pub shards: Vec<ShardInfo>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NodeStats {
    #[serde(default, deserialize_with = "null_as_default")]
    pub shard_count: i64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub object_count: i64,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShardInfo {
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub class: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub object_count: i64,
}

/// Treat an explicit `null` the same as a missing key.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Node status as reported by Weaviate.
///
/// Matching is exact and case-sensitive. Anything outside the documented
/// vocabulary is kept verbatim in [`NodeHealth::Other`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize)]
#[serde(from = "String")]
pub enum NodeHealth {
    Healthy,
    Unhealthy,
    Unavailable,
    Other(String),
}

impl NodeHealth {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Healthy => "HEALTHY",
            Self::Unhealthy => "UNHEALTHY",
            Self::Unavailable => "UNAVAILABLE",
            Self::Other(s) => s,
        }
    }
}

impl From<&str> for NodeHealth {
    fn from(s: &str) -> Self {
        match s {
            "HEALTHY" => Self::Healthy,
            "UNHEALTHY" => Self::Unhealthy,
            "UNAVAILABLE" => Self::Unavailable,
            other => Self::Other(other.to_string()),
        }
    }
}

impl From<String> for NodeHealth {
    fn from(s: String) -> Self {
        match s.as_str() {
            "HEALTHY" | "UNHEALTHY" | "UNAVAILABLE" => Self::from(s.as_str()),
            _ => Self::Other(s),
        }
    }
}

impl fmt::Display for NodeHealth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
