use serde::{Deserialize, Deserializer, Serialize};

/// A generated career roadmap.
///
/// Produced by parsing generation output, then held by `RoadmapStore` for the
/// lifetime of the process.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Roadmap {
    pub id: String,
    pub goal: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeline: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weaknesses: Option<Vec<String>>,
    pub milestones: Vec<Milestone>,
    pub generated_at: String,
}

/// One stage of a roadmap. Only `title` is mandatory in generated output;
/// other fields accept a missing key or `null`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Milestone {
    #[serde(default, deserialize_with = "null_as_default")]
    pub id: String,
    pub title: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub tasks: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub resource_links: Vec<ResourceLink>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub estimated_duration: String,
}

/// A citation of a catalog resource. `resource_id` must exist in the catalog
/// once the roadmap has been ingested; a link without one is dropped then.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceLink {
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub url: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub resource_id: String,
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
