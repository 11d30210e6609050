use serde::{Deserialize, Serialize};

/// A single entry in the resource library (article, course, book, ...).
///
/// Immutable once loaded; owned by `ResourceCatalog`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Resource {
    pub id: String,
    pub title: String,
    #[serde(rename = "type")]
    pub resource_type: String,
    pub category: String,
    pub description: String,
    pub url: String,
    pub tags: Vec<String>,
}
