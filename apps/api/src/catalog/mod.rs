//! Resource Catalog — the immutable resource library loaded once at startup.
//!
//! Built in `main` and shared through `AppState` as an `Arc<ResourceCatalog>`.
//! There are no update or delete operations.

pub mod handlers;
pub mod ranker;

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::{info, warn};

use crate::catalog::ranker::{rank, top_resources, ScoredResource};
use crate::models::Resource;

/// Default data set compiled into the binary.
const EMBEDDED_RESOURCES: &str = include_str!("../../data/resources.json");

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Failed to read resource catalog {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Resource catalog is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Duplicate resource id in catalog: {0}")]
    DuplicateId(String),
}

/// Where the catalog comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogSource {
    Embedded,
    File(PathBuf),
}

impl CatalogSource {
    pub fn from_optional_path(path: Option<PathBuf>) -> Self {
        path.map(CatalogSource::File)
            .unwrap_or(CatalogSource::Embedded)
    }
}

/// The ordered, read-only resource library plus an id index.
#[derive(Debug, Clone)]
pub struct ResourceCatalog {
    resources: Vec<Resource>,
    by_id: HashMap<String, usize>,
}

impl ResourceCatalog {
    /// Loads the catalog from `source`. Loading the same source again yields an
    /// identical catalog.
    pub fn load(source: &CatalogSource) -> Result<Self, CatalogError> {
        let catalog = match source {
            CatalogSource::Embedded => Self::from_json_str(EMBEDDED_RESOURCES)?,
            CatalogSource::File(path) => Self::from_path(path)?,
        };
        info!(
            "Resource catalog loaded: {} resources ({:?})",
            catalog.len(),
            source
        );
        if catalog.is_empty() {
            warn!("Resource catalog is empty; generated roadmaps will cite no library resources");
        }
        Ok(catalog)
    }

    pub fn from_path(path: &Path) -> Result<Self, CatalogError> {
        let raw = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&raw)
    }

    pub fn from_json_str(raw: &str) -> Result<Self, CatalogError> {
        let resources: Vec<Resource> = serde_json::from_str(raw)?;
        Self::from_resources(resources)
    }

    /// Builds the id index. Rejects duplicate ids so `get_by_id` is unambiguous.
    pub fn from_resources(resources: Vec<Resource>) -> Result<Self, CatalogError> {
        let mut by_id = HashMap::with_capacity(resources.len());
        for (idx, resource) in resources.iter().enumerate() {
            if by_id.insert(resource.id.clone(), idx).is_some() {
                return Err(CatalogError::DuplicateId(resource.id.clone()));
            }
        }
        Ok(Self { resources, by_id })
    }

    /// All resources, in load order.
    pub fn get_all(&self) -> &[Resource] {
        &self.resources
    }

    pub fn get_by_id(&self, id: &str) -> Option<&Resource> {
        self.by_id.get(id).map(|&idx| &self.resources[idx])
    }

    pub fn contains(&self, id: &str) -> bool {
        self.by_id.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.resources.len()
    }

    pub fn is_empty(&self) -> bool {
        self.resources.is_empty()
    }

    /// Top `k` resources for `query`, without scores.
    pub fn search(&self, query: &str, k: usize) -> Vec<&Resource> {
        top_resources(&self.resources, query, k)
    }

    /// Top `k` resources for `query`, with scores.
    pub fn search_scored(&self, query: &str, k: usize) -> Vec<ScoredResource<'_>> {
        rank(&self.resources, query, k)
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const TWO_RESOURCES: &str = r#"[
        {"id": "r1", "title": "System Design Basics", "type": "article", "category": "cs",
         "description": "", "url": "https://example.com/r1", "tags": ["design"]},
        {"id": "r2", "title": "Cooking 101", "type": "course", "category": "food",
         "description": "design your kitchen", "url": "https://example.com/r2", "tags": []}
    ]"#;

    #[test]
    fn test_embedded_catalog_loads() {
        let catalog = ResourceCatalog::load(&CatalogSource::Embedded).unwrap();
        assert!(!catalog.is_empty());
        assert!(catalog.get_by_id("res_011").is_some());
    }

    #[test]
    fn test_loading_twice_yields_same_resources() {
        let first = ResourceCatalog::load(&CatalogSource::Embedded).unwrap();
        let second = ResourceCatalog::load(&CatalogSource::Embedded).unwrap();
        assert_eq!(first.get_all(), second.get_all());
    }

    #[test]
    fn test_get_all_preserves_source_order() {
        let catalog = ResourceCatalog::from_json_str(TWO_RESOURCES).unwrap();
        let ids: Vec<_> = catalog.get_all().iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["r1", "r2"]);
    }

    #[test]
    fn test_get_by_id_hit_and_miss() {
        let catalog = ResourceCatalog::from_json_str(TWO_RESOURCES).unwrap();
        assert_eq!(catalog.get_by_id("r2").unwrap().title, "Cooking 101");
        assert!(catalog.get_by_id("r3").is_none());
        assert!(catalog.contains("r1"));
        assert!(!catalog.contains("R1"));
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        let raw = r#"[
            {"id": "dup", "title": "A", "type": "t", "category": "c", "description": "", "url": "", "tags": []},
            {"id": "dup", "title": "B", "type": "t", "category": "c", "description": "", "url": "", "tags": []}
        ]"#;
        let err = ResourceCatalog::from_json_str(raw).unwrap_err();
        assert!(matches!(err, CatalogError::DuplicateId(id) if id == "dup"));
    }

    #[test]
    fn test_malformed_json_rejected() {
        let err = ResourceCatalog::from_json_str("{not json").unwrap_err();
        assert!(matches!(err, CatalogError::Parse(_)));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(TWO_RESOURCES.as_bytes()).unwrap();

        let source = CatalogSource::from_optional_path(Some(file.path().to_path_buf()));
        let catalog = ResourceCatalog::load(&source).unwrap();
        assert_eq!(catalog.len(), 2);
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let source = CatalogSource::File(PathBuf::from("/nonexistent/resources.json"));
        let err = ResourceCatalog::load(&source).unwrap_err();
        assert!(matches!(err, CatalogError::Io { .. }));
    }

    #[test]
    fn test_search_uses_ranker() {
        let catalog = ResourceCatalog::from_json_str(TWO_RESOURCES).unwrap();
        let hits: Vec<_> = catalog.search("design", 5).iter().map(|r| r.id.clone()).collect();
        assert_eq!(hits, vec!["r1", "r2"]);

        let scored = catalog.search_scored("kitchen", 5);
        assert_eq!(scored.len(), 1);
        assert_eq!(scored[0].score, 2);
    }

    #[test]
    fn test_empty_catalog_search_is_empty() {
        let catalog = ResourceCatalog::from_resources(vec![]).unwrap();
        assert!(catalog.search("anything", 5).is_empty());
    }
}
