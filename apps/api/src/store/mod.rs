//! Roadmap Store — process-lifetime, in-memory roadmap storage keyed by id.
//!
//! Nothing is persisted and nothing is evicted. Concurrent writers to the same
//! id race; the last write wins.

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::RwLock;
use tracing::warn;

use crate::catalog::ResourceCatalog;
use crate::models::Roadmap;

#[derive(Debug, Default)]
struct StoreInner {
    /// id → (insertion sequence, roadmap). The sequence keeps `get_all` in
    /// first-insertion order.
    entries: HashMap<String, (u64, Roadmap)>,
    next_seq: u64,
}

/// Shared handle to the roadmap map. Cloning is cheap and every clone sees the
/// same entries.
#[derive(Debug, Clone, Default)]
pub struct RoadmapStore {
    inner: Arc<RwLock<StoreInner>>,
}

impl RoadmapStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts or overwrites by id. An overwrite keeps the original position.
    pub fn store(&self, roadmap: Roadmap) {
        let mut inner = self.inner.write();
        if let Some((_, existing)) = inner.entries.get_mut(&roadmap.id) {
            *existing = roadmap;
            return;
        }
        let seq = inner.next_seq;
        inner.next_seq += 1;
        inner.entries.insert(roadmap.id.clone(), (seq, roadmap));
    }

    pub fn get(&self, id: &str) -> Option<Roadmap> {
        self.inner
            .read()
            .entries
            .get(id)
            .map(|(_, roadmap)| roadmap.clone())
    }

    pub fn has(&self, id: &str) -> bool {
        self.inner.read().entries.contains_key(id)
    }

    /// Returns true if an entry was removed.
    pub fn delete(&self, id: &str) -> bool {
        self.inner.write().entries.remove(id).is_some()
    }

    /// All roadmaps, in first-insertion order.
    pub fn get_all(&self) -> Vec<Roadmap> {
        let inner = self.inner.read();
        let mut entries: Vec<&(u64, Roadmap)> = inner.entries.values().collect();
        entries.sort_by_key(|(seq, _)| *seq);
        entries.into_iter().map(|(_, roadmap)| roadmap.clone()).collect()
    }

    pub fn clear(&self) {
        self.inner.write().entries.clear();
    }

    pub fn len(&self) -> usize {
        self.inner.read().entries.len()
    }

    /// Drops dangling resource links, then stores the roadmap. Returns what was stored.
    pub fn ingest(&self, mut roadmap: Roadmap, catalog: &ResourceCatalog) -> Roadmap {
        strip_dangling_links(&mut roadmap, catalog);
        if self.has(&roadmap.id) {
            warn!("Replacing existing roadmap {}", roadmap.id);
        }
        self.store(roadmap.clone());
        roadmap
    }
}

/// Removes every resource link whose `resource_id` is not in the catalog.
/// Returns how many links were dropped.
pub fn strip_dangling_links(roadmap: &mut Roadmap, catalog: &ResourceCatalog) -> usize {
    let mut dropped = 0;
    let roadmap_id = roadmap.id.clone();
    for milestone in &mut roadmap.milestones {
        let milestone_id = &milestone.id;
        milestone.resource_links.retain(|link| {
            let known = catalog.contains(&link.resource_id);
            if !known {
                warn!(
                    "Dropping link to unknown resource id {:?} in milestone {:?} of roadmap {}",
                    link.resource_id, milestone_id, roadmap_id
                );
                dropped += 1;
            }
            known
        });
    }
    dropped
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Milestone, Resource, ResourceLink};

    fn make_roadmap(id: &str, goal: &str) -> Roadmap {
        Roadmap {
            id: id.to_string(),
            goal: goal.to_string(),
            background: None,
            timeline: None,
            weaknesses: None,
            milestones: vec![],
            generated_at: "2024-01-01T00:00:00.000Z".to_string(),
        }
    }

    fn make_link(resource_id: &str) -> ResourceLink {
        ResourceLink {
            title: format!("Title for {resource_id}"),
            url: format!("https://example.com/{resource_id}"),
            resource_id: resource_id.to_string(),
        }
    }

    fn make_catalog(ids: &[&str]) -> ResourceCatalog {
        ResourceCatalog::from_resources(
            ids.iter()
                .map(|id| Resource {
                    id: id.to_string(),
                    title: id.to_string(),
                    resource_type: "book".to_string(),
                    category: "misc".to_string(),
                    description: String::new(),
                    url: String::new(),
                    tags: vec![],
                })
                .collect(),
        )
        .unwrap()
    }

    #[test]
    fn test_store_then_get_round_trips() {
        let store = RoadmapStore::new();
        let roadmap = make_roadmap("roadmap_1", "Become an SRE");
        store.store(roadmap.clone());
        assert_eq!(store.get("roadmap_1"), Some(roadmap));
        assert!(store.has("roadmap_1"));
        assert!(store.get("roadmap_2").is_none());
    }

    #[test]
    fn test_store_overwrites_by_id_keeping_position() {
        let store = RoadmapStore::new();
        store.store(make_roadmap("a", "first"));
        store.store(make_roadmap("b", "second"));
        store.store(make_roadmap("a", "first, revised"));

        let all = store.get_all();
        assert_eq!(all.len(), 2);
        assert_eq!(all[0].id, "a");
        assert_eq!(all[0].goal, "first, revised");
        assert_eq!(all[1].id, "b");
    }

    #[test]
    fn test_delete_reports_whether_removed() {
        let store = RoadmapStore::new();
        store.store(make_roadmap("a", "goal"));
        assert!(store.delete("a"));
        assert!(!store.delete("a"));
        assert!(!store.has("a"));
    }

    #[test]
    fn test_reinsert_after_delete_appends() {
        let store = RoadmapStore::new();
        store.store(make_roadmap("a", "goal"));
        store.store(make_roadmap("b", "goal"));
        store.delete("a");
        store.store(make_roadmap("a", "goal"));

        let ids: Vec<_> = store.get_all().into_iter().map(|r| r.id).collect();
        assert_eq!(ids, vec!["b", "a"]);
    }

    #[test]
    fn test_clear_empties_store() {
        let store = RoadmapStore::new();
        store.store(make_roadmap("a", "goal"));
        store.store(make_roadmap("b", "goal"));
        store.clear();
        assert_eq!(store.len(), 0);
        assert!(store.get_all().is_empty());
    }

    #[test]
    fn test_clones_share_entries() {
        let store = RoadmapStore::new();
        let handle = store.clone();
        handle.store(make_roadmap("a", "goal"));
        assert!(store.has("a"));
    }

    #[test]
    fn test_ingest_drops_only_dangling_links() {
        let catalog = make_catalog(&["res_001", "res_002"]);
        let store = RoadmapStore::new();

        let milestone = Milestone {
            id: "milestone_1".to_string(),
            title: "Foundations 🏗️".to_string(),
            description: "Build the base".to_string(),
            tasks: vec!["Read".to_string(), "Practice".to_string()],
            resource_links: vec![make_link("res_001"), make_link("res_999"), make_link("res_002")],
            estimated_duration: "2 weeks".to_string(),
        };
        let mut roadmap = make_roadmap("roadmap_1", "Become a backend engineer");
        roadmap.milestones.push(milestone.clone());

        let stored = store.ingest(roadmap, &catalog);

        let kept: Vec<_> = stored.milestones[0]
            .resource_links
            .iter()
            .map(|l| l.resource_id.as_str())
            .collect();
        assert_eq!(kept, vec!["res_001", "res_002"]);

        // Everything else about the milestone is untouched.
        let stored_milestone = &stored.milestones[0];
        assert_eq!(stored_milestone.title, milestone.title);
        assert_eq!(stored_milestone.tasks, milestone.tasks);
        assert_eq!(stored_milestone.estimated_duration, milestone.estimated_duration);

        assert_eq!(store.get("roadmap_1"), Some(stored));
    }

    #[test]
    fn test_strip_counts_dropped_links() {
        let catalog = make_catalog(&["res_001"]);
        let mut roadmap = make_roadmap("r", "goal");
        for _ in 0..2 {
            roadmap.milestones.push(Milestone {
                id: String::new(),
                title: "m".to_string(),
                description: String::new(),
                tasks: vec![],
                resource_links: vec![make_link("gone"), make_link("res_001")],
                estimated_duration: String::new(),
            });
        }
        assert_eq!(strip_dangling_links(&mut roadmap, &catalog), 2);
        assert!(roadmap
            .milestones
            .iter()
            .all(|m| m.resource_links.len() == 1));
    }
}
