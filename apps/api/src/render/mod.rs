// PDF export of a roadmap.
// Layout and serialization are CPU-bound; handlers run them inside tokio::task::spawn_blocking.

pub mod font_metrics;
pub mod handlers;
pub mod layout;
pub mod pdf;

pub use layout::{a4_page_config, PageConfig};

use thiserror::Error;

use crate::models::Roadmap;
use crate::render::layout::layout_roadmap;
use crate::render::pdf::write_pdf;

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("PDF serialization failed: {0}")]
    Pdf(String),
}

/// Lays out and serializes `roadmap` into PDF bytes.
pub fn render_roadmap_pdf(roadmap: &Roadmap, config: &PageConfig) -> Result<Vec<u8>, RenderError> {
    let layout = layout_roadmap(roadmap, config);
    write_pdf(&layout)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Milestone;

    #[test]
    fn test_render_minimal_roadmap() {
        let roadmap = Roadmap {
            id: "roadmap_1".to_string(),
            goal: "Become a data engineer".to_string(),
            background: None,
            timeline: None,
            weaknesses: None,
            milestones: vec![Milestone {
                id: "milestone_1".to_string(),
                title: "Foundations".to_string(),
                description: String::new(),
                tasks: vec![],
                resource_links: vec![],
                estimated_duration: String::new(),
            }],
            generated_at: "not a timestamp".to_string(),
        };

        let bytes = render_roadmap_pdf(&roadmap, &a4_page_config()).unwrap();
        assert!(bytes.starts_with(b"%PDF"));
    }
}
