//! Prompt Assembler — fills the roadmap and chat templates. Pure string work.

use crate::generation::prompts::{
    CHAT_INSTRUCTIONS_TEMPLATE, ROADMAP_EXAMPLE, ROADMAP_INSTRUCTIONS_TEMPLATE,
};
use crate::generation::roadmap::RoadmapInput;
use crate::llm_client::prompts::{
    COACH_PERSONA, JSON_ONLY_INSTRUCTION, RESOURCE_CITATION_INSTRUCTION,
};
use crate::models::{Resource, Roadmap};

const NO_RESOURCES: &str = "(no matching resources in the library)";

/// Builds the user message for roadmap generation.
pub fn build_roadmap_prompt(input: &RoadmapInput, resources: &[&Resource]) -> String {
    let instructions = ROADMAP_INSTRUCTIONS_TEMPLATE
        .replace("{persona}", COACH_PERSONA)
        .replace("{citation_instruction}", RESOURCE_CITATION_INSTRUCTION)
        .replace("{json_instruction}", JSON_ONLY_INSTRUCTION)
        .replace("{example}", ROADMAP_EXAMPLE);

    let mut user_input = format!("Goal: {}", input.goal);
    if let Some(background) = non_empty(input.background.as_deref()) {
        user_input.push_str(&format!("\nBackground: {background}"));
    }
    if let Some(timeline) = non_empty(input.timeline.as_deref()) {
        user_input.push_str(&format!("\nTimeline: {timeline}"));
    }
    if !input.weaknesses.is_empty() {
        user_input.push_str(&format!("\nWeaknesses: {}", input.weaknesses.join(", ")));
    }

    let resource_text = if resources.is_empty() {
        NO_RESOURCES.to_string()
    } else {
        resources
            .iter()
            .map(|r| format_resource_detailed(r))
            .collect::<Vec<_>>()
            .join("\n\n")
    };

    format!(
        "{instructions}\n\nUSER INPUT:\n{user_input}\n\nAVAILABLE RESOURCES:\n{resource_text}\n\n\
         Generate the roadmap JSON now:"
    )
}

/// Builds the user message for a chat reply about an existing roadmap.
pub fn build_chat_prompt(message: &str, roadmap: &Roadmap, resources: &[&Resource]) -> String {
    let instructions = CHAT_INSTRUCTIONS_TEMPLATE
        .replace("{persona}", COACH_PERSONA)
        .replace("{citation_instruction}", RESOURCE_CITATION_INSTRUCTION);

    let mut details = format!("ROADMAP DETAILS:\nGoal: {}", roadmap.goal);
    if let Some(background) = non_empty(roadmap.background.as_deref()) {
        details.push_str(&format!("\nBackground: {background}"));
    }
    if let Some(timeline) = non_empty(roadmap.timeline.as_deref()) {
        details.push_str(&format!("\nTimeline: {timeline}"));
    }

    let milestones = roadmap
        .milestones
        .iter()
        .enumerate()
        .map(|(idx, m)| {
            format!(
                "{}. {}\n   Description: {}\n   Duration: {}\n   Tasks: {}",
                idx + 1,
                m.title,
                m.description,
                m.estimated_duration,
                m.tasks.join(", ")
            )
        })
        .collect::<Vec<_>>()
        .join("\n\n");

    let resource_text = if resources.is_empty() {
        NO_RESOURCES.to_string()
    } else {
        resources
            .iter()
            .map(|r| format!("ID: {} - {} ({})", r.id, r.title, r.resource_type))
            .collect::<Vec<_>>()
            .join("\n")
    };

    format!(
        "{instructions}\n\n{details}\n\nMILESTONES:\n{milestones}\n\n\
         AVAILABLE RESOURCES:\n{resource_text}\n\nUSER MESSAGE: {message}\n\nRespond as Jordan:"
    )
}

fn format_resource_detailed(resource: &Resource) -> String {
    format!(
        "ID: {}\nTitle: {}\nType: {}\nCategory: {}\nDescription: {}\nURL: {}\nTags: {}",
        resource.id,
        resource.title,
        resource.resource_type,
        resource.category,
        resource.description,
        resource.url,
        resource.tags.join(", ")
    )
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Milestone;

    fn make_resource() -> Resource {
        Resource {
            id: "res_011".to_string(),
            title: "Cracking the Coding Interview".to_string(),
            resource_type: "book".to_string(),
            category: "Career Development".to_string(),
            description: "Interview questions".to_string(),
            url: "https://www.crackingthecodinginterview.com/".to_string(),
            tags: vec!["interviews".to_string(), "algorithms".to_string()],
        }
    }

    fn make_input() -> RoadmapInput {
        RoadmapInput {
            goal: "Become a Senior Software Engineer".to_string(),
            background: Some("2 years of React".to_string()),
            timeline: None,
            weaknesses: vec!["system design".to_string(), "algorithms".to_string()],
        }
    }

    #[test]
    fn test_roadmap_prompt_includes_user_input_and_resources() {
        let resource = make_resource();
        let prompt = build_roadmap_prompt(&make_input(), &[&resource]);

        assert!(prompt.contains("Goal: Become a Senior Software Engineer"));
        assert!(prompt.contains("Background: 2 years of React"));
        assert!(prompt.contains("Weaknesses: system design, algorithms"));
        assert!(prompt.contains("ID: res_011\nTitle: Cracking the Coding Interview\nType: book"));
        assert!(prompt.contains("Tags: interviews, algorithms"));
        assert!(prompt.ends_with("Generate the roadmap JSON now:"));
    }

    #[test]
    fn test_roadmap_prompt_omits_absent_fields() {
        let input = RoadmapInput {
            goal: "Become a PM".to_string(),
            background: Some("   ".to_string()),
            timeline: None,
            weaknesses: vec![],
        };
        let prompt = build_roadmap_prompt(&input, &[]);
        assert!(!prompt.contains("Background:"));
        assert!(!prompt.contains("Timeline:"));
        assert!(!prompt.contains("Weaknesses:"));
        assert!(prompt.contains(NO_RESOURCES));
    }

    #[test]
    fn test_roadmap_prompt_fills_every_placeholder() {
        let prompt = build_roadmap_prompt(&make_input(), &[]);
        assert!(!prompt.contains("{persona}"));
        assert!(!prompt.contains("{citation_instruction}"));
        assert!(!prompt.contains("{json_instruction}"));
        assert!(!prompt.contains("{example}"));
        assert!(prompt.contains("Become a Senior Software Engineer at a FAANG company"));
    }

    #[test]
    fn test_chat_prompt_numbers_milestones_and_lists_resources() {
        let roadmap = Roadmap {
            id: "roadmap_1".to_string(),
            goal: "Become a data engineer".to_string(),
            background: None,
            timeline: Some("12 months".to_string()),
            weaknesses: None,
            milestones: vec![
                Milestone {
                    id: "milestone_1".to_string(),
                    title: "SQL 🧮".to_string(),
                    description: "Get fluent".to_string(),
                    tasks: vec!["Joins".to_string(), "Window functions".to_string()],
                    resource_links: vec![],
                    estimated_duration: "1 month".to_string(),
                },
                Milestone {
                    id: "milestone_2".to_string(),
                    title: "Pipelines".to_string(),
                    description: "Batch and streaming".to_string(),
                    tasks: vec![],
                    resource_links: vec![],
                    estimated_duration: "2 months".to_string(),
                },
            ],
            generated_at: "2024-01-01T00:00:00.000Z".to_string(),
        };
        let resource = make_resource();

        let prompt = build_chat_prompt("What should I do first?", &roadmap, &[&resource]);

        assert!(prompt.contains("Goal: Become a data engineer"));
        assert!(prompt.contains("Timeline: 12 months"));
        assert!(!prompt.contains("Background:"));
        assert!(prompt.contains("1. SQL 🧮\n   Description: Get fluent\n   Duration: 1 month"));
        assert!(prompt.contains("Tasks: Joins, Window functions"));
        assert!(prompt.contains("2. Pipelines"));
        assert!(prompt.contains("ID: res_011 - Cracking the Coding Interview (book)"));
        assert!(prompt.contains("USER MESSAGE: What should I do first?"));
    }
}
