//! Roadmap page layout — turns a `Roadmap` into positioned text runs.
//!
//! Coordinates are PDF points with the origin at the bottom-left corner, so the
//! cursor starts near the top and moves down.
//!
//! # Rules
//! - Wrapping: greedy. Words (split on single spaces) are appended as
//!   `word + " "` until the line would exceed the printable width; then the
//!   line is flushed. The first word never triggers a flush.
//! - Pagination: a line whose baseline would fall below the page-break
//!   threshold goes to the top of a new page instead.
//! - The footer is placed on the last page and is exempt from pagination.

use chrono::DateTime;
use serde::{Deserialize, Serialize};

use crate::models::Roadmap;
use crate::render::font_metrics::{win_ansi_byte, FontFace};

// ────────────────────────────────────────────────────────────────────────────
// Configuration
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageConfig {
    pub width_pt: f32,
    pub height_pt: f32,
    pub margin_pt: f32,
    pub line_height_pt: f32,
    pub section_spacing_pt: f32,
    /// A line whose baseline would be below this starts a new page.
    pub page_break_threshold_pt: f32,
    pub footer_baseline_pt: f32,
}

impl PageConfig {
    pub fn printable_width(&self) -> f32 {
        self.width_pt - 2.0 * self.margin_pt
    }

    pub fn top_baseline(&self) -> f32 {
        self.height_pt - self.margin_pt
    }
}

/// A4 portrait, 50pt margins.
pub fn a4_page_config() -> PageConfig {
    PageConfig {
        width_pt: 595.28,
        height_pt: 841.89,
        margin_pt: 50.0,
        line_height_pt: 20.0,
        section_spacing_pt: 30.0,
        page_break_threshold_pt: 100.0,
        footer_baseline_pt: 50.0,
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Output types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rgb(pub f32, pub f32, pub f32);

const BLACK: Rgb = Rgb(0.0, 0.0, 0.0);
const ACCENT: Rgb = Rgb(0.4, 0.2, 0.8);
const MUTED: Rgb = Rgb(0.5, 0.5, 0.5);
const LINK: Rgb = Rgb(0.2, 0.4, 0.8);

/// One line of text at a fixed position.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextRun {
    pub x: f32,
    pub y: f32,
    pub size: f32,
    pub face: FontFace,
    pub color: Rgb,
    pub text: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PageLayout {
    pub runs: Vec<TextRun>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocumentLayout {
    pub width_pt: f32,
    pub height_pt: f32,
    pub pages: Vec<PageLayout>,
}

// ────────────────────────────────────────────────────────────────────────────
// Wrapping
// ────────────────────────────────────────────────────────────────────────────

/// Greedy word wrap. Always returns at least one line.
pub fn wrap_words(text: &str, size: f32, face: FontFace, max_width: f32) -> Vec<String> {
    let metrics = face.metrics();
    let mut lines = Vec::new();
    let mut line = String::new();

    for (i, word) in text.split(' ').enumerate() {
        let candidate = format!("{line}{word} ");
        if i > 0 && metrics.measure(&candidate, size) > max_width {
            lines.push(line.trim_end().to_string());
            line = format!("{word} ");
        } else {
            line = candidate;
        }
    }
    lines.push(line.trim_end().to_string());
    lines
}

/// Drops characters the standard fonts cannot encode; control whitespace becomes a space.
pub fn encodable_text(text: &str) -> String {
    text.chars()
        .map(|c| if c.is_whitespace() { ' ' } else { c })
        .filter(|&c| win_ansi_byte(c).is_some())
        .collect()
}

// ────────────────────────────────────────────────────────────────────────────
// Cursor
// ────────────────────────────────────────────────────────────────────────────

struct LayoutCursor<'c> {
    config: &'c PageConfig,
    pages: Vec<PageLayout>,
    y: f32,
}

impl<'c> LayoutCursor<'c> {
    fn new(config: &'c PageConfig) -> Self {
        Self {
            config,
            pages: vec![PageLayout::default()],
            y: config.top_baseline(),
        }
    }

    /// Wraps and places `text`, leaving the cursor one line below the last line.
    fn add_text(&mut self, text: &str, x: f32, size: f32, face: FontFace, color: Rgb) {
        let text = encodable_text(text);
        for line in wrap_words(&text, size, face, self.config.printable_width()) {
            if self.y < self.config.page_break_threshold_pt {
                self.new_page();
            }
            let y = self.y;
            self.place(line, x, y, size, face, color);
            self.y -= self.config.line_height_pt;
        }
    }

    fn place(&mut self, text: String, x: f32, y: f32, size: f32, face: FontFace, color: Rgb) {
        if text.is_empty() {
            return;
        }
        if let Some(page) = self.pages.last_mut() {
            page.runs.push(TextRun {
                x,
                y,
                size,
                face,
                color,
                text,
            });
        }
    }

    fn skip(&mut self, amount: f32) {
        self.y -= amount;
    }

    fn new_page(&mut self) {
        self.pages.push(PageLayout::default());
        self.y = self.config.top_baseline();
    }

    fn finish(self) -> DocumentLayout {
        DocumentLayout {
            width_pt: self.config.width_pt,
            height_pt: self.config.height_pt,
            pages: self.pages,
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Roadmap layout
// ────────────────────────────────────────────────────────────────────────────

const TITLE: &str = "Career Roadmap Generator";

/// Lays out the whole roadmap document.
pub fn layout_roadmap(roadmap: &Roadmap, config: &PageConfig) -> DocumentLayout {
    use crate::render::font_metrics::FontFace::{Helvetica as Regular, HelveticaBold as Bold};

    let margin = config.margin_pt;
    let spacing = config.section_spacing_pt;
    let mut cursor = LayoutCursor::new(config);

    cursor.add_text(TITLE, margin, 24.0, Bold, ACCENT);
    cursor.skip(10.0);

    cursor.add_text("Career Goal:", margin, 16.0, Bold, BLACK);
    cursor.add_text(&roadmap.goal, margin, 14.0, Regular, BLACK);
    cursor.skip(spacing);

    if let Some(background) = roadmap.background.as_deref().filter(|b| !b.is_empty()) {
        cursor.add_text("Background:", margin, 16.0, Bold, BLACK);
        cursor.add_text(background, margin, 14.0, Regular, BLACK);
        cursor.skip(spacing);
    }

    if let Some(timeline) = roadmap.timeline.as_deref().filter(|t| !t.is_empty()) {
        cursor.add_text("Timeline:", margin, 16.0, Bold, BLACK);
        cursor.add_text(timeline, margin, 14.0, Regular, BLACK);
        cursor.skip(spacing);
    }

    if let Some(weaknesses) = roadmap.weaknesses.as_ref().filter(|w| !w.is_empty()) {
        cursor.add_text("Areas to Improve:", margin, 16.0, Bold, BLACK);
        cursor.add_text(&weaknesses.join(", "), margin, 14.0, Regular, BLACK);
        cursor.skip(spacing);
    }

    cursor.add_text("Milestones:", margin, 18.0, Bold, ACCENT);
    cursor.skip(10.0);

    for (idx, milestone) in roadmap.milestones.iter().enumerate() {
        let title = format!("{}. {}", idx + 1, milestone.title);
        cursor.add_text(&title, margin, 16.0, Bold, BLACK);

        cursor.add_text(&milestone.description, margin + 20.0, 12.0, Regular, BLACK);
        cursor.skip(5.0);

        let duration = format!("Duration: {}", milestone.estimated_duration);
        cursor.add_text(&duration, margin + 20.0, 10.0, Regular, MUTED);
        cursor.skip(10.0);

        cursor.add_text("Tasks:", margin + 20.0, 12.0, Bold, BLACK);
        for task in &milestone.tasks {
            cursor.add_text(&format!("• {task}"), margin + 40.0, 10.0, Regular, BLACK);
        }
        cursor.skip(10.0);

        if !milestone.resource_links.is_empty() {
            cursor.add_text("Resources:", margin + 20.0, 12.0, Bold, BLACK);
            for link in &milestone.resource_links {
                cursor.add_text(&format!("• {}", link.title), margin + 40.0, 10.0, Regular, BLACK);
                cursor.add_text(&format!("  URL: {}", link.url), margin + 40.0, 9.0, Regular, LINK);
            }
        }

        cursor.skip(spacing);
    }

    let footer_y = config.footer_baseline_pt;
    let generated = format!("Generated on {}", display_date(&roadmap.generated_at));
    cursor.place(encodable_text(&generated), margin, footer_y, 10.0, Regular, MUTED);
    let id_line = format!("Roadmap ID: {}", roadmap.id);
    cursor.place(
        encodable_text(&id_line),
        config.width_pt - margin - 100.0,
        footer_y,
        10.0,
        Regular,
        MUTED,
    );

    cursor.finish()
}

/// `M/D/YYYY` for RFC 3339 timestamps; anything else is shown as-is.
fn display_date(generated_at: &str) -> String {
    DateTime::parse_from_rfc3339(generated_at)
        .map(|ts| ts.format("%-m/%-d/%Y").to_string())
        .unwrap_or_else(|_| generated_at.to_string())
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
