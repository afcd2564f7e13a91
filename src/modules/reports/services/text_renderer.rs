// Plain-text rendering of paginated pages.
//
// Shares the page model with the PDF renderer, so tests and review tooling
// can inspect the exact content and pagination a PDF would receive without
// needing font assets.

use std::fmt::Write;

use crate::modules::reports::models::{LineContent, RenderedPage, SectionEntry};

/// Renders paginated pages to a plain-text string, one block per page.
pub fn render_text(pages: &[RenderedPage]) -> String {
    let mut out = String::new();

    for (index, page) in pages.iter().enumerate() {
        if index > 0 {
            out.push('\n');
        }
        let _ = writeln!(out, "--- page {} ---", index + 1);

        for line in &page.lines {
            match &line.content {
                LineContent::SectionTitle { text } => {
                    let _ = writeln!(out, "{}", text);
                    let _ = writeln!(out, "{}", "=".repeat(text.chars().count()));
                }
                LineContent::Entry { entry } => render_entry(&mut out, entry),
            }
        }
    }

    out
}

fn render_entry(out: &mut String, entry: &SectionEntry) {
    let _ = match entry {
        SectionEntry::Heading { text } => writeln!(out, "[{}]", text),
        SectionEntry::Metric { label, value } => writeln!(out, "{}: {}", label, value),
        SectionEntry::Ranked { rank, label, value } => {
            writeln!(out, "  {}. {} - {}", rank, label, value)
        }
        SectionEntry::Text { text } => writeln!(out, "  {}", text),
        SectionEntry::Bullet { text } => writeln!(out, "  • {}", text),
        SectionEntry::Spacer => writeln!(out),
    };
}
