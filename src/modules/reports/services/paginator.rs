use std::mem;

use tracing::debug;

use crate::modules::reports::models::{
    LineContent, PageLayout, PositionedLine, RenderedPage, ReportDocument, SectionEntry,
    SectionKind,
};

/// Vertical space consumed by a section title, separator rule included
const SECTION_TITLE_HEIGHT: f32 = 36.0;

/// Lays report sections out on fixed-size pages.
///
/// A downward cursor tracks the current vertical position; an entry that
/// would cross the bottom margin pushes the rest of the section onto a new
/// page. Cover and executive summary always occupy dedicated pages; any
/// other section starts on a fresh page unless the current one still has
/// room for its title and at least one entry.
pub struct Paginator {
    layout: PageLayout,
}

impl Paginator {
    pub fn new() -> Self {
        Self::with_layout(PageLayout::A4)
    }

    pub fn with_layout(layout: PageLayout) -> Self {
        Self { layout }
    }

    pub fn layout(&self) -> PageLayout {
        self.layout
    }

    pub fn paginate(&self, document: &ReportDocument) -> Vec<RenderedPage> {
        let mut pages: Vec<RenderedPage> = Vec::new();
        let mut page = RenderedPage::default();
        let mut cursor = self.layout.top();

        for section in &document.sections {
            let dedicated = matches!(section.kind, SectionKind::Cover | SectionKind::Summary);
            let first_entry_height = section.entries.first().map(entry_height).unwrap_or(0.0);
            let required = SECTION_TITLE_HEIGHT + first_entry_height;

            if !page.is_empty() && (dedicated || cursor - required < self.layout.bottom()) {
                pages.push(mem::take(&mut page));
                cursor = self.layout.top();
            }

            page.lines.push(PositionedLine {
                y: cursor,
                content: LineContent::SectionTitle {
                    text: section.title.clone(),
                },
            });
            cursor -= SECTION_TITLE_HEIGHT;

            for entry in &section.entries {
                let height = entry_height(entry);
                if cursor - height < self.layout.bottom() {
                    pages.push(mem::take(&mut page));
                    cursor = self.layout.top();
                }
                page.lines.push(PositionedLine {
                    y: cursor,
                    content: LineContent::Entry {
                        entry: entry.clone(),
                    },
                });
                cursor -= height;
            }

            if dedicated {
                pages.push(mem::take(&mut page));
                cursor = self.layout.top();
            }
        }

        if !page.is_empty() {
            pages.push(page);
        }

        debug!(pages = pages.len(), "Paginated report document");
        pages
    }
}

impl Default for Paginator {
    fn default() -> Self {
        Self::new()
    }
}

fn entry_height(entry: &SectionEntry) -> f32 {
    match entry {
        SectionEntry::Heading { .. } => 25.0,
        SectionEntry::Metric { .. } => 20.0,
        SectionEntry::Ranked { .. } => 15.0,
        SectionEntry::Text { .. } => 15.0,
        SectionEntry::Bullet { .. } => 15.0,
        SectionEntry::Spacer => 10.0,
    }
}
