// Logical report document
//
// The composer produces this model; every renderer (plain text, PDF)
// consumes it unchanged. Values are preformatted strings so all output
// formats agree on number formatting by construction.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Identifies a report section; also fixes the section order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SectionKind {
    Cover,
    Summary,
    Merchants,
    Deliveries,
    Services,
    Analytics,
    Charts,
    Appendix,
}

/// One renderable line of section content
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", tag = "kind")]
pub enum SectionEntry {
    /// Sub-heading inside a section
    Heading { text: String },
    /// `label: value` line; the value is emphasized at a fixed column offset
    Metric { label: String, value: String },
    /// Entry of a ranked list, 1-based
    Ranked { rank: usize, label: String, value: String },
    /// Plain line of text
    Text { text: String },
    /// Bulleted line
    Bullet { text: String },
    /// Vertical gap
    Spacer,
}

impl SectionEntry {
    pub fn heading(text: impl Into<String>) -> Self {
        SectionEntry::Heading { text: text.into() }
    }

    pub fn metric(label: impl Into<String>, value: impl Into<String>) -> Self {
        SectionEntry::Metric {
            label: label.into(),
            value: value.into(),
        }
    }

    pub fn ranked(rank: usize, label: impl Into<String>, value: impl Into<String>) -> Self {
        SectionEntry::Ranked {
            rank,
            label: label.into(),
            value: value.into(),
        }
    }

    pub fn text(text: impl Into<String>) -> Self {
        SectionEntry::Text { text: text.into() }
    }

    pub fn bullet(text: impl Into<String>) -> Self {
        SectionEntry::Bullet { text: text.into() }
    }
}

/// Titled, ordered unit of report content
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Section {
    pub kind: SectionKind,
    pub title: String,
    pub entries: Vec<SectionEntry>,
}

impl Section {
    pub fn new(kind: SectionKind, title: impl Into<String>) -> Self {
        Self {
            kind,
            title: title.into(),
            entries: Vec::new(),
        }
    }

    pub fn push(&mut self, entry: SectionEntry) {
        self.entries.push(entry);
    }
}

/// Which optional sections a report should include
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SectionOptions {
    pub merchants: bool,
    pub deliveries: bool,
    pub services: bool,
    pub analytics: bool,
    pub charts: bool,
}

impl Default for SectionOptions {
    fn default() -> Self {
        Self {
            merchants: true,
            deliveries: true,
            services: true,
            analytics: true,
            charts: true,
        }
    }
}

/// Parameters of a report-composition request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportRequest {
    /// Human label shown on the cover, e.g. "Rapport mensuel"
    pub report_type: String,
    /// Inclusive period start
    pub start_date: NaiveDate,
    /// Inclusive period end; must not precede start_date
    pub end_date: NaiveDate,
    pub options: SectionOptions,
}

/// Composed report, ready for pagination and rendering
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportDocument {
    /// Unique identifier of this generation run
    pub report_id: Uuid,
    pub title: String,
    pub report_type: String,
    pub period_start: NaiveDate,
    pub period_end: NaiveDate,
    pub generated_at: DateTime<Utc>,
    pub sections: Vec<Section>,
}

impl ReportDocument {
    pub fn section(&self, kind: SectionKind) -> Option<&Section> {
        self.sections.iter().find(|s| s.kind == kind)
    }

    pub fn section_kinds(&self) -> Vec<SectionKind> {
        self.sections.iter().map(|s| s.kind).collect()
    }
}
