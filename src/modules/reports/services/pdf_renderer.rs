use std::fs;
use std::path::{Path, PathBuf};

use genpdf::{elements, style, Element};
use tracing::info;

use crate::config::ReportConfig;
use crate::core::{AppError, Result};
use crate::modules::reports::models::{LineContent, RenderedPage, ReportDocument, SectionEntry};

const FONT_FAMILY_NAME: &str = "Roboto";

/// Page margin in millimeters, the genpdf unit (≈ 50pt)
const PAGE_MARGIN_MM: u32 = 18;

const FONT_SIZE_SECTION_TITLE: u8 = 16;
const FONT_SIZE_HEADING: u8 = 14;
const FONT_SIZE_SMALL: u8 = 10;

/// Column weights approximating the fixed value-column offset: the label
/// column takes 2/5 of the content width (≈ 200pt of 495pt)
const METRIC_COLUMN_WEIGHTS: [usize; 2] = [2, 3];

/// Serializes paginated report pages to a PDF file.
///
/// Page breaks are emitted exactly where the paginator decided them, so the
/// PDF and the plain-text rendering always agree on page boundaries. The
/// document is rendered to memory first and written in a single filesystem
/// operation; a rendering failure never leaves a partial file behind.
pub struct PdfRenderer {
    fonts_dir: PathBuf,
}

impl PdfRenderer {
    pub fn new(config: &ReportConfig) -> Self {
        Self {
            fonts_dir: PathBuf::from(&config.fonts_dir),
        }
    }

    /// Renders the document to `output_path`. All-or-nothing: any error
    /// aborts the whole report.
    pub fn render_to_file(
        &self,
        document: &ReportDocument,
        pages: &[RenderedPage],
        output_path: &Path,
    ) -> Result<()> {
        info!(path = %output_path.display(), pages = pages.len(), "Rendering PDF report");

        let doc = self.build_document(document, pages)?;

        let mut buffer = Vec::new();
        doc.render(&mut buffer)
            .map_err(|e| AppError::render(e.to_string()))?;

        if let Some(parent) = output_path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        fs::write(output_path, &buffer)?;

        info!(
            path = %output_path.display(),
            bytes = buffer.len(),
            "PDF report written"
        );
        Ok(())
    }

    fn build_document(
        &self,
        document: &ReportDocument,
        pages: &[RenderedPage],
    ) -> Result<genpdf::Document> {
        let font_family =
            genpdf::fonts::from_files(&self.fonts_dir, FONT_FAMILY_NAME, None).map_err(|_| {
                AppError::FontNotFound(format!(
                    "no {} font family under {}",
                    FONT_FAMILY_NAME,
                    self.fonts_dir.display()
                ))
            })?;

        let mut doc = genpdf::Document::new(font_family);
        doc.set_title(format!("{} - {}", document.title, document.report_type));

        let mut decorator = genpdf::SimplePageDecorator::new();
        decorator.set_margins(PAGE_MARGIN_MM);
        doc.set_page_decorator(decorator);

        for (index, page) in pages.iter().enumerate() {
            if index > 0 {
                doc.push(elements::PageBreak::new());
            }
            self.push_page(&mut doc, page)?;
        }

        Ok(doc)
    }

    fn push_page(&self, doc: &mut genpdf::Document, page: &RenderedPage) -> Result<()> {
        // Consecutive metric lines render as one two-column table so their
        // value column stays aligned.
        let mut metric_run: Vec<(String, String)> = Vec::new();

        for line in &page.lines {
            if !matches!(
                line.content,
                LineContent::Entry {
                    entry: SectionEntry::Metric { .. }
                }
            ) && !metric_run.is_empty()
            {
                doc.push(metric_table(std::mem::take(&mut metric_run))?);
            }

            match &line.content {
                LineContent::SectionTitle { text } => {
                    doc.push(
                        elements::Paragraph::new(text.clone()).styled(
                            style::Style::new()
                                .bold()
                                .with_font_size(FONT_SIZE_SECTION_TITLE),
                        ),
                    );
                    doc.push(elements::Break::new(1));
                }
                LineContent::Entry { entry } => match entry {
                    SectionEntry::Metric { label, value } => {
                        metric_run.push((label.clone(), value.clone()));
                    }
                    SectionEntry::Heading { text } => {
                        doc.push(
                            elements::Paragraph::new(text.clone())
                                .styled(style::Style::new().bold().with_font_size(FONT_SIZE_HEADING)),
                        );
                    }
                    SectionEntry::Ranked { rank, label, value } => {
                        doc.push(elements::Paragraph::new(format!(
                            "{}. {} - {}",
                            rank, label, value
                        )));
                    }
                    SectionEntry::Text { text } => {
                        doc.push(elements::Paragraph::new(text.clone()));
                    }
                    SectionEntry::Bullet { text } => {
                        doc.push(
                            elements::Paragraph::new(format!("• {}", text))
                                .styled(style::Style::new().with_font_size(FONT_SIZE_SMALL)),
                        );
                    }
                    SectionEntry::Spacer => {
                        doc.push(elements::Break::new(1));
                    }
                },
            }
        }

        if !metric_run.is_empty() {
            doc.push(metric_table(metric_run)?);
        }

        Ok(())
    }
}

fn metric_table(rows: Vec<(String, String)>) -> Result<elements::TableLayout> {
    let mut table = elements::TableLayout::new(METRIC_COLUMN_WEIGHTS.to_vec());
    for (label, value) in rows {
        table
            .row()
            .element(elements::Paragraph::new(label))
            .element(elements::Paragraph::new(value).styled(style::Style::new().bold()))
            .push()
            .map_err(|e| AppError::render(e.to_string()))?;
    }
    Ok(table)
}
