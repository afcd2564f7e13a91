pub mod document;
pub mod page;

pub use document::{
    ReportDocument, ReportRequest, Section, SectionEntry, SectionKind, SectionOptions,
};
pub use page::{LineContent, PageLayout, PositionedLine, RenderedPage};
