// Reports module: composition, pagination and rendering

pub mod models;
pub mod services;

pub use models::{ReportDocument, ReportRequest, Section, SectionEntry, SectionKind, SectionOptions};
pub use services::{Paginator, PdfRenderer, ReportComposer};
