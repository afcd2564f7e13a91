pub mod composer;
pub mod paginator;
pub mod pdf_renderer;
pub mod text_renderer;

pub use composer::ReportComposer;
pub use paginator::Paginator;
pub use pdf_renderer::PdfRenderer;
pub use text_renderer::render_text;
