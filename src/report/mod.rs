//! PDF export of the drama list: a centered title over a striped, gridded
//! two-column table.

pub mod layout;
pub mod render;

use crate::store::Record;

pub use layout::{layout, ReportLayout};

/// Download name used for the exported document.
pub const REPORT_FILENAME: &str = "kdramas.pdf";

#[derive(Debug, thiserror::Error)]
pub enum ReportError {
    #[error("failed to build PDF: {0}")]
    Pdf(#[from] printpdf::Error),
}

/// Lay out and render `records` into a complete PDF document.
pub fn build_pdf(records: &[Record]) -> Result<Vec<u8>, ReportError> {
    let report = layout(records);
    tracing::debug!(
        "Rendering report: {} rows over {} page(s)",
        report.body_row_count(),
        report.pages.len()
    );
    render::render(&report)
}
