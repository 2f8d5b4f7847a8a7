//! Rendering of the structured report document into `.docx` bytes
//!
//! The renderer consumes the exporter's [`Document`] model using only the
//! heading, paragraph, and table primitives of the wordprocessing format.
//! Output is an in-memory byte buffer the host offers for download together
//! with its fixed filename and MIME type.

use crate::app::services::exporter::Document;
use crate::config::ReportConfig;
use crate::constants::report;
use crate::{Error, Result};
use docx_rs::{Docx, Paragraph, Run, Style, StyleType, Table, TableCell, TableRow};
use std::io::Cursor;
use tracing::info;

/// A rendered report ready for download
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedReport {
    /// Filename offered to the user
    pub filename: String,

    /// MIME type of the file contents
    pub mime_type: &'static str,

    /// The `.docx` file contents
    pub bytes: Vec<u8>,
}

/// Renderer producing `.docx` report files from structured documents
pub struct DocxRenderer {
    config: ReportConfig,
}

impl DocxRenderer {
    /// Create a renderer with the given report configuration
    pub fn new(config: ReportConfig) -> Self {
        Self { config }
    }

    /// Render a document into downloadable `.docx` bytes
    pub fn render(&self, document: &Document) -> Result<RenderedReport> {
        let docx = build_docx(document);

        let mut cursor = Cursor::new(Vec::new());
        docx.build()
            .pack(&mut cursor)
            .map_err(|e| Error::report_rendering(e.to_string()))?;
        let bytes = cursor.into_inner();

        info!(
            "Rendered report '{}' ({} bytes, {} table rows)",
            self.config.filename,
            bytes.len(),
            document.table.row_count()
        );

        Ok(RenderedReport {
            filename: self.config.filename.clone(),
            mime_type: report::MIME_TYPE,
            bytes,
        })
    }
}

impl Default for DocxRenderer {
    fn default() -> Self {
        Self::new(ReportConfig::default())
    }
}

/// Assemble the docx model: heading, paragraphs, then the results table
fn build_docx(document: &Document) -> Docx {
    let heading_style = Style::new(report::HEADING_STYLE_ID, StyleType::Paragraph)
        .name(report::HEADING_STYLE_NAME)
        .size(32)
        .bold();

    let mut docx = Docx::new().add_style(heading_style).add_paragraph(
        Paragraph::new()
            .style(report::HEADING_STYLE_ID)
            .add_run(Run::new().add_text(document.heading.as_str())),
    );

    for text in &document.paragraphs {
        docx = docx.add_paragraph(Paragraph::new().add_run(Run::new().add_text(text.as_str())));
    }

    docx.add_table(build_table(document))
}

fn build_table(document: &Document) -> Table {
    let header_row = TableRow::new(document.table.header.iter().map(|c| cell(c)).collect());

    let mut rows = vec![header_row];
    for table_row in &document.table.rows {
        rows.push(TableRow::new(table_row.iter().map(|c| cell(c)).collect()));
    }

    Table::new(rows)
}

fn cell(text: &str) -> TableCell {
    TableCell::new().add_paragraph(Paragraph::new().add_run(Run::new().add_text(text)))
}
