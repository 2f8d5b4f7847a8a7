//! Structured document mapping for the report renderer
//!
//! Produces the renderer-agnostic document model: a heading, the header
//! paragraphs with their literal prefixes, the summary label, and the fixed
//! 7-column results table. The renderer consumes this model without ever
//! seeing the submission itself.

use super::format_date_opt;
use crate::app::models::SubmissionRecord;
use crate::constants::report;

/// Number of columns in the results table
pub const TABLE_WIDTH: usize = report::TABLE_COLUMNS.len();

/// Structured report document: heading, paragraphs, results table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    /// Top-level heading text
    pub heading: String,

    /// Plain paragraphs in document order, empty strings rendering as
    /// blank spacer paragraphs
    pub paragraphs: Vec<String>,

    /// Summary-of-results table
    pub table: ResultsTable,
}

/// The results table: a fixed header row plus one row per parameter record
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultsTable {
    /// Fixed column header row
    pub header: [String; TABLE_WIDTH],

    /// One row per parameter record, in selection order
    pub rows: Vec<[String; TABLE_WIDTH]>,
}

impl ResultsTable {
    /// Total number of rendered rows including the header row
    pub fn row_count(&self) -> usize {
        self.rows.len() + 1
    }
}

/// Map a validated submission into the structured report document
///
/// Dates are rendered with the same canonical formatter as the row mapping,
/// so both sinks emit the same date string for the same record.
pub fn submission_to_document(submission: &SubmissionRecord) -> Document {
    let header = &submission.header;

    let paragraphs = vec![
        format!("{}{}", report::LAB_NUMBER_PREFIX, header.lab_number),
        format!("{}{}", report::SAMPLE_NUMBER_PREFIX, header.sample_number),
        format!("{}{}", report::SAMPLE_DESCRIPTION_PREFIX, header.description),
        String::new(),
        report::SUMMARY_LABEL.to_string(),
    ];

    let rows = submission
        .parameters
        .iter()
        .map(|record| {
            [
                record.parameter.as_str().to_string(),
                format_date_opt(record.date_started),
                record.environmental_conditions.clone(),
                record.method_used.clone(),
                record.results.clone(),
                record.uncertainty.clone(),
                record.unit.clone(),
            ]
        })
        .collect();

    Document {
        heading: report::HEADING.to_string(),
        paragraphs,
        table: ResultsTable {
            header: report::TABLE_COLUMNS.map(str::to_string),
            rows,
        },
    }
}
