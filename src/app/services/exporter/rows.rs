//! Flat row mapping for the tabular store sink
//!
//! Each parameter record becomes one ordered 10-column row, with the sample
//! header repeated on every row so each row is independently meaningful in
//! the shared spreadsheet.

use super::format_date_opt;
use crate::app::models::SubmissionRecord;
use crate::constants::sheets::ROW_WIDTH;
use serde::Serialize;

/// One appended spreadsheet row: an ordered 10-column tuple
///
/// Column order is fixed: lab number, sample number, description, parameter,
/// date started, environmental conditions, method used, results,
/// uncertainty, unit. Serializes as a plain JSON array for the store's
/// append request body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Row(pub [String; ROW_WIDTH]);

impl Row {
    /// Column values in order
    pub fn columns(&self) -> &[String; ROW_WIDTH] {
        &self.0
    }
}

/// Map a validated submission into one row per parameter, in selection order
pub fn submission_to_rows(submission: &SubmissionRecord) -> Vec<Row> {
    let header = &submission.header;

    submission
        .parameters
        .iter()
        .map(|record| {
            Row([
                header.lab_number.clone(),
                header.sample_number.clone(),
                header.description.clone(),
                record.parameter.as_str().to_string(),
                format_date_opt(record.date_started),
                record.environmental_conditions.clone(),
                record.method_used.clone(),
                record.results.clone(),
                record.uncertainty.clone(),
                record.unit.clone(),
            ])
        })
        .collect()
}
