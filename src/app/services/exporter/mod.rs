//! Export of validated submissions to the two output representations
//!
//! This module maps one validated [`SubmissionRecord`] into two independent
//! outputs: a sequence of flat spreadsheet rows for the tabular store, and a
//! structured heading + table document for the report renderer.
//!
//! # Architecture
//!
//! - [`rows`] - Flat 10-column row mapping for the tabular store
//! - [`document`] - Structured heading/paragraph/table document mapping
//!
//! Both mappings render dates through the shared [`format_date`] so the two
//! sinks always agree on the date string for the same record.
//!
//! # Contract
//!
//! [`export`] assumes its input already passed
//! [`validator::validate`](crate::app::services::validator::validate); it is
//! pure and has no validation responsibility of its own. Unvalidated input
//! yields garbage output rather than an error.

pub mod document;
pub mod rows;

#[cfg(test)]
mod tests;

pub use document::{Document, ResultsTable, submission_to_document};
pub use rows::{Row, submission_to_rows};

use crate::app::models::SubmissionRecord;
use crate::constants::DATE_FORMAT;
use chrono::NaiveDate;

/// Map a validated submission into spreadsheet rows and a report document
pub fn export(submission: &SubmissionRecord) -> (Vec<Row>, Document) {
    (
        submission_to_rows(submission),
        submission_to_document(submission),
    )
}

/// Render a date in the canonical `YYYY-MM-DD` form used by both sinks
pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

/// Render an optional date, mapping an absent date to the empty string
///
/// After validation the date is always present; the empty-string arm only
/// exists because the exporter does not guard its contract.
pub(crate) fn format_date_opt(date: Option<NaiveDate>) -> String {
    date.map(format_date).unwrap_or_default()
}
