//! Submission pipeline: validate, export, and feed both sinks
//!
//! This is the input-collector shim around the core: the host UI assembles a
//! [`SubmissionRecord`] once, atomically, at the moment of the submit action
//! and hands it here. Processing is single-threaded and synchronous; one
//! submission runs start-to-finish before the next begins.
//!
//! The two sinks fail independently: a remote store failure is reported but
//! never blocks the report path, so the user does not lose a generated
//! report because the shared spreadsheet was unreachable. A validation
//! failure blocks everything and nothing is exported.

use crate::app::models::SubmissionRecord;
use crate::app::services::exporter;
use crate::app::services::report_renderer::{DocxRenderer, RenderedReport};
use crate::app::services::sheet_store::RowSink;
use crate::app::services::validator;
use crate::{Error, Result};
use tracing::{info, warn};

/// Outcome of one successful submission
///
/// "Successful" means validated and rendered; the store append may still
/// have failed, in which case [`store_error`](Self::store_error) carries the
/// failure for display alongside the report.
#[derive(Debug)]
pub struct SubmissionOutcome {
    /// The rendered report, ready for download
    pub report: RenderedReport,

    /// Number of rows exported for the tabular store
    pub rows_exported: usize,

    /// Store failure, if the append did not succeed
    pub store_error: Option<Error>,
}

impl SubmissionOutcome {
    /// True when the rows were durably appended to the store
    pub fn store_succeeded(&self) -> bool {
        self.store_error.is_none()
    }

    /// UI-facing status message for this outcome
    pub fn status_message(&self) -> String {
        match &self.store_error {
            None => format!(
                "Report generated successfully. {} row(s) appended to the results sheet.",
                self.rows_exported
            ),
            Some(err) => format!(
                "Report generated successfully, but the results sheet was not updated: {}",
                err
            ),
        }
    }
}

/// Pipeline owning the two output sinks for the lifetime of the process
pub struct SubmissionPipeline<S: RowSink> {
    store: S,
    renderer: DocxRenderer,
}

impl<S: RowSink> SubmissionPipeline<S> {
    /// Create a pipeline from a row sink and a report renderer
    pub fn new(store: S, renderer: DocxRenderer) -> Self {
        Self { store, renderer }
    }

    /// Process one submission: validate, export, append, render
    ///
    /// Returns `Err` for validation failures (nothing exported, no sink
    /// touched) and for render failures. A store failure is captured in the
    /// outcome instead, after being logged.
    pub fn submit(&mut self, submission: &SubmissionRecord) -> Result<SubmissionOutcome> {
        validator::validate(submission)?;

        let (rows, document) = exporter::export(submission);
        let rows_exported = rows.len();
        info!(
            "Submission validated: lab {} with {} parameter(s)",
            submission.header.lab_number, rows_exported
        );

        let store_error = match self.store.append_rows(&rows) {
            Ok(()) => None,
            Err(err) => {
                warn!("Store append failed, continuing with report: {}", err);
                Some(err)
            }
        };

        let report = self.renderer.render(&document)?;

        Ok(SubmissionOutcome {
            report,
            rows_exported,
            store_error,
        })
    }

    /// Access the underlying row sink
    pub fn store(&self) -> &S {
        &self.store
    }
}
