//! Tests for the structured document mapping

use super::{create_example_submission, create_test_submission};
use crate::app::services::exporter::{export, submission_to_document, submission_to_rows};

#[test]
fn test_heading_and_paragraph_prefixes() {
    let document = submission_to_document(&create_test_submission());

    assert_eq!(document.heading, "Lab Results Report");
    assert_eq!(document.paragraphs[0], "Lab Number: L-100");
    assert_eq!(document.paragraphs[1], "Sample Number: S-7");
    assert_eq!(document.paragraphs[2], "Sample Description: Wheat flour batch");
    assert_eq!(document.paragraphs[3], "");
    assert_eq!(document.paragraphs[4], "Summary of Results:");
}

#[test]
fn test_fixed_table_header() {
    let document = submission_to_document(&create_test_submission());

    assert_eq!(
        document.table.header,
        [
            "Parameter",
            "Date Started",
            "Environmental Conditions",
            "Method Used",
            "Results",
            "Uncertainty",
            "Unit",
        ]
        .map(str::to_string)
    );
}

#[test]
fn test_table_rows_follow_selection_order() {
    let document = submission_to_document(&create_test_submission());

    assert_eq!(document.table.rows.len(), 3);
    assert_eq!(document.table.rows[0][0], "Moisture");
    assert_eq!(document.table.rows[1][0], "Sodium");
    assert_eq!(document.table.rows[2][0], "pH");
}

#[test]
fn test_worked_example_table() {
    let document = submission_to_document(&create_example_submission());

    // Header row plus the single Moisture row.
    assert_eq!(document.table.row_count(), 2);

    let row = &document.table.rows[0];
    assert_eq!(row[0], "Moisture");
    assert_eq!(row[1], "2024-03-05");
    assert_eq!(row[2], "");
    assert_eq!(row[3], "AOAC 925.10");
    assert_eq!(row[4], "12.4%");
    assert_eq!(row[5], "");
    assert_eq!(row[6], "%");
}

#[test]
fn test_date_string_matches_row_mapping_for_every_record() {
    let submission = create_test_submission();
    let rows = submission_to_rows(&submission);
    let document = submission_to_document(&submission);

    for (row, table_row) in rows.iter().zip(&document.table.rows) {
        assert_eq!(row.columns()[4], table_row[1]);
    }
}

#[test]
fn test_export_produces_both_representations_consistently() {
    let submission = create_test_submission();
    let (rows, document) = export(&submission);

    assert_eq!(rows.len(), document.table.rows.len());
    assert_eq!(rows, submission_to_rows(&submission));
    assert_eq!(document, submission_to_document(&submission));
}

#[test]
fn test_export_is_idempotent() {
    let submission = create_test_submission();
    let first = export(&submission);
    let second = export(&submission);
    assert_eq!(first, second);
}
