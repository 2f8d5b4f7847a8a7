//! Unit tests for the exporter module
//!
//! Organized by output representation, with shared submission fixtures
//! used across both test modules.

pub mod document_tests;

use crate::app::models::{HeaderRecord, Parameter, ParameterRecord, SubmissionRecord};
use chrono::NaiveDate;

/// Create a fully filled-in measurement record for a parameter
pub fn create_test_record(parameter: Parameter) -> ParameterRecord {
    ParameterRecord {
        parameter,
        date_started: NaiveDate::from_ymd_opt(2024, 3, 5),
        environmental_conditions: "21C, 45% RH".to_string(),
        method_used: "AOAC 925.10".to_string(),
        results: "12.4%".to_string(),
        uncertainty: "±0.2".to_string(),
        unit: "%".to_string(),
    }
}

/// Create a three-parameter submission with a known selection order
pub fn create_test_submission() -> SubmissionRecord {
    SubmissionRecord::new(
        HeaderRecord::new("L-100", "S-7", "Wheat flour batch"),
        vec![
            create_test_record(Parameter::Moisture),
            create_test_record(Parameter::Sodium),
            create_test_record(Parameter::Ph),
        ],
    )
    .unwrap()
}

/// Create the minimal single-parameter submission from the worked example:
/// optional fields empty, one Moisture record
pub fn create_example_submission() -> SubmissionRecord {
    SubmissionRecord::new(
        HeaderRecord::new("L-100", "S-7", "Wheat flour batch"),
        vec![ParameterRecord {
            parameter: Parameter::Moisture,
            date_started: NaiveDate::from_ymd_opt(2024, 3, 5),
            environmental_conditions: String::new(),
            method_used: "AOAC 925.10".to_string(),
            results: "12.4%".to_string(),
            uncertainty: String::new(),
            unit: "%".to_string(),
        }],
    )
    .unwrap()
}
