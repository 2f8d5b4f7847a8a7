//! Submission validation against required-field rules
//!
//! Rules are applied in a fixed order and the first failure wins: header
//! fields first, then the presence of at least one parameter, then each
//! parameter record in selection order. Collect-all-errors semantics are
//! deliberately not implemented; the host surfaces one correctable message
//! per attempt.

use crate::app::models::{HeaderRecord, ParameterRecord, SubmissionRecord};
use crate::{Error, Result};

/// Validate a submission, short-circuiting on the first failing rule
///
/// 1. Every header field must be non-empty.
/// 2. At least one parameter must be selected.
/// 3. Every parameter record must carry `date_started`, `method_used`,
///    `results`, and `unit`; the error names the first incomplete parameter.
///
/// No side effects: a failed validation merely blocks export and is reported
/// to the caller as a display string.
pub fn validate(submission: &SubmissionRecord) -> Result<()> {
    validate_header(&submission.header)?;

    if submission.parameters.is_empty() {
        return Err(Error::NoParametersSelected);
    }

    for record in &submission.parameters {
        validate_parameter(record)?;
    }

    Ok(())
}

/// Check the three required header fields, in declaration order
fn validate_header(header: &HeaderRecord) -> Result<()> {
    let required = [
        ("lab_number", header.lab_number.as_str()),
        ("sample_number", header.sample_number.as_str()),
        ("description", header.description.as_str()),
    ];

    for (field, value) in required {
        if value.trim().is_empty() {
            return Err(Error::missing_header_field(field));
        }
    }

    Ok(())
}

/// Check the required fields of one parameter record
///
/// `environmental_conditions` and `uncertainty` are optional and may stay
/// empty.
fn validate_parameter(record: &ParameterRecord) -> Result<()> {
    let name = record.parameter.as_str();

    if record.date_started.is_none() {
        return Err(Error::incomplete_parameter(name, "date_started"));
    }

    let required = [
        ("method_used", record.method_used.as_str()),
        ("results", record.results.as_str()),
        ("unit", record.unit.as_str()),
    ];

    for (field, value) in required {
        if value.trim().is_empty() {
            return Err(Error::incomplete_parameter(name, field));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::models::{HeaderRecord, Parameter, ParameterRecord, SubmissionRecord};
    use chrono::NaiveDate;

    fn create_test_record(parameter: Parameter) -> ParameterRecord {
        ParameterRecord {
            parameter,
            date_started: NaiveDate::from_ymd_opt(2024, 3, 5),
            environmental_conditions: String::new(),
            method_used: "AOAC 925.10".to_string(),
            results: "12.4%".to_string(),
            uncertainty: String::new(),
            unit: "%".to_string(),
        }
    }

    fn create_test_submission() -> SubmissionRecord {
        SubmissionRecord::new(
            HeaderRecord::new("L-100", "S-7", "Wheat flour batch"),
            vec![
                create_test_record(Parameter::Moisture),
                create_test_record(Parameter::Ash),
            ],
        )
        .unwrap()
    }

    #[test]
    fn test_complete_submission_passes() {
        assert!(validate(&create_test_submission()).is_ok());
    }

    #[test]
    fn test_empty_lab_number_fails_regardless_of_other_fields() {
        let mut submission = create_test_submission();
        submission.header.lab_number = String::new();

        let err = validate(&submission).unwrap_err();
        assert!(matches!(
            err,
            Error::MissingHeaderField { field: "lab_number" }
        ));
    }

    #[test]
    fn test_whitespace_only_header_field_fails() {
        let mut submission = create_test_submission();
        submission.header.description = "   \t".to_string();

        let err = validate(&submission).unwrap_err();
        assert!(matches!(
            err,
            Error::MissingHeaderField {
                field: "description"
            }
        ));
    }

    #[test]
    fn test_header_fields_checked_in_order() {
        // Both lab_number and sample_number empty: lab_number wins.
        let mut submission = create_test_submission();
        submission.header.lab_number = String::new();
        submission.header.sample_number = String::new();

        let err = validate(&submission).unwrap_err();
        assert!(matches!(
            err,
            Error::MissingHeaderField { field: "lab_number" }
        ));
    }

    #[test]
    fn test_empty_selection_fails() {
        let submission = SubmissionRecord::new(
            HeaderRecord::new("L-100", "S-7", "Wheat flour batch"),
            vec![],
        )
        .unwrap();

        let err = validate(&submission).unwrap_err();
        assert!(matches!(err, Error::NoParametersSelected));
    }

    #[test]
    fn test_header_rule_precedes_selection_rule() {
        let submission = SubmissionRecord::new(HeaderRecord::new("", "", ""), vec![]).unwrap();

        // Empty header and empty selection: the header rule fires first.
        let err = validate(&submission).unwrap_err();
        assert!(matches!(err, Error::MissingHeaderField { .. }));
    }

    #[test]
    fn test_incomplete_record_names_exact_parameter() {
        let mut submission = create_test_submission();
        submission.parameters[1].method_used = String::new();

        let err = validate(&submission).unwrap_err();
        match err {
            Error::IncompleteParameterRecord { parameter, field } => {
                assert_eq!(parameter, "Ash");
                assert_eq!(field, "method_used");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_missing_date_detected() {
        let mut submission = create_test_submission();
        submission.parameters[0].date_started = None;

        let err = validate(&submission).unwrap_err();
        match err {
            Error::IncompleteParameterRecord { parameter, field } => {
                assert_eq!(parameter, "Moisture");
                assert_eq!(field, "date_started");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_first_incomplete_parameter_wins() {
        let mut submission = create_test_submission();
        submission.parameters[0].unit = String::new();
        submission.parameters[1].results = String::new();

        let err = validate(&submission).unwrap_err();
        match err {
            Error::IncompleteParameterRecord { parameter, .. } => {
                assert_eq!(parameter, "Moisture");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_optional_fields_may_stay_empty() {
        let mut submission = create_test_submission();
        submission.parameters[0].environmental_conditions = String::new();
        submission.parameters[0].uncertainty = String::new();

        assert!(validate(&submission).is_ok());
    }

    #[test]
    fn test_validation_errors_are_classified_as_validation() {
        let mut submission = create_test_submission();
        submission.header.lab_number = String::new();

        let err = validate(&submission).unwrap_err();
        assert!(err.is_validation());
        assert!(!err.is_store_failure());
    }
}
