//! Data models for lab result submissions
//!
//! This module contains the core data structures for one user submission:
//! the header record identifying the sample, the per-parameter measurement
//! records, and the submission record that binds them together. Parameter
//! names are drawn from a fixed, closed catalog.

use crate::{Error, Result};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::str::FromStr;

// =============================================================================
// Parameter Catalog
// =============================================================================

/// The fixed catalog of measurable lab parameters
///
/// The catalog is closed: extending it means adding a variant here, never
/// passing a free string through the pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Parameter {
    #[serde(rename = "Moisture")]
    Moisture,
    #[serde(rename = "Ash")]
    Ash,
    #[serde(rename = "Crude Protein")]
    CrudeProtein,
    #[serde(rename = "Total Fat")]
    TotalFat,
    #[serde(rename = "Sugar")]
    Sugar,
    #[serde(rename = "Sodium")]
    Sodium,
    #[serde(rename = "Potassium")]
    Potassium,
    #[serde(rename = "Calcium")]
    Calcium,
    #[serde(rename = "pH")]
    Ph,
    #[serde(rename = "Water Activity")]
    WaterActivity,
    #[serde(rename = "Total Titrable Activity")]
    TotalTitrableActivity,
    #[serde(rename = "Carbohydrates")]
    Carbohydrates,
    #[serde(rename = "Food Energy Value")]
    FoodEnergyValue,
}

impl Parameter {
    /// The full catalog in its fixed display order
    pub const CATALOG: [Parameter; crate::constants::PARAMETER_COUNT] = [
        Parameter::Moisture,
        Parameter::Ash,
        Parameter::CrudeProtein,
        Parameter::TotalFat,
        Parameter::Sugar,
        Parameter::Sodium,
        Parameter::Potassium,
        Parameter::Calcium,
        Parameter::Ph,
        Parameter::WaterActivity,
        Parameter::TotalTitrableActivity,
        Parameter::Carbohydrates,
        Parameter::FoodEnergyValue,
    ];

    /// Display name of the parameter as it appears in both outputs
    pub fn as_str(self) -> &'static str {
        match self {
            Parameter::Moisture => "Moisture",
            Parameter::Ash => "Ash",
            Parameter::CrudeProtein => "Crude Protein",
            Parameter::TotalFat => "Total Fat",
            Parameter::Sugar => "Sugar",
            Parameter::Sodium => "Sodium",
            Parameter::Potassium => "Potassium",
            Parameter::Calcium => "Calcium",
            Parameter::Ph => "pH",
            Parameter::WaterActivity => "Water Activity",
            Parameter::TotalTitrableActivity => "Total Titrable Activity",
            Parameter::Carbohydrates => "Carbohydrates",
            Parameter::FoodEnergyValue => "Food Energy Value",
        }
    }
}

impl FromStr for Parameter {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let name = s.trim();
        Self::CATALOG
            .into_iter()
            .find(|p| p.as_str() == name)
            .ok_or_else(|| Error::unknown_parameter(name))
    }
}

impl std::fmt::Display for Parameter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// =============================================================================
// Header Record
// =============================================================================

/// Header record identifying one submitted sample
///
/// All three fields are free text and required non-empty at validation time.
/// Created once per submission and immutable for its duration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeaderRecord {
    /// Laboratory identifier assigned to this analysis
    pub lab_number: String,

    /// Identifier of the physical sample under test
    pub sample_number: String,

    /// Free-text description of the sample
    pub description: String,
}

impl HeaderRecord {
    /// Create a header record
    pub fn new(
        lab_number: impl Into<String>,
        sample_number: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            lab_number: lab_number.into(),
            sample_number: sample_number.into(),
            description: description.into(),
        }
    }
}

// =============================================================================
// Parameter Measurement Record
// =============================================================================

/// One measurement record for a selected parameter
///
/// `environmental_conditions` and `uncertainty` are optional and may stay
/// empty; `date_started`, `method_used`, `results`, and `unit` are required
/// at validation time. `date_started` is `None` when the date widget was
/// never filled in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParameterRecord {
    /// Catalog parameter this record measures
    pub parameter: Parameter,

    /// Calendar date the measurement was started
    pub date_started: Option<NaiveDate>,

    /// Environmental conditions during measurement (optional)
    #[serde(default)]
    pub environmental_conditions: String,

    /// Analytical method used (e.g., an AOAC reference)
    pub method_used: String,

    /// Measured result value as entered
    pub results: String,

    /// Measurement uncertainty (optional)
    #[serde(default)]
    pub uncertainty: String,

    /// Unit the result is expressed in
    pub unit: String,
}

impl ParameterRecord {
    /// Create an empty record for a parameter, to be filled in by the host UI
    pub fn empty(parameter: Parameter) -> Self {
        Self {
            parameter,
            date_started: None,
            environmental_conditions: String::new(),
            method_used: String::new(),
            results: String::new(),
            uncertainty: String::new(),
            unit: String::new(),
        }
    }
}

// =============================================================================
// Submission Record
// =============================================================================

/// One user-initiated submission: header plus parameter measurements
///
/// Parameter ordering follows user selection order and is preserved into
/// both outputs. Constructed fresh per submit action and discarded after
/// export; nothing here persists across submissions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmissionRecord {
    /// Sample header, shared by every exported row
    pub header: HeaderRecord,

    /// Measurement records in user selection order
    pub parameters: Vec<ParameterRecord>,
}

impl SubmissionRecord {
    /// Create a submission record
    ///
    /// The parameter selection is a set: the same catalog parameter may
    /// appear at most once, and a duplicate is rejected here rather than at
    /// validation time.
    pub fn new(header: HeaderRecord, parameters: Vec<ParameterRecord>) -> Result<Self> {
        let mut seen = HashSet::new();
        for record in &parameters {
            if !seen.insert(record.parameter) {
                return Err(Error::duplicate_parameter(record.parameter.as_str()));
            }
        }

        Ok(Self { header, parameters })
    }

    /// Parameters selected in this submission, in selection order
    pub fn selected_parameters(&self) -> Vec<Parameter> {
        self.parameters.iter().map(|r| r.parameter).collect()
    }
}
