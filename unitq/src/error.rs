//! Error taxonomy and the caller-facing report shape
//!
//! Every failure is recoverable at the boundary: the pipeline returns
//! a typed error and has no partial-success side effects.

use serde::Serialize;
use thiserror::Error;

/// Failures surfaced by the query pipeline.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum QueryError {
    /// Input has no "value unit ... separator ... unit" shape, or the
    /// target unit does not classify into any category.
    #[error("could not parse the query")]
    Parse,

    /// Source and target units resolve to different categories, or the
    /// source unit is not in the table.
    #[error("incompatible units: {from} -> {to}")]
    Incompatible { from: String, to: String },

    /// Multi-token quantity whose units are not all summable length.
    #[error("only compound lengths and single values are supported")]
    UnsupportedCompound,

    /// A temperature token outside the known alias set.
    #[error("unknown temperature unit: {0}")]
    UnknownUnit(String),
}

impl QueryError {
    /// Machine-readable kind tag.
    pub fn kind(&self) -> &'static str {
        match self {
            QueryError::Parse => "ParseError",
            QueryError::Incompatible { .. } => "IncompatibleUnitsError",
            QueryError::UnsupportedCompound => "UnsupportedCompoundError",
            QueryError::UnknownUnit(_) => "UnknownUnitError",
        }
    }

    /// Remediation hint for the renderer, when one helps.
    pub fn hint(&self) -> Option<&'static str> {
        match self {
            QueryError::Parse => Some(
                "examples: 5 ft 7 in to cm · 2.4 kg -> lb · 100 km/h в m/s · 32 F to C",
            ),
            QueryError::Incompatible { .. } => Some(
                "both units must belong to the same category (length to length, mass to mass)",
            ),
            QueryError::UnsupportedCompound => Some(
                "compound quantities work for lengths only, e.g. 5 ft 7 in to cm",
            ),
            QueryError::UnknownUnit(_) => None,
        }
    }
}

/// Serializable error payload handed to the renderer.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorReport {
    /// Machine-readable error kind
    pub kind: &'static str,

    /// Human-readable error message
    pub message: String,

    /// Suggestion for fixing the query
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hint: Option<&'static str>,
}

impl From<&QueryError> for ErrorReport {
    fn from(err: &QueryError) -> Self {
        ErrorReport {
            kind: err.kind(),
            message: err.to_string(),
            hint: err.hint(),
        }
    }
}
