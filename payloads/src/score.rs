//! The score record and its JSON wire shape.
use serde::{Deserialize, Serialize};

/// One document review: a score per role plus the aggregate grade.
///
/// Field names on the wire are camelCase, and the document name and link go out as `prdDocName`
/// and `prdLink`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreRecord {
    #[serde(rename = "prdDocName")]
    pub document_name: String,
    #[serde(rename = "prdLink")]
    pub document_link: String,
    pub submitter: String,
    pub business_line: String,
    pub product_score: f64,
    pub backend_score: f64,
    pub frontend_score: f64,
    pub qa_score: f64,
    pub design_score: f64,
    #[serde(default)]
    pub global_score: f64,
    #[serde(default)]
    pub global_level: String,
}

#[derive(Debug, thiserror::Error, PartialEq)]
pub enum ValidationError {
    #[error("prdDocName must not be empty")]
    EmptyDocumentName,

    #[error("{field} must be a finite number, got {value}")]
    NonFiniteScore { field: &'static str, value: f64 },
}

impl ScoreRecord {
    /// The scores paired with their wire names, in wire order.
    pub fn scores(&self) -> [(&'static str, f64); 6] {
        [
            ("productScore", self.product_score),
            ("backendScore", self.backend_score),
            ("frontendScore", self.frontend_score),
            ("qaScore", self.qa_score),
            ("designScore", self.design_score),
            ("globalScore", self.global_score),
        ]
    }

    /// Check the constraints serde can't express.
    ///
    /// JSON has no encoding for NaN or infinity, so a non-finite score would silently turn into
    /// `null` on the wire.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.document_name.is_empty() {
            return Err(ValidationError::EmptyDocumentName);
        }

        for (field, value) in self.scores() {
            if !value.is_finite() {
                return Err(ValidationError::NonFiniteScore { field, value });
            }
        }

        Ok(())
    }
}
