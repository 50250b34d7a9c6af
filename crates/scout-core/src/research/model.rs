//! Research request and result models.

use serde::{Deserialize, Serialize};

/// Body of a research request.
///
/// `query` is optional so that a missing field reaches validation instead of
/// failing deserialization.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ResearchRequest {
    #[serde(default)]
    pub query: Option<String>,
}

/// The answer returned for a query.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResearchResult {
    pub text: String,
    pub sources: Vec<SourceEntry>,
}

/// An attribution record attached to every answer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SourceEntry {
    pub name: String,
    /// Between 0.0 and 1.0.
    pub confidence: f64,
    pub language: String,
}

impl SourceEntry {
    pub fn new(name: &str, confidence: f64, language: &str) -> Self {
        Self {
            name: name.to_string(),
            confidence,
            language: language.to_string(),
        }
    }
}
