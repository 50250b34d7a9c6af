//! Simulated research across multiple AI models.
//!
//! Nothing is queried: after a fixed delay the answer is assembled from
//! constants with the query text interpolated.

pub mod model;

use std::time::Duration;

use tracing::debug;

use crate::error::{ScoutError, ScoutResult};
use model::{ResearchResult, SourceEntry};

/// Simulated latency of the model round trip, in milliseconds.
pub const DEFAULT_RESEARCH_DELAY_MS: u64 = 2000;

/// Simulated latency of the model round trip.
pub const DEFAULT_RESEARCH_DELAY: Duration = Duration::from_millis(DEFAULT_RESEARCH_DELAY_MS);

const ANSWER_DETAIL: &str = "This would be implemented using HTML, CSS, JavaScript for the frontend and Python for the backend processing of multiple AI model responses.";

/// Name, confidence and language of the attributed sources, in response order.
const SOURCES: [(&str, f64, &str); 3] = [
    ("GPT-4", 0.92, "Python/JS"),
    ("Gemini", 0.89, "HTML/CSS"),
    ("Claude", 0.87, "JavaScript"),
];

/// Check that a query was supplied.
///
/// Absent and empty queries are rejected. Whitespace is not trimmed.
pub fn validate_query(query: Option<&str>) -> ScoutResult<&str> {
    match query {
        Some(q) if !q.is_empty() => Ok(q),
        _ => Err(ScoutError::MissingQuery),
    }
}

/// The fixed attribution list.
pub fn default_sources() -> Vec<SourceEntry> {
    SOURCES
        .iter()
        .map(|(name, confidence, language)| SourceEntry::new(name, *confidence, language))
        .collect()
}

/// Build the answer for a query without waiting.
///
/// The query is inserted verbatim, quotes and markup included.
pub fn build_result(query: &str) -> ResearchResult {
    ResearchResult {
        text: format!(
            "Based on research across multiple AI models, here's the best answer for \"{}\"...\n\n{}",
            query, ANSWER_DETAIL
        ),
        sources: default_sources(),
    }
}

/// Wait `delay`, then answer the query.
pub async fn research_with_models(query: &str, delay: Duration) -> ResearchResult {
    debug!(?delay, "Simulating model latency");
    if !delay.is_zero() {
        tokio::time::sleep(delay).await;
    }
    build_result(query)
}
