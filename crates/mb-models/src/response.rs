//! Search response envelope

use mb_core::result::MbResult;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::problem::Problem;

/// The catalog HTML-escapes double quotes in some response bodies
const ESCAPED_QUOTE: &str = "&#34;";

/// One page of search results
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct MbResponse {
    pub data: Vec<Problem>,
    /// Matches across all pages
    pub total: i64,
    pub aggregate_results: Value,
    pub errors: Value,
}

impl MbResponse {
    /// Decode a raw response body
    pub fn from_body(body: &str) -> MbResult<Self> {
        let body = body.replace(ESCAPED_QUOTE, "\"");
        let response: Self = serde_json::from_str(&body)?;
        tracing::debug!(
            problems = response.data.len(),
            total = response.total,
            "Decoded search response"
        );
        Ok(response)
    }

    /// Whether the catalog reported errors alongside the data
    pub fn has_errors(&self) -> bool {
        !self.errors.is_null()
    }
}

/// Render problems as a JSON array
pub fn problems_as_json(problems: &[Problem]) -> MbResult<String> {
    Ok(serde_json::to_string(problems)?)
}
