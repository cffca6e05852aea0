//! AnalysisResult value object

use serde::{Deserialize, Serialize};

/// Markdown-bearing analysis text produced by the remote service
///
/// The content is untrusted. It is only ever passed to [`crate::render`],
/// which turns it into inert [`crate::RenderNode`]s.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AnalysisResult {
    markdown: String,
}

impl AnalysisResult {
    pub fn new(markdown: impl Into<String>) -> Self {
        Self {
            markdown: markdown.into(),
        }
    }

    /// Raw markdown as returned by the service
    pub fn markdown(&self) -> &str {
        &self.markdown
    }
}

impl From<String> for AnalysisResult {
    fn from(markdown: String) -> Self {
        Self::new(markdown)
    }
}
