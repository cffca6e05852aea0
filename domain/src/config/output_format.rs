//! Output format value object

use serde::{Deserialize, Serialize};

/// How a one-shot analysis is written to stdout
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Rendered markdown with terminal styles (default)
    #[default]
    Styled,
    /// Rendered markdown as plain text
    Plain,
    /// JSON object with the name, status and analysis
    Json,
}
