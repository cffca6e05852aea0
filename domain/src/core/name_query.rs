//! NameQuery value object

use super::error::DomainError;
use serde::{Deserialize, Serialize};

/// A candidate brand name ready to be analyzed (Value Object)
///
/// Construction trims surrounding whitespace and rejects empty input, so a
/// `NameQuery` is always the canonical form that goes over the wire.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct NameQuery {
    name: String,
}

impl NameQuery {
    /// Trim and validate raw user input
    pub fn parse(raw: &str) -> Result<Self, DomainError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(DomainError::EmptyName);
        }
        Ok(Self {
            name: trimmed.to_string(),
        })
    }

    /// Get the trimmed name
    pub fn as_str(&self) -> &str {
        &self.name
    }
}

impl std::fmt::Display for NameQuery {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.name)
    }
}

impl TryFrom<String> for NameQuery {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        NameQuery::parse(&value)
    }
}

impl From<NameQuery> for String {
    fn from(query: NameQuery) -> Self {
        query.name
    }
}
