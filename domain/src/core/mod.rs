//! Core domain concepts shared across all subdomains.
//!
//! - [`name_query::NameQuery`]: a validated, trimmed brand name
//! - [`error::DomainError`]: domain-level errors

pub mod error;
pub mod name_query;
