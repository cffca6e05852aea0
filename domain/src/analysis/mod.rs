//! Analysis outcomes returned by the remote collaborator.

pub mod error_detail;
pub mod result;
