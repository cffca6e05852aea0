//! Use cases (application services)

pub mod analyze_name;
pub mod interaction_controller;
