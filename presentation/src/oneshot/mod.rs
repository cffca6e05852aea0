//! One-shot mode: analyze a single name and print the result

mod runner;

pub use runner::{OneShotOutcome, OneShotRunner};
