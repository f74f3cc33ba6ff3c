//! Application layer orchestrating batch evaluation.
//!
//! This module defines the `BatchEvaluator` which drives decoded numbers
//! through the Luhn operations and accumulates one report row per number.

pub mod report;
