//----------------------------------------
// Root lib
//----------------------------------------
//! Gaussian tail and interval probabilities computed by integrating the
//! normal density with the composite Simpson 1/3 rule.

/// This module houses the public API for evaluating densities, integrating
/// them, and computing tail probabilities
pub mod compute;
/// This module contains error types
pub mod error;
mod integration;
mod normal;
mod probability;
/// Formatting of the console report
pub mod report;
