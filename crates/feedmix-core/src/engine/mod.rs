//! # Engine Module
//!
//! The search machinery behind mix optimization.
//!
//! - **Configuration** ([`config`]) - Grid ranges and feasibility bounds
//! - **Optimizer** ([`optimizer`]) - Exhaustive grid search scored by protein utilization
//! - **Progress Monitoring** ([`progress`]) - Optional callbacks for search progress
//! - **Error Handling** ([`error`]) - Engine-specific error types
//!
//! The search is bounded (99 grass/maize pairs on the default grid) and runs
//! synchronously; it holds no state between calls.

pub mod config;
pub mod error;
pub mod optimizer;
pub mod progress;
