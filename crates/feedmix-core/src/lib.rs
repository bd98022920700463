//! # Feedmix Core Library
//!
//! Nitrogen-utilization model and constrained mix search for dairy-cattle
//! rations blended from grass silage, maize silage and hay.
//!
//! ## Architecture
//!
//! - **[`core`]: The Foundation.** The fixed feed catalog, feed-mix compositions and
//!   the nutrition model that turns a composition into a nutrient profile, a
//!   nitrogen balance and a health verdict.
//!
//! - **[`engine`]: The Search.** Grid configuration, progress reporting and the
//!   exhaustive optimizer that finds the feasible mix with the best protein
//!   utilization.
//!
//! - **[`workflows`]: The Public API.** Entry points that tie the two together,
//!   with logging, for callers such as the command-line interface.

pub mod core;
pub mod engine;
pub mod workflows;
