//! # Core Module
//!
//! Stateless domain data and the nutrition model for three-component dairy
//! rations.
//!
//! - **Feed catalog** ([`feeds`]) - The closed set of feeds and their nutrient table
//! - **Compositions** ([`composition`]) - Feed shares and their normalization
//! - **Nutrition model** ([`nutrition`]) - Nutrient blending, nitrogen balance and health rules
//!
//! Everything here is a pure function of its inputs: a composition plus a feed
//! table always produce the same assessment.

pub mod composition;
pub mod feeds;
pub mod nutrition;
