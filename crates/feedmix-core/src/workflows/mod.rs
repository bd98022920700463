//! # Workflows Module
//!
//! Top-level entry points for callers of the library. Each workflow wires the
//! [`core`](crate::core) model and the [`engine`](crate::engine) search together
//! and logs what it does.
//!
//! - **Evaluation** ([`evaluate`]) - Assess a single feed mix
//! - **Optimization** ([`optimize`]) - Search the grid for the best feasible mix

pub mod evaluate;
pub mod optimize;
