//! Core types for the vecrank vector scoring engine
//!
//! This crate defines the contract types shared across the workspace:
//! - Error taxonomy and `Result` alias
//! - Typed query parameters (`VectorScoreParams`)
//! - The per-query model (`QueryVector`, `ScoringMode`, `IndexPolicy`)
//! - The per-document vector (`DocumentVector`)
//!
//! Scoring logic lives in `vecrank-scoring`; nothing here touches storage
//! or performs per-document work.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod error;
pub mod params;
pub mod query;
pub mod vector;

pub use error::{Error, Result};
pub use params::VectorScoreParams;
pub use query::{IndexPolicy, QueryVector, ScoringMode};
pub use vector::DocumentVector;
