//! Hinterland engine library.
//!
//! Exposes the weighted-graph engine, the token board, the placement
//! strategies, and the match driver for use by integration tests and
//! the binary entry point.

pub mod board;
pub mod driver;
pub mod graph;
pub mod strategy;
