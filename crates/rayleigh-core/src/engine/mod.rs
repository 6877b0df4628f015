//! # Engine Module
//!
//! Supporting machinery shared by the workflows.
//!
//! - **Sampling** ([`sampling`]) - Evenly spaced grids over a closed interval
//! - **Progress Monitoring** ([`progress`]) - Progress events and an optional reporter callback
//! - **Error Handling** ([`error`]) - Engine-specific error types

pub mod error;
pub mod progress;
pub mod sampling;
