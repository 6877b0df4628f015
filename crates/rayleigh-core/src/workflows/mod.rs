//! # Workflows Module
//!
//! High-level procedures built on the formula and the engine utilities.
//!
//! - **Scenario Workflow** ([`scenario`]) - The fixed self-test batch of
//!   wavelength/molecule pairs, evaluated without a diameter.
//! - **Spectrum Workflow** ([`spectrum`]) - Samples the intensity of one molecule across
//!   the visible range, ready to be handed to a chart renderer.

pub mod scenario;
pub mod spectrum;
