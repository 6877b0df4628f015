//! # Rayleigh Core Library
//!
//! A small library for evaluating a simplified Rayleigh-scattering intensity model as a
//! function of light wavelength, molecule type and an optional particle diameter.
//!
//! ## Architectural Philosophy
//!
//! The library follows a three-layer layout so that the arithmetic stays independent of
//! any user interface.
//!
//! - **[`core`]: The Foundation.** Stateless data: the molecule coefficient table, the
//!   intensity formula and the fixed selection catalogs used by interactive front-ends.
//!
//! - **[`engine`]: The Machinery.** Sampling utilities, progress reporting and the
//!   engine error type shared by the workflows.
//!
//! - **[`workflows`]: The Public API.** Complete procedures built on the two layers
//!   below: the fixed self-test scenario and spectrum sampling for plotting.
//!
//! The model is deliberately simplified: it omits the physical proportionality
//! constants, refractive-index terms and number-density factors of real Rayleigh
//! scattering. Only the arithmetic of the simplified formula is meaningful.

pub mod core;
pub mod engine;
pub mod workflows;
