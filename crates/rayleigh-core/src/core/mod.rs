//! # Core Module
//!
//! Stateless building blocks of the scattering model.
//!
//! - **Molecules** ([`molecules`]) - Known molecules and their scattering coefficients
//! - **Formula** ([`formula`]) - The intensity formula and its checked evaluation boundary
//! - **Catalogs** ([`catalog`]) - Fixed menu catalogs of wavelengths, diameters and molecules
//!
//! Everything in this module is immutable for the lifetime of the process.

pub mod catalog;
pub mod formula;
pub mod molecules;
