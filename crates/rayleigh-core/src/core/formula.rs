use super::molecules::coefficient_for;
use thiserror::Error;
use tracing::trace;

const NANOMETER: f64 = 1e-9;

#[derive(Debug, Error, PartialEq, Clone)]
pub enum FormulaError {
    #[error(
        "Intensity for {molecule} at {wavelength_nm} nm is not a finite number (got {value})"
    )]
    NonFinite {
        molecule: String,
        wavelength_nm: f64,
        value: f64,
    },
}

/// Evaluates the simplified scattering intensity `k / λ⁴`, optionally scaled by `d⁶`.
///
/// Wavelength and diameter are given in nanometres and converted to metres before
/// use. The coefficient `k` comes from the molecule table with a fallback of `1.0`
/// for unknown names, so this function is total.
///
/// A diameter of exactly zero is treated the same as no diameter at all: the
/// diameter term is only applied for non-zero values.
#[inline]
pub fn intensity(wavelength_nm: f64, molecule_name: &str, diameter_nm: Option<f64>) -> f64 {
    let k = coefficient_for(molecule_name);
    let wavelength_m = wavelength_nm * NANOMETER;
    let base = k / wavelength_m.powi(4);

    match diameter_nm {
        Some(d) if d != 0.0 => {
            let diameter_m = d * NANOMETER;
            base * diameter_m.powi(6)
        }
        _ => base,
    }
}

/// One evaluation request for the intensity formula.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IntensitySample<'a> {
    pub wavelength_nm: f64,
    pub molecule_name: &'a str,
    pub diameter_nm: Option<f64>,
}

impl<'a> IntensitySample<'a> {
    pub fn new(wavelength_nm: f64, molecule_name: &'a str, diameter_nm: Option<f64>) -> Self {
        Self {
            wavelength_nm,
            molecule_name,
            diameter_nm,
        }
    }

    /// Checked evaluation. [`intensity`] itself never fails; this rejects results
    /// that are not finite so front-ends never print `inf` or `NaN`.
    pub fn evaluate(&self) -> Result<f64, FormulaError> {
        let value = intensity(self.wavelength_nm, self.molecule_name, self.diameter_nm);
        trace!(
            wavelength_nm = self.wavelength_nm,
            molecule = self.molecule_name,
            diameter_nm = ?self.diameter_nm,
            value,
            "Evaluated intensity sample."
        );
        if value.is_finite() {
            Ok(value)
        } else {
            Err(FormulaError::NonFinite {
                molecule: self.molecule_name.to_string(),
                wavelength_nm: self.wavelength_nm,
                value,
            })
        }
    }
}
