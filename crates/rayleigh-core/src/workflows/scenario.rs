use crate::core::formula::intensity;
use crate::core::molecules::Molecule;
use std::fmt;
use tracing::{debug, instrument};

/// The fixed self-test cases, evaluated in this order.
pub const SCENARIO_CASES: [(f64, Molecule); 5] = [
    (500.0, Molecule::Oxygen),
    (600.0, Molecule::Nitrogen),
    (700.0, Molecule::Argon),
    (550.0, Molecule::CarbonDioxide),
    (380.0, Molecule::Methane),
];

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScenarioResult {
    pub molecule: Molecule,
    pub wavelength_nm: f64,
    pub intensity: f64,
}

impl fmt::Display for ScenarioResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} @ {} nm → I = {:.4e}",
            self.molecule.display_name(),
            self.wavelength_nm,
            self.intensity
        )
    }
}

#[instrument(skip_all, name = "scenario_workflow")]
pub fn run() -> Vec<ScenarioResult> {
    SCENARIO_CASES
        .iter()
        .map(|&(wavelength_nm, molecule)| {
            let value = intensity(wavelength_nm, molecule.name(), None);
            debug!(
                molecule = molecule.name(),
                wavelength_nm, value, "Scenario case evaluated."
            );
            ScenarioResult {
                molecule,
                wavelength_nm,
                intensity: value,
            }
        })
        .collect()
}
