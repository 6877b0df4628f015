use phf::{Map, phf_map};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Coefficient used for any molecule name missing from [`MOLECULE_COEFFICIENTS`].
pub const DEFAULT_COEFFICIENT: f64 = 1.0;

/// Dimensionless scattering coefficients keyed by lower-case molecule name.
pub static MOLECULE_COEFFICIENTS: Map<&'static str, f64> = phf_map! {
    "oxygen" => 1.0,
    "nitrogen" => 0.85,
    "argon" => 0.6,
    "carbon-dioxide" => 0.7,
    "methane" => 0.65,
};

/// Looks up the scattering coefficient for `name`, ignoring ASCII and Unicode case.
///
/// Unknown names are not an error: they fall back to [`DEFAULT_COEFFICIENT`].
pub fn coefficient_for(name: &str) -> f64 {
    MOLECULE_COEFFICIENTS
        .get(name.to_lowercase().as_str())
        .copied()
        .unwrap_or(DEFAULT_COEFFICIENT)
}

#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum MoleculeError {
    #[error("Unknown molecule: '{0}'")]
    Unknown(String),
}

/// The molecules the model carries a dedicated coefficient for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Molecule {
    Oxygen,
    Nitrogen,
    Argon,
    CarbonDioxide,
    Methane,
}

impl Molecule {
    pub const ALL: [Molecule; 5] = [
        Molecule::Oxygen,
        Molecule::Nitrogen,
        Molecule::Argon,
        Molecule::CarbonDioxide,
        Molecule::Methane,
    ];

    /// Canonical lower-case name, also the key into [`MOLECULE_COEFFICIENTS`].
    pub fn name(self) -> &'static str {
        match self {
            Molecule::Oxygen => "oxygen",
            Molecule::Nitrogen => "nitrogen",
            Molecule::Argon => "argon",
            Molecule::CarbonDioxide => "carbon-dioxide",
            Molecule::Methane => "methane",
        }
    }

    /// Title-cased name shown to users.
    pub fn display_name(self) -> &'static str {
        match self {
            Molecule::Oxygen => "Oxygen",
            Molecule::Nitrogen => "Nitrogen",
            Molecule::Argon => "Argon",
            Molecule::CarbonDioxide => "Carbon-Dioxide",
            Molecule::Methane => "Methane",
        }
    }

    pub fn coefficient(self) -> f64 {
        coefficient_for(self.name())
    }
}

impl fmt::Display for Molecule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl FromStr for Molecule {
    type Err = MoleculeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim().to_lowercase();
        Molecule::ALL
            .into_iter()
            .find(|m| m.name() == needle)
            .ok_or_else(|| MoleculeError::Unknown(s.trim().to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn coefficient_for_returns_table_values() {
        assert_eq!(coefficient_for("oxygen"), 1.0);
        assert_eq!(coefficient_for("nitrogen"), 0.85);
        assert_eq!(coefficient_for("argon"), 0.6);
        assert_eq!(coefficient_for("carbon-dioxide"), 0.7);
        assert_eq!(coefficient_for("methane"), 0.65);
    }

    #[test]
    fn coefficient_for_is_case_insensitive() {
        assert_eq!(coefficient_for("NITROGEN"), 0.85);
        assert_eq!(coefficient_for("Carbon-Dioxide"), 0.7);
        assert_eq!(coefficient_for("mEtHaNe"), 0.65);
    }

    #[test]
    fn coefficient_for_unknown_name_falls_back_to_default() {
        assert_eq!(coefficient_for("helium"), DEFAULT_COEFFICIENT);
        assert_eq!(coefficient_for(""), DEFAULT_COEFFICIENT);
        assert_eq!(coefficient_for("carbon dioxide"), DEFAULT_COEFFICIENT);
    }

    #[test]
    fn every_molecule_has_a_table_entry() {
        for molecule in Molecule::ALL {
            assert!(MOLECULE_COEFFICIENTS.contains_key(molecule.name()));
        }
        assert_eq!(MOLECULE_COEFFICIENTS.len(), Molecule::ALL.len());
    }

    #[test]
    fn from_str_accepts_trimmed_mixed_case_names() {
        assert_eq!(" Argon ".parse::<Molecule>(), Ok(Molecule::Argon));
        assert_eq!(
            "CARBON-DIOXIDE".parse::<Molecule>(),
            Ok(Molecule::CarbonDioxide)
        );
    }

    #[test]
    fn from_str_rejects_unknown_names() {
        assert_eq!(
            "xenon".parse::<Molecule>(),
            Err(MoleculeError::Unknown("xenon".to_string()))
        );
    }

    #[test]
    fn display_uses_title_case() {
        assert_eq!(Molecule::CarbonDioxide.to_string(), "Carbon-Dioxide");
        assert_eq!(Molecule::Oxygen.to_string(), "Oxygen");
    }
}
