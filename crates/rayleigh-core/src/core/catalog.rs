//! Fixed selection catalogs offered by interactive front-ends.
//!
//! Each catalog maps a literal menu key to a value. Keys are matched exactly;
//! callers are expected to trim surrounding whitespace beforehand.

use super::molecules::Molecule;

/// A named colour with a representative wavelength.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WavelengthChoice {
    pub key: &'static str,
    pub wavelength_nm: f64,
    pub color: &'static str,
}

impl WavelengthChoice {
    /// Colour name with its first letter upper-cased, e.g. `Violet`.
    pub fn color_title(&self) -> String {
        let mut chars = self.color.chars();
        match chars.next() {
            Some(first) => first.to_uppercase().chain(chars).collect(),
            None => String::new(),
        }
    }
}

pub static WAVELENGTH_CHOICES: [WavelengthChoice; 5] = [
    WavelengthChoice {
        key: "1",
        wavelength_nm: 400.0,
        color: "violet",
    },
    WavelengthChoice {
        key: "2",
        wavelength_nm: 450.0,
        color: "blue",
    },
    WavelengthChoice {
        key: "3",
        wavelength_nm: 500.0,
        color: "green",
    },
    WavelengthChoice {
        key: "4",
        wavelength_nm: 580.0,
        color: "yellow",
    },
    WavelengthChoice {
        key: "5",
        wavelength_nm: 650.0,
        color: "red",
    },
];

pub fn wavelength_by_key(key: &str) -> Option<&'static WavelengthChoice> {
    WAVELENGTH_CHOICES.iter().find(|choice| choice.key == key)
}

/// A particle diameter option. The empty key selects "no diameter".
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DiameterChoice {
    pub key: &'static str,
    pub diameter_nm: Option<f64>,
}

pub static DIAMETER_CHOICES: [DiameterChoice; 4] = [
    DiameterChoice {
        key: "1",
        diameter_nm: Some(0.3),
    },
    DiameterChoice {
        key: "2",
        diameter_nm: Some(0.4),
    },
    DiameterChoice {
        key: "3",
        diameter_nm: Some(0.5),
    },
    DiameterChoice {
        key: "",
        diameter_nm: None,
    },
];

pub fn diameter_by_key(key: &str) -> Option<&'static DiameterChoice> {
    DIAMETER_CHOICES.iter().find(|choice| choice.key == key)
}

/// Molecules offered by the single-value query, selected by 1-based position.
pub static QUERY_MOLECULES: [Molecule; 4] = [
    Molecule::Oxygen,
    Molecule::Nitrogen,
    Molecule::CarbonDioxide,
    Molecule::Methane,
];

/// Molecules offered by the spectrum plot, selected by name.
pub static PLOT_MOLECULES: [Molecule; 5] = [
    Molecule::Oxygen,
    Molecule::Nitrogen,
    Molecule::Argon,
    Molecule::CarbonDioxide,
    Molecule::Methane,
];

/// Resolves a 1-based ordinal key such as `"2"` into [`QUERY_MOLECULES`].
pub fn query_molecule_by_key(key: &str) -> Option<Molecule> {
    let index: usize = key.parse().ok()?;
    if key.len() != 1 || index == 0 {
        return None;
    }
    QUERY_MOLECULES.get(index - 1).copied()
}

/// Resolves a case-insensitive molecule name against [`PLOT_MOLECULES`].
pub fn plot_molecule_by_name(name: &str) -> Option<Molecule> {
    let needle = name.to_lowercase();
    PLOT_MOLECULES.iter().copied().find(|m| m.name() == needle)
}
