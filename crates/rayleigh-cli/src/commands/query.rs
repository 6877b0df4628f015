use super::{SelectionError, prompt_until};
use crate::console::Console;
use crate::error::Result;
use rayleigh::core::catalog::{
    DIAMETER_CHOICES, QUERY_MOLECULES, WAVELENGTH_CHOICES, diameter_by_key,
    query_molecule_by_key, wavelength_by_key,
};
use rayleigh::core::formula::IntensitySample;
use tracing::{debug, warn};

fn show_wavelengths(console: &mut dyn Console) -> Result<()> {
    console.println("\nChoose the light wavelength:")?;
    for choice in &WAVELENGTH_CHOICES {
        console.println(&format!(
            "{}. {} ({} nm)",
            choice.key,
            choice.color_title(),
            choice.wavelength_nm
        ))?;
    }
    Ok(())
}

fn show_molecules(console: &mut dyn Console) -> Result<()> {
    console.println("\nAvailable molecules:")?;
    for (i, molecule) in QUERY_MOLECULES.iter().enumerate() {
        console.println(&format!("{}. {}", i + 1, molecule))?;
    }
    Ok(())
}

fn show_diameters(console: &mut dyn Console) -> Result<()> {
    console.println("\nChoose the molecule diameter (nm):")?;
    for choice in &DIAMETER_CHOICES {
        if let Some(d) = choice.diameter_nm {
            console.println(&format!("{}. {} nm", choice.key, d))?;
        }
    }
    console.println("(press Enter to skip)")
}

/// Guides the user through wavelength, molecule and diameter, then prints one intensity.
pub fn run(console: &mut dyn Console) -> Result<()> {
    let wavelength = prompt_until(console, show_wavelengths, "Your choice (1–5): ", |key| {
        wavelength_by_key(key).ok_or(SelectionError::Wavelength)
    })?;
    let molecule = prompt_until(console, show_molecules, "Choose a molecule (1–4): ", |key| {
        query_molecule_by_key(key).ok_or(SelectionError::Molecule)
    })?;
    let diameter = prompt_until(console, show_diameters, "Your choice: ", |key| {
        diameter_by_key(key).ok_or(SelectionError::Diameter)
    })?;

    let sample = IntensitySample::new(
        wavelength.wavelength_nm,
        molecule.name(),
        diameter.diameter_nm,
    );
    debug!(?sample, "Evaluating user query.");

    match sample.evaluate() {
        Ok(value) => console.println(&format!(
            "\nFor wavelength {} nm ({}) and molecule {} → Intensity: {:.4e}",
            wavelength.wavelength_nm, wavelength.color, molecule, value
        )),
        Err(e) => {
            warn!("Intensity evaluation failed: {}", e);
            console.println(&format!("Error: {}", e))
        }
    }
}
