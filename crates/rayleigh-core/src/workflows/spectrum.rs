use crate::core::formula::intensity;
use crate::core::molecules::Molecule;
use crate::engine::error::EngineError;
use crate::engine::progress::ProgressReporter;
use crate::engine::sampling::linspace;
use tracing::{info, instrument};

/// Shortest wavelength of the plotted visible range, in nanometres.
pub const VISIBLE_MIN_NM: f64 = 380.0;
/// Longest wavelength of the plotted visible range, in nanometres.
pub const VISIBLE_MAX_NM: f64 = 750.0;
pub const DEFAULT_SAMPLE_COUNT: usize = 100;

#[derive(Debug, Clone, PartialEq)]
pub struct Spectrum {
    pub molecule: Molecule,
    /// `(wavelength_nm, intensity)` pairs in increasing wavelength order.
    pub points: Vec<(f64, f64)>,
}

impl Spectrum {
    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Largest intensity in the series, or `None` when empty.
    pub fn max_intensity(&self) -> Option<f64> {
        self.points.iter().map(|&(_, y)| y).reduce(f64::max)
    }
}

/// Samples the intensity of `molecule` over the visible range without a diameter term.
pub fn visible(molecule: Molecule, reporter: &ProgressReporter) -> Result<Spectrum, EngineError> {
    run(
        molecule,
        VISIBLE_MIN_NM,
        VISIBLE_MAX_NM,
        DEFAULT_SAMPLE_COUNT,
        reporter,
    )
}

#[instrument(skip_all, name = "spectrum_workflow", fields(molecule = molecule.name()))]
pub fn run(
    molecule: Molecule,
    start_nm: f64,
    end_nm: f64,
    num_samples: usize,
    reporter: &ProgressReporter,
) -> Result<Spectrum, EngineError> {
    let wavelengths = linspace(start_nm, end_nm, num_samples)?;
    let points = reporter.phase("Sampling spectrum", || {
        reporter.track(wavelengths.into_iter(), |wavelength_nm| {
            (wavelength_nm, intensity(wavelength_nm, molecule.name(), None))
        })
    });
    info!(
        "Sampled {} points between {} and {} nm.",
        points.len(),
        start_nm,
        end_nm
    );

    Ok(Spectrum { molecule, points })
}
