use super::{SelectionError, prompt_until};
use crate::console::Console;
use crate::error::Result;
use crate::render::{Chart, ChartRenderer};
use rayleigh::core::catalog::{PLOT_MOLECULES, plot_molecule_by_name};
use rayleigh::engine::progress::ProgressReporter;
use rayleigh::workflows::spectrum::{self, Spectrum};
use tracing::{error, info};

fn show_molecules(console: &mut dyn Console) -> Result<()> {
    console.println("\n Available molecules:")?;
    for molecule in &PLOT_MOLECULES {
        console.println(&format!(" - {}", molecule))?;
    }
    Ok(())
}

pub fn build_chart(spectrum: &Spectrum) -> Chart {
    Chart {
        points: spectrum.points.clone(),
        x_label: "Wavelength (nm)".to_string(),
        y_label: "Scattering intensity".to_string(),
        title: "Rayleigh scattering".to_string(),
        legend: format!("I(λ) for {}", spectrum.molecule),
        name: spectrum.molecule.name().to_string(),
    }
}

/// Asks for a molecule, samples its visible spectrum and hands it to `renderer`.
///
/// Returns once the user dismisses the chart.
pub fn run(
    console: &mut dyn Console,
    renderer: &mut dyn ChartRenderer,
    reporter: &ProgressReporter,
) -> Result<()> {
    let molecule = prompt_until(
        console,
        show_molecules,
        "Choose a molecule from the list: ",
        |name| plot_molecule_by_name(name).ok_or(SelectionError::UnknownMolecule),
    )?;
    info!("Plotting spectrum for {}.", molecule.name());

    let spectrum = spectrum::visible(molecule, reporter)?;
    let chart = build_chart(&spectrum);

    match renderer.render(&chart) {
        Ok(path) => {
            console.println(&format!("Chart saved to {}", path.display()))?;
            console.read_line("Press Enter to close the chart and continue...\n")?;
        }
        Err(e) => {
            error!("Chart rendering failed: {}", e);
            console.println(&format!("Error: {}", e))?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::console::testing::{output, scripted};
    use crate::error::CliError;
    use std::path::PathBuf;

    #[derive(Default)]
    struct RecordingRenderer {
        charts: Vec<Chart>,
        fail: bool,
    }

    impl ChartRenderer for RecordingRenderer {
        fn render(&mut self, chart: &Chart) -> Result<PathBuf> {
            self.charts.push(chart.clone());
            if self.fail {
                return Err(CliError::Render {
                    path: PathBuf::from("nowhere.svg"),
                    message: "backend unavailable".to_string(),
                });
            }
            Ok(PathBuf::from(format!("rayleigh-{}.svg", chart.name)))
        }
    }

    #[test]
    fn listed_molecule_renders_once_with_hundred_samples() {
        let mut console = scripted(&["Oxygen", ""]);
        let mut renderer = RecordingRenderer::default();

        run(&mut console, &mut renderer, &ProgressReporter::new()).unwrap();

        assert_eq!(renderer.charts.len(), 1);
        let chart = &renderer.charts[0];
        assert_eq!(chart.points.len(), 100);
        assert_eq!(chart.points[0].0, 380.0);
        assert_eq!(chart.points[99].0, 750.0);
        assert_eq!(chart.legend, "I(λ) for Oxygen");
        assert_eq!(chart.title, "Rayleigh scattering");
        assert_eq!(chart.x_label, "Wavelength (nm)");
        assert_eq!(chart.y_label, "Scattering intensity");
        assert!(output(&console).contains("Chart saved to rayleigh-oxygen.svg"));
    }

    #[test]
    fn unlisted_molecule_reprompts_without_rendering() {
        let mut console = scripted(&["helium", "carbon dioxide", " CARBON-DIOXIDE ", ""]);
        let mut renderer = RecordingRenderer::default();

        run(&mut console, &mut renderer, &ProgressReporter::new()).unwrap();

        let out = output(&console);
        assert_eq!(out.matches("Unknown molecule").count(), 2);
        assert_eq!(out.matches("Available molecules:").count(), 3);
        assert_eq!(renderer.charts.len(), 1);
        assert_eq!(renderer.charts[0].name, "carbon-dioxide");
        assert_eq!(renderer.charts[0].legend, "I(λ) for Carbon-Dioxide");
    }

    #[test]
    fn closed_input_before_valid_choice_never_renders() {
        let mut console = scripted(&["helium"]);
        let mut renderer = RecordingRenderer::default();

        let result = run(&mut console, &mut renderer, &ProgressReporter::new());

        assert!(matches!(result, Err(CliError::InputClosed)));
        assert!(renderer.charts.is_empty());
    }

    #[test]
    fn argon_is_available_for_plotting() {
        let mut console = scripted(&["argon", ""]);
        let mut renderer = RecordingRenderer::default();

        run(&mut console, &mut renderer, &ProgressReporter::new()).unwrap();

        assert_eq!(renderer.charts[0].name, "argon");
    }

    #[test]
    fn render_failure_is_reported_and_flow_returns() {
        let mut console = scripted(&["methane"]);
        let mut renderer = RecordingRenderer {
            fail: true,
            ..Default::default()
        };

        run(&mut console, &mut renderer, &ProgressReporter::new()).unwrap();

        let out = output(&console);
        assert!(out.contains("Error: Failed to render chart"));
        assert!(!out.contains("Press Enter"));
    }
}
