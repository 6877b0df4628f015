use crate::cli::Cli;
use crate::error::{CliError, Result};
use directories::ProjectDirs;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::debug;

const CONFIG_FILE_NAME: &str = "config.toml";

pub struct DefaultsConfig {
    pub output_dir: PathBuf,
    pub width: u32,
    pub height: u32,
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("."),
            width: 1024,
            height: 768,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlotConfig {
    pub output_dir: PathBuf,
    pub width: u32,
    pub height: u32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub plot: PlotConfig,
}

#[derive(Deserialize, Debug, Default)]
#[serde(deny_unknown_fields)]
struct PartialPlotConfig {
    #[serde(rename = "output-dir")]
    output_dir: Option<PathBuf>,
    width: Option<u32>,
    height: Option<u32>,
}

#[derive(Deserialize, Debug, Default)]
#[serde(deny_unknown_fields)]
pub struct PartialAppConfig {
    plot: Option<PartialPlotConfig>,
}

impl PartialAppConfig {
    pub fn from_file(path: &Path) -> Result<Self> {
        debug!("Loading configuration from file: {:?}", path);
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content).map_err(|e| CliError::FileParsing {
            path: path.to_path_buf(),
            source: e.into(),
        })
    }

    /// Loads the explicitly requested file, or the user's config file if one exists.
    ///
    /// An explicit path must exist; the implicit location is optional.
    pub fn discover(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::from_file(path);
        }
        match default_config_path() {
            Some(path) if path.is_file() => Self::from_file(&path),
            _ => {
                debug!("No configuration file found, using built-in defaults.");
                Ok(Self::default())
            }
        }
    }

    pub fn merge_with_cli(self, args: &Cli) -> Result<AppConfig> {
        let defaults = DefaultsConfig::default();
        let plot_file = self.plot.unwrap_or_default();

        let output_dir = args
            .plot_dir
            .clone()
            .or(plot_file.output_dir)
            .unwrap_or(defaults.output_dir);
        let width = plot_file.width.unwrap_or(defaults.width);
        let height = plot_file.height.unwrap_or(defaults.height);

        if width == 0 || height == 0 {
            return Err(CliError::Config(format!(
                "Chart dimensions must be positive, got {}x{}",
                width, height
            )));
        }

        Ok(AppConfig {
            plot: PlotConfig {
                output_dir,
                width,
                height,
            },
        })
    }
}

fn default_config_path() -> Option<PathBuf> {
    ProjectDirs::from("org", "rayleigh", "rayleigh")
        .map(|dirs| dirs.config_dir().join(CONFIG_FILE_NAME))
}

pub fn load(args: &Cli) -> Result<AppConfig> {
    PartialAppConfig::discover(args.config.as_deref())?.merge_with_cli(args)
}
