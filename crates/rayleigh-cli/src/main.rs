mod cli;
mod commands;
mod config;
mod console;
mod error;
mod logging;
mod menu;
mod render;
mod utils;

use crate::cli::Cli;
use crate::console::TerminalConsole;
use crate::error::{CliError, Result};
use crate::render::SvgChartRenderer;
use crate::utils::progress::CliProgressHandler;
use clap::Parser;
use rayleigh::engine::progress::ProgressReporter;
use tracing::{debug, error, info};

fn main() {
    if let Err(e) = run_app() {
        eprintln!("\n❌ Error: {}", e);
        std::process::exit(1);
    }
}

fn run_app() -> Result<()> {
    let cli = Cli::parse();
    logging::setup_logging(cli.verbose, cli.quiet, cli.log_file.as_deref())?;

    let (panic_hook, eyre_hook) = color_eyre::config::HookBuilder::default().into_hooks();
    eyre_hook.install().map_err(|e| CliError::Other(e.into()))?;
    std::panic::set_hook(Box::new(move |pi| {
        error!("{}", panic_hook.panic_report(pi));
    }));

    info!("Rayleigh CLI v{} starting up.", env!("CARGO_PKG_VERSION"));
    debug!("Full CLI arguments parsed: {:?}", &cli);

    let app_config = config::load(&cli)?;
    debug!("Effective configuration: {:?}", &app_config);

    let mut console = TerminalConsole::stdio();
    let mut renderer = SvgChartRenderer::new(app_config.plot);
    let progress_handler = CliProgressHandler::new();
    let reporter = ProgressReporter::with_callback(progress_handler.get_callback());

    let result = menu::run(&mut console, &mut renderer, &reporter);
    match &result {
        Ok(()) => info!("Menu closed normally."),
        Err(e) => error!("Menu terminated with an error: {}", e),
    }
    result
}
