use crate::commands;
use crate::console::Console;
use crate::error::{CliError, Result};
use crate::render::ChartRenderer;
use rayleigh::engine::progress::ProgressReporter;
use tracing::{info, warn};

const CLOSING_MESSAGE: &str = "Closing program.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    Plot,
    Query,
    Scenario,
    Exit,
}

impl MenuAction {
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "1" => Some(MenuAction::Plot),
            "2" => Some(MenuAction::Query),
            "3" => Some(MenuAction::Scenario),
            "0" => Some(MenuAction::Exit),
            _ => None,
        }
    }
}

fn show_menu(console: &mut dyn Console) -> Result<()> {
    console.println("========== MAIN MENU ==========")?;
    console.println("1. Plot I(λ) for a selected molecule")?;
    console.println("2. Calculate I for user-provided data")?;
    console.println("3. Test mode (automatic checks)")?;
    console.println("0. Exit")?;
    console.println("===============================")
}

/// Runs the main menu until the user picks "0" or the console input ends.
pub fn run(
    console: &mut dyn Console,
    renderer: &mut dyn ChartRenderer,
    reporter: &ProgressReporter,
) -> Result<()> {
    let mut first_run = true;
    loop {
        if first_run {
            first_run = false;
        } else {
            console.println("\n\n")?;
        }
        show_menu(console)?;

        let choice = match console.read_line("\nSelect an option (0–3): \n") {
            Ok(choice) => choice,
            Err(CliError::InputClosed) => return close_on_end_of_input(console),
            Err(e) => return Err(e),
        };

        let outcome = match MenuAction::from_key(choice.trim()) {
            Some(MenuAction::Plot) => {
                info!("Dispatching to 'plot' flow.");
                commands::plot::run(console, renderer, reporter)
            }
            Some(MenuAction::Query) => {
                info!("Dispatching to 'query' flow.");
                commands::query::run(console)
            }
            Some(MenuAction::Scenario) => {
                info!("Dispatching to 'scenario' flow.");
                commands::scenario::run(console)
            }
            Some(MenuAction::Exit) => {
                info!("Exit requested from the main menu.");
                return console.println(CLOSING_MESSAGE);
            }
            None => console.println("\nInvalid choice. Enter 0, 1, 2 or 3.\n"),
        };

        match outcome {
            Ok(()) => {}
            Err(CliError::InputClosed) => return close_on_end_of_input(console),
            Err(e) => return Err(e),
        }
    }
}

fn close_on_end_of_input(console: &mut dyn Console) -> Result<()> {
    warn!("Console input ended, leaving the main menu.");
    console.println(CLOSING_MESSAGE)
}
