//! The interactive flows reachable from the main menu.
//!
//! Every prompt is a retry loop: a rejected entry prints a [`SelectionError`]
//! message and re-displays the same catalog. Selection errors never leave
//! the flow that raised them.

pub mod plot;
pub mod query;
pub mod scenario;

use crate::console::Console;
use crate::error::Result;
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error, PartialEq, Eq, Clone, Copy)]
pub enum SelectionError {
    #[error("Invalid wavelength choice. Please try again.")]
    Wavelength,

    #[error("Invalid molecule choice. Please try again.")]
    Molecule,

    #[error("Invalid diameter choice. Please try again.")]
    Diameter,

    #[error("Unknown molecule. Choose one from the list.")]
    UnknownMolecule,
}

/// Shows a catalog and reads input until `parse` accepts the trimmed entry.
pub(crate) fn prompt_until<T>(
    console: &mut dyn Console,
    show_catalog: impl Fn(&mut dyn Console) -> Result<()>,
    prompt: &str,
    parse: impl Fn(&str) -> std::result::Result<T, SelectionError>,
) -> Result<T> {
    loop {
        show_catalog(console)?;
        let input = console.read_line(prompt)?;
        match parse(input.trim()) {
            Ok(value) => return Ok(value),
            Err(e) => {
                debug!(input = %input, "Rejected selection: {}", e);
                console.println(&e.to_string())?;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::console::testing::{output, scripted};
    use crate::error::CliError;

    fn show(console: &mut dyn Console) -> Result<()> {
        console.println("catalog")
    }

    fn parse_yes(input: &str) -> std::result::Result<bool, SelectionError> {
        if input == "yes" {
            Ok(true)
        } else {
            Err(SelectionError::Molecule)
        }
    }

    #[test]
    fn prompt_until_retries_until_accepted() {
        let mut console = scripted(&["no", "maybe", "  yes "]);
        let value = prompt_until(&mut console, show, "> ", parse_yes).unwrap();
        assert!(value);

        let out = output(&console);
        assert_eq!(out.matches("catalog").count(), 3);
        assert_eq!(out.matches("Invalid molecule choice").count(), 2);
    }

    #[test]
    fn prompt_until_propagates_closed_input() {
        let mut console = scripted(&["no"]);
        let result = prompt_until(&mut console, show, "> ", parse_yes);
        assert!(matches!(result, Err(CliError::InputClosed)));
    }
}
