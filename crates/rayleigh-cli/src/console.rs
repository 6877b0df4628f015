use crate::error::{CliError, Result};
use std::io::{self, BufRead, Stdin, Stdout, Write};

/// Line-oriented text I/O used by the interactive flows.
pub trait Console {
    /// Writes `text` followed by a newline.
    fn println(&mut self, text: &str) -> Result<()>;

    /// Writes `prompt` without a newline, then blocks for one line of input.
    ///
    /// The returned line has its line terminator removed but is otherwise raw.
    /// End of input is reported as [`CliError::InputClosed`].
    fn read_line(&mut self, prompt: &str) -> Result<String>;
}

pub struct TerminalConsole<R, W> {
    reader: R,
    writer: W,
}

impl TerminalConsole<io::StdinLock<'static>, Stdout> {
    pub fn stdio() -> Self {
        let stdin: Stdin = io::stdin();
        Self::new(stdin.lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> TerminalConsole<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    #[cfg(test)]
    pub fn writer(&self) -> &W {
        &self.writer
    }
}

impl<R: BufRead, W: Write> Console for TerminalConsole<R, W> {
    fn println(&mut self, text: &str) -> Result<()> {
        writeln!(self.writer, "{}", text)?;
        Ok(())
    }

    fn read_line(&mut self, prompt: &str) -> Result<String> {
        write!(self.writer, "{}", prompt)?;
        self.writer.flush()?;

        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            return Err(CliError::InputClosed);
        }
        while line.ends_with(['\n', '\r']) {
            line.pop();
        }
        Ok(line)
    }
}


#[cfg(test)]
mod tests {
    use super::testing::{output, scripted};
    use super::*;
    use std::io::Cursor;

    #[test]
    fn read_line_prints_prompt_and_strips_terminator() {
        let mut console = scripted(&["  3  "]);
        let line = console.read_line("Your choice: ").unwrap();
        assert_eq!(line, "  3  ");
        assert_eq!(output(&console), "Your choice: ");
    }

    #[test]
    fn read_line_handles_crlf_input() {
        let mut console = TerminalConsole::new(Cursor::new(b"2\r\n".to_vec()), Vec::new());
        assert_eq!(console.read_line("").unwrap(), "2");
    }

    #[test]
    fn read_line_returns_empty_string_for_blank_line() {
        let mut console = scripted(&[""]);
        assert_eq!(console.read_line("> ").unwrap(), "");
    }

    #[test]
    fn read_line_reports_closed_input() {
        let mut console = TerminalConsole::new(Cursor::new(Vec::new()), Vec::new());
        assert!(matches!(
            console.read_line("> "),
            Err(CliError::InputClosed)
        ));
    }

    #[test]
    fn println_appends_newline() {
        let mut console = scripted(&[]);
        console.println("hello").unwrap();
        assert_eq!(output(&console), "hello\n");
    }
}
