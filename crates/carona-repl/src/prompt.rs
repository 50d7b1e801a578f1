use std::fmt;
use std::io::{BufRead, Write};
use std::str::FromStr;

use anyhow::Result;
use crossterm::terminal::{self, ClearType};
use crossterm::{cursor, execute};
use tracing::debug;

use crate::{DIM, RESET};

/// Standard input was closed. Ends the session; the store is still saved.
#[derive(Debug)]
pub(crate) struct EndOfInput;

impl fmt::Display for EndOfInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("end of input")
    }
}

impl std::error::Error for EndOfInput {}

/// Line-based prompt/print layer over any reader and writer.
pub(crate) struct Prompter<R, W> {
    input: R,
    output: W,
    clear_screen: bool,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub(crate) fn new(input: R, output: W, clear_screen: bool) -> Self {
        Self {
            input,
            output,
            clear_screen,
        }
    }

    #[cfg(test)]
    pub(crate) fn into_output(self) -> W {
        self.output
    }

    /// Print `message` and read one line, without its line ending.
    pub(crate) fn read_line(&mut self, message: &str) -> Result<String> {
        write!(self.output, "{message}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(EndOfInput.into());
        }
        let trimmed_len = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(trimmed_len);
        Ok(line)
    }

    /// Ask until `parse` accepts the answer. An empty answer returns
    /// `default` when there is one.
    pub(crate) fn prompt<T>(
        &mut self,
        message: &str,
        parse: impl Fn(&str) -> Option<T>,
        mut default: Option<T>,
    ) -> Result<T> {
        loop {
            let line = self.read_line(message)?;
            if line.is_empty() {
                if let Some(value) = default.take() {
                    return Ok(value);
                }
            }
            match parse(&line) {
                Some(value) => return Ok(value),
                None => debug!(input = %line, "invalid input, asking again"),
            }
        }
    }

    /// Free text, empty answers included.
    pub(crate) fn text(&mut self, message: &str) -> Result<String> {
        self.read_line(message)
    }

    pub(crate) fn say(&mut self, text: &str) -> Result<()> {
        writeln!(self.output, "{text}")?;
        Ok(())
    }

    pub(crate) fn pause(&mut self) -> Result<()> {
        self.read_line(&format!("{DIM}Press Enter to continue{RESET}"))?;
        Ok(())
    }

    pub(crate) fn clear(&mut self) -> Result<()> {
        if self.clear_screen {
            execute!(self.output, terminal::Clear(ClearType::All), cursor::MoveTo(0, 0))?;
        }
        Ok(())
    }
}

// ─── Parsers ────────────────────────────────────────────────────────────────

pub(crate) fn parse_number<T: FromStr>(text: &str) -> Option<T> {
    text.trim().parse().ok()
}

pub(crate) fn non_empty(text: &str) -> Option<String> {
    let trimmed = text.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

pub(crate) fn yes_no(text: &str) -> Option<bool> {
    match text.trim().to_lowercase().as_str() {
        "y" | "yes" => Some(true),
        "n" | "no" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn prompter(input: &str) -> Prompter<Cursor<Vec<u8>>, Vec<u8>> {
        Prompter::new(Cursor::new(input.as_bytes().to_vec()), Vec::new(), false)
    }

    #[test]
    fn test_prompt_retries_until_valid() {
        let mut p = prompter("abc\n-1\n\n42\n");
        let value: u32 = p.prompt("n? ", parse_number, None).unwrap();
        assert_eq!(value, 42);

        let output = String::from_utf8(p.into_output()).unwrap();
        assert_eq!(output.matches("n? ").count(), 4);
    }

    #[test]
    fn test_empty_answer_takes_default() {
        let mut p = prompter("\n");
        let value: u32 = p.prompt("n? ", parse_number, Some(7)).unwrap();
        assert_eq!(value, 7);
    }

    #[test]
    fn test_text_keeps_empty_lines_and_strips_crlf() {
        let mut p = prompter("\r\nhello there\r\n");
        assert_eq!(p.text("> ").unwrap(), "");
        assert_eq!(p.text("> ").unwrap(), "hello there");
    }

    #[test]
    fn test_end_of_input() {
        let mut p = prompter("");
        let err = p.text("> ").unwrap_err();
        assert!(err.is::<EndOfInput>());

        let mut p = prompter("nope\n");
        let err = p.prompt("n? ", parse_number::<u32>, None).unwrap_err();
        assert!(err.is::<EndOfInput>());
    }

    #[test]
    fn test_parsers() {
        assert_eq!(parse_number::<u64>(" 12 "), Some(12));
        assert_eq!(parse_number::<u64>("-3"), None);
        assert_eq!(non_empty("  ana "), Some("ana".to_string()));
        assert_eq!(non_empty("   "), None);
        assert_eq!(yes_no("Y"), Some(true));
        assert_eq!(yes_no("no"), Some(false));
        assert_eq!(yes_no("maybe"), None);
    }
}
