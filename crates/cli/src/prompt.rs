//! Console prompt primitives.
//!
//! Numeric validation is a pure function over the input text; the retry loops
//! live in [`Console`], which owns the reader/writer pair so that a whole
//! session can be scripted in tests.

use std::io::{self, BufRead, Write};

use stockroom_core::ProductId;

/// Parse operator input as a non-negative quantity.
///
/// `u64` makes a negative count unrepresentable, so the only rejection left
/// is text that is not a number (or is too large to represent).
pub fn parse_quantity(input: &str) -> Option<u64> {
    input.trim().parse().ok()
}

/// Blocking console wrapper around a reader/writer pair.
pub struct Console<R, W> {
    reader: R,
    writer: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    /// Give back the writer (tests inspect the transcript this way).
    pub fn into_writer(self) -> W {
        self.writer
    }

    /// Print `text` followed by a newline.
    pub fn say(&mut self, text: impl AsRef<str>) -> io::Result<()> {
        writeln!(self.writer, "{}", text.as_ref())
    }

    /// Print `prompt` (no trailing newline) and read one line of input.
    ///
    /// End of input is an error: an interactive session cannot continue
    /// without an operator.
    pub fn ask(&mut self, prompt: &str) -> io::Result<String> {
        write!(self.writer, "{prompt}")?;
        self.writer.flush()?;

        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "end of console input",
            ));
        }
        Ok(line.trim_end_matches(['\r', '\n']).to_string())
    }

    /// Ask a yes/no question; a single `y` (case-insensitive) is yes,
    /// anything else is no.
    pub fn yes_no(&mut self, prompt: &str) -> io::Result<bool> {
        let answer = self.ask(prompt)?;
        Ok(answer.trim().eq_ignore_ascii_case("y"))
    }

    /// Ask for a non-negative quantity, re-prompting until the input parses.
    ///
    /// This is the validation contract for every numeric prompt in the
    /// session.
    pub fn quantity(&mut self, prompt: &str) -> io::Result<u64> {
        loop {
            let raw = self.ask(prompt)?;
            match parse_quantity(&raw) {
                Some(value) => return Ok(value),
                None => self.say("Invalid input. Please enter a non-negative number.")?,
            }
        }
    }

    /// Ask for a product id, stripping field-delimiter characters so the
    /// persisted file stays parseable. Re-prompts while the cleaned-up input
    /// is empty.
    pub fn product_id(&mut self, prompt: &str) -> io::Result<ProductId> {
        loop {
            let raw = self.ask(prompt)?;
            match ProductId::sanitize(&raw) {
                Ok(id) => return Ok(id),
                Err(_) => self.say("Invalid input. Please enter a product ID.")?,
            }
        }
    }
}
