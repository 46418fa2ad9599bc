//! Validated console input.
//!
//! Every interactive prompt in the tool goes through [`Console`]. Reads block
//! until a valid answer arrives: bad input is rejected with a message and the
//! operator is asked again. The console is generic over its reader and writer
//! so that host shells and tests can drive it with any `BufRead`/`Write` pair.

use std::fmt::Display;
use std::io::{self, BufRead, Write};

use thiserror::Error;

use crate::utils::{non_blank, trim_whitespace};

/// Errors raised while talking to the operator.
#[derive(Error, Debug)]
pub enum InputError {
    #[error("Input stream closed")]
    Closed,

    #[error("Console I/O failed: {0}")]
    Io(#[from] io::Error),
}

/// A prompt/answer channel with an operator.
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl Console<io::StdinLock<'static>, io::Stdout> {
    /// Console bound to the process's standard input and output.
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Write one line of text to the operator.
    pub fn say(&mut self, text: impl Display) -> Result<(), InputError> {
        writeln!(self.output, "{}", text)?;
        self.output.flush()?;
        Ok(())
    }

    /// Read one raw line, without its line terminator.
    pub fn read_line(&mut self) -> Result<String, InputError> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(InputError::Closed);
        }
        while line.ends_with('\n') || line.ends_with('\r') {
            line.pop();
        }
        Ok(line)
    }

    /// Read the next line that is not blank, trimmed.
    pub fn read_required(&mut self) -> Result<String, InputError> {
        loop {
            let line = self.read_line()?;
            let trimmed = trim_whitespace(&line);
            if !trimmed.is_empty() {
                return Ok(trimmed.to_string());
            }
        }
    }

    /// Read an optional value: a blank line yields `None`.
    pub fn read_optional(&mut self) -> Result<Option<String>, InputError> {
        Ok(non_blank(&self.read_line()?))
    }

    /// Read an integer, re-prompting until one is entered.
    ///
    /// Only the first token of the line is considered; anything after it is
    /// discarded. Blank lines are skipped without complaint.
    pub fn read_int(&mut self) -> Result<i64, InputError> {
        loop {
            let line = self.read_line()?;
            let Some(token) = line.split_whitespace().next() else {
                continue;
            };
            match token.parse::<i64>() {
                Ok(value) => return Ok(value),
                Err(_) => self.say("Error. Please enter a valid integer value. ")?,
            }
        }
    }

    /// Read an integer inside `min..=max`.
    pub fn read_int_between(&mut self, min: i64, max: i64) -> Result<i64, InputError> {
        loop {
            let value = self.read_int()?;
            if (min..=max).contains(&value) {
                return Ok(value);
            }
            self.say("Please enter a number which corresponds to one of the options. ")?;
        }
    }

    /// Read a `y`/`n` answer. Callers print the `[y/n]` hint themselves.
    pub fn read_yes_no(&mut self) -> Result<bool, InputError> {
        loop {
            let line = self.read_line()?;
            let Some(answer) = line.trim_start().chars().next() else {
                continue;
            };
            match answer {
                'y' | 'Y' => return Ok(true),
                'n' | 'N' => return Ok(false),
                _ => self.say("Error. Please enter a valid answer. [y/n] ")?,
            }
        }
    }

    /// Consume the console and hand back its writer.
    pub fn into_output(self) -> W {
        self.output
    }
}
