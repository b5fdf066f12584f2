use std::io::Write;

use colored::Colorize;
use futures::{AsyncBufRead, AsyncBufReadExt, StreamExt};
use snafu::{ResultExt, Snafu};
use tracing::debug;

use crate::interpreter::{Interpreter, Message};

/// One interpreter session: a fresh tree fed line by line from a reader, with
/// every resulting message written to `output`.
pub struct Session<W> {
    interpreter: Interpreter,
    output: W,
    colorize: bool,
}

impl<W: Write> Session<W> {
    pub fn new(output: W, colorize: bool) -> Self {
        Self {
            interpreter: Interpreter::new(),
            output,
            colorize,
        }
    }

    /// Reads `reader` to the end, running each line as soon as it arrives.
    /// Returns the number of lines read.
    pub async fn consume<R>(&mut self, reader: R) -> Result<usize, SessionError>
    where
        R: AsyncBufRead + Unpin,
    {
        let mut lines = reader.lines();
        let mut line_number = 0;

        while let Some(line_result) = lines.next().await {
            line_number += 1;
            let line = line_result.context(InputReadSnafu { line_number })?;

            for message in self.interpreter.process_line(&line) {
                self.emit(&message)?;
            }
        }

        self.output.flush().context(OutputWriteSnafu)?;
        debug!("Input exhausted after {} lines", line_number);
        Ok(line_number)
    }

    fn emit(&mut self, message: &Message) -> Result<(), SessionError> {
        let text = message.to_string();
        let result = if self.colorize && message.is_diagnostic() {
            let painted = match message {
                Message::Ignored(_) => text.yellow(),
                _ => text.red(),
            };
            writeln!(self.output, "{}", painted)
        } else {
            writeln!(self.output, "{}", text)
        };
        result.context(OutputWriteSnafu)
    }
}

#[derive(Debug, Snafu)]
pub enum SessionError {
    #[snafu(display("Failed to read input line {}", line_number))]
    InputReadError {
        line_number: usize,
        source: std::io::Error,
    },
    #[snafu(display("Failed to write output"))]
    OutputWriteError { source: std::io::Error },
}

#[cfg(test)]
impl<W: Write> Session<W> {
    pub fn interpreter(&self) -> &Interpreter {
        &self.interpreter
    }

    pub fn into_output(self) -> W {
        self.output
    }
}
