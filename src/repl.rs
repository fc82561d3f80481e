//! The interactive shell: prompt, read a line, dispatch, print.

use std::io::{BufRead, Write};

use tracing::debug;

use crate::PROMPT;
use crate::dispatcher::{Dispatcher, Outcome};
use crate::error::ReplError;

struct InputBuffer {
    bytes: Vec<u8>,
    buffer: String,
}

impl InputBuffer {
    fn new() -> Self {
        Self {
            bytes: Vec::new(),
            buffer: String::new(),
        }
    }

    /// Reads the next line, without its line terminator. Bytes that are not
    /// valid UTF-8 become U+FFFD instead of failing the read.
    fn read_input(&mut self, reader: &mut impl BufRead) -> Result<&str, ReplError> {
        self.bytes.clear();
        let bytes_read = reader
            .read_until(b'\n', &mut self.bytes)
            .map_err(ReplError::Input)?;
        if bytes_read == 0 {
            return Err(ReplError::EndOfInput);
        }
        self.buffer = String::from_utf8_lossy(&self.bytes).into_owned();
        Ok(self.buffer.trim_end_matches(['\n', '\r']))
    }
}

pub struct Repl<R, W> {
    reader: R,
    writer: W,
    dispatcher: Dispatcher,
}

impl<R: BufRead, W: Write> Repl<R, W> {
    pub fn new(reader: R, writer: W, dispatcher: Dispatcher) -> Self {
        Self {
            reader,
            writer,
            dispatcher,
        }
    }

    /// Runs until `.exit` or until input can no longer be read.
    ///
    /// A read failure is reported on the output before it is returned.
    pub fn run(mut self) -> Result<(), ReplError> {
        let mut input_buffer = InputBuffer::new();

        loop {
            self.print_prompt()?;

            let input = match input_buffer.read_input(&mut self.reader) {
                Ok(input) => input,
                Err(err) => {
                    writeln!(self.writer, "{err}")?;
                    self.writer.flush()?;
                    return Err(err);
                }
            };
            debug!(input, "read line");

            match self.dispatcher.dispatch(input) {
                Outcome::Terminate => break,
                Outcome::Executed { rows } => {
                    for row in rows {
                        writeln!(self.writer, "{row}")?;
                    }
                    writeln!(self.writer, "Executed.")?;
                }
                Outcome::Failed(err) => writeln!(self.writer, "{err}")?,
            }
        }

        self.writer.flush()?;
        self.dispatcher.shutdown();
        Ok(())
    }

    fn print_prompt(&mut self) -> Result<(), ReplError> {
        write!(self.writer, "{PROMPT}")?;
        self.writer.flush()?;
        Ok(())
    }
}
