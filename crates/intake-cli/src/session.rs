//! The interactive desk session.
//!
//! A session borrows the queue it drives, so the caller decides which queue is used and can
//! inspect it once the session ends.

use std::io::{self, BufRead, Write};

use intake_core::{Admission, PatientQueue};

use crate::command::{parse_line, Command};
use crate::render::{self, SnapshotFormat};

pub const PROMPT: &str = "Enter command: ";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SessionOptions {
    /// Write [`PROMPT`] before reading each line.
    pub prompt: bool,
    pub format: SnapshotFormat,
}

impl Default for SessionOptions {
    fn default() -> Self {
        Self {
            prompt: true,
            format: SnapshotFormat::Text,
        }
    }
}

/// Whether the read loop keeps going after a command.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

pub struct Session<'q, W> {
    queue: &'q mut PatientQueue,
    out: W,
    options: SessionOptions,
}

impl<'q, W: Write> Session<'q, W> {
    pub fn new(queue: &'q mut PatientQueue, out: W, options: SessionOptions) -> Self {
        Self {
            queue,
            out,
            options,
        }
    }

    /// Reads commands until `EXIT` or end of input.
    ///
    /// Lines are decoded lossily, so bytes that are not UTF-8 become an invalid command
    /// instead of ending the session.
    ///
    /// # Errors
    ///
    /// Returns an I/O error if reading the input or writing feedback fails.
    pub fn run<R: BufRead>(&mut self, mut input: R) -> io::Result<()> {
        let mut buf = Vec::new();
        loop {
            if self.options.prompt {
                write!(self.out, "{PROMPT}")?;
                self.out.flush()?;
            }

            buf.clear();
            if input.read_until(b'\n', &mut buf)? == 0 {
                tracing::debug!("end of input");
                break;
            }

            let line = String::from_utf8_lossy(&buf);
            if self.execute(parse_line(&line))? == Flow::Exit {
                break;
            }
        }
        self.out.flush()
    }

    /// Applies a single command to the queue and writes its feedback.
    pub fn execute(&mut self, command: Command) -> io::Result<Flow> {
        match command {
            Command::Admit { mr_number, gender } => {
                let outcome = self.queue.admit(&mr_number, &gender);
                writeln!(self.out, "{}", render::admission(&mr_number, &gender, &outcome))?;
                if outcome.is_admitted() || outcome == Admission::Duplicate {
                    self.write_snapshot()?;
                }
            }
            Command::Dispatch => {
                let patient = self.queue.dispatch();
                writeln!(self.out, "{}", render::dispatch(patient.as_ref()))?;
                if patient.is_some() {
                    self.write_snapshot()?;
                }
            }
            Command::SetDiscipline(discipline) => {
                let report = self.queue.set_discipline(discipline);
                for line in render::reorder(&report) {
                    writeln!(self.out, "{line}")?;
                }
                self.write_snapshot()?;
            }
            Command::Exit => {
                writeln!(self.out, "{}", render::FAREWELL)?;
                return Ok(Flow::Exit);
            }
            Command::InvalidInput => writeln!(self.out, "{}", render::INVALID_INPUT)?,
            Command::InvalidCommand => writeln!(self.out, "{}", render::INVALID_COMMAND)?,
        }
        Ok(Flow::Continue)
    }

    fn write_snapshot(&mut self) -> io::Result<()> {
        let snapshot = render::snapshot(&*self.queue, self.options.format)?;
        writeln!(self.out, "{snapshot}")
    }
}
