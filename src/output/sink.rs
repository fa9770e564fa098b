//! Output destination handling

use std::fs::File;
use std::io::{BufWriter, Write};

use log::debug;
use termcolor::{Ansi, ColorChoice, NoColor, StandardStream, WriteColor};

use crate::error::{Result, TreeError};

/// Destination name meaning standard output.
pub const STDOUT: &str = "stdout";

/// The single writable destination of one run.
///
/// Opened once, after the walk has finished, and flushed by [`OutputSink::finish`].
pub struct OutputSink {
    destination: String,
    writer: Box<dyn WriteColor>,
}

impl OutputSink {
    /// Open `destination`: `"stdout"` or a file path, created or truncated.
    pub fn open(destination: &str, use_color: bool) -> Result<Self> {
        let writer: Box<dyn WriteColor> = if destination == STDOUT {
            let choice = if use_color {
                ColorChoice::Always
            } else {
                ColorChoice::Never
            };
            Box::new(StandardStream::stdout(choice))
        } else {
            let file = File::create(destination).map_err(|e| TreeError::sink(destination, e))?;
            debug!("writing output to {}", destination);
            let file = BufWriter::new(file);
            if use_color {
                Box::new(Ansi::new(file))
            } else {
                Box::new(NoColor::new(file))
            }
        };

        Ok(Self {
            destination: destination.to_string(),
            writer,
        })
    }

    pub fn destination(&self) -> &str {
        &self.destination
    }

    pub fn writer(&mut self) -> &mut dyn WriteColor {
        self.writer.as_mut()
    }

    /// Flush and release the destination.
    pub fn finish(mut self) -> Result<()> {
        self.writer
            .flush()
            .map_err(|e| TreeError::sink(self.destination.clone(), e))
    }
}
