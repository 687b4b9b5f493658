//! Live hook narration for the human output format

use super::output::{build_mark, building_prefix, validating_line, BUILDING_HEADER, HEADER};
use crate::progress::{LoggingHandler, ProgressEvent, ProgressHandler};
use std::io::{self, Write};
use std::sync::Mutex;
use tracing::debug;

/// Prints progress lines as they happen and forwards every event to
/// [`LoggingHandler`]
///
/// A build's name is written when it starts and its mark when it ends, so a
/// slow `dotnet build` is visible while it runs.
pub struct ConsoleProgress<W> {
    out: Mutex<W>,
    logging: LoggingHandler,
}

impl ConsoleProgress<io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write + Send> ConsoleProgress<W> {
    pub fn new(out: W) -> Self {
        Self {
            out: Mutex::new(out),
            logging: LoggingHandler,
        }
    }

    pub fn into_inner(self) -> W {
        self.out
            .into_inner()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn write_live(&self, event: &ProgressEvent) -> io::Result<()> {
        let mut out = self
            .out
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());

        match event {
            ProgressEvent::Started { .. } => out.write_all(HEADER.as_bytes())?,
            ProgressEvent::InspectionStarted { files } => {
                out.write_all(validating_line(*files).as_bytes())?
            }
            ProgressEvent::BuildStarted { name, index, .. } => {
                if *index == 1 {
                    out.write_all(BUILDING_HEADER.as_bytes())?;
                }
                out.write_all(building_prefix(name).as_bytes())?;
            }
            ProgressEvent::BuildComplete { succeeded, .. } => {
                writeln!(out, "{}", build_mark(*succeeded))?
            }
            _ => return Ok(()),
        }

        out.flush()
    }
}

impl<W: Write + Send> ProgressHandler for ConsoleProgress<W> {
    fn on_progress(&self, event: &ProgressEvent) {
        self.logging.on_progress(event);

        if let Err(e) = self.write_live(event) {
            debug!(error = %e, "Failed to write progress line");
        }
    }
}
