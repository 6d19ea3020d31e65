//! Line-oriented report output.

use crate::harness::Report;
use clap::ValueEnum;
use serde_json::json;
use std::io::{self, Write};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human readable lines
    Text,
    /// One JSON object per line
    Json,
}

/// Writes the processor line and one line per report, flushing each so a
/// line appears as soon as its strategy finishes.
pub struct ReportWriter<W: Write> {
    out: W,
    format: OutputFormat,
}

impl<W: Write> ReportWriter<W> {
    pub fn new(out: W, format: OutputFormat) -> Self {
        Self { out, format }
    }

    pub fn processors(&mut self, count: usize) -> io::Result<()> {
        match self.format {
            OutputFormat::Text => writeln!(self.out, "Number of processor threads = {count}")?,
            OutputFormat::Json => {
                serde_json::to_writer(&mut self.out, &json!({ "processor_threads": count }))?;
                writeln!(self.out)?;
            }
        }
        self.out.flush()
    }

    pub fn report(&mut self, report: &Report) -> io::Result<()> {
        match self.format {
            OutputFormat::Text => writeln!(
                self.out,
                "{} Pi = {}  Time elapse = {}sec  run={}",
                report.strategy.label(),
                report.estimate,
                report.elapsed.as_secs_f64(),
                report.points()
            )?,
            OutputFormat::Json => {
                serde_json::to_writer(&mut self.out, report)?;
                writeln!(self.out)?;
            }
        }
        self.out.flush()
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}
