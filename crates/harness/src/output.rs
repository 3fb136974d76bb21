//! Rendering timing samples to an output stream.

use std::io::Write;

use copybench_core::Result;

use crate::timing::TimingSample;

/// How timing samples are rendered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// `<label>: <seconds> seconds`
    #[default]
    Text,
    /// One JSON object per line: `{"label": ..., "seconds": ...}`
    Json,
}

/// Writes header lines and timing samples to `out`
pub struct SampleWriter<W: Write> {
    out: W,
    format: OutputFormat,
}

impl<W: Write> SampleWriter<W> {
    /// Create a sample writer
    #[must_use]
    pub const fn new(out: W, format: OutputFormat) -> Self {
        Self { out, format }
    }

    /// Write a plain text line, regardless of format
    ///
    /// # Errors
    ///
    /// Returns error if the underlying stream fails
    pub fn line(&mut self, text: &str) -> Result<()> {
        writeln!(self.out, "{text}")?;
        Ok(())
    }

    /// Write an empty line
    ///
    /// # Errors
    ///
    /// Returns error if the underlying stream fails
    pub fn blank(&mut self) -> Result<()> {
        writeln!(self.out)?;
        Ok(())
    }

    /// Write one timing sample in the configured format
    ///
    /// # Errors
    ///
    /// Returns error if JSON encoding or the underlying stream fails
    pub fn sample(&mut self, sample: &TimingSample) -> Result<()> {
        match self.format {
            OutputFormat::Text => writeln!(self.out, "{sample}")?,
            OutputFormat::Json => {
                let json = serde_json::to_string(sample)?;
                writeln!(self.out, "{json}")?;
            }
        }
        Ok(())
    }

    /// Flush the underlying stream
    ///
    /// # Errors
    ///
    /// Returns error if the underlying stream fails
    pub fn flush(&mut self) -> Result<()> {
        self.out.flush()?;
        Ok(())
    }
}
