use super::SampleSink;
use crate::error::Result;
use crate::qpsk::config::EncoderConfig;
use num_complex::Complex64;
use std::io::Write;

/// Writes `index,re,im` lines with a fixed number of decimals.
/// The index starts at 1 and runs on across calls.
pub struct CsvWriter<W: Write> {
    writer: W,
    precision: usize,
    counter: u64,
}

impl<W: Write> CsvWriter<W> {
    pub fn new(writer: W, precision: usize) -> Self {
        Self {
            writer,
            precision,
            counter: 1,
        }
    }

    pub fn from_config(writer: W, config: &EncoderConfig) -> Self {
        Self::new(writer, config.csv_rounding)
    }

    /// Number of lines written so far.
    pub fn lines_written(&self) -> u64 {
        self.counter - 1
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> SampleSink for CsvWriter<W> {
    fn write_samples(&mut self, samples: &[Complex64]) -> Result<()> {
        let prec = self.precision;
        for sample in samples {
            writeln!(
                self.writer,
                "{},{:.prec$},{:.prec$}",
                self.counter, sample.re, sample.im
            )?;
            self.counter += 1;
        }
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}
