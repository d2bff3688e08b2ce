pub mod csv;

pub use csv::CsvWriter;

use crate::error::Result;
use num_complex::Complex64;

/// Receives filtered samples in stream order.
pub trait SampleSink {
    fn write_samples(&mut self, samples: &[Complex64]) -> Result<()>;

    fn flush(&mut self) -> Result<()> {
        Ok(())
    }
}

impl SampleSink for Vec<Complex64> {
    fn write_samples(&mut self, samples: &[Complex64]) -> Result<()> {
        self.extend_from_slice(samples);
        Ok(())
    }
}

/// Drops every sample; used when only throughput matters.
#[derive(Debug, Default)]
pub struct DiscardSink {
    pub samples: u64,
}

impl SampleSink for DiscardSink {
    fn write_samples(&mut self, samples: &[Complex64]) -> Result<()> {
        self.samples += samples.len() as u64;
        Ok(())
    }
}

impl<S: SampleSink + ?Sized> SampleSink for &mut S {
    fn write_samples(&mut self, samples: &[Complex64]) -> Result<()> {
        (**self).write_samples(samples)
    }

    fn flush(&mut self) -> Result<()> {
        (**self).flush()
    }
}

impl<S: SampleSink + ?Sized> SampleSink for Box<S> {
    fn write_samples(&mut self, samples: &[Complex64]) -> Result<()> {
        (**self).write_samples(samples)
    }

    fn flush(&mut self) -> Result<()> {
        (**self).flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_discard_counts() {
        let mut sink = DiscardSink::default();
        sink.write_samples(&[Complex64::new(1.0, 1.0); 5]).unwrap();
        sink.write_samples(&[]).unwrap();
        sink.flush().unwrap();
        assert_eq!(sink.samples, 5);
    }

    #[test]
    fn test_boxed_sink_forwards() {
        let mut sink: Box<dyn SampleSink> = Box::new(CsvWriter::new(Vec::new(), 2));
        sink.write_samples(&[Complex64::new(0.5, -0.25)]).unwrap();
        sink.flush().unwrap();
    }
}
