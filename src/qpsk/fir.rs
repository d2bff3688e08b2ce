//! Streaming direct-form FIR filter over complex samples.
//!
//! The filter keeps the last `filter_width - 1` input samples between calls,
//! so filtering a stream chunk by chunk gives the same output as filtering
//! it in one go.

use crate::error::{EncoderError, Result};
use num_complex::Complex64;
use tracing::trace;

#[derive(Debug, Clone)]
pub struct StreamingFir {
    coefficients: Vec<f64>,
    /// Holds exactly `filter_width - 1` samples between calls, oldest first.
    /// During a call the new chunk is appended behind them.
    window: Vec<Complex64>,
}

impl StreamingFir {
    /// Create a filter with zeroed history.
    ///
    /// Fails if `coefficients` is empty or its length differs from
    /// `filter_width`.
    pub fn new(coefficients: Vec<f64>, filter_width: usize) -> Result<Self> {
        if coefficients.is_empty() {
            return Err(EncoderError::EmptyFilter);
        }
        if coefficients.len() != filter_width {
            return Err(EncoderError::CoefficientMismatch {
                expected: filter_width,
                actual: coefficients.len(),
            });
        }

        let history_len = filter_width - 1;
        Ok(Self {
            coefficients,
            window: vec![Complex64::new(0.0, 0.0); history_len],
        })
    }

    /// Filter the next chunk of the stream.
    ///
    /// Returns one output per input sample. `y[n] = sum_k c[k] * x[n - k]`,
    /// reaching back into previous chunks through the kept history.
    pub fn filter(&mut self, samples: &[Complex64]) -> Vec<Complex64> {
        let history_len = self.window.len();
        self.window.extend_from_slice(samples);

        let filtered: Vec<Complex64> = (0..samples.len())
            .map(|s| {
                let newest = history_len + s;
                self.coefficients
                    .iter()
                    .enumerate()
                    .fold(Complex64::new(0.0, 0.0), |acc, (k, &c)| {
                        acc + self.window[newest - k] * c
                    })
            })
            .collect();

        // Keep only the trailing context for the next call
        self.window.drain(..samples.len());

        trace!(
            "Filtered {} samples, history {}",
            samples.len(),
            self.window.len()
        );
        filtered
    }
}
