use crate::error::Result;
use crate::output::SampleSink;
use crate::qpsk::{
    config::EncoderConfig, constellation::Constellation, fir::StreamingFir,
    modulator::Modulator, rrc::rrc_coefficients,
};
use crate::utils::consts::{BITS_PER_BYTE, MAX_PREALLOC_SAMPLES};
use num_complex::Complex64;
use std::io::{BufReader, Read};
use std::time::{Duration, Instant};
use tracing::{debug, info};

/// One encoding session: bytes in, pulse-shaped QPSK samples out.
///
/// Modulated samples collect in a pending buffer and go through the filter
/// once it holds `read_buffer_size` samples, or when the stream ends.
pub struct Encoder {
    modulator: Modulator,
    filter: StreamingFir,
    pending: Vec<Complex64>,
    read_buffer_size: usize,
    bytes_in: u64,
    samples_out: u64,
}

impl Encoder {
    pub fn new(config: &EncoderConfig) -> Result<Self> {
        let coefficients = rrc_coefficients(
            config.beta,
            config.filter_width,
            config.samples_per_symbol,
        );
        let filter = StreamingFir::new(coefficients, config.filter_width)?;
        let modulator = Modulator::new(Constellation::qpsk(), config.samples_per_symbol);

        // A byte can push the buffer past the threshold by one byte's worth.
        // Large thresholds grow the buffer on demand.
        let capacity = config.read_buffer_size.min(MAX_PREALLOC_SAMPLES)
            + modulator.output_len(BITS_PER_BYTE);

        debug!(
            "Encoder initialized: {} taps, {} samples/symbol, beta={}, flush at {} samples",
            config.filter_width,
            config.samples_per_symbol,
            config.beta,
            config.read_buffer_size
        );

        Ok(Self {
            modulator,
            filter,
            pending: Vec::with_capacity(capacity),
            read_buffer_size: config.read_buffer_size,
            bytes_in: 0,
            samples_out: 0,
        })
    }

    /// Feed one byte. Filtered samples reach `sink` whenever the pending
    /// buffer reaches the flush threshold.
    pub fn push_byte<S: SampleSink>(&mut self, byte: u8, sink: &mut S) -> Result<()> {
        self.modulator.modulate_byte_into(byte, &mut self.pending);
        self.bytes_in += 1;

        if self.pending.len() >= self.read_buffer_size {
            self.flush_pending(sink)?;
        }
        Ok(())
    }

    pub fn push_bytes<S: SampleSink>(&mut self, bytes: &[u8], sink: &mut S) -> Result<()> {
        for &byte in bytes {
            self.push_byte(byte, sink)?;
        }
        Ok(())
    }

    /// End of stream: filter whatever is still pending and flush the sink.
    pub fn finish<S: SampleSink>(&mut self, sink: &mut S) -> Result<()> {
        if !self.pending.is_empty() {
            self.flush_pending(sink)?;
        }
        sink.flush()
    }

    fn flush_pending<S: SampleSink>(&mut self, sink: &mut S) -> Result<()> {
        let filtered = self.filter.filter(&self.pending);
        self.samples_out += filtered.len() as u64;
        debug!(
            "Flushed {} samples ({} total)",
            filtered.len(),
            self.samples_out
        );
        self.pending.clear();
        sink.write_samples(&filtered)
    }

    pub fn bytes_in(&self) -> u64 {
        self.bytes_in
    }

    pub fn samples_out(&self) -> u64 {
        self.samples_out
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct EncodeStats {
    pub bytes: u64,
    pub samples: u64,
    pub elapsed: Duration,
}

impl EncodeStats {
    pub fn bits_per_second(&self) -> f64 {
        let secs = self.elapsed.as_secs_f64();
        if secs > 0.0 {
            (self.bytes * BITS_PER_BYTE as u64) as f64 / secs
        } else {
            0.0
        }
    }
}

/// Encode every byte from `src` into `sink`.
///
/// `on_progress` runs after each filter pass and once more at the end.
pub fn encode_stream<R: Read, S: SampleSink>(
    config: &EncoderConfig,
    src: R,
    mut sink: S,
    mut on_progress: impl FnMut(&EncodeStats),
) -> Result<EncodeStats> {
    let mut encoder = Encoder::new(config)?;
    let start = Instant::now();
    let mut flushed = 0;

    let stats = |encoder: &Encoder| EncodeStats {
        bytes: encoder.bytes_in(),
        samples: encoder.samples_out(),
        elapsed: start.elapsed(),
    };

    for byte in BufReader::new(src).bytes() {
        encoder.push_byte(byte?, &mut sink)?;
        if encoder.samples_out() != flushed {
            flushed = encoder.samples_out();
            on_progress(&stats(&encoder));
        }
    }
    encoder.finish(&mut sink)?;

    let stats = stats(&encoder);
    on_progress(&stats);
    info!(
        "Encoded {} bytes into {} samples in {:.3} s",
        stats.bytes,
        stats.samples,
        stats.elapsed.as_secs_f64()
    );
    Ok(stats)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(read_buffer_size: usize) -> EncoderConfig {
        EncoderConfig {
            read_buffer_size,
            ..EncoderConfig::default()
        }
    }

    #[test]
    fn test_flushes_at_threshold() {
        // 4 samples/symbol -> 16 samples per byte
        let mut encoder = Encoder::new(&config(32)).unwrap();
        let mut sink: Vec<Complex64> = Vec::new();

        encoder.push_byte(0x1B, &mut sink).unwrap();
        assert!(sink.is_empty());

        encoder.push_byte(0x1B, &mut sink).unwrap();
        assert_eq!(sink.len(), 32);

        encoder.push_byte(0x1B, &mut sink).unwrap();
        assert_eq!(sink.len(), 32);

        encoder.finish(&mut sink).unwrap();
        assert_eq!(sink.len(), 48);
        assert_eq!(encoder.bytes_in(), 3);
        assert_eq!(encoder.samples_out(), 48);
    }

    #[test]
    fn test_threshold_overshoot_is_flushed_whole() {
        let mut encoder = Encoder::new(&config(20)).unwrap();
        let mut sink: Vec<Complex64> = Vec::new();

        encoder.push_bytes(&[1, 2], &mut sink).unwrap();
        assert_eq!(sink.len(), 32);
    }

    #[test]
    fn test_huge_threshold_does_not_preallocate() {
        let config = EncoderConfig::from_json(
            r#"{ "options": { "read_buffer_size": 1000000000000 } }"#,
        )
        .unwrap();
        let mut encoder = Encoder::new(&config).unwrap();
        assert!(encoder.pending.capacity() < config.read_buffer_size);

        let mut sink: Vec<Complex64> = Vec::new();
        encoder.push_bytes(b"ok", &mut sink).unwrap();
        assert!(sink.is_empty());
        encoder.finish(&mut sink).unwrap();
        assert_eq!(sink.len(), 32);
    }

    #[test]
    fn test_finish_without_input() {
        let mut encoder = Encoder::new(&EncoderConfig::default()).unwrap();
        let mut sink: Vec<Complex64> = Vec::new();
        encoder.finish(&mut sink).unwrap();
        assert!(sink.is_empty());
    }

    #[test]
    fn test_output_independent_of_buffer_size() {
        let data: Vec<u8> = (0..=255u8).chain([0x00, 0xFF, 0x5A]).collect();

        let mut reference: Vec<Complex64> = Vec::new();
        encode_stream(&config(1_000_000), data.as_slice(), &mut reference, |_| {}).unwrap();
        assert_eq!(reference.len(), data.len() * 16);

        for size in [1, 16, 17, 100, 1024] {
            let mut out: Vec<Complex64> = Vec::new();
            encode_stream(&config(size), data.as_slice(), &mut out, |_| {}).unwrap();
            assert_eq!(out.len(), reference.len());
            for (i, (a, b)) in out.iter().zip(&reference).enumerate() {
                assert!((a - b).norm() < 1e-9, "size={} sample {}: {} vs {}", size, i, a, b);
            }
        }
    }

    #[test]
    fn test_progress_reports() {
        let mut reports = Vec::new();
        let stats = encode_stream(&config(64), [0u8; 10].as_slice(), Vec::<Complex64>::new(), |s| {
            reports.push(s.samples)
        })
        .unwrap();

        assert_eq!(stats.bytes, 10);
        assert_eq!(stats.samples, 160);
        // Two full flushes of 64, then the 32-sample remainder at the end
        assert_eq!(reports, vec![64, 128, 160]);
    }

    #[test]
    fn test_bits_per_second() {
        let stats = EncodeStats {
            bytes: 1000,
            samples: 16000,
            elapsed: Duration::from_secs(2),
        };
        assert_eq!(stats.bits_per_second(), 4000.0);
        assert_eq!(EncodeStats::default().bits_per_second(), 0.0);
    }
}
