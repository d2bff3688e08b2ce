use crate::qpsk::constellation::Constellation;
use crate::qpsk::bits::byte_to_bits;
use crate::utils::consts::BITS_PER_SYMBOL;
use num_complex::Complex64;

/// Maps bit pairs onto the constellation and holds each point for
/// `samples_per_symbol` samples. Keeps no state between calls.
#[derive(Debug, Clone)]
pub struct Modulator {
    constellation: Constellation,
    samples_per_symbol: usize,
}

impl Modulator {
    pub fn new(constellation: Constellation, samples_per_symbol: usize) -> Self {
        Self {
            constellation,
            samples_per_symbol,
        }
    }

    /// Modulate a bit sequence.
    ///
    /// # Panics
    /// If `bits` has odd length. Callers feed whole bytes, so an odd count
    /// means the bit stream is misaligned.
    pub fn modulate(&self, bits: &[bool]) -> Vec<Complex64> {
        let mut out = Vec::with_capacity(self.output_len(bits.len()));
        self.modulate_into(bits, &mut out);
        out
    }

    /// Same as [`Modulator::modulate`], appending to `out`.
    pub fn modulate_into(&self, bits: &[bool], out: &mut Vec<Complex64>) {
        assert!(
            bits.len() % BITS_PER_SYMBOL == 0,
            "Bit sequence length {} is not a multiple of {}",
            bits.len(),
            BITS_PER_SYMBOL
        );

        out.reserve(self.output_len(bits.len()));
        for pair in bits.chunks_exact(BITS_PER_SYMBOL) {
            let symbol = self.constellation.map(pair[0], pair[1]);
            out.extend(std::iter::repeat_n(symbol, self.samples_per_symbol));
        }
    }

    pub fn modulate_byte_into(&self, byte: u8, out: &mut Vec<Complex64>) {
        self.modulate_into(&byte_to_bits(byte), out);
    }

    /// Number of samples produced for `bit_count` bits.
    pub fn output_len(&self, bit_count: usize) -> usize {
        bit_count / BITS_PER_SYMBOL * self.samples_per_symbol
    }
}
