pub mod progress;

use crate::qpsk::config::EncoderConfig;

pub fn print_banner(config: &EncoderConfig) {
    eprintln!(
        "QPSK encoder: {} taps, {} samples/symbol, beta={:.2}",
        config.filter_width, config.samples_per_symbol, config.beta
    );
}
