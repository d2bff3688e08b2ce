use crate::qpsk::encoder::EncodeStats;
use crate::utils::consts::PROGRESS_UPDATE_INTERVAL_MS;
use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

/// Spinner on stderr showing how much of the stream has been encoded.
pub struct EncodeProgress {
    pb: ProgressBar,
}

impl EncodeProgress {
    pub fn new() -> Self {
        let pb = ProgressBar::new_spinner();
        pb.set_style(
            ProgressStyle::default_spinner()
                .template(templates::ENCODER)
                .unwrap_or_else(|_| ProgressStyle::default_spinner()),
        );
        pb.set_message("waiting for input");
        // Keep redrawing while the byte source blocks
        pb.enable_steady_tick(Duration::from_millis(PROGRESS_UPDATE_INTERVAL_MS));
        Self { pb }
    }

    pub fn update(&self, stats: &EncodeStats) {
        self.pb.set_position(stats.bytes);
        self.pb
            .set_message(format!("{} samples", stats.samples));
    }

    pub fn finish(&self, stats: &EncodeStats) {
        self.pb.finish_with_message(format!(
            "{} samples, {:.0} bits/sec",
            stats.samples,
            stats.bits_per_second()
        ));
    }
}

impl Default for EncodeProgress {
    fn default() -> Self {
        Self::new()
    }
}

pub mod templates {
    pub const ENCODER: &str =
        "{spinner:.cyan} ENCODE {pos} bytes [{elapsed_precise}] {msg}";
}
