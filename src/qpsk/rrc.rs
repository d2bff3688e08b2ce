//! Root Raised Cosine (RRC) pulse shaping taps
//!
//! Closed-form impulse response with the two analytic singularities
//! (t = 0 and t = ±Ts/(4β)) evaluated from their limits.

use std::f64::consts::{PI, SQRT_2};

/// Generate `filter_width` RRC taps.
///
/// # Arguments
/// * `beta` - Roll-off factor, expected in [0, 1]
/// * `filter_width` - Number of taps
/// * `samples_per_symbol` - Symbol period Ts in samples
///
/// Tap `p` sits at `t = p - filter_width / 2`, so the peak is at index
/// `filter_width / 2` and `taps[p] == taps[filter_width - p]`.
pub fn rrc_coefficients(beta: f64, filter_width: usize, samples_per_symbol: usize) -> Vec<f64> {
    let ts = samples_per_symbol as f64;
    let half = filter_width as f64 / 2.0;

    // With β = 0 there is no second singularity; ±Ts is the first sinc null.
    let t1 = if beta != 0.0 { ts / (4.0 * beta) } else { ts };

    (0..filter_width)
        .map(|p| {
            let t = p as f64 - half;

            if t == 0.0 {
                1.0 + beta * (4.0 / PI - 1.0)
            } else if t == t1 || t == -t1 {
                if beta != 0.0 {
                    let arg = PI / (4.0 * beta);
                    let s = (1.0 + 2.0 / PI) * arg.sin();
                    let c = (1.0 - 2.0 / PI) * arg.cos();
                    (s + c) * (beta / SQRT_2)
                } else {
                    0.0
                }
            } else {
                let pts = PI * t / ts;
                let bt = 4.0 * beta * t / ts;
                let s = (pts * (1.0 - beta)).sin();
                let c = (pts * (1.0 + beta)).cos();
                let div = pts * (1.0 - bt * bt);
                (s + bt * c) / div
            }
        })
        .collect()
}
