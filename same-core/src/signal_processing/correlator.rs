//! Matched-filter FSK correlator.
//!
//! Computes a per-window decision metric `f = mark_i² + mark_q² − space_i² −
//! space_q²` by correlating an audio window against precomputed in-phase and
//! quadrature templates for the MARK and SPACE tones. `f > 0` favors MARK,
//! `f < 0` favors SPACE. The templates are recomputed whenever the sample
//! rate changes, so a `Correlator` is cheap to build once per decoder
//! instance and reused across every call to `process_chunk`.

use std::f64::consts::TAU;

use crate::protocol::PhysicalLayer;

/// Precomputed quadrature correlation templates for one sample rate.
#[derive(Debug, Clone)]
pub struct Correlator {
    window_len: usize,
    mark_i: Vec<f64>,
    mark_q: Vec<f64>,
    space_i: Vec<f64>,
    space_q: Vec<f64>,
}

impl Correlator {
    /// Build templates sized to one symbol period at `sample_rate_hz`.
    pub fn new(sample_rate_hz: u32) -> Self {
        let window_len = (sample_rate_hz as f64 / PhysicalLayer::BAUD).round() as usize;
        let mut mark_i = Vec::with_capacity(window_len);
        let mut mark_q = Vec::with_capacity(window_len);
        let mut space_i = Vec::with_capacity(window_len);
        let mut space_q = Vec::with_capacity(window_len);

        for n in 0..window_len {
            let t = n as f64 / sample_rate_hz as f64;
            mark_i.push((TAU * PhysicalLayer::MARK_FREQ_HZ * t).cos());
            mark_q.push((TAU * PhysicalLayer::MARK_FREQ_HZ * t).sin());
            space_i.push((TAU * PhysicalLayer::SPACE_FREQ_HZ * t).cos());
            space_q.push((TAU * PhysicalLayer::SPACE_FREQ_HZ * t).sin());
        }

        Self {
            window_len,
            mark_i,
            mark_q,
            space_i,
            space_q,
        }
    }

    /// Number of samples one correlation window spans.
    pub fn window_len(&self) -> usize {
        self.window_len
    }

    /// Correlate one window of audio against the MARK/SPACE templates and
    /// return the decision metric. Panics if `window` is shorter than
    /// `window_len()`; callers are expected to check buffered length first.
    pub fn decide(&self, window: &[f32]) -> f64 {
        debug_assert!(window.len() >= self.window_len);

        let mut mark_i_corr = 0.0;
        let mut mark_q_corr = 0.0;
        let mut space_i_corr = 0.0;
        let mut space_q_corr = 0.0;

        for n in 0..self.window_len {
            let sample = window[n] as f64;
            mark_i_corr += sample * self.mark_i[n];
            mark_q_corr += sample * self.mark_q[n];
            space_i_corr += sample * self.space_i[n];
            space_q_corr += sample * self.space_q[n];
        }

        (mark_i_corr * mark_i_corr + mark_q_corr * mark_q_corr)
            - (space_i_corr * space_i_corr + space_q_corr * space_q_corr)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::signal_processing::modulation::encode_bit;

    #[test]
    fn mark_tone_yields_positive_metric() {
        let sample_rate = 22050;
        let correlator = Correlator::new(sample_rate);
        let window = encode_bit(true, sample_rate);
        assert!(correlator.decide(&window) > 0.0);
    }

    #[test]
    fn space_tone_yields_negative_metric() {
        let sample_rate = 22050;
        let correlator = Correlator::new(sample_rate);
        let window = encode_bit(false, sample_rate);
        assert!(correlator.decide(&window) < 0.0);
    }

    #[test]
    fn window_len_matches_samples_per_symbol() {
        let correlator = Correlator::new(22050);
        assert_eq!(correlator.window_len(), 42);
    }
}
