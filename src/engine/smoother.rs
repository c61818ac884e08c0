//! Asymmetric attack/release smoothing of byte magnitude spectra.

use tracing::debug;

/// Move each smoothed bin toward its raw value: `attack` when rising,
/// `release` when falling or equal.
///
/// With `attack == release == 1.0` the state becomes a copy of `raw`.
/// Both slices must have the same length.
pub fn smooth_in_place(raw: &[u8], state: &mut [f32], attack: f32, release: f32) {
    debug_assert_eq!(raw.len(), state.len());

    for (value, &sample) in state.iter_mut().zip(raw) {
        let sample = sample as f32;
        let rate = if sample > *value { attack } else { release };
        *value += (sample - *value) * rate;
    }
}

/// Per-session smoothed spectrum with VU-meter ballistics
#[derive(Debug, Clone)]
pub struct SpectrumSmoother {
    state: Vec<f32>,
    attack: f32,
    release: f32,
    /// Value every bin starts from (avoids a jump from silence at startup)
    seed: f32,
}

impl SpectrumSmoother {
    pub fn new(attack: f32, release: f32, seed: f32) -> Self {
        Self {
            state: Vec::new(),
            attack,
            release,
            seed,
        }
    }

    /// Fold one raw spectrum into the state and return the smoothed bins.
    ///
    /// A length different from the current state reseeds the state at the
    /// new length before smoothing.
    pub fn smooth(&mut self, raw: &[u8]) -> &[f32] {
        if raw.len() != self.state.len() {
            debug!(
                "Spectrum size changed ({} -> {} bins), reseeding smoother",
                self.state.len(),
                raw.len()
            );
            self.state.clear();
            self.state.resize(raw.len(), self.seed);
        }

        smooth_in_place(raw, &mut self.state, self.attack, self.release);
        &self.state
    }

    /// Refill every bin with the seed value, keeping the current length
    pub fn reset(&mut self) {
        self.state.fill(self.seed);
    }

    /// Current smoothed bins (empty before the first spectrum)
    pub fn state(&self) -> &[f32] {
        &self.state
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_attack_and_release_rates() {
        let mut state = vec![100.0, 100.0, 100.0];
        smooth_in_place(&[200, 0, 100], &mut state, 0.5, 0.1);

        // Rising bin uses attack, falling bin uses release, equal bin stays put
        assert!((state[0] - 150.0).abs() < 1e-4);
        assert!((state[1] - 90.0).abs() < 1e-4);
        assert!((state[2] - 100.0).abs() < 1e-4);
    }

    #[test]
    fn test_unit_factors_pass_through() {
        let mut state = vec![100.0; 4];
        let raw = [0, 17, 128, 255];
        smooth_in_place(&raw, &mut state, 1.0, 1.0);

        for (s, r) in state.iter().zip(raw) {
            assert_eq!(*s, r as f32);
        }
    }

    #[test]
    fn test_first_spectrum_starts_from_seed() {
        let mut smoother = SpectrumSmoother::new(0.08, 0.02, 100.0);
        assert!(smoother.state().is_empty());

        let smoothed = smoother.smooth(&[0; 8]);

        // Silence at startup only nudges the seed down by the release rate
        assert_eq!(smoothed.len(), 8);
        for value in smoothed {
            assert!((value - 98.0).abs() < 1e-4);
        }
    }

    #[test]
    fn test_size_change_reseeds() {
        let mut smoother = SpectrumSmoother::new(1.0, 1.0, 100.0);
        smoother.smooth(&[255; 4]);
        assert_eq!(smoother.state(), &[255.0; 4]);

        // New session with a different bin count: stale bins are dropped
        let mut smoother_slow = SpectrumSmoother::new(0.5, 0.5, 100.0);
        smoother_slow.smooth(&[255; 4]);
        let smoothed = smoother_slow.smooth(&[100; 6]);
        assert_eq!(smoothed, &[100.0; 6]);
    }

    #[test]
    fn test_reset_restores_seed() {
        let mut smoother = SpectrumSmoother::new(1.0, 1.0, 100.0);
        smoother.smooth(&[3, 250, 40]);
        smoother.reset();
        assert_eq!(smoother.state(), &[100.0; 3]);

        // Idempotent
        smoother.reset();
        assert_eq!(smoother.state(), &[100.0; 3]);
    }
}
