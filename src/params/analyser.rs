//! Spectrum analyser configuration for the capture side.

use crate::error::AudioError;

/// FFT analysis configuration producing byte magnitude spectra
#[derive(Debug, Clone)]
pub struct AnalyserConfig {
    /// FFT window size (must be power of 2)
    /// Default: 2048 (= 1024 bins)
    pub fft_size: usize,

    /// Averaging of successive magnitude frames (0 = none, <1)
    /// Browser analyser default: 0.8
    pub smoothing_time_constant: f32,

    /// Level mapped to byte 0 (dBFS)
    pub min_decibels: f32,

    /// Level mapped to byte 255 (dBFS)
    pub max_decibels: f32,
}

impl Default for AnalyserConfig {
    fn default() -> Self {
        Self {
            fft_size: 2048,
            smoothing_time_constant: 0.8,
            min_decibels: -100.0,
            max_decibels: -30.0,
        }
    }
}

impl AnalyserConfig {
    /// Number of magnitude bins produced per frame
    pub fn frequency_bin_count(&self) -> usize {
        self.fft_size / 2
    }

    /// Validate configuration (FFT size must be power of 2, etc.)
    pub fn validate(&self) -> Result<(), AudioError> {
        if !self.fft_size.is_power_of_two() || self.fft_size < 32 {
            return Err(AudioError::InvalidFftSize(self.fft_size));
        }
        if !(0.0..1.0).contains(&self.smoothing_time_constant) {
            return Err(AudioError::InvalidAnalyser(format!(
                "smoothing time constant must be in [0, 1), got {}",
                self.smoothing_time_constant
            )));
        }
        if self.min_decibels >= self.max_decibels {
            return Err(AudioError::InvalidAnalyser(format!(
                "decibel range is empty: [{}, {}]",
                self.min_decibels, self.max_decibels
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_analyser_config() {
        let config = AnalyserConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.frequency_bin_count(), 1024);
    }

    #[test]
    fn test_fft_size_must_be_power_of_two() {
        let config = AnalyserConfig {
            fft_size: 1000,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(AudioError::InvalidFftSize(1000))
        ));
    }
}
