//! FFT analysis producing byte magnitude spectra.

use rustfft::{num_complex::Complex, Fft, FftPlanner};
use std::f32::consts::PI;
use std::sync::Arc;
use tracing::debug;

use crate::error::AudioError;
use crate::params::{AnalyserConfig, MAX_MAGNITUDE};

/// Windowed FFT with frame averaging and dB-to-byte scaling
pub struct SpectrumAnalyser {
    config: AnalyserConfig,
    fft: Arc<dyn Fft<f32>>,
    window: Vec<f32>,
    buffer: Vec<Complex<f32>>,
    scratch: Vec<Complex<f32>>,
    /// Averaged linear magnitudes, one per bin
    smoothed: Vec<f32>,
}

impl SpectrumAnalyser {
    pub fn new(config: AnalyserConfig) -> Result<Self, AudioError> {
        config.validate()?;

        let fft_size = config.fft_size;
        let mut planner = FftPlanner::new();
        let fft = planner.plan_fft_forward(fft_size);
        let scratch_len = fft.get_inplace_scratch_len();

        debug!(
            "SpectrumAnalyser created: fft_size={}, bins={}, smoothing={}",
            fft_size,
            config.frequency_bin_count(),
            config.smoothing_time_constant
        );

        Ok(Self {
            fft,
            window: (0..fft_size).map(|i| hann_window(i, fft_size)).collect(),
            buffer: vec![Complex::new(0.0, 0.0); fft_size],
            scratch: vec![Complex::new(0.0, 0.0); scratch_len],
            smoothed: vec![0.0; config.frequency_bin_count()],
            config,
        })
    }

    pub fn config(&self) -> &AnalyserConfig {
        &self.config
    }

    /// Analyse one window of mono samples into `out` (one byte per bin).
    ///
    /// Uses the last `fft_size` samples; shorter input is zero-padded at
    /// the front.
    pub fn analyse(&mut self, samples: &[f32], out: &mut Vec<u8>) {
        let fft_size = self.config.fft_size;
        let tail = &samples[samples.len().saturating_sub(fft_size)..];
        let pad = fft_size - tail.len();

        // Apply Hann window
        for (i, slot) in self.buffer.iter_mut().enumerate() {
            let sample = if i < pad { 0.0 } else { tail[i - pad] };
            *slot = Complex::new(sample * self.window[i], 0.0);
        }

        self.fft.process_with_scratch(&mut self.buffer, &mut self.scratch);

        let tau = self.config.smoothing_time_constant;
        let db_span = self.config.max_decibels - self.config.min_decibels;
        let scale = 1.0 / fft_size as f32;

        out.clear();
        for (bin, smoothed) in self.smoothed.iter_mut().enumerate() {
            let magnitude = self.buffer[bin].norm() * scale;
            *smoothed = tau * *smoothed + (1.0 - tau) * magnitude;

            let db = 20.0 * smoothed.log10();
            let level = MAX_MAGNITUDE * (db - self.config.min_decibels) / db_span;
            // -inf (silence) clamps to 0
            out.push(level.clamp(0.0, MAX_MAGNITUDE) as u8);
        }
    }

    /// Forget averaged magnitudes (new session)
    pub fn reset(&mut self) {
        self.smoothed.fill(0.0);
    }
}

/// Hann window function for FFT analysis
pub fn hann_window(index: usize, size: usize) -> f32 {
    0.5 * (1.0 - ((2.0 * PI * index as f32) / (size as f32 - 1.0)).cos())
}
