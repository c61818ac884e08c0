//! Capture side: turns microphone or file audio into byte magnitude spectra.
//!
//! Samples are pulled one analysis window per animation frame and run
//! through [`SpectrumAnalyser`], which mimics a browser analyser node.

#[cfg(feature = "capture")]
mod capture;
mod fft;
mod wav;

#[cfg(feature = "capture")]
pub use capture::MicCapture;
pub use fft::{hann_window, SpectrumAnalyser};
pub use wav::WavSource;

/// Outcome of asking a source for the next analysis window
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WindowStatus {
    /// Window filled with fresh samples
    Ready,

    /// Not enough audio captured yet
    Pending,

    /// Source exhausted or gone
    Finished,
}

/// Something that yields mono sample windows at a known sample rate
pub trait SampleSource {
    fn sample_rate(&self) -> u32;

    /// Fill `window` with the latest samples
    fn next_window(&mut self, window: &mut [f32]) -> WindowStatus;
}
