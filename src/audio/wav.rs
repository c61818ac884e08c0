//! WAV file input, stepped at a fixed frame rate.

use std::path::Path;
use tracing::info;

use super::{SampleSource, WindowStatus};
use crate::error::AudioError;

/// Mono samples of a whole file, read one analysis window per frame
pub struct WavSource {
    samples: Vec<f32>,
    sample_rate: u32,
    /// Samples advanced per frame
    hop: usize,
    /// End of the next window (exclusive)
    position: usize,
}

impl WavSource {
    /// Decode a PCM or float WAV file to mono
    pub fn open(path: impl AsRef<Path>, fps: u32) -> Result<Self, AudioError> {
        let path = path.as_ref();
        let mut reader = hound::WavReader::open(path)?;
        let spec = reader.spec();
        let channels = spec.channels.max(1) as usize;

        let interleaved: Vec<f32> = match spec.sample_format {
            hound::SampleFormat::Float => reader.samples::<f32>().collect::<Result<_, _>>()?,
            hound::SampleFormat::Int => {
                if spec.bits_per_sample == 0 || spec.bits_per_sample > 32 {
                    return Err(AudioError::UnsupportedFormat(format!(
                        "{}-bit integer PCM",
                        spec.bits_per_sample
                    )));
                }
                let full_scale = (1u64 << (spec.bits_per_sample - 1)) as f32;
                reader
                    .samples::<i32>()
                    .map(|s| s.map(|v| v as f32 / full_scale))
                    .collect::<Result<_, _>>()?
            }
        };

        let samples: Vec<f32> = interleaved
            .chunks(channels)
            .map(|frame| frame.iter().sum::<f32>() / frame.len() as f32)
            .collect();

        info!(
            "WAV input: {} ({}Hz, {} channel(s), {:.1}s)",
            path.display(),
            spec.sample_rate,
            spec.channels,
            samples.len() as f32 / spec.sample_rate.max(1) as f32
        );

        Ok(Self::from_samples(samples, spec.sample_rate, fps))
    }

    /// Wrap already decoded mono samples
    pub fn from_samples(samples: Vec<f32>, sample_rate: u32, fps: u32) -> Self {
        let hop = (sample_rate / fps.max(1)).max(1) as usize;
        Self {
            samples,
            sample_rate,
            hop,
            position: hop,
        }
    }

    /// Number of frames until the file is exhausted
    pub fn frame_count(&self) -> usize {
        self.samples.len().div_ceil(self.hop)
    }
}

impl SampleSource for WavSource {
    fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    /// Window ending at the current play position; audio before the start
    /// of the file reads as silence.
    fn next_window(&mut self, window: &mut [f32]) -> WindowStatus {
        if self.position > self.samples.len() + self.hop - 1 {
            return WindowStatus::Finished;
        }

        let end = self.position.min(self.samples.len());
        let start = end.saturating_sub(window.len());
        let available = &self.samples[start..end];
        let pad = window.len() - available.len();

        window[..pad].fill(0.0);
        window[pad..].copy_from_slice(available);

        self.position += self.hop;
        WindowStatus::Ready
    }
}
