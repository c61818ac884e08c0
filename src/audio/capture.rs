//! Live microphone input.

use cpal::traits::{DeviceTrait, HostTrait, StreamTrait};
use cpal::{FromSample, Sample, SizedSample};
use std::sync::{Arc, Mutex};
use tracing::{error, info};

use super::{SampleSource, WindowStatus};
use crate::error::AudioError;

/// Default input device feeding a bounded mono sample buffer
pub struct MicCapture {
    /// Most recent mono samples, shared with the input callback
    buffer: Arc<Mutex<Vec<f32>>>,

    sample_rate: u32,

    /// Audio input stream (kept alive)
    _stream: cpal::Stream,
}

impl MicCapture {
    /// Open the default input device and start capturing.
    ///
    /// `capacity` is the number of recent samples kept (at least one FFT window).
    pub fn start(capacity: usize) -> Result<Self, AudioError> {
        let host = cpal::default_host();
        let device = host
            .default_input_device()
            .ok_or(AudioError::NoInputDevice)?;

        let supported = device
            .default_input_config()
            .map_err(|e| AudioError::Stream(format!("Failed to get input config: {}", e)))?;
        let sample_format = supported.sample_format();
        let config: cpal::StreamConfig = supported.into();

        info!(
            "Audio input: {} @ {}Hz, {} channel(s), {:?}",
            device.name().unwrap_or_else(|_| "Unknown".to_string()),
            config.sample_rate.0,
            config.channels,
            sample_format
        );

        let buffer = Arc::new(Mutex::new(Vec::with_capacity(capacity * 2)));
        let stream = match sample_format {
            cpal::SampleFormat::F32 => build_stream::<f32>(&device, &config, &buffer, capacity),
            cpal::SampleFormat::I16 => build_stream::<i16>(&device, &config, &buffer, capacity),
            cpal::SampleFormat::U16 => build_stream::<u16>(&device, &config, &buffer, capacity),
            other => Err(AudioError::UnsupportedFormat(format!("{:?}", other))),
        }?;

        stream
            .play()
            .map_err(|e| AudioError::Stream(format!("Failed to start input stream: {}", e)))?;

        Ok(Self {
            buffer,
            sample_rate: config.sample_rate.0,
            _stream: stream,
        })
    }
}

impl SampleSource for MicCapture {
    fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    fn next_window(&mut self, window: &mut [f32]) -> WindowStatus {
        let Ok(buffer) = self.buffer.lock() else {
            return WindowStatus::Finished;
        };
        if buffer.len() < window.len() {
            return WindowStatus::Pending;
        }
        window.copy_from_slice(&buffer[buffer.len() - window.len()..]);
        WindowStatus::Ready
    }
}

/// Build an input stream that downmixes to mono and keeps the last
/// `capacity` samples.
fn build_stream<T>(
    device: &cpal::Device,
    config: &cpal::StreamConfig,
    buffer: &Arc<Mutex<Vec<f32>>>,
    capacity: usize,
) -> Result<cpal::Stream, AudioError>
where
    T: SizedSample,
    f32: FromSample<T>,
{
    let channels = config.channels.max(1) as usize;
    let buffer = Arc::clone(buffer);

    device
        .build_input_stream(
            config,
            move |data: &[T], _: &cpal::InputCallbackInfo| {
                let Ok(mut buf) = buffer.lock() else {
                    return;
                };
                for frame in data.chunks(channels) {
                    let sum: f32 = frame.iter().map(|&s| s.to_sample::<f32>()).sum();
                    buf.push(sum / frame.len() as f32);
                }
                let excess = buf.len().saturating_sub(capacity);
                if excess > 0 {
                    buf.drain(..excess);
                }
            },
            |err| error!("Audio input stream error: {}", err),
            None,
        )
        .map_err(|e| AudioError::Stream(format!("Failed to build input stream: {}", e)))
}
