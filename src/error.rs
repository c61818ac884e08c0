//! Error types for configuration and the capture side.

use thiserror::Error;

/// Rejected effect configuration. Raised once, when the engine is built.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// Attack, release or transition outside (0, 1]
    #[error("{name} must be in (0, 1], got {value}")]
    FactorOutOfRange { name: &'static str, value: f32 },

    /// Band edges must satisfy 0 < bass < mid
    #[error("band edges must be increasing and positive, got bass={bass}Hz mid={mid}Hz")]
    NonMonotonicBands { bass: f32, mid: f32 },

    /// Output weight range is empty, reversed or outside the font axis
    #[error("invalid weight range [{min}, {max}]")]
    InvalidWeightRange { min: f32, max: f32 },

    /// Neutral weight must sit inside the output range
    #[error("neutral weight {value} outside weight range [{min}, {max}]")]
    NeutralWeightOutOfRange { value: f32, min: f32, max: f32 },

    /// Neutral spectrum seed must be a valid byte magnitude
    #[error("neutral magnitude must be in [0, 255], got {0}")]
    NeutralMagnitudeOutOfRange(f32),

    /// Usable spectrum fraction outside (0, 1]
    #[error("usable spectrum fraction must be in (0, 1], got {0}")]
    UsableFractionOutOfRange(f32),

    /// Influence curve parameter outside its valid domain
    #[error("invalid influence curve: {0}")]
    InvalidCurve(String),

    /// No preset registered under this name
    #[error("unknown preset '{0}'")]
    UnknownPreset(String),
}

/// Capture collaborator errors
#[derive(Error, Debug)]
pub enum AudioError {
    /// No default input device available
    #[error("no audio input device found")]
    NoInputDevice,

    /// Device or stream setup failure
    #[error("audio stream error: {0}")]
    Stream(String),

    /// FFT size must be a power of two
    #[error("FFT size must be power of 2, got {0}")]
    InvalidFftSize(usize),

    /// Analyser settings out of range
    #[error("invalid analyser config: {0}")]
    InvalidAnalyser(String),

    /// WAV decoding error
    #[error("WAV error: {0}")]
    Wav(#[from] hound::Error),

    /// Sample format the reader or device cannot convert
    #[error("unsupported sample format: {0}")]
    UnsupportedFormat(String),
}

/// Failure loading an effect configuration file
#[derive(Error, Debug)]
pub enum LoadError {
    /// I/O error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON parse error
    #[error("config parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// Parsed config failed validation
    #[error(transparent)]
    Invalid(#[from] ConfigError),
}
