//! fontpulse - audio-reactive variable font weights
//!
//! The [`engine`] turns per-frame byte magnitude spectra into one bounded
//! font weight per character. [`audio`] supplies spectra from a microphone
//! or WAV file; the rest is configuration and glue for the demo binary.

pub mod audio;
pub mod cli;
pub mod engine;
pub mod error;
pub mod logging;
pub mod output;
pub mod params;

pub use engine::{SpectrumFrame, WeightEngine};
pub use error::{AudioError, ConfigError, LoadError};
pub use params::EffectConfig;
