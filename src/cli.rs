//! Command-line argument parsing.

use clap::{Parser, ValueEnum};
use std::path::PathBuf;
use tracing::info;

use crate::error::LoadError;
use crate::output::OutputFormat;
use crate::params::{load_effect_config, preset, DistributionStrategy, EffectConfig};

/// Distribution strategy override
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum StrategyArg {
    Direct,
    Bands,
}

impl From<StrategyArg> for DistributionStrategy {
    fn from(arg: StrategyArg) -> Self {
        match arg {
            StrategyArg::Direct => DistributionStrategy::Direct,
            StrategyArg::Bands => DistributionStrategy::BandInfluence,
        }
    }
}

/// Command line arguments
#[derive(Parser, Debug)]
#[command(name = "fontpulse")]
#[command(about = "Drive per-character font weights from live audio", long_about = None)]
pub struct Args {
    /// Text whose characters receive weights
    #[arg(long, default_value = "fontpulse")]
    pub text: String,

    /// Read audio from a WAV file instead of the default microphone
    #[arg(long, value_name = "PATH")]
    pub wav: Option<PathBuf>,

    /// Effect configuration file (JSON); takes precedence over --preset
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Effect preset: original (default), snappy, bands, tent, raw
    #[arg(long, value_name = "PRESET", default_value = "original")]
    pub preset: String,

    /// Override the distribution strategy
    #[arg(long, value_enum)]
    pub strategy: Option<StrategyArg>,

    /// Animation frames per second
    #[arg(long, default_value_t = 60)]
    pub fps: u32,

    /// Stop after this many frames
    #[arg(long, value_name = "N")]
    pub frames: Option<u64>,

    /// Pace file input at real time instead of as fast as possible
    #[arg(long)]
    pub realtime: bool,

    /// FFT size (power of 2)
    #[arg(long, default_value_t = 2048)]
    pub fft_size: usize,

    /// Emit JSON lines instead of plain text
    #[arg(long)]
    pub json: bool,

    /// Default log level when RUST_LOG is unset
    #[arg(long, default_value = "info")]
    pub log_level: String,
}

impl Args {
    /// Resolve the effect configuration from --config / --preset / --strategy
    pub fn effect_config(&self) -> Result<EffectConfig, LoadError> {
        let mut config = match &self.config {
            Some(path) => {
                info!("Effect config: {}", path.display());
                load_effect_config(path)?
            }
            None => {
                info!("Effect preset: {}", self.preset);
                preset(&self.preset)?
            }
        };

        if let Some(strategy) = self.strategy {
            config.strategy = strategy.into();
        }
        Ok(config)
    }

    pub fn output_format(&self) -> OutputFormat {
        if self.json {
            OutputFormat::JsonLines
        } else {
            OutputFormat::Text
        }
    }
}
