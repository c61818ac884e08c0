//! Named effect presets.
//!
//! Variants of the effect that differ only in ballistics, distribution
//! strategy and curve shape.

use super::effect::{DistributionStrategy, EffectConfig, InfluenceCurve, MidCurve};
use crate::error::ConfigError;

/// Preset names accepted by [`preset`]
pub const PRESET_NAMES: &[&str] = &["original", "snappy", "bands", "tent", "raw"];

/// Look up a preset by name (case-insensitive)
pub fn preset(name: &str) -> Result<EffectConfig, ConfigError> {
    let config = match name.to_lowercase().as_str() {
        // Slow attack, very long release, direct bin lookup
        "original" => EffectConfig::default(),

        "snappy" => EffectConfig {
            attack: 0.3,
            release: 0.05,
            transition: 0.2,
            ..EffectConfig::default()
        },

        "bands" => EffectConfig {
            attack: 0.15,
            release: 0.04,
            transition: 0.1,
            strategy: DistributionStrategy::BandInfluence,
            curve: InfluenceCurve {
                bass_reach: 0.67,
                treble_reach: 0.67,
                mid: MidCurve::Gaussian { spread: 0.2 },
            },
            ..EffectConfig::default()
        },

        "tent" => EffectConfig {
            attack: 0.1,
            release: 0.03,
            transition: 0.12,
            strategy: DistributionStrategy::BandInfluence,
            curve: InfluenceCurve {
                bass_reach: 0.4,
                treble_reach: 0.4,
                mid: MidCurve::Tent,
            },
            ..EffectConfig::default()
        },

        // No smoothing anywhere
        "raw" => EffectConfig {
            attack: 1.0,
            release: 1.0,
            transition: 1.0,
            ..EffectConfig::default()
        },

        _ => return Err(ConfigError::UnknownPreset(name.to_string())),
    };
    Ok(config)
}
