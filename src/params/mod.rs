//! Parameter definitions with documented units and ranges.
//!
//! Effect parameters are validated once when the engine is built; nothing on
//! the per-frame path re-checks them.

mod analyser;
mod effect;
mod presets;

use std::fs;
use std::path::Path;

use crate::error::LoadError;

// Re-export all types
pub use analyser::AnalyserConfig;
pub use effect::{
    BandEdges, DistributionStrategy, EffectConfig, InfluenceCurve, MidCurve, WeightRange,
    MAX_FONT_WEIGHT, MAX_MAGNITUDE,
};
pub use presets::{preset, PRESET_NAMES};

/// Load and validate an effect configuration from a JSON file.
///
/// Missing fields fall back to [`EffectConfig::default`].
pub fn load_effect_config(path: impl AsRef<Path>) -> Result<EffectConfig, LoadError> {
    let text = fs::read_to_string(path)?;
    let config: EffectConfig = serde_json::from_str(&text)?;
    config.validate()?;
    Ok(config)
}
