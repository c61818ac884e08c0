//! Effect configuration: smoothing ballistics, band layout, influence curves
//! and output weight range.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Upper bound of the font weight axis
pub const MAX_FONT_WEIGHT: f32 = 1000.0;

/// Largest value a byte magnitude bin can hold
pub const MAX_MAGNITUDE: f32 = 255.0;

/// How per-character influence is derived from the smoothed spectrum
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DistributionStrategy {
    /// Each character samples one bin of the usable spectrum
    Direct,

    /// Each character blends bass/mid/treble averages by position
    BandInfluence,
}

/// Upper edges of the bass and mid bands (Hz). Treble runs to Nyquist.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BandEdges {
    /// Bass upper edge (Hz)
    pub bass: f32,

    /// Mid upper edge (Hz)
    pub mid: f32,
}

impl Default for BandEdges {
    fn default() -> Self {
        Self {
            bass: 250.0,
            mid: 2000.0,
        }
    }
}

impl BandEdges {
    pub fn validate(&self) -> Result<(), ConfigError> {
        let ok = self.bass.is_finite()
            && self.mid.is_finite()
            && self.bass > 0.0
            && self.mid > self.bass;
        if !ok {
            return Err(ConfigError::NonMonotonicBands {
                bass: self.bass,
                mid: self.mid,
            });
        }
        Ok(())
    }
}

/// Shape of the mid-band bell centred on the middle of the text
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "shape", rename_all = "snake_case")]
pub enum MidCurve {
    /// exp(-(x-0.5)^2 / (2*spread^2))
    Gaussian { spread: f32 },

    /// 1 - |x-0.5|*2
    Tent,
}

/// Position-dependent influence curves for the band strategy
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InfluenceCurve {
    /// Normalized position where bass influence reaches 0 (from the left)
    pub bass_reach: f32,

    /// Normalized distance from the right edge where treble influence reaches 0
    pub treble_reach: f32,

    /// Mid band bell shape
    pub mid: MidCurve,
}

impl Default for InfluenceCurve {
    fn default() -> Self {
        Self {
            bass_reach: 0.5,
            treble_reach: 0.5,
            mid: MidCurve::Gaussian { spread: 0.2 },
        }
    }
}

impl InfluenceCurve {
    pub fn validate(&self) -> Result<(), ConfigError> {
        let reaches = [
            ("bass_reach", self.bass_reach),
            ("treble_reach", self.treble_reach),
        ];
        for (name, reach) in reaches {
            if !(reach > 0.0 && reach <= 1.0) {
                return Err(ConfigError::InvalidCurve(format!(
                    "{} must be in (0, 1], got {}",
                    name, reach
                )));
            }
        }
        if let MidCurve::Gaussian { spread } = self.mid {
            if !(spread.is_finite() && spread > 0.0) {
                return Err(ConfigError::InvalidCurve(format!(
                    "gaussian spread must be > 0, got {}",
                    spread
                )));
            }
        }
        Ok(())
    }
}

/// Published font weight bounds
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WeightRange {
    pub min: f32,
    pub max: f32,
}

impl Default for WeightRange {
    fn default() -> Self {
        Self {
            min: 100.0,
            max: 900.0,
        }
    }
}

impl WeightRange {
    pub fn span(&self) -> f32 {
        self.max - self.min
    }

    pub fn contains(&self, weight: f32) -> bool {
        weight >= self.min && weight <= self.max
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let ok = self.min.is_finite()
            && self.max.is_finite()
            && self.min >= 0.0
            && self.min < self.max
            && self.max <= MAX_FONT_WEIGHT
            // Published weights are integers; at least one must fit
            && self.min.ceil() <= self.max.floor();
        if !ok {
            return Err(ConfigError::InvalidWeightRange {
                min: self.min,
                max: self.max,
            });
        }
        Ok(())
    }
}

/// Complete per-session effect configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EffectConfig {
    /// Spectrum smoothing rate for rising bins (0, 1]
    /// Default: 0.08
    pub attack: f32,

    /// Spectrum smoothing rate for falling bins (0, 1]
    /// Default: 0.02
    pub release: f32,

    /// Per-character weight easing rate (0, 1], 1 = immediate
    /// Default: 0.08
    pub transition: f32,

    /// Bass/mid upper edges (Hz)
    pub band_edges_hz: BandEdges,

    /// Fraction of low bins the direct strategy samples (0, 1]
    /// Default: 0.75
    pub usable_fraction: f32,

    /// Direct bin lookup or band blending
    pub strategy: DistributionStrategy,

    /// Direct strategy: interpolate between neighbouring bins
    pub interpolate: bool,

    /// Band strategy influence curves
    pub curve: InfluenceCurve,

    /// Published weight bounds
    pub weight_range: WeightRange,

    /// Seed for every smoothed bin at session start and on reset
    pub neutral_magnitude: f32,

    /// Starting weight for every character slot
    pub neutral_weight: f32,
}

impl Default for EffectConfig {
    fn default() -> Self {
        Self {
            attack: 0.08,
            release: 0.02,
            transition: 0.08,
            band_edges_hz: BandEdges::default(),
            usable_fraction: 0.75,
            strategy: DistributionStrategy::Direct,
            interpolate: false,
            curve: InfluenceCurve::default(),
            weight_range: WeightRange::default(),
            neutral_magnitude: 100.0,
            neutral_weight: 400.0,
        }
    }
}

impl EffectConfig {
    /// Check every field. Called by the engine constructor.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (name, value) in [
            ("attack", self.attack),
            ("release", self.release),
            ("transition", self.transition),
        ] {
            validate_factor(name, value)?;
        }

        self.band_edges_hz.validate()?;

        if !(self.usable_fraction > 0.0 && self.usable_fraction <= 1.0) {
            return Err(ConfigError::UsableFractionOutOfRange(self.usable_fraction));
        }

        self.curve.validate()?;
        self.weight_range.validate()?;

        if !self.weight_range.contains(self.neutral_weight) {
            return Err(ConfigError::NeutralWeightOutOfRange {
                value: self.neutral_weight,
                min: self.weight_range.min,
                max: self.weight_range.max,
            });
        }

        if !(self.neutral_magnitude >= 0.0 && self.neutral_magnitude <= MAX_MAGNITUDE) {
            return Err(ConfigError::NeutralMagnitudeOutOfRange(self.neutral_magnitude));
        }

        Ok(())
    }
}

fn validate_factor(name: &'static str, value: f32) -> Result<(), ConfigError> {
    // NaN fails both comparisons
    if value > 0.0 && value <= 1.0 {
        Ok(())
    } else {
        Err(ConfigError::FactorOutOfRange { name, value })
    }
}
