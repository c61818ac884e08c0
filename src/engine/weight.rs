//! Raw influence to font weight, with per-character easing.

use crate::params::{WeightRange, MAX_MAGNITUDE};

use super::influence::RawInfluence;

impl RawInfluence {
    /// Influence on a [0, 1] scale. Not clamped; NaN becomes 0.
    pub fn normalized(self) -> f32 {
        let value = match self {
            RawInfluence::Magnitude(m) => m / MAX_MAGNITUDE,
            RawInfluence::Unit(u) => u,
        };
        if value.is_nan() {
            0.0
        } else {
            value
        }
    }
}

/// Target weight for a normalized influence, always inside `range`
pub fn target_weight(normalized: f32, range: &WeightRange) -> f32 {
    let normalized = if normalized.is_nan() { 0.0 } else { normalized };
    (range.min + normalized * range.span()).clamp(range.min, range.max)
}

/// Ease `previous` toward the target weight of `raw`.
///
/// `transition` of 1.0 jumps straight to the target. The result is kept
/// inside `range`.
pub fn map_weight(raw: RawInfluence, previous: f32, transition: f32, range: &WeightRange) -> f32 {
    let target = target_weight(raw.normalized(), range);
    (previous + (target - previous) * transition).clamp(range.min, range.max)
}

/// Round a weight for publishing on the discrete font weight axis
pub fn round_weight(weight: f32, range: &WeightRange) -> u16 {
    weight.round().clamp(range.min.ceil(), range.max.floor()) as u16
}

/// One eased weight per visible character
#[derive(Debug, Clone)]
pub struct CharacterSlots {
    weights: Vec<f32>,
    neutral: f32,
}

impl CharacterSlots {
    pub fn new(neutral: f32) -> Self {
        Self {
            weights: Vec::new(),
            neutral,
        }
    }

    /// Match the slot count to the text length.
    ///
    /// Any change of length drops every slot and starts over from neutral,
    /// so no character inherits the weight of a different text.
    /// Returns true when the slots were rebuilt.
    pub fn sync_len(&mut self, chars: usize) -> bool {
        if self.weights.len() == chars {
            return false;
        }
        self.weights.clear();
        self.weights.resize(chars, self.neutral);
        true
    }

    /// Every slot back to neutral, keeping the count
    pub fn reset(&mut self) {
        self.weights.fill(self.neutral);
    }

    /// Unrounded weights
    pub fn weights(&self) -> &[f32] {
        &self.weights
    }

    pub fn weights_mut(&mut self) -> &mut [f32] {
        &mut self.weights
    }
}
