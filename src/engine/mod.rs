//! Spectral-to-weight mapping engine.
//!
//! One [`WeightEngine`] per capture session. Each animation frame the caller
//! hands it a byte magnitude spectrum and the current character count, and
//! gets back one font weight per character.

pub mod bands;
pub mod influence;
pub mod smoother;
pub mod weight;

use tracing::{debug, trace, warn};

use crate::error::ConfigError;
use crate::params::{DistributionStrategy, EffectConfig, MAX_MAGNITUDE};

use bands::{partition, BandLayout};
use influence::{band_influence, direct_influence, usable_bins};
use smoother::SpectrumSmoother;
use weight::{map_weight, round_weight, CharacterSlots};

/// One frame of input from the capture side
#[derive(Debug, Clone, Copy)]
pub struct SpectrumFrame<'a> {
    /// Byte magnitudes, index 0 = lowest frequency. Empty = no data yet.
    pub magnitudes: &'a [u8],

    /// Sample rate the spectrum was computed at (Hz)
    pub sample_rate: f32,
}

impl<'a> SpectrumFrame<'a> {
    pub fn new(magnitudes: &'a [u8], sample_rate: f32) -> Self {
        Self {
            magnitudes,
            sample_rate,
        }
    }
}

/// Band layout cached for the (bin count, sample rate) it was built from
#[derive(Debug, Clone)]
struct CachedBands {
    bins: usize,
    sample_rate: f32,
    layout: BandLayout,
}

/// Session state and per-frame pipeline: smooth, distribute, map.
#[derive(Debug, Clone)]
pub struct WeightEngine {
    config: EffectConfig,
    smoother: SpectrumSmoother,
    slots: CharacterSlots,
    bands: Option<CachedBands>,
    /// Rounded weights of the last tick
    published: Vec<u16>,
}

impl WeightEngine {
    /// Build an engine; rejects invalid configuration up front
    pub fn new(config: EffectConfig) -> Result<Self, ConfigError> {
        config.validate()?;

        debug!(
            "WeightEngine created: strategy={:?}, attack={}, release={}, transition={}",
            config.strategy, config.attack, config.release, config.transition
        );

        let smoother =
            SpectrumSmoother::new(config.attack, config.release, config.neutral_magnitude);

        Ok(Self {
            smoother,
            slots: CharacterSlots::new(config.neutral_weight),
            bands: None,
            published: Vec::new(),
            config,
        })
    }

    pub fn config(&self) -> &EffectConfig {
        &self.config
    }

    /// Run one frame.
    ///
    /// Returns `None` (and changes nothing) when there is no spectrum yet,
    /// no text, or the band strategy gets an unusable sample rate.
    pub fn tick(&mut self, frame: SpectrumFrame<'_>, chars: usize) -> Option<&[u16]> {
        if frame.magnitudes.is_empty() || chars == 0 {
            trace!(
                "Skipping tick: {} bins, {} chars",
                frame.magnitudes.len(),
                chars
            );
            return None;
        }

        let bins = frame.magnitudes.len();
        let layout = match self.config.strategy {
            DistributionStrategy::Direct => None,
            DistributionStrategy::BandInfluence => {
                Some(self.band_layout(bins, frame.sample_rate)?.clone())
            }
        };

        if self.slots.sync_len(chars) {
            debug!("Text length now {} chars, character weights reset", chars);
        }

        let spectrum = self.smoother.smooth(frame.magnitudes);
        let config = &self.config;
        let levels = layout.map(|l| l.levels(spectrum).normalized(MAX_MAGNITUDE));
        let usable = usable_bins(bins, config.usable_fraction);

        self.published.clear();
        for (position, slot) in self.slots.weights_mut().iter_mut().enumerate() {
            let raw = match &levels {
                Some(levels) => band_influence(levels, &config.curve, position, chars),
                None => direct_influence(spectrum, usable, position, chars, config.interpolate),
            };

            *slot = map_weight(raw, *slot, config.transition, &config.weight_range);
            self.published.push(round_weight(*slot, &config.weight_range));
        }

        Some(self.published.as_slice())
    }

    /// Back to the neutral spectrum seed and neutral weights. Safe to call
    /// at any time, any number of times.
    pub fn reset(&mut self) {
        self.smoother.reset();
        self.slots.reset();
        self.refresh_published();
        debug!("WeightEngine reset");
    }

    /// Current rounded weight of every character slot
    pub fn weights(&self) -> &[u16] {
        &self.published
    }

    /// Current smoothed spectrum (empty before the first frame)
    pub fn smoothed_spectrum(&self) -> &[f32] {
        self.smoother.state()
    }

    /// Band layout for this frame, rebuilt when bin count or sample rate moves
    fn band_layout(&mut self, bins: usize, sample_rate: f32) -> Option<&BandLayout> {
        if !(sample_rate.is_finite() && sample_rate > 0.0) {
            warn!("Invalid sample rate {}, skipping tick", sample_rate);
            return None;
        }

        let stale = match &self.bands {
            Some(cached) => cached.bins != bins || cached.sample_rate != sample_rate,
            None => true,
        };
        if stale {
            let layout = partition(bins, sample_rate, &self.config.band_edges_hz);
            debug!(
                "Band layout for {} bins @ {}Hz: bass={:?} mid={:?} treble={:?}",
                bins, sample_rate, layout.bass, layout.mid, layout.treble
            );
            self.bands = Some(CachedBands {
                bins,
                sample_rate,
                layout,
            });
        }

        self.bands.as_ref().map(|cached| &cached.layout)
    }

    fn refresh_published(&mut self) {
        let range = self.config.weight_range;
        self.published.clear();
        self.published
            .extend(self.slots.weights().iter().map(|&w| round_weight(w, &range)));
    }
}
