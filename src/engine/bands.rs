//! Bass/mid/treble partitioning of a spectrum by bin index.

use std::ops::Range;

use crate::params::BandEdges;

/// Bin ranges of the three bands for one (bin count, sample rate) pair
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BandLayout {
    pub bass: Range<usize>,
    pub mid: Range<usize>,
    pub treble: Range<usize>,
}

/// Per-band mean magnitudes of one spectrum
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct BandLevels {
    pub bass: f32,
    pub mid: f32,
    pub treble: f32,
}

impl BandLevels {
    /// Scale each level by `1 / full_scale` and clamp to [0, 1]
    pub fn normalized(&self, full_scale: f32) -> Self {
        let n = |v: f32| (v / full_scale).clamp(0.0, 1.0);
        Self {
            bass: n(self.bass),
            mid: n(self.mid),
            treble: n(self.treble),
        }
    }
}

/// Convert frequency (Hz) to a bin index of a `bins`-long spectrum
/// covering 0..Nyquist. Result is clamped to `bins`.
pub fn hz_to_bin(hz: f32, bins: usize, sample_rate: f32) -> usize {
    let nyquist = sample_rate / 2.0;
    let index = (bins as f32 * hz / nyquist).floor();
    // Float-to-int casts saturate; negative maps to 0
    (index as usize).min(bins)
}

/// Split `bins` into bass, mid and treble ranges.
///
/// Expects validated edges and a positive sample rate. Edges above Nyquist
/// collapse the upper bands to empty ranges.
pub fn partition(bins: usize, sample_rate: f32, edges: &BandEdges) -> BandLayout {
    let bass_end = hz_to_bin(edges.bass, bins, sample_rate);
    let mid_end = hz_to_bin(edges.mid, bins, sample_rate).max(bass_end);

    BandLayout {
        bass: 0..bass_end,
        mid: bass_end..mid_end,
        treble: mid_end..bins,
    }
}

/// Arithmetic mean of `spectrum[range]`; 0 for an empty range.
/// The range is clipped to the spectrum length.
pub fn average(spectrum: &[f32], range: Range<usize>) -> f32 {
    let end = range.end.min(spectrum.len());
    let start = range.start.min(end);
    let slice = &spectrum[start..end];

    if slice.is_empty() {
        return 0.0;
    }
    slice.iter().sum::<f32>() / slice.len() as f32
}

impl BandLayout {
    /// Mean level of each band
    pub fn levels(&self, spectrum: &[f32]) -> BandLevels {
        BandLevels {
            bass: average(spectrum, self.bass.clone()),
            mid: average(spectrum, self.mid.clone()),
            treble: average(spectrum, self.treble.clone()),
        }
    }
}
