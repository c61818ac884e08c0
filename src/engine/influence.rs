//! Spatial distribution of spectrum content across character positions.
//!
//! Low frequencies land on the left of the text, high frequencies on the
//! right. Two strategies:
//!
//! - **Direct**: each character reads one bin of the usable (low) part of the
//!   spectrum. The left half of the text walks the first half of the usable
//!   bins, the right half walks the second half.
//! - **Band influence**: each character blends bass/mid/treble averages with
//!   weights that depend on its normalized position.

use crate::params::{InfluenceCurve, MidCurve};

use super::bands::BandLevels;

/// Raw per-character influence before weight mapping
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RawInfluence {
    /// Smoothed bin magnitude, nominally [0, 255]
    Magnitude(f32),

    /// Band blend, nominally [0, 1]
    Unit(f32),
}

/// Number of low bins the direct strategy samples (at least 1 when `bins > 0`)
pub fn usable_bins(bins: usize, usable_fraction: f32) -> usize {
    let usable = (bins as f32 * usable_fraction).floor() as usize;
    usable.clamp(1, bins.max(1)).min(bins)
}

/// Fractional bin position of character `position` among `chars`,
/// over a spectrum truncated to `usable` bins.
///
/// The first `ceil(chars / 2)` positions cover `[0, usable / 2)`; the rest
/// cover `[usable / 2, usable - 1]` with the last character on the last bin.
pub fn direct_bin_position(position: usize, chars: usize, usable: usize) -> f32 {
    if usable <= 1 || chars <= 1 {
        return 0.0;
    }

    let mid = (usable / 2) as f32;
    let first_half = chars.div_ceil(2);

    if position < first_half {
        return position as f32 / first_half as f32 * mid;
    }

    let second_half = chars - first_half;
    let last_bin = (usable - 1) as f32;
    if second_half <= 1 {
        return last_bin;
    }

    let q = (position - first_half) as f32 / (second_half - 1) as f32;
    (mid + q * (last_bin - mid)).min(last_bin)
}

/// Read a smoothed magnitude at a fractional bin position
fn sample_spectrum(spectrum: &[f32], position: f32, interpolate: bool) -> f32 {
    let last = spectrum.len() - 1;
    let lower = (position.floor() as usize).min(last);

    if !interpolate {
        return spectrum[lower];
    }

    let upper = (lower + 1).min(last);
    let t = position - lower as f32;
    spectrum[lower] + (spectrum[upper] - spectrum[lower]) * t
}

/// Direct-index influence of one character.
///
/// `spectrum` must be non-empty; `usable` is the result of [`usable_bins`].
pub fn direct_influence(
    spectrum: &[f32],
    usable: usize,
    position: usize,
    chars: usize,
    interpolate: bool,
) -> RawInfluence {
    let bin = direct_bin_position(position, chars, usable);
    RawInfluence::Magnitude(sample_spectrum(spectrum, bin, interpolate))
}

/// Normalized position of character `position` among `chars` (0 for one char)
pub fn normalized_position(position: usize, chars: usize) -> f32 {
    if chars <= 1 {
        0.0
    } else {
        position as f32 / (chars - 1) as f32
    }
}

/// Bass, mid and treble blend weights at one text position
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BandInfluences {
    pub bass: f32,
    pub mid: f32,
    pub treble: f32,
}

impl BandInfluences {
    /// Unnormalized curve values at normalized position `x`
    pub fn at(x: f32, curve: &InfluenceCurve) -> Self {
        let bass = (1.0 - x / curve.bass_reach).max(0.0);
        let treble = (1.0 - (1.0 - x) / curve.treble_reach).max(0.0);
        let mid = match curve.mid {
            MidCurve::Gaussian { spread } => {
                let d = x - 0.5;
                (-(d * d) / (2.0 * spread * spread)).exp()
            }
            MidCurve::Tent => (1.0 - (x - 0.5).abs() * 2.0).max(0.0),
        };

        Self { bass, mid, treble }
    }

    /// Rescale so the three weights sum to 1; equal thirds if all are 0
    pub fn normalized(self) -> Self {
        let sum = self.bass + self.mid + self.treble;
        if sum <= 0.0 {
            let third = 1.0 / 3.0;
            return Self {
                bass: third,
                mid: third,
                treble: third,
            };
        }

        Self {
            bass: self.bass / sum,
            mid: self.mid / sum,
            treble: self.treble / sum,
        }
    }

    pub fn sum(&self) -> f32 {
        self.bass + self.mid + self.treble
    }

    /// Weighted blend of normalized band levels
    pub fn apply(&self, levels: &BandLevels) -> f32 {
        self.bass * levels.bass + self.mid * levels.mid + self.treble * levels.treble
    }
}

/// Band-influence value of one character. `levels` must already be in [0, 1].
pub fn band_influence(
    levels: &BandLevels,
    curve: &InfluenceCurve,
    position: usize,
    chars: usize,
) -> RawInfluence {
    let x = normalized_position(position, chars);
    let weights = BandInfluences::at(x, curve).normalized();
    RawInfluence::Unit(weights.apply(levels).clamp(0.0, 1.0))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(a: f32, b: f32) {
        assert!((a - b).abs() < 1e-5, "{} != {}", a, b);
    }

    #[test]
    fn test_usable_bins() {
        assert_eq!(usable_bins(1024, 0.75), 768);
        assert_eq!(usable_bins(512, 1.0), 512);
        assert_eq!(usable_bins(1, 0.75), 1);
        assert_eq!(usable_bins(3, 0.1), 1);
        assert_eq!(usable_bins(0, 0.75), 0);
    }

    #[test]
    fn test_direct_positions_span_usable_range() {
        let usable = 768;
        let chars = 10;
        let bins: Vec<f32> = (0..chars)
            .map(|p| direct_bin_position(p, chars, usable))
            .collect();

        // Starts at bin 0, ends on the last usable bin
        assert_eq!(bins[0], 0.0);
        assert_eq!(bins[chars - 1], 767.0);

        // Left half stays below the midpoint, right half at or above it
        for &b in &bins[..5] {
            assert!(b < 384.0);
        }
        for &b in &bins[5..] {
            assert!(b >= 384.0);
        }

        // Monotonic
        for pair in bins.windows(2) {
            assert!(pair[1] > pair[0]);
        }
    }

    #[test]
    fn test_direct_single_character_reads_first_bin() {
        assert_eq!(direct_bin_position(0, 1, 384), 0.0);

        let mut spectrum = vec![0.0; 512];
        spectrum[0] = 255.0;
        let usable = usable_bins(spectrum.len(), 0.75);
        assert_eq!(
            direct_influence(&spectrum, usable, 0, 1, false),
            RawInfluence::Magnitude(255.0)
        );
    }

    #[test]
    fn test_direct_two_characters() {
        // One character per half: first bin and last usable bin
        assert_eq!(direct_bin_position(0, 2, 100), 0.0);
        assert_eq!(direct_bin_position(1, 2, 100), 99.0);
    }

    #[test]
    fn test_direct_interpolation() {
        let spectrum = [0.0, 100.0, 200.0, 255.0];
        assert_close(sample_spectrum(&spectrum, 0.5, true), 50.0);
        assert_close(sample_spectrum(&spectrum, 0.5, false), 0.0);
        assert_close(sample_spectrum(&spectrum, 3.0, true), 255.0);
    }

    #[test]
    fn test_band_curves_at_edges() {
        let curve = InfluenceCurve {
            bass_reach: 0.5,
            treble_reach: 0.5,
            mid: MidCurve::Tent,
        };

        let left = BandInfluences::at(0.0, &curve);
        assert_close(left.bass, 1.0);
        assert_close(left.mid, 0.0);
        assert_close(left.treble, 0.0);

        let centre = BandInfluences::at(0.5, &curve);
        assert_close(centre.bass, 0.0);
        assert_close(centre.mid, 1.0);
        assert_close(centre.treble, 0.0);

        let right = BandInfluences::at(1.0, &curve);
        assert_close(right.bass, 0.0);
        assert_close(right.treble, 1.0);
    }

    #[test]
    fn test_gaussian_mid_peaks_at_centre() {
        let curve = InfluenceCurve::default();
        let centre = BandInfluences::at(0.5, &curve);
        let off = BandInfluences::at(0.7, &curve);

        assert_close(centre.mid, 1.0);
        // exp(-0.04 / 0.08) = exp(-0.5)
        assert_close(off.mid, (-0.5f32).exp());
    }

    #[test]
    fn test_normalization_sums_to_one() {
        let curve = InfluenceCurve::default();
        for i in 0..=20 {
            let x = i as f32 / 20.0;
            let weights = BandInfluences::at(x, &curve).normalized();
            assert_close(weights.sum(), 1.0);
        }
    }

    #[test]
    fn test_all_zero_falls_back_to_thirds() {
        let zero = BandInfluences {
            bass: 0.0,
            mid: 0.0,
            treble: 0.0,
        };
        let weights = zero.normalized();
        assert_close(weights.bass, 1.0 / 3.0);
        assert_close(weights.mid, 1.0 / 3.0);
        assert_close(weights.treble, 1.0 / 3.0);

        // Short reaches and a narrow bell leave gaps where every curve is zero
        let curve = InfluenceCurve {
            bass_reach: 0.1,
            treble_reach: 0.1,
            mid: MidCurve::Gaussian { spread: 0.01 },
        };
        let gap = BandInfluences::at(0.2, &curve);
        assert_eq!(gap.sum(), 0.0);
        assert_close(gap.normalized().sum(), 1.0);
    }

    #[test]
    fn test_band_influence_follows_position() {
        let curve = InfluenceCurve::default();
        let levels = BandLevels {
            bass: 1.0,
            mid: 0.0,
            treble: 0.0,
        };

        let RawInfluence::Unit(first) = band_influence(&levels, &curve, 0, 5) else {
            panic!("expected unit influence");
        };
        let RawInfluence::Unit(last) = band_influence(&levels, &curve, 4, 5) else {
            panic!("expected unit influence");
        };

        // Loud bass drives the left edge, not the right
        assert!(first > 0.9);
        assert!(last < 0.01);
    }

    #[test]
    fn test_band_influence_single_character_uses_left_edge() {
        let curve = InfluenceCurve::default();
        let levels = BandLevels {
            bass: 0.8,
            mid: 0.0,
            treble: 0.0,
        };
        assert_eq!(normalized_position(0, 1), 0.0);

        let RawInfluence::Unit(value) = band_influence(&levels, &curve, 0, 1) else {
            panic!("expected unit influence");
        };
        assert!(value > 0.7);
    }
}
