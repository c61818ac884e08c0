//! End-to-end engine scenarios: silence decay, a single hot bin, text edits.

use fontpulse::params::{preset, DistributionStrategy, EffectConfig};
use fontpulse::{SpectrumFrame, WeightEngine};

const SAMPLE_RATE: f32 = 44100.0;

fn run(engine: &mut WeightEngine, spectrum: &[u8], chars: usize, ticks: usize) -> Vec<u16> {
    let mut last = Vec::new();
    for _ in 0..ticks {
        last = engine
            .tick(SpectrumFrame::new(spectrum, SAMPLE_RATE), chars)
            .expect("tick produced no output")
            .to_vec();
    }
    last
}

#[test]
fn silence_after_reset_starts_neutral_and_sinks_to_minimum() {
    let mut engine = WeightEngine::new(EffectConfig::default()).unwrap();
    let silence = [0u8; 512];

    // Some unrelated history first
    run(&mut engine, &[200u8; 512], 5, 40);
    engine.reset();
    assert_eq!(engine.weights(), &[400, 400, 400, 400, 400]);

    let after_200 = run(&mut engine, &silence, 5, 200);
    assert!(after_200.iter().all(|&w| w > 100 && w < 400));

    let after_1000 = run(&mut engine, &silence, 5, 800);
    assert_eq!(after_1000, vec![100, 100, 100, 100, 100]);
}

#[test]
fn faster_release_sinks_sooner() {
    let slow_config = EffectConfig::default();
    let fast_config = EffectConfig {
        release: 0.1,
        ..EffectConfig::default()
    };
    let mut slow = WeightEngine::new(slow_config).unwrap();
    let mut fast = WeightEngine::new(fast_config).unwrap();
    let silence = [0u8; 512];

    let slow_weights = run(&mut slow, &silence, 5, 50);
    let fast_weights = run(&mut fast, &silence, 5, 50);

    for (s, f) in slow_weights.iter().zip(&fast_weights) {
        assert!(f < s, "fast release {} not below slow release {}", f, s);
    }
}

#[test]
fn single_hot_bin_drives_single_character_to_maximum() {
    let config = EffectConfig {
        strategy: DistributionStrategy::Direct,
        ..EffectConfig::default()
    };
    let mut engine = WeightEngine::new(config).unwrap();

    let mut spectrum = [0u8; 512];
    spectrum[0] = 255;

    // Rises monotonically while the bin is held
    let mut previous = 400;
    for _ in 0..100 {
        let weight = run(&mut engine, &spectrum, 1, 1)[0];
        assert!(weight >= previous);
        previous = weight;
    }
    assert!(previous > 800);

    let settled = run(&mut engine, &spectrum, 1, 400);
    assert_eq!(settled, vec![900]);
}

#[test]
fn faster_attack_rises_sooner() {
    let mut slow = WeightEngine::new(EffectConfig::default()).unwrap();
    let mut fast = WeightEngine::new(EffectConfig {
        attack: 0.3,
        ..EffectConfig::default()
    })
    .unwrap();

    let mut spectrum = [0u8; 512];
    spectrum[0] = 255;

    let slow_weight = run(&mut slow, &spectrum, 1, 20)[0];
    let fast_weight = run(&mut fast, &spectrum, 1, 20)[0];
    assert!(fast_weight > slow_weight);
}

#[test]
fn shorter_text_restarts_every_slot_from_neutral() {
    let mut engine = WeightEngine::new(EffectConfig::default()).unwrap();
    let loud = [255u8; 512];

    let before = run(&mut engine, &loud, 5, 300);
    assert_eq!(before, vec![900; 5]);

    // Stale slots would stay at 900; fresh ones ease up from 400 by one step
    let after = run(&mut engine, &loud, 3, 1);
    assert_eq!(after, vec![440, 440, 440]);
}

#[test]
fn band_preset_spreads_bass_and_treble_across_text() {
    let mut engine = WeightEngine::new(preset("bands").unwrap()).unwrap();

    // 1024 bins @ 44.1kHz: bass ends at bin 11, treble starts at bin 92
    let mut bass_heavy = [0u8; 1024];
    bass_heavy[..11].fill(255);

    let weights = run(&mut engine, &bass_heavy, 9, 300);
    assert!(weights[0] > weights[4]);
    assert!(weights[4] >= weights[8]);
    assert_eq!(weights[8], 100);

    let mut treble_heavy = [0u8; 1024];
    treble_heavy[92..].fill(255);

    let weights = run(&mut engine, &treble_heavy, 9, 300);
    assert!(weights[8] > weights[4]);
    assert_eq!(weights[0], 100);
}

#[test]
fn missing_spectrum_and_empty_text_produce_nothing() {
    let mut engine = WeightEngine::new(EffectConfig::default()).unwrap();

    assert!(engine.tick(SpectrumFrame::new(&[], SAMPLE_RATE), 4).is_none());
    assert!(engine
        .tick(SpectrumFrame::new(&[0u8; 256], SAMPLE_RATE), 0)
        .is_none());

    // Capture starts later: normal output from then on
    let weights = engine
        .tick(SpectrumFrame::new(&[0u8; 256], SAMPLE_RATE), 4)
        .unwrap();
    assert_eq!(weights.len(), 4);
}
