//! fontpulse - variable font weights that follow the music.
//!
//! Pulls audio from the microphone (or a WAV file), runs the weight engine
//! once per animation frame and prints one weight per character.

use anyhow::{Context, Result};
use clap::Parser;
use std::io::{self, BufWriter};
use std::thread;
use std::time::{Duration, Instant};
use tracing::{info, warn};

#[cfg(feature = "capture")]
use fontpulse::audio::MicCapture;
use fontpulse::audio::{SampleSource, SpectrumAnalyser, WavSource, WindowStatus};
use fontpulse::cli::Args;
use fontpulse::logging;
use fontpulse::output::WeightPrinter;
use fontpulse::params::AnalyserConfig;
use fontpulse::{SpectrumFrame, WeightEngine};

fn main() -> Result<()> {
    let args = Args::parse();
    logging::init(&args.log_level);

    let config = args
        .effect_config()
        .context("Failed to load effect configuration")?;
    let mut engine = WeightEngine::new(config).context("Invalid effect configuration")?;

    let analyser_config = AnalyserConfig {
        fft_size: args.fft_size,
        ..Default::default()
    };
    let mut analyser =
        SpectrumAnalyser::new(analyser_config).context("Invalid analyser configuration")?;

    let effect = engine.config();
    info!(
        "Effect: {:?} strategy, weights [{}, {}], {} spectrum bins",
        effect.strategy,
        effect.weight_range.min,
        effect.weight_range.max,
        analyser.config().frequency_bin_count()
    );

    // Live input always runs at frame pace; files only when asked
    let (mut source, paced): (Box<dyn SampleSource>, bool) = match &args.wav {
        Some(path) => {
            let wav = WavSource::open(path, args.fps)
                .with_context(|| format!("Failed to open {}", path.display()))?;
            (Box::new(wav), args.realtime)
        }
        None => (open_microphone(args.fft_size)?, true),
    };

    if args.text.is_empty() {
        warn!("Empty text, nothing to animate");
    }

    let stdout = io::stdout();
    let mut printer = WeightPrinter::new(
        BufWriter::new(stdout.lock()),
        args.output_format(),
        &args.text,
    );

    let sample_rate = source.sample_rate() as f32;
    let frame_interval = Duration::from_secs_f64(1.0 / args.fps.max(1) as f64);
    let mut window = vec![0.0; args.fft_size];
    let mut spectrum = Vec::with_capacity(args.fft_size / 2);
    let mut frame: u64 = 0;

    info!("Running at {} fps, {} characters", args.fps, printer.char_count());

    loop {
        if args.frames.is_some_and(|limit| frame >= limit) {
            break;
        }
        let started = Instant::now();

        match source.next_window(&mut window) {
            WindowStatus::Ready => analyser.analyse(&window, &mut spectrum),
            // No audio yet: the engine skips empty spectra
            WindowStatus::Pending => spectrum.clear(),
            WindowStatus::Finished => break,
        }

        let chars = printer.char_count();
        if let Some(weights) = engine.tick(SpectrumFrame::new(&spectrum, sample_rate), chars) {
            printer
                .write_frame(frame, weights)
                .context("Failed to write weights")?;
        }
        frame += 1;

        if paced {
            printer.flush().context("Failed to write weights")?;
            if let Some(rest) = frame_interval.checked_sub(started.elapsed()) {
                thread::sleep(rest);
            }
        }
    }

    printer.flush().context("Failed to write weights")?;
    info!("Finished after {} frames", frame);
    Ok(())
}

#[cfg(feature = "capture")]
fn open_microphone(window: usize) -> Result<Box<dyn SampleSource>> {
    let capture = MicCapture::start(window * 2).context("Failed to start microphone capture")?;
    Ok(Box::new(capture))
}

#[cfg(not(feature = "capture"))]
fn open_microphone(_window: usize) -> Result<Box<dyn SampleSource>> {
    anyhow::bail!("built without microphone support, pass --wav <PATH>")
}
