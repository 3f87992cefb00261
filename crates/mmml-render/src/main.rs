//! mmml-render binary

// SPDX-FileCopyrightText: © 2025 The mmml-driver authors
//
// SPDX-License-Identifier: MIT

mod config;
mod render;
mod wav;

use crate::config::{load_render_config, RenderConfig};
use crate::render::{render, MAX_TICKS};
use crate::wav::{write_16_bit_mono_wave_file, WavError};

use clap::Parser;
use tracing::{info, Level};
use tracing_subscriber::util::SubscriberInitExt;

use std::fs;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

const DEFAULT_SECONDS: f64 = 30.0;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(after_help = "Plays a compiled program at a fixed tick rate and writes one sample per tick")]
#[command(arg_required_else_help = true)]
struct Args {
    #[arg(value_name = "PROGRAM_FILE", help = "compiled μMML program")]
    input: PathBuf,

    #[arg(short = 'o', long, value_name = "WAV_FILE", help = "output wave file")]
    output: PathBuf,

    #[arg(
        short = 's',
        long,
        value_name = "SECONDS",
        help = "duration in seconds (default 30)",
        conflicts_with = "ticks"
    )]
    seconds: Option<f64>,

    #[arg(
        short = 't',
        long,
        value_name = "N",
        help = "duration in ticks",
        conflicts_with = "seconds"
    )]
    ticks: Option<usize>,

    #[arg(long, value_name = "HZ", help = "ticks per second (default 8333)")]
    tick_rate: Option<u32>,

    #[arg(short = 'c', long, value_name = "JSON_FILE", help = "render settings")]
    config: Option<PathBuf>,

    #[arg(
        short = 'a',
        long,
        value_name = "A",
        help = "sample value of a high output",
        value_parser = clap::value_parser!(i16).range(1..)
    )]
    amplitude: Option<i16>,

    #[arg(short = 'v', long, help = "print debug messages")]
    verbose: bool,
}

macro_rules! error {
    ($($arg:tt)*) => {{
        eprintln!($($arg)*);
        std::process::exit(1);
    }};
}

fn setup_logging(verbose: bool) {
    let level = match verbose {
        true => Level::DEBUG,
        false => Level::WARN,
    };

    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .compact()
        .finish()
        .init();
}

fn write_wave_file(path: &Path, sample_rate: u32, samples: &[i16]) -> Result<(), WavError> {
    let mut w = BufWriter::new(fs::File::create(path)?);
    write_16_bit_mono_wave_file(&mut w, sample_rate, samples)?;
    w.flush()?;
    Ok(())
}

fn main() {
    let args = Args::parse();

    setup_logging(args.verbose);

    let mut config = match &args.config {
        Some(path) => match load_render_config(path) {
            Ok(c) => c,
            Err(e) => error!("{}", e),
        },
        None => RenderConfig::default(),
    };
    if let Some(tick_rate) = args.tick_rate {
        config.tick_rate = tick_rate;
    }
    if let Some(amplitude) = args.amplitude {
        config.amplitude = amplitude;
    }

    if config.tick_rate == 0 {
        error!("Invalid tick rate: {}", config.tick_rate);
    }

    let n_ticks = match (args.ticks, args.seconds) {
        (Some(ticks), _) => ticks,
        (None, seconds) => {
            let seconds = seconds.unwrap_or(DEFAULT_SECONDS);
            if !seconds.is_finite() || seconds <= 0.0 {
                error!("Invalid duration: {}", seconds);
            }
            // saturates on overflow
            (seconds * f64::from(config.tick_rate)).ceil() as usize
        }
    };
    if n_ticks == 0 {
        error!("Nothing to render");
    }
    if n_ticks > MAX_TICKS {
        error!(
            "Cannot render {} ticks: the maximum is {} ticks ({:.0} seconds at {} Hz)",
            n_ticks,
            MAX_TICKS,
            MAX_TICKS as f64 / f64::from(config.tick_rate),
            config.tick_rate
        );
    }

    let program = match fs::read(&args.input) {
        Ok(p) => p,
        Err(why) => error!("Couldn't read {}: {}", args.input.display(), why),
    };

    info!(
        "rendering {} ticks at {} Hz from {}",
        n_ticks,
        config.tick_rate,
        args.input.display()
    );

    let rendering = match render(&program, &config, n_ticks) {
        Ok(r) => r,
        Err(why) => error!("Cannot play {}: {}", args.input.display(), why),
    };

    if let Err(why) = write_wave_file(&args.output, config.tick_rate, &rendering.samples) {
        error!("Error writing {}: {}", args.output.display(), why);
    }

    if let Some(fault) = rendering.fault {
        error!(
            "Playback fault after {} ticks: {}",
            rendering.samples.len(),
            fault
        );
    }
}
