//! Driver tests

// SPDX-FileCopyrightText: © 2025 The mmml-driver authors
//
// SPDX-License-Identifier: MIT

mod notes;
mod synthesizer;


use mmml_driver::driver_constants::{BYTES_PER_HEADER_SLOT, N_CHANNELS};
use mmml_driver::{Driver, DriverConfig, OutputSink};

/// Rests for 127 passes, then restarts the track
const SILENT: &[u8] = &[0x00, 0xff];

/// Records every value written to the output line
#[derive(Debug, Default)]
struct Recorder(Vec<bool>);

impl OutputSink for Recorder {
    fn write(&mut self, high: bool) {
        self.0.push(high)
    }
}

/// Builds a program with the channel table, a macro table and the bytecode.
///
/// The tracks are stored in channel order, followed by the macros.
fn build_program(tracks: [&[u8]; N_CHANNELS], macros: &[&[u8]]) -> Vec<u8> {
    let header_size = (N_CHANNELS + macros.len()) * BYTES_PER_HEADER_SLOT;

    let mut header = Vec::with_capacity(header_size);
    let mut bytecode = Vec::new();

    for b in tracks.iter().chain(macros) {
        let offset = u16::try_from(header_size + bytecode.len()).unwrap();
        header.extend_from_slice(&offset.to_be_bytes());
        bytecode.extend_from_slice(b);
    }

    header.extend(bytecode);
    header
}

/// A program that only plays on channel 0
fn channel_0_program(track: &[u8]) -> Vec<u8> {
    build_program([track, SILENT, SILENT, SILENT], &[])
}

/// Offset of channel 0's bytecode in a `build_program()` program
fn channel_0_start(n_macros: usize) -> u16 {
    u16::try_from((N_CHANNELS + n_macros) * BYTES_PER_HEADER_SLOT).unwrap()
}

/// A config with a sequencer pass every `ticks_per_pass` ticks and no padding.
fn test_config(ticks_per_pass: u16) -> DriverConfig {
    DriverConfig {
        default_tick_speed: ticks_per_pass - 1,
        equalize_sampler_timing: false,
        ..DriverConfig::DEFAULT
    }
}

/// A driver that runs a sequencer pass on every `update()`
fn fast_driver(program: &[u8]) -> Driver<'_, Recorder> {
    let mut d = Driver::with_config(Recorder::default(), test_config(1));
    d.play(program).unwrap();
    d
}

/// Calls `update()` once and returns channel 0's note period
fn update_ch0_period(d: &mut Driver<Recorder>) -> u16 {
    d.update().unwrap();
    d.channel(0).frequency()
}
