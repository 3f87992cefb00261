//! Driver constants

// SPDX-FileCopyrightText: © 2025 The mmml-driver authors
//
// SPDX-License-Identifier: MIT

// These values MUST match the program encoder.

#![allow(clippy::assertions_on_constants)]

pub const N_CHANNELS: usize = 4;
pub const N_PULSE_CHANNELS: usize = 3;

// The last channel plays samples from the sample bank
pub const SAMPLE_CHANNEL: usize = N_PULSE_CHANNELS;

pub const MAX_NESTED_LOOPS: usize = 5;

pub const BYTES_PER_HEADER_SLOT: usize = 2;

// Channel offset table, macro offsets immediately follow it
pub const CHANNEL_TABLE_SIZE: usize = N_CHANNELS * BYTES_PER_HEADER_SLOT;

// Sampler prescaler reload value (one bit is consumed every `SAMPLE_SPEED + 1` ticks)
pub const SAMPLE_SPEED: u8 = 5;

pub const DEFAULT_TICK_SPEED: u16 = 1024;
pub const TEMPO_OPERAND_SHIFT: u32 = 4;

pub const DEFAULT_VOLUME: u8 = 1;
pub const MAX_VOLUME_SHIFT: u8 = 7;

// Octave register value after `play()`, not a shift amount
pub const DEFAULT_OCTAVE_MULTIPLIER: u8 = 3;
pub const MAX_OCTAVE_SHIFT: u8 = 7;

pub const DEFAULT_FETCH_BUDGET: u16 = 256;

/// Tick rate (in Hz) the note table is tuned for (one `update()` every 120µs)
pub const REFERENCE_TICK_RATE: u32 = 8333;

const _: () = assert!(SAMPLE_CHANNEL == N_CHANNELS - 1);
const _: () = assert!(N_CHANNELS * BYTES_PER_HEADER_SLOT <= u16::MAX as usize);
const _: () = assert!(
    (u8::MAX as u32) << TEMPO_OPERAND_SHIFT <= u16::MAX as u32,
    "tempo operand overflows the tick speed"
);
const _: () = assert!((1u16 << MAX_OCTAVE_SHIFT) <= u8::MAX as u16);
