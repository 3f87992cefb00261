//! Synthesizer
//!
//! Runs on every tick.  Advances the sampler bit stream and the three pulse
//! phase accumulators, the sequencer only changes their registers.

// SPDX-FileCopyrightText: © 2025 The mmml-driver authors
//
// SPDX-License-Identifier: MIT

use crate::channel::ChannelState;
use crate::config::DriverConfig;
use crate::driver_constants::{N_CHANNELS, N_PULSE_CHANNELS, SAMPLE_CHANNEL};
use crate::samples::{Waveform, SAMPLE_BANK};

// Roughly the work done by the playing branch of `Sampler::tick()`
const SAMPLER_PADDING_ITERATIONS: usize = 8;

/// Sample channel playback state
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sampler {
    current_byte: u8,
    current_bit: u8,
    end: u8,
    prescaler: u8,
}

impl Sampler {
    pub(crate) const fn new() -> Self {
        Self {
            current_byte: 0,
            current_bit: 0,
            end: 0,
            prescaler: 0,
        }
    }

    /// Restarts playback at the start of `waveform`
    pub(crate) fn select(&mut self, waveform: Waveform) {
        self.current_bit = 0;
        self.current_byte = waveform.start;
        self.end = waveform.end;
    }

    pub fn is_playing(&self) -> bool {
        u16::from(self.current_byte) + 1 < u16::from(self.end)
    }

    /// Index of the next byte to be played
    pub fn current_byte(&self) -> u8 {
        self.current_byte
    }

    pub fn current_bit(&self) -> u8 {
        self.current_bit
    }

    /// Advances the prescaler by one tick.
    ///
    /// Returns the new sample channel output when a bit is consumed,
    /// `None` if the output is unchanged.
    pub(crate) fn tick(&mut self, config: &DriverConfig) -> Option<bool> {
        if let Some(p) = self.prescaler.checked_sub(1) {
            self.prescaler = p;
            return None;
        }
        self.prescaler = config.sample_speed;

        let out = match self.is_playing() {
            true => {
                let byte = SAMPLE_BANK
                    .get(usize::from(self.current_byte))
                    .copied()
                    .unwrap_or(0);
                let bit = (byte >> self.current_bit) & 1 == 1;
                self.current_bit += 1;
                bit
            }
            false => {
                if config.equalize_sampler_timing {
                    waste_sampler_time();
                }
                false
            }
        };

        if self.current_bit > 7 {
            self.current_byte = self.current_byte.saturating_add(1);
            self.current_bit = 0;
        }

        Some(out)
    }
}

#[inline(never)]
fn waste_sampler_time() {
    for _ in 0..SAMPLER_PADDING_ITERATIONS {
        core::hint::spin_loop();
    }
}

/// Advances a pulse channel's phase accumulator and updates its output.
///
/// The period is subtracted, not taken modulo, so the octave multiplier must
/// not exceed the note period.
#[inline]
pub(crate) fn tick_pulse(c: &mut ChannelState) {
    c.pitch_counter = c.pitch_counter.wrapping_add(u16::from(c.octave));
    if c.pitch_counter >= c.frequency {
        c.pitch_counter = c.pitch_counter.wrapping_sub(c.frequency);
    }
    c.output = c.pitch_counter < c.duty;
}

pub(crate) fn synthesize(
    channels: &mut [ChannelState; N_CHANNELS],
    sampler: &mut Sampler,
    config: &DriverConfig,
) {
    if let Some(out) = sampler.tick(config) {
        channels[SAMPLE_CHANNEL].output = out;
    }

    for c in &mut channels[..N_PULSE_CHANNELS] {
        tick_pulse(c);
    }
}

/// The one-bit output is the OR of all channel outputs
#[inline]
pub(crate) fn mix(channels: &[ChannelState; N_CHANNELS]) -> bool {
    channels.iter().any(|c| c.output)
}
