//! Control API
//!
//! ```text
//! init(sink) ──► play(program) ──► update() every tick ──► stop()
//! ```
//!
//! `update()` must be called at a fixed rate (the note table is tuned for
//! `REFERENCE_TICK_RATE`).  All methods take `&mut self`, a `Driver` shared
//! between an interrupt handler and the main program must be accessed inside a
//! critical section (or through `SharedDriver` on hosted targets).

// SPDX-FileCopyrightText: © 2025 The mmml-driver authors
//
// SPDX-License-Identifier: MIT

use crate::channel::ChannelState;
use crate::config::DriverConfig;
use crate::driver_constants::N_CHANNELS;
use crate::errors::{PlaybackFault, ProgramError};
use crate::program::Program;
use crate::sequencer::sequencer_pass;
use crate::synthesizer::{mix, synthesize, Sampler};
use crate::time::{TempoCounter, TickSpeed};

use log::{debug, warn};

/// The one-bit output line
pub trait OutputSink {
    fn write(&mut self, high: bool);
}

impl<F> OutputSink for F
where
    F: FnMut(bool),
{
    #[inline]
    fn write(&mut self, high: bool) {
        self(high)
    }
}

/// Discards the output
#[derive(Debug, Default, Copy, Clone)]
pub struct NullSink;

impl OutputSink for NullSink {
    #[inline]
    fn write(&mut self, _high: bool) {}
}

pub struct Driver<'a, S> {
    sink: S,
    config: DriverConfig,

    program: Option<Program<'a>>,

    channels: [ChannelState; N_CHANNELS],
    sampler: Sampler,
    tempo: TempoCounter,

    output: bool,
    last_fault: Option<PlaybackFault>,
}

impl<'a, S> Driver<'a, S>
where
    S: OutputSink,
{
    /// Binds the output sink.  Does not start playback.
    pub fn init(sink: S) -> Self {
        Self::with_config(sink, DriverConfig::DEFAULT)
    }

    pub fn with_config(sink: S, config: DriverConfig) -> Self {
        Self {
            sink,
            config,
            program: None,
            channels: core::array::from_fn(|_| ChannelState::zeroed()),
            sampler: Sampler::new(),
            tempo: TempoCounter::new(config.tick_speed()),
            output: false,
            last_fault: None,
        }
    }

    // Same state as `init()`, keeps the sink and config
    fn reset(&mut self) {
        self.program = None;
        self.channels = core::array::from_fn(|_| ChannelState::zeroed());
        self.sampler = Sampler::new();
        self.tempo = TempoCounter::new(self.config.tick_speed());
        self.output = false;
        self.last_fault = None;
    }

    /// Starts playing `data`, replacing the current program.
    ///
    /// Only the channel table is checked.  On error the driver is unchanged.
    pub fn play(&mut self, data: &'a [u8]) -> Result<(), ProgramError> {
        let program = Program::new(data)?;
        self.play_program(program);
        Ok(())
    }

    pub fn play_program(&mut self, program: Program<'a>) {
        debug!(
            "play: {} bytes, channels start at {:?}",
            program.len(),
            program.channel_starts()
        );

        self.reset();
        self.channels = core::array::from_fn(|i| ChannelState::new(program.channel_start(i)));
        self.program = Some(program);
    }

    /// Stops playback immediately, `update()` is silent until the next `play()`.
    pub fn stop(&mut self) {
        if self.program.is_some() {
            debug!("stop");
        }
        self.reset();
    }

    /// Advances the driver by one tick and writes the output to the sink.
    ///
    /// Does nothing (and does not write to the sink) if no program is playing.
    ///
    /// A fault stops playback, writes silence to the sink and is returned once.
    /// Later calls are silent until the next `play()`.
    pub fn update(&mut self) -> Result<bool, PlaybackFault> {
        let program = match self.program {
            Some(p) => p,
            None => return Ok(false),
        };

        synthesize(&mut self.channels, &mut self.sampler, &self.config);

        if self.tempo.tick() {
            let r = sequencer_pass(
                &program,
                &mut self.channels,
                &mut self.sampler,
                &mut self.tempo,
                self.config.fetch_limit(),
            );

            if let Err(fault) = r {
                warn!("playback fault: {}", fault);

                self.reset();
                self.last_fault = Some(fault);
                self.sink.write(false);

                return Err(fault);
            }
        }

        self.output = mix(&self.channels);
        self.sink.write(self.output);

        Ok(self.output)
    }

    pub fn is_playing(&self) -> bool {
        self.program.is_some()
    }

    pub fn program(&self) -> Option<&Program<'a>> {
        self.program.as_ref()
    }

    /// Output of the last `update()`
    pub fn output(&self) -> bool {
        self.output
    }

    /// The fault that stopped playback (cleared by `play()` and `stop()`)
    pub fn last_fault(&self) -> Option<PlaybackFault> {
        self.last_fault
    }

    /// Panics if `channel >= N_CHANNELS`
    pub fn channel(&self, channel: usize) -> &ChannelState {
        &self.channels[channel]
    }

    pub fn channels(&self) -> &[ChannelState; N_CHANNELS] {
        &self.channels
    }

    pub fn sampler(&self) -> &Sampler {
        &self.sampler
    }

    pub fn tick_speed(&self) -> TickSpeed {
        self.tempo.speed()
    }

    pub fn tempo_counter(&self) -> &TempoCounter {
        &self.tempo
    }

    pub fn config(&self) -> &DriverConfig {
        &self.config
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }

    pub fn into_sink(self) -> S {
        self.sink
    }
}
