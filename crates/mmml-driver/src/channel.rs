//! Per-channel playback registers

// SPDX-FileCopyrightText: © 2025 The mmml-driver authors
//
// SPDX-License-Identifier: MIT

use crate::driver_constants::{DEFAULT_OCTAVE_MULTIPLIER, DEFAULT_VOLUME, MAX_NESTED_LOOPS};
use crate::errors::FaultKind;
use crate::notes::{duty_threshold, SENTINEL_FREQUENCY};

/// An open loop
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct LoopFrame {
    /// Offset of the first instruction in the loop body
    pub loop_point: u16,
    /// Number of times the loop body will be repeated
    pub remaining: u16,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChannelState {
    // Oscillator
    pub(crate) pitch_counter: u16,
    pub(crate) frequency: u16,
    pub(crate) duty: u16,
    pub(crate) octave: u8,
    pub(crate) volume: u8,
    pub(crate) output: bool,

    // Sequencer
    pub(crate) length: u8,
    pub(crate) cursor: u16,
    pub(crate) loop_stack: heapless::Vec<LoopFrame, MAX_NESTED_LOOPS>,
    // Macros cannot be nested
    pub(crate) return_slot: Option<u16>,
}

impl ChannelState {
    /// Zeroed registers (the state after `init()`)
    pub(crate) const fn zeroed() -> Self {
        Self {
            pitch_counter: 0,
            frequency: 0,
            duty: 0,
            octave: 0,
            volume: 0,
            output: false,
            length: 0,
            cursor: 0,
            loop_stack: heapless::Vec::new(),
            return_slot: None,
        }
    }

    /// Default registers for a channel starting at `cursor` (the state after `play()`)
    pub(crate) fn new(cursor: u16) -> Self {
        Self {
            frequency: SENTINEL_FREQUENCY,
            volume: DEFAULT_VOLUME,
            octave: DEFAULT_OCTAVE_MULTIPLIER,
            cursor,
            ..Self::zeroed()
        }
    }

    pub(crate) fn push_loop(&mut self, frame: LoopFrame) -> Result<(), FaultKind> {
        self.loop_stack
            .push(frame)
            .map_err(|_| FaultKind::LoopStackOverflow)
    }

    pub(crate) fn top_loop_mut(&mut self) -> Result<&mut LoopFrame, FaultKind> {
        self.loop_stack
            .last_mut()
            .ok_or(FaultKind::LoopStackUnderflow)
    }

    pub(crate) fn pop_loop(&mut self) -> Result<LoopFrame, FaultKind> {
        self.loop_stack.pop().ok_or(FaultKind::LoopStackUnderflow)
    }

    /// Loads a new note period and recalculates the pulse width
    pub(crate) fn set_note(&mut self, period: u16) {
        self.frequency = period;
        self.duty = duty_threshold(period, self.volume);
    }

    pub(crate) fn rest(&mut self) {
        self.duty = 0;
    }

    pub fn pitch_counter(&self) -> u16 {
        self.pitch_counter
    }

    /// Note period
    pub fn frequency(&self) -> u16 {
        self.frequency
    }

    pub fn duty_threshold(&self) -> u16 {
        self.duty
    }

    pub fn octave_multiplier(&self) -> u8 {
        self.octave
    }

    pub fn volume(&self) -> u8 {
        self.volume
    }

    /// Output of the channel on the last tick
    pub fn output(&self) -> bool {
        self.output
    }

    /// Number of sequencer passes before the next instruction is read
    pub fn remaining_length(&self) -> u8 {
        self.length
    }

    pub fn cursor(&self) -> u16 {
        self.cursor
    }

    pub fn loop_stack(&self) -> &[LoopFrame] {
        &self.loop_stack
    }

    pub fn return_slot(&self) -> Option<u16> {
        self.return_slot
    }
}
