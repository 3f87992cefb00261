//! Tempo

// SPDX-FileCopyrightText: © 2025 The mmml-driver authors
//
// SPDX-License-Identifier: MIT

use crate::driver_constants::TEMPO_OPERAND_SHIFT;

/// Number of ticks between sequencer passes (minus one)
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct TickSpeed(u16);

impl TickSpeed {
    pub const fn new(ticks: u16) -> Self {
        Self(ticks)
    }

    /// Tick speed of a tempo command operand
    pub const fn from_operand(operand: u8) -> Self {
        Self((operand as u16) << TEMPO_OPERAND_SHIFT)
    }

    pub const fn as_u16(&self) -> u16 {
        self.0
    }

    /// Number of `update()` calls between two sequencer passes
    pub const fn ticks_per_pass(&self) -> u32 {
        self.0 as u32 + 1
    }
}

/// Counts down ticks until the next sequencer pass.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct TempoCounter {
    counter: u16,
    speed: TickSpeed,
}

impl TempoCounter {
    /// A counter that elapses on the next tick
    pub const fn new(speed: TickSpeed) -> Self {
        Self { counter: 0, speed }
    }

    pub fn speed(&self) -> TickSpeed {
        self.speed
    }

    /// Changes the reload value, the current countdown is unchanged.
    pub fn set_speed(&mut self, speed: TickSpeed) {
        self.speed = speed;
    }

    pub fn counter(&self) -> u16 {
        self.counter
    }

    /// Advances the counter by one tick.
    ///
    /// Returns true (and reloads the counter) if a sequencer pass is due.
    #[inline]
    pub fn tick(&mut self) -> bool {
        match self.counter.checked_sub(1) {
            Some(c) => {
                self.counter = c;
                false
            }
            None => {
                self.counter = self.speed.as_u16();
                true
            }
        }
    }
}
