//! Driver configuration

// SPDX-FileCopyrightText: © 2025 The mmml-driver authors
//
// SPDX-License-Identifier: MIT

use crate::driver_constants::{DEFAULT_FETCH_BUDGET, DEFAULT_TICK_SPEED, SAMPLE_SPEED};
use crate::time::TickSpeed;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct DriverConfig {
    /// Sampler prescaler reload value
    pub sample_speed: u8,

    /// Tempo after `play()`
    pub default_tick_speed: u16,

    /// Maximum number of instructions a channel may read in one sequencer pass
    pub fetch_budget: u16,

    /// Waste the same amount of time on the silent sampler path as the playing path.
    ///
    /// Only useful on cycle-counted targets, where it stops the pitch of the pulse
    /// channels changing when a sample ends.
    pub equalize_sampler_timing: bool,
}

impl DriverConfig {
    pub const DEFAULT: Self = Self {
        sample_speed: SAMPLE_SPEED,
        default_tick_speed: DEFAULT_TICK_SPEED,
        fetch_budget: DEFAULT_FETCH_BUDGET,
        equalize_sampler_timing: true,
    };

    pub fn tick_speed(&self) -> TickSpeed {
        TickSpeed::new(self.default_tick_speed)
    }

    /// `fetch_budget`, a channel must always be able to read at least one instruction
    pub fn fetch_limit(&self) -> u16 {
        self.fetch_budget.max(1)
    }
}

impl Default for DriverConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}
