//! Plays a program into a sample buffer

// SPDX-FileCopyrightText: © 2025 The mmml-driver authors
//
// SPDX-License-Identifier: MIT

use crate::config::RenderConfig;

use mmml_driver::{Driver, PlaybackFault, ProgramError};

use tracing::debug;

use std::fmt::Display;

/// Longest render (about 67 minutes at the reference tick rate)
pub const MAX_TICKS: usize = 1 << 25;

#[derive(Debug)]
pub enum RenderError {
    NoTicks,
    TooManyTicks(usize),
    ProgramError(ProgramError),
}

impl Display for RenderError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NoTicks => write!(f, "nothing to render"),
            Self::TooManyTicks(n) => {
                write!(f, "cannot render {} ticks (maximum is {})", n, MAX_TICKS)
            }
            Self::ProgramError(e) => write!(f, "{}", e),
        }
    }
}

impl From<ProgramError> for RenderError {
    fn from(e: ProgramError) -> Self {
        Self::ProgramError(e)
    }
}

pub struct Rendering {
    pub samples: Vec<i16>,

    /// The fault that ended the render early
    pub fault: Option<PlaybackFault>,
}

/// Calls `update()` `n_ticks` times, one sample per tick.
///
/// A playback fault ends the render, the samples before the fault (and the
/// silent faulting tick) are kept.
pub fn render(
    program: &[u8],
    config: &RenderConfig,
    n_ticks: usize,
) -> Result<Rendering, RenderError> {
    if n_ticks == 0 {
        return Err(RenderError::NoTicks);
    }
    if n_ticks > MAX_TICKS {
        return Err(RenderError::TooManyTicks(n_ticks));
    }

    let high = config.amplitude;
    let low = config.amplitude.saturating_neg();

    let mut samples = Vec::with_capacity(n_ticks);

    let fault = {
        let sink = |out: bool| samples.push(if out { high } else { low });
        let mut driver = Driver::with_config(sink, config.driver);

        driver.play(program)?;

        (0..n_ticks).find_map(|_| driver.update().err())
    };

    debug!("rendered {} ticks", samples.len());

    Ok(Rendering { samples, fault })
}
