//! μMML one-bit music driver
//!
//! A four channel player for compiled Micro Music Macro Language programs.
//! Three pulse channels and one sample channel are mixed into a single one-bit
//! output, one sample per [`Driver::update`] call.

// SPDX-FileCopyrightText: © 2025 The mmml-driver authors
//
// SPDX-License-Identifier: MIT

#![no_std]
#![forbid(unsafe_code)]

#[cfg(feature = "std")]
extern crate std;

mod channel;
mod sequencer;
mod synthesizer;

pub mod bytecode;
pub mod config;
pub mod driver;
pub mod driver_constants;
pub mod errors;
pub mod notes;
pub mod program;
pub mod samples;
pub mod time;

#[cfg(feature = "std")]
pub mod shared;

pub use channel::{ChannelState, LoopFrame};
pub use config::DriverConfig;
pub use driver::{Driver, NullSink, OutputSink};
pub use errors::{FaultKind, PlaybackFault, ProgramError};
pub use program::Program;
pub use synthesizer::Sampler;

#[cfg(feature = "std")]
pub use shared::SharedDriver;
