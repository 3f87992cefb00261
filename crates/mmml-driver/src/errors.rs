//! Driver errors

// SPDX-FileCopyrightText: © 2025 The mmml-driver authors
//
// SPDX-License-Identifier: MIT

use core::fmt::Display;

/// `play()` could not read the program header
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ProgramError {
    HeaderTooShort(usize),
    ChannelOffsetOutOfBounds { channel: usize, offset: u16 },
}

/// Why a channel stopped the driver
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum FaultKind {
    CursorOutOfBounds,

    LoopStackOverflow,
    LoopStackUnderflow,

    MacroOutOfBounds(u8),

    UnknownCommand(u8),

    OctaveOutOfRange(u8),
    VolumeOutOfRange(u8),
    SampleOutOfRange(u8),

    FetchBudgetExceeded,
}

/// A runtime fault raised by the sequencer.
///
/// `offset` is the channel's program cursor when the fault was raised.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct PlaybackFault {
    pub channel: usize,
    pub offset: u16,
    pub kind: FaultKind,
}

// Display
// =======

impl Display for ProgramError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::HeaderTooShort(len) => {
                write!(f, "program too short for the channel table ({} bytes)", len)
            }
            Self::ChannelOffsetOutOfBounds { channel, offset } => write!(
                f,
                "channel {} starts outside the program (offset {:#06x})",
                channel, offset
            ),
        }
    }
}

impl Display for FaultKind {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::CursorOutOfBounds => write!(f, "read past the end of the program"),
            Self::LoopStackOverflow => write!(f, "too many nested loops"),
            Self::LoopStackUnderflow => write!(f, "loop end without a loop start"),
            Self::MacroOutOfBounds(id) => write!(f, "macro {} is not in the program", id),
            Self::UnknownCommand(c) => write!(f, "unknown extended command {:#x}", c),
            Self::OctaveOutOfRange(o) => write!(f, "octave out of range ({})", o),
            Self::VolumeOutOfRange(v) => write!(f, "volume out of range ({})", v),
            Self::SampleOutOfRange(s) => write!(f, "no sample {}", s),
            Self::FetchBudgetExceeded => write!(f, "no note played within the fetch budget"),
        }
    }
}

impl Display for PlaybackFault {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "channel {} at {:#06x}: {}",
            self.channel, self.offset, self.kind
        )
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ProgramError {}

#[cfg(feature = "std")]
impl std::error::Error for PlaybackFault {}
