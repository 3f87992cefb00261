//! Compiled program data
//!
//! ```text
//! 0x0000  channel 0 bytecode offset (big endian)
//! 0x0002  channel 1 bytecode offset
//! 0x0004  channel 2 bytecode offset
//! 0x0006  channel 3 (sampler) bytecode offset
//! 0x0008  macro 0 bytecode offset
//! 0x000a  macro 1 bytecode offset
//!   ...
//!         bytecode
//! ```
//!
//! The number of macros is not stored in the program.

// SPDX-FileCopyrightText: © 2025 The mmml-driver authors
//
// SPDX-License-Identifier: MIT

use crate::driver_constants::{BYTES_PER_HEADER_SLOT, CHANNEL_TABLE_SIZE, N_CHANNELS};
use crate::errors::ProgramError;

/// A borrowed program with a readable channel table.
///
/// Only the channel table is checked, the bytecode is trusted and every
/// bytecode read is bounds checked by the sequencer.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Program<'a> {
    data: &'a [u8],
    channel_starts: [u16; N_CHANNELS],
}

fn read_header_slot(data: &[u8], slot: usize) -> Option<u16> {
    let i = slot.checked_mul(BYTES_PER_HEADER_SLOT)?;
    let h = *data.get(i)?;
    let l = *data.get(i + 1)?;

    Some(u16::from_be_bytes([h, l]))
}

impl<'a> Program<'a> {
    pub fn new(data: &'a [u8]) -> Result<Self, ProgramError> {
        if data.len() < CHANNEL_TABLE_SIZE {
            return Err(ProgramError::HeaderTooShort(data.len()));
        }

        let mut channel_starts = [0; N_CHANNELS];

        for (channel, start) in channel_starts.iter_mut().enumerate() {
            let offset = read_header_slot(data, channel)
                .ok_or(ProgramError::HeaderTooShort(data.len()))?;

            if usize::from(offset) >= data.len() {
                return Err(ProgramError::ChannelOffsetOutOfBounds { channel, offset });
            }
            *start = offset;
        }

        Ok(Self {
            data,
            channel_starts,
        })
    }

    pub fn data(&self) -> &'a [u8] {
        self.data
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    #[inline]
    pub fn byte(&self, offset: u16) -> Option<u8> {
        self.data.get(usize::from(offset)).copied()
    }

    /// Bytecode offset of a channel (always inside the program)
    ///
    /// Panics if `channel >= N_CHANNELS`.
    pub fn channel_start(&self, channel: usize) -> u16 {
        self.channel_starts[channel]
    }

    pub fn channel_starts(&self) -> &[u16; N_CHANNELS] {
        &self.channel_starts
    }

    /// Bytecode offset of a macro.
    ///
    /// Returns `None` if the macro's header slot or its target is outside the program.
    pub fn macro_start(&self, macro_id: u8) -> Option<u16> {
        let offset = read_header_slot(self.data, N_CHANNELS + usize::from(macro_id))?;

        match usize::from(offset) < self.data.len() {
            true => Some(offset),
            false => None,
        }
    }
}
