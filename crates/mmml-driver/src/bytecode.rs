//! Program bytecode
//!
//! Every instruction starts with a single byte holding two nibbles.
//!
//!  * `0x0n` - `0xCn`: play note/waveform (high nibble) for length `n`.
//!    Note 0 is a rest.
//!  * `0xDn`: set octave multiplier to `1 << n`.
//!  * `0xEn`: set volume (pulse width shift) to `n`.
//!  * `0xFn xx`: extended command `n` with a one byte operand.

// SPDX-FileCopyrightText: © 2025 The mmml-driver authors
//
// SPDX-License-Identifier: MIT

// Using nibble values to match the encoder's command names.
pub mod opcodes {
    // High nibbles 0x0 - 0xc are play note opcodes
    pub const SET_OCTAVE: u8 = 0xd;
    pub const SET_VOLUME: u8 = 0xe;
    pub const EXTENDED: u8 = 0xf;

    // Extended commands (low nibble)
    pub const START_LOOP: u8 = 0x0;
    pub const END_LOOP: u8 = 0x1;
    pub const CALL_MACRO: u8 = 0x2;
    pub const SET_TEMPO: u8 = 0x3;
    // Transpose and instrument in the encoder, ignored by the driver
    pub const RESERVED_4: u8 = 0x4;
    pub const RESERVED_5: u8 = 0x5;
    pub const TIE: u8 = 0x6;
    pub const RETURN: u8 = 0xf;
}

/// A decoded instruction byte.
///
/// Operands are not part of the decoded value, the sequencer only reads the
/// operand byte of the commands that use it.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Instruction {
    Note { note: u8, length: u8 },
    SetOctave(u8),
    SetVolume(u8),

    StartLoop,
    EndLoop,
    CallMacro,
    SetTempo,
    Reserved(u8),
    Tie,
    Return,

    UnknownExtended(u8),
}

impl Instruction {
    pub const fn decode(byte: u8) -> Self {
        let high = byte >> 4;
        let low = byte & 0x0f;

        match high {
            opcodes::SET_OCTAVE => Self::SetOctave(low),
            opcodes::SET_VOLUME => Self::SetVolume(low),
            opcodes::EXTENDED => match low {
                opcodes::START_LOOP => Self::StartLoop,
                opcodes::END_LOOP => Self::EndLoop,
                opcodes::CALL_MACRO => Self::CallMacro,
                opcodes::SET_TEMPO => Self::SetTempo,
                opcodes::RESERVED_4 | opcodes::RESERVED_5 => Self::Reserved(low),
                opcodes::TIE => Self::Tie,
                opcodes::RETURN => Self::Return,
                _ => Self::UnknownExtended(low),
            },
            _ => Self::Note {
                note: high,
                length: low,
            },
        }
    }

    /// true if the instruction ends the channel's fetch loop
    pub const fn is_sounding(&self) -> bool {
        matches!(self, Self::Note { .. })
    }
}

const PLAIN_LENGTH_BASE: u8 = 0x7f;
const DOTTED_LENGTH_BASE: u8 = 95;
const DOTTED_LENGTH_FLAG: u8 = 0x08;

/// Number of sequencer passes a note holds for after it is played.
///
/// Lengths `0..=7` are plain note values (127, 63, 31 ... 0),
/// lengths `8..=15` are dotted note values (95, 47, 23 ... 0).
pub const fn note_length(length: u8) -> u8 {
    let shift = length & 0x07;

    if length & DOTTED_LENGTH_FLAG == 0 {
        PLAIN_LENGTH_BASE >> shift
    } else {
        DOTTED_LENGTH_BASE >> shift
    }
}
