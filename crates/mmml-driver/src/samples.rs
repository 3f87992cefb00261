//! One-bit sample bank

// SPDX-FileCopyrightText: © 2025 The mmml-driver authors
//
// SPDX-License-Identifier: MIT

pub const SAMPLE_BANK_SIZE: usize = 127;
pub const N_WAVEFORMS: usize = 5;

/// First byte of each waveform in `SAMPLE_BANK`, plus an end sentinel.
pub const SAMPLE_INDICES: [u8; N_WAVEFORMS + 1] = [0, 19, 34, 74, 118, 126];

/// Raw PWM sample data, read least significant bit first.
#[rustfmt::skip]
pub const SAMPLE_BANK: [u8; SAMPLE_BANK_SIZE] = [
    // bwoop (0)
    0b10101010, 0b10110110, 0b10000111, 0b11111000,
    0b10000100, 0b00110111, 0b11101000, 0b11000001,
    0b00000111, 0b00111101, 0b11111000, 0b11100000,
    0b10010001, 0b10000111, 0b00000111, 0b00001111,
    0b00001111, 0b00011011, 0b00011110,
    // beep (19)
    0b10101010, 0b00101010, 0b00110011, 0b00110011,
    0b00110011, 0b00110011, 0b00110011, 0b11001101,
    0b11001100, 0b11001100, 0b11001100, 0b10101100,
    0b10011001, 0b00110001, 0b00110011,
    // kick (34)
    0b10010101, 0b10110010, 0b00000000, 0b11100011,
    0b11110000, 0b00000000, 0b11111111, 0b00000000,
    0b11111110, 0b00000000, 0b00000000, 0b00000000,
    0b11111111, 0b11111111, 0b11111111, 0b00100101,
    0b00000000, 0b00000000, 0b00000000, 0b00000000,
    0b11111111, 0b11110111, 0b11111111, 0b11111111,
    0b11111111, 0b10111111, 0b00010010, 0b00000000,
    0b10000000, 0b00000000, 0b00000000, 0b00000000,
    0b00000000, 0b11101110, 0b11111111, 0b11111111,
    0b11111111, 0b11110111, 0b11111111, 0b11111110,
    // snare (74)
    0b10011010, 0b10011010, 0b10101010, 0b10010110,
    0b01110100, 0b10010101, 0b10001010, 0b11011110,
    0b01110100, 0b10100000, 0b11110111, 0b00100101,
    0b01110100, 0b01101000, 0b11111111, 0b01011011,
    0b01000001, 0b10000000, 0b11010100, 0b11111101,
    0b11011110, 0b00010010, 0b00000100, 0b00100100,
    0b11101101, 0b11111011, 0b01011011, 0b00100101,
    0b00000100, 0b10010001, 0b01101010, 0b11011111,
    0b01110111, 0b00010101, 0b00000010, 0b00100010,
    0b11010101, 0b01111010, 0b11101111, 0b10110110,
    0b00100100, 0b10000100, 0b10100100, 0b11011010,
    // hi-hat (118)
    0b10011010, 0b01110100, 0b11010100, 0b00110011,
    0b00110011, 0b11101000, 0b11101000, 0b01010101,
    0b01010101,
];

/// A byte range of `SAMPLE_BANK`.
///
/// The byte at `end - 1` is a guard byte and is never played.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Waveform {
    pub start: u8,
    pub end: u8,
}

impl Waveform {
    /// Waveform for a sample-channel note nibble (1 to `N_WAVEFORMS`)
    pub fn from_note(note: u8) -> Option<Self> {
        let i = usize::from(note);
        if (1..=N_WAVEFORMS).contains(&i) {
            Some(Self {
                start: SAMPLE_INDICES[i - 1],
                end: SAMPLE_INDICES[i],
            })
        } else {
            None
        }
    }

    pub fn n_bytes(&self) -> usize {
        usize::from(self.end.saturating_sub(self.start))
    }
}
