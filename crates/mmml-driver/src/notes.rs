//! Note period table

// SPDX-FileCopyrightText: © 2025 The mmml-driver authors
//
// SPDX-License-Identifier: MIT

pub const N_NOTES: usize = 13;

pub const REST_NOTE: u8 = 0;
pub const FIRST_NOTE: u8 = 1;
pub const LAST_NOTE: u8 = (N_NOTES - 1) as u8;

/// Phase accumulator periods, one octave in equal temperament (Gb).
///
/// The rest is technically note 0 and needs a period too.  Its value is also
/// used as the sentinel frequency after `play()`, which never sounds as the
/// duty threshold is 0 until a note is played.
pub const NOTE_PERIODS: [u16; N_NOTES] = [
    255, // rest
    1024, 967, 912, 861, 813, 767, 724, 683, 645, 609, 575, 542,
];

pub const SENTINEL_FREQUENCY: u16 = NOTE_PERIODS[REST_NOTE as usize];

/// Returns the period of a sounding note, or `None` for a rest or an invalid note
pub fn note_period(note: u8) -> Option<u16> {
    match note {
        FIRST_NOTE..=LAST_NOTE => Some(NOTE_PERIODS[usize::from(note)]),
        _ => None,
    }
}

/// Pulse width of a note at the given volume.
///
/// Each volume step halves the pulse width, volume 1 is a 50% square wave.
pub const fn duty_threshold(period: u16, volume: u8) -> u16 {
    period >> volume
}
