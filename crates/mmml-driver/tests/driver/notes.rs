// SPDX-FileCopyrightText: © 2025 The mmml-driver authors
//
// SPDX-License-Identifier: MIT

use crate::*;

use mmml_driver::notes::NOTE_PERIODS;

#[test]
fn note_held_for_127_passes() {
    const TICKS_PER_PASS: usize = 16;

    let program = channel_0_program(&[0x10, 0x21, 0x20]);
    let mut d = Driver::with_config(Recorder::default(), test_config(TICKS_PER_PASS as u16));
    d.play(&program).unwrap();

    // The note is read after the first tick is synthesized
    assert_eq!(d.update(), Ok(false));
    assert_eq!(d.channel(0).frequency(), 1024);
    assert_eq!(d.channel(0).duty_threshold(), 512);
    assert_eq!(d.channel(0).remaining_length(), 127);

    let mut phase: u16 = 3;
    let mut falling_edges = 0;

    for tick in 2..=(1 + 128 * TICKS_PER_PASS) {
        phase += 3;
        if phase >= 1024 {
            phase -= 1024;
        }
        let expected = phase < 512;

        let prev = d.output();
        assert_eq!(d.update(), Ok(expected), "tick {}", tick);

        if prev && !expected {
            falling_edges += 1;
        }

        if tick <= 128 * TICKS_PER_PASS {
            assert_eq!(d.channel(0).frequency(), 1024, "tick {}", tick);
        }
    }

    assert_eq!(falling_edges, 6);

    // The 128th pass after the note reads the next note
    assert_eq!(d.channel(0).frequency(), 967);
    assert_eq!(d.channel(0).cursor(), channel_0_start(0) + 2);
}

#[test]
fn every_note_period() {
    for note in 1..=12u8 {
        let program = channel_0_program(&[note << 4]);
        let mut d = fast_driver(&program);

        assert_eq!(update_ch0_period(&mut d), NOTE_PERIODS[usize::from(note)]);
    }
}

#[test]
fn rest_keeps_period_and_silences() {
    let program = channel_0_program(&[0x17, 0x07, 0x00]);
    let mut d = fast_driver(&program);

    d.update().unwrap();
    assert_eq!(d.channel(0).duty_threshold(), 512);

    d.update().unwrap();
    assert_eq!(d.channel(0).frequency(), 1024);
    assert_eq!(d.channel(0).duty_threshold(), 0);

    // 127 passes of silence
    for _ in 0..127 {
        assert_eq!(d.update(), Ok(false));
    }
}

#[test]
fn dotted_lengths() {
    // nibble 8 => 95 passes
    let program = channel_0_program(&[0x18, 0x20]);
    let mut d = fast_driver(&program);

    for _ in 0..96 {
        assert_eq!(update_ch0_period(&mut d), 1024);
    }
    assert_eq!(update_ch0_period(&mut d), 967);
}

#[test]
fn octave_command() {
    let program = channel_0_program(&[0xd5, 0x10]);
    let mut d = fast_driver(&program);

    d.update().unwrap();
    assert_eq!(d.channel(0).octave_multiplier(), 32);

    d.update().unwrap();
    assert_eq!(d.channel(0).pitch_counter(), 3 + 32);
}

#[test]
fn volume_applies_to_next_note() {
    let program = channel_0_program(&[0x17, 0xe3, 0x20]);
    let mut d = fast_driver(&program);

    d.update().unwrap();
    assert_eq!(d.channel(0).duty_threshold(), 1024 >> 1);

    d.update().unwrap();
    assert_eq!(d.channel(0).volume(), 3);
    assert_eq!(d.channel(0).duty_threshold(), 967 >> 3);
}

#[test]
fn tempo_command_changes_pass_rate_after_reload() {
    // speed 0x10 << 4 = 256
    let program = channel_0_program(&[0xf3, 0x10, 0x17, 0x27, 0x37]);
    let mut d = Driver::with_config(Recorder::default(), test_config(3));
    d.play(&program).unwrap();

    assert_eq!(update_ch0_period(&mut d), 1024);
    assert_eq!(d.tick_speed().as_u16(), 256);

    // The countdown loaded before the tempo command is unchanged
    assert_eq!(update_ch0_period(&mut d), 1024);
    assert_eq!(update_ch0_period(&mut d), 1024);
    assert_eq!(update_ch0_period(&mut d), 967);

    for _ in 0..256 {
        assert_eq!(update_ch0_period(&mut d), 967);
    }
    assert_eq!(update_ch0_period(&mut d), 912);
}
