// SPDX-FileCopyrightText: © 2025 The mmml-driver authors
//
// SPDX-License-Identifier: MIT

use crate::*;

use mmml_driver::driver_constants::DEFAULT_TICK_SPEED;
use mmml_driver::samples::{SAMPLE_BANK, SAMPLE_INDICES};

#[test]
fn duty_levels() {
    for volume in 0..=7u8 {
        let program = channel_0_program(&[0xe0 | volume, 0x10]);
        let mut d = Driver::with_config(
            Recorder::default(),
            test_config(DEFAULT_TICK_SPEED + 1),
        );
        d.play(&program).unwrap();

        d.update().unwrap();
        assert_eq!(d.channel(0).duty_threshold(), 1024 >> volume);

        // The octave multiplier (3) is coprime with the period, every phase
        // is visited once in 1024 ticks.
        let n_high = (0..1024)
            .filter(|_| d.update().unwrap())
            .count();

        assert_eq!(n_high, 1024 >> volume, "volume {}", volume);
    }
}

#[test]
fn channels_are_mixed_with_or() {
    let program = build_program(
        [&[0x10], &[0xe7, 0x10], SILENT, SILENT],
        &[],
    );
    let mut d = fast_driver(&program);

    for _ in 0..3000 {
        let out = d.update().unwrap();
        let c = d.channels();

        assert_eq!(out, c.iter().any(|c| c.output()));
        assert_eq!(out, d.output());
    }
}

#[test]
fn sample_plays_bank_bits() {
    // beep on the sample channel
    let program = build_program([SILENT, SILENT, SILENT, &[0x20]], &[]);
    let mut d = fast_driver(&program);

    // The sampler reloads its prescaler before the sequencer selects the sample
    d.update().unwrap();
    assert!(d.sampler().is_playing());

    for _ in 0..5 {
        assert_eq!(d.update(), Ok(false));
    }

    let start = usize::from(SAMPLE_INDICES[1]);
    let expected_bits = SAMPLE_BANK[start..start + 2]
        .iter()
        .flat_map(|b| (0..8).map(move |i| (b >> i) & 1 == 1));

    for (i, expected) in expected_bits.enumerate() {
        // 6 ticks per bit
        for tick in 0..6 {
            assert_eq!(d.update(), Ok(expected), "bit {}, tick {}", i, tick);
        }
    }
    assert_eq!(usize::from(d.sampler().current_byte()), start + 2);
}

#[test]
fn sample_advances_independently_of_tempo() {
    let program = build_program([SILENT, SILENT, SILENT, &[0x20, 0x00, 0xff]], &[]);

    let sampler_after_200_ticks = |ticks_per_pass| {
        let mut d = Driver::with_config(Recorder::default(), test_config(ticks_per_pass));
        d.play(&program).unwrap();
        for _ in 0..200 {
            d.update().unwrap();
        }
        d.sampler().clone()
    };

    let fast = sampler_after_200_ticks(1);
    let slow = sampler_after_200_ticks(DEFAULT_TICK_SPEED + 1);
    let odd = sampler_after_200_ticks(7);

    assert_eq!(fast, slow);
    assert_eq!(fast, odd);

    // Bits are consumed on ticks 7, 13, ... 199
    assert_eq!(fast.current_byte(), SAMPLE_INDICES[1] + 4);
    assert_eq!(fast.current_bit(), 1);
}

#[test]
fn sample_rest_does_not_stop_sample() {
    let program = build_program([SILENT, SILENT, SILENT, &[0x57, 0x07, 0x00]], &[]);
    let mut d = fast_driver(&program);

    d.update().unwrap();
    d.update().unwrap();
    d.update().unwrap();

    assert!(d.sampler().is_playing());
    assert_eq!(d.sampler().current_byte(), SAMPLE_INDICES[4]);
}

#[test]
fn new_sample_restarts_sampler() {
    let program = build_program([SILENT, SILENT, SILENT, &[0x30, 0x10]], &[]);
    let mut d = fast_driver(&program);

    for _ in 0..129 {
        d.update().unwrap();
    }
    assert_eq!(d.sampler().current_byte(), SAMPLE_INDICES[0]);
    assert_eq!(d.sampler().current_bit(), 0);
}

#[test]
fn sampler_timing_padding_does_not_change_output() {
    let program = build_program(
        [&[0x17, 0x27, 0xff], SILENT, SILENT, &[0x47, 0x07, 0x00, 0xff]],
        &[],
    );

    let render = |equalize_sampler_timing| {
        let config = DriverConfig {
            equalize_sampler_timing,
            ..test_config(4)
        };
        let mut d = Driver::with_config(Recorder::default(), config);
        d.play(&program).unwrap();
        for _ in 0..5000 {
            d.update().unwrap();
        }
        d.into_sink().0
    };

    assert_eq!(render(true), render(false));
}
