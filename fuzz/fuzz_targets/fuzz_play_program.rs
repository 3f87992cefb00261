#![no_main]

use libfuzzer_sys::fuzz_target;

use mmml_driver::{Driver, DriverConfig, NullSink};

const N_TICKS: usize = 20_000;

fuzz_target!(|data: &[u8]| {
    let config = DriverConfig {
        default_tick_speed: 3,
        equalize_sampler_timing: false,
        ..DriverConfig::DEFAULT
    };
    let mut driver = Driver::with_config(NullSink, config);

    if driver.play(data).is_err() {
        return;
    }

    for _ in 0..N_TICKS {
        if driver.update().is_err() {
            assert!(!driver.is_playing());
            assert!(driver.last_fault().is_some());
            assert_eq!(driver.update(), Ok(false));
            break;
        }

        for c in driver.channels() {
            assert!(c.loop_stack().len() <= mmml_driver::driver_constants::MAX_NESTED_LOOPS);
            assert!(c.volume() <= 7);
            assert!(usize::from(c.cursor()) <= data.len());
        }
    }
});
