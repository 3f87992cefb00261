//! A driver that can be shared between threads
//!
//! The audio thread calls `update()` while the main thread calls `play()` and
//! `stop()`.  Each call holds the lock for the whole operation.

// SPDX-FileCopyrightText: © 2025 The mmml-driver authors
//
// SPDX-License-Identifier: MIT

use crate::driver::{Driver, OutputSink};
use crate::errors::{PlaybackFault, ProgramError};

use std::sync::{Mutex, MutexGuard, PoisonError};

pub struct SharedDriver<'a, S> {
    driver: Mutex<Driver<'a, S>>,
}

impl<'a, S> SharedDriver<'a, S>
where
    S: OutputSink,
{
    pub fn new(driver: Driver<'a, S>) -> Self {
        Self {
            driver: Mutex::new(driver),
        }
    }

    // The driver state is always consistent between calls, a panic in a sink
    // does not leave it half-updated.
    fn lock(&self) -> MutexGuard<'_, Driver<'a, S>> {
        self.driver.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn play(&self, data: &'a [u8]) -> Result<(), ProgramError> {
        self.lock().play(data)
    }

    pub fn stop(&self) {
        self.lock().stop()
    }

    pub fn update(&self) -> Result<bool, PlaybackFault> {
        self.lock().update()
    }

    pub fn is_playing(&self) -> bool {
        self.lock().is_playing()
    }

    /// Runs `f` with exclusive access to the driver
    pub fn with<R>(&self, f: impl FnOnce(&mut Driver<'a, S>) -> R) -> R {
        f(&mut self.lock())
    }

    pub fn into_inner(self) -> Driver<'a, S> {
        self.driver
            .into_inner()
            .unwrap_or_else(PoisonError::into_inner)
    }
}
