//! Render settings

// SPDX-FileCopyrightText: © 2025 The mmml-driver authors
//
// SPDX-License-Identifier: MIT

use mmml_driver::driver_constants::REFERENCE_TICK_RATE;
use mmml_driver::DriverConfig;

use serde::{Deserialize, Serialize};

use std::fmt::Display;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

pub const DEFAULT_AMPLITUDE: i16 = 8192;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// `update()` calls (and wave samples) per second
    pub tick_rate: u32,

    /// Sample value of a high output
    pub amplitude: i16,

    pub driver: DriverConfig,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            tick_rate: REFERENCE_TICK_RATE,
            amplitude: DEFAULT_AMPLITUDE,
            driver: DriverConfig {
                equalize_sampler_timing: false,
                ..DriverConfig::DEFAULT
            },
        }
    }
}

#[derive(Debug)]
pub enum ConfigError {
    OpenError(String, std::io::Error),
    SerdeError(String, serde_json::Error),
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::OpenError(file_name, e) => write!(f, "unable to open {}: {}", file_name, e),
            Self::SerdeError(file_name, e) => write!(f, "unable to read {}: {}", file_name, e),
        }
    }
}

pub fn load_render_config(path: &Path) -> Result<RenderConfig, ConfigError> {
    let file_name = path.display().to_string();

    let file = match File::open(path) {
        Ok(file) => file,
        Err(e) => return Err(ConfigError::OpenError(file_name, e)),
    };
    let reader = BufReader::new(file);

    match serde_json::from_reader(reader) {
        Ok(c) => Ok(c),
        Err(e) => Err(ConfigError::SerdeError(file_name, e)),
    }
}
