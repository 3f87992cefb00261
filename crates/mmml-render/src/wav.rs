//! A simple mono PCM wave file encoder

// SPDX-FileCopyrightText: © 2025 The mmml-driver authors
//
// SPDX-License-Identifier: MIT

use std::fmt::Display;
use std::io;

#[derive(Debug)]
pub enum WavError {
    NoSamples,
    InvalidSampleRate,
    WaveFileTooLarge,

    IoError(io::Error),
}

impl Display for WavError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            WavError::NoSamples => write!(f, "no samples"),
            WavError::InvalidSampleRate => write!(f, "invalid sample rate"),
            WavError::WaveFileTooLarge => write!(f, "wave file is too large"),

            WavError::IoError(io_error) => io_error.fmt(f),
        }
    }
}

impl From<io::Error> for WavError {
    fn from(e: io::Error) -> Self {
        Self::IoError(e)
    }
}

const WAV_FORMAT_PCM_FORMAT: u16 = 1;

const N_CHANNELS: u16 = 1;
const BITS_PER_SAMPLE: u16 = 16;
const BLOCK_ALIGN: u16 = N_CHANNELS * BITS_PER_SAMPLE / 8;

const FMT_CHUNK_SIZE: u32 = 16;

// RIFF size field covers everything after itself
const RIFF_HEADER_OVERHEAD: u32 = 4 + (8 + FMT_CHUNK_SIZE) + 8;

const WAVE_CHUNK_ID: [u8; 4] = *b"RIFF";
const WAVE_ID: [u8; 4] = *b"WAVE";
const FMT_CHUNK_ID: [u8; 4] = *b"fmt ";
const DATA_CHUNK_ID: [u8; 4] = *b"data";

/// Total size of a wave file containing `n_samples` samples
pub fn wave_file_size(n_samples: usize) -> Option<u32> {
    let data_size = u32::try_from(n_samples)
        .ok()?
        .checked_mul(u32::from(BLOCK_ALIGN))?;

    data_size.checked_add(RIFF_HEADER_OVERHEAD + 8)
}

pub fn write_16_bit_mono_wave_file(
    writer: &mut impl io::Write,
    sample_rate: u32,
    samples: &[i16],
) -> Result<(), WavError> {
    if samples.is_empty() {
        return Err(WavError::NoSamples);
    }
    if sample_rate == 0 {
        return Err(WavError::InvalidSampleRate);
    }

    let file_size = wave_file_size(samples.len()).ok_or(WavError::WaveFileTooLarge)?;
    let data_size = file_size - RIFF_HEADER_OVERHEAD - 8;
    let avg_bytes_per_second = sample_rate
        .checked_mul(u32::from(BLOCK_ALIGN))
        .ok_or(WavError::InvalidSampleRate)?;

    let mut header = Vec::with_capacity(44);

    header.extend(WAVE_CHUNK_ID);
    header.extend((file_size - 8).to_le_bytes());
    header.extend(WAVE_ID);

    header.extend(FMT_CHUNK_ID);
    header.extend(FMT_CHUNK_SIZE.to_le_bytes());
    header.extend(WAV_FORMAT_PCM_FORMAT.to_le_bytes());
    header.extend(N_CHANNELS.to_le_bytes());
    header.extend(sample_rate.to_le_bytes());
    header.extend(avg_bytes_per_second.to_le_bytes());
    header.extend(BLOCK_ALIGN.to_le_bytes());
    header.extend(BITS_PER_SAMPLE.to_le_bytes());

    header.extend(DATA_CHUNK_ID);
    header.extend(data_size.to_le_bytes());

    writer.write_all(&header)?;

    let data: Vec<u8> = samples.iter().flat_map(|s| s.to_le_bytes()).collect();
    writer.write_all(&data)?;

    Ok(())
}
