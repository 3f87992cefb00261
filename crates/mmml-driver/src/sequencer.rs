//! Bytecode sequencer
//!
//! Runs once every time the tempo counter elapses.  A channel that is holding
//! a note counts down its length, otherwise it reads instructions until it
//! plays a note (or rest).

// SPDX-FileCopyrightText: © 2025 The mmml-driver authors
//
// SPDX-License-Identifier: MIT

use crate::bytecode::{note_length, Instruction};
use crate::channel::{ChannelState, LoopFrame};
use crate::driver_constants::{MAX_OCTAVE_SHIFT, MAX_VOLUME_SHIFT, N_CHANNELS, SAMPLE_CHANNEL};
use crate::errors::{FaultKind, PlaybackFault};
use crate::notes::{note_period, REST_NOTE};
use crate::program::Program;
use crate::samples::Waveform;
use crate::synthesizer::Sampler;
use crate::time::{TempoCounter, TickSpeed};

struct ChannelInterpreter<'a, 'p> {
    program: &'a Program<'p>,
    channel_id: usize,
    c: &'a mut ChannelState,
    sampler: &'a mut Sampler,
    tempo: &'a mut TempoCounter,
}

impl ChannelInterpreter<'_, '_> {
    fn read(&self, offset: u16) -> Result<u8, FaultKind> {
        self.program
            .byte(offset)
            .ok_or(FaultKind::CursorOutOfBounds)
    }

    fn offset_after(&self, n_bytes: u16) -> Result<u16, FaultKind> {
        self.c
            .cursor
            .checked_add(n_bytes)
            .ok_or(FaultKind::CursorOutOfBounds)
    }

    fn read_operand(&self) -> Result<u8, FaultKind> {
        self.read(self.offset_after(1)?)
    }

    fn advance(&mut self, n_bytes: u16) -> Result<(), FaultKind> {
        self.c.cursor = self.offset_after(n_bytes)?;
        Ok(())
    }

    fn play_note(&mut self, note: u8, length: u8) -> Result<(), FaultKind> {
        if self.channel_id == SAMPLE_CHANNEL {
            // A rest does not stop the playing sample
            if note != REST_NOTE {
                let waveform = Waveform::from_note(note).ok_or(FaultKind::SampleOutOfRange(note))?;
                self.sampler.select(waveform);
            }
        } else {
            match note_period(note) {
                Some(period) => self.c.set_note(period),
                None => self.c.rest(),
            }
        }

        self.c.length = note_length(length);
        self.advance(1)
    }

    // Returns true if the instruction ends the fetch loop
    fn process_next_instruction(&mut self) -> Result<bool, FaultKind> {
        let instruction = Instruction::decode(self.read(self.c.cursor)?);

        match instruction {
            Instruction::Note { note, length } => {
                self.play_note(note, length)?;
            }

            Instruction::SetOctave(o) => {
                if o > MAX_OCTAVE_SHIFT {
                    return Err(FaultKind::OctaveOutOfRange(o));
                }
                self.c.octave = 1 << o;
                self.advance(1)?;
            }
            Instruction::SetVolume(v) => {
                if v > MAX_VOLUME_SHIFT {
                    return Err(FaultKind::VolumeOutOfRange(v));
                }
                self.c.volume = v;
                self.advance(1)?;
            }

            Instruction::StartLoop => {
                let count = self.read_operand()?;
                let loop_point = self.offset_after(2)?;

                // A count of 0 plays the loop body 65536 times
                self.c.push_loop(LoopFrame {
                    loop_point,
                    remaining: u16::from(count).wrapping_sub(1),
                })?;
                self.c.cursor = loop_point;
            }
            Instruction::EndLoop => {
                let top = self.c.top_loop_mut()?;

                if top.remaining > 0 {
                    top.remaining -= 1;
                    let loop_point = top.loop_point;
                    self.c.cursor = loop_point;
                } else {
                    self.c.pop_loop()?;
                    self.advance(1)?;
                }
            }

            Instruction::CallMacro => {
                let macro_id = self.read_operand()?;
                let return_offset = self.offset_after(2)?;
                let start = self
                    .program
                    .macro_start(macro_id)
                    .ok_or(FaultKind::MacroOutOfBounds(macro_id))?;

                // Overrides any previous return offset, macros do not nest
                self.c.return_slot = Some(return_offset);
                self.c.cursor = start;
            }
            Instruction::Return => match self.c.return_slot.take() {
                Some(offset) => self.c.cursor = offset,
                None => self.c.cursor = self.program.channel_start(self.channel_id),
            },

            Instruction::SetTempo => {
                let operand = self.read_operand()?;
                self.tempo.set_speed(TickSpeed::from_operand(operand));
                self.advance(2)?;
            }

            Instruction::Reserved(_) => self.advance(2)?,

            // ::TODO confirm tie semantics with the encoder::
            Instruction::Tie => self.advance(1)?,

            Instruction::UnknownExtended(c) => return Err(FaultKind::UnknownCommand(c)),
        }

        Ok(instruction.is_sounding())
    }

    fn fetch_next_note(&mut self, fetch_limit: u16) -> Result<(), FaultKind> {
        for _ in 0..fetch_limit {
            if self.process_next_instruction()? {
                return Ok(());
            }
        }
        Err(FaultKind::FetchBudgetExceeded)
    }
}

/// Runs one sequencer pass over every channel.
///
/// Stops at the first channel that faults.
pub(crate) fn sequencer_pass(
    program: &Program,
    channels: &mut [ChannelState; N_CHANNELS],
    sampler: &mut Sampler,
    tempo: &mut TempoCounter,
    fetch_limit: u16,
) -> Result<(), PlaybackFault> {
    for (channel_id, c) in channels.iter_mut().enumerate() {
        // Keep waiting until the note is over
        if let Some(l) = c.length.checked_sub(1) {
            c.length = l;
            continue;
        }

        let mut ci = ChannelInterpreter {
            program,
            channel_id,
            c,
            sampler: &mut *sampler,
            tempo: &mut *tempo,
        };

        if let Err(kind) = ci.fetch_next_note(fetch_limit) {
            return Err(PlaybackFault {
                channel: channel_id,
                offset: ci.c.cursor,
                kind,
            });
        }
    }

    Ok(())
}
