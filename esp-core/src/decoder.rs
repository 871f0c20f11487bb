//! Command Decoder für den Bluetooth-Link
//!
//! Nachrichten sind `^<token>?` gerahmt. Der Decoder ist eine
//! Zustandsmaschine, die pro Aufruf nur verfügbare Bytes verarbeitet und
//! einen angefangenen Frame über Aufrufe hinweg behält.

use heapless::Vec;

use crate::traits::SerialSource;
use crate::types::Command;

/// Start-Byte eines Frames
pub const FRAME_START: u8 = b'^';

/// Stop-Byte eines Frames
pub const FRAME_STOP: u8 = b'?';

/// Maximale Payload-Länge (längstes Token: `bright_down`)
pub const MAX_TOKEN_LEN: usize = 16;

#[derive(Debug, Clone, PartialEq, Eq)]
enum DecoderState {
    AwaitingStart,
    InFrame {
        payload: Vec<u8, MAX_TOKEN_LEN>,
        overflowed: bool,
    },
}

/// Zähler für Diagnose (Logging in der Firmware)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DecoderStats {
    /// Bytes außerhalb eines Frames
    pub dropped_bytes: u32,
    /// Vollständige Frames mit unbekanntem Token
    pub unknown_tokens: u32,
    /// Frames mit zu langer Payload
    pub overflowed_frames: u32,
}

/// Zerlegt den Byte-Strom in Kommandos
#[derive(Debug, Clone)]
pub struct CommandDecoder {
    state: DecoderState,
    stats: DecoderStats,
}

impl Default for CommandDecoder {
    fn default() -> Self {
        Self::new()
    }
}

impl CommandDecoder {
    pub fn new() -> Self {
        Self {
            state: DecoderState::AwaitingStart,
            stats: DecoderStats::default(),
        }
    }

    /// Liest ein Kommando aus der Quelle, ohne zu blockieren
    ///
    /// - Außerhalb eines Frames wird genau ein Byte gelesen. Ist es nicht
    ///   `^`, wird es verworfen und `Command::None` zurückgegeben.
    /// - Innerhalb eines Frames wird gelesen bis `?` kommt oder die Quelle
    ///   leer ist. Im zweiten Fall bleibt der Frame für den nächsten Aufruf
    ///   offen und das Ergebnis ist `Command::None`.
    pub fn read<S: SerialSource>(&mut self, source: &mut S) -> Command {
        if !self.in_frame() {
            let Some(byte) = source.read_byte() else {
                return Command::None;
            };
            self.push(byte);
            if !self.in_frame() {
                return Command::None;
            }
        }

        while let Some(byte) = source.read_byte() {
            if let Some(command) = self.push(byte) {
                return command;
            }
        }

        Command::None
    }

    /// Verarbeitet ein einzelnes Byte
    ///
    /// Gibt `Some` zurück sobald ein Frame abgeschlossen ist, auch wenn das
    /// Token unbekannt war (dann `Some(Command::None)`).
    pub fn push(&mut self, byte: u8) -> Option<Command> {
        match &mut self.state {
            DecoderState::AwaitingStart => {
                if byte == FRAME_START {
                    self.state = DecoderState::InFrame {
                        payload: Vec::new(),
                        overflowed: false,
                    };
                } else {
                    self.stats.dropped_bytes = self.stats.dropped_bytes.wrapping_add(1);
                }
                None
            }
            DecoderState::InFrame { .. } if byte == FRAME_STOP => {
                let state = core::mem::replace(&mut self.state, DecoderState::AwaitingStart);
                let DecoderState::InFrame {
                    payload,
                    overflowed,
                } = state
                else {
                    return None;
                };

                if overflowed {
                    self.stats.overflowed_frames = self.stats.overflowed_frames.wrapping_add(1);
                    return Some(Command::None);
                }

                let command = Command::from_token(&payload);
                if command == Command::None {
                    self.stats.unknown_tokens = self.stats.unknown_tokens.wrapping_add(1);
                }
                Some(command)
            }
            DecoderState::InFrame {
                payload,
                overflowed,
            } => {
                if payload.push(byte).is_err() {
                    *overflowed = true;
                }
                None
            }
        }
    }

    /// True solange ein Frame offen ist
    pub fn in_frame(&self) -> bool {
        matches!(self.state, DecoderState::InFrame { .. })
    }

    /// Verwirft einen offenen Frame
    pub fn reset(&mut self) {
        self.state = DecoderState::AwaitingStart;
    }

    pub fn stats(&self) -> DecoderStats {
        self.stats
    }
}
