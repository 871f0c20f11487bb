// Library-Root: Wiederverwendbare Logik und Module
// Keine Standard-Bibliothek (Embedded System)
#![no_std]

// Module
pub mod config;
pub mod hal;
pub mod tasks;

// Re-exports von esp-core
pub use esp_core::{
    Command, CommandDecoder, Controller, LedError, Palette, PixelStrip, RandomSource,
    SmartLedWriter, StripTopology,
};

// Embassy Channel-Typen
use embassy_sync::blocking_mutex::raw::NoopRawMutex;
use embassy_sync::channel::{Channel, Receiver, Sender};

use crate::config::COMMAND_QUEUE_SIZE;

// ============================================================================
// Type-Aliase für Channel-Typen
// ============================================================================
//
// Statt:  Sender<'static, NoopRawMutex, Command, COMMAND_QUEUE_SIZE>
// Nutze:  CommandSender

/// Channel für dekodierte Kommandos (UART Task → Strip Task)
/// Beide Tasks laufen auf demselben Executor, daher NoopRawMutex
pub type CommandChannel = Channel<NoopRawMutex, Command, COMMAND_QUEUE_SIZE>;

/// Sender für Kommandos (UART Task)
pub type CommandSender = Sender<'static, NoopRawMutex, Command, COMMAND_QUEUE_SIZE>;

/// Receiver für Kommandos (Strip Task)
pub type CommandReceiver = Receiver<'static, NoopRawMutex, Command, COMMAND_QUEUE_SIZE>;
