//! Gemeinsame Mocks für die Integration Tests

#![allow(dead_code)]

use esp_core::{LedError, RandomSource, SmartLedWriter, StripDriver};
use rgb::RGB8;

// ============================================================================
// Mock LED Writer
// ============================================================================

#[derive(Default)]
pub struct MockLedWriter {
    /// Zuletzt übertragener Frame (für Assertions in Tests)
    pub last_frame: Option<Vec<RGB8>>,
    /// Anzahl der write() Aufrufe
    pub write_count: usize,
    /// Simuliere Fehler beim nächsten write()
    pub fail_next_write: bool,
}

impl MockLedWriter {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SmartLedWriter for MockLedWriter {
    fn write<I>(&mut self, pixels: I) -> Result<(), LedError>
    where
        I: Iterator<Item = RGB8>,
    {
        if self.fail_next_write {
            self.fail_next_write = false;
            return Err(LedError::WriteFailed);
        }

        self.last_frame = Some(pixels.collect());
        self.write_count += 1;
        Ok(())
    }
}

// ============================================================================
// Recording Strip Driver
// ============================================================================

/// Strip-Treiber der jeden Aufruf mitschreibt
pub struct RecordingStrip {
    pub pixels: Vec<RGB8>,
    pub brightness: u8,
    pub show_count: usize,
    pub fill_count: usize,
    /// Brightness zum Zeitpunkt des letzten show()
    pub shown_brightness: Option<u8>,
}

impl RecordingStrip {
    pub fn new(len: usize) -> Self {
        Self {
            pixels: vec![RGB8::default(); len],
            brightness: 0,
            show_count: 0,
            fill_count: 0,
            shown_brightness: None,
        }
    }

    pub fn lit(&self) -> Vec<usize> {
        self.pixels
            .iter()
            .enumerate()
            .filter(|(_, c)| **c != RGB8::default())
            .map(|(i, _)| i)
            .collect()
    }
}

impl StripDriver for RecordingStrip {
    fn len(&self) -> usize {
        self.pixels.len()
    }

    fn set_pixel(&mut self, index: u16, color: RGB8) {
        if let Some(pixel) = self.pixels.get_mut(index as usize) {
            *pixel = color;
        }
    }

    fn fill(&mut self, color: RGB8) {
        self.fill_count += 1;
        self.pixels.iter_mut().for_each(|p| *p = color);
    }

    fn set_brightness(&mut self, brightness: u8) {
        self.brightness = brightness;
    }

    fn show(&mut self) -> Result<(), LedError> {
        self.show_count += 1;
        self.shown_brightness = Some(self.brightness);
        Ok(())
    }
}

// ============================================================================
// Zufallsquellen
// ============================================================================

/// Liefert vorgegebene Werte der Reihe nach (zyklisch)
pub struct SequenceRng {
    values: Vec<u32>,
    next: usize,
}

impl SequenceRng {
    pub fn new(values: &[u32]) -> Self {
        Self {
            values: values.to_vec(),
            next: 0,
        }
    }
}

impl RandomSource for SequenceRng {
    fn next_u32(&mut self) -> u32 {
        let value = self.values[self.next % self.values.len()];
        self.next += 1;
        value
    }
}

/// Zufallswert, der in einer Liste der Länge `len` auf `index` fällt
pub fn rng_value_for(index: usize, len: usize) -> u32 {
    ((((index as u64) << 32) + (1 << 31)) / len as u64) as u32
}

pub const ROYALBLUE: RGB8 = RGB8 {
    r: 65,
    g: 105,
    b: 225,
};
