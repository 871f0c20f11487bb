//! Frame-Buffer vor dem SmartLED Writer
//!
//! Hält alle Pixel im RAM, wendet beim Übertragen die Helligkeit an und
//! schreibt den kompletten Frame in einem Rutsch.

use rgb::RGB8;

use crate::logic::scale_brightness;
use crate::topology::MAX_PIXELS;
use crate::traits::{LedError, SmartLedWriter, StripDriver};

pub struct PixelStrip<W: SmartLedWriter> {
    writer: W,
    pixels: [RGB8; MAX_PIXELS],
    len: usize,
    brightness: u8,
}

impl<W: SmartLedWriter> PixelStrip<W> {
    /// `len` wird auf `MAX_PIXELS` begrenzt
    pub fn new(writer: W, len: usize) -> Self {
        Self {
            writer,
            pixels: [RGB8::default(); MAX_PIXELS],
            len: len.min(MAX_PIXELS),
            brightness: u8::MAX,
        }
    }

    /// Aktueller Buffer-Inhalt (ohne Helligkeit)
    pub fn pixels(&self) -> &[RGB8] {
        &self.pixels[..self.len]
    }

    pub fn brightness(&self) -> u8 {
        self.brightness
    }

    pub fn writer(&self) -> &W {
        &self.writer
    }

    pub fn writer_mut(&mut self) -> &mut W {
        &mut self.writer
    }
}

impl<W: SmartLedWriter> StripDriver for PixelStrip<W> {
    fn len(&self) -> usize {
        self.len
    }

    fn set_pixel(&mut self, index: u16, color: RGB8) {
        if let Some(pixel) = self.pixels[..self.len].get_mut(index as usize) {
            *pixel = color;
        }
    }

    fn fill(&mut self, color: RGB8) {
        self.pixels[..self.len].fill(color);
    }

    fn set_brightness(&mut self, brightness: u8) {
        self.brightness = brightness;
    }

    fn show(&mut self) -> Result<(), LedError> {
        let brightness = self.brightness;
        self.writer.write(
            self.pixels[..self.len]
                .iter()
                .map(|&c| scale_brightness(c, brightness)),
        )
    }
}
