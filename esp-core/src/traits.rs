//! Hardware Abstraction Traits
//!
//! Diese Traits definieren Schnittstellen für Hardware-Zugriff
//! ohne konkrete Implementierung.

use rgb::RGB8;

use crate::logic::color_hsv;

/// Fehler-Typ für LED-Operationen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LedError {
    WriteFailed,
}

/// Trait für SmartLED Hardware-Zugriff
///
/// Abstrahiert die Übertragung eines kompletten Frames auf den Strip
/// (WS2812/Neopixel).
///
/// # Implementierungen
/// - **Production:** RmtLedWriter (ESP32 RMT Peripheral)
/// - **Testing:** MockLedWriter (in-memory Mock)
pub trait SmartLedWriter: Send {
    /// Schreibt alle Pixel in Strip-Reihenfolge
    ///
    /// # Fehlerbehandlung
    /// Gibt `LedError::WriteFailed` zurück wenn Hardware-Zugriff fehlschlägt
    fn write<I>(&mut self, pixels: I) -> Result<(), LedError>
    where
        I: Iterator<Item = RGB8>;
}

/// Strip-Treiber mit Frame-Buffer
///
/// Die Animation Engine schreibt ausschließlich über dieses Interface.
/// Pixel-Schreibzugriffe landen im Buffer, erst `show()` überträgt.
pub trait StripDriver {
    /// Anzahl adressierbarer Pixel
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn set_pixel(&mut self, index: u16, color: RGB8);

    fn fill(&mut self, color: RGB8);

    /// Globale Helligkeit (0-255), wird beim Übertragen angewendet
    fn set_brightness(&mut self, brightness: u8);

    /// Überträgt den Frame-Buffer auf den Strip
    fn show(&mut self) -> Result<(), LedError>;

    /// 16-Bit Farbkreis (0-65535) nach RGB
    fn hsv_to_rgb(&self, hue: u16, sat: u8, val: u8) -> RGB8 {
        color_hsv(hue, sat, val)
    }
}

/// Serielle Eingabe (z.B. Bluetooth-UART)
///
/// Liefert `None` wenn gerade kein Byte verfügbar ist. Darf nie blockieren.
pub trait SerialSource {
    fn read_byte(&mut self) -> Option<u8>;
}

/// Jeder Byte-Iterator ist eine Quelle, z.B. ein gelesener UART-Chunk
impl<I> SerialSource for I
where
    I: Iterator<Item = u8>,
{
    fn read_byte(&mut self) -> Option<u8> {
        self.next()
    }
}

/// Zufallsquelle für `rdm_color` / `rdm_prog`
///
/// # Implementierungen
/// - **Production:** HardwareRng (ESP32 RNG Peripheral)
/// - **Testing:** deterministische Sequenz
pub trait RandomSource {
    fn next_u32(&mut self) -> u32;
}
