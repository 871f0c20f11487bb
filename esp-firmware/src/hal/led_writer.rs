// RMT-basierter SmartLED Writer für den ganzen Strip
//
// Trait und Mock liegen in esp-core bzw. esp-tests.

use esp_core::{LedError, MAX_PIXELS, SmartLedWriter};
use esp_hal::Blocking;
use esp_hal::gpio::interconnect::PeripheralOutput;
use esp_hal::rmt::{PulseCode, Rmt};
use esp_hal::time::Rate;
use esp_hal_smartled::{SmartLedsAdapter, buffer_size};
use rgb::RGB8;
use smart_leds_trait::SmartLedsWrite;

/// Buffer-Größe für MAX_PIXELS LEDs (3 Farben * 8 Bits pro LED + 1 Reset)
pub const RMT_BUFFER_SIZE: usize = buffer_size(MAX_PIXELS);

/// Real Hardware LED Writer
///
/// Nutzt ESP32 RMT Peripheral um WS2812 LEDs anzusteuern.
///
/// Hinweis: Der Buffer muss 'static sein, daher wird er im Task erstellt
/// und als Parameter übergeben statt im Constructor allokiert.
pub struct RmtLedWriter<'a> {
    led: SmartLedsAdapter<'a, RMT_BUFFER_SIZE>,
}

impl<'a> RmtLedWriter<'a> {
    /// Erstellt einen neuen RmtLedWriter
    ///
    /// # Parameter
    /// - `pin`: GPIO für die Datenleitung
    /// - `rmt_peripheral`: RMT Peripheral
    /// - `rmt_clock_mhz`: RMT Clock Frequenz in MHz (z.B. 80)
    /// - `buffer`: Puls-Buffer für alle Pixel (erstellt mit smart_led_buffer!(MAX_PIXELS))
    ///
    /// # Fehler
    /// `LedError::WriteFailed` wenn sich das RMT nicht konfigurieren lässt
    pub fn new(
        pin: impl PeripheralOutput<'a>,
        rmt_peripheral: esp_hal::peripherals::RMT<'a>,
        rmt_clock_mhz: u32,
        buffer: &'a mut [PulseCode; RMT_BUFFER_SIZE],
    ) -> Result<Self, LedError> {
        let rmt: Rmt<'a, Blocking> = Rmt::new(rmt_peripheral, Rate::from_mhz(rmt_clock_mhz))
            .map_err(|_| LedError::WriteFailed)?;

        let led = SmartLedsAdapter::new(rmt.channel0, pin, buffer);

        Ok(Self { led })
    }
}

impl<'a> SmartLedWriter for RmtLedWriter<'a> {
    fn write<I>(&mut self, pixels: I) -> Result<(), LedError>
    where
        I: Iterator<Item = RGB8>,
    {
        self.led.write(pixels).map_err(|_| LedError::WriteFailed)
    }
}
