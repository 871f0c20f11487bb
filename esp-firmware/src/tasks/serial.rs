// Serial Task - Liest Bytes vom Bluetooth-Modul und dekodiert Kommandos
use defmt::{info, warn};
use esp_hal::Async;
use esp_hal::uart::UartRx;

use esp_core::{Command, CommandDecoder, DecoderStats};

use crate::CommandSender;
use crate::config::UART_READ_BUFFER_SIZE;

/// Serial Task - Embassy Task für den UART-Empfang
///
/// Liest verfügbare Bytes in Chunks und füttert sie Byte für Byte in den
/// Decoder. Ein angefangener Frame bleibt über Chunks hinweg erhalten.
/// Fertige Kommandos gehen über den Channel an den Strip Task.
///
/// # Parameter
/// - `rx`: UART Empfangs-Hälfte (async)
/// - `sender`: Channel Sender für dekodierte Kommandos
#[embassy_executor::task]
pub async fn serial_task(mut rx: UartRx<'static, Async>, sender: CommandSender) {
    let mut decoder = CommandDecoder::new();
    let mut buffer = [0u8; UART_READ_BUFFER_SIZE];
    let mut reported = DecoderStats::default();

    info!("Serial task started");

    loop {
        let count = match rx.read_async(&mut buffer).await {
            Ok(count) => count,
            Err(e) => {
                // Bei Übertragungsfehlern ist der offene Frame unbrauchbar
                warn!("UART read error: {:?}", e);
                decoder.reset();
                continue;
            }
        };

        for &byte in &buffer[..count] {
            match decoder.push(byte) {
                Some(Command::None) | None => {}
                Some(command) => {
                    info!("Command received: {}", command);
                    // Wartet falls der Strip Task hinterherhängt
                    sender.send(command).await;
                }
            }
        }

        let stats = decoder.stats();
        if stats != reported {
            warn!("Decoder: {}", stats);
            reported = stats;
        }
    }
}
