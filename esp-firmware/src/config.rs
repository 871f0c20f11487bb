// Projekt-Konfiguration: Konstanten und Hardware-Zuordnungen
#![allow(dead_code)]

use esp_core::{ControllerConfig, EngineConfig, Program};

// ============================================================================
// LED Strip Konfiguration
// ============================================================================

/// GPIO-Pin für die Datenleitung des Strips (WS2812/Neopixel)
pub const LED_GPIO_PIN: u8 = 8;

/// RMT Taktfrequenz in MHz
/// 80 MHz ist optimal für WS2812 LED-Timing
pub const RMT_CLOCK_MHZ: u32 = 80;

/// Topologie-JSON (Segmente → Pixel-Anzahl)
/// Auswahl zur Build-Zeit über STRIP_CONFIG (siehe build.rs), Default "desk"
pub const STRIP_CONFIG_JSON: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/config/",
    env!("STRIP_CONFIG"),
    ".json"
));

// ============================================================================
// Bluetooth UART Konfiguration (HC-05 / HC-06 Modul)
// ============================================================================

/// GPIO-Pin TX (ESP32 → Modul RXD)
pub const UART_TX_GPIO_PIN: u8 = 4;

/// GPIO-Pin RX (Modul TXD → ESP32)
pub const UART_RX_GPIO_PIN: u8 = 5;

/// Baudrate des Bluetooth-Moduls (Werkseinstellung)
pub const UART_BAUD: u32 = 9600;

/// Größe des UART Lese-Buffers in Bytes
pub const UART_READ_BUFFER_SIZE: usize = 32;

/// Kapazität des Command-Channels (UART Task → Strip Task)
pub const COMMAND_QUEUE_SIZE: usize = 4;

// ============================================================================
// Animations-Konfiguration
// ============================================================================

/// Frame-Takt in Millisekunden für Programme ohne eigenes Tempo (50 fps)
pub const TICK_PERIOD_MS: u32 = 20;

/// Start-Helligkeit (0-255)
pub const DEFAULT_BRIGHTNESS: u8 = 255;

/// Helligkeits-Schritt pro bright_up / bright_down
pub const BRIGHTNESS_INCREMENT: u8 = 25;

/// Start-Farbe (Name aus der Palette)
pub const DEFAULT_COLOR: &str = "royalblue";

/// Start-Programm
pub const DEFAULT_PROGRAM: Program = Program::Fade;

/// Anzahl gleichzeitig leuchtender Pixel bei Snake
pub const SNAKE_SIZE: usize = 20;

/// Snake rückwärts laufen lassen
pub const SNAKE_REVERSE: bool = false;

/// Controller-Konfiguration aus den Konstanten oben
pub fn controller_config() -> ControllerConfig {
    ControllerConfig {
        brightness: DEFAULT_BRIGHTNESS,
        brightness_step: BRIGHTNESS_INCREMENT,
        color: DEFAULT_COLOR,
        program: DEFAULT_PROGRAM,
        engine: EngineConfig {
            snake_size: SNAKE_SIZE,
            snake_reverse: SNAKE_REVERSE,
            ..EngineConfig::default()
        },
    }
}
