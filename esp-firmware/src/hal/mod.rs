// Hardware Abstraction Layer (HAL) Module
//
// Konkrete ESP32-Implementierungen der Traits aus esp-core.
// Die Logik selbst wird in esp-tests gegen Mocks getestet.

pub mod led_writer;
pub mod random;

pub use led_writer::{RMT_BUFFER_SIZE, RmtLedWriter};
pub use random::HardwareRng;
