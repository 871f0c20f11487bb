// Task-Modul: Enthält alle Embassy Tasks
//
// Beide Tasks laufen auf demselben Executor und kommunizieren
// über den Command-Channel (UART → Strip).

pub mod serial;
pub mod strip;

// Re-export Tasks für einfachen Import
pub use serial::serial_task;
pub use strip::strip_task;
