// Keine Standard-Bibliothek verwenden (Embedded System)
#![no_std]
// Kein normaler main() Einstiegspunkt (wird von esp_rtos bereitgestellt)
#![no_main]
// Verbiete mem::forget - gefährlich bei ESP HAL Types mit DMA-Buffern
#![deny(
    clippy::mem_forget,
    reason = "mem::forget is generally not safe to do with esp_hal types, especially those \
    holding buffers for the duration of a data transfer."
)]
// Verbiete große Stack-Frames (Stack ist auf Embedded Systemen begrenzt)
#![deny(clippy::large_stack_frames)]

// Embassy Async Runtime
use defmt::info;
use embassy_executor::Spawner;
use embassy_time::{Duration, Timer};

// ESP32-C6 HAL
use esp_hal::clock::CpuClock;
use esp_hal::rng::Rng;
use esp_hal::timer::timg::TimerGroup;
use esp_hal::uart::{Config as UartConfig, Uart};

// Backtrace bei Panic und println!() Support
use {esp_backtrace as _, esp_println as _};

// Projekt-Module und Konfiguration
use esp_bt_strip::config::{STRIP_CONFIG_JSON, UART_BAUD};
use esp_bt_strip::hal::HardwareRng;
use esp_bt_strip::tasks::{serial_task, strip_task};
use esp_bt_strip::{CommandChannel, StripTopology};

// ESP-IDF App Descriptor - erforderlich für den Bootloader!
// Ohne diesen schlägt das Flashen mit "ESP-IDF App Descriptor missing" fehl
esp_bootloader_esp_idf::esp_app_desc!();

/// Main Entry Point
///
/// Initialisiert Hardware, lädt die Strip-Topologie, startet Embassy Runtime
/// und spawnt Tasks. Danach schläft main() - alle Arbeit läuft in Tasks.
#[esp_rtos::main]
async fn main(spawner: Spawner) -> ! {
    // ESP32-C6 Konfiguration: CPU auf maximale Taktfrequenz (160 MHz)
    let config = esp_hal::Config::default().with_cpu_clock(CpuClock::max());
    let peripherals = esp_hal::init(config);

    // Embassy Runtime initialisieren (Timer + Software Interrupt)
    let timg0 = TimerGroup::new(peripherals.TIMG0);
    let sw_interrupt =
        esp_hal::interrupt::software::SoftwareInterruptControl::new(peripherals.SW_INTERRUPT);
    esp_rtos::start(timg0.timer0, sw_interrupt.software_interrupt0);

    // Strip-Topologie aus der eingebackenen JSON-Konfiguration
    // Muss 'static sein, weil der Controller im Strip Task sie referenziert
    static TOPOLOGY: static_cell::StaticCell<StripTopology> = static_cell::StaticCell::new();
    let topology = &*TOPOLOGY
        .init(StripTopology::from_json(STRIP_CONFIG_JSON).expect("Invalid strip configuration"));
    info!(
        "Topology: {} pixels, {} segments",
        topology.len(),
        topology.segments().len()
    );

    // Bluetooth-Modul an UART1 (HC-05 / HC-06)
    // GPIO4 = TX, GPIO5 = RX (siehe config.rs)
    let uart = Uart::new(
        peripherals.UART1,
        UartConfig::default().with_baudrate(UART_BAUD),
    )
    .expect("Failed to initialize UART1")
    .with_tx(peripherals.GPIO4)
    .with_rx(peripherals.GPIO5)
    .into_async();
    let (uart_rx, _uart_tx) = uart.split();

    // Command-Channel erstellen (UART Task → Strip Task)
    static COMMAND_CHANNEL: static_cell::StaticCell<CommandChannel> =
        static_cell::StaticCell::new();
    let command_channel = COMMAND_CHANNEL.init(CommandChannel::new());
    let command_sender = command_channel.sender();
    let command_receiver = command_channel.receiver();

    // Spawn Strip Task (Rendern + Kommandos anwenden)
    spawner
        .spawn(strip_task(
            peripherals.GPIO8,
            peripherals.RMT,
            HardwareRng::new(Rng::new()),
            topology,
            command_receiver,
        ))
        .unwrap();

    // Spawn Serial Task (UART → Decoder → Channel)
    spawner
        .spawn(serial_task(uart_rx, command_sender))
        .unwrap();

    // Main-Loop: schläft (alle Arbeit läuft in Tasks)
    loop {
        Timer::after(Duration::from_secs(3600)).await;
    }
}
