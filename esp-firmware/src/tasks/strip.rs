// Strip Task - Rendert Animationen und wendet Kommandos an
use defmt::{error, info};
use embassy_futures::select::{Either, select};
use embassy_time::{Duration, Instant, Timer};
use esp_hal_smartled::smart_led_buffer;

use esp_core::{
    Change, Command, Controller, MAX_PIXELS, Palette, PixelStrip, RandomSource, SmartLedWriter,
    StripTopology,
};

use crate::CommandReceiver;
use crate::config::{RMT_CLOCK_MHZ, TICK_PERIOD_MS, controller_config};
use crate::hal::{HardwareRng, RmtLedWriter};

/// Strip Control Logic - Testbare Business Logic ohne Hardware-Abhängigkeit
///
/// Pro Durchlauf genau ein Tick:
/// - höchstens ein Kommando anwenden (vom Channel oder aus dem Warten)
/// - immer einen Frame rendern
/// - bis zum nächsten Frame warten, ein neues Kommando bricht das Warten ab
///
/// Die Frame-Pause kommt vom aktiven Programm (Snake), sonst gilt
/// TICK_PERIOD_MS.
///
/// # Parameter
/// - `writer`: LED Writer (Hardware oder Mock)
/// - `rng`: Zufallsquelle für rdm_color / rdm_prog
/// - `topology`: Segmente des Strips
/// - `receiver`: Channel Receiver für dekodierte Kommandos
pub async fn strip_control_logic<W: SmartLedWriter, R: RandomSource>(
    writer: W,
    rng: R,
    topology: &StripTopology,
    receiver: CommandReceiver,
) -> ! {
    let config = controller_config();
    let mut controller = Controller::new(
        PixelStrip::new(writer, topology.len()),
        rng,
        topology,
        Palette::default(),
        config,
    );

    info!(
        "Strip ready: {} pixels in {} segments, program {}, color {}",
        topology.len(),
        topology.segments().len(),
        controller.program(),
        controller.color_name()
    );

    let mut pending: Option<Command> = None;

    loop {
        let frame_start = Instant::now();

        let command = pending
            .take()
            .or_else(|| receiver.try_receive().ok())
            .unwrap_or(Command::None);

        match controller.tick(command) {
            Ok(Change::None) => {}
            Ok(Change::Color(_)) => info!("{} -> color {}", command, controller.color_name()),
            Ok(change) => info!("{} -> {}", command, change),
            Err(_) => error!("Failed to write to strip"),
        }

        let period = controller.frame_period_ms(TICK_PERIOD_MS);
        let deadline = frame_start + Duration::from_millis(u64::from(period));

        // Async Delay: gibt CPU an den Serial Task zurück
        if let Either::First(command) = select(receiver.receive(), Timer::at(deadline)).await {
            pending = Some(command);
        }
    }
}

/// Strip Task - Embassy Task für parallele Ausführung
///
/// Dieser Task übernimmt die Hardware-Initialisierung und ruft dann
/// die testbare `strip_control_logic()` Funktion auf.
///
/// # Parameter
/// - `gpio8`: GPIO8 Peripheral für die Datenleitung
/// - `rmt_peripheral`: RMT Peripheral für präzises Timing
/// - `rng`: Hardware RNG
/// - `topology`: Segmente des Strips (aus config/<STRIP_CONFIG>.json)
/// - `receiver`: Channel Receiver für dekodierte Kommandos
#[embassy_executor::task]
pub async fn strip_task(
    gpio8: esp_hal::peripherals::GPIO8<'static>,
    rmt_peripheral: esp_hal::peripherals::RMT<'static>,
    rng: HardwareRng,
    topology: &'static StripTopology,
    receiver: CommandReceiver,
) {
    // Buffer für SmartLED Daten (MAX_PIXELS LEDs)
    // Liegt im Task-Future und damit im statischen Speicher
    let mut rmt_buffer = smart_led_buffer!(MAX_PIXELS);

    let writer = match RmtLedWriter::new(gpio8, rmt_peripheral, RMT_CLOCK_MHZ, &mut rmt_buffer) {
        Ok(writer) => writer,
        Err(_) => {
            error!("Failed to initialize RMT");
            return;
        }
    };

    strip_control_logic(writer, rng, topology, receiver).await
}
