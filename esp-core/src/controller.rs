//! Control Dispatcher
//!
//! Übersetzt Kommandos in Zustandsänderungen (Helligkeit, Farbe, Programm,
//! Geschwindigkeit) und rendert danach in jedem Tick genau einen Frame.

use rgb::RGB8;

use crate::decoder::CommandDecoder;
use crate::engine::{Engine, EngineConfig, SPEED_DOWN_FACTOR, SPEED_UP_FACTOR};
use crate::logic::Selection;
use crate::palette::Palette;
use crate::topology::StripTopology;
use crate::traits::{LedError, RandomSource, SerialSource, StripDriver};
use crate::types::{Command, Program};

/// Helligkeits-Schritt pro `bright_up` / `bright_down`
pub const BRIGHTNESS_STEP: u8 = 25;

/// Startwerte des Controllers
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ControllerConfig {
    pub brightness: u8,
    pub brightness_step: u8,
    /// Name in der Palette, unbekannte Namen starten bei Index 0
    pub color: &'static str,
    pub program: Program,
    pub engine: EngineConfig,
}

impl Default for ControllerConfig {
    fn default() -> Self {
        Self {
            brightness: u8::MAX,
            brightness_step: BRIGHTNESS_STEP,
            color: "royalblue",
            program: Program::Fade,
            engine: EngineConfig::default(),
        }
    }
}

/// Ergebnis eines Dispatch-Schritts (für Logging)
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Change {
    None,
    Brightness(u8),
    Color(usize),
    Program(Program),
    Speed(f32),
}

pub struct Controller<'t, S: StripDriver, R: RandomSource> {
    engine: Engine<'t>,
    strip: S,
    rng: R,
    palette: Palette,
    brightness: u8,
    brightness_step: u8,
    color: Selection,
    program: Selection,
}

impl<'t, S: StripDriver, R: RandomSource> Controller<'t, S, R> {
    pub fn new(
        strip: S,
        rng: R,
        topology: &'t StripTopology,
        palette: Palette,
        config: ControllerConfig,
    ) -> Self {
        let color_index = palette.position(config.color).unwrap_or(0);
        Self {
            engine: Engine::new(topology, config.engine, config.program),
            strip,
            rng,
            palette,
            brightness: config.brightness,
            brightness_step: config.brightness_step,
            color: Selection::new(color_index, palette.len()),
            program: Selection::new(config.program.index(), Program::ALL.len()),
        }
    }

    /// Wendet höchstens eine Änderung an, rendert nicht
    pub fn dispatch(&mut self, command: Command) -> Change {
        match command {
            Command::BrightUp => {
                self.brightness = self.brightness.saturating_add(self.brightness_step);
                Change::Brightness(self.brightness)
            }
            Command::BrightDown => {
                self.brightness = self.brightness.saturating_sub(self.brightness_step);
                Change::Brightness(self.brightness)
            }
            Command::ProgLeft => {
                self.program.left();
                self.activate_program()
            }
            Command::ProgRight => {
                self.program.right();
                self.activate_program()
            }
            Command::ProgRandom => {
                self.program.random(&mut self.rng);
                self.activate_program()
            }
            Command::SpeedUp => self.adjust_speed(SPEED_UP_FACTOR),
            Command::SpeedDown => self.adjust_speed(SPEED_DOWN_FACTOR),
            Command::ColorLeft => Change::Color(self.color.left()),
            Command::ColorRight => Change::Color(self.color.right()),
            Command::ColorRandom => Change::Color(self.color.random(&mut self.rng)),
            Command::None => Change::None,
        }
    }

    /// Rendert einen Frame mit aktueller Helligkeit und Farbe
    pub fn render(&mut self) -> Result<(), LedError> {
        let color = self.color();
        self.engine.render(&mut self.strip, self.brightness, color)
    }

    /// Ein Tick: Dispatch, danach immer Render
    pub fn tick(&mut self, command: Command) -> Result<Change, LedError> {
        let change = self.dispatch(command);
        self.render()?;
        Ok(change)
    }

    /// Ein Tick mit Kommando direkt aus der seriellen Quelle
    pub fn step<Src: SerialSource>(
        &mut self,
        decoder: &mut CommandDecoder,
        source: &mut Src,
    ) -> Result<Change, LedError> {
        let command = decoder.read(source);
        self.tick(command)
    }

    fn activate_program(&mut self) -> Change {
        let program = Program::from_index(self.program.index()).unwrap_or(self.engine.program());
        self.engine.set_program(program);
        Change::Program(program)
    }

    fn adjust_speed(&mut self, factor: f32) -> Change {
        self.engine
            .adjust_speed(factor)
            .map_or(Change::None, Change::Speed)
    }

    pub fn brightness(&self) -> u8 {
        self.brightness
    }

    pub fn color_index(&self) -> usize {
        self.color.index()
    }

    pub fn color(&self) -> RGB8 {
        self.palette.color(self.color.index()).unwrap_or_default()
    }

    pub fn color_name(&self) -> &'static str {
        self.palette.name(self.color.index()).unwrap_or("")
    }

    pub fn program(&self) -> Program {
        self.engine.program()
    }

    pub fn engine(&self) -> &Engine<'t> {
        &self.engine
    }

    /// Frame-Pause des aktiven Programms, falls es eine vorgibt
    pub fn frame_delay_ms(&self) -> Option<u32> {
        self.engine.frame_delay_ms()
    }

    /// Wartezeit bis zum nächsten Frame
    ///
    /// Eigenes Tempo des Programms (Snake), sonst `tick_period_ms`.
    pub fn frame_period_ms(&self, tick_period_ms: u32) -> u32 {
        self.frame_delay_ms().unwrap_or(tick_period_ms)
    }

    pub fn strip(&self) -> &S {
        &self.strip
    }

    pub fn strip_mut(&mut self) -> &mut S {
        &mut self.strip
    }
}
