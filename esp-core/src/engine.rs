//! Animation Engine
//!
//! Hält den Render-Zustand des aktiven Programms und erzeugt pro Aufruf
//! genau einen Frame. Jedes Programm ist eine Zustandsmaschine, die bei
//! jedem `render()` einen Schritt weiterläuft.
//!
//! Nach einem Programmwechsel ist `init` gesetzt: der erste Frame baut den
//! Zustand aus der Topologie und den Programm-Defaults neu auf.

use heapless::{Deque, Vec};
use rgb::RGB8;

use crate::logic::advance_hue;
use crate::topology::{MAX_PIXELS, StripTopology};
use crate::traits::{LedError, StripDriver};
use crate::types::Program;

/// Faktor für `speed_up`
pub const SPEED_UP_FACTOR: f32 = 0.9;

/// Faktor für `speed_down`
pub const SPEED_DOWN_FACTOR: f32 = 1.1;

/// Grenzen für die Farbton-Schrittweite (Fade, RainbowFade)
pub const HUE_STEP_MIN: f32 = 1.0;
pub const HUE_STEP_MAX: f32 = 8192.0;

/// Grenzen für die Snake-Pause in Sekunden
pub const SNAKE_DELAY_MIN: f32 = 0.005;
pub const SNAKE_DELAY_MAX: f32 = 2.0;

const BLACK: RGB8 = RGB8 { r: 0, g: 0, b: 0 };

/// Programm-Defaults
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EngineConfig {
    /// Farbton-Versatz pro Pixel bei RainbowFade
    pub hue_offset: u32,
    pub fade_step: f32,
    pub rainbow_step: f32,
    /// Pause zwischen zwei Snake-Frames in Sekunden
    pub snake_delay: f32,
    /// Anzahl gleichzeitig leuchtender Snake-Pixel
    pub snake_size: usize,
    pub snake_reverse: bool,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            hue_offset: 4096,
            fade_step: 50.0,
            rainbow_step: 2000.0,
            snake_delay: 0.01,
            snake_size: 20,
            snake_reverse: false,
        }
    }
}

/// Farbton-Zustand für Fade und RainbowFade
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HueState {
    /// 0..=65535
    pub hue: u32,
    /// Schrittweite pro Frame
    pub speed: f32,
}

impl HueState {
    fn new(speed: f32) -> Self {
        Self { hue: 0, speed }
    }

    fn advance(&mut self) {
        self.hue = advance_hue(self.hue, self.speed);
    }
}

/// Zustand für Snake
#[derive(Debug, Clone)]
pub struct SnakeState {
    pixels: Vec<u16, MAX_PIXELS>,
    lit: Deque<u16, MAX_PIXELS>,
    position: usize,
    size: usize,
    /// Pause zwischen zwei Frames in Sekunden
    pub speed: f32,
}

impl SnakeState {
    fn new(topology: &StripTopology, config: &EngineConfig) -> Self {
        let mut pixels = Vec::new();
        // Topologie ist auf MAX_PIXELS begrenzt, passt immer
        let _ = pixels.extend_from_slice(topology.pixels());
        if config.snake_reverse {
            pixels.reverse();
        }

        Self {
            pixels,
            lit: Deque::new(),
            position: 0,
            size: config.snake_size.clamp(1, MAX_PIXELS),
            speed: config.snake_delay,
        }
    }

    /// Pixel-Folge in Lauf-Richtung
    pub fn pixels(&self) -> &[u16] {
        &self.pixels
    }

    /// Leuchtende Pixel, ältestes zuerst
    pub fn lit(&self) -> impl Iterator<Item = u16> + '_ {
        self.lit.iter().copied()
    }

    pub fn position(&self) -> usize {
        self.position
    }

    pub fn size(&self) -> usize {
        self.size
    }

    fn step<S: StripDriver>(&mut self, strip: &mut S, color: RGB8) {
        let Some(&pixel) = self.pixels.get(self.position) else {
            return;
        };

        if self.lit.len() >= self.size {
            if let Some(oldest) = self.lit.pop_front() {
                // Bei size > Strip-Länge steht derselbe Pixel mehrfach im Fenster
                if oldest != pixel && !self.lit.iter().any(|&lit| lit == oldest) {
                    strip.set_pixel(oldest, BLACK);
                }
            }
        }
        strip.set_pixel(pixel, color);
        let _ = self.lit.push_back(pixel);

        self.position = (self.position + 1) % self.pixels.len();
    }
}

/// Render-Zustand, ein Variant pro Programm
#[derive(Debug, Clone)]
pub enum RenderState {
    /// Noch kein Frame gerendert
    Idle,
    Fill,
    Fade(HueState),
    RainbowFade(HueState),
    Snake(SnakeState),
}

impl RenderState {
    fn build(program: Program, topology: &StripTopology, config: &EngineConfig) -> Self {
        match program {
            Program::Fill => RenderState::Fill,
            Program::Fade => RenderState::Fade(HueState::new(config.fade_step)),
            Program::RainbowFade => RenderState::RainbowFade(HueState::new(config.rainbow_step)),
            Program::Snake => RenderState::Snake(SnakeState::new(topology, config)),
        }
    }

    /// Programm-spezifische Geschwindigkeit (Schrittweite bzw. Pause)
    pub fn speed(&self) -> Option<f32> {
        match self {
            RenderState::Fade(hue) | RenderState::RainbowFade(hue) => Some(hue.speed),
            RenderState::Snake(snake) => Some(snake.speed),
            RenderState::Idle | RenderState::Fill => None,
        }
    }
}

pub struct Engine<'t> {
    topology: &'t StripTopology,
    config: EngineConfig,
    program: Program,
    state: RenderState,
    init: bool,
}

impl<'t> Engine<'t> {
    pub fn new(topology: &'t StripTopology, config: EngineConfig, program: Program) -> Self {
        Self {
            topology,
            config,
            program,
            state: RenderState::Idle,
            init: true,
        }
    }

    pub fn program(&self) -> Program {
        self.program
    }

    /// Aktiviert ein Programm, der nächste Frame baut den Zustand neu
    pub fn set_program(&mut self, program: Program) {
        self.program = program;
        self.init = true;
    }

    /// True bis der erste Frame des aktiven Programms gerendert wurde
    pub fn needs_init(&self) -> bool {
        self.init
    }

    pub fn state(&self) -> &RenderState {
        &self.state
    }

    pub fn topology(&self) -> &StripTopology {
        self.topology
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Multipliziert die Geschwindigkeit des aktiven Programms
    ///
    /// Gibt den neuen (begrenzten) Wert zurück. `None` wenn das Programm
    /// keine Geschwindigkeit hat oder sein Zustand noch nicht gebaut ist.
    pub fn adjust_speed(&mut self, factor: f32) -> Option<f32> {
        if self.init {
            return None;
        }
        match &mut self.state {
            RenderState::Fade(hue) | RenderState::RainbowFade(hue) => {
                hue.speed = (hue.speed * factor).clamp(HUE_STEP_MIN, HUE_STEP_MAX);
                Some(hue.speed)
            }
            RenderState::Snake(snake) => {
                snake.speed = (snake.speed * factor).clamp(SNAKE_DELAY_MIN, SNAKE_DELAY_MAX);
                Some(snake.speed)
            }
            RenderState::Idle | RenderState::Fill => None,
        }
    }

    /// Eigene Frame-Pause des Programms in Millisekunden
    ///
    /// Nur Snake gibt ein Tempo vor, alle anderen laufen im Scheduler-Takt.
    pub fn frame_delay_ms(&self) -> Option<u32> {
        match &self.state {
            RenderState::Snake(snake) if !self.init => Some((snake.speed * 1000.0 + 0.5) as u32),
            _ => None,
        }
    }

    /// Rendert genau einen Frame und überträgt ihn (`show()` einmal)
    pub fn render<S: StripDriver>(
        &mut self,
        strip: &mut S,
        brightness: u8,
        color: RGB8,
    ) -> Result<(), LedError> {
        if self.init {
            self.state = RenderState::build(self.program, self.topology, &self.config);
            if self.program == Program::Snake {
                strip.fill(BLACK);
            }
            self.init = false;
        }

        strip.set_brightness(brightness);

        match &mut self.state {
            RenderState::Idle => {}
            RenderState::Fill => strip.fill(color),
            RenderState::Fade(hue) => {
                let rgb = strip.hsv_to_rgb(hue.hue as u16, 255, 255);
                strip.fill(rgb);
                hue.advance();
            }
            RenderState::RainbowFade(hue) => {
                for (i, &pixel) in self.topology.pixels().iter().enumerate() {
                    let pixel_hue = hue
                        .hue
                        .wrapping_add((i as u32).wrapping_mul(self.config.hue_offset));
                    let rgb = strip.hsv_to_rgb(pixel_hue as u16, 255, 255);
                    strip.set_pixel(pixel, rgb);
                }
                hue.advance();
            }
            RenderState::Snake(snake) => snake.step(strip, color),
        }

        strip.show()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct NullStrip;

    impl StripDriver for NullStrip {
        fn len(&self) -> usize {
            0
        }
        fn set_pixel(&mut self, _index: u16, _color: RGB8) {}
        fn fill(&mut self, _color: RGB8) {}
        fn set_brightness(&mut self, _brightness: u8) {}
        fn show(&mut self) -> Result<(), LedError> {
            Ok(())
        }
    }

    const BLUE: RGB8 = RGB8 { r: 0, g: 0, b: 255 };

    #[test]
    fn test_state_built_on_first_frame() {
        let topology = StripTopology::linear(4).unwrap();
        let mut engine = Engine::new(&topology, EngineConfig::default(), Program::Fade);
        assert!(engine.needs_init());
        assert!(matches!(engine.state(), RenderState::Idle));

        engine.render(&mut NullStrip, 255, BLUE).unwrap();

        assert!(!engine.needs_init());
        match engine.state() {
            RenderState::Fade(hue) => assert_eq!(hue.hue, 50),
            other => panic!("unexpected state {:?}", other),
        }
    }

    #[test]
    fn test_speed_ignored_before_init() {
        let topology = StripTopology::linear(4).unwrap();
        let mut engine = Engine::new(&topology, EngineConfig::default(), Program::Fade);
        assert_eq!(engine.adjust_speed(SPEED_UP_FACTOR), None);
    }

    #[test]
    fn test_hue_speed_is_clamped() {
        let topology = StripTopology::linear(4).unwrap();
        let mut engine = Engine::new(&topology, EngineConfig::default(), Program::RainbowFade);
        engine.render(&mut NullStrip, 255, BLUE).unwrap();

        for _ in 0..200 {
            engine.adjust_speed(SPEED_UP_FACTOR);
        }
        assert_eq!(engine.state().speed(), Some(HUE_STEP_MIN));

        for _ in 0..200 {
            engine.adjust_speed(SPEED_DOWN_FACTOR);
        }
        assert_eq!(engine.state().speed(), Some(HUE_STEP_MAX));
    }

    #[test]
    fn test_snake_frame_delay() {
        let topology = StripTopology::linear(4).unwrap();
        let mut engine = Engine::new(&topology, EngineConfig::default(), Program::Snake);
        assert_eq!(engine.frame_delay_ms(), None);
        engine.render(&mut NullStrip, 255, BLUE).unwrap();
        assert_eq!(engine.frame_delay_ms(), Some(10));
    }

    #[test]
    fn test_rainbow_large_offset_wraps() {
        let topology = StripTopology::linear(8).unwrap();
        let config = EngineConfig {
            hue_offset: u32::MAX,
            ..EngineConfig::default()
        };
        let mut engine = Engine::new(&topology, config, Program::RainbowFade);
        engine.render(&mut NullStrip, 255, BLUE).unwrap();
        engine.render(&mut NullStrip, 255, BLUE).unwrap();

        match engine.state() {
            RenderState::RainbowFade(hue) => assert_eq!(hue.hue, 4000),
            other => panic!("unexpected state {:?}", other),
        }
    }

    #[test]
    fn test_snake_reverse_sequence() {
        let topology = StripTopology::linear(4).unwrap();
        let config = EngineConfig {
            snake_reverse: true,
            ..EngineConfig::default()
        };
        let mut engine = Engine::new(&topology, config, Program::Snake);
        engine.render(&mut NullStrip, 255, BLUE).unwrap();

        let RenderState::Snake(snake) = engine.state() else {
            panic!("expected snake state");
        };
        assert_eq!(snake.pixels(), &[3, 2, 1, 0]);
        assert_eq!(snake.lit().count(), 1);
        assert_eq!(snake.lit().next(), Some(3));
    }
}
