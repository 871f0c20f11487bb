//! Integration Tests für die Animation Engine
//!
//! Frames werden in einen RecordingStrip geschrieben.

mod common;

use common::{ROYALBLUE, RecordingStrip};
use esp_core::engine::HUE_STEP_MAX;
use esp_core::{Engine, EngineConfig, Program, RenderState, StripTopology, color_hsv};
use rgb::RGB8;

const RED: RGB8 = RGB8 { r: 255, g: 0, b: 0 };

// ============================================================================
// Tests: Fill
// ============================================================================

#[test]
fn test_fill_writes_color_to_all_pixels_and_shows_once() {
    let topology = StripTopology::linear(10).unwrap();
    let mut engine = Engine::new(&topology, EngineConfig::default(), Program::Fill);
    let mut strip = RecordingStrip::new(10);

    engine.render(&mut strip, 180, ROYALBLUE).unwrap();

    assert!(strip.pixels.iter().all(|&c| c == ROYALBLUE));
    assert_eq!(strip.show_count, 1);
    assert_eq!(strip.shown_brightness, Some(180));
}

#[test]
fn test_fill_follows_color_every_frame() {
    let topology = StripTopology::linear(4).unwrap();
    let mut engine = Engine::new(&topology, EngineConfig::default(), Program::Fill);
    let mut strip = RecordingStrip::new(4);

    engine.render(&mut strip, 255, ROYALBLUE).unwrap();
    engine.render(&mut strip, 255, RED).unwrap();

    assert!(strip.pixels.iter().all(|&c| c == RED));
    assert_eq!(strip.show_count, 2);
}

// ============================================================================
// Tests: Fade / RainbowFade
// ============================================================================

#[test]
fn test_fade_renders_current_hue_then_advances() {
    let topology = StripTopology::linear(3).unwrap();
    let mut engine = Engine::new(&topology, EngineConfig::default(), Program::Fade);
    let mut strip = RecordingStrip::new(3);

    engine.render(&mut strip, 255, ROYALBLUE).unwrap();
    assert!(strip.pixels.iter().all(|&c| c == color_hsv(0, 255, 255)));

    engine.render(&mut strip, 255, ROYALBLUE).unwrap();
    assert!(strip.pixels.iter().all(|&c| c == color_hsv(50, 255, 255)));

    match engine.state() {
        RenderState::Fade(hue) => assert_eq!(hue.hue, 100),
        other => panic!("unexpected state {:?}", other),
    }
}

#[test]
fn test_fade_hue_wraps_into_step_range() {
    let topology = StripTopology::linear(3).unwrap();
    let mut engine = Engine::new(&topology, EngineConfig::default(), Program::Fade);
    let mut strip = RecordingStrip::new(3);

    // 65535 / 50 = 1310 Schritte bis zum Überlauf
    for _ in 0..1400 {
        engine.render(&mut strip, 255, ROYALBLUE).unwrap();
        let RenderState::Fade(hue) = engine.state() else {
            panic!("expected fade state");
        };
        assert!(hue.hue <= 65535);
    }

    let RenderState::Fade(hue) = engine.state() else {
        panic!("expected fade state");
    };
    // 1311 Frames bis zur 0, danach 89 weitere Schritte
    assert_eq!(hue.hue, 89 * 50);
}

#[test]
fn test_rainbow_hue_never_exceeds_wheel() {
    let topology = StripTopology::linear(8).unwrap();
    let config = EngineConfig {
        rainbow_step: HUE_STEP_MAX,
        ..EngineConfig::default()
    };
    let mut engine = Engine::new(&topology, config, Program::RainbowFade);
    let mut strip = RecordingStrip::new(8);

    let mut wrapped = false;
    for _ in 0..20 {
        engine.render(&mut strip, 255, ROYALBLUE).unwrap();
        let RenderState::RainbowFade(hue) = engine.state() else {
            panic!("expected rainbow state");
        };
        assert!(hue.hue <= 65535);
        wrapped |= hue.hue < HUE_STEP_MAX as u32;
    }
    assert!(wrapped);
}

#[test]
fn test_rainbow_offsets_hue_per_position() {
    let topology = StripTopology::from_segments([("a", 2), ("b", 2)]).unwrap();
    let mut engine = Engine::new(&topology, EngineConfig::default(), Program::RainbowFade);
    let mut strip = RecordingStrip::new(4);

    engine.render(&mut strip, 255, ROYALBLUE).unwrap();

    for (i, &color) in strip.pixels.iter().enumerate() {
        assert_eq!(color, color_hsv((i as u32 * 4096) as u16, 255, 255));
    }
    assert_eq!(strip.show_count, 1);
}

// ============================================================================
// Tests: Snake
// ============================================================================

fn snake_engine(topology: &StripTopology, size: usize) -> Engine<'_> {
    let config = EngineConfig {
        snake_size: size,
        ..EngineConfig::default()
    };
    Engine::new(topology, config, Program::Snake)
}

#[test]
fn test_snake_window_after_four_frames() {
    let topology = StripTopology::linear(5).unwrap();
    let mut engine = snake_engine(&topology, 3);
    let mut strip = RecordingStrip::new(5);

    for _ in 0..4 {
        engine.render(&mut strip, 255, ROYALBLUE).unwrap();
    }

    let RenderState::Snake(snake) = engine.state() else {
        panic!("expected snake state");
    };
    assert_eq!(snake.lit().collect::<Vec<_>>(), vec![1, 2, 3]);
    assert_eq!(snake.position(), 4);
    assert_eq!(strip.lit(), vec![1, 2, 3]);
    assert_eq!(strip.show_count, 4);
}

#[test]
fn test_snake_wraps_around_sequence() {
    let topology = StripTopology::linear(5).unwrap();
    let mut engine = snake_engine(&topology, 3);
    let mut strip = RecordingStrip::new(5);

    for _ in 0..6 {
        engine.render(&mut strip, 255, ROYALBLUE).unwrap();
    }

    let RenderState::Snake(snake) = engine.state() else {
        panic!("expected snake state");
    };
    assert_eq!(snake.lit().collect::<Vec<_>>(), vec![3, 4, 0]);
    assert_eq!(snake.position(), 1);
    assert_eq!(strip.lit(), vec![0, 3, 4]);
}

#[test]
fn test_snake_larger_than_strip_keeps_all_lit() {
    let topology = StripTopology::linear(3).unwrap();
    let mut engine = snake_engine(&topology, 5);
    let mut strip = RecordingStrip::new(3);

    for _ in 0..7 {
        engine.render(&mut strip, 255, ROYALBLUE).unwrap();
    }

    let RenderState::Snake(snake) = engine.state() else {
        panic!("expected snake state");
    };
    let mut window: Vec<usize> = snake.lit().map(usize::from).collect();
    assert_eq!(window.len(), 5);
    window.sort_unstable();
    window.dedup();
    assert_eq!(strip.lit(), window);
    assert_eq!(strip.lit(), vec![0, 1, 2]);
}

#[test]
fn test_snake_start_clears_previous_program() {
    let topology = StripTopology::linear(4).unwrap();
    let mut engine = Engine::new(&topology, EngineConfig::default(), Program::Fill);
    let mut strip = RecordingStrip::new(4);

    engine.render(&mut strip, 255, ROYALBLUE).unwrap();
    engine.set_program(Program::Snake);
    engine.render(&mut strip, 255, RED).unwrap();

    assert_eq!(strip.lit(), vec![0]);
    assert_eq!(strip.pixels[0], RED);
}

// ============================================================================
// Tests: Programmwechsel
// ============================================================================

#[test]
fn test_program_switch_rebuilds_state_on_next_frame() {
    let topology = StripTopology::linear(6).unwrap();
    let mut engine = Engine::new(&topology, EngineConfig::default(), Program::Snake);
    let mut strip = RecordingStrip::new(6);

    for _ in 0..3 {
        engine.render(&mut strip, 255, ROYALBLUE).unwrap();
    }

    engine.set_program(Program::Snake);
    assert!(engine.needs_init());

    engine.render(&mut strip, 255, ROYALBLUE).unwrap();
    let RenderState::Snake(snake) = engine.state() else {
        panic!("expected snake state");
    };
    assert_eq!(snake.pixels(), topology.pixels());
    assert_eq!(snake.position(), 1);
    assert_eq!(snake.lit().collect::<Vec<_>>(), vec![0]);
    assert!(!engine.needs_init());
}

#[test]
fn test_every_program_shows_exactly_once_per_frame() {
    let topology = StripTopology::linear(5).unwrap();
    for program in Program::ALL {
        let mut engine = Engine::new(&topology, EngineConfig::default(), program);
        let mut strip = RecordingStrip::new(5);
        for frame in 1..=3 {
            engine.render(&mut strip, 100, ROYALBLUE).unwrap();
            assert_eq!(strip.show_count, frame);
        }
    }
}
