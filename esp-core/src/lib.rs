//! ESP Core - Platform-agnostic Logic and Traits
//!
//! Diese Crate enthält KEINE Hardware-Dependencies.
//! Sie enthält den Command Decoder, die Animation Engine und den
//! Control Dispatcher, dazu die Traits für Strip, UART und Zufall.

#![no_std]

pub mod controller;
pub mod decoder;
pub mod engine;
pub mod logic;
pub mod palette;
pub mod strip;
pub mod topology;
pub mod traits;
pub mod types;

// Re-exports für einfachen Zugriff
pub use controller::{BRIGHTNESS_STEP, Change, Controller, ControllerConfig};
pub use decoder::{CommandDecoder, DecoderStats, FRAME_START, FRAME_STOP};
pub use engine::{Engine, EngineConfig, HueState, RenderState, SnakeState};
pub use logic::{Selection, advance_hue, color_hsv, scale_brightness};
pub use palette::{NAMED_COLORS, Palette};
pub use strip::PixelStrip;
pub use topology::{MAX_PIXELS, Segment, StripTopology, TopologyError};
pub use traits::{LedError, RandomSource, SerialSource, SmartLedWriter, StripDriver};
pub use types::{Command, Program};
