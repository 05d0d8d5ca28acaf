//! Ring Core - Platform-agnostic Logic and Traits
//!
//! Diese Crate enthält KEINE Hardware-Dependencies.
//! Sie definiert Traits, die Regenbogen-Berechnung und den Frame-Driver.

#![no_std]

pub mod buffer;
pub mod display;
pub mod frame;
pub mod logic;
pub mod math8;
pub mod traits;
pub mod types;

// Re-exports für einfachen Zugriff
pub use buffer::{BufferError, PixelBuffer};
pub use display::show_identification;
pub use frame::{FrameDriver, RingConfig};
pub use logic::{fill_rainbow, hsv_to_rgb_rainbow, hue_step, rainbow_hue};
pub use math8::scale_color;
pub use traits::{DisplayError, LedError, LedSink, RenderableDisplay};
pub use types::{
    AnimationState, ColorOrder, DisplayLine, HUE_AQUA, HUE_BLUE, HUE_GREEN, HUE_ORANGE, HUE_PINK,
    HUE_PURPLE, HUE_RED, HUE_YELLOW, Hsv, StripConfig,
};
