// Library-Root: Wiederverwendbare Logik und Module
// Keine Standard-Bibliothek (Embedded System)
#![no_std]

// Module
pub mod config;
pub mod hal;
pub mod tasks;

// Re-exports von ring-core
pub use ring_core::{
    DisplayError, DisplayLine, FrameDriver, LedError, LedSink, RenderableDisplay, RingConfig,
    show_identification,
};
