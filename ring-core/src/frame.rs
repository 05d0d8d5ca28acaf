//! Frame-Driver: ein Regenbogen-Frame pro Aufruf
//!
//! Enthält keine Wartezeit. Die Firmware ruft `render_frame()` in einer
//! Endlosschleife auf und wartet dazwischen mit einem Embassy Timer.

use crate::buffer::PixelBuffer;
use crate::logic::{fill_rainbow, hue_step};
use crate::traits::{LedError, LedSink};
use crate::types::{AnimationState, ColorOrder, HUE_RED, StripConfig};

/// Einstellungen für den Frame-Driver
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct RingConfig {
    pub channel: u8,
    pub color_order: ColorOrder,
    pub brightness: u8,
    pub initial_hue: u8,
}

impl Default for RingConfig {
    fn default() -> Self {
        Self {
            channel: 0,
            color_order: ColorOrder::default(),
            brightness: 255,
            initial_hue: HUE_RED,
        }
    }
}

/// Besitzt Pixel-Buffer, Animations-Zustand und LED-Sink
///
/// Der generische Parameter `S: LedSink` ermöglicht:
/// - Real Hardware (RmtLedSink) im Production-Code
/// - Mock Implementation (MockLedSink) in Tests
pub struct FrameDriver<S: LedSink, const N: usize> {
    sink: S,
    pixels: PixelBuffer<N>,
    state: AnimationState,
    hue_step: u8,
    frames: u32,
}

impl<S: LedSink, const N: usize> FrameDriver<S, N> {
    /// Registriert den Strip beim Sink und setzt die Helligkeit
    pub fn new(mut sink: S, config: RingConfig) -> Result<Self, LedError> {
        sink.configure(StripConfig {
            channel: config.channel,
            pixel_count: N,
            color_order: config.color_order,
        })?;
        sink.set_brightness(config.brightness);

        Ok(Self {
            sink,
            pixels: PixelBuffer::new(),
            state: AnimationState::new(config.initial_hue),
            hue_step: hue_step(N),
            frames: 0,
        })
    }

    /// Berechnet den nächsten Frame und sendet ihn an den Sink
    ///
    /// Gibt den Hue von Pixel 0 in diesem Frame zurück. Der Zustand rückt
    /// auch dann weiter, wenn das Senden fehlschlägt.
    pub fn render_frame(&mut self) -> Result<u8, LedError> {
        let hue = self.state.advance();
        fill_rainbow(self.pixels.as_mut_slice(), hue, self.hue_step);
        self.frames = self.frames.wrapping_add(1);

        self.sink.transmit(self.pixels.as_slice())?;
        Ok(hue)
    }

    pub fn pixels(&self) -> &PixelBuffer<N> {
        &self.pixels
    }

    pub fn state(&self) -> AnimationState {
        self.state
    }

    pub fn hue_step(&self) -> u8 {
        self.hue_step
    }

    /// Anzahl gerenderter Frames (wrapping)
    pub fn frames(&self) -> u32 {
        self.frames
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }
}
