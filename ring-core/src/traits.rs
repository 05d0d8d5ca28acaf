//! Hardware Abstraction Traits
//!
//! Diese Traits definieren Schnittstellen für Hardware-Zugriff
//! ohne konkrete Implementierung.

use rgb::RGB8;

use crate::types::{DisplayLine, StripConfig};

/// Fehler-Typ für LED-Operationen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LedError {
    ConfigFailed,
    WriteFailed,
}

/// Fehler-Typ für Display-Operationen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DisplayError {
    InitFailed,
    DrawFailed,
    FlushFailed,
}

/// Trait für den LED-Strip (WS2812/Neopixel)
///
/// # Implementierungen
/// - **Production:** RmtLedSink (ESP32 RMT Peripheral)
/// - **Testing:** MockLedSink (in-memory Mock)
pub trait LedSink {
    /// Einmalige Registrierung: Kanal, Anzahl LEDs, Farb-Reihenfolge
    fn configure(&mut self, config: StripConfig) -> Result<(), LedError>;

    /// Globale Helligkeit (0-255), wird beim Senden angewendet
    fn set_brightness(&mut self, brightness: u8);

    /// Sendet den kompletten Buffer an den Strip
    ///
    /// # Fehlerbehandlung
    /// Gibt `LedError::WriteFailed` zurück wenn Hardware-Zugriff fehlschlägt
    fn transmit(&mut self, pixels: &[RGB8]) -> Result<(), LedError>;
}

/// Trait für ein Text-Display, das nur beim Start beschrieben wird
///
/// Gezeichnet wird in einen Buffer, sichtbar erst nach `commit()`.
pub trait RenderableDisplay {
    fn init(&mut self) -> Result<(), DisplayError>;

    fn clear(&mut self) -> Result<(), DisplayError>;

    fn draw_lines(&mut self, lines: &[DisplayLine]) -> Result<(), DisplayError>;

    /// Überträgt den Buffer auf den Bildschirm
    fn commit(&mut self) -> Result<(), DisplayError>;
}
