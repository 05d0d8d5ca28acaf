//! Core Types für den Regenbogen-Ring
//!
//! Datenstrukturen ohne Hardware-Dependencies

use rgb::RGB8;

// Benannte Hues auf dem 0-255 Farbkreis
pub const HUE_RED: u8 = 0;
pub const HUE_ORANGE: u8 = 32;
pub const HUE_YELLOW: u8 = 64;
pub const HUE_GREEN: u8 = 96;
pub const HUE_AQUA: u8 = 128;
pub const HUE_BLUE: u8 = 160;
pub const HUE_PURPLE: u8 = 192;
pub const HUE_PINK: u8 = 224;

/// HSV-Farbe mit 8-Bit Kanälen
///
/// `hue` ist zyklisch (255 + 1 = 0).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Hsv {
    pub hue: u8,
    pub sat: u8,
    pub val: u8,
}

impl Hsv {
    /// Volle Sättigung und Helligkeit, nur der Hue variiert
    pub const fn rainbow(hue: u8) -> Self {
        Self {
            hue,
            sat: 255,
            val: 255,
        }
    }
}

/// Animations-Zustand: der einzige Wert, der einen Frame überlebt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct AnimationState {
    start_hue: u8,
}

impl AnimationState {
    pub const fn new(start_hue: u8) -> Self {
        Self { start_hue }
    }

    /// Hue von Pixel 0 im nächsten Frame
    pub const fn start_hue(&self) -> u8 {
        self.start_hue
    }

    /// Liefert den Start-Hue für den aktuellen Frame und rückt um 1 weiter
    pub fn advance(&mut self) -> u8 {
        let hue = self.start_hue;
        self.start_hue = hue.wrapping_add(1);
        hue
    }
}

impl Default for AnimationState {
    fn default() -> Self {
        Self::new(HUE_RED)
    }
}

/// Byte-Reihenfolge auf der Datenleitung des Strips
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ColorOrder {
    /// Rot, Grün, Blau
    Rgb,
    /// Grün, Rot, Blau (WS2812 Standard)
    #[default]
    Grb,
}

impl ColorOrder {
    /// Ordnet die Kanäle so um, dass ein GRB-Treiber diese Reihenfolge sendet
    ///
    /// WS2812-Treiber (z.B. RMT Adapter) senden immer G, R, B. Für einen
    /// RGB-verdrahteten Strip werden Rot und Grün vorher getauscht.
    ///
    /// ```
    /// # use rgb::RGB8;
    /// # use ring_core::ColorOrder;
    /// let red = RGB8::new(255, 0, 0);
    /// assert_eq!(ColorOrder::Grb.arrange_for_grb_driver(red), red);
    /// assert_eq!(ColorOrder::Rgb.arrange_for_grb_driver(red), RGB8::new(0, 255, 0));
    /// ```
    pub const fn arrange_for_grb_driver(self, color: RGB8) -> RGB8 {
        match self {
            ColorOrder::Grb => color,
            ColorOrder::Rgb => RGB8 {
                r: color.g,
                g: color.r,
                b: color.b,
            },
        }
    }
}

/// Einmalige Registrierung eines LED-Strips
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct StripConfig {
    /// Ausgabe-Kanal (z.B. RMT Channel)
    pub channel: u8,
    pub pixel_count: usize,
    pub color_order: ColorOrder,
}

/// Textzeile auf dem Display
///
/// Position im 8x8 Zeichenraster (128x64 Display = 16 Spalten x 8 Zeilen).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DisplayLine {
    pub column: u8,
    pub row: u8,
    pub text: &'static str,
}

impl DisplayLine {
    pub const fn new(column: u8, row: u8, text: &'static str) -> Self {
        Self { column, row, text }
    }
}
