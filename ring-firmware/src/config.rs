// Projekt-Konfiguration: Konstanten und Hardware-Zuordnungen
#![allow(dead_code)]

use ring_core::{ColorOrder, DisplayLine, HUE_RED, RingConfig, hue_step};

// ============================================================================
// LED-Ring Konfiguration
// ============================================================================

/// GPIO-Pin für die Datenleitung des LED-Rings (WS2812B)
pub const LED_GPIO_PIN: u8 = 5;

/// Anzahl der LEDs auf dem Ring
pub const LED_COUNT: usize = 32;

/// RMT Kanal für die Datenleitung
pub const LED_CHANNEL: u8 = 0;

/// Verdrahtung des Rings: Bytes gehen als R, G, B über die Leitung
pub const LED_COLOR_ORDER: ColorOrder = ColorOrder::Rgb;

/// Helligkeits-Level für den Ring (0-255)
/// Volle Helligkeit
pub const LED_BRIGHTNESS: u8 = 255;

/// RMT Taktfrequenz in MHz
/// 80 MHz ist optimal für WS2812 LED-Timing
pub const RMT_CLOCK_MHZ: u32 = 80;

/// Pause zwischen zwei Frames in Millisekunden
/// Bremst die Animation, damit sie nicht zu schnell rotiert
pub const FRAME_INTERVAL_MS: u64 = 5;

/// Start-Farbe der Animation
pub const INITIAL_HUE: u8 = HUE_RED;

/// Hue-Abstand zwischen zwei LEDs (256 / 32 = 8)
pub const HUE_STEP: u8 = hue_step(LED_COUNT);

/// Log-Ausgabe alle N Frames (256 Frames = ein kompletter Farbumlauf)
pub const CYCLE_LOG_INTERVAL: u32 = 256;

/// Frame-Driver Einstellungen aus den Konstanten oben
pub const RING_CONFIG: RingConfig = RingConfig {
    channel: LED_CHANNEL,
    color_order: LED_COLOR_ORDER,
    brightness: LED_BRIGHTNESS,
    initial_hue: INITIAL_HUE,
};

// ============================================================================
// Display Konfiguration (SSD1306 128x64 OLED)
// ============================================================================

/// I2C Clock-Pin
pub const DISPLAY_SCL_PIN: u8 = 15;

/// I2C Daten-Pin
pub const DISPLAY_SDA_PIN: u8 = 4;

/// Reset-Pin des Displays (active low)
pub const DISPLAY_RST_PIN: u8 = 16;

/// I2C Adresse des SSD1306
pub const DISPLAY_I2C_ADDRESS: u8 = 0x3C;

/// I2C Frequenz in kHz
pub const DISPLAY_I2C_KHZ: u32 = 400;

/// Dauer des Reset-Pulses in Millisekunden
pub const DISPLAY_RESET_MS: u64 = 10;

/// Größe einer Zeichenzelle in Pixeln (16 Spalten x 8 Zeilen)
pub const DISPLAY_CELL_PX: i32 = 8;

/// Besitzer des Rings
/// Kann zur Build-Zeit über RING_OWNER (.env file) überschrieben werden
pub const OWNER_NAME: &str = match option_env!("RING_OWNER") {
    Some(owner) => owner,
    None => "Scott Cooper",
};

/// Statische Anzeige beim Start
pub const DISPLAY_LINES: [DisplayLine; 4] = [
    DisplayLine::new(0, 0, "  Property of"),
    DisplayLine::new(2, 1, OWNER_NAME),
    DisplayLine::new(0, 5, " Rainbow Ring by"),
    DisplayLine::new(0, 6, "  Dave's Garage"),
];
