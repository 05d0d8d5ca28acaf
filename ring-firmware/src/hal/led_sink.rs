// LED-Sink für den WS2812B Ring über das RMT Peripheral
//
// Wendet Helligkeit und Farb-Reihenfolge an und übergibt den
// kompletten Buffer an den SmartLED Adapter.

use esp_hal::Blocking;
use esp_hal::rmt::Rmt;
use esp_hal::time::Rate;
use esp_hal_smartled::SmartLedsAdapter;
use rgb::RGB8;
use smart_leds_trait::SmartLedsWrite;

use ring_core::{LedError, LedSink, StripConfig, scale_color};

use crate::config::{LED_CHANNEL, LED_COUNT};

/// Buffer-Größe für den Ring (3 Farben * 8 Bits pro LED + 1 Reset)
pub const LED_BUFFER_SIZE: usize = LED_COUNT * 24 + 1;

/// Real Hardware LED-Sink
///
/// Nutzt ESP32 RMT Channel 0 um den WS2812B Ring anzusteuern.
///
/// Hinweis: Der Buffer muss länger leben als der Sink, daher wird er im Task
/// erstellt und als Parameter übergeben statt im Constructor allokiert.
pub struct RmtLedSink<'a> {
    led: SmartLedsAdapter<'a, LED_BUFFER_SIZE>,
    config: Option<StripConfig>,
    brightness: u8,
}

impl<'a> RmtLedSink<'a> {
    /// Erstellt einen neuen RmtLedSink
    ///
    /// # Parameter
    /// - `data_pin`: GPIO5 Peripheral für die Datenleitung
    /// - `rmt_peripheral`: RMT Peripheral
    /// - `rmt_clock_mhz`: RMT Clock Frequenz in MHz (z.B. 80)
    /// - `buffer`: Buffer für LED-Daten (erstellt mit smart_led_buffer! Macro)
    pub fn new(
        data_pin: esp_hal::peripherals::GPIO5<'a>,
        rmt_peripheral: esp_hal::peripherals::RMT<'a>,
        rmt_clock_mhz: u32,
        buffer: &'a mut [esp_hal::rmt::PulseCode; LED_BUFFER_SIZE],
    ) -> Result<Self, LedError> {
        // RMT initialisieren
        let rmt: Rmt<'a, Blocking> = Rmt::new(rmt_peripheral, Rate::from_mhz(rmt_clock_mhz))
            .map_err(|_| LedError::ConfigFailed)?;

        // SmartLED Adapter erstellen
        let led = SmartLedsAdapter::new(rmt.channel0, data_pin, buffer);

        Ok(Self {
            led,
            config: None,
            brightness: 255,
        })
    }
}

impl LedSink for RmtLedSink<'_> {
    fn configure(&mut self, config: StripConfig) -> Result<(), LedError> {
        // Kanal und Buffer-Größe stehen zur Compile-Zeit fest
        if config.channel != LED_CHANNEL || config.pixel_count != LED_COUNT {
            return Err(LedError::ConfigFailed);
        }
        self.config = Some(config);
        Ok(())
    }

    fn set_brightness(&mut self, brightness: u8) {
        self.brightness = brightness;
    }

    fn transmit(&mut self, pixels: &[RGB8]) -> Result<(), LedError> {
        let Some(config) = self.config else {
            return Err(LedError::WriteFailed);
        };
        if pixels.len() > config.pixel_count {
            return Err(LedError::WriteFailed);
        }

        let brightness = self.brightness;
        let order = config.color_order;
        let colors = pixels
            .iter()
            .map(move |&color| order.arrange_for_grb_driver(scale_color(color, brightness)));

        self.led.write(colors).map_err(|_| LedError::WriteFailed)
    }
}
