// SSD1306 OLED (128x64) über I2C
//
// Text wird mit embedded-graphics in den Framebuffer gezeichnet
// und erst mit commit() übertragen.

use embedded_graphics::Drawable;
use embedded_graphics::geometry::Point;
use embedded_graphics::mono_font::MonoTextStyle;
use embedded_graphics::mono_font::ascii::FONT_5X8;
use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::text::{Baseline, Text};
use esp_hal::Blocking;
use esp_hal::gpio::Output;
use esp_hal::i2c::master::I2c;
use ssd1306::mode::BufferedGraphicsMode;
use ssd1306::prelude::*;
use ssd1306::{I2CDisplayInterface, Ssd1306};

use ring_core::{DisplayError, DisplayLine, RenderableDisplay};

use crate::config::{DISPLAY_CELL_PX, DISPLAY_I2C_ADDRESS};

type Oled<'a> = Ssd1306<
    I2CInterface<I2c<'a, Blocking>>,
    DisplaySize128x64,
    BufferedGraphicsMode<DisplaySize128x64>,
>;

/// Real Hardware Display
///
/// Hält den Reset-Pin, damit die Leitung nach dem Reset-Puls High bleibt.
pub struct OledDisplay<'a> {
    display: Oled<'a>,
    _reset: Output<'a>,
}

impl<'a> OledDisplay<'a> {
    /// Erstellt ein neues OledDisplay
    ///
    /// # Parameter
    /// - `i2c`: Konfigurierter I2C Bus (SDA/SCL bereits zugewiesen)
    /// - `reset`: Reset-Pin, Reset-Puls muss bereits erfolgt sein
    pub fn new(i2c: I2c<'a, Blocking>, reset: Output<'a>) -> Self {
        let interface = I2CDisplayInterface::new_custom_address(i2c, DISPLAY_I2C_ADDRESS);
        let display = Ssd1306::new(interface, DisplaySize128x64, DisplayRotation::Rotate0)
            .into_buffered_graphics_mode();

        Self {
            display,
            _reset: reset,
        }
    }
}

impl RenderableDisplay for OledDisplay<'_> {
    fn init(&mut self) -> Result<(), DisplayError> {
        self.display.init().map_err(|_| DisplayError::InitFailed)
    }

    fn clear(&mut self) -> Result<(), DisplayError> {
        self.display.clear_buffer();
        Ok(())
    }

    fn draw_lines(&mut self, lines: &[DisplayLine]) -> Result<(), DisplayError> {
        let style = MonoTextStyle::new(&FONT_5X8, BinaryColor::On);

        for line in lines {
            let position = Point::new(
                i32::from(line.column) * DISPLAY_CELL_PX,
                i32::from(line.row) * DISPLAY_CELL_PX,
            );
            Text::with_baseline(line.text, position, style, Baseline::Top)
                .draw(&mut self.display)
                .map_err(|_| DisplayError::DrawFailed)?;
        }
        Ok(())
    }

    fn commit(&mut self) -> Result<(), DisplayError> {
        self.display.flush().map_err(|_| DisplayError::FlushFailed)
    }
}
