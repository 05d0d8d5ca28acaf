// Hardware Abstraction Layer (HAL) Module
//
// Implementiert die Traits aus ring-core für die echte Hardware.
// Tests nutzen stattdessen die Mocks in ring-tests.

pub mod display;
pub mod led_sink;

pub use display::OledDisplay;
pub use led_sink::{LED_BUFFER_SIZE, RmtLedSink};
