// Keine Standard-Bibliothek verwenden (Embedded System)
#![no_std]
// Kein normaler main() Einstiegspunkt (wird von esp_rtos bereitgestellt)
#![no_main]
// Verbiete mem::forget - gefährlich bei ESP HAL Types mit DMA-Buffern
#![deny(
    clippy::mem_forget,
    reason = "mem::forget is generally not safe to do with esp_hal types, especially those \
    holding buffers for the duration of a data transfer."
)]
// Verbiete große Stack-Frames (Stack ist auf Embedded Systemen begrenzt)
#![deny(clippy::large_stack_frames)]

// Embassy Async Runtime
use defmt::{info, warn};
use embassy_executor::Spawner;
use embassy_time::{Duration, Timer};

// ESP32-C6 HAL
use esp_hal::clock::CpuClock;
use esp_hal::gpio::{Level, Output, OutputConfig};
use esp_hal::i2c::master::{Config as I2cConfig, I2c};
use esp_hal::time::Rate;
use esp_hal::timer::timg::TimerGroup;

// Backtrace bei Panic und println!() Support
use {esp_backtrace as _, esp_println as _};

// Projekt-Module und Konfiguration
use rainbow_ring::config::{
    DISPLAY_I2C_KHZ, DISPLAY_LINES, DISPLAY_RESET_MS, LED_COUNT, OWNER_NAME,
};
use rainbow_ring::hal::OledDisplay;
use rainbow_ring::show_identification;
use rainbow_ring::tasks::rainbow_task;

// ESP-IDF App Descriptor - erforderlich für den Bootloader!
// Ohne diesen schlägt das Flashen mit "ESP-IDF App Descriptor missing" fehl
esp_bootloader_esp_idf::esp_app_desc!();

/// Main Entry Point
///
/// Initialisiert Hardware, beschreibt das Display einmalig und startet
/// den Rainbow Task. Danach schläft main() - alle Arbeit läuft im Task.
#[esp_rtos::main]
async fn main(spawner: Spawner) -> ! {
    // ESP32-C6 Konfiguration: CPU auf maximale Taktfrequenz (160 MHz)
    let config = esp_hal::Config::default().with_cpu_clock(CpuClock::max());
    let peripherals = esp_hal::init(config);

    // Embassy Runtime initialisieren (Timer + Software Interrupt)
    let timg0 = TimerGroup::new(peripherals.TIMG0);
    let sw_interrupt =
        esp_hal::interrupt::software::SoftwareInterruptControl::new(peripherals.SW_INTERRUPT);
    esp_rtos::start(timg0.timer0, sw_interrupt.software_interrupt0);

    info!("Rainbow Ring startet ({} LEDs, Besitzer: {})", LED_COUNT, OWNER_NAME);

    // Display Reset-Puls (active low)
    let mut display_reset = Output::new(peripherals.GPIO16, Level::Low, OutputConfig::default());
    Timer::after(Duration::from_millis(DISPLAY_RESET_MS)).await;
    display_reset.set_high();

    // Display muss bis zum Ende von main() leben (hält den Reset-Pin High)
    let i2c_config = I2cConfig::default().with_frequency(Rate::from_khz(DISPLAY_I2C_KHZ));
    let _display = match I2c::new(peripherals.I2C0, i2c_config) {
        Ok(i2c) => {
            let i2c = i2c.with_sda(peripherals.GPIO4).with_scl(peripherals.GPIO15);
            let mut display = OledDisplay::new(i2c, display_reset);

            // Fehler sind nicht fatal: ohne Display läuft nur der Ring
            match show_identification(&mut display, &DISPLAY_LINES) {
                Ok(()) => info!("Display beschrieben"),
                Err(e) => warn!("Display nicht erreichbar: {}", e),
            }
            Some(display)
        }
        Err(_) => {
            warn!("I2C Konfiguration fehlgeschlagen, Display bleibt leer");
            None
        }
    };

    // Spawn Rainbow Task (RMT Channel 0 auf GPIO5)
    spawner
        .spawn(rainbow_task(peripherals.GPIO5, peripherals.RMT))
        .unwrap();

    // Main-Loop: schläft (alle Arbeit läuft im Task)
    loop {
        Timer::after(Duration::from_secs(3600)).await;
    }
}
