// Rainbow Task - Steuert den LED-Ring über RMT Peripheral
use defmt::{error, info};
use embassy_time::{Duration, Timer};
use esp_hal_smartled::smart_led_buffer;

use ring_core::{FrameDriver, LedSink};

use crate::config::{
    CYCLE_LOG_INTERVAL, FRAME_INTERVAL_MS, HUE_STEP, LED_COUNT, RING_CONFIG, RMT_CLOCK_MHZ,
};
use crate::hal::RmtLedSink;

/// Rainbow Logic - Testbare Frame-Schleife ohne Hardware-Abhängigkeit
///
/// Registriert den Ring beim Sink und rendert dann endlos:
/// - Regenbogen über alle LEDs berechnen
/// - Start-Hue um 1 weiterdrehen
/// - Buffer senden
/// - `FRAME_INTERVAL_MS` warten
///
/// Sendefehler werden geloggt, die Animation läuft weiter.
///
/// # Trait-basierte Abstraktion
/// Der generische Parameter `S: LedSink` ermöglicht:
/// - Real Hardware (RmtLedSink) im Production-Code
/// - Mock Implementation (MockLedSink) in Tests
pub async fn rainbow_logic<S: LedSink>(sink: S) {
    let mut driver = match FrameDriver::<S, LED_COUNT>::new(sink, RING_CONFIG) {
        Ok(driver) => driver,
        Err(e) => {
            error!("LED-Ring Registrierung fehlgeschlagen: {}", e);
            return;
        }
    };

    info!(
        "Rainbow gestartet: {} LEDs, Hue-Schritt {}, {} ms pro Frame",
        LED_COUNT, HUE_STEP, FRAME_INTERVAL_MS
    );

    // Hauptschleife: läuft bis Reset oder Stromausfall
    loop {
        if let Err(e) = driver.render_frame() {
            error!("Failed to write to LED ring: {}", e);
        }

        if driver.frames() % CYCLE_LOG_INTERVAL == 0 {
            info!("Farbumlauf abgeschlossen ({} Frames)", driver.frames());
        }

        // Async Delay: gibt CPU an andere Tasks zurück
        Timer::after(Duration::from_millis(FRAME_INTERVAL_MS)).await;
    }
}

/// Rainbow Task - Embassy Task für den LED-Ring
///
/// Dieser Task übernimmt die Hardware-Initialisierung und ruft dann
/// die testbare `rainbow_logic()` Funktion auf.
///
/// # Parameter
/// - `gpio5`: GPIO5 Peripheral für die Datenleitung
/// - `rmt_peripheral`: RMT Peripheral für präzises Timing
#[embassy_executor::task]
pub async fn rainbow_task(
    gpio5: esp_hal::peripherals::GPIO5<'static>,
    rmt_peripheral: esp_hal::peripherals::RMT<'static>,
) {
    // Buffer für SmartLED Daten erstellen (32 LEDs)
    // Macro allokiert Speicher im richtigen Format für RMT
    let mut rmt_buffer = smart_led_buffer!(LED_COUNT);

    // Hardware initialisieren: RmtLedSink kapselt RMT + SmartLED
    let led = match RmtLedSink::new(gpio5, rmt_peripheral, RMT_CLOCK_MHZ, &mut rmt_buffer) {
        Ok(led) => led,
        Err(e) => {
            error!("RMT Initialisierung fehlgeschlagen: {}", e);
            return;
        }
    };

    rainbow_logic(led).await;
}
