//! Pure Farb-Logik: HSV → RGB und Regenbogen-Verlauf
//!
//! Funktionen ohne Hardware-Dependencies (testbar!)

use rgb::RGB8;

use crate::math8::{scale8, scale8_video};
use crate::types::Hsv;

/// Hue-Abstand zwischen zwei benachbarten LEDs für genau einen Farbkreis pro Ring
///
/// Ganzzahl-Division `256 / pixel_count`, abgeschnitten auf `u8`.
/// Bei Anzahlen, die 256 nicht teilen, bleibt eine kleine Naht im Verlauf.
///
/// ```
/// # use ring_core::hue_step;
/// assert_eq!(hue_step(32), 8);
/// assert_eq!(hue_step(12), 21);
/// ```
pub const fn hue_step(pixel_count: usize) -> u8 {
    if pixel_count == 0 {
        return 0;
    }
    (256 / pixel_count) as u8
}

/// Konvertiert eine HSV-Farbe in RGB (Regenbogen-Variante)
///
/// Der Farbkreis ist in acht Abschnitte zu je 32 Hue-Werten geteilt:
/// Rot → Orange → Gelb → Grün → Aqua → Blau → Lila → Pink → Rot.
/// Gelb wird angehoben, da es sonst dunkler wirkt als die Nachbarfarben.
/// Reine Integer-Arithmetik.
///
/// ```
/// # use rgb::RGB8;
/// # use ring_core::{Hsv, HUE_GREEN, hsv_to_rgb_rainbow};
/// assert_eq!(hsv_to_rgb_rainbow(Hsv::rainbow(0)), RGB8::new(255, 0, 0));
/// assert_eq!(hsv_to_rgb_rainbow(Hsv::rainbow(HUE_GREEN)), RGB8::new(0, 255, 0));
/// ```
pub fn hsv_to_rgb_rainbow(hsv: Hsv) -> RGB8 {
    // Position innerhalb des Abschnitts, 0..=248
    let offset8 = (hsv.hue & 0x1F) << 3;
    let third = scale8(offset8, 85);
    let two_thirds = scale8(offset8, 170);

    let (mut r, mut g, mut b) = match hsv.hue >> 5 {
        0 => (255 - third, third, 0),                     // Rot → Orange
        1 => (171, 85 + third, 0),                        // Orange → Gelb
        2 => (171 - two_thirds, 170 + third, 0),          // Gelb → Grün
        3 => (0, 255 - third, third),                     // Grün → Aqua
        4 => (0, 171 - two_thirds, 85 + two_thirds),      // Aqua → Blau
        5 => (third, 0, 255 - third),                     // Blau → Lila
        6 => (85 + third, 0, 171 - third),                // Lila → Pink
        _ => (170 + third, 0, 85 - third),                // Pink → Rot
    };

    if hsv.sat != 255 {
        if hsv.sat == 0 {
            (r, g, b) = (255, 255, 255);
        } else {
            let desat = scale8_video(255 - hsv.sat, 255 - hsv.sat);
            let sat_scale = 255 - desat;
            r = scale_channel(r, sat_scale).saturating_add(desat);
            g = scale_channel(g, sat_scale).saturating_add(desat);
            b = scale_channel(b, sat_scale).saturating_add(desat);
        }
    }

    if hsv.val != 255 {
        let val = scale8_video(hsv.val, hsv.val);
        if val == 0 {
            (r, g, b) = (0, 0, 0);
        } else {
            r = scale_channel(r, val);
            g = scale_channel(g, val);
            b = scale_channel(b, val);
        }
    }

    RGB8 { r, g, b }
}

// Kanäle ungleich 0 bleiben beim Skalieren ungleich 0
fn scale_channel(channel: u8, scale: u8) -> u8 {
    if channel == 0 {
        0
    } else {
        scale8(channel, scale).saturating_add(1)
    }
}

/// Füllt alle Pixel des Slices mit einem Regenbogen-Verlauf
///
/// Pixel `k` bekommt den Hue `initial_hue + k * hue_step` (mod 256),
/// Sättigung und Helligkeit immer 255. Nur der übergebene Slice wird
/// beschrieben; für Teilbereiche den passenden Sub-Slice übergeben.
///
/// ```
/// # use rgb::RGB8;
/// # use ring_core::fill_rainbow;
/// let mut leds = [RGB8::default(); 4];
/// fill_rainbow(&mut leds[1..3], 0, 64);
/// assert_eq!(leds[0], RGB8::default());
/// assert_eq!(leds[1], RGB8::new(255, 0, 0));
/// assert_eq!(leds[3], RGB8::default());
/// ```
pub fn fill_rainbow(pixels: &mut [RGB8], initial_hue: u8, hue_step: u8) {
    let mut hue = initial_hue;
    for pixel in pixels.iter_mut() {
        *pixel = hsv_to_rgb_rainbow(Hsv::rainbow(hue));
        hue = hue.wrapping_add(hue_step);
    }
}

/// Ermittelt den Hue einer Farbe, die mit voller Sättigung und Helligkeit
/// erzeugt wurde
///
/// Gibt `None` zurück, wenn die Farbe nicht aus [`hsv_to_rgb_rainbow`] stammt.
pub fn rainbow_hue(color: RGB8) -> Option<u8> {
    (0..=255u8).find(|&hue| hsv_to_rgb_rainbow(Hsv::rainbow(hue)) == color)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{HUE_AQUA, HUE_BLUE, HUE_ORANGE, HUE_PINK, HUE_PURPLE, HUE_YELLOW};

    #[test]
    fn test_hue_step_for_ring() {
        assert_eq!(hue_step(32), 8);
        assert_eq!(hue_step(256), 1);
        assert_eq!(hue_step(0), 0);
        // 256 passt nicht in u8
        assert_eq!(hue_step(1), 0);
    }

    #[test]
    fn test_sector_anchors() {
        let anchors = [
            (0, RGB8::new(255, 0, 0)),
            (HUE_ORANGE, RGB8::new(171, 85, 0)),
            (HUE_YELLOW, RGB8::new(171, 170, 0)),
            (96, RGB8::new(0, 255, 0)),
            (HUE_AQUA, RGB8::new(0, 171, 85)),
            (HUE_BLUE, RGB8::new(0, 0, 255)),
            (HUE_PURPLE, RGB8::new(85, 0, 171)),
            (HUE_PINK, RGB8::new(170, 0, 85)),
        ];
        for (hue, expected) in anchors {
            assert_eq!(hsv_to_rgb_rainbow(Hsv::rainbow(hue)), expected, "hue {}", hue);
        }
    }

    #[test]
    fn test_end_of_wheel_is_near_red() {
        assert_eq!(hsv_to_rgb_rainbow(Hsv::rainbow(248)), RGB8::new(234, 0, 21));
        assert_eq!(hsv_to_rgb_rainbow(Hsv::rainbow(255)), RGB8::new(253, 0, 2));
    }

    #[test]
    fn test_rainbow_hue_inverts_every_hue() {
        for hue in 0..=255u8 {
            let color = hsv_to_rgb_rainbow(Hsv::rainbow(hue));
            assert_eq!(rainbow_hue(color), Some(hue));
        }
    }

    #[test]
    fn test_rainbow_hue_unknown_color() {
        assert_eq!(rainbow_hue(RGB8::new(10, 10, 10)), None);
    }

    #[test]
    fn test_zero_saturation_is_white() {
        let hsv = Hsv { hue: 42, sat: 0, val: 255 };
        assert_eq!(hsv_to_rgb_rainbow(hsv), RGB8::new(255, 255, 255));
    }

    #[test]
    fn test_zero_value_is_black() {
        let hsv = Hsv { hue: 42, sat: 255, val: 0 };
        assert_eq!(hsv_to_rgb_rainbow(hsv), RGB8::new(0, 0, 0));
    }

    #[test]
    fn test_reduced_value_dims() {
        let full = hsv_to_rgb_rainbow(Hsv::rainbow(0));
        let dimmed = hsv_to_rgb_rainbow(Hsv { hue: 0, sat: 255, val: 128 });
        assert!(dimmed.r < full.r);
        assert_eq!(dimmed.g, 0);
        assert_eq!(dimmed.b, 0);
    }

    #[test]
    fn test_partial_saturation_lifts_all_channels() {
        let color = hsv_to_rgb_rainbow(Hsv { hue: 0, sat: 128, val: 255 });
        assert!(color.g > 0);
        assert!(color.b > 0);
        assert!(color.r > color.g);
    }

    #[test]
    fn test_fill_rainbow_wraps_hue() {
        let mut leds = [RGB8::default(); 2];
        fill_rainbow(&mut leds, 250, 8);
        assert_eq!(rainbow_hue(leds[0]), Some(250));
        assert_eq!(rainbow_hue(leds[1]), Some(2));
    }

    #[test]
    fn test_fill_rainbow_empty_slice() {
        let mut leds: [RGB8; 0] = [];
        fill_rainbow(&mut leds, 0, 8);
    }
}
