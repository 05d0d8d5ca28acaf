//! 8-Bit Fixpunkt-Arithmetik
//!
//! Skalierung von Farbkanälen ohne Floating Point (ESP32-C6 hat keine FPU).

use rgb::RGB8;

/// Skaliert `i` mit `scale / 256`
///
/// Rechnet mit `scale + 1`, damit `scale8(x, 255) == x` gilt:
/// volle Helligkeit verändert eine Farbe nicht.
///
/// ```
/// # use ring_core::math8::scale8;
/// assert_eq!(scale8(255, 255), 255);
/// assert_eq!(scale8(200, 127), 100);
/// assert_eq!(scale8(200, 0), 0);
/// ```
#[inline]
pub const fn scale8(i: u8, scale: u8) -> u8 {
    ((i as u16 * (1 + scale as u16)) >> 8) as u8
}

/// Wie [`scale8`], aber ein Wert ungleich 0 bleibt ungleich 0
///
/// Verhindert, dass schwach leuchtende Kanäle beim Dimmen ganz ausgehen.
#[inline]
pub const fn scale8_video(i: u8, scale: u8) -> u8 {
    let scaled = ((i as u16 * scale as u16) >> 8) as u8;
    if i != 0 && scale != 0 {
        scaled + 1
    } else {
        scaled
    }
}

/// Globale Helligkeit auf alle drei Kanäle anwenden
///
/// `255` lässt die Farbe unverändert, `0` schaltet die LED aus.
pub const fn scale_color(color: RGB8, brightness: u8) -> RGB8 {
    RGB8 {
        r: scale8(color.r, brightness),
        g: scale8(color.g, brightness),
        b: scale8(color.b, brightness),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scale8_full_scale_is_identity() {
        for i in 0..=255u8 {
            assert_eq!(scale8(i, 255), i);
        }
    }

    #[test]
    fn test_scale8_zero_scale_is_zero() {
        for i in 0..=255u8 {
            assert_eq!(scale8(i, 0), 0);
        }
    }

    #[test]
    fn test_scale8_thirds() {
        // Werte aus der Rainbow-Konvertierung (offset8 max = 248)
        assert_eq!(scale8(248, 85), 83);
        assert_eq!(scale8(248, 170), 165);
    }

    #[test]
    fn test_scale_color() {
        let color = RGB8::new(255, 128, 2);
        assert_eq!(scale_color(color, 255), color);
        assert_eq!(scale_color(color, 0), RGB8::new(0, 0, 0));
        assert_eq!(scale_color(color, 127), RGB8::new(127, 64, 1));
    }

    #[test]
    fn test_scale8_video_keeps_nonzero() {
        assert_eq!(scale8_video(1, 1), 1);
        assert_eq!(scale8_video(0, 200), 0);
        assert_eq!(scale8_video(200, 0), 0);
        assert_eq!(scale8_video(255, 255), 255);
    }
}
