//! Pixel-Buffer mit fester Länge
//!
//! Index = physikalische Position der LED auf dem Ring.

use rgb::RGB8;

use crate::logic::fill_rainbow;

/// Fehler bei Zugriffen auf den Pixel-Buffer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum BufferError {
    /// Bereich liegt (teilweise) außerhalb des Buffers
    OutOfRange,
}

/// Farbwerte für `N` LEDs
///
/// Die Länge ist Teil des Typs und ändert sich nie.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelBuffer<const N: usize> {
    pixels: [RGB8; N],
}

impl<const N: usize> PixelBuffer<N> {
    /// Erstellt einen Buffer mit allen LEDs aus
    pub const fn new() -> Self {
        Self {
            pixels: [RGB8 { r: 0, g: 0, b: 0 }; N],
        }
    }

    pub const fn len(&self) -> usize {
        N
    }

    pub const fn is_empty(&self) -> bool {
        N == 0
    }

    pub fn as_slice(&self) -> &[RGB8] {
        &self.pixels
    }

    pub fn as_mut_slice(&mut self) -> &mut [RGB8] {
        &mut self.pixels
    }

    pub fn get(&self, index: usize) -> Option<RGB8> {
        self.pixels.get(index).copied()
    }

    /// Liefert den Teilbereich `[start, start + count)`
    pub fn region_mut(&mut self, start: usize, count: usize) -> Result<&mut [RGB8], BufferError> {
        let end = start.checked_add(count).ok_or(BufferError::OutOfRange)?;
        self.pixels.get_mut(start..end).ok_or(BufferError::OutOfRange)
    }

    /// Füllt `count` Pixel ab `start` mit einem Regenbogen-Verlauf
    ///
    /// Liegt der Bereich außerhalb des Buffers, bleibt der Buffer unverändert.
    ///
    /// ```
    /// # use ring_core::{BufferError, PixelBuffer};
    /// let mut leds = PixelBuffer::<8>::new();
    /// assert!(leds.fill_rainbow(0, 8, 0, 32).is_ok());
    /// assert_eq!(leds.fill_rainbow(6, 3, 0, 32), Err(BufferError::OutOfRange));
    /// ```
    pub fn fill_rainbow(
        &mut self,
        start: usize,
        count: usize,
        initial_hue: u8,
        hue_step: u8,
    ) -> Result<(), BufferError> {
        let region = self.region_mut(start, count)?;
        fill_rainbow(region, initial_hue, hue_step);
        Ok(())
    }
}

impl<const N: usize> Default for PixelBuffer<N> {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// defmt::Format Implementation (optional feature)
// ============================================================================

#[cfg(feature = "defmt")]
impl<const N: usize> defmt::Format for PixelBuffer<N> {
    fn format(&self, fmt: defmt::Formatter) {
        match self.pixels.first() {
            Some(first) => defmt::write!(
                fmt,
                "PixelBuffer {{ len: {}, first: ({}, {}, {}) }}",
                N,
                first.r,
                first.g,
                first.b
            ),
            None => defmt::write!(fmt, "PixelBuffer {{ len: 0 }}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_buffer_is_dark() {
        let leds = PixelBuffer::<4>::new();
        assert_eq!(leds.len(), 4);
        assert!(leds.as_slice().iter().all(|&c| c == RGB8::default()));
    }

    #[test]
    fn test_region_mut_bounds() {
        let mut leds = PixelBuffer::<4>::new();
        assert_eq!(leds.region_mut(0, 4).map(|r| r.len()), Ok(4));
        assert_eq!(leds.region_mut(4, 0).map(|r| r.len()), Ok(0));
        assert_eq!(leds.region_mut(3, 2), Err(BufferError::OutOfRange));
        assert_eq!(leds.region_mut(usize::MAX, 2), Err(BufferError::OutOfRange));
    }

    #[test]
    fn test_fill_rainbow_out_of_range_leaves_buffer() {
        let mut leds = PixelBuffer::<4>::new();
        assert_eq!(leds.fill_rainbow(2, 5, 0, 8), Err(BufferError::OutOfRange));
        assert_eq!(leds, PixelBuffer::<4>::new());
    }

    #[test]
    fn test_get_outside_is_none() {
        let leds = PixelBuffer::<2>::new();
        assert_eq!(leds.get(2), None);
        assert_eq!(leds.get(1), Some(RGB8::default()));
    }
}
