//! Statische Anzeige beim Start

use crate::traits::{DisplayError, RenderableDisplay};
use crate::types::DisplayLine;

/// Zeigt die Kennzeichnung auf dem Display an
///
/// Reihenfolge: `init` → `clear` → `draw_lines` → `commit`.
/// Der erste Fehler bricht ab.
pub fn show_identification<D: RenderableDisplay>(
    display: &mut D,
    lines: &[DisplayLine],
) -> Result<(), DisplayError> {
    display.init()?;
    display.clear()?;
    display.draw_lines(lines)?;
    display.commit()
}
