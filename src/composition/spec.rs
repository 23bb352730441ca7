use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::foundation::error::{ImprintError, ImprintResult};

/// Plaque rectangle parameters. All percentages are relative to the target
/// image's dimensions.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RectSpec {
    /// Plaque width as a percentage of the image width.
    pub width_pct: f64,
    /// Plaque height as a percentage of the image height.
    pub height_pct: f64,
    /// Accepted for interface compatibility but never consulted: the plaque
    /// is always horizontally centered on the image midline.
    pub center_x_pct: f64,
    /// Vertical center of the plaque as a percentage of the image height.
    pub center_y_pct: f64,
    /// Fill color, straight RGB.
    pub color: [u8; 3],
    /// Fill opacity: 0 fully transparent, 255 fully opaque.
    pub opacity: u8,
}

/// Font selection for the plaque text.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FontSpec {
    /// Path to a font file. `None`, or a path that cannot be read, selects a
    /// system face instead (sans-serif preferred).
    pub source: Option<PathBuf>,
    /// Font size in pixels.
    pub size_px: u32,
}

impl FontSpec {
    /// Default text size in pixels.
    pub const DEFAULT_SIZE: u32 = 20;
}

impl Default for FontSpec {
    fn default() -> Self {
        Self {
            source: None,
            size_px: Self::DEFAULT_SIZE,
        }
    }
}

/// Complete overlay specification: plaque geometry plus text styling.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct OverlaySpec {
    pub rect: RectSpec,
    pub font: FontSpec,
}

impl OverlaySpec {
    /// Validate parameters before any IO is attempted.
    ///
    /// Percentages must be finite but are deliberately not bounded to
    /// `0..=100`: out-of-range values place the plaque off-canvas rather than
    /// erroring. Color and opacity are bounded by their types.
    pub fn validate(&self) -> ImprintResult<()> {
        for (name, value) in [
            ("width_pct", self.rect.width_pct),
            ("height_pct", self.rect.height_pct),
            ("center_x_pct", self.rect.center_x_pct),
            ("center_y_pct", self.rect.center_y_pct),
        ] {
            if !value.is_finite() {
                return Err(ImprintError::validation(format!(
                    "{name} must be finite (got {value})"
                )));
            }
        }
        if self.font.size_px == 0 {
            return Err(ImprintError::validation("font size_px must be >= 1"));
        }
        Ok(())
    }
}
