use serde::{Deserialize, Serialize};

use crate::foundation::error::{ImprintError, ImprintResult};

/// Target raster dimensions in pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Canvas {
    pub width: u32,
    pub height: u32,
}

impl Canvas {
    /// Build a canvas, rejecting zero dimensions.
    pub fn new(width: u32, height: u32) -> ImprintResult<Self> {
        if width == 0 || height == 0 {
            return Err(ImprintError::validation(format!(
                "canvas dimensions must be non-zero (got {width}x{height})"
            )));
        }
        Ok(Self { width, height })
    }
}

/// Resolved plaque rectangle in pixel space.
///
/// Edges are signed: the plaque may lie partially or fully off-canvas, which
/// is valid and simply clips at raster time. `right`/`bottom` are exclusive
/// in the usual half-open sense (`right = left + width`).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct RectGeometry {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

impl RectGeometry {
    pub fn width(&self) -> i32 {
        self.right - self.left
    }

    pub fn height(&self) -> i32 {
        self.bottom - self.top
    }
}

/// One placed visual line: the text and the top-left anchor of its line box.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct LinePlacement {
    pub text: String,
    pub x: f64,
    pub y: f64,
}
