use crate::{
    assets::text::{TextBlock, TextShaper},
    composition::spec::RectSpec,
    foundation::{
        error::{ImprintError, ImprintResult},
        geom::{Canvas, LinePlacement, RectGeometry},
    },
};

/// Glyph whose shaped line box sets the uniform line height for a block.
pub const REFERENCE_GLYPH: &str = "A";

/// Metrics source for placement arithmetic.
///
/// The solver is pure; everything it needs from a shaping backend comes
/// through this seam, so placement stays testable with fixed metrics.
pub trait TextMeasure {
    /// Uniform height of one visual line, in pixels.
    fn line_height(&mut self) -> ImprintResult<f64>;
    /// Advance width of one visual line, in pixels.
    fn line_width(&mut self, line: &str) -> ImprintResult<f64>;
}

impl TextMeasure for TextShaper {
    /// Line height is the ascent of the layout line shaped from
    /// [`REFERENCE_GLYPH`] alone: blocks are spaced by one glyph's box, not
    /// the font's full line metrics, so the tight spacing is intentional.
    fn line_height(&mut self) -> ImprintResult<f64> {
        let layout = self.shape_line(REFERENCE_GLYPH);
        let line = layout
            .lines()
            .next()
            .ok_or_else(|| ImprintError::font("reference glyph produced no layout line"))?;
        Ok(f64::from(line.metrics().ascent))
    }

    fn line_width(&mut self, line: &str) -> ImprintResult<f64> {
        let layout = self.shape_line(line);
        let mut w = 0.0f64;
        for l in layout.lines() {
            w = w.max(f64::from(l.metrics().advance));
        }
        Ok(w)
    }
}

/// Resolve the plaque rectangle from percentage parameters.
///
/// Width and height round from percentages of the canvas. The horizontal
/// position floor-centers on the image midline; `center_x_pct` is never
/// consulted. The vertical position rounds `center_y` minus half the height.
/// Nothing is clamped to the canvas: any edge may be negative or past it.
/// Extreme percentages saturate at the `i32` range instead of erroring, the
/// same way the `as i32` casts saturate.
pub fn resolve_rect_geometry(canvas: Canvas, spec: &RectSpec) -> RectGeometry {
    let width_px = (spec.width_pct / 100.0 * f64::from(canvas.width)).round() as i32;
    let height_px = (spec.height_pct / 100.0 * f64::from(canvas.height)).round() as i32;
    let left = (canvas.width as i32).saturating_sub(width_px).div_euclid(2);
    let top = (spec.center_y_pct / 100.0 * f64::from(canvas.height) - f64::from(height_px) / 2.0)
        .round() as i32;
    RectGeometry {
        left,
        top,
        right: left.saturating_add(width_px),
        bottom: top.saturating_add(height_px),
    }
}

/// Place each visual line inside the plaque rectangle.
///
/// Vertical: the block of `N` uniform lines is centered as a whole, the
/// first line anchored at `top + floor((rect_height - N*H) / 2)` and each
/// subsequent line exactly `H` below the previous. Horizontal: every line
/// centers independently with a floored offset. A line wider or taller than
/// the plaque overflows symmetrically; that is never an error.
pub fn layout_text_block(
    text: &TextBlock,
    geometry: RectGeometry,
    measure: &mut dyn TextMeasure,
) -> ImprintResult<Vec<LinePlacement>> {
    if text.is_empty() {
        return Ok(Vec::new());
    }

    let line_height = measure.line_height()?;
    let total = line_height * text.len() as f64;
    let mut y = f64::from(geometry.top) + ((f64::from(geometry.height()) - total) / 2.0).floor();

    let mut placements = Vec::with_capacity(text.len());
    for line in text.lines() {
        let width = measure.line_width(line)?;
        let x = f64::from(geometry.left) + ((f64::from(geometry.width()) - width) / 2.0).floor();
        placements.push(LinePlacement {
            text: line.clone(),
            x,
            y,
        });
        y += line_height;
    }
    Ok(placements)
}

#[cfg(test)]
#[path = "../../tests/unit/layout/solver.rs"]
mod tests;
