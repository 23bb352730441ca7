use kurbo::Shape;

use crate::{
    assets::text::TextBrushRgba8,
    foundation::{
        error::{ImprintError, ImprintResult},
        geom::{Canvas, RectGeometry},
    },
};

/// Corner radius of the plaque, in pixels.
pub const CORNER_RADIUS_PX: f64 = 20.0;

/// Brush for plaque text: opaque white.
pub const TEXT_BRUSH: TextBrushRgba8 = TextBrushRgba8 {
    r: 255,
    g: 255,
    b: 255,
    a: 255,
};

/// Transparent drawing surface for everything stamped onto the source image.
///
/// Wraps a CPU render context sized to the canvas; readback is premultiplied
/// RGBA8, transparent wherever nothing was drawn.
#[derive(Debug)]
pub struct OverlayLayer {
    width: u16,
    height: u16,
    ctx: vello_cpu::RenderContext,
}

impl OverlayLayer {
    pub fn new(canvas: Canvas) -> ImprintResult<Self> {
        let width: u16 = canvas
            .width
            .try_into()
            .map_err(|_| ImprintError::render("overlay width exceeds u16"))?;
        let height: u16 = canvas
            .height
            .try_into()
            .map_err(|_| ImprintError::render("overlay height exceeds u16"))?;
        Ok(Self {
            width,
            height,
            ctx: vello_cpu::RenderContext::new(width, height),
        })
    }

    /// Fill the rounded plaque rectangle at the given fill opacity.
    ///
    /// The fill covers the rounded shape only; the corner cutouts stay
    /// transparent. Zero opacity still runs the pass and paints nothing
    /// visible.
    pub fn fill_rounded_rect(&mut self, geometry: RectGeometry, color: [u8; 3], opacity: u8) {
        self.ctx.set_transform(vello_cpu::kurbo::Affine::IDENTITY);
        self.ctx.set_paint(vello_cpu::peniko::Color::from_rgba8(
            color[0], color[1], color[2], opacity,
        ));
        let rr = kurbo::RoundedRect::new(
            f64::from(geometry.left),
            f64::from(geometry.top),
            f64::from(geometry.right),
            f64::from(geometry.bottom),
            CORNER_RADIUS_PX,
        );
        self.ctx.fill_path(&rounded_rect_to_cpu(&rr));
    }

    /// Draw one shaped line with its line-box top-left anchored at `(x, y)`.
    pub fn draw_text_line(
        &mut self,
        font: &vello_cpu::peniko::FontData,
        layout: &parley::Layout<TextBrushRgba8>,
        x: f64,
        y: f64,
    ) {
        self.ctx
            .set_transform(vello_cpu::kurbo::Affine::translate((x, y)));
        for line in layout.lines() {
            for item in line.items() {
                let parley::layout::PositionedLayoutItem::GlyphRun(run) = item else {
                    continue;
                };
                let brush = run.style().brush;
                self.ctx.set_paint(vello_cpu::peniko::Color::from_rgba8(
                    brush.r, brush.g, brush.b, brush.a,
                ));
                let glyphs = run.glyphs().map(|g| vello_cpu::Glyph {
                    id: g.id,
                    x: g.x,
                    y: g.y,
                });
                self.ctx
                    .glyph_run(font)
                    .font_size(run.run().font_size())
                    .fill_glyphs(glyphs);
            }
        }
    }

    /// Rasterize everything drawn so far and return premultiplied RGBA8.
    pub fn into_premul_rgba8(mut self) -> Vec<u8> {
        let mut pixmap = vello_cpu::Pixmap::new(self.width, self.height);
        self.ctx.flush();
        self.ctx.render_to_pixmap(&mut pixmap);
        pixmap.data_as_u8_slice().to_vec()
    }
}

fn point_to_cpu(p: kurbo::Point) -> vello_cpu::kurbo::Point {
    vello_cpu::kurbo::Point::new(p.x, p.y)
}

// The renderer re-exports its own kurbo; paths built against ours are
// rebuilt element by element rather than assuming the versions unify.
fn rounded_rect_to_cpu(rr: &kurbo::RoundedRect) -> vello_cpu::kurbo::BezPath {
    use kurbo::PathEl;

    let mut out = vello_cpu::kurbo::BezPath::new();
    for el in rr.path_elements(0.1) {
        match el {
            PathEl::MoveTo(p) => out.move_to(point_to_cpu(p)),
            PathEl::LineTo(p) => out.line_to(point_to_cpu(p)),
            PathEl::QuadTo(p1, p2) => out.quad_to(point_to_cpu(p1), point_to_cpu(p2)),
            PathEl::CurveTo(p1, p2, p3) => {
                out.curve_to(point_to_cpu(p1), point_to_cpu(p2), point_to_cpu(p3));
            }
            PathEl::ClosePath => out.close_path(),
        }
    }
    out
}
