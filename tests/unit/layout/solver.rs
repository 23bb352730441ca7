use super::*;
use crate::{Canvas, RectSpec, TextBlock};

struct FixedMeasure {
    line_height: f64,
    char_width: f64,
}

impl TextMeasure for FixedMeasure {
    fn line_height(&mut self) -> ImprintResult<f64> {
        Ok(self.line_height)
    }

    fn line_width(&mut self, line: &str) -> ImprintResult<f64> {
        Ok(self.char_width * line.chars().count() as f64)
    }
}

fn rect_spec(width_pct: f64, height_pct: f64, center_y_pct: f64) -> RectSpec {
    RectSpec {
        width_pct,
        height_pct,
        center_x_pct: 50.0,
        center_y_pct,
        color: [0, 0, 0],
        opacity: 128,
    }
}

#[test]
fn geometry_matches_reference_scenario() {
    let canvas = Canvas::new(1000, 800).unwrap();
    let geom = resolve_rect_geometry(canvas, &rect_spec(50.0, 20.0, 50.0));
    assert_eq!(
        geom,
        RectGeometry {
            left: 250,
            top: 320,
            right: 750,
            bottom: 480,
        }
    );
    assert_eq!(geom.width(), 500);
    assert_eq!(geom.height(), 160);
}

#[test]
fn center_x_is_never_consulted() {
    let canvas = Canvas::new(640, 480).unwrap();
    let mut a = rect_spec(30.0, 10.0, 25.0);
    let mut b = rect_spec(30.0, 10.0, 25.0);
    a.center_x_pct = 0.0;
    b.center_x_pct = 87.3;
    assert_eq!(
        resolve_rect_geometry(canvas, &a),
        resolve_rect_geometry(canvas, &b)
    );
}

#[test]
fn odd_remainder_floors_left() {
    // 50% of 99 rounds to 50 px; the 49 px remainder splits 24/25.
    let canvas = Canvas::new(99, 100).unwrap();
    let geom = resolve_rect_geometry(canvas, &rect_spec(50.0, 10.0, 50.0));
    assert_eq!(geom.left, 24);
    assert_eq!(geom.right, 74);
}

#[test]
fn vertical_center_rounds_half_height() {
    let canvas = Canvas::new(100, 100).unwrap();
    let geom = resolve_rect_geometry(canvas, &rect_spec(50.0, 25.0, 50.0));
    // 50 - 25/2 = 37.5, which rounds away from zero.
    assert_eq!(geom.top, 38);
    assert_eq!(geom.bottom, 63);
}

#[test]
fn off_canvas_geometry_is_permitted() {
    let canvas = Canvas::new(200, 100).unwrap();
    let geom = resolve_rect_geometry(canvas, &rect_spec(150.0, 40.0, 0.0));
    assert!(geom.left < 0);
    assert!(geom.top < 0);
    assert_eq!(geom.width(), 300);
}

#[test]
fn extreme_percentages_saturate_at_i32() {
    // Finite but absurd percentages must still resolve; the pixel sums clamp
    // at the i32 range instead of overflowing.
    let canvas = Canvas::new(1000, 800).unwrap();

    let geom = resolve_rect_geometry(canvas, &rect_spec(1e10, 1e10, 1e10));
    assert_eq!(geom.top, i32::MAX);
    assert_eq!(geom.bottom, i32::MAX);
    assert_eq!(geom.left, -1_073_741_324);
    assert_eq!(geom.right, -1_073_741_324 + i32::MAX);
    assert_eq!(geom.width(), i32::MAX);

    // A huge negative width saturates from the other side.
    let geom = resolve_rect_geometry(canvas, &rect_spec(-1e10, 10.0, 50.0));
    assert_eq!(geom.left, i32::MAX / 2);
    assert!(geom.right < geom.left);
}

#[test]
fn first_line_anchor_and_uniform_spacing() {
    let geom = RectGeometry {
        left: 250,
        top: 320,
        right: 750,
        bottom: 480,
    };
    let text = TextBlock::from_text("HELLO\nWORLD WIDE");
    let mut measure = FixedMeasure {
        line_height: 20.0,
        char_width: 10.0,
    };

    let placements = layout_text_block(&text, geom, &mut measure).unwrap();
    assert_eq!(placements.len(), 2);

    // Block of 2 x 20 px centers in the 160 px rect: first line at
    // 320 + (160 - 40) / 2, the next exactly one line height below.
    assert_eq!(placements[0].y, 380.0);
    assert_eq!(placements[1].y, 400.0);

    // Each line centers on its own width.
    assert_eq!(placements[0].x, 475.0);
    assert_eq!(placements[1].x, 450.0);
}

#[test]
fn odd_leftover_floors_offsets() {
    let geom = RectGeometry {
        left: 250,
        top: 320,
        right: 750,
        bottom: 480,
    };
    let text = TextBlock::from_text("abc\nabc\nabc");
    let mut measure = FixedMeasure {
        line_height: 21.0,
        char_width: 10.5,
    };

    let placements = layout_text_block(&text, geom, &mut measure).unwrap();
    // (160 - 63) / 2 = 48.5 floors to 48; (500 - 31.5) / 2 = 234.25 floors
    // to 234.
    assert_eq!(placements[0].y, 368.0);
    assert_eq!(placements[0].x, 484.0);
    assert_eq!(placements[1].y, 389.0);
    assert_eq!(placements[2].y, 410.0);
}

#[test]
fn empty_block_has_no_placements() {
    let geom = RectGeometry {
        left: 0,
        top: 0,
        right: 100,
        bottom: 50,
    };
    let mut measure = FixedMeasure {
        line_height: 10.0,
        char_width: 5.0,
    };
    let placements = layout_text_block(&TextBlock::default(), geom, &mut measure).unwrap();
    assert!(placements.is_empty());
}

#[test]
fn blank_line_occupies_vertical_space() {
    let geom = RectGeometry {
        left: 250,
        top: 0,
        right: 750,
        bottom: 100,
    };
    let text = TextBlock::from_text("a\n\nb");
    let mut measure = FixedMeasure {
        line_height: 10.0,
        char_width: 10.0,
    };

    let placements = layout_text_block(&text, geom, &mut measure).unwrap();
    assert_eq!(placements.len(), 3);
    assert_eq!(placements[1].text, "");
    // Zero-width line centers to the rect midline.
    assert_eq!(placements[1].x, 500.0);
    assert_eq!(placements[2].y - placements[1].y, 10.0);
}

#[test]
fn overflowing_line_centers_symmetrically() {
    let geom = RectGeometry {
        left: 250,
        top: 0,
        right: 750,
        bottom: 100,
    };
    let wide = "x".repeat(60);
    let text = TextBlock::from_text(&wide);
    let mut measure = FixedMeasure {
        line_height: 10.0,
        char_width: 10.0,
    };

    let placements = layout_text_block(&text, geom, &mut measure).unwrap();
    // 600 px of text in a 500 px rect spills 50 px on each side.
    assert_eq!(placements[0].x, 200.0);
}

#[test]
fn placements_preserve_input_order() {
    let geom = RectGeometry {
        left: 0,
        top: 0,
        right: 400,
        bottom: 200,
    };
    let text = TextBlock::from_text("first\nsecond\nthird");
    let mut measure = FixedMeasure {
        line_height: 12.0,
        char_width: 6.0,
    };

    let placements = layout_text_block(&text, geom, &mut measure).unwrap();
    let texts: Vec<&str> = placements.iter().map(|p| p.text.as_str()).collect();
    assert_eq!(texts, ["first", "second", "third"]);
}
