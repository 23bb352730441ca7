use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::{
    assets::{
        decode::{SourceImage, load_image},
        font::{ResolvedFont, resolve_font},
        text::{TextBlock, TextShaper},
    },
    composition::spec::OverlaySpec,
    foundation::{
        error::{ImprintError, ImprintResult},
        geom::{Canvas, LinePlacement, RectGeometry},
    },
    layout::solver::{layout_text_block, resolve_rect_geometry},
    render::{
        composite::{flatten_to_rgb8, over_in_place},
        overlay::{OverlayLayer, TEXT_BRUSH},
    },
};

/// A flattened output frame: straight RGB8, row-major, tightly packed.
#[derive(Clone, Debug)]
pub struct FrameRGB {
    pub width: u32,
    pub height: u32,
    pub data: Vec<u8>,
}

/// Everything [`render_stamp`] produces besides pixels on disk.
#[derive(Clone, Debug)]
pub struct StampRender {
    pub frame: FrameRGB,
    pub geometry: RectGeometry,
    pub placements: Vec<LinePlacement>,
}

/// One-shot stamping request: input paths plus the overlay parameters.
#[derive(Clone, Debug)]
pub struct StampParams {
    pub image_path: PathBuf,
    pub text_path: PathBuf,
    pub out_path: PathBuf,
    pub spec: OverlaySpec,
}

/// Post-run report: what was resolved and where things landed.
///
/// This is the `--dump-layout` payload, so it stays serializable.
#[derive(Clone, Debug, Serialize)]
pub struct StampOutcome {
    pub canvas: Canvas,
    pub geometry: RectGeometry,
    pub placements: Vec<LinePlacement>,
    pub font_fallback: bool,
}

/// Compose the plaque onto an already-decoded source image.
///
/// This is the primary in-memory API; no filesystem access happens here.
/// `font` may be `None` only when `text` is empty; lines without a font are
/// an [`ImprintError::Font`] error.
///
/// Pipeline:
/// 1. [`resolve_rect_geometry`] (pure)
/// 2. [`OverlayLayer::fill_rounded_rect`]
/// 3. [`layout_text_block`] + one glyph pass per placed line
/// 4. premultiplied `over` onto a copy of the source
/// 5. [`flatten_to_rgb8`]
#[tracing::instrument(skip(source, spec, text, font))]
pub fn render_stamp(
    source: &SourceImage,
    spec: &OverlaySpec,
    text: &TextBlock,
    font: Option<&ResolvedFont>,
) -> ImprintResult<StampRender> {
    let canvas = source.canvas()?;
    let geometry = resolve_rect_geometry(canvas, &spec.rect);

    let mut overlay = OverlayLayer::new(canvas)?;
    overlay.fill_rounded_rect(geometry, spec.rect.color, spec.rect.opacity);

    let mut placements = Vec::new();
    if !text.is_empty() {
        let font = font
            .ok_or_else(|| ImprintError::font("text lines present but no font was resolved"))?;
        let mut shaper = TextShaper::new(font, spec.font.size_px as f32, TEXT_BRUSH)?;
        placements = layout_text_block(text, geometry, &mut shaper)?;

        let font_data = vello_cpu::peniko::FontData::new(
            vello_cpu::peniko::Blob::from(font.bytes.clone()),
            font.index,
        );
        for placement in &placements {
            let layout = shaper.shape_line(&placement.text);
            overlay.draw_text_line(&font_data, &layout, placement.x, placement.y);
        }
    }

    tracing::debug!(?geometry, lines = placements.len(), "stamp layout resolved");

    let mut composed = source.rgba8_premul.clone();
    over_in_place(&mut composed, &overlay.into_premul_rgba8(), 1.0)?;
    let data = flatten_to_rgb8(&composed)?;

    Ok(StampRender {
        frame: FrameRGB {
            width: canvas.width,
            height: canvas.height,
            data,
        },
        geometry,
        placements,
    })
}

/// Stamp an image file and write the result as PNG.
///
/// The primary one-shot filesystem API: validate, load, compose, encode.
/// Output is always PNG regardless of the `out_path` extension, and no file
/// is written unless the whole pipeline succeeded.
#[tracing::instrument(skip(params))]
pub fn stamp_to_png(params: &StampParams) -> ImprintResult<StampOutcome> {
    params.spec.validate()?;

    let source = load_image(&params.image_path)?;
    let text = TextBlock::from_path(&params.text_path)?;

    // Fonts are only touched when something will be drawn with them; the
    // rectangle-only path must work on hosts with no fonts at all.
    let font = if text.is_empty() {
        None
    } else {
        Some(resolve_font(params.spec.font.source.as_deref())?)
    };

    let render = render_stamp(&source, &params.spec, &text, font.as_ref())?;
    write_png(&params.out_path, &render.frame)?;

    Ok(StampOutcome {
        canvas: Canvas {
            width: render.frame.width,
            height: render.frame.height,
        },
        geometry: render.geometry,
        placements: render.placements,
        font_fallback: font.map(|f| f.fallback).unwrap_or(false),
    })
}

fn write_png(path: &Path, frame: &FrameRGB) -> ImprintResult<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent).map_err(|e| {
            ImprintError::encode(format!("create output dir '{}': {e}", parent.display()))
        })?;
    }
    image::save_buffer_with_format(
        path,
        &frame.data,
        frame.width,
        frame.height,
        image::ColorType::Rgb8,
        image::ImageFormat::Png,
    )
    .map_err(|e| ImprintError::encode(format!("write png '{}': {e}", path.display())))
}
