use std::path::Path;

use crate::{
    assets::font::ResolvedFont,
    foundation::error::{ImprintError, ImprintResult},
};

/// Ordered visual lines read from a UTF-8 text file.
///
/// Splitting strips line terminators and trailing whitespace only; leading
/// and interior whitespace is preserved so deliberate indentation survives.
/// A line that trims to nothing is kept as an empty visual line.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TextBlock {
    lines: Vec<String>,
}

impl TextBlock {
    /// Read a text file and split it into visual lines.
    pub fn from_path(path: &Path) -> ImprintResult<Self> {
        let raw = std::fs::read_to_string(path).map_err(|e| {
            ImprintError::resource(format!("read text '{}': {e}", path.display()))
        })?;
        Ok(Self::from_text(&raw))
    }

    /// Split already-loaded text into visual lines.
    pub fn from_text(raw: &str) -> Self {
        let lines = raw.lines().map(|l| l.trim_end().to_string()).collect();
        Self { lines }
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }
}

/// RGBA8 brush color used by Parley text layout.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TextBrushRgba8 {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
    /// Alpha channel.
    pub a: u8,
}

/// Stateful helper for shaping plaque text with Parley from raw font bytes.
///
/// The font registered at construction is pinned as the family for every
/// line; system font enumeration never runs here.
pub struct TextShaper {
    font_ctx: parley::FontContext,
    layout_ctx: parley::LayoutContext<TextBrushRgba8>,
    family: String,
    size_px: f32,
    brush: TextBrushRgba8,
}

// Parley's contexts carry no `Debug`, so show them opaquely.
impl std::fmt::Debug for TextShaper {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TextShaper")
            .field("family", &self.family)
            .field("size_px", &self.size_px)
            .field("brush", &self.brush)
            .finish_non_exhaustive()
    }
}

impl TextShaper {
    pub fn new(font: &ResolvedFont, size_px: f32, brush: TextBrushRgba8) -> ImprintResult<Self> {
        if !size_px.is_finite() || size_px <= 0.0 {
            return Err(ImprintError::validation(
                "font size_px must be finite and > 0",
            ));
        }

        let mut font_ctx = parley::FontContext::default();
        let families = font_ctx
            .collection
            .register_fonts(parley::fontique::Blob::from(font.bytes.clone()), None);

        // Collections register several families; prefer the one the fallback
        // actually matched when a family hint travelled with the bytes.
        let hinted = font.family_hint.as_deref().and_then(|hint| {
            families.iter().find_map(|(id, _)| {
                let name = font_ctx.collection.family_name(*id)?;
                name.eq_ignore_ascii_case(hint).then(|| name.to_string())
            })
        });
        let family = match hinted {
            Some(name) => name,
            None => {
                let first_id = families.first().map(|(id, _)| *id).ok_or_else(|| {
                    ImprintError::font("no font families registered from font bytes")
                })?;
                font_ctx
                    .collection
                    .family_name(first_id)
                    .ok_or_else(|| ImprintError::font("registered font family has no name"))?
                    .to_string()
            }
        };

        Ok(Self {
            font_ctx,
            layout_ctx: parley::LayoutContext::new(),
            family,
            size_px,
            brush,
        })
    }

    /// Registered family the shaper pins for every line.
    pub fn family(&self) -> &str {
        &self.family
    }

    /// Shape one visual line at the pinned family, size, and brush.
    pub fn shape_line(&mut self, line: &str) -> parley::Layout<TextBrushRgba8> {
        let mut builder = self
            .layout_ctx
            .ranged_builder(&mut self.font_ctx, line, 1.0, true);
        builder.push_default(parley::style::StyleProperty::FontStack(
            parley::style::FontStack::Source(std::borrow::Cow::Owned(self.family.clone())),
        ));
        builder.push_default(parley::style::StyleProperty::FontSize(self.size_px));
        builder.push_default(parley::style::StyleProperty::Brush(self.brush));

        let mut layout: parley::Layout<TextBrushRgba8> = builder.build(line);
        layout.break_all_lines(None);
        layout
    }
}
