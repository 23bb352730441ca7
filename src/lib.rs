//! Imprint composites a rounded, semi-transparent text plaque onto a raster
//! image and writes the result as PNG.
//!
//! # Pipeline overview
//!
//! 1. **Decode**: source image -> premultiplied RGBA8 ([`SourceImage`])
//! 2. **Resolve**: percentage parameters -> pixel geometry
//!    ([`resolve_rect_geometry`]), text file -> visual lines ([`TextBlock`]),
//!    font source -> face bytes ([`resolve_font`])
//! 3. **Layout**: uniform line height + per-line centering
//!    ([`layout_text_block`])
//! 4. **Rasterize**: rounded rect + glyph runs into a transparent
//!    [`OverlayLayer`]
//! 5. **Composite**: premultiplied `over`, then flatten to straight RGB8 and
//!    encode ([`stamp_to_png`])
//!
//! The key design constraints:
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **Deterministic**: identical inputs produce byte-identical PNG output.
//! - **IO at the edges**: decoding, font resolution, and encoding happen in
//!   the one-shot entry points; geometry and placement are pure functions.
//! - **Premultiplied RGBA8** between decode and flatten; straight RGB8 out.
//! - **Abort on error**: no partial output file is ever produced.
#![forbid(unsafe_code)]

mod assets;
mod composition;
mod foundation;
mod layout;
mod render;

pub use assets::decode::{SourceImage, decode_image, load_image};
pub use assets::font::{ResolvedFont, resolve_font};
pub use assets::text::{TextBlock, TextBrushRgba8, TextShaper};
pub use composition::spec::{FontSpec, OverlaySpec, RectSpec};
pub use foundation::error::{ImprintError, ImprintResult};
pub use foundation::geom::{Canvas, LinePlacement, RectGeometry};
pub use layout::solver::{
    REFERENCE_GLYPH, TextMeasure, layout_text_block, resolve_rect_geometry,
};
pub use render::composite::{PremulRgba8, flatten_to_rgb8, over, over_in_place};
pub use render::overlay::{CORNER_RADIUS_PX, OverlayLayer, TEXT_BRUSH};
pub use render::pipeline::{
    FrameRGB, StampOutcome, StampParams, StampRender, render_stamp, stamp_to_png,
};
