use std::path::Path;

use crate::foundation::{
    error::{ImprintError, ImprintResult},
    geom::Canvas,
};

/// A decoded source image: premultiplied RGBA8, row-major, tightly packed.
#[derive(Clone, Debug)]
pub struct SourceImage {
    pub width: u32,
    pub height: u32,
    pub rgba8_premul: Vec<u8>,
}

impl SourceImage {
    pub fn canvas(&self) -> ImprintResult<Canvas> {
        Canvas::new(self.width, self.height)
    }
}

/// Read and decode an image file.
///
/// Any container the `image` crate can decode is accepted; the pixels are
/// normalized to premultiplied RGBA8 regardless of the source format.
pub fn load_image(path: &Path) -> ImprintResult<SourceImage> {
    let bytes = std::fs::read(path).map_err(|e| {
        ImprintError::resource(format!("read image '{}': {e}", path.display()))
    })?;
    decode_image(&bytes)
}

/// Decode image bytes already in memory.
pub fn decode_image(bytes: &[u8]) -> ImprintResult<SourceImage> {
    let dyn_img = image::load_from_memory(bytes)
        .map_err(|e| ImprintError::resource(format!("decode image: {e}")))?;
    let rgba = dyn_img.to_rgba8();
    let (width, height) = rgba.dimensions();

    let mut rgba8_premul = rgba.into_raw();
    premultiply_rgba8_in_place(&mut rgba8_premul);

    Ok(SourceImage {
        width,
        height,
        rgba8_premul,
    })
}

fn premultiply_rgba8_in_place(rgba: &mut [u8]) {
    for px in rgba.chunks_exact_mut(4) {
        let a = px[3] as u16;
        if a == 0 {
            px[0] = 0;
            px[1] = 0;
            px[2] = 0;
            continue;
        }
        px[0] = ((px[0] as u16 * a + 127) / 255) as u8;
        px[1] = ((px[1] as u16 * a + 127) / 255) as u8;
        px[2] = ((px[2] as u16 * a + 127) / 255) as u8;
    }
}
