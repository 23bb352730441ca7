use std::path::Path;

use crate::foundation::error::{ImprintError, ImprintResult};

/// A font ready for shaping and rasterization: raw file bytes plus the face
/// index inside them (relevant for collections).
#[derive(Clone, Debug)]
pub struct ResolvedFont {
    pub bytes: Vec<u8>,
    pub index: u32,
    /// Family name reported by the system database when the fallback chose
    /// the face. Used to pin the matching family during shaping.
    pub family_hint: Option<String>,
    /// True when the system fallback supplied the face instead of the
    /// requested source.
    pub fallback: bool,
}

/// Resolve the font used for plaque text.
///
/// Two explicit steps, no exceptions as control flow:
/// 1. an explicit `source` path is read and checked for at least one
///    parseable face;
/// 2. failing that (or given no source at all), the system font database
///    answers a generic query: sans-serif, then serif, then monospace, then
///    any face it has.
///
/// An unreadable or unparseable explicit source is not an error; it degrades
/// to step 2 with a warning. Only an empty step 2 is a hard
/// [`ImprintError::Font`].
pub fn resolve_font(source: Option<&Path>) -> ImprintResult<ResolvedFont> {
    if let Some(path) = source {
        match std::fs::read(path) {
            Ok(bytes) if is_font_data(&bytes) => {
                return Ok(ResolvedFont {
                    bytes,
                    index: 0,
                    family_hint: None,
                    fallback: false,
                });
            }
            Ok(_) => {
                tracing::warn!(
                    source = %path.display(),
                    "requested font is not a parseable font file, falling back to a system face"
                );
            }
            Err(e) => {
                tracing::warn!(
                    source = %path.display(),
                    error = %e,
                    "requested font unavailable, falling back to a system face"
                );
            }
        }
    }
    system_fallback()
}

fn is_font_data(bytes: &[u8]) -> bool {
    let mut db = fontdb::Database::new();
    db.load_font_data(bytes.to_vec());
    db.faces().next().is_some()
}

fn system_fallback() -> ImprintResult<ResolvedFont> {
    let mut db = fontdb::Database::new();
    db.load_system_fonts();

    let families = [
        fontdb::Family::SansSerif,
        fontdb::Family::Serif,
        fontdb::Family::Monospace,
    ];
    let query = fontdb::Query {
        families: &families,
        weight: fontdb::Weight::NORMAL,
        stretch: fontdb::Stretch::Normal,
        style: fontdb::Style::Normal,
    };

    let id = db
        .query(&query)
        .or_else(|| db.faces().next().map(|f| f.id))
        .ok_or_else(|| ImprintError::font("no system fonts available for fallback"))?;

    let family_hint = db
        .face(id)
        .and_then(|info| info.families.first().map(|(name, _)| name.clone()));

    db.with_face_data(id, move |data, face_index| ResolvedFont {
        bytes: data.to_vec(),
        index: face_index,
        family_hint,
        fallback: true,
    })
    .ok_or_else(|| ImprintError::font("system font face data could not be loaded"))
}
