use crate::font::Font;
use crate::NotesError;
use id_arena::{Arena, Id};
use log::{debug, warn};
use std::collections::HashMap;
use std::path::Path;

/// Resolves font-family names (as a user would type them, e.g. `"Caveat"` or the
/// generic `"cursive"`) to loaded [Font]s.
///
/// Font sources are registered up-front: in-memory font data, font directories,
/// and optionally the fonts installed on the system. Resolution queries those
/// sources by family name and then falls back to the generic cursive and
/// sans-serif families, so a render can go ahead even if the exact handwriting
/// font isn't available. Resolved fonts are parsed once and cached by family.
///
/// ```
/// use handnote::{FontLibrary, NotesError};
///
/// let mut library = FontLibrary::new();
/// // nothing registered, so even the fallbacks come up empty
/// let err = library.resolve("Caveat").unwrap_err();
/// assert!(matches!(err, NotesError::FontNotFound(_)));
/// ```
pub struct FontLibrary {
    db: fontdb::Database,
    fonts: Arena<Font>,
    by_family: HashMap<String, Id<Font>>,
}

impl Default for FontLibrary {
    fn default() -> Self {
        Self::new()
    }
}

impl FontLibrary {
    /// Create an empty library with no font sources
    pub fn new() -> FontLibrary {
        FontLibrary {
            db: fontdb::Database::new(),
            fonts: Arena::new(),
            by_family: HashMap::new(),
        }
    }

    /// Make the fonts installed on this system available for resolution
    pub fn with_system_fonts(mut self) -> FontLibrary {
        self.db.load_system_fonts();
        debug!("loaded {} system font faces", self.db.len());
        self
    }

    /// Register raw font data (TTF, OTF or a collection) as a font source
    pub fn add_font_data(&mut self, data: Vec<u8>) {
        self.db.load_font_data(data);
    }

    /// Register every font found (recursively) in a directory as a font source
    pub fn add_font_dir<P: AsRef<Path>>(&mut self, path: P) {
        self.db.load_fonts_dir(path);
    }

    /// Choose the installed family that stands in for the generic `cursive`
    /// family, which is also the first fallback for unknown families
    pub fn set_cursive_family<S: Into<String>>(&mut self, family: S) {
        self.db.set_cursive_family(family);
    }

    /// Choose the installed family that stands in for the generic `sans-serif`
    /// family, the last fallback for unknown families
    pub fn set_sans_serif_family<S: Into<String>>(&mut self, family: S) {
        self.db.set_sans_serif_family(family);
    }

    /// Resolve and borrow the font for a family in one step
    pub fn font(&mut self, family: &str) -> Result<&Font, NotesError> {
        let id = self.resolve(family)?;
        self.fonts
            .get(id)
            .ok_or_else(|| NotesError::FontNotFound(family.to_string()))
    }

    /// Resolve a family name to a font, loading and caching it on first use.
    ///
    /// The lookup order is: the named family, the generic cursive family, the
    /// generic sans-serif family. Returns [NotesError::FontNotFound] if none of
    /// them can be loaded.
    pub fn resolve(&mut self, family: &str) -> Result<Id<Font>, NotesError> {
        let key = family_key(family);
        if let Some(id) = self.by_family.get(&key) {
            return Ok(*id);
        }

        let candidates = [
            generic_family(&key).unwrap_or(fontdb::Family::Name(family.trim())),
            fontdb::Family::Cursive,
            fontdb::Family::SansSerif,
        ];

        for (i, candidate) in candidates.iter().enumerate() {
            let query = fontdb::Query {
                families: std::slice::from_ref(candidate),
                weight: fontdb::Weight::NORMAL,
                stretch: fontdb::Stretch::Normal,
                style: fontdb::Style::Normal,
            };
            let Some(face_id) = self.db.query(&query) else {
                continue;
            };

            let loaded = self
                .db
                .with_face_data(face_id, |data, index| Font::load_indexed(data.to_vec(), index));
            match loaded {
                Some(Ok(font)) => {
                    if i > 0 {
                        warn!("font family `{family}` is unavailable, falling back to {candidate:?}");
                    }
                    debug!(
                        "resolved font family `{family}` to `{}`",
                        font.name().unwrap_or_else(|| "<unnamed>".to_string())
                    );
                    let id = self.fonts.alloc(font);
                    self.by_family.insert(key, id);
                    return Ok(id);
                }
                Some(Err(e)) => warn!("skipping unparseable face for {candidate:?}: {e}"),
                None => warn!("font data for {candidate:?} could not be read"),
            }
        }

        Err(NotesError::FontNotFound(family.to_string()))
    }
}

fn family_key(family: &str) -> String {
    family.trim().trim_matches(['"', '\'']).to_lowercase()
}

fn generic_family(key: &str) -> Option<fontdb::Family<'static>> {
    match key {
        "cursive" => Some(fontdb::Family::Cursive),
        "sans-serif" => Some(fontdb::Family::SansSerif),
        "serif" => Some(fontdb::Family::Serif),
        "monospace" => Some(fontdb::Family::Monospace),
        "fantasy" => Some(fontdb::Family::Fantasy),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MONO: &[u8] = include_bytes!("../assets/DejaVuSansMono.ttf");

    fn mono_library() -> FontLibrary {
        let mut library = FontLibrary::new();
        library.add_font_data(MONO.to_vec());
        library
    }

    #[test]
    fn family_keys_ignore_case_and_quotes() {
        assert_eq!(family_key("  'Homemade Apple' "), "homemade apple");
        assert_eq!(family_key("\"Caveat\""), "caveat");
    }

    #[test]
    fn generic_names_map_to_generic_families() {
        assert_eq!(generic_family("cursive"), Some(fontdb::Family::Cursive));
        assert_eq!(generic_family("caveat"), None);
    }

    #[test]
    fn empty_library_reports_missing_family() {
        let mut library = FontLibrary::new();
        match library.resolve("Indie Flower") {
            Err(NotesError::FontNotFound(family)) => assert_eq!(family, "Indie Flower"),
            other => panic!("expected FontNotFound, got {:?}", other.map(|_| ())),
        }
    }

    #[test]
    fn registered_fonts_resolve_once() {
        let mut library = mono_library();
        let first = library.resolve("DejaVu Sans Mono").expect("font is registered");
        let again = library.resolve(" 'dejavu sans mono' ").expect("font is cached");
        assert_eq!(first, again);

        let font = library.font("DejaVu Sans Mono").expect("font is cached");
        assert_eq!(font.family().as_deref(), Some("DejaVu Sans Mono"));
    }

    #[test]
    fn unknown_families_fall_back_to_cursive_then_sans_serif() {
        let mut library = mono_library();
        library.set_cursive_family("Missing Script");
        library.set_sans_serif_family("Missing Sans");
        assert!(library.resolve("Caveat").is_err());

        library.set_sans_serif_family("DejaVu Sans Mono");
        let font = library.font("Caveat").expect("falls back to sans-serif");
        assert_eq!(font.family().as_deref(), Some("DejaVu Sans Mono"));

        let mut library = mono_library();
        library.set_cursive_family("DejaVu Sans Mono");
        assert!(library.resolve("cursive").is_ok());
        assert!(library.resolve("Homemade Apple").is_ok());
    }
}
