use crate::{NotesError, Px};
use owned_ttf_parser::{AsFaceRef, GlyphId, OutlineBuilder, OwnedFace};
use tiny_skia::{Path, PathBuilder};

/// Anything that can measure and outline a run of text. The renderer only ever
/// talks to fonts through this trait, which lets callers plug in their own glyph
/// sources (or a deterministic stand-in when testing exact pixel output).
///
/// All coordinates use the surface's y-down system with the origin at the _top_
/// left of the text box (a "top" text baseline), so a path placed at `(x, y)`
/// has its em box starting at `y`.
pub trait Typeface {
    /// The horizontal advance of `text` when set at `size`
    fn width_of_text(&self, text: &str, size: Px) -> Px;

    /// The filled outline of `text` set at `size`, or [None] if the text has no
    /// visible glyphs (e.g. only whitespace)
    fn text_path(&self, text: &str, size: Px) -> Option<Path>;
}

/// A parsed font object. Fonts can be TTF or OTF fonts. Glyphs are drawn from
/// their outlines, so any scalable font works; no hinting is applied.
///
/// Fonts are usually obtained through a [`FontLibrary`](crate::FontLibrary),
/// which resolves family names, but can be loaded directly from bytes too.
pub struct Font {
    pub face: OwnedFace,
}

impl Font {
    /// Load face `index` out of raw font bytes (0 for anything but a `.ttc`
    /// collection), returning an error if the face could not be parsed
    pub fn load_indexed(bytes: Vec<u8>, index: u32) -> Result<Font, NotesError> {
        let face = OwnedFace::from_vec(bytes, index)?;

        Ok(Font { face })
    }

    /// Obtain the full name of the font, if it declares one
    pub fn name(&self) -> Option<String> {
        self.find_name(owned_ttf_parser::name_id::FULL_NAME)
    }

    /// Obtain the family name of the font, if it declares one
    pub fn family(&self) -> Option<String> {
        self.find_name(owned_ttf_parser::name_id::FAMILY)
    }

    fn find_name(&self, name_id: u16) -> Option<String> {
        self.face
            .as_face_ref()
            .names()
            .into_iter()
            .find(|name| name.name_id == name_id && name.is_unicode())
            .and_then(|name| name.to_string())
    }

    fn scaling(&self, size: Px) -> f32 {
        *size / self.face.as_face_ref().units_per_em() as f32
    }

    /// Calculate the ascent (distance from the baseline to the top of the font) for the given font size
    pub fn ascent(&self, size: Px) -> Px {
        Px(self.scaling(size) * self.face.as_face_ref().ascender() as f32)
    }

    /// The glyph used to draw `ch`: its own glyph, else the replacement
    /// character, else a question mark. Characters with none of these are skipped.
    fn glyph_for(&self, ch: char) -> Option<GlyphId> {
        let face = self.face.as_face_ref();
        face.glyph_index(ch)
            .or_else(|| face.glyph_index('\u{FFFD}'))
            .or_else(|| face.glyph_index('?'))
    }

    fn advance(&self, gid: GlyphId) -> f32 {
        self.face
            .as_face_ref()
            .glyph_hor_advance(gid)
            .unwrap_or_default() as f32
    }
}

impl Typeface for Font {
    fn width_of_text(&self, text: &str, size: Px) -> Px {
        let scaling = self.scaling(size);
        text.chars()
            .filter(|ch| !ch.is_control())
            .filter_map(|ch| self.glyph_for(ch))
            .map(|gid| Px(scaling * self.advance(gid)))
            .sum()
    }

    fn text_path(&self, text: &str, size: Px) -> Option<Path> {
        let scaling = self.scaling(size);
        let mut builder = PathBuilder::new();
        let mut pen = GlyphPen {
            path: &mut builder,
            x: 0.0,
            baseline: *self.ascent(size),
            scaling,
        };

        for gid in text
            .chars()
            .filter(|ch| !ch.is_control())
            .filter_map(|ch| self.glyph_for(ch))
        {
            // glyphs without outlines (spaces) still advance the pen
            let _ = self.face.as_face_ref().outline_glyph(gid, &mut pen);
            pen.x += scaling * self.advance(gid);
        }

        builder.finish()
    }
}

/// Feeds glyph outlines (font units, y-up, baseline origin) into a surface path
/// (pixels, y-down, top origin)
struct GlyphPen<'a> {
    path: &'a mut PathBuilder,
    x: f32,
    baseline: f32,
    scaling: f32,
}

impl GlyphPen<'_> {
    fn map(&self, x: f32, y: f32) -> (f32, f32) {
        (self.x + x * self.scaling, self.baseline - y * self.scaling)
    }
}

impl OutlineBuilder for GlyphPen<'_> {
    fn move_to(&mut self, x: f32, y: f32) {
        let (x, y) = self.map(x, y);
        self.path.move_to(x, y);
    }

    fn line_to(&mut self, x: f32, y: f32) {
        let (x, y) = self.map(x, y);
        self.path.line_to(x, y);
    }

    fn quad_to(&mut self, x1: f32, y1: f32, x: f32, y: f32) {
        let (x1, y1) = self.map(x1, y1);
        let (x, y) = self.map(x, y);
        self.path.quad_to(x1, y1, x, y);
    }

    fn curve_to(&mut self, x1: f32, y1: f32, x2: f32, y2: f32, x: f32, y: f32) {
        let (x1, y1) = self.map(x1, y1);
        let (x2, y2) = self.map(x2, y2);
        let (x, y) = self.map(x, y);
        self.path.cubic_to(x1, y1, x2, y2, x, y);
    }

    fn close(&mut self) {
        self.path.close();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MONO: &[u8] = include_bytes!("../assets/DejaVuSansMono.ttf");

    fn mono() -> Font {
        Font::load_indexed(MONO.to_vec(), 0).expect("can parse font")
    }

    #[test]
    fn reads_names() {
        let font = mono();
        assert_eq!(font.family().as_deref(), Some("DejaVu Sans Mono"));
        assert!(font.name().is_some());
    }

    #[test]
    fn rejects_garbage() {
        assert!(matches!(
            Font::load_indexed(vec![0; 16], 0),
            Err(NotesError::FaceParsing(_))
        ));
    }

    #[test]
    fn glyphs_hang_below_the_top_of_the_text_box() {
        let font = mono();
        let size = Px(20.0);
        let ascent = *font.ascent(size);
        let bounds = font.text_path("H", size).expect("H has an outline").bounds();

        assert!(bounds.top() >= 0.0);
        assert!(bounds.top() < ascent);
        // H sits on the baseline, `ascent` below the origin
        assert!((bounds.bottom() - ascent).abs() < 0.5, "{bounds:?}");
        assert!(bounds.left() >= 0.0);
        assert!(bounds.right() <= *font.width_of_text("H", size));
    }

    #[test]
    fn outlines_follow_the_pen() {
        let font = mono();
        let size = Px(20.0);
        let one = font.text_path("H", size).expect("outline").bounds();
        let two = font.text_path("HH", size).expect("outline").bounds();
        let advance = *font.width_of_text("H", size);
        assert!((two.right() - (one.right() + advance)).abs() < 0.01);
        assert_eq!(two.top(), one.top());
    }

    #[test]
    fn spaces_advance_without_ink() {
        let font = mono();
        assert!(font.width_of_text(" ", Px(20.0)) > Px(0.0));
        assert!(font.text_path(" ", Px(20.0)).is_none());
        assert!(font.text_path("", Px(20.0)).is_none());
    }

    #[test]
    fn widths_scale_with_size() {
        let font = mono();
        let small = font.width_of_text("Hello there", Px(10.0));
        let large = font.width_of_text("Hello there", Px(30.0));
        assert!((*large - *small * 3.0).abs() < 0.01);
        // monospaced
        let i = font.width_of_text("i", Px(10.0));
        assert!((*font.width_of_text("mmm", Px(10.0)) - *i * 3.0).abs() < 0.01);
    }

    #[test]
    fn unmapped_characters_use_the_replacement_glyph() {
        let font = mono();
        let size = Px(20.0);
        let unmapped = '\u{10FFFD}';
        assert!(font.face.as_face_ref().glyph_index(unmapped).is_none());

        let replacement = font.width_of_text("\u{FFFD}", size);
        assert!(replacement > Px(0.0));
        assert_eq!(font.width_of_text(&unmapped.to_string(), size), replacement);
        assert!(font.text_path(&unmapped.to_string(), size).is_some());
    }

    #[test]
    fn control_characters_are_skipped() {
        let font = mono();
        assert_eq!(
            font.width_of_text("a\nb\t", Px(20.0)),
            font.width_of_text("ab", Px(20.0))
        );
    }
}
