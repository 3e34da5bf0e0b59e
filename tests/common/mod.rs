#![allow(dead_code)]

use handnote::tiny_skia::{Path, PathBuilder, Rect};
use handnote::{Px, Typeface};

/// A monospaced stand-in font: every character advances half the font size and
/// every non-space character is drawn as a solid block, so tests can predict
/// exactly which pixels get ink.
pub struct BlockFace;

/// Advance of one character as a fraction of the font size
pub const ADVANCE: f32 = 0.5;

impl BlockFace {
    /// The ink box of the `index`th character of a word drawn at (0, 0), as
    /// (left, top, right, bottom)
    pub fn ink_box(index: usize, size: f32) -> (f32, f32, f32, f32) {
        let pen = index as f32 * ADVANCE * size;
        (pen + 0.1 * size, 0.2 * size, pen + 0.4 * size, 0.8 * size)
    }
}

impl Typeface for BlockFace {
    fn width_of_text(&self, text: &str, size: Px) -> Px {
        Px(text.chars().count() as f32 * ADVANCE * size.0)
    }

    fn text_path(&self, text: &str, size: Px) -> Option<Path> {
        let mut builder = PathBuilder::new();
        for (i, ch) in text.chars().enumerate() {
            if ch == ' ' {
                continue;
            }
            let (l, t, r, b) = BlockFace::ink_box(i, size.0);
            builder.push_rect(Rect::from_ltrb(l, t, r, b)?);
        }
        builder.finish()
    }
}

pub const WHITE: [u8; 4] = [255, 255, 255, 255];
