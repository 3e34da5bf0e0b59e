//! Pre-defined surface sizes for common note formats.
//!
//! Sizes are given in pixels as (width, height). Paper formats are provided in
//! portrait orientation at 96 pixels per inch; use the
//! [`SurfaceOrientation`](crate::surfacesize::SurfaceOrientation) trait to
//! convert between portrait and landscape.
//!
//! # Available Sizes
//!
//! ## Paper
//! `LETTER`, `LEGAL`, `A4`, `A5`, `INDEX_CARD`
//!
//! ## Screen & social
//! `SQUARE`, `STORY`, `HD`, `FULL_HD`
//!
//! Any other size can be given as a `WIDTHxHEIGHT` string through [`parse_size`].
//!
//! # Example
//!
//! ```
//! use handnote::surfacesize::{self, SurfaceOrientation, A4};
//!
//! let landscape = A4.landscape();
//! assert_eq!(landscape, (1123, 794));
//!
//! let custom = surfacesize::parse_size("1200x900").expect("valid size");
//! assert_eq!(custom, (1200, 900));
//! ```

use crate::NotesError;

/// Surface dimensions as (width, height) in pixels.
pub type SurfaceSize = (u32, u32);

// paper sizes at 96 dpi
pub const LETTER: SurfaceSize = (816, 1056);
pub const LEGAL: SurfaceSize = (816, 1344);
pub const A4: SurfaceSize = (794, 1123);
pub const A5: SurfaceSize = (559, 794);
pub const INDEX_CARD: SurfaceSize = (480, 288);

// screen sizes
pub const SQUARE: SurfaceSize = (1080, 1080);
pub const STORY: SurfaceSize = (1080, 1920);
pub const HD: SurfaceSize = (1280, 720);
pub const FULL_HD: SurfaceSize = (1920, 1080);

/// Convert surface sizes between portrait and landscape orientations.
pub trait SurfaceOrientation {
    /// Returns the size in portrait orientation (width ≤ height).
    fn portrait(self) -> Self;
    /// Returns the size in landscape orientation (width ≥ height).
    fn landscape(self) -> Self;
}

impl SurfaceOrientation for SurfaceSize {
    fn portrait(self) -> Self {
        if self.0 <= self.1 {
            self
        } else {
            (self.1, self.0)
        }
    }

    fn landscape(self) -> SurfaceSize {
        if self.0 >= self.1 {
            self
        } else {
            (self.1, self.0)
        }
    }
}

/// Look up a preset by its (case-insensitive) name, e.g. `"a4"` or `"full_hd"`
pub fn preset(name: &str) -> Option<SurfaceSize> {
    let size = match name.trim().to_ascii_lowercase().replace('-', "_").as_str() {
        "letter" => LETTER,
        "legal" => LEGAL,
        "a4" => A4,
        "a5" => A5,
        "index_card" => INDEX_CARD,
        "square" => SQUARE,
        "story" => STORY,
        "hd" => HD,
        "full_hd" => FULL_HD,
        _ => return None,
    };
    Some(size)
}

/// Parse a custom `WIDTHxHEIGHT` size such as `"800x600"`. Both dimensions must
/// be positive integers.
pub fn parse_size(s: &str) -> Result<SurfaceSize, NotesError> {
    let invalid = || NotesError::InvalidSize(s.to_string());
    let (width, height) = s.trim().split_once(['x', 'X']).ok_or_else(invalid)?;
    let width: u32 = width.trim().parse().map_err(|_| invalid())?;
    let height: u32 = height.trim().parse().map_err(|_| invalid())?;
    if width == 0 || height == 0 {
        return Err(invalid());
    }
    Ok((width, height))
}
