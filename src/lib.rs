//! Turn typed text into images that look like handwritten notes.
//!
//! Text is word-wrapped between fixed margins and drawn word by word, each word
//! slightly offset, resized and rotated, over an optional ruled or grid paper
//! background. The result can be exported as PNG or JPEG.
//!
//! ```no_run
//! use handnote::{FontLibrary, ImageFormat, PaperStyle, RenderConfig, Renderer, Surface};
//!
//! let mut fonts = FontLibrary::new();
//! fonts.add_font_data(std::fs::read("Caveat-Regular.ttf").expect("can read font"));
//!
//! let mut config = RenderConfig::new("Meeting notes\n\n- ship it");
//! config.font_family("Caveat").paper_style(PaperStyle::Lined);
//!
//! let mut renderer = Renderer::new(fonts);
//! let mut surface = Surface::new(config.width, config.height);
//! renderer.render(&mut surface, &config).expect("can render");
//!
//! let png = handnote::export(&surface, ImageFormat::Png).expect("can export");
//! std::fs::write(&png.filename, &png.bytes).expect("can save");
//! ```

mod colour;
pub use colour::*;

mod config;
pub use config::*;

mod error;
pub use error::*;

mod export;
pub use export::*;

mod font;
pub use font::*;

mod jitter;
pub use jitter::*;

/// Utility functions and structures to lay out text on a surface
pub mod layout;

mod library;
pub use library::*;

mod paper;
pub use paper::*;

mod render;
pub use render::*;

mod surface;
pub use surface::*;

/// Pre-defined surface sizes and custom size parsing
pub mod surfacesize;

mod transform;
pub use transform::*;

mod units;
pub use units::*;

/// Re-export the rasterizer, mostly for custom [Typeface] implementations
pub use tiny_skia;
