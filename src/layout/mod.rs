//! Text layout utilities for positioning notes on a surface.
//!
//! [`wrap_text`](crate::layout::wrap_text) splits raw text into lines that fit a
//! maximum width using greedy word wrapping, and assigns every line its vertical
//! position. Measuring is left to the caller through a closure, so the layout can
//! run against a real [`Font`](crate::Font) or against fixed-width test metrics.
//!
//! # Example
//!
//! ```
//! use handnote::Px;
//! use handnote::layout::{wrap_text, Margins};
//!
//! let margins = Margins::note();
//! let max_width = margins.content_width(Px(200.0));
//! let measure = |s: &str| Px(15.0 * s.chars().count() as f32);
//!
//! let lines = wrap_text("Hello world", measure, max_width, margins.top, Px(30.0));
//! assert_eq!(lines.len(), 2);
//! assert_eq!(lines[0].text, "Hello");
//! assert_eq!(lines[1].origin_y, lines[0].origin_y + Px(30.0));
//! ```

mod margins;
mod text;

pub use margins::*;
pub use text::*;
