use crate::colour::{colours, Colour};
use crate::paper::PaperStyle;
use crate::surfacesize::SurfaceSize;
use crate::units::Px;
use crate::NotesError;

/// Everything a single render needs, as one immutable snapshot. Nothing about a
/// render is taken from ambient state.
///
/// ```
/// use handnote::{RenderConfig, PaperStyle, Px};
/// use handnote::surfacesize::A5;
///
/// let mut config = RenderConfig::default();
/// config
///     .text("Dear diary,\n\ntoday I learned Rust.")
///     .font_family("Caveat")
///     .font_size(Px(28.0))
///     .paper_style(PaperStyle::Lined)
///     .size(A5);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct RenderConfig {
    /// The note text. Newlines start new lines; blank lines leave gaps.
    pub text: String,
    /// The font family to write with, e.g. `"Caveat"` or the generic `"cursive"`
    pub font_family: String,
    /// The nominal size of the writing
    pub font_size: Px,
    /// Line spacing as a multiple of the font size
    pub line_height: f32,
    pub pen_colour: Colour,
    pub background_colour: Colour,
    pub paper_style: PaperStyle,
    /// Surface width in pixels
    pub width: u32,
    /// Surface height in pixels
    pub height: u32,
}

impl Default for RenderConfig {
    fn default() -> Self {
        RenderConfig {
            text: String::new(),
            font_family: "cursive".to_string(),
            font_size: Px(24.0),
            line_height: 1.5,
            pen_colour: colours::BLACK,
            background_colour: colours::WHITE,
            paper_style: PaperStyle::Plain,
            width: 800,
            height: 1000,
        }
    }
}

impl RenderConfig {
    /// Create a configuration with the default styling for some text
    pub fn new<S: ToString>(text: S) -> RenderConfig {
        RenderConfig {
            text: text.to_string(),
            ..Default::default()
        }
    }

    /// Set the text, modifying `self`
    pub fn text<S: ToString>(&mut self, text: S) -> &mut Self {
        self.text = text.to_string();
        self
    }

    /// Set the font family, modifying `self`
    pub fn font_family<S: ToString>(&mut self, family: S) -> &mut Self {
        self.font_family = family.to_string();
        self
    }

    /// Set the font size, modifying `self`
    pub fn font_size(&mut self, size: Px) -> &mut Self {
        self.font_size = size;
        self
    }

    /// Set the line-height multiplier, modifying `self`
    pub fn line_height(&mut self, multiplier: f32) -> &mut Self {
        self.line_height = multiplier;
        self
    }

    /// Set the pen (text) colour, modifying `self`
    pub fn pen_colour(&mut self, colour: Colour) -> &mut Self {
        self.pen_colour = colour;
        self
    }

    /// Set the background colour, modifying `self`
    pub fn background_colour(&mut self, colour: Colour) -> &mut Self {
        self.background_colour = colour;
        self
    }

    /// Set the paper style, modifying `self`
    pub fn paper_style(&mut self, style: PaperStyle) -> &mut Self {
        self.paper_style = style;
        self
    }

    /// Set the surface dimensions, modifying `self`
    pub fn size(&mut self, size: SurfaceSize) -> &mut Self {
        self.width = size.0;
        self.height = size.1;
        self
    }

    /// The vertical distance between consecutive lines
    pub fn line_spacing(&self) -> Px {
        self.font_size * self.line_height
    }

    /// Check that the configuration can be rendered
    pub fn validate(&self) -> Result<(), NotesError> {
        if !self.font_size.is_finite() || self.font_size <= Px(0.0) {
            return Err(NotesError::InvalidConfig(format!(
                "font size must be positive, got {}",
                self.font_size
            )));
        }
        if !self.line_height.is_finite() || self.line_height <= 0.0 {
            return Err(NotesError::InvalidConfig(format!(
                "line height must be positive, got {}",
                self.line_height
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn setters_chain() {
        let mut config = RenderConfig::new("Hello world");
        config
            .font_size(Px(20.0))
            .line_height(1.5)
            .pen_colour(colours::INK_BLUE)
            .paper_style(PaperStyle::Grid)
            .size((200, 400));

        assert_eq!(config.text, "Hello world");
        assert_eq!(config.line_spacing(), Px(30.0));
        assert_eq!((config.width, config.height), (200, 400));
        assert_eq!(config.paper_style, PaperStyle::Grid);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn rejects_unrenderable_sizes() {
        let mut config = RenderConfig::default();
        config.font_size(Px(0.0));
        assert!(matches!(config.validate(), Err(NotesError::InvalidConfig(_))));

        config.font_size(Px(f32::NAN));
        assert!(config.validate().is_err());

        config.font_size(Px(16.0)).line_height(-1.0);
        assert!(config.validate().is_err());

        config.line_height(f32::INFINITY);
        assert!(config.validate().is_err());
    }
}
