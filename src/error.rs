use thiserror::Error;

/// All errors that the crate can generate
#[derive(Error, Debug)]
pub enum NotesError {
    #[error("drawing surface unavailable: {0}")]
    /// The surface has no backing pixel storage (allocation failed or the
    /// requested dimensions are too large). Nothing is drawn.
    ResourceUnavailable(String),

    #[error("no font could be resolved for family `{0}`")]
    /// Neither the requested font family nor any of the generic fallbacks are
    /// available in the [`FontLibrary`](crate::FontLibrary)
    FontNotFound(String),

    #[error(transparent)]
    /// [owned_ttf_parser] failed to parse the font
    FaceParsing(#[from] owned_ttf_parser::FaceParsingError),

    #[error("the canvas appears to be empty, render some notes before exporting")]
    /// An export was requested before anything was rendered onto the surface
    EmptyCanvas,

    #[error(transparent)]
    /// [image] failed to encode the surface
    Encoding(#[from] image::ImageError),

    #[error("invalid render configuration: {0}")]
    /// The render configuration contains values that can't be rendered
    InvalidConfig(String),

    #[error("invalid surface size `{0}`, expected `WIDTHxHEIGHT`")]
    /// A custom surface size string couldn't be parsed
    InvalidSize(String),
}

impl NotesError {
    /// Whether the action that produced this error can simply be tried again
    /// (typically after rendering), as opposed to needing different inputs
    pub fn is_retryable(&self) -> bool {
        matches!(self, NotesError::EmptyCanvas | NotesError::Encoding(_))
    }
}
