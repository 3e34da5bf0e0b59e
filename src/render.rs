use crate::config::RenderConfig;
use crate::export::{export, Export, ImageFormat};
use crate::font::Typeface;
use crate::jitter::{JitterSource, RandomJitter};
use crate::layout::{wrap_text, Margins, WrappedLine};
use crate::library::FontLibrary;
use crate::paper::draw_paper;
use crate::surface::Surface;
use crate::transform::Transform;
use crate::units::Px;
use crate::NotesError;
use log::{debug, error};
use tiny_skia::{FillRule, Paint, Pixmap};

/// Renders notes in the fonts of a [FontLibrary], with per-word jitter from a
/// [JitterSource] (random by default).
///
/// ```no_run
/// use handnote::{FontLibrary, ImageFormat, RenderConfig, Renderer, Surface};
///
/// let mut renderer = Renderer::new(FontLibrary::new().with_system_fonts());
/// let mut surface = Surface::new(800, 1000);
/// let config = RenderConfig::new("Remember to buy milk");
///
/// let export = renderer
///     .render_and_export(&mut surface, &config, ImageFormat::Jpeg)
///     .expect("can render and export");
/// std::fs::write(&export.filename, &export.bytes).expect("can write image");
/// ```
pub struct Renderer<J: JitterSource = RandomJitter> {
    pub fonts: FontLibrary,
    pub margins: Margins,
    jitter: J,
}

impl Renderer<RandomJitter> {
    /// A renderer with random per-word jitter
    pub fn new(fonts: FontLibrary) -> Self {
        Renderer::with_jitter(fonts, RandomJitter::new())
    }
}

impl<J: JitterSource> Renderer<J> {
    /// A renderer drawing its per-word jitter from `jitter`
    pub fn with_jitter(fonts: FontLibrary, jitter: J) -> Self {
        Renderer {
            fonts,
            margins: Margins::note(),
            jitter,
        }
    }

    /// Render a note onto the surface, resizing the surface to the configured
    /// dimensions first.
    ///
    /// The font is resolved before anything is drawn: if it can't be found the
    /// surface is left untouched. Renders that draw no glyphs (zero-area
    /// surfaces, blank text) never look a font up.
    pub fn render(&mut self, surface: &mut Surface, config: &RenderConfig) -> Result<(), NotesError> {
        config.validate()?;
        if !draws_glyphs(config) {
            return render_with(surface, config, &NoGlyphs, &mut self.jitter, &self.margins);
        }

        let font = self.fonts.font(&config.font_family).inspect_err(|e| {
            error!("aborting render: {e}");
        })?;
        render_with(surface, config, font, &mut self.jitter, &self.margins)
    }

    /// Render a note and immediately encode the finished surface, which is
    /// what a "download" action does. Encoding only ever reads a surface once
    /// its render has returned.
    pub fn render_and_export(
        &mut self,
        surface: &mut Surface,
        config: &RenderConfig,
        format: ImageFormat,
    ) -> Result<Export, NotesError> {
        self.render(surface, config)?;
        export(surface, format)
    }
}

fn draws_glyphs(config: &RenderConfig) -> bool {
    config.width > 0 && config.height > 0 && !config.text.trim().is_empty()
}

/// Stands in for a font when there is no text to draw
struct NoGlyphs;

impl Typeface for NoGlyphs {
    fn width_of_text(&self, _text: &str, _size: Px) -> Px {
        Px(0.0)
    }

    fn text_path(&self, _text: &str, _size: Px) -> Option<tiny_skia::Path> {
        None
    }
}

/// Renders a note onto a surface with an explicit typeface and jitter source.
///
/// In order, this:
///
/// 1. resizes the surface to the configured dimensions,
/// 2. fills it with the background colour,
/// 3. draws the paper rules,
/// 4. wraps the text to the width between the margins, and
/// 5. draws every line word by word with the pen colour.
///
/// Each word gets its own [`Jitter`](crate::Jitter): it is moved vertically,
/// drawn at a slightly different size and rotated about its top-left corner.
/// Every word is transformed independently, so rotations never accumulate.
/// The pen advances by the width of the word and a space at the _nominal_
/// font size regardless of the jitter, so words never drift into each other.
///
/// Rendering onto a zero-area surface draws nothing and succeeds. Rendering
/// onto a surface without pixel storage fails with
/// [NotesError::ResourceUnavailable] before drawing anything.
pub fn render_with<T, J>(
    surface: &mut Surface,
    config: &RenderConfig,
    typeface: &T,
    jitter: &mut J,
    margins: &Margins,
) -> Result<(), NotesError>
where
    T: Typeface + ?Sized,
    J: JitterSource + ?Sized,
{
    config.validate()?;
    surface.resize(config.width, config.height);

    if surface.is_zero_area() {
        debug!("skipping render onto a zero-area {}x{} surface", config.width, config.height);
        return Ok(());
    }
    if !surface.is_available() {
        error!("aborting render: no pixel storage for a {}x{} surface", config.width, config.height);
        return Err(NotesError::ResourceUnavailable(format!(
            "could not allocate a {}x{} surface",
            config.width, config.height
        )));
    }

    debug!(
        "rendering {} characters in `{}` at {} on a {}x{} {} surface",
        config.text.chars().count(),
        config.font_family,
        config.font_size,
        config.width,
        config.height,
        config.paper_style,
    );

    surface.fill(config.background_colour);
    draw_paper(surface, config.paper_style, margins);

    let max_width = margins.content_width(Px::from(config.width));
    let lines = wrap_text(
        &config.text,
        |s| typeface.width_of_text(s, config.font_size),
        max_width,
        margins.top,
        config.line_spacing(),
    );
    debug!("laid out {} lines", lines.len());

    if let Some(pixmap) = surface.pixmap_mut() {
        let mut paint = Paint::default();
        paint.set_color(config.pen_colour.into());
        paint.anti_alias = true;

        for line in lines.iter() {
            draw_line(pixmap, &paint, line, margins.left, config.font_size, typeface, jitter);
        }
    }

    surface.mark_rendered();
    Ok(())
}

fn draw_line<T, J>(
    pixmap: &mut Pixmap,
    paint: &Paint,
    line: &WrappedLine,
    left: Px,
    font_size: Px,
    typeface: &T,
    jitter: &mut J,
) where
    T: Typeface + ?Sized,
    J: JitterSource + ?Sized,
{
    let mut x = left;
    for word in line.text.split(' ') {
        if !word.is_empty() {
            let jitter = jitter.next_jitter();
            let size = (font_size + jitter.size_delta).max(Px(0.0));
            if let Some(path) = typeface.text_path(word, size) {
                let transform =
                    Transform::rotate(jitter.rotation).with_translate(x, line.origin_y + jitter.y_offset);
                pixmap.fill_path(&path, paint, FillRule::Winding, transform.into(), None);
            }
        }

        // advance at the nominal size so jittered glyphs can't push words around
        x += typeface.width_of_text(&format!("{word} "), font_size);
    }
}
