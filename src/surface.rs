use crate::colour::{colours, Colour};
use image::RgbaImage;
use log::warn;
use tiny_skia::Pixmap;

/// The colour a surface holds before anything has been rendered onto it
pub const BLANK_FILL: Colour = colours::WHITE;

/// A raster drawing target with fixed pixel dimensions.
///
/// Each render fully overwrites the surface, starting with a background fill.
/// The surface remembers whether a render has completed on it since it was
/// created or last resized, which is what exporting checks before encoding.
///
/// A surface with a zero width or height is valid but has no pixels: renders
/// onto it draw nothing. A surface whose pixel storage can't be allocated (the
/// dimensions are too large) reports itself as unavailable and renders onto it
/// fail with [`NotesError::ResourceUnavailable`](crate::NotesError::ResourceUnavailable).
pub struct Surface {
    width: u32,
    height: u32,
    pixmap: Option<Pixmap>,
    rendered: bool,
}

impl Surface {
    /// Allocate a blank surface filled with [BLANK_FILL]
    pub fn new(width: u32, height: u32) -> Surface {
        Surface {
            width,
            height,
            pixmap: allocate(width, height),
            rendered: false,
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// The surface dimensions as (width, height) in pixels
    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Whether the surface has no pixels at all
    pub fn is_zero_area(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Whether the surface has pixel storage to draw into. Zero-area surfaces
    /// have nothing to draw into but are not considered unavailable.
    pub fn is_available(&self) -> bool {
        self.is_zero_area() || self.pixmap.is_some()
    }

    /// Change the surface dimensions. The contents are discarded and the surface
    /// goes back to being blank and un-rendered. Resizing to the current
    /// dimensions is a no-op.
    pub fn resize(&mut self, width: u32, height: u32) {
        if (width, height) == self.dimensions() && self.is_available() {
            return;
        }
        self.width = width;
        self.height = height;
        self.pixmap = allocate(width, height);
        self.rendered = false;
    }

    /// Whether a render has completed on this surface since it was created or resized
    pub fn has_rendered(&self) -> bool {
        self.rendered
    }

    pub(crate) fn mark_rendered(&mut self) {
        self.rendered = true;
    }

    /// Scans the pixels for anything other than [BLANK_FILL]. Zero-area and
    /// unavailable surfaces count as blank.
    pub fn is_blank(&self) -> bool {
        let Some(pixmap) = &self.pixmap else {
            return true;
        };
        let [r, g, b] = BLANK_FILL.to_rgb8();
        pixmap.pixels().iter().all(|p| {
            let c = p.demultiply();
            c.red() == r && c.green() == g && c.blue() == b
        })
    }

    /// The straight (non-premultiplied) RGBA value of a single pixel
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        let c = self.pixmap.as_ref()?.pixel(x, y)?.demultiply();
        Some([c.red(), c.green(), c.blue(), c.alpha()])
    }

    /// The underlying pixel buffer, if the surface has one
    pub fn pixmap(&self) -> Option<&Pixmap> {
        self.pixmap.as_ref()
    }

    pub(crate) fn pixmap_mut(&mut self) -> Option<&mut Pixmap> {
        self.pixmap.as_mut()
    }

    /// Fill the whole surface with a single colour
    pub(crate) fn fill(&mut self, colour: Colour) {
        if let Some(pixmap) = self.pixmap.as_mut() {
            pixmap.fill(colour.into());
        }
    }

    /// Copy the surface out into a straight-alpha RGBA image
    pub fn to_rgba_image(&self) -> Option<RgbaImage> {
        let pixmap = self.pixmap.as_ref()?;
        let raw: Vec<u8> = pixmap
            .pixels()
            .iter()
            .flat_map(|p| {
                let c = p.demultiply();
                [c.red(), c.green(), c.blue(), c.alpha()]
            })
            .collect();
        RgbaImage::from_raw(self.width, self.height, raw)
    }
}

fn allocate(width: u32, height: u32) -> Option<Pixmap> {
    if width == 0 || height == 0 {
        return None;
    }
    let Some(mut pixmap) = Pixmap::new(width, height) else {
        warn!("unable to allocate a {width}x{height} surface");
        return None;
    };
    pixmap.fill(BLANK_FILL.into());
    Some(pixmap)
}
