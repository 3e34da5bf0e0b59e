//! Paper backgrounds: plain, lined (ruled) and grid paper.
//!
//! Rules are anchored to the note margins and spaced a fixed distance apart.
//! They depend only on the surface dimensions, never on the text drawn on top.

use crate::colour::colours;
use crate::layout::Margins;
use crate::surface::Surface;
use crate::units::Px;
use crate::NotesError;
use std::fmt;
use std::str::FromStr;
use tiny_skia::{Paint, PathBuilder, Stroke};

/// Distance between neighbouring rules
pub const RULE_SPACING: Px = Px(32.0);
/// Stroke width of a rule
pub const RULE_WIDTH: Px = Px(1.0);

/// The background pattern drawn beneath the text
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash)]
pub enum PaperStyle {
    /// Just the background colour
    #[default]
    Plain,
    /// Horizontal rules
    Lined,
    /// Horizontal and vertical rules
    Grid,
}

impl fmt::Display for PaperStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            PaperStyle::Plain => "plain",
            PaperStyle::Lined => "lined",
            PaperStyle::Grid => "grid",
        })
    }
}

impl FromStr for PaperStyle {
    type Err = NotesError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "plain" => Ok(PaperStyle::Plain),
            "lined" => Ok(PaperStyle::Lined),
            "grid" => Ok(PaperStyle::Grid),
            _ => Err(NotesError::InvalidConfig(format!(
                "unknown paper style `{s}`, expected plain, lined or grid"
            ))),
        }
    }
}

/// A single straight rule, from `(x1, y1)` to `(x2, y2)`
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Rule {
    pub x1: Px,
    pub y1: Px,
    pub x2: Px,
    pub y2: Px,
}

impl Rule {
    pub fn is_horizontal(&self) -> bool {
        self.y1 == self.y2
    }
}

/// Offsets `start`, `start + step`, ... up to and including `end`
fn stops(start: Px, end: Px, step: Px) -> impl Iterator<Item = Px> {
    (0..)
        .map(move |i| start + step * i as f32)
        .take_while(move |p| *p <= end)
}

/// Computes the rules for a paper style on a `width` × `height` surface.
///
/// Horizontal rules run across the content width, starting at the top margin
/// and repeating every [RULE_SPACING] down to the bottom margin. Grid paper adds
/// vertical rules with the same spacing from the left margin to the right
/// margin, spanning the top margin to the bottom margin. Surfaces too small to
/// have a content box get no rules.
pub fn paper_rules(style: PaperStyle, width: Px, height: Px, margins: &Margins) -> Vec<Rule> {
    let mut rules = Vec::new();
    if style == PaperStyle::Plain
        || margins.content_width(width) < Px(0.0)
        || margins.content_height(height) < Px(0.0)
    {
        return rules;
    }

    let left = margins.left;
    let right = width - margins.right;
    let top = margins.top;
    let bottom = height - margins.bottom;

    rules.extend(stops(top, bottom, RULE_SPACING).map(|y| Rule {
        x1: left,
        y1: y,
        x2: right,
        y2: y,
    }));

    if style == PaperStyle::Grid {
        rules.extend(stops(left, right, RULE_SPACING).map(|x| Rule {
            x1: x,
            y1: top,
            x2: x,
            y2: bottom,
        }));
    }

    rules
}

/// Strokes the rules for `style` onto the surface in the light rule grey
pub fn draw_paper(surface: &mut Surface, style: PaperStyle, margins: &Margins) {
    let (width, height) = (Px::from(surface.width()), Px::from(surface.height()));
    let rules = paper_rules(style, width, height, margins);
    let Some(pixmap) = surface.pixmap_mut() else {
        return;
    };

    // one path for every rule, so grid crossings are no darker than the rules
    let mut builder = PathBuilder::new();
    for rule in rules.iter() {
        builder.move_to(*rule.x1, *rule.y1);
        builder.line_to(*rule.x2, *rule.y2);
    }
    let Some(path) = builder.finish() else {
        return;
    };

    let mut paint = Paint::default();
    paint.set_color(colours::RULE_GREY.into());
    paint.anti_alias = true;
    let stroke = Stroke {
        width: *RULE_WIDTH,
        ..Default::default()
    };
    pixmap.stroke_path(&path, &paint, &stroke, tiny_skia::Transform::identity(), None);
}
