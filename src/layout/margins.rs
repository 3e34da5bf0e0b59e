use crate::units::Px;

/// The fixed inset used on every side of a note, in logical units
pub const NOTE_MARGIN: Px = Px(40.0);

/// Margins are used when laying out text and drawing paper rules on a surface.
/// There is no control preventing words from overflowing the margins (a single
/// overlong word is never broken); the margins are guidelines for the layout
/// and paper functions.
#[derive(Debug, Default, Copy, Clone, PartialEq)]
pub struct Margins {
    pub top: Px,
    pub right: Px,
    pub bottom: Px,
    pub left: Px,
}

impl Margins {
    /// Create margins where all values are equal
    pub fn all<D: Into<Px>>(value: D) -> Margins {
        let value: Px = value.into();
        Margins {
            top: value,
            right: value,
            bottom: value,
            left: value,
        }
    }

    /// The margins every note is laid out with: [NOTE_MARGIN] on all sides
    pub fn note() -> Margins {
        Margins::all(NOTE_MARGIN)
    }

    /// The width left for content on a surface `width` units wide. May be
    /// negative on surfaces narrower than the horizontal margins.
    pub fn content_width(&self, width: Px) -> Px {
        width - self.left - self.right
    }

    /// The height left for content on a surface `height` units tall. May be
    /// negative on surfaces shorter than the vertical margins.
    pub fn content_height(&self, height: Px) -> Px {
        height - self.top - self.bottom
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn note_margins_leave_the_expected_content_box() {
        let margins = Margins::note();
        assert_eq!(margins.content_width(Px(200.0)), Px(120.0));
        assert_eq!(margins.content_height(Px(400.0)), Px(320.0));
        assert!(margins.content_width(Px(50.0)) < Px(0.0));
    }
}
