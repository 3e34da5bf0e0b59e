use crate::NotesError;
use std::str::FromStr;

/// A colour, expressed in the RGB or grey colour spaces
#[derive(Copy, Clone, PartialEq, Debug)]
pub enum Colour {
    /// RGB colour; r, g, b, range from 0.0 to 1.0
    RGB { r: f32, g: f32, b: f32 },
    /// Grey colour; g ranges from 0.0 to 1.0
    Grey { g: f32 },
}

impl Colour {
    /// Create a new colour in the RGB space. r, g, and b range from 0.0 to 1.0
    pub fn new_rgb(r: f32, g: f32, b: f32) -> Colour {
        Colour::RGB { r, g, b }
    }

    /// Create a new colour in the RGB space. r, g, and b range from 0 to 255
    pub fn new_rgb_bytes(r: u8, g: u8, b: u8) -> Colour {
        Colour::RGB {
            r: r as f32 / 255.0,
            g: g as f32 / 255.0,
            b: b as f32 / 255.0,
        }
    }

    /// Create a new colour in the grey space, g ranges from 0 to 255
    pub fn new_grey_bytes(g: u8) -> Colour {
        Colour::Grey {
            g: g as f32 / 255.0,
        }
    }

    /// The colour as 8-bit RGB components, as it will be stored on a surface
    pub fn to_rgb8(&self) -> [u8; 3] {
        let byte = |c: f32| (c.clamp(0.0, 1.0) * 255.0).round() as u8;
        match *self {
            Colour::RGB { r, g, b } => [byte(r), byte(g), byte(b)],
            Colour::Grey { g } => [byte(g); 3],
        }
    }
}

impl From<Colour> for tiny_skia::Color {
    fn from(c: Colour) -> Self {
        let [r, g, b] = c.to_rgb8();
        tiny_skia::Color::from_rgba8(r, g, b, 255)
    }
}

/// Parses CSS-style hex colours: `#rrggbb` or the short `#rgb` form. The
/// leading `#` is optional.
impl FromStr for Colour {
    type Err = NotesError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || NotesError::InvalidConfig(format!("`{s}` is not a hex colour"));
        let hex = s.trim().trim_start_matches('#');
        if !hex.is_ascii() {
            return Err(invalid());
        }

        let channel = |digits: &str| u8::from_str_radix(digits, 16).map_err(|_| invalid());
        match hex.len() {
            6 => Ok(Colour::new_rgb_bytes(
                channel(&hex[0..2])?,
                channel(&hex[2..4])?,
                channel(&hex[4..6])?,
            )),
            3 => {
                // #abc is shorthand for #aabbcc
                let r = channel(&hex[0..1])?;
                let g = channel(&hex[1..2])?;
                let b = channel(&hex[2..3])?;
                Ok(Colour::new_rgb_bytes(r * 17, g * 17, b * 17))
            }
            _ => Err(invalid()),
        }
    }
}

/// A list of pre-defined colour constants
pub mod colours {
    use super::*;

    pub const BLACK: Colour = Colour::Grey { g: 0.0 };
    pub const WHITE: Colour = Colour::Grey { g: 1.0 };
    /// Blue-black ballpoint ink
    pub const INK_BLUE: Colour = Colour::RGB {
        r: 30.0 / 255.0,
        g: 58.0 / 255.0,
        b: 138.0 / 255.0,
    };
    /// The light grey used for paper rules (`#e5e7eb`)
    pub const RULE_GREY: Colour = Colour::RGB {
        r: 229.0 / 255.0,
        g: 231.0 / 255.0,
        b: 235.0 / 255.0,
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_long_and_short_hex() {
        let c: Colour = "#e5e7eb".parse().expect("valid hex");
        assert_eq!(c.to_rgb8(), [0xe5, 0xe7, 0xeb]);
        assert_eq!(c, colours::RULE_GREY);

        let c: Colour = "fff".parse().expect("valid short hex");
        assert_eq!(c.to_rgb8(), [255, 255, 255]);
        assert_eq!("#1E3A8A".parse::<Colour>().unwrap(), colours::INK_BLUE);
    }

    #[test]
    fn rejects_malformed_hex() {
        for bad in ["", "#12", "#12345", "#gggggg", "#ééé", "red"] {
            let err = bad.parse::<Colour>().unwrap_err();
            assert!(matches!(err, NotesError::InvalidConfig(_)), "{bad}");
        }
    }

    #[test]
    fn grey_expands_to_equal_channels() {
        assert_eq!(colours::WHITE.to_rgb8(), [255; 3]);
        assert_eq!(Colour::new_grey_bytes(128).to_rgb8(), [128; 3]);
        assert_eq!(Colour::new_rgb(2.0, -1.0, 0.5).to_rgb8(), [255, 0, 128]);
    }
}
