//! Model a color with 8-bit red, green and blue channels.

use std::fmt;

colorsync_macros::gen_model! {
    /// A color specified with red, green and blue channels in the range 0-255.
    pub struct Rgb {
        /// The red channel.
        r: u8,
        /// The green channel.
        g: u8,
        /// The blue channel.
        b: u8,
    }
}

impl Rgb {
    /// Black, the color any undecodable input falls back to.
    pub const BLACK: Rgb = Rgb::new(0, 0, 0);

    /// Return the channels as fractions in the range 0-1.
    pub(crate) fn to_unit(self) -> [f64; 3] {
        [self.r, self.g, self.b].map(|c| f64::from(c) / 255.0)
    }
}

/// Formats the color as a CSS `rgb()` function, which is what the color
/// swatch displays.
impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgb({}, {}, {})", self.r, self.g, self.b)
    }
}
