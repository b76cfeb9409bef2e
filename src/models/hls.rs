//! Model a color with the HLS (hue, lightness, saturation) notation.

use super::cmyk::check_unit;
use crate::{Component, Error};

colorsync_macros::gen_model! {
    /// A color specified with the HLS notation. The hue is in whole degrees,
    /// lightness and saturation are fractions in the range 0-1.
    pub struct Hls {
        /// The hue component of the color, in degrees 0-360.
        h: u16,
        /// The lightness component of the color.
        l: Component,
        /// The saturation component of the color.
        s: Component,
    }
}

impl Hls {
    /// The largest hue accepted, 360 being the same as 0.
    pub const MAX_HUE: u16 = 360;

    /// Make sure the hue is in degrees and the other components are
    /// fractions.
    pub fn check(&self) -> Result<(), Error> {
        if self.h > Self::MAX_HUE {
            return Err(Error::OutOfRange {
                field: "h",
                value: self.h.to_string(),
            });
        }
        check_unit("l", self.l)?;
        check_unit("s", self.s)
    }
}
