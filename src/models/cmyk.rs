//! Model a color with the subtractive CMYK notation.

use crate::{Component, Error};

colorsync_macros::gen_model! {
    /// A color specified with cyan, magenta, yellow and key (black) components,
    /// each a fraction in the range 0-1.
    pub struct Cmyk {
        /// The cyan component of the color.
        c: Component,
        /// The magenta component of the color.
        m: Component,
        /// The yellow component of the color.
        y: Component,
        /// The key (black) component of the color.
        k: Component,
    }
}

impl Cmyk {
    /// Make sure every component is a fraction in the range 0-1.
    pub fn check(&self) -> Result<(), Error> {
        [("c", self.c), ("m", self.m), ("y", self.y), ("k", self.k)]
            .into_iter()
            .try_for_each(|(field, value)| check_unit(field, value))
    }
}

pub(crate) fn check_unit(field: &'static str, value: Component) -> Result<(), Error> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(Error::OutOfRange {
            field,
            value: value.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn components_must_be_fractions() {
        assert!(Cmyk::new(0.0, 0.5, 1.0, 0.25).check().is_ok());
        assert!(matches!(
            Cmyk::new(0.0, 1.5, 0.0, 0.0).check(),
            Err(Error::OutOfRange { field: "m", .. })
        ));
        assert!(matches!(
            Cmyk::new(0.0, 0.0, 0.0, -0.1).check(),
            Err(Error::OutOfRange { field: "k", .. })
        ));
    }

    #[test]
    fn nan_is_out_of_range() {
        assert!(Cmyk::new(Component::NAN, 0.0, 0.0, 0.0).check().is_err());
    }
}
