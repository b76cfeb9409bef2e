//! A [`ColorState`] holds one color expressed in every supported [`Model`] at
//! the same time.

use std::{fmt, str::FromStr};

use bitflags::bitflags;
use serde::{Deserialize, Serialize};

use crate::{
    models::{Cmyk, FieldValues, Fields, Hls, Rgb},
    Error,
};

#[cfg(not(feature = "f64"))]
/// A 32-bit floating point value that fractional components are stored as.
pub type Component = f32;

#[cfg(feature = "f64")]
/// A 64-bit floating point value that fractional components are stored as.
pub type Component = f64;

/// The color models that are kept in sync.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Model {
    /// Red, green and blue channels in the range 0-255.
    Rgb,
    /// Cyan, magenta, yellow and key (black) as fractions.
    Cmyk,
    /// Hue in degrees with lightness and saturation as fractions.
    Hls,
}

impl Model {
    /// All models, in the order they are presented.
    pub const ALL: [Model; 3] = [Model::Rgb, Model::Cmyk, Model::Hls];

    /// The name of the model as used on the wire and in control ids.
    pub fn as_str(&self) -> &'static str {
        match self {
            Model::Rgb => "rgb",
            Model::Cmyk => "cmyk",
            Model::Hls => "hls",
        }
    }

    /// Names of the fields that make up the model.
    pub fn fields(&self) -> &'static [&'static str] {
        match self {
            Model::Rgb => Rgb::FIELDS,
            Model::Cmyk => Cmyk::FIELDS,
            Model::Hls => Hls::FIELDS,
        }
    }

    /// The part of a form holding the controls of this model.
    pub fn view(&self) -> Views {
        match self {
            Model::Rgb => Views::RGB,
            Model::Cmyk => Views::CMYK,
            Model::Hls => Views::HLS,
        }
    }
}

impl fmt::Display for Model {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Model {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Model::ALL
            .into_iter()
            .find(|model| model.as_str() == s)
            .ok_or_else(|| Error::UnknownModel(s.to_string()))
    }
}

bitflags! {
    /// Parts of a form that were written by an operation.
    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    pub struct Views : u8 {
        /// The RGB slider and input pairs.
        const RGB = 1 << 0;
        /// The CMYK slider and input pairs.
        const CMYK = 1 << 1;
        /// The HLS slider and input pairs.
        const HLS = 1 << 2;
        /// The color swatch and the hex color picker.
        const SWATCH = 1 << 3;
    }
}

/// A single color expressed in all the supported models.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ColorState {
    /// The color in the RGB model.
    pub rgb: Rgb,
    /// The color in the CMYK model.
    pub cmyk: Cmyk,
    /// The color in the HLS model.
    pub hls: Hls,
}

impl ColorState {
    /// The state a new session starts with.
    pub fn initial() -> Self {
        Self::from_rgb(Rgb::new(118, 84, 32))
    }

    /// Return the values of the fields of the given model.
    pub fn values(&self, model: Model) -> FieldValues {
        match model {
            Model::Rgb => self.rgb.values(),
            Model::Cmyk => self.cmyk.values(),
            Model::Hls => self.hls.values(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn model_names_round_trip() {
        for model in Model::ALL {
            assert_eq!(model.as_str().parse::<Model>().unwrap(), model);
        }
        assert!(matches!(
            "hsv".parse::<Model>(),
            Err(Error::UnknownModel(name)) if name == "hsv"
        ));
    }

    #[test]
    fn model_fields() {
        assert_eq!(Model::Rgb.fields(), &["r", "g", "b"]);
        assert_eq!(Model::Cmyk.fields(), &["c", "m", "y", "k"]);
        assert_eq!(Model::Hls.fields(), &["h", "l", "s"]);
    }

    #[test]
    fn state_serializes_with_lowercase_keys() {
        let state = ColorState {
            rgb: Rgb::new(128, 64, 32),
            cmyk: Cmyk::new(0.0, 0.5, 0.75, 0.25),
            hls: Hls::new(20, 0.3125, 0.625),
        };
        let json = serde_json::to_value(state).unwrap();
        assert_eq!(json["rgb"]["r"], 128);
        assert_eq!(json["hls"]["h"], 20);
        assert_eq!(json["cmyk"]["m"], 0.5);

        let back: ColorState = serde_json::from_value(json).unwrap();
        assert_eq!(back, state);
    }

    #[test]
    fn values_of_a_model() {
        let values = ColorState::initial().values(Model::Rgb);
        assert_eq!(values.len(), 3);
        assert_eq!(values["r"], "118");
        assert_eq!(values["g"], "84");
        assert_eq!(values["b"], "32");
    }
}
