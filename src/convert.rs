//! Conversions between the color models. RGB is the hub: CMYK and HLS are
//! only converted to and from RGB.
//!
//! Derived fractional components are rounded to [`PLACES`] decimal places and
//! derived hues to whole degrees, so a state sent back and forth settles on
//! the same values.
//!
//! ```rust
//! use colorsync::{ColorState, Rgb};
//! let state = ColorState::from_rgb(Rgb::new(255, 0, 0));
//! assert_eq!(state.hls.h, 0);
//! assert_eq!(state.cmyk.k, 0.0);
//! ```

use crate::{
    color::ColorState,
    math::{narrow, round_to, to_channel, to_degrees, widen},
    models::{Cmyk, Hls, Rgb},
};

/// Number of decimal places kept for derived fractional components.
pub const PLACES: i32 = 5;

impl Rgb {
    /// Convert this color to the CMYK notation.
    pub fn to_cmyk(&self) -> Cmyk {
        if *self == Rgb::BLACK {
            return Cmyk::new(0.0, 0.0, 0.0, 1.0);
        }
        let [c, m, y, k] = util::rgb_to_cmyk(self.to_unit()).map(|v| narrow(round_to(v, PLACES)));
        Cmyk::new(c, m, y, k)
    }

    /// Convert this color to the HLS notation.
    pub fn to_hls(&self) -> Hls {
        let [h, l, s] = util::rgb_to_hls(self.to_unit());
        Hls::new(
            to_degrees(h),
            narrow(round_to(l, PLACES)),
            narrow(round_to(s, PLACES)),
        )
    }
}

impl Cmyk {
    /// Convert this color from the CMYK notation to RGB channels.
    pub fn to_rgb(&self) -> Rgb {
        let cmyk = [self.c, self.m, self.y, self.k].map(widen);
        let [r, g, b] = util::cmyk_to_rgb(cmyk).map(to_channel);
        Rgb::new(r, g, b)
    }
}

impl Hls {
    /// Convert this color from the HLS notation to RGB channels.
    pub fn to_rgb(&self) -> Rgb {
        let hls = [f64::from(self.h), widen(self.l), widen(self.s)];
        let [r, g, b] = util::hls_to_rgb(hls).map(to_channel);
        Rgb::new(r, g, b)
    }
}

impl ColorState {
    /// Build a state from a color in the RGB model.
    pub fn from_rgb(rgb: Rgb) -> Self {
        Self {
            rgb,
            cmyk: rgb.to_cmyk(),
            hls: rgb.to_hls(),
        }
    }

    /// Build a state from a color in the CMYK model. The given CMYK values are
    /// kept as they are.
    pub fn from_cmyk(cmyk: Cmyk) -> Self {
        let rgb = cmyk.to_rgb();
        Self {
            rgb,
            cmyk,
            hls: rgb.to_hls(),
        }
    }

    /// Build a state from a color in the HLS model. The given HLS values are
    /// kept as they are.
    pub fn from_hls(hls: Hls) -> Self {
        let rgb = hls.to_rgb();
        Self {
            rgb,
            cmyk: rgb.to_cmyk(),
            hls,
        }
    }
}

mod util {
    /// Convert RGB fractions to CMYK fractions. The color must not be black.
    pub fn rgb_to_cmyk([red, green, blue]: [f64; 3]) -> [f64; 4] {
        let key = 1.0 - red.max(green).max(blue);
        let f = |v: f64| (1.0 - v - key) / (1.0 - key);
        [f(red), f(green), f(blue), key]
    }

    /// Convert CMYK fractions to RGB channel values in the range 0-255.
    pub fn cmyk_to_rgb([cyan, magenta, yellow, key]: [f64; 4]) -> [f64; 3] {
        [cyan, magenta, yellow].map(|v| 255.0 * (1.0 - v) * (1.0 - key))
    }

    /// Convert RGB fractions to hue in degrees, lightness and saturation.
    pub fn rgb_to_hls([red, green, blue]: [f64; 3]) -> [f64; 3] {
        let max = red.max(green).max(blue);
        let min = red.min(green).min(blue);
        let delta = max - min;

        let lightness = (max + min) / 2.0;

        if delta == 0.0 {
            return [0.0, lightness, 0.0];
        }

        let saturation = if lightness < 0.5 {
            delta / (max + min)
        } else {
            delta / (2.0 - max - min)
        };

        let hue = 60.0
            * if max == red {
                (green - blue) / delta
            } else if max == green {
                2.0 + (blue - red) / delta
            } else {
                4.0 + (red - green) / delta
            };

        let hue = if hue < 0.0 { hue + 360.0 } else { hue };

        [hue, lightness, saturation]
    }

    /// Convert hue in degrees, lightness and saturation to RGB channel values
    /// in the range 0-255.
    pub fn hls_to_rgb([hue, lightness, saturation]: [f64; 3]) -> [f64; 3] {
        if saturation == 0.0 {
            return [lightness * 255.0; 3];
        }

        let q = if lightness < 0.5 {
            lightness * (1.0 + saturation)
        } else {
            lightness + saturation - lightness * saturation
        };
        let p = 2.0 * lightness - q;

        let hue_to_rgb = |t: f64| {
            let t = if t < 0.0 {
                t + 1.0
            } else if t > 1.0 {
                t - 1.0
            } else {
                t
            };
            if t < 1.0 / 6.0 {
                p + (q - p) * 6.0 * t
            } else if t < 1.0 / 2.0 {
                q
            } else if t < 2.0 / 3.0 {
                p + (q - p) * (2.0 / 3.0 - t) * 6.0
            } else {
                p
            }
        };

        let h = hue / 360.0;
        [h + 1.0 / 3.0, h, h - 1.0 / 3.0].map(|t| hue_to_rgb(t) * 255.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Component;

    #[rustfmt::skip]
    #[allow(clippy::type_complexity)]
    const TESTS: &[((u8, u8, u8), (Component, Component, Component, Component), (u16, Component, Component))] = &[
        ((118, 84, 32), (0.0, 0.28814, 0.72881, 0.53725), (36, 0.29412, 0.57333)),
        ((255, 0, 0), (0.0, 1.0, 1.0, 0.0), (0, 0.5, 1.0)),
        ((0, 255, 0), (1.0, 0.0, 1.0, 0.0), (120, 0.5, 1.0)),
        ((0, 0, 255), (1.0, 1.0, 0.0, 0.0), (240, 0.5, 1.0)),
        ((255, 0, 255), (0.0, 1.0, 0.0, 0.0), (300, 0.5, 1.0)),
        ((128, 128, 128), (0.0, 0.0, 0.0, 0.49804), (0, 0.50196, 0.0)),
        ((255, 255, 255), (0.0, 0.0, 0.0, 0.0), (0, 1.0, 0.0)),
        ((0, 0, 0), (0.0, 0.0, 0.0, 1.0), (0, 0.0, 0.0)),
    ];

    #[test]
    fn rgb_to_other_models() {
        for &((r, g, b), (c, m, y, k), (h, l, s)) in TESTS {
            println!("rgb({r}, {g}, {b})");
            let rgb = Rgb::new(r, g, b);
            assert_eq!(rgb.to_cmyk(), Cmyk::new(c, m, y, k));
            assert_eq!(rgb.to_hls(), Hls::new(h, l, s));
        }
    }

    #[test]
    fn derived_values_do_not_drift_near_halves() {
        // Each of these has a raw component within a hair of a rounding half.
        let rgb = Rgb::new(0, 1, 246);
        assert_eq!(rgb.to_cmyk(), Cmyk::new(1.0, 0.99593, 0.0, 0.03529));
        assert_eq!(rgb.to_hls(), Hls::new(240, 0.48235, 1.0));

        let rgb = Rgb::new(1, 1, 127);
        assert_eq!(rgb.to_cmyk(), Cmyk::new(0.99213, 0.99213, 0.0, 0.50196));
        assert_eq!(rgb.to_hls(), Hls::new(240, 0.25098, 0.98438));

        let rgb = Rgb::new(0, 17, 24);
        assert_eq!(rgb.to_cmyk(), Cmyk::new(1.0, 0.29167, 0.0, 0.90588));
        assert_eq!(rgb.to_hls(), Hls::new(198, 0.04706, 1.0));
    }

    #[test]
    fn derived_values_round_trip_through_rgb() {
        for (r, g, b) in [(0, 17, 24), (1, 1, 127)] {
            let rgb = Rgb::new(r, g, b);
            assert_eq!(rgb.to_cmyk().to_rgb(), rgb);
            assert_eq!(rgb.to_hls().to_rgb(), rgb);
        }
    }

    #[test]
    fn other_models_to_rgb() {
        for &((r, g, b), (c, m, y, k), (h, l, s)) in TESTS {
            println!("rgb({r}, {g}, {b})");
            assert_eq!(Cmyk::new(c, m, y, k).to_rgb(), Rgb::new(r, g, b));
            assert_eq!(Hls::new(h, l, s).to_rgb(), Rgb::new(r, g, b));
        }
    }

    #[test]
    fn derived_components_are_never_negative_zero() {
        let cmyk = Rgb::new(118, 84, 32).to_cmyk();
        assert!(cmyk.c.is_sign_positive());
        assert_eq!(cmyk.c.to_string(), "0");
    }

    #[test]
    fn state_keeps_the_source_model() {
        let cmyk = Cmyk::new(0.1, 0.2, 0.3, 0.4);
        let state = ColorState::from_cmyk(cmyk);
        assert_eq!(state.cmyk, cmyk);
        assert_eq!(state.hls, state.rgb.to_hls());

        let hls = Hls::new(200, 0.4, 0.3);
        let state = ColorState::from_hls(hls);
        assert_eq!(state.hls, hls);
        assert_eq!(state.cmyk, state.rgb.to_cmyk());
    }

    #[test]
    fn gray_has_no_hue_or_saturation() {
        for v in [1, 64, 200, 254] {
            let hls = Rgb::new(v, v, v).to_hls();
            assert_eq!(hls.h, 0);
            assert_eq!(hls.s, 0.0);
        }
    }

    #[test]
    fn initial_state() {
        let state = ColorState::initial();
        assert_eq!(state.rgb, Rgb::new(118, 84, 32));
        assert_eq!(state.hls.h, 36);
        assert_eq!(state.cmyk.k, 0.53725);
    }
}
