//! Hex notation used by the color picker.

use crate::models::Rgb;

impl Rgb {
    /// Format the color as lowercase `#rrggbb`.
    pub fn to_hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// Decode a `#RGB` or `#RRGGBB` color. In the short form every digit is
    /// repeated.
    ///
    /// Anything else, including a wrong length or a digit that is not hex,
    /// decodes to [`Rgb::BLACK`].
    pub fn from_hex(hex: &str) -> Rgb {
        parse_hex(hex).unwrap_or(Rgb::BLACK)
    }
}

fn parse_hex(hex: &str) -> Option<Rgb> {
    let nibble = |c: u8| -> Option<u8> {
        match c {
            b'0'..=b'9' => Some(c - b'0'),
            b'a'..=b'f' => Some(c - b'a' + 10),
            b'A'..=b'F' => Some(c - b'A' + 10),
            _ => None,
        }
    };

    let bytes = hex.strip_prefix('#')?.as_bytes();
    match *bytes {
        // #RGB
        [r, g, b] => Some(Rgb::new(
            nibble(r)? * 17,
            nibble(g)? * 17,
            nibble(b)? * 17,
        )),
        // #RRGGBB
        [r1, r2, g1, g2, b1, b2] => {
            let byte = |hi: u8, lo: u8| -> Option<u8> { Some(nibble(hi)? << 4 | nibble(lo)?) };
            Some(Rgb::new(byte(r1, r2)?, byte(g1, g2)?, byte(b1, b2)?))
        }
        _ => None,
    }
}
