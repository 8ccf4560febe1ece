//! Opaque RGB colors and the arithmetic the rasterizer needs on them.

use super::RenderError;

/// Opaque 24-bit color.
///
/// There is no alpha channel: anything that reaches a [`Cell`](super::Cell)
/// has already been composited over the matte color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const BLACK: Rgb = Rgb::new(0, 0, 0);
    pub const WHITE: Rgb = Rgb::new(255, 255, 255);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse `#rrggbb`, `rrggbb`, `#rgb` or `rgb`.
    pub fn from_hex(value: &str) -> Result<Self, RenderError> {
        let err = || RenderError::ColorParse {
            value: value.to_string(),
        };
        let hex = value.trim().strip_prefix('#').unwrap_or(value.trim());
        if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(err());
        }

        let channel = |s: &str| u8::from_str_radix(s, 16).map_err(|_| err());
        match hex.len() {
            6 => Ok(Self::new(
                channel(&hex[0..2])?,
                channel(&hex[2..4])?,
                channel(&hex[4..6])?,
            )),
            3 => {
                // #abc is shorthand for #aabbcc
                let short = |s: &str| channel(s).map(|v| v * 17);
                Ok(Self::new(
                    short(&hex[0..1])?,
                    short(&hex[1..2])?,
                    short(&hex[2..3])?,
                ))
            }
            _ => Err(err()),
        }
    }

    /// Perceived brightness (0-255) using ITU-R BT.601 weights.
    #[inline]
    pub fn luminance(self) -> u8 {
        ((299 * self.r as u32 + 587 * self.g as u32 + 114 * self.b as u32) / 1000) as u8
    }

    /// Composite an RGBA sample over this (opaque) color.
    #[inline]
    pub fn under(self, rgba: [u8; 4]) -> Rgb {
        let a = rgba[3] as u32;
        let blend = |fg: u8, bg: u8| ((fg as u32 * a + bg as u32 * (255 - a) + 127) / 255) as u8;
        Rgb::new(
            blend(rgba[0], self.r),
            blend(rgba[1], self.g),
            blend(rgba[2], self.b),
        )
    }

    /// Average of a set of colors, or `None` for an empty set.
    pub fn mean<I>(colors: I) -> Option<Rgb>
    where
        I: IntoIterator<Item = Rgb>,
    {
        let (mut r, mut g, mut b, mut n) = (0u32, 0u32, 0u32, 0u32);
        for c in colors {
            r += c.r as u32;
            g += c.g as u32;
            b += c.b as u32;
            n += 1;
        }
        (n > 0).then(|| Rgb::new((r / n) as u8, (g / n) as u8, (b / n) as u8))
    }
}

impl From<Rgb> for crossterm::style::Color {
    fn from(c: Rgb) -> Self {
        crossterm::style::Color::Rgb {
            r: c.r,
            g: c.g,
            b: c.b,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_hex_long_form() {
        assert_eq!(Rgb::from_hex("#000000").unwrap(), Rgb::BLACK);
        assert_eq!(Rgb::from_hex("#ff8000").unwrap(), Rgb::new(255, 128, 0));
        assert_eq!(Rgb::from_hex("FFFFFF").unwrap(), Rgb::WHITE);
    }

    #[test]
    fn test_from_hex_short_form() {
        assert_eq!(Rgb::from_hex("#fff").unwrap(), Rgb::WHITE);
        assert_eq!(Rgb::from_hex("#a0c").unwrap(), Rgb::new(0xaa, 0x00, 0xcc));
    }

    #[test]
    fn test_from_hex_rejects_garbage() {
        for bad in ["", "#", "#12345", "#gg0000", "red", "#1234567"] {
            let result = Rgb::from_hex(bad);
            assert!(
                matches!(result, Err(RenderError::ColorParse { .. })),
                "{bad:?} should not parse"
            );
        }
    }

    #[test]
    fn test_color_parse_error_message() {
        let err = Rgb::from_hex("nope").unwrap_err();
        assert_eq!(err.to_string(), "matte color : nope is not a hex-color");
    }

    #[test]
    fn test_luminance_order() {
        let red = Rgb::new(255, 0, 0).luminance();
        let green = Rgb::new(0, 255, 0).luminance();
        let blue = Rgb::new(0, 0, 255).luminance();
        assert!(green > red && red > blue);
        assert_eq!(Rgb::WHITE.luminance(), 255);
        assert_eq!(Rgb::BLACK.luminance(), 0);
    }

    #[test]
    fn test_under_opaque_keeps_source() {
        assert_eq!(Rgb::BLACK.under([10, 20, 30, 255]), Rgb::new(10, 20, 30));
    }

    #[test]
    fn test_under_transparent_gives_matte() {
        let matte = Rgb::new(1, 2, 3);
        assert_eq!(matte.under([200, 200, 200, 0]), matte);
    }

    #[test]
    fn test_under_half_alpha_blends() {
        let c = Rgb::BLACK.under([255, 255, 255, 128]);
        assert_eq!(c, Rgb::new(128, 128, 128));
    }

    #[test]
    fn test_mean() {
        assert_eq!(Rgb::mean(Vec::<Rgb>::new()), None);
        let m = Rgb::mean([Rgb::new(0, 0, 0), Rgb::new(100, 200, 50)]).unwrap();
        assert_eq!(m, Rgb::new(50, 100, 25));
    }
}
