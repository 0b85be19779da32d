use std::fmt;

use super::LineCode;

/// Line code reserved for the Metro Seven/Eight Liner.
pub const METRO_SEVEN_EIGHT_LINER: LineCode = 9999;

const RED_MULTIPLIER: LineCode = 95413;
const GREEN_MULTIPLIER: LineCode = 37237;
const BLUE_MULTIPLIER: LineCode = 49279;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const WHITE: Self = Self { r: 255, g: 255, b: 255 };

    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// Formats as a CSS `rgb()` color, which is what Leaflet path options expect.
impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgb({}, {}, {})", self.r, self.g, self.b)
    }
}

/// Derives the display color of a line from its code.
///
/// Each channel is `(code * multiplier) mod 256`. Distinct codes may collide,
/// which is accepted. Wrapping multiplication keeps the result exact modulo 256
/// for every `i64`, and the Euclidean remainder keeps negative codes in range.
#[must_use]
pub fn color_of(line_code: LineCode) -> Color {
    Color::new(
        channel(line_code, RED_MULTIPLIER),
        channel(line_code, GREEN_MULTIPLIER),
        channel(line_code, BLUE_MULTIPLIER),
    )
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn channel(line_code: LineCode, multiplier: LineCode) -> u8 {
    line_code.wrapping_mul(multiplier).rem_euclid(256) as u8
}

/// How a line is drawn on the map
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineStyle {
    /// One stroke in the line color
    Single,
    /// A white casing under a thinner stroke in the line color
    DoubleStroke,
}

impl LineStyle {
    #[must_use]
    pub fn for_line(line_code: LineCode) -> Self {
        match line_code {
            METRO_SEVEN_EIGHT_LINER => Self::DoubleStroke,
            _ => Self::Single,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_of_known_codes() {
        assert_eq!(color_of(0), Color::new(0, 0, 0));
        assert_eq!(color_of(1), Color::new(181, 117, 127));
        assert_eq!(color_of(2), Color::new(106, 234, 254));
        assert_eq!(color_of(METRO_SEVEN_EIGHT_LINER), Color::new(155, 219, 113));
    }

    #[test]
    fn test_color_of_is_pure() {
        for code in [-42, 0, 7, 11302, METRO_SEVEN_EIGHT_LINER, LineCode::MAX, LineCode::MIN] {
            assert_eq!(color_of(code), color_of(code));
        }
    }

    #[test]
    fn test_color_of_negative_code() {
        assert_eq!(color_of(-1), Color::new(75, 139, 129));
    }

    #[test]
    fn test_color_of_extreme_codes_do_not_panic() {
        let _ = color_of(LineCode::MAX);
        let _ = color_of(LineCode::MIN);
    }

    #[test]
    fn test_color_display_is_css_rgb() {
        assert_eq!(Color::new(181, 117, 127).to_string(), "rgb(181, 117, 127)");
        assert_eq!(Color::WHITE.to_string(), "rgb(255, 255, 255)");
    }

    #[test]
    fn test_line_style_for_line() {
        assert_eq!(LineStyle::for_line(METRO_SEVEN_EIGHT_LINER), LineStyle::DoubleStroke);
        assert_eq!(LineStyle::for_line(11302), LineStyle::Single);
        assert_eq!(LineStyle::for_line(0), LineStyle::Single);
    }
}
