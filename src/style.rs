//! How a drawing element is painted: fill colour, stroke colour, line width
//! and dash pattern.

/// An RGB colour with components in `[0, 1]`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
    pub r: f64,
    pub g: f64,
    pub b: f64,
}

impl Color {
    pub const BLACK: Color = Color::rgb(0.0, 0.0, 0.0);
    pub const WHITE: Color = Color::rgb(1.0, 1.0, 1.0);
    pub const RED: Color = Color::rgb(1.0, 0.0, 0.0);
    pub const GREEN: Color = Color::rgb(0.0, 1.0, 0.0);
    pub const BLUE: Color = Color::rgb(0.0, 0.0, 1.0);
    pub const CYAN: Color = Color::rgb(0.0, 1.0, 1.0);
    pub const YELLOW: Color = Color::rgb(1.0, 1.0, 0.0);
    pub const ORANGE: Color = Color::rgb(1.0, 0.5, 0.0);
    pub const PURPLE: Color = Color::rgb(0.5, 0.0, 0.5);

    pub const fn rgb(r: f64, g: f64, b: f64) -> Self {
        Color { r, g, b }
    }

    /// A shade of gray; `0` is black and `1` is white.
    pub const fn gray(level: f64) -> Self {
        Color::rgb(level, level, level)
    }

    pub fn from_rgb8(r: u8, g: u8, b: u8) -> Self {
        Color::rgb(r as f64 / 255.0, g as f64 / 255.0, b as f64 / 255.0)
    }

    /// The components as bytes, rounding to the nearest step.
    pub fn to_rgb8(self) -> [u8; 3] {
        let byte = |c: f64| (c.clamp(0.0, 1.0) * 255.0).round() as u8;
        [byte(self.r), byte(self.g), byte(self.b)]
    }

    /// `#rrggbb`, as svg wants it.
    pub fn to_hex(self) -> String {
        let [r, g, b] = self.to_rgb8();
        format!("#{r:02x}{g:02x}{b:02x}")
    }
}

/// Stroke widths, in PostScript points.
///
/// These follow the usual ladder of factors of √2 around a 0.02 cm normal
/// line.
pub struct LineWidth;

impl LineWidth {
    pub const THIN: f64 = Self::NORMAL / 2.0;
    pub const NORMAL: f64 = 0.02 * 72.0 / 2.54;
    pub const THICK: f64 = Self::NORMAL * std::f64::consts::SQRT_2;
    pub const THICKER: f64 = Self::NORMAL * 2.0;
    pub const THICKEST: f64 = Self::NORMAL * 4.0;
}

/// A dash pattern.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Dash {
    #[default]
    Solid,
    Dashed,
    Dotted,
}

impl Dash {
    /// Alternating on/off lengths in points. Empty for a solid line.
    pub fn pattern(self) -> &'static [f64] {
        match self {
            Dash::Solid => &[],
            Dash::Dashed => &[4.0, 3.0],
            Dash::Dotted => &[0.8, 2.0],
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Stroke {
    pub color: Color,
    /// Width in points.
    pub width: f64,
    pub dash: Dash,
}

impl Default for Stroke {
    fn default() -> Self {
        Stroke {
            color: Color::BLACK,
            width: LineWidth::NORMAL,
            dash: Dash::Solid,
        }
    }
}

/// The paint applied to one path.
///
/// Fill goes down first and the stroke is drawn over it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Style {
    pub fill: Option<Color>,
    pub stroke: Option<Stroke>,
}

impl Default for Style {
    fn default() -> Self {
        Style::stroked()
    }
}

impl Style {
    /// A normal black line with no fill.
    pub fn stroked() -> Self {
        Style {
            fill: None,
            stroke: Some(Stroke::default()),
        }
    }

    /// Filled with `color` and outlined with a normal black line.
    pub fn filled(color: Color) -> Self {
        Style {
            fill: Some(color),
            stroke: Some(Stroke::default()),
        }
    }

    /// Filled with `color` and no outline.
    pub fn fill_only(color: Color) -> Self {
        Style {
            fill: Some(color),
            stroke: None,
        }
    }

    pub fn with_width(mut self, width: f64) -> Self {
        self.stroke = Some(Stroke {
            width,
            ..self.stroke.unwrap_or_default()
        });
        self
    }

    pub fn with_dash(mut self, dash: Dash) -> Self {
        self.stroke = Some(Stroke {
            dash,
            ..self.stroke.unwrap_or_default()
        });
        self
    }

    pub fn with_stroke_color(mut self, color: Color) -> Self {
        self.stroke = Some(Stroke {
            color,
            ..self.stroke.unwrap_or_default()
        });
        self
    }

    pub fn dashed() -> Self {
        Style::stroked().with_dash(Dash::Dashed)
    }

    pub fn dotted() -> Self {
        Style::stroked().with_dash(Dash::Dotted)
    }

    /// True if painting this style would leave a mark.
    pub fn is_visible(&self) -> bool {
        self.fill.is_some() || self.visible_stroke().is_some()
    }

    /// The stroke that gets painted: none if it is missing or has no width.
    pub fn visible_stroke(&self) -> Option<Stroke> {
        self.stroke.filter(|s| s.width > 0.0)
    }

    /// The stroke width, or zero if there's no stroke.
    pub fn stroke_width(&self) -> f64 {
        self.stroke.map_or(0.0, |s| s.width)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex() {
        assert_eq!(Color::BLACK.to_hex(), "#000000");
        assert_eq!(Color::ORANGE.to_hex(), "#ff8000");
        assert_eq!(Color::gray(0.5).to_rgb8(), [128, 128, 128]);
        assert_eq!(Color::rgb(2.0, -1.0, 0.0).to_hex(), "#ff0000");
    }

    #[test]
    fn builders_keep_the_rest_of_the_stroke() {
        let style = Style::filled(Color::RED)
            .with_width(LineWidth::THICK)
            .with_dash(Dash::Dotted);
        assert_eq!(style.fill, Some(Color::RED));
        assert_eq!(
            style.stroke,
            Some(Stroke {
                color: Color::BLACK,
                width: LineWidth::THICK,
                dash: Dash::Dotted,
            })
        );
    }

    #[test]
    fn visibility() {
        assert!(Style::stroked().is_visible());
        assert!(Style::fill_only(Color::BLUE).is_visible());
        assert!(!Style {
            fill: None,
            stroke: None
        }
        .is_visible());
        assert!(!Style::stroked().with_width(0.0).is_visible());
        assert_eq!(Style::fill_only(Color::BLUE).stroke_width(), 0.0);

        let hairline = Style::filled(Color::BLUE).with_width(0.0);
        assert!(hairline.is_visible());
        assert_eq!(hairline.visible_stroke(), None);
    }
}
