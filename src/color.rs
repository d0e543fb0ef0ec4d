// Simple color struct for building the rgba() strings the 2d context takes
// as fill and stroke styles

// Accent teal shared by the hero particles and their connection lines
pub const ACCENT: Color = Color::rgb(100, 255, 218);

#[derive(Copy, Clone, PartialEq, Debug)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f64,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Color {
        Color { r, g, b, a: 1.0 }
    }

    pub fn with_alpha(mut self, a: f64) -> Color {
        self.a = a;
        self
    }

    pub fn to_css_string(&self) -> String {
        format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_the_accent_with_a_fractional_alpha() {
        let color = ACCENT.with_alpha(0.25);
        assert_eq!(color.to_css_string(), "rgba(100, 255, 218, 0.25)");
    }

    #[test]
    fn formats_fully_transparent_and_fully_opaque_alphas() {
        assert_eq!(
            Color::rgb(0, 0, 0).with_alpha(0.0).to_css_string(),
            "rgba(0, 0, 0, 0)"
        );
        assert_eq!(Color::rgb(10, 20, 30).to_css_string(), "rgba(10, 20, 30, 1)");
    }

    #[test]
    fn with_alpha_leaves_the_hue_alone() {
        let color = ACCENT.with_alpha(0.1);
        assert_eq!((color.r, color.g, color.b), (ACCENT.r, ACCENT.g, ACCENT.b));
        assert_eq!(color.a, 0.1);
    }
}
