//! RGB colors for fill and stroke operators

/// RGB color with components in `0.0..=1.0`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Color {
    pub const BLACK: Color = Color::from_hex(0x000000);
    pub const WHITE: Color = Color::from_hex(0xffffff);
    pub const WHITESMOKE: Color = Color::from_hex(0xf5f5f5);
    pub const BEIGE: Color = Color::from_hex(0xf5f5dc);
    pub const GREY: Color = Color::from_hex(0x808080);

    /// Build a color from `0xRRGGBB`
    pub const fn from_hex(hex: u32) -> Self {
        Self {
            r: ((hex >> 16) & 0xff) as f32 / 255.0,
            g: ((hex >> 8) & 0xff) as f32 / 255.0,
            b: (hex & 0xff) as f32 / 255.0,
        }
    }

    /// Operands shared by `rg` and `RG`
    pub(crate) fn operands(&self) -> String {
        format!(
            "{} {} {}",
            crate::document::num(self.r),
            crate::document::num(self.g),
            crate::document::num(self.b)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_hex() {
        assert_eq!(Color::from_hex(0xffffff), Color::WHITE);
        let c = Color::from_hex(0xff6b6b);
        assert_eq!(c.r, 1.0);
        assert!((c.g - 107.0 / 255.0).abs() < 1e-6);
    }

    #[test]
    fn test_operands() {
        assert_eq!(Color::BLACK.operands(), "0 0 0");
        assert_eq!(Color::WHITE.operands(), "1 1 1");
        assert_eq!(Color::GREY.operands(), "0.5 0.5 0.5");
    }
}
