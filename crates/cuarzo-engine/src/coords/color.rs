/// Straight-alpha RGBA color, components in `[0, 1]`.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const BLACK: Color = Color::new(0.0, 0.0, 0.0, 1.0);
    pub const TRANSPARENT: Color = Color::new(0.0, 0.0, 0.0, 0.0);

    #[inline]
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Builds a color from `0`–`255` channel bytes.
    #[inline]
    pub fn from_rgba_u8(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self::new(r as f32 / 255.0, g as f32 / 255.0, b as f32 / 255.0, a as f32 / 255.0)
    }

    /// Packs into `0xAARRGGBB`, the layout used by [`crate::surface::SoftwareCanvas`].
    pub fn to_argb_u32(self) -> u32 {
        let q = |c: f32| (c.clamp(0.0, 1.0) * 255.0).round() as u32;
        (q(self.a) << 24) | (q(self.r) << 16) | (q(self.g) << 8) | q(self.b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn packs_argb() {
        assert_eq!(Color::BLACK.to_argb_u32(), 0xFF00_0000);
        assert_eq!(Color::TRANSPARENT.to_argb_u32(), 0);
        assert_eq!(Color::from_rgba_u8(255, 128, 0, 255).to_argb_u32(), 0xFFFF_8000);
    }
}
