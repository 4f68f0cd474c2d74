use super::Vec2;

/// Logical viewport extent.
///
/// Replaced wholesale when the canvas is rebound; never mutated in place.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    /// Extent used when `init` is given no explicit size.
    pub const DEFAULT: Viewport = Viewport::new(600.0, 800.0);

    #[inline]
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    #[inline]
    pub const fn from_size(size: Vec2) -> Self {
        Self::new(size.x, size.y)
    }

    #[inline]
    pub const fn size(self) -> Vec2 {
        Vec2::new(self.width, self.height)
    }

    #[inline]
    pub fn center(self) -> Vec2 {
        self.size() * 0.5
    }

    #[inline]
    pub fn is_valid(self) -> bool {
        self.width > 0.0 && self.height > 0.0 && self.width.is_finite() && self.height.is_finite()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_extent_is_600_by_800() {
        assert_eq!(Viewport::DEFAULT.width, 600.0);
        assert_eq!(Viewport::DEFAULT.height, 800.0);
    }

    #[test]
    fn zero_or_nan_is_invalid() {
        assert!(!Viewport::new(0.0, 10.0).is_valid());
        assert!(!Viewport::new(10.0, f32::NAN).is_valid());
        assert!(Viewport::new(1.0, 1.0).is_valid());
    }

    #[test]
    fn center_is_half_extent() {
        assert_eq!(Viewport::new(600.0, 800.0).center(), Vec2::new(300.0, 400.0));
    }
}
