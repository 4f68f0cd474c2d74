use crate::coords::Color;

use super::{Canvas, RenderContext2d};

/// CPU-side canvas backed by a `0xAARRGGBB` pixel buffer.
///
/// Used by the native runtime and by tests; it implements the same contract a
/// browser canvas would.
#[derive(Debug, Clone, Default)]
pub struct SoftwareCanvas {
    width: u32,
    height: u32,
    pixels: Vec<u32>,
}

impl SoftwareCanvas {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn pixels(&self) -> &[u32] {
        &self.pixels
    }

    pub fn pixel(&self, x: u32, y: u32) -> Option<u32> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.pixels
            .get(y as usize * self.width as usize + x as usize)
            .copied()
    }

    /// Fills a rectangle with `color`. Out-of-bounds parts are clipped.
    pub fn fill_rect(&mut self, x: f32, y: f32, width: f32, height: f32, color: Color) {
        self.write_rect(x, y, width, height, color.to_argb_u32());
    }

    fn write_rect(&mut self, x: f32, y: f32, width: f32, height: f32, value: u32) {
        let Some((x0, y0, x1, y1)) = self.clip(x, y, width, height) else {
            return;
        };

        let stride = self.width as usize;
        for row in y0..y1 {
            let start = row as usize * stride;
            self.pixels[start + x0 as usize..start + x1 as usize].fill(value);
        }
    }

    /// Clips a float rect to integer pixel bounds `[x0, x1) × [y0, y1)`.
    fn clip(&self, x: f32, y: f32, width: f32, height: f32) -> Option<(u32, u32, u32, u32)> {
        if !(x.is_finite() && y.is_finite() && width.is_finite() && height.is_finite()) {
            return None;
        }

        let (mut x0, mut x1) = (x, x + width);
        let (mut y0, mut y1) = (y, y + height);
        if x1 < x0 {
            std::mem::swap(&mut x0, &mut x1);
        }
        if y1 < y0 {
            std::mem::swap(&mut y0, &mut y1);
        }

        let x0 = x0.floor().clamp(0.0, self.width as f32) as u32;
        let x1 = x1.ceil().clamp(0.0, self.width as f32) as u32;
        let y0 = y0.floor().clamp(0.0, self.height as f32) as u32;
        let y1 = y1.ceil().clamp(0.0, self.height as f32) as u32;

        (x0 < x1 && y0 < y1).then_some((x0, y0, x1, y1))
    }
}

impl Canvas for SoftwareCanvas {
    fn set_size(&mut self, width: u32, height: u32) {
        self.width = width;
        self.height = height;
        // Resizing a canvas discards its contents.
        self.pixels.clear();
        self.pixels.resize(width as usize * height as usize, 0);
    }

    fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    fn context_2d(&mut self) -> Option<&mut dyn RenderContext2d> {
        Some(self)
    }
}

impl RenderContext2d for SoftwareCanvas {
    fn clear_rect(&mut self, x: f32, y: f32, width: f32, height: f32) {
        self.write_rect(x, y, width, height, 0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn canvas(w: u32, h: u32) -> SoftwareCanvas {
        let mut c = SoftwareCanvas::new();
        c.set_size(w, h);
        c
    }

    #[test]
    fn set_size_allocates_transparent_pixels() {
        let c = canvas(4, 3);
        assert_eq!(c.size(), (4, 3));
        assert_eq!(c.pixels().len(), 12);
        assert!(c.pixels().iter().all(|&p| p == 0));
    }

    #[test]
    fn fill_then_clear_full_extent() {
        let mut c = canvas(4, 4);
        c.fill_rect(0.0, 0.0, 4.0, 4.0, Color::BLACK);
        assert!(c.pixels().iter().all(|&p| p == 0xFF00_0000));

        c.clear_rect(0.0, 0.0, 4.0, 4.0);
        assert!(c.pixels().iter().all(|&p| p == 0));
    }

    #[test]
    fn partial_rect_is_clipped() {
        let mut c = canvas(4, 4);
        c.fill_rect(2.0, 2.0, 10.0, 10.0, Color::BLACK);
        assert_eq!(c.pixel(1, 1), Some(0));
        assert_eq!(c.pixel(2, 2), Some(0xFF00_0000));
        assert_eq!(c.pixel(3, 3), Some(0xFF00_0000));
        assert_eq!(c.pixel(4, 4), None);
    }

    #[test]
    fn negative_extent_is_normalized() {
        let mut c = canvas(4, 4);
        c.fill_rect(3.0, 3.0, -2.0, -2.0, Color::BLACK);
        assert_eq!(c.pixel(1, 1), Some(0xFF00_0000));
        assert_eq!(c.pixel(0, 0), Some(0));
    }

    #[test]
    fn pixel_index_does_not_overflow_u32() {
        // 70000 * 70000 exceeds u32::MAX.
        let c = SoftwareCanvas {
            width: 70_000,
            height: 70_000,
            pixels: Vec::new(),
        };
        assert_eq!(c.pixel(69_999, 69_999), None);
        assert_eq!(c.pixel(70_000, 0), None);
    }

    #[test]
    fn context_is_always_available() {
        let mut c = canvas(1, 1);
        assert!(c.context_2d().is_some());
    }
}
