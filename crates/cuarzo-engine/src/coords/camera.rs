use super::{Vec2, Viewport};

/// Maps world coordinates onto the logical viewport.
///
/// `position` is the world point shown at the viewport's top-left corner.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Camera {
    pub position: Vec2,
    viewport: Viewport,
}

impl Camera {
    pub const fn new(viewport: Viewport) -> Self {
        Self { position: Vec2::ZERO, viewport }
    }

    #[inline]
    pub const fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Replaces the viewport extent. Position is preserved.
    #[inline]
    pub fn set_viewport_size(&mut self, size: Vec2) {
        self.viewport = Viewport::from_size(size);
    }

    #[inline]
    pub fn world_to_screen(&self, world: Vec2) -> Vec2 {
        world - self.position
    }

    #[inline]
    pub fn screen_to_world(&self, screen: Vec2) -> Vec2 {
        screen + self.position
    }

    /// Centers the viewport on `target`.
    pub fn look_at(&mut self, target: Vec2) {
        self.position = target - self.viewport.center();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn world_screen_mapping_is_inverse() {
        let mut cam = Camera::new(Viewport::new(100.0, 50.0));
        cam.position = Vec2::new(10.0, -5.0);

        let w = Vec2::new(42.0, 7.0);
        assert_eq!(cam.screen_to_world(cam.world_to_screen(w)), w);
        assert_eq!(cam.world_to_screen(w), Vec2::new(32.0, 12.0));
    }

    #[test]
    fn look_at_puts_target_in_center() {
        let mut cam = Camera::new(Viewport::new(100.0, 50.0));
        cam.look_at(Vec2::new(200.0, 200.0));
        assert_eq!(cam.world_to_screen(Vec2::new(200.0, 200.0)), Vec2::new(50.0, 25.0));
    }

    #[test]
    fn set_viewport_size_keeps_position() {
        let mut cam = Camera::new(Viewport::DEFAULT);
        cam.position = Vec2::new(3.0, 4.0);
        cam.set_viewport_size(Vec2::new(320.0, 240.0));
        assert_eq!(cam.viewport(), Viewport::new(320.0, 240.0));
        assert_eq!(cam.position, Vec2::new(3.0, 4.0));
    }
}
