/// 2D drawing context obtained from a [`Canvas`].
pub trait RenderContext2d {
    /// Erases the given rectangle (pixel units) to transparent.
    fn clear_rect(&mut self, x: f32, y: f32, width: f32, height: f32);
}

/// A pixel surface the engine can size and draw on.
pub trait Canvas {
    /// Sets the backing store size in pixels.
    fn set_size(&mut self, width: u32, height: u32);

    /// Current backing store size in pixels as `(width, height)`.
    fn size(&self) -> (u32, u32);

    /// Returns the 2D context, or `None` when this surface cannot provide one.
    ///
    /// `Engine::init` rejects surfaces that return `None`.
    fn context_2d(&mut self) -> Option<&mut dyn RenderContext2d>;
}
