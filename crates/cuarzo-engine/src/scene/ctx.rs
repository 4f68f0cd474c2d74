use crate::coords::Camera;
use crate::surface::RenderContext2d;

/// Per-call context passed to node hooks.
///
/// For `Node::update`, `delta` is the milliseconds elapsed since the previous
/// frame. For `Node::ready`, it carries the start frame's timestamp.
pub struct FrameCtx<'a> {
    pub delta: f64,
    pub frame_index: u64,
    pub camera: &'a Camera,
    render: Option<&'a mut dyn RenderContext2d>,
}

impl<'a> FrameCtx<'a> {
    pub fn new(
        delta: f64,
        frame_index: u64,
        camera: &'a Camera,
        render: Option<&'a mut dyn RenderContext2d>,
    ) -> Self {
        Self {
            delta,
            frame_index,
            camera,
            render,
        }
    }

    /// The bound 2D context, absent before `Engine::init`.
    #[inline]
    pub fn render(&mut self) -> Option<&mut (dyn RenderContext2d + 'a)> {
        self.render.as_deref_mut()
    }
}
