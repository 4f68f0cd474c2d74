/// Opaque id of a scheduled animation frame.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub struct FrameHandle(pub u64);

/// Per-frame scheduling primitive.
///
/// A request schedules exactly one callback: the host later calls
/// `Engine::on_animation_frame(handle, timestamp_ms)` once, on the next
/// display refresh. Cancelled handles must not be delivered; the engine
/// ignores them anyway.
pub trait FrameScheduler {
    fn request_animation_frame(&mut self) -> FrameHandle;

    fn cancel_animation_frame(&mut self, handle: FrameHandle);
}
