use super::{Component, FrameCtx};

/// An entity driven by the frame loop.
///
/// Nodes are created by the caller and handed to `Engine::mount`, which owns
/// them from then on. Hooks run in registry order.
pub trait Node {
    /// Components attached to this node.
    fn components(&self) -> &[Component] {
        &[]
    }

    /// Called once, on the first frame after mounting.
    fn ready(&mut self, ctx: &mut FrameCtx<'_>) {
        let _ = ctx;
    }

    /// Called once per frame while the loop runs.
    fn update(&mut self, ctx: &mut FrameCtx<'_>);
}
