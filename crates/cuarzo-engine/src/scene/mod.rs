//! Scene nodes.
//!
//! Responsibilities:
//! - the `Node` contract the frame loop drives (`ready` once, `update` per frame)
//! - the closed `Component` set nodes carry
//! - a flat, append-only registry with stable insertion order

mod component;
mod ctx;
mod node;
mod registry;

pub use component::{Collision, Component, Transform};
pub use ctx::FrameCtx;
pub use node::Node;
pub use registry::{NodeId, NodeRegistry};
