//! Coordinate and geometry types shared by the engine and nodes.
//!
//! Canonical space:
//! - logical units, one per canvas pixel at camera zoom 1
//! - origin top-left
//! - +X right, +Y down

mod camera;
mod color;
mod vec2;
mod viewport;

pub use camera::Camera;
pub use color::Color;
pub use vec2::Vec2;
pub use viewport::Viewport;
