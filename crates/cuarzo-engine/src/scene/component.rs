use crate::coords::Vec2;

/// Placement of a node in world space.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Transform {
    pub position: Vec2,
    pub rotation: f32,
    pub scale: Vec2,
}

impl Default for Transform {
    fn default() -> Self {
        Self {
            position: Vec2::ZERO,
            rotation: 0.0,
            scale: Vec2::new(1.0, 1.0),
        }
    }
}

/// Collision capability.
///
/// Pure data: the engine never tests shapes against each other. Which nodes
/// are colliding is decided by the integrating application.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Collision {
    /// Application-defined layer id.
    pub layer: u32,
    /// Extent of the collider in logical units.
    pub extent: Vec2,
}

impl Collision {
    pub const fn new(layer: u32, extent: Vec2) -> Self {
        Self { layer, extent }
    }
}

/// Capability attached to a node.
#[derive(Debug, Clone, PartialEq)]
pub enum Component {
    Transform(Transform),
    Collision(Collision),
    /// Application-specific tag the engine does not interpret.
    Custom(String),
}

impl Component {
    #[inline]
    pub fn as_collision(&self) -> Option<&Collision> {
        match self {
            Component::Collision(c) => Some(c),
            _ => None,
        }
    }
}
