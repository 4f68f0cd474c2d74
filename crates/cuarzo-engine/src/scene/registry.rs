use super::Node;

/// Stable index of a mounted node.
///
/// The registry is append-only, so ids never dangle or shift.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub struct NodeId(pub usize);

/// Flat, append-only node collection.
///
/// - `extend()` is O(n) in the appended nodes
/// - iteration order is insertion order, stable across frames
#[derive(Default)]
pub struct NodeRegistry {
    nodes: Vec<Box<dyn Node>>,
}

impl NodeRegistry {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    #[inline]
    pub fn contains(&self, id: NodeId) -> bool {
        id.0 < self.nodes.len()
    }

    /// Appends `nodes` in order and returns their ids.
    pub fn extend<I>(&mut self, nodes: I) -> Vec<NodeId>
    where
        I: IntoIterator<Item = Box<dyn Node>>,
    {
        let first = self.nodes.len();
        self.nodes.extend(nodes);
        (first..self.nodes.len()).map(NodeId).collect()
    }

    #[inline]
    pub fn get(&self, id: NodeId) -> Option<&dyn Node> {
        self.nodes.get(id.0).map(|n| &**n)
    }

    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, Box<dyn Node>> {
        self.nodes.iter()
    }

    #[inline]
    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, Box<dyn Node>> {
        self.nodes.iter_mut()
    }
}

impl std::fmt::Debug for NodeRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NodeRegistry").field("len", &self.nodes.len()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::FrameCtx;

    struct Dummy;

    impl Node for Dummy {
        fn update(&mut self, _ctx: &mut FrameCtx<'_>) {}
    }

    fn boxed(n: usize) -> Vec<Box<dyn Node>> {
        (0..n).map(|_| Box::new(Dummy) as Box<dyn Node>).collect()
    }

    #[test]
    fn extend_concatenates_and_returns_ids() {
        let mut reg = NodeRegistry::new();
        assert_eq!(reg.extend(boxed(2)), vec![NodeId(0), NodeId(1)]);
        assert_eq!(reg.extend(boxed(1)), vec![NodeId(2)]);
        assert_eq!(reg.len(), 3);
    }

    #[test]
    fn empty_extend_is_noop() {
        let mut reg = NodeRegistry::new();
        assert!(reg.extend(Vec::new()).is_empty());
        assert!(reg.is_empty());
    }

    #[test]
    fn contains_tracks_bounds() {
        let mut reg = NodeRegistry::new();
        reg.extend(boxed(1));
        assert!(reg.contains(NodeId(0)));
        assert!(!reg.contains(NodeId(1)));
        assert!(reg.get(NodeId(1)).is_none());
    }
}
