/// An undirected edge between two neighbouring pixels.
///
/// Node ids are stored normalised, `left_node_id < right_node_id`, so the same pixel pair
/// always yields the same edge regardless of discovery order.
#[derive(Clone, Debug, PartialEq)]
pub struct Edge<T> {
    pub left_node_id: usize,
    pub right_node_id: usize,
    pub weight: T,
}

impl<T> Edge<T> {
    /// Creates the edge between nodes `a` and `b`, normalising the pair.
    pub fn new(a: usize, b: usize, weight: T) -> Self {
        debug_assert_ne!(a, b, "An edge must join two distinct nodes");
        let (left_node_id, right_node_id) = if a < b { (a, b) } else { (b, a) };
        Edge { left_node_id, right_node_id, weight }
    }

    /// The normalised `(smaller, larger)` node pair.
    pub fn pair(&self) -> (usize, usize) {
        (self.left_node_id, self.right_node_id)
    }
}

/// A component selected by size when projecting a segmentation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ComponentSummary {
    /// Root node id of the component in the disjoint set forest.
    pub root: usize,
    /// Number of pixels in the component.
    pub size: usize,
    /// Dense label given to the component, 0 for the largest.
    pub label: usize,
}

impl ComponentSummary {
    /// Evenly spaced grey level for this component when `n` components are labelled,
    /// from `255 / n` for the largest up to 255 for the n-th.
    pub fn gray_level(&self, n: usize) -> u8 {
        if n == 0 {
            return 0;
        }
        ((self.label + 1).min(n) * 255 / n) as u8
    }
}
