use crate::data_wrappers::Edge;
use crate::topology::Topology;
use crate::weighting::{edge_weight, luminance};
use ndarray::{ArrayView3, Axis};
use num_traits::Float;

/// Node id of the pixel at `(row, col)` in an image `width` pixels wide. Ids start at 1.
pub fn pixel_id(row: usize, col: usize, width: usize) -> usize {
    row * width + col + 1
}

/// Inverse of [`pixel_id`]: the `(row, col)` of node `id`.
///
/// # Panics
/// If `id` is 0 or `width` is 0.
pub fn pixel_coord(id: usize, width: usize) -> (usize, usize) {
    assert!(id >= 1, "Node id 0 is reserved and has no pixel");
    let index = id - 1;
    (index / width, index % width)
}

/// Weighted graph over the pixels of an image.
///
/// Every pixel is a node with a scalar component value. Edges join each pixel to the
/// neighbours the topology selects, are weighted by the difference of component values and
/// are unique per unordered pixel pair.
#[derive(Debug, Clone)]
pub struct PixelGraph<T> {
    height: usize,
    width: usize,
    values: Vec<T>,
    edges: Vec<Edge<T>>,
}

impl<T: Float> PixelGraph<T> {
    /// Builds the graph of an image of shape `(height, width, channels)`.
    ///
    /// # Panics
    /// If a pixel has a channel count other than 1, 3 or 4.
    pub fn new(image: ArrayView3<'_, T>, topology: Topology) -> Self {
        let (height, width, _) = image.dim();
        let values = Self::component_values(image);
        let offsets = topology.offsets(height, width);

        let mut edges = Vec::with_capacity(height * width * offsets.len());
        for row in 0..height {
            for col in 0..width {
                let node = pixel_id(row, col, width);
                for &(d_row, d_col) in &offsets {
                    let (Some(n_row), Some(n_col)) =
                        (row.checked_add_signed(d_row), col.checked_add_signed(d_col))
                    else {
                        continue;
                    };
                    if n_row >= height || n_col >= width {
                        continue;
                    }
                    let neighbour = pixel_id(n_row, n_col, width);
                    let weight = edge_weight(values[node - 1], values[neighbour - 1]);
                    edges.push(Edge::new(node, neighbour, weight));
                }
            }
        }
        // Offsets on the same row reach each pair from both ends
        edges.sort_unstable_by_key(Edge::pair);
        edges.dedup_by_key(|edge| edge.pair());

        PixelGraph { height, width, values, edges }
    }

    fn component_values(image: ArrayView3<'_, T>) -> Vec<T> {
        image
            .lanes(Axis(2))
            .into_iter()
            .map(|pixel| match pixel.as_slice() {
                Some(channels) => luminance(channels),
                None => luminance(&pixel.to_vec()),
            })
            .collect()
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn width(&self) -> usize {
        self.width
    }

    /// Number of nodes, one per pixel.
    pub fn n_nodes(&self) -> usize {
        self.values.len()
    }

    /// Component value of node `id`.
    ///
    /// # Panics
    /// If `id` is not in `1..=n_nodes`.
    pub fn value(&self, id: usize) -> T {
        assert!(
            id >= 1 && id <= self.values.len(),
            "Node id {id} is outside the graph's id range 1..={}",
            self.values.len()
        );
        self.values[id - 1]
    }

    /// Deduplicated edges, ordered by node pair.
    pub fn edges(&self) -> &[Edge<T>] {
        &self.edges
    }

    pub fn into_edges(self) -> Vec<Edge<T>> {
        self.edges
    }
}
