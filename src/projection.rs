use crate::data_wrappers::ComponentSummary;
use crate::pixel_graph::pixel_id;
use crate::union_find::{DisjointSetForest, RootStats};
use ndarray::Array2;
use num_traits::Float;
use tracing::{debug, instrument};

/// Label given to pixels whose component is not among the selected largest components.
pub const UNASSIGNED: i32 = -1;

/// The final partition of an image's pixels into components.
#[derive(Debug, Clone)]
pub struct Segmentation<T> {
    forest: DisjointSetForest<T>,
    roots: Array2<usize>,
    top_n: usize,
}

impl<T: Float> Segmentation<T> {
    pub(crate) fn new(
        mut forest: DisjointSetForest<T>,
        height: usize,
        width: usize,
        top_n: usize,
    ) -> Self {
        let flat_roots = forest.labels();
        let roots = Array2::from_shape_fn((height, width), |(row, col)| {
            flat_roots[pixel_id(row, col, width) - 1]
        });
        Segmentation { forest, roots, top_n }
    }

    pub fn height(&self) -> usize {
        self.roots.nrows()
    }

    pub fn width(&self) -> usize {
        self.roots.ncols()
    }

    /// Number of components in the partition.
    pub fn component_count(&self) -> usize {
        self.forest.component_count()
    }

    /// Root node id and size of every component, in ascending root order.
    pub fn components(&self) -> Vec<(usize, usize)> {
        self.forest.components()
    }

    /// Root node id of the component of every pixel.
    pub fn labels(&self) -> &Array2<usize> {
        &self.roots
    }

    /// Statistics of the component containing the pixel at `(row, col)`.
    ///
    /// # Panics
    /// If `(row, col)` is outside the image.
    pub fn component_stats(&mut self, row: usize, col: usize) -> &RootStats<T> {
        let root = self.roots[[row, col]];
        self.forest.root_stats(root)
    }

    /// Components ordered from largest to smallest. Components of equal size are ordered by
    /// ascending root id.
    pub fn ranked_components(&self) -> Vec<(usize, usize)> {
        let mut ranked = self.forest.components();
        ranked.sort_by(|(root_a, size_a), (root_b, size_b)| {
            size_b.cmp(size_a).then(root_a.cmp(root_b))
        });
        ranked
    }

    /// Labels the pixels of the `n` largest components.
    ///
    /// The largest component is labelled 0, the next 1 and so on. Every other pixel is
    /// labelled [`UNASSIGNED`]. `n` is clamped to the number of components.
    ///
    /// # Examples
    /// ```
    ///use graph_segmentation::{GraphSegmentation, SegmentationHyperParams, UNASSIGNED};
    ///use ndarray::array;
    ///
    ///let image = array![[0.0_f32, 0.0, 0.0], [255.0, 255.0, 90.0]];
    ///let config = SegmentationHyperParams::builder().tau_k(1.0).build();
    ///let segmentation = GraphSegmentation::from_gray(image.view(), config)
    ///    .segment()
    ///    .unwrap();
    ///let projection = segmentation.project(2);
    ///assert_eq!(array![[0, 0, 0], [1, 1, UNASSIGNED]], *projection.labels());
    /// ```
    #[instrument(
        name = "segmentation.project",
        skip(self),
        fields(components = self.component_count()),
    )]
    pub fn project(&self, n: usize) -> Projection {
        let ranked = self.ranked_components();
        let n = n.min(ranked.len());

        let mut root_labels = vec![UNASSIGNED; self.forest.len() + 1];
        let components: Vec<ComponentSummary> = ranked
            .into_iter()
            .take(n)
            .enumerate()
            .map(|(label, (root, size))| {
                root_labels[root] = label as i32;
                let component = ComponentSummary { root, size, label };
                debug!(size, label, gray_level = component.gray_level(n), "component selected");
                component
            })
            .collect();

        let labels = self.roots.mapv(|root| root_labels[root]);
        Projection { components, labels }
    }

    /// Labels the pixels of the `top_n` largest components, `top_n` being taken from the
    /// hyper parameters the segmentation ran with.
    pub fn project_top_n(&self) -> Projection {
        self.project(self.top_n)
    }
}

/// Per-pixel labels for the largest components of a segmentation, ready to be rendered.
#[derive(Debug, Clone, PartialEq)]
pub struct Projection {
    components: Vec<ComponentSummary>,
    labels: Array2<i32>,
}

impl Projection {
    /// The selected components, largest first. A component's position is its label.
    pub fn components(&self) -> &[ComponentSummary] {
        &self.components
    }

    /// Label of every pixel, [`UNASSIGNED`] outside the selected components.
    pub fn labels(&self) -> &Array2<i32> {
        &self.labels
    }

    /// Label of the pixel at `(row, col)`, `None` if its component was not selected.
    ///
    /// # Panics
    /// If `(row, col)` is outside the image.
    pub fn label_at(&self, row: usize, col: usize) -> Option<usize> {
        usize::try_from(self.labels[[row, col]]).ok()
    }

    pub fn into_labels(self) -> Array2<i32> {
        self.labels
    }
}
