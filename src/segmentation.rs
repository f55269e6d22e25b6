use crate::data_wrappers::Edge;
use crate::pixel_graph::PixelGraph;
use crate::projection::Segmentation;
use crate::union_find::DisjointSetForest;
use crate::validation::ImageValidator;
use crate::{SegmentationError, SegmentationHyperParams};
use ndarray::{ArrayView2, ArrayView3, Axis};
use num_traits::Float;
use std::cmp::Ordering;
use tracing::{debug, info, instrument};

/// Graph based image segmentation in Rust. Generic over floating point sample types.
#[derive(Debug, Clone)]
pub struct GraphSegmentation<'a, T> {
    image: ArrayView3<'a, T>,
    hp: SegmentationHyperParams,
}

impl<'a, T: Float> GraphSegmentation<'a, T> {
    /// Creates an instance of the segmentation model using a custom hyper parameter
    /// configuration.
    ///
    /// # Parameters
    /// * `image` - a view of the image to segment, shaped `(height, width, channels)`. Pixels
    ///             must have 1 (intensity), 3 (RGB) or 4 (RGBA) channels and contain no
    ///             non-finite samples.
    /// * `hyper_params` - the hyper parameter configuration.
    ///
    /// # Returns
    /// * The segmentation model instance.
    ///
    /// # Examples
    /// ```
    ///use graph_segmentation::{GraphSegmentation, SegmentationHyperParams, Topology};
    ///use ndarray::Array3;
    ///
    ///let image = Array3::<f32>::zeros((16, 16, 3));
    ///let config = SegmentationHyperParams::builder()
    ///    .tau_k(150.0)
    ///    .topology(Topology::Radius(2))
    ///    .build();
    ///let segmenter = GraphSegmentation::new(image.view(), config);
    /// ```
    pub fn new(image: ArrayView3<'a, T>, hyper_params: SegmentationHyperParams) -> Self {
        GraphSegmentation { image, hp: hyper_params }
    }

    /// Creates an instance of the segmentation model for a single channel image, shaped
    /// `(height, width)`.
    ///
    /// # Examples
    /// ```
    ///use graph_segmentation::{GraphSegmentation, SegmentationHyperParams};
    ///use ndarray::array;
    ///
    ///let image = array![[0.0_f32, 0.0], [255.0, 255.0]];
    ///let config = SegmentationHyperParams::builder().tau_k(1.0).build();
    ///let segmenter = GraphSegmentation::from_gray(image.view(), config);
    ///let segmentation = segmenter.segment().unwrap();
    ///assert_eq!(2, segmentation.component_count());
    /// ```
    pub fn from_gray(image: ArrayView2<'a, T>, hyper_params: SegmentationHyperParams) -> Self {
        Self::new(image.insert_axis(Axis(2)), hyper_params)
    }

    /// Creates an instance of the segmentation model using the default hyper parameters.
    ///
    /// # Parameters
    /// * `image` - a view of the image to segment, shaped `(height, width, channels)`.
    ///
    /// # Returns
    /// * The segmentation model instance.
    pub fn default_hyper_params(image: ArrayView3<'a, T>) -> Self {
        Self::new(image, SegmentationHyperParams::default())
    }

    /// Segments the image passed to the constructor.
    ///
    /// # Returns
    /// * A result that, if successful, contains the final partition of the pixels into
    ///   components. An Error will be returned if the image is empty, if its pixels have an
    ///   unsupported number of channels or contain non-finite samples, or if `tau_k` is not
    ///   a finite, positive number.
    ///
    /// # Examples
    /// ```
    ///use graph_segmentation::{GraphSegmentation, SegmentationHyperParams};
    ///use ndarray::array;
    ///
    ///let image = array![[0.0_f64, 10.0, 20.0, 200.0, 210.0]];
    ///let config = SegmentationHyperParams::builder().tau_k(30.0).build();
    ///let segmentation = GraphSegmentation::from_gray(image.view(), config)
    ///    .segment()
    ///    .unwrap();
    ///let labels = segmentation.labels();
    ///assert_eq!(labels[[0, 0]], labels[[0, 2]]);
    ///assert_ne!(labels[[0, 2]], labels[[0, 3]]);
    /// ```
    #[instrument(
        name = "segmentation.segment",
        err,
        skip(self),
        fields(
            height = self.image.dim().0,
            width = self.image.dim().1,
            tau_k = self.hp.tau_k,
            topology = ?self.hp.topology,
        ),
    )]
    pub fn segment(&self) -> Result<Segmentation<T>, SegmentationError> {
        let validator = ImageValidator::new(self.image, &self.hp);
        validator.validate_input_data()?;
        let tau_k = validator.merge_threshold()?;

        let graph = PixelGraph::new(self.image, self.hp.topology);
        let (height, width) = (graph.height(), graph.width());
        debug!(nodes = graph.n_nodes(), edges = graph.edges().len(), "pixel graph built");

        let engine = SegmentationEngine::new(graph.n_nodes(), tau_k);
        let forest = engine.run(graph.into_edges());
        let segmentation = Segmentation::new(forest, height, width, self.hp.top_n);
        info!(components = segmentation.component_count(), "segmentation completed");
        Ok(segmentation)
    }
}

/// Greedy merge pass over weighted edges.
///
/// Edges are taken in ascending weight order. An edge joins its two components only if its
/// weight is below the smaller of the two components' adaptive thresholds,
/// `min_internal_difference + tau_k / size`. Each edge is considered exactly once.
#[derive(Debug, Clone)]
pub struct SegmentationEngine<T> {
    forest: DisjointSetForest<T>,
    tau_k: T,
    merges: usize,
}

impl<T: Float> SegmentationEngine<T> {
    /// Creates an engine over `n_nodes` singleton components.
    pub fn new(n_nodes: usize, tau_k: T) -> Self {
        SegmentationEngine { forest: DisjointSetForest::new(n_nodes), tau_k, merges: 0 }
    }

    /// Sorts `edges` and processes all of them, returning the final forest.
    pub fn run(mut self, mut edges: Vec<Edge<T>>) -> DisjointSetForest<T> {
        sort_edges_by_weight(&mut edges);
        for edge in &edges {
            self.process(edge);
        }
        debug!(edges = edges.len(), merges = self.merges, "merge pass finished");
        self.forest
    }

    /// Applies the merge criterion to a single edge.
    ///
    /// # Returns
    /// * `true` if the edge merged two components.
    pub fn process(&mut self, edge: &Edge<T>) -> bool {
        let left_threshold = self.forest.root_stats(edge.left_node_id).threshold(self.tau_k);
        let right_threshold = self.forest.root_stats(edge.right_node_id).threshold(self.tau_k);
        if edge.weight >= left_threshold.min(right_threshold) {
            return false;
        }
        let merged = self.forest.union(edge.left_node_id, edge.right_node_id, edge.weight);
        if merged {
            self.merges += 1;
        }
        merged
    }

    /// Number of merges made so far.
    pub fn merges(&self) -> usize {
        self.merges
    }

    pub fn forest_mut(&mut self) -> &mut DisjointSetForest<T> {
        &mut self.forest
    }

    pub fn into_forest(self) -> DisjointSetForest<T> {
        self.forest
    }
}

/// Sorts edges by ascending weight. Equal weights are ordered by node pair so that the
/// merge order, and so the segmentation, is reproducible.
pub fn sort_edges_by_weight<T: Float>(edges: &mut [Edge<T>]) {
    edges.sort_by(|a, b| {
        a.weight
            .partial_cmp(&b.weight)
            .unwrap_or(Ordering::Equal)
            .then_with(|| a.pair().cmp(&b.pair()))
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ties_are_broken_by_node_pair() {
        let mut edges = vec![
            Edge::new(5, 4, 1.0_f32),
            Edge::new(2, 3, 0.5),
            Edge::new(1, 2, 1.0),
            Edge::new(3, 1, 1.0),
        ];
        sort_edges_by_weight(&mut edges);
        let pairs: Vec<_> = edges.iter().map(|e| e.pair()).collect();
        assert_eq!(vec![(2, 3), (1, 2), (1, 3), (4, 5)], pairs);
    }

    #[test]
    fn edge_at_threshold_is_rejected() {
        // Singleton threshold is tau_k / 1
        let mut engine = SegmentationEngine::new(2, 2.0_f64);
        assert!(!engine.process(&Edge::new(1, 2, 2.0)));
        assert!(engine.process(&Edge::new(1, 2, 1.999)));
        assert_eq!(1, engine.merges());
    }

    #[test]
    fn smaller_threshold_decides() {
        let mut engine = SegmentationEngine::new(4, 4.0_f64);
        engine.process(&Edge::new(1, 2, 1.0));
        engine.process(&Edge::new(1, 3, 1.0));
        // {1,2,3}: 1 + 4/3 ≈ 2.33; {4}: 0 + 4 = 4
        assert!(!engine.process(&Edge::new(3, 4, 2.5)));
        assert!(engine.process(&Edge::new(3, 4, 2.3)));
        assert_eq!(1, engine.into_forest().component_count());
    }

    #[test]
    fn edges_within_a_component_do_not_count_as_merges() {
        let mut engine = SegmentationEngine::new(3, 10.0_f32);
        engine.process(&Edge::new(1, 2, 0.0));
        engine.process(&Edge::new(2, 3, 0.0));
        assert!(!engine.process(&Edge::new(1, 3, 0.0)));
        assert_eq!(2, engine.merges());
        assert_eq!(3, engine.forest_mut().root_stats(1).size());
    }
}
