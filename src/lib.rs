//! Graph based image segmentation in Rust. Generic over floating point sample types.
//!
//! Each pixel becomes a node of a graph and edges join spatially neighbouring pixels,
//! weighted by the difference of their intensities (or luminances, for colour pixels).
//! Regions are grown by taking the edges in ascending weight order and merging the two
//! components an edge joins whenever its weight is below both components' adaptive
//! thresholds:
//!  1. A component's threshold is the weight of the edge that last grew it plus
//!     `tau_k / size`. Small components merge readily while large ones need a clear
//!     contrast at their boundary before they stop growing; and
//!  2. Each edge is considered once, in a single greedy pass, so segmentation is fast and
//!     fully deterministic.
//!
//! `tau_k` is the single tunable. Larger values give a coarser segmentation.
//!
//! Components are tracked in a disjoint set forest with path compression and union by rank,
//! augmented with the size and internal difference of every component.
//!
//! # Examples
//! ```
//!use graph_segmentation::{GraphSegmentation, SegmentationHyperParams, Topology};
//!use ndarray::array;
//!
//!let image = array![
//!    [0.0_f32, 0.0, 0.0, 0.0],
//!    [0.0, 0.0, 0.0, 0.0],
//!    [255.0, 255.0, 255.0, 255.0],
//!];
//!let config = SegmentationHyperParams::builder()
//!    .tau_k(1.0)
//!    .topology(Topology::Grid)
//!    .build();
//!let segmentation = GraphSegmentation::from_gray(image.view(), config)
//!    .segment()
//!    .unwrap();
//!assert_eq!(2, segmentation.component_count());
//!
//!let projection = segmentation.project(1);
//!assert_eq!(8, projection.components()[0].size);
//! ```
//!
//! # References
//! * [Felzenszwalb, P.F.; Huttenlocher, D.P. Efficient Graph-Based Image Segmentation.](https://doi.org/10.1023/B:VISI.0000022288.19776.77)

pub use crate::data_wrappers::{ComponentSummary, Edge};
pub use crate::error::SegmentationError;
pub use crate::hyper_parameters::{HyperParamBuilder, SegmentationHyperParams};
pub use crate::pixel_graph::{pixel_coord, pixel_id, PixelGraph};
pub use crate::projection::{Projection, Segmentation, UNASSIGNED};
pub use crate::segmentation::{sort_edges_by_weight, GraphSegmentation, SegmentationEngine};
pub use crate::topology::{Offset, Topology};
pub use crate::union_find::{DisjointSetForest, RootStats};
pub use crate::weighting::{edge_weight, luminance};

mod data_wrappers;
mod error;
mod hyper_parameters;
mod pixel_graph;
mod projection;
mod segmentation;
mod topology;
mod union_find;
mod validation;
mod weighting;
