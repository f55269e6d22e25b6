use graph_segmentation::{
    sort_edges_by_weight, DisjointSetForest, GraphSegmentation, PixelGraph,
    SegmentationEngine, SegmentationHyperParams, Topology,
};
use ndarray::{Array2, Axis};
use proptest::prelude::*;
use std::collections::HashSet;

fn image_strategy() -> impl Strategy<Value = Array2<f32>> {
    (1usize..10, 1usize..10).prop_flat_map(|(height, width)| {
        prop::collection::vec(0u8..8, height * width).prop_map(move |samples| {
            let samples: Vec<f32> = samples.into_iter().map(|s| f32::from(s) * 32.0).collect();
            Array2::from_shape_vec((height, width), samples).unwrap()
        })
    })
}

fn topology_strategy() -> impl Strategy<Value = Topology> {
    prop_oneof![Just(Topology::Grid), (0usize..4).prop_map(Topology::Radius)]
}

fn unions_strategy() -> impl Strategy<Value = (usize, Vec<(usize, usize)>)> {
    (1usize..60).prop_flat_map(|n| {
        let pairs = prop::collection::vec((1..=n, 1..=n), 0..(2 * n));
        (Just(n), pairs)
    })
}

fn hyper_params(tau_k: f64, topology: Topology) -> SegmentationHyperParams {
    SegmentationHyperParams::builder()
        .tau_k(tau_k)
        .topology(topology)
        .build()
}

proptest! {
    #[test]
    fn every_pixel_belongs_to_exactly_one_component(
        image in image_strategy(),
        tau_k in 0.5f64..500.0,
        topology in topology_strategy(),
    ) {
        let hp = hyper_params(tau_k, topology);
        let segmentation = GraphSegmentation::from_gray(image.view(), hp).segment().unwrap();
        let components = segmentation.components();
        let total: usize = components.iter().map(|&(_, size)| size).sum();
        prop_assert_eq!(image.len(), total);

        let roots: HashSet<usize> = components.iter().map(|&(root, _)| root).collect();
        prop_assert_eq!(components.len(), roots.len());
        for &(root, size) in &components {
            let members = segmentation.labels().iter().filter(|&&r| r == root).count();
            prop_assert_eq!(size, members);
        }
        prop_assert!(segmentation.labels().iter().all(|root| roots.contains(root)));
    }

    #[test]
    fn segmentation_is_deterministic(
        image in image_strategy(),
        tau_k in 0.5f64..500.0,
        topology in topology_strategy(),
    ) {
        let segmenter = GraphSegmentation::from_gray(image.view(), hyper_params(tau_k, topology));
        let first = segmenter.segment().unwrap();
        let second = segmenter.segment().unwrap();
        prop_assert_eq!(first.labels(), second.labels());
        prop_assert_eq!(first.project(3), second.project(3));
    }

    #[test]
    fn projection_saturates_at_component_count(
        image in image_strategy(),
        tau_k in 0.5f64..50.0,
        extra in 1usize..20,
    ) {
        let hp = hyper_params(tau_k, Topology::Grid);
        let segmentation = GraphSegmentation::from_gray(image.view(), hp).segment().unwrap();
        let available = segmentation.component_count();
        prop_assert_eq!(segmentation.project(available), segmentation.project(available + extra));
    }

    #[test]
    fn min_internal_difference_never_decreases(
        image in image_strategy(),
        tau_k in 0.5f64..500.0,
        topology in topology_strategy(),
    ) {
        let graph = PixelGraph::new(image.view().insert_axis(Axis(2)), topology);
        let n_nodes = graph.n_nodes();
        let mut edges = graph.into_edges();
        sort_edges_by_weight(&mut edges);

        let mut engine = SegmentationEngine::new(n_nodes, tau_k as f32);
        for edge in &edges {
            let forest = engine.forest_mut();
            let before_left = forest.root_stats(edge.left_node_id).min_internal_difference();
            let before_right = forest.root_stats(edge.right_node_id).min_internal_difference();
            if engine.process(edge) {
                let after = engine
                    .forest_mut()
                    .root_stats(edge.left_node_id)
                    .min_internal_difference();
                prop_assert!(after >= before_left);
                prop_assert!(after >= before_right);
                prop_assert_eq!(edge.weight, after);
            }
        }
    }

    #[test]
    fn find_is_idempotent_and_compression_preserves_partition(
        (n, unions) in unions_strategy(),
    ) {
        let mut forest = DisjointSetForest::<f64>::new(n);
        for (i, &(a, b)) in unions.iter().enumerate() {
            forest.union(a, b, i as f64);
        }
        let snapshot = forest.clone();
        let before = forest.labels();
        for node in 1..=n {
            let root = forest.find(node);
            prop_assert_eq!(root, forest.find(root));
        }
        prop_assert_eq!(&before, &forest.labels());

        let mut uncompressed = snapshot;
        for node in 1..=n {
            prop_assert_eq!(before[node - 1], uncompressed.find(node));
        }
        let total: usize = forest.components().iter().map(|&(_, size)| size).sum();
        prop_assert_eq!(n, total);
    }

    #[test]
    fn union_joins_regardless_of_argument_order(
        (n, unions) in unions_strategy(),
        a in 1usize..60,
        b in 1usize..60,
    ) {
        let (a, b) = (a.min(n), b.min(n));
        let mut forward = DisjointSetForest::<f32>::new(n);
        let mut backward = DisjointSetForest::<f32>::new(n);
        for &(x, y) in &unions {
            forward.union(x, y, 0.0);
            backward.union(x, y, 0.0);
        }
        forward.union(a, b, 1.0);
        backward.union(b, a, 1.0);
        prop_assert_eq!(forward.find(a), forward.find(b));
        prop_assert_eq!(backward.find(a), backward.find(b));
        prop_assert_eq!(forward.component_count(), backward.component_count());
        for x in 1..=n {
            for y in 1..=n {
                prop_assert_eq!(
                    forward.find(x) == forward.find(y),
                    backward.find(x) == backward.find(y)
                );
            }
        }
    }
}
