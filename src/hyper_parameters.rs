use crate::topology::Topology;

// Defaults for parameters
const TAU_K_DEFAULT: f64 = 4.5;
const TOPOLOGY_DEFAULT: Topology = Topology::Grid;
const TOP_N_DEFAULT: usize = 20;

/// A wrapper around the hyper parameters used in graph based segmentation.
/// Only use if you want to tune hyper parameters. Otherwise use
/// `GraphSegmentation::default_hyper_params()` to instantiate the model with defaults.
#[derive(Debug, Clone, PartialEq)]
pub struct SegmentationHyperParams {
    pub(crate) tau_k: f64,
    pub(crate) topology: Topology,
    pub(crate) top_n: usize,
}

/// Builder object to set custom hyper parameters.
#[derive(Debug, Clone, Default)]
pub struct HyperParamBuilder {
    tau_k: Option<f64>,
    topology: Option<Topology>,
    top_n: Option<usize>,
}

impl SegmentationHyperParams {
    pub(crate) fn default() -> Self {
        Self::builder().build()
    }

    /// Enters the builder pattern, allowing custom hyper parameters to be set using
    /// various setter methods.
    ///
    /// # Returns
    /// * the hyper parameter configuration builder
    pub fn builder() -> HyperParamBuilder {
        HyperParamBuilder::default()
    }

    /// The merge sensitivity in use.
    pub fn tau_k(&self) -> f64 {
        self.tau_k
    }

    /// The neighbour topology in use.
    pub fn topology(&self) -> Topology {
        self.topology
    }

    /// The number of largest components labelled by `Segmentation::project_top_n`.
    pub fn top_n(&self) -> usize {
        self.top_n
    }
}

impl HyperParamBuilder {
    /// Sets the merge sensitivity, `tau_k`. Each component tolerates an extra
    /// `tau_k / size` of boundary contrast on top of its internal difference before it
    /// stops merging, so larger values give a coarser segmentation with fewer, bigger
    /// regions. This should be considered the main hyper parameter for changing the
    /// results of segmentation. Must be finite and greater than zero; this is checked when
    /// segmentation runs. Defaults to 4.5, though photographs typically need values in the
    /// hundreds.
    ///
    /// # Parameters
    /// * tau_k - the merge sensitivity
    ///
    /// # Returns
    /// * the hyper parameter configuration builder
    pub fn tau_k(mut self, tau_k: f64) -> HyperParamBuilder {
        self.tau_k = Some(tau_k);
        self
    }

    /// Sets the neighbour topology: which pixel pairs become candidate edges.
    /// Defaults to `Topology::Grid`.
    ///
    /// # Parameters
    /// * topology - the neighbour topology
    ///
    /// # Returns
    /// * the hyper parameter configuration builder
    pub fn topology(mut self, topology: Topology) -> HyperParamBuilder {
        self.topology = Some(topology);
        self
    }

    /// Sets how many of the largest components receive a label when projecting the result
    /// with `Segmentation::project_top_n`. Defaults to 20.
    ///
    /// # Parameters
    /// * top_n - the number of components to label
    ///
    /// # Returns
    /// * the hyper parameter configuration builder
    pub fn top_n(mut self, top_n: usize) -> HyperParamBuilder {
        self.top_n = Some(top_n);
        self
    }

    /// Finishes the building of the hyper parameter configuration. A call to this method is
    /// required to exit the builder pattern and complete the construction of the hyper
    /// parameters.
    ///
    /// # Returns
    /// * The completed segmentation hyper parameter configuration.
    pub fn build(self) -> SegmentationHyperParams {
        SegmentationHyperParams {
            tau_k: self.tau_k.unwrap_or(TAU_K_DEFAULT),
            topology: self.topology.unwrap_or(TOPOLOGY_DEFAULT),
            top_n: self.top_n.unwrap_or(TOP_N_DEFAULT),
        }
    }
}
