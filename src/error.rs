use thiserror::Error;

/// Possible errors that arise due to issues with the input image or hyper parameters.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SegmentationError {
    /// The image has no pixels along at least one axis.
    #[error("The image provided is empty ({height}x{width})")]
    EmptyImage { height: usize, width: usize },
    /// Pixels must carry 1 (intensity), 3 (RGB) or 4 (RGBA) channels.
    #[error("Unsupported channel count {0}: expected 1, 3 or 4")]
    UnsupportedChannels(usize),
    /// A pixel sample is NaN or infinite.
    #[error("Non finite sample at pixel ({row}, {col})")]
    NonFiniteSample { row: usize, col: usize },
    /// The merge sensitivity `tau_k` must be finite and strictly positive.
    #[error("Invalid merge threshold tau_k = {0}: must be finite and greater than zero")]
    InvalidMergeThreshold(f64),
}
