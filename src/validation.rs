use crate::{SegmentationError, SegmentationHyperParams};
use ndarray::ArrayView3;
use num_traits::Float;

const SUPPORTED_CHANNELS: [usize; 3] = [1, 3, 4];

#[derive(Debug, Clone, PartialEq)]
pub(crate) struct ImageValidator<'a, 'b, T> {
    image: ArrayView3<'a, T>,
    hp: &'b SegmentationHyperParams,
}

impl<'a, 'b, T: Float> ImageValidator<'a, 'b, T> {
    pub(crate) fn new(image: ArrayView3<'a, T>, hp: &'b SegmentationHyperParams) -> Self {
        Self { image, hp }
    }

    pub(crate) fn validate_input_data(&self) -> Result<(), SegmentationError> {
        let (height, width, channels) = self.image.dim();
        if height == 0 || width == 0 {
            return Err(SegmentationError::EmptyImage { height, width });
        }
        if !SUPPORTED_CHANNELS.contains(&channels) {
            return Err(SegmentationError::UnsupportedChannels(channels));
        }
        if let Some(((row, col, _), _)) = self
            .image
            .indexed_iter()
            .find(|(_, sample)| !sample.is_finite())
        {
            return Err(SegmentationError::NonFiniteSample { row, col });
        }
        self.merge_threshold().map(|_| ())
    }

    /// `tau_k` converted to the sample type. The converted value is checked, since an `f64`
    /// that is positive can still round to zero or overflow to infinity in a narrower type.
    pub(crate) fn merge_threshold(&self) -> Result<T, SegmentationError> {
        let tau_k = self.hp.tau_k;
        match T::from(tau_k) {
            Some(converted) if converted.is_finite() && converted > T::zero() => Ok(converted),
            _ => Err(SegmentationError::InvalidMergeThreshold(tau_k)),
        }
    }
}
