use num_traits::Float;

// Luminance weights for colour pixels.
const RED_WEIGHT: f64 = 0.298912;
const GREEN_WEIGHT: f64 = 0.586611;
const BLUE_WEIGHT: f64 = 0.114478;

/// Scalar component value of a pixel.
///
/// Single channel pixels are used as is. RGB and RGBA pixels are reduced to their weighted
/// luminance; the alpha channel is ignored.
///
/// # Panics
/// If the pixel has a channel count other than 1, 3 or 4. Images are validated before
/// segmentation, so this only fires when called directly with a malformed pixel.
pub fn luminance<T: Float>(pixel: &[T]) -> T {
    match pixel.len() {
        1 => pixel[0],
        3 | 4 => {
            weight::<T>(RED_WEIGHT) * pixel[0]
                + weight::<T>(GREEN_WEIGHT) * pixel[1]
                + weight::<T>(BLUE_WEIGHT) * pixel[2]
        }
        n => panic!("Cannot compute a component value for a pixel with {n} channels"),
    }
}

/// Dissimilarity between two component values. Never negative.
pub fn edge_weight<T: Float>(a: T, b: T) -> T {
    (a - b).abs()
}

// Float to float casts never fail; values outside T's range would saturate, and these
// weights are well inside the range of every float type.
fn weight<T: Float>(w: f64) -> T {
    T::from(w).expect("luminance weights are representable by every float type")
}
