use tracing::debug;

/// Relative `(Δrow, Δcol)` position of a neighbouring pixel.
pub type Offset = (isize, isize);

// Forward half of the 8-neighbourhood: every adjacent pair is reached once.
const GRID_OFFSETS: [Offset; 4] = [(1, -1), (1, 0), (1, 1), (0, 1)];

/// Possible neighbour topologies that decide which pixel pairs become candidate edges
/// of the pixel graph.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Topology {
    /// Connects each pixel to its right, lower-left, lower and lower-right neighbours.
    Grid,
    /// Connects each pixel to every pixel within the given Euclidean radius on the same
    /// row or below it. The radius is clamped to `min(height, width) / 4` to bound the
    /// number of edges.
    Radius(usize),
}

impl Topology {
    /// Neighbour offsets for an image of the given dimensions.
    pub fn offsets(&self, height: usize, width: usize) -> Vec<Offset> {
        match *self {
            Self::Grid => GRID_OFFSETS.to_vec(),
            Self::Radius(radius) => {
                let effective = Self::clamp_radius(radius, height, width);
                if effective != radius {
                    debug!(requested = radius, effective, "neighbour radius clamped");
                }
                radius_offsets(effective)
            }
        }
    }

    fn clamp_radius(radius: usize, height: usize, width: usize) -> usize {
        radius.min(height.min(width) / 4)
    }
}

fn radius_offsets(radius: usize) -> Vec<Offset> {
    let r = radius as isize;
    let mut offsets = Vec::with_capacity((radius + 1) * (2 * radius + 1));
    for d_row in 0..=r {
        for d_col in -r..=r {
            if d_row == 0 && d_col == 0 {
                continue;
            }
            // Integer form of sqrt(dr² + dc²) <= r
            if d_row * d_row + d_col * d_col > r * r {
                continue;
            }
            offsets.push((d_row, d_col));
        }
    }
    offsets
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grid_offsets_are_fixed() {
        let offsets = Topology::Grid.offsets(100, 100);
        assert_eq!(vec![(1, -1), (1, 0), (1, 1), (0, 1)], offsets);
    }

    #[test]
    fn radius_one_is_half_plane_cross() {
        let offsets = Topology::Radius(1).offsets(100, 100);
        assert_eq!(vec![(0, -1), (0, 1), (1, 0)], offsets);
    }

    #[test]
    fn radius_two_respects_euclidean_bound() {
        let offsets = Topology::Radius(2).offsets(100, 100);
        assert!(offsets.contains(&(1, 1)));
        assert!(offsets.contains(&(2, 0)));
        assert!(offsets.contains(&(0, -2)));
        assert!(!offsets.contains(&(2, 1)));
        assert!(!offsets.contains(&(0, 0)));
        assert!(offsets.iter().all(|&(d_row, _)| d_row >= 0));
        assert_eq!(8, offsets.len());
    }

    #[test]
    fn radius_is_clamped_to_quarter_of_smallest_side() {
        let clamped = Topology::Radius(10).offsets(8, 40);
        assert_eq!(Topology::Radius(2).offsets(100, 100), clamped);
    }

    #[test]
    fn radius_clamped_to_zero_has_no_offsets() {
        assert!(Topology::Radius(3).offsets(3, 3).is_empty());
    }
}
