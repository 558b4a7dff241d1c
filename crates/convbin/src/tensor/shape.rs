//! Lightweight wrapper for tensor shapes and dimension bookkeeping.

use crate::error::{CodecError, CodecResult};

/// Stores the logical dimensions of a tensor in the producing framework's
/// native axis order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Shape {
    dims: Vec<usize>,
}

impl Shape {
    /// Constructs a new shape from the provided dimensions.
    ///
    /// Panics if `dims` is empty, ensuring every tensor has at least one axis.
    pub fn new<D: Into<Vec<usize>>>(dims: D) -> Self {
        let dims = dims.into();
        assert!(!dims.is_empty(), "shape must have at least one dimension");
        Shape { dims }
    }

    /// Borrow the raw dimension slice for downstream calculations.
    pub fn dims(&self) -> &[usize] {
        &self.dims
    }

    /// Returns the rank (number of axes) of the shape.
    pub fn rank(&self) -> usize {
        self.dims.len()
    }

    /// Computes the total number of elements implied by the shape.
    pub fn num_elements(&self) -> usize {
        self.dims.iter().product()
    }

    /// Canonicalizes the shape into the fixed 3-axis form used by every
    /// on-disk header, left-padding with size-1 axes when the rank is
    /// below 3. Fails when the rank exceeds 3; the format has no
    /// representation for higher ranks.
    pub fn normalized(&self) -> CodecResult<NormalizedShape> {
        if self.rank() > 3 {
            return Err(CodecError::UnsupportedRank { rank: self.rank() });
        }
        let mut padded = [1usize; 3];
        padded[3 - self.rank()..].copy_from_slice(&self.dims);
        Ok(NormalizedShape {
            depth: padded[0],
            rows: padded[1],
            cols: padded[2],
        })
    }
}

/// Canonical `(depth, rows, cols)` form of a rank <= 3 shape.
///
/// Headers are emitted in `(rows, cols, depth)` order while payloads stay in
/// native `(depth, rows, cols)` flatten order; the consuming engine indexes
/// row/col first and treats depth as the outer axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NormalizedShape {
    pub depth: usize,
    pub rows: usize,
    pub cols: usize,
}

impl NormalizedShape {
    /// Total element count of the tensor block payload.
    pub fn num_elements(&self) -> usize {
        self.depth * self.rows * self.cols
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CodecError;

    #[test]
    fn rank_one_pads_depth_and_rows() {
        let norm = Shape::new([7]).normalized().unwrap();
        assert_eq!(
            norm,
            NormalizedShape {
                depth: 1,
                rows: 1,
                cols: 7
            }
        );
    }

    #[test]
    fn rank_two_pads_depth() {
        let norm = Shape::new([2, 3]).normalized().unwrap();
        assert_eq!(
            norm,
            NormalizedShape {
                depth: 1,
                rows: 2,
                cols: 3
            }
        );
    }

    #[test]
    fn rank_three_passes_through() {
        let norm = Shape::new([4, 5, 6]).normalized().unwrap();
        assert_eq!(
            norm,
            NormalizedShape {
                depth: 4,
                rows: 5,
                cols: 6
            }
        );
        assert_eq!(norm.num_elements(), 120);
    }

    #[test]
    fn rank_four_is_rejected() {
        let err = Shape::new([2, 2, 2, 2]).normalized().unwrap_err();
        assert!(matches!(err, CodecError::UnsupportedRank { rank: 4 }));
    }
}
