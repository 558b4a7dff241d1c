//! Host-backed tensor used as the codec's read-only array view.

use super::shape::Shape;
use crate::error::{CodecError, CodecResult};
use rand::Rng;

/// Simple host-backed `f32` tensor with explicit shape metadata.
///
/// Rank is unrestricted at construction (convolutional kernel stacks arrive
/// as rank 4); each encoder enforces its own rank contract.
#[derive(Debug, Clone, PartialEq)]
pub struct Tensor {
    shape: Shape,
    data: Vec<f32>,
}

impl Tensor {
    /// Constructs a tensor from raw values, validating the length against the shape.
    pub fn from_vec(shape: Shape, data: Vec<f32>) -> CodecResult<Self> {
        if data.len() != shape.num_elements() {
            return Err(CodecError::LengthMismatch {
                expected: shape.num_elements(),
                actual: data.len(),
            });
        }
        Ok(Tensor { shape, data })
    }

    /// Returns a zero-initialized tensor of the requested shape.
    pub fn zeros(shape: Shape) -> Self {
        let len = shape.num_elements();
        Tensor {
            shape,
            data: vec![0.0; len],
        }
    }

    /// Samples from a normal distribution (`N(0, std^2)`) using the Box-Muller transform.
    pub fn randn(shape: Shape, std: f32, rng: &mut impl Rng) -> Self {
        let len = shape.num_elements();
        let mut values = Vec::with_capacity(len);
        while values.len() < len {
            let u1: f32 = rng.gen::<f32>().max(f32::MIN_POSITIVE);
            let u2: f32 = rng.gen::<f32>();
            let r = (-2.0 * u1.ln()).sqrt();
            let theta = 2.0 * std::f32::consts::PI * u2;
            let z0 = r * theta.cos() * std;
            let z1 = r * theta.sin() * std;
            values.push(z0);
            if values.len() < len {
                values.push(z1);
            }
        }
        Tensor {
            shape,
            data: values,
        }
    }

    /// Returns the total number of elements stored in the tensor.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Reports whether the tensor contains zero elements.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Provides access to the tensor shape.
    pub fn shape(&self) -> &Shape {
        &self.shape
    }

    /// Returns the rank (number of axes) of the tensor.
    pub fn rank(&self) -> usize {
        self.shape.rank()
    }

    /// Borrows the flat payload in native row-major order.
    pub fn data(&self) -> &[f32] {
        &self.data
    }

    /// Returns the transpose of a rank-2 tensor, in row-major order of the
    /// swapped shape. Fails on any other rank.
    pub fn transposed(&self) -> CodecResult<Tensor> {
        let dims = self.shape.dims();
        if dims.len() != 2 {
            return Err(CodecError::RankMismatch {
                expected: 2,
                actual: dims.len(),
            });
        }
        let (rows, cols) = (dims[0], dims[1]);
        let mut out = vec![0.0f32; self.data.len()];
        for r in 0..rows {
            for c in 0..cols {
                out[c * rows + r] = self.data[r * cols + c];
            }
        }
        Tensor::from_vec(Shape::new([cols, rows]), out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_vec_rejects_wrong_length() {
        let err = Tensor::from_vec(Shape::new([2, 3]), vec![0.0; 5]).unwrap_err();
        assert!(matches!(
            err,
            CodecError::LengthMismatch {
                expected: 6,
                actual: 5
            }
        ));
    }

    #[test]
    fn transpose_swaps_axes() {
        let t = Tensor::from_vec(Shape::new([2, 3]), vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0]).unwrap();
        let tt = t.transposed().unwrap();
        assert_eq!(tt.shape().dims(), &[3, 2]);
        assert_eq!(tt.data(), &[1.0, 4.0, 2.0, 5.0, 3.0, 6.0]);
    }

    #[test]
    fn transpose_requires_rank_two() {
        let t = Tensor::zeros(Shape::new([2, 2, 2]));
        assert!(matches!(
            t.transposed().unwrap_err(),
            CodecError::RankMismatch {
                expected: 2,
                actual: 3
            }
        ));
    }
}
