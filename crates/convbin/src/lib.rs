//! Binary export codec for convolutional-network artifacts.
//!
//! Trained parameters arrive from an external training framework as plain
//! host tensors; each encoder writes one self-contained little-endian file
//! that a separate inference engine reconstructs without any shared state.
//! The paired readers exist so producers can verify what they wrote.

pub mod codec;
pub mod error;
pub mod tensor;

pub use codec::{
    read_conv, read_dense, read_label, read_pool, read_tensor, write_conv, write_dense,
    write_label, write_pool, write_tensor, ConvKernel, ConvRecord, DenseRecord, PoolRecord,
};
pub use error::{CodecError, CodecResult};
pub use tensor::{NormalizedShape, Shape, Tensor};
