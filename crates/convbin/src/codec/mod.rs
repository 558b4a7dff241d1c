//! Fixed-layout binary records, one file per record.
//!
//! All integers are unsigned 64-bit little-endian, all floats 32-bit
//! IEEE-754 little-endian; no magic number, no version field, no padding.
//! Record boundaries are implicit in the shape headers, so field order is
//! the entire contract:
//!
//! - **Tensor**: `u64 rows, u64 cols, u64 depth`, then `rows*cols*depth`
//!   floats in the source array's native flatten order.
//! - **Label**: one `u64`.
//! - **Dense layer**: tensor block of the pre-transposed weights, then a
//!   `1 x 1 x N` tensor block of the biases.
//! - **Conv layer**: `u64 num_kernels`, then per kernel
//!   `u64 k_rows, k_cols, k_depth, stride_row, stride_col`, `f32 bias`,
//!   and the flattened kernel weights. The stride pair is repeated in
//!   every kernel header; the consuming engine reads it per kernel.
//! - **Pool layer**: `u64 k_rows, k_cols, stride_row, stride_col`.

mod reader;
mod writer;

pub use reader::{
    read_conv, read_dense, read_label, read_pool, read_tensor, ConvKernel, ConvRecord,
    DenseRecord, PoolRecord,
};
pub use writer::{write_conv, write_dense, write_label, write_pool, write_tensor};
