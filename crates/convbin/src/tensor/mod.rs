//! Host tensor abstractions shared by the encoders and readers.
//!
//! The tensor module defines the shape bookkeeping (including the canonical
//! 3-axis form every on-disk header uses) and the f32 host tensor the codec
//! borrows its payloads from.

mod host;
pub mod shape;

pub use host::Tensor;
pub use shape::{NormalizedShape, Shape};
