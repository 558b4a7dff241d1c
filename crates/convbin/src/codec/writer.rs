use crate::error::{CodecError, CodecResult};
use crate::tensor::{Shape, Tensor};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Writes a rank <= 3 tensor as one self-contained file.
///
/// The header carries the normalized `(rows, cols, depth)` sizes; the
/// payload stays in the tensor's native flatten order.
pub fn write_tensor(tensor: &Tensor, path: impl AsRef<Path>) -> CodecResult<()> {
    // Validate the rank before the destination is touched.
    tensor.shape().normalized()?;

    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    write_tensor_block(&mut writer, tensor)?;
    writer.flush()?;
    Ok(())
}

/// Writes a non-negative label as a single `u64`.
pub fn write_label(label: i64, path: impl AsRef<Path>) -> CodecResult<()> {
    if label < 0 {
        return Err(CodecError::NegativeLabel { value: label });
    }

    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    writer.write_all(&(label as u64).to_le_bytes())?;
    writer.flush()?;
    Ok(())
}

/// Writes a fully-connected layer: the transposed weight matrix followed by
/// the bias vector, as two back-to-back tensor blocks.
///
/// `weights` must be rank 2 in `(out_features, in_features)` order; the
/// on-disk convention stores `(in_features, out_features)` so the engine
/// applies the matrix without transposing at load time.
pub fn write_dense(weights: &Tensor, biases: &[f32], path: impl AsRef<Path>) -> CodecResult<()> {
    if weights.rank() != 2 {
        return Err(CodecError::RankMismatch {
            expected: 2,
            actual: weights.rank(),
        });
    }
    let out_features = weights.shape().dims()[0];
    if biases.len() != out_features {
        return Err(CodecError::LengthMismatch {
            expected: out_features,
            actual: biases.len(),
        });
    }

    let transposed = weights.transposed()?;
    let bias_block = Tensor::from_vec(Shape::new([biases.len()]), biases.to_vec())?;

    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    write_tensor_block(&mut writer, &transposed)?;
    write_tensor_block(&mut writer, &bias_block)?;
    writer.flush()?;
    Ok(())
}

/// Writes a convolutional layer: a kernel count, then one record per kernel.
///
/// `kernels` must be rank 4 in `(num_kernels, depth, rows, cols)` order with
/// one bias per kernel. The layer-global stride pair is repeated in every
/// kernel header; the format has no separate layer header.
pub fn write_conv(
    kernels: &Tensor,
    biases: &[f32],
    stride: (usize, usize),
    path: impl AsRef<Path>,
) -> CodecResult<()> {
    let dims = kernels.shape().dims();
    if dims.len() != 4 {
        return Err(CodecError::RankMismatch {
            expected: 4,
            actual: dims.len(),
        });
    }
    let (num, depth, rows, cols) = (dims[0], dims[1], dims[2], dims[3]);
    if biases.len() != num {
        return Err(CodecError::LengthMismatch {
            expected: num,
            actual: biases.len(),
        });
    }

    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    writer.write_all(&(num as u64).to_le_bytes())?;

    let kernel_len = depth * rows * cols;
    for (i, &bias) in biases.iter().enumerate() {
        for field in [rows, cols, depth, stride.0, stride.1] {
            writer.write_all(&(field as u64).to_le_bytes())?;
        }
        writer.write_all(&bias.to_le_bytes())?;
        let start = i * kernel_len;
        for &value in &kernels.data()[start..start + kernel_len] {
            writer.write_all(&value.to_le_bytes())?;
        }
    }
    writer.flush()?;
    Ok(())
}

/// Writes a pooling layer: kernel size and stride, no payload.
pub fn write_pool(
    kernel: (usize, usize),
    stride: (usize, usize),
    path: impl AsRef<Path>,
) -> CodecResult<()> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    for field in [kernel.0, kernel.1, stride.0, stride.1] {
        writer.write_all(&(field as u64).to_le_bytes())?;
    }
    writer.flush()?;
    Ok(())
}

fn write_tensor_block(writer: &mut impl Write, tensor: &Tensor) -> CodecResult<()> {
    let norm = tensor.shape().normalized()?;
    // Header order is (rows, cols, depth); the payload keeps the native
    // (depth, rows, cols) flatten order. The engine relies on exactly this.
    writer.write_all(&(norm.rows as u64).to_le_bytes())?;
    writer.write_all(&(norm.cols as u64).to_le_bytes())?;
    writer.write_all(&(norm.depth as u64).to_le_bytes())?;
    for &value in tensor.data() {
        writer.write_all(&value.to_le_bytes())?;
    }
    Ok(())
}
