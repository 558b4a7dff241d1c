use crate::error::CodecResult;
use crate::tensor::{Shape, Tensor};
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Decoded fully-connected layer: pre-transposed weights plus biases.
#[derive(Debug, Clone)]
pub struct DenseRecord {
    pub weights: Tensor,
    pub biases: Tensor,
}

/// One decoded convolution kernel; `weights` has shape `[depth, rows, cols]`.
#[derive(Debug, Clone)]
pub struct ConvKernel {
    pub weights: Tensor,
    pub bias: f32,
    pub stride: (usize, usize),
}

/// Decoded convolutional layer.
#[derive(Debug, Clone)]
pub struct ConvRecord {
    pub kernels: Vec<ConvKernel>,
}

/// Decoded pooling layer: kernel size and stride, no parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PoolRecord {
    pub kernel: (usize, usize),
    pub stride: (usize, usize),
}

/// Reads a tensor file; the result has normalized shape `[depth, rows, cols]`.
pub fn read_tensor(path: impl AsRef<Path>) -> CodecResult<Tensor> {
    let mut file = File::open(path)?;
    read_tensor_block(&mut file)
}

/// Reads a label file.
pub fn read_label(path: impl AsRef<Path>) -> CodecResult<u64> {
    let mut file = File::open(path)?;
    read_u64(&mut file)
}

/// Reads a dense layer file: weight block, then bias block.
pub fn read_dense(path: impl AsRef<Path>) -> CodecResult<DenseRecord> {
    let mut file = File::open(path)?;
    let weights = read_tensor_block(&mut file)?;
    let biases = read_tensor_block(&mut file)?;
    Ok(DenseRecord { weights, biases })
}

/// Reads a convolutional layer file: kernel count, then packed kernel records.
pub fn read_conv(path: impl AsRef<Path>) -> CodecResult<ConvRecord> {
    let mut file = File::open(path)?;
    let num = read_u64(&mut file)? as usize;
    let mut kernels = Vec::with_capacity(num);
    for _ in 0..num {
        kernels.push(read_kernel(&mut file)?);
    }
    Ok(ConvRecord { kernels })
}

/// Reads a pooling layer file.
pub fn read_pool(path: impl AsRef<Path>) -> CodecResult<PoolRecord> {
    let mut file = File::open(path)?;
    let kernel = (read_u64(&mut file)? as usize, read_u64(&mut file)? as usize);
    let stride = (read_u64(&mut file)? as usize, read_u64(&mut file)? as usize);
    Ok(PoolRecord { kernel, stride })
}

fn read_tensor_block(reader: &mut impl Read) -> CodecResult<Tensor> {
    let rows = read_u64(reader)? as usize;
    let cols = read_u64(reader)? as usize;
    let depth = read_u64(reader)? as usize;
    let data = read_f32_payload(reader, depth * rows * cols)?;
    Tensor::from_vec(Shape::new([depth, rows, cols]), data)
}

fn read_kernel(reader: &mut impl Read) -> CodecResult<ConvKernel> {
    let rows = read_u64(reader)? as usize;
    let cols = read_u64(reader)? as usize;
    let depth = read_u64(reader)? as usize;
    let stride = (read_u64(reader)? as usize, read_u64(reader)? as usize);
    let bias = read_f32(reader)?;
    let data = read_f32_payload(reader, depth * rows * cols)?;
    let weights = Tensor::from_vec(Shape::new([depth, rows, cols]), data)?;
    Ok(ConvKernel {
        weights,
        bias,
        stride,
    })
}

fn read_f32_payload(reader: &mut impl Read, count: usize) -> CodecResult<Vec<f32>> {
    let mut raw = vec![0u8; count * 4];
    reader.read_exact(&mut raw)?;
    let mut data = Vec::with_capacity(count);
    for chunk in raw.chunks_exact(4) {
        data.push(f32::from_le_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]));
    }
    Ok(data)
}

fn read_u64(reader: &mut impl Read) -> CodecResult<u64> {
    let mut buf = [0u8; 8];
    reader.read_exact(&mut buf)?;
    Ok(u64::from_le_bytes(buf))
}

fn read_f32(reader: &mut impl Read) -> CodecResult<f32> {
    let mut buf = [0u8; 4];
    reader.read_exact(&mut buf)?;
    Ok(f32::from_le_bytes(buf))
}
