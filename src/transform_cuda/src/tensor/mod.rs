//! Minimal dense tensor used as the transform entry points' input and output.
//!
//! Storage is always row-major and contiguous, held in host memory and tagged
//! with the [`Device`] the data belongs to. Kernels that run on an
//! accelerator upload from and read back into this storage.
//!
//! # Example
//!
//! ```
//! use transform_cuda::tensor::{Device, Dtype, Tensor};
//!
//! let mut t = Tensor::zeros(&[4, 4], Dtype::Float32, Device::cpu());
//! t.set(&[3, 3], 1.0).unwrap();
//! assert_eq!(t.get(&[3, 3]).unwrap(), 1.0);
//! ```

mod device;
mod dtype;

pub use device::{Device, DeviceType};
pub use dtype::Dtype;

use std::ops::Range;

use nalgebra::Matrix4;

use crate::error::{TransformError, TransformResult};

/// Typed element buffer backing a [`Tensor`].
#[derive(Debug, Clone, PartialEq)]
enum TensorData {
    Float32(Vec<f32>),
    Float64(Vec<f64>),
    Int32(Vec<i32>),
}

impl TensorData {
    fn zeros(dtype: Dtype, len: usize) -> Self {
        match dtype {
            Dtype::Float32 => TensorData::Float32(vec![0.0; len]),
            Dtype::Float64 => TensorData::Float64(vec![0.0; len]),
            Dtype::Int32 => TensorData::Int32(vec![0; len]),
        }
    }

    fn len(&self) -> usize {
        match self {
            TensorData::Float32(v) => v.len(),
            TensorData::Float64(v) => v.len(),
            TensorData::Int32(v) => v.len(),
        }
    }

    fn dtype(&self) -> Dtype {
        match self {
            TensorData::Float32(_) => Dtype::Float32,
            TensorData::Float64(_) => Dtype::Float64,
            TensorData::Int32(_) => Dtype::Int32,
        }
    }
}

/// Dense n-dimensional array bound to an execution device.
#[derive(Debug, Clone, PartialEq)]
pub struct Tensor {
    shape: Vec<usize>,
    device: Device,
    data: TensorData,
}

impl Tensor {
    fn with_data(data: TensorData, shape: &[usize], device: Device) -> TransformResult<Self> {
        let expected: usize = shape.iter().product();
        if data.len() != expected {
            return Err(TransformError::shape(shape, &[data.len()]));
        }
        Ok(Self {
            shape: shape.to_vec(),
            device,
            data,
        })
    }

    /// Allocate a zero-filled tensor.
    pub fn zeros(shape: &[usize], dtype: Dtype, device: Device) -> Self {
        let len = shape.iter().product();
        Self {
            shape: shape.to_vec(),
            device,
            data: TensorData::zeros(dtype, len),
        }
    }

    /// Wrap row-major `f32` data. Fails if `data.len()` does not match `shape`.
    pub fn from_vec(data: Vec<f32>, shape: &[usize], device: Device) -> TransformResult<Self> {
        Self::with_data(TensorData::Float32(data), shape, device)
    }

    pub fn from_vec_f64(data: Vec<f64>, shape: &[usize], device: Device) -> TransformResult<Self> {
        Self::with_data(TensorData::Float64(data), shape, device)
    }

    pub fn from_vec_i32(data: Vec<i32>, shape: &[usize], device: Device) -> TransformResult<Self> {
        Self::with_data(TensorData::Int32(data), shape, device)
    }

    /// Build a 4x4 `Float32` tensor from a matrix, preserving `(row, col)` positions.
    pub fn from_matrix4(matrix: &Matrix4<f32>, device: Device) -> Self {
        let data = (0..4)
            .flat_map(|r| (0..4).map(move |c| matrix[(r, c)]))
            .collect();
        Self {
            shape: vec![4, 4],
            device,
            data: TensorData::Float32(data),
        }
    }

    pub fn shape(&self) -> &[usize] {
        &self.shape
    }

    pub fn ndim(&self) -> usize {
        self.shape.len()
    }

    pub fn dtype(&self) -> Dtype {
        self.data.dtype()
    }

    pub fn device(&self) -> Device {
        self.device
    }

    pub fn num_elements(&self) -> usize {
        self.data.len()
    }

    /// Storage is always dense row-major.
    pub fn is_contiguous(&self) -> bool {
        true
    }

    /// Materialize a contiguous copy.
    pub fn contiguous(&self) -> Tensor {
        self.clone()
    }

    pub fn assert_shape(&self, expected: &[usize]) -> TransformResult<()> {
        if self.shape != expected {
            return Err(TransformError::shape(expected, &self.shape));
        }
        Ok(())
    }

    pub fn assert_dtype(&self, expected: Dtype) -> TransformResult<()> {
        let actual = self.dtype();
        if actual != expected {
            return Err(TransformError::DtypeMismatch { expected, actual });
        }
        Ok(())
    }

    pub fn assert_device(&self, expected: Device) -> TransformResult<()> {
        if self.device != expected {
            return Err(TransformError::DeviceMismatch {
                expected,
                actual: self.device,
            });
        }
        Ok(())
    }

    /// Borrow the elements of a `Float32` tensor.
    pub fn as_f32_slice(&self) -> TransformResult<&[f32]> {
        match &self.data {
            TensorData::Float32(v) => Ok(v),
            other => Err(TransformError::DtypeMismatch {
                expected: Dtype::Float32,
                actual: other.dtype(),
            }),
        }
    }

    fn as_f32_slice_mut(&mut self) -> TransformResult<&mut [f32]> {
        match &mut self.data {
            TensorData::Float32(v) => Ok(v),
            other => Err(TransformError::DtypeMismatch {
                expected: Dtype::Float32,
                actual: other.dtype(),
            }),
        }
    }

    fn linear_index(&self, index: &[usize]) -> TransformResult<usize> {
        let out_of_bounds = || TransformError::IndexOutOfBounds {
            index: index.to_vec(),
            shape: self.shape.clone(),
        };

        if index.len() != self.shape.len() {
            return Err(out_of_bounds());
        }

        let mut offset = 0;
        for (&i, &dim) in index.iter().zip(&self.shape) {
            if i >= dim {
                return Err(out_of_bounds());
            }
            offset = offset * dim + i;
        }
        Ok(offset)
    }

    /// Read one element of a `Float32` tensor.
    pub fn get(&self, index: &[usize]) -> TransformResult<f32> {
        let offset = self.linear_index(index)?;
        Ok(self.as_f32_slice()?[offset])
    }

    /// Write one element of a `Float32` tensor.
    pub fn set(&mut self, index: &[usize], value: f32) -> TransformResult<()> {
        let offset = self.linear_index(index)?;
        self.as_f32_slice_mut()?[offset] = value;
        Ok(())
    }

    /// Copy `range` out of a 1-D tensor into a new tensor on the same device.
    pub fn get_slice(&self, range: Range<usize>) -> TransformResult<Tensor> {
        if self.ndim() != 1 {
            return Err(TransformError::shape(&[self.num_elements()], &self.shape));
        }
        if range.start > range.end || range.end > self.shape[0] {
            return Err(TransformError::IndexOutOfBounds {
                index: vec![range.start, range.end],
                shape: self.shape.clone(),
            });
        }

        let len = range.len();
        let data = match &self.data {
            TensorData::Float32(v) => TensorData::Float32(v[range].to_vec()),
            TensorData::Float64(v) => TensorData::Float64(v[range].to_vec()),
            TensorData::Int32(v) => TensorData::Int32(v[range].to_vec()),
        };
        Self::with_data(data, &[len], self.device)
    }

    /// Overwrite the `rows x cols` block of a 2-D `Float32` tensor with `src`.
    ///
    /// `src` must have shape `[rows.len(), cols.len()]`, be `Float32`, and live
    /// on the same device. Nothing is written unless every check passes.
    pub fn set_block(
        &mut self,
        rows: Range<usize>,
        cols: Range<usize>,
        src: &Tensor,
    ) -> TransformResult<()> {
        if self.ndim() != 2 {
            return Err(TransformError::shape(&[rows.len(), cols.len()], &self.shape));
        }
        if rows.start > rows.end
            || cols.start > cols.end
            || rows.end > self.shape[0]
            || cols.end > self.shape[1]
        {
            return Err(TransformError::IndexOutOfBounds {
                index: vec![rows.end, cols.end],
                shape: self.shape.clone(),
            });
        }
        src.assert_shape(&[rows.len(), cols.len()])?;
        src.assert_device(self.device)?;

        let src_data = src.as_f32_slice()?;
        let width = self.shape[1];
        let src_width = cols.len();
        let dst = self.as_f32_slice_mut()?;

        for (i, r) in rows.enumerate() {
            let dst_row = &mut dst[r * width + cols.start..r * width + cols.end];
            dst_row.copy_from_slice(&src_data[i * src_width..(i + 1) * src_width]);
        }
        Ok(())
    }

    /// Return a tensor with the same elements viewed under `shape`.
    pub fn reshape(&self, shape: &[usize]) -> TransformResult<Tensor> {
        let expected: usize = shape.iter().product();
        if expected != self.num_elements() {
            return Err(TransformError::shape(shape, &self.shape));
        }
        Ok(Self {
            shape: shape.to_vec(),
            device: self.device,
            data: self.data.clone(),
        })
    }

    /// Copy this tensor to another device.
    pub fn to_device(&self, device: Device) -> Tensor {
        Self {
            shape: self.shape.clone(),
            device,
            data: self.data.clone(),
        }
    }

    /// Read a 4x4 `Float32` tensor into a matrix.
    pub fn to_matrix4(&self) -> TransformResult<Matrix4<f32>> {
        self.assert_shape(&[4, 4])?;
        Ok(Matrix4::from_row_slice(self.as_f32_slice()?))
    }
}
