//! Core Tensor type

use super::{Layout, Storage};
use crate::dtype::{DType, Element};
use crate::error::{Error, Result};
use crate::runtime::Runtime;
use std::fmt;

/// N-dimensional array stored on a compute device
///
/// A tensor is a [`Storage`] handle plus a [`Layout`]. View operations
/// (`reshape`, `transpose`, `unsqueeze`, `broadcast_to`) share storage and only
/// change the layout.
///
/// # Example
///
/// ```
/// use seekr::prelude::*;
///
/// let device = CpuDevice::new();
/// let a = Tensor::<CpuRuntime>::from_slice(&[1.0f32, 2.0, 3.0, 4.0], &[2, 2], &device);
/// let b = a.transpose(0, 1).unwrap();
/// assert_eq!(b.to_vec::<f32>(), [1.0, 3.0, 2.0, 4.0]);
/// ```
pub struct Tensor<R: Runtime> {
    storage: Storage<R>,
    layout: Layout,
}

impl<R: Runtime> Tensor<R> {
    /// Create a tensor from storage and layout
    pub fn from_parts(storage: Storage<R>, layout: Layout) -> Self {
        Self { storage, layout }
    }

    /// Create a tensor from a slice of data
    ///
    /// # Panics
    ///
    /// Panics if `data.len()` does not equal the product of `shape`.
    /// Use [`Self::try_from_slice`] for a fallible version.
    pub fn from_slice<T: Element>(data: &[T], shape: &[usize], device: &R::Device) -> Self {
        Self::try_from_slice(data, shape, device).expect("Tensor::from_slice failed")
    }

    /// Create a tensor from a slice of data (fallible version)
    pub fn try_from_slice<T: Element>(
        data: &[T],
        shape: &[usize],
        device: &R::Device,
    ) -> Result<Self> {
        let expected_len: usize = shape.iter().product();
        if data.len() != expected_len {
            return Err(Error::ShapeMismatch {
                expected: shape.to_vec(),
                got: vec![data.len()],
            });
        }

        let storage = Storage::from_slice(data, device)?;
        Ok(Self::from_parts(storage, Layout::contiguous(shape)))
    }

    /// Create a `Bool` tensor from host booleans
    ///
    /// # Panics
    ///
    /// Panics if `data.len()` does not equal the product of `shape`.
    pub fn from_bools(data: &[bool], shape: &[usize], device: &R::Device) -> Self {
        Self::try_from_bools(data, shape, device).expect("Tensor::from_bools failed")
    }

    /// Create a `Bool` tensor from host booleans (fallible version)
    pub fn try_from_bools(data: &[bool], shape: &[usize], device: &R::Device) -> Result<Self> {
        let expected_len: usize = shape.iter().product();
        if data.len() != expected_len {
            return Err(Error::ShapeMismatch {
                expected: shape.to_vec(),
                got: vec![data.len()],
            });
        }

        let bytes: Vec<u8> = data.iter().map(|&b| b as u8).collect();
        let storage = Storage::from_bytes(&bytes, DType::Bool, device)?;
        Ok(Self::from_parts(storage, Layout::contiguous(shape)))
    }

    /// Allocate a zero-initialized tensor
    ///
    /// Kernels overwrite every element of the returned tensor.
    pub fn try_empty(shape: &[usize], dtype: DType, device: &R::Device) -> Result<Self> {
        let len: usize = shape.iter().product();
        let storage = Storage::new(len, dtype, device)?;
        Ok(Self::from_parts(storage, Layout::contiguous(shape)))
    }

    /// Create a tensor filled with zeros
    pub fn try_zeros(shape: &[usize], dtype: DType, device: &R::Device) -> Result<Self> {
        Self::try_full_scalar(shape, dtype, 0.0, device)
    }

    /// Create a tensor filled with a scalar value converted to `dtype`
    pub fn try_full_scalar(
        shape: &[usize],
        dtype: DType,
        value: f64,
        device: &R::Device,
    ) -> Result<Self> {
        #[inline]
        fn typed_to_bytes<T: bytemuck::NoUninit>(v: Vec<T>) -> Vec<u8> {
            bytemuck::cast_slice::<T, u8>(&v).to_vec()
        }

        let len: usize = shape.iter().product();
        if len == 0 {
            return Self::try_empty(shape, dtype, device);
        }

        let bytes: Vec<u8> = match dtype {
            DType::F64 => typed_to_bytes(vec![value; len]),
            DType::F32 => typed_to_bytes(vec![value as f32; len]),
            #[cfg(feature = "f16")]
            DType::F16 => typed_to_bytes(vec![half::f16::from_f64(value); len]),
            #[cfg(feature = "f16")]
            DType::BF16 => typed_to_bytes(vec![half::bf16::from_f64(value); len]),
            #[cfg(not(feature = "f16"))]
            DType::F16 | DType::BF16 => {
                return Err(Error::unsupported_dtype(dtype, "full_scalar"));
            }
            DType::I64 => typed_to_bytes(vec![value as i64; len]),
            DType::I32 => typed_to_bytes(vec![value as i32; len]),
            DType::I16 => typed_to_bytes(vec![value as i16; len]),
            DType::I8 => typed_to_bytes(vec![value as i8; len]),
            DType::U8 => vec![value as u8; len],
            DType::Bool => vec![(value != 0.0) as u8; len],
            DType::Complex64 => {
                typed_to_bytes(vec![crate::dtype::Complex64::new(value as f32, 0.0); len])
            }
            DType::Complex128 => {
                typed_to_bytes(vec![crate::dtype::Complex128::new(value, 0.0); len])
            }
        };

        let storage = Storage::from_bytes(&bytes, dtype, device)?;
        Ok(Self::from_parts(storage, Layout::contiguous(shape)))
    }

    // ===== Accessors =====

    /// Get the storage
    #[inline]
    pub fn storage(&self) -> &Storage<R> {
        &self.storage
    }

    /// Get the layout
    #[inline]
    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    /// Get the shape
    #[inline]
    pub fn shape(&self) -> &[usize] {
        self.layout.shape()
    }

    /// Get the strides
    #[inline]
    pub fn strides(&self) -> &[isize] {
        self.layout.strides()
    }

    /// Get the number of dimensions (rank)
    #[inline]
    pub fn ndim(&self) -> usize {
        self.layout.ndim()
    }

    /// Get the total number of elements
    #[inline]
    pub fn numel(&self) -> usize {
        self.layout.elem_count()
    }

    /// Get the element type
    #[inline]
    pub fn dtype(&self) -> DType {
        self.storage.dtype()
    }

    /// Get the device
    #[inline]
    pub fn device(&self) -> &R::Device {
        self.storage.device()
    }

    /// Check if the tensor is contiguous in memory
    #[inline]
    pub fn is_contiguous(&self) -> bool {
        self.layout.is_contiguous()
    }

    /// Check if this is a scalar (0-dimensional tensor)
    #[inline]
    pub fn is_scalar(&self) -> bool {
        self.layout.is_scalar()
    }

    /// Replace storage and layout in place
    pub(crate) fn replace_parts(&mut self, storage: Storage<R>, layout: Layout) {
        self.storage = storage;
        self.layout = layout;
    }

    // ===== View Operations (Zero-Copy) =====

    /// Swap two dimensions (zero-copy, supports negative indexing)
    pub fn transpose(&self, dim0: isize, dim1: isize) -> Result<Self> {
        let ndim = self.ndim();
        let d0 = crate::runtime::normalize_dim(dim0, ndim)?;
        let d1 = crate::runtime::normalize_dim(dim1, ndim)?;
        let layout = self
            .layout
            .transpose(d0, d1)
            .ok_or(Error::InvalidDimension { dim: dim0, ndim })?;
        Ok(Self::from_parts(self.storage.clone(), layout))
    }

    /// Reshape to a new shape (zero-copy, requires contiguity)
    pub fn reshape(&self, shape: &[usize]) -> Result<Self> {
        if shape.iter().product::<usize>() != self.numel() {
            return Err(Error::shape_mismatch(shape, self.shape()));
        }
        let layout = self.layout.reshape(shape).ok_or(Error::NotContiguous)?;
        Ok(Self::from_parts(self.storage.clone(), layout))
    }

    /// Insert a dimension of size 1
    pub fn unsqueeze(&self, dim: isize) -> Result<Self> {
        let ndim = self.ndim();
        let idx = if dim < 0 { dim + ndim as isize + 1 } else { dim };
        let layout = usize::try_from(idx)
            .ok()
            .and_then(|idx| self.layout.unsqueeze(idx))
            .ok_or(Error::InvalidDimension { dim, ndim })?;
        Ok(Self::from_parts(self.storage.clone(), layout))
    }

    /// Remove a dimension of size 1
    pub fn squeeze(&self, dim: isize) -> Result<Self> {
        let ndim = self.ndim();
        let d = crate::runtime::normalize_dim(dim, ndim)?;
        let layout = self
            .layout
            .squeeze(d)
            .ok_or_else(|| Error::invalid_argument("dim", "can only squeeze a dimension of size 1"))?;
        Ok(Self::from_parts(self.storage.clone(), layout))
    }

    /// Broadcast to a target shape (zero-copy stride-0 view)
    pub fn broadcast_to(&self, shape: &[usize]) -> Result<Self> {
        let layout = self
            .layout
            .broadcast_to(shape)
            .ok_or_else(|| Error::broadcast(self.shape(), shape))?;
        Ok(Self::from_parts(self.storage.clone(), layout))
    }

    /// Materialize a row-major copy unless already contiguous
    pub fn contiguous(&self) -> Result<Self> {
        if self.is_contiguous() {
            return Ok(self.clone());
        }

        let dtype = self.dtype();
        let device = self.storage.device();
        let new_storage = Storage::new(self.numel(), dtype, device)?;
        let elem_size = dtype.size_in_bytes();

        R::copy_strided(
            self.storage.ptr(),
            self.layout.offset() * elem_size,
            new_storage.ptr(),
            self.shape(),
            self.strides(),
            elem_size,
            device,
        )?;

        Ok(Self::from_parts(new_storage, Layout::contiguous(self.shape())))
    }

    // ===== Data Access =====

    /// Copy tensor data to a host Vec in row-major order
    ///
    /// # Panics
    ///
    /// Panics if the device copy fails. Use [`Self::try_to_vec`] to handle it.
    pub fn to_vec<T: bytemuck::Pod>(&self) -> Vec<T> {
        self.try_to_vec().expect("Tensor::to_vec failed")
    }

    /// Copy tensor data to a host Vec in row-major order (fallible version)
    pub fn try_to_vec<T: bytemuck::Pod>(&self) -> Result<Vec<T>> {
        if std::mem::size_of::<T>() != self.dtype().size_in_bytes() {
            return Err(Error::invalid_argument(
                "T",
                format!(
                    "host type is {} bytes but tensor dtype {} is {} bytes",
                    std::mem::size_of::<T>(),
                    self.dtype(),
                    self.dtype().size_in_bytes()
                ),
            ));
        }

        let tensor = self.contiguous()?;
        let mut result = vec![T::zeroed(); tensor.numel()];
        let bytes: &mut [u8] = bytemuck::cast_slice_mut(&mut result);
        R::copy_from_device(tensor.storage.ptr(), bytes, tensor.storage.device())?;
        Ok(result)
    }

    /// Copy a `Bool` tensor to host booleans
    pub fn to_bools(&self) -> Result<Vec<bool>> {
        if self.dtype() != DType::Bool {
            return Err(Error::unsupported_dtype(self.dtype(), "to_bools"));
        }
        Ok(self
            .try_to_vec::<u8>()?
            .into_iter()
            .map(|b| b != 0)
            .collect())
    }

    /// Extract the value of a single-element tensor
    pub fn item<T: bytemuck::Pod>(&self) -> Result<T> {
        if self.numel() != 1 {
            return Err(Error::ShapeMismatch {
                expected: vec![1],
                got: self.shape().to_vec(),
            });
        }
        self.try_to_vec::<T>()?
            .pop()
            .ok_or_else(|| Error::Internal("single-element copy returned no data".into()))
    }
}

impl<R: Runtime> Clone for Tensor<R> {
    /// Clone creates a new tensor sharing the same storage (zero-copy)
    fn clone(&self) -> Self {
        Self {
            storage: self.storage.clone(),
            layout: self.layout.clone(),
        }
    }
}

impl<R: Runtime> fmt::Debug for Tensor<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Tensor")
            .field("shape", &self.shape())
            .field("dtype", &self.dtype())
            .field("contiguous", &self.is_contiguous())
            .finish()
    }
}

impl<R: Runtime> fmt::Display for Tensor<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Tensor({:?}, dtype={})", self.shape(), self.dtype())
    }
}
