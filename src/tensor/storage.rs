//! Storage: device memory with Arc-based sharing

use crate::dtype::{DType, Element};
use crate::error::Result;
use crate::runtime::Runtime;
use std::sync::Arc;

/// Reference-counted device buffer
///
/// Views (`reshape`, `broadcast_to`, `transpose`) clone the handle and share
/// the buffer. Memory is released when the last handle is dropped.
pub struct Storage<R: Runtime> {
    inner: Arc<StorageInner<R>>,
}

struct StorageInner<R: Runtime> {
    /// Raw device pointer (CPU pointer cast to u64)
    ptr: u64,
    /// Number of elements (not bytes)
    len: usize,
    dtype: DType,
    device: R::Device,
}

impl<R: Runtime> Storage<R> {
    /// Allocate zero-initialized storage for `len` elements of `dtype`
    pub fn new(len: usize, dtype: DType, device: &R::Device) -> Result<Self> {
        let ptr = R::allocate(len * dtype.size_in_bytes(), device)?;
        Ok(Self::wrap(ptr, len, dtype, device))
    }

    /// Copy a typed host slice to the device
    pub fn from_slice<T: Element>(data: &[T], device: &R::Device) -> Result<Self> {
        Self::from_bytes(bytemuck::cast_slice(data), T::DTYPE, device)
    }

    /// Copy raw bytes with an explicit dtype to the device
    pub fn from_bytes(data: &[u8], dtype: DType, device: &R::Device) -> Result<Self> {
        let ptr = R::allocate(data.len(), device)?;
        R::copy_to_device(data, ptr, device)?;
        Ok(Self::wrap(
            ptr,
            data.len() / dtype.size_in_bytes(),
            dtype,
            device,
        ))
    }

    fn wrap(ptr: u64, len: usize, dtype: DType, device: &R::Device) -> Self {
        Self {
            inner: Arc::new(StorageInner {
                ptr,
                len,
                dtype,
                device: device.clone(),
            }),
        }
    }

    /// Get the raw device pointer
    #[inline]
    pub fn ptr(&self) -> u64 {
        self.inner.ptr
    }

    /// Get the number of elements
    #[inline]
    pub fn len(&self) -> usize {
        self.inner.len
    }

    /// Check if storage is empty
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.inner.len == 0
    }

    /// Get the element type
    #[inline]
    pub fn dtype(&self) -> DType {
        self.inner.dtype
    }

    /// Get the device
    #[inline]
    pub fn device(&self) -> &R::Device {
        &self.inner.device
    }

    /// Get size in bytes
    #[inline]
    pub fn size_in_bytes(&self) -> usize {
        self.inner.len * self.inner.dtype.size_in_bytes()
    }

    /// True if no other tensor shares this buffer
    #[inline]
    pub fn is_unique(&self) -> bool {
        Arc::strong_count(&self.inner) == 1
    }
}

impl<R: Runtime> Clone for Storage<R> {
    /// Clone increments the reference count (zero-copy)
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<R: Runtime> Drop for StorageInner<R> {
    fn drop(&mut self) {
        if self.ptr != 0 {
            R::deallocate(
                self.ptr,
                self.len * self.dtype.size_in_bytes(),
                &self.device,
            );
        }
    }
}

impl<R: Runtime> std::fmt::Debug for Storage<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Storage")
            .field("ptr", &format!("0x{:x}", self.inner.ptr))
            .field("len", &self.inner.len)
            .field("dtype", &self.inner.dtype)
            .field("refs", &Arc::strong_count(&self.inner))
            .finish()
    }
}
