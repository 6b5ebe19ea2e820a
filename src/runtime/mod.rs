//! Runtime backends for tensor computation
//!
//! This module defines the `Runtime` trait and the CPU implementation.
//!
//! # Architecture
//!
//! ```text
//! Runtime (backend identity)
//! ├── Device (identifies a compute unit)
//! ├── Client (dispatches operations, carries execution configuration)
//! └── RawHandle (escape hatch for custom kernels)
//! ```

pub mod cpu;
mod helpers;

pub use helpers::{ensure_contiguous, normalize_dim};

use crate::error::Result;

/// Core trait for compute backends
///
/// `Runtime` uses static dispatch via generics. Memory is addressed through
/// `u64` handles so kernels see raw pointers regardless of backend.
///
/// # Example
///
/// ```
/// use seekr::runtime::Runtime;
/// use seekr::runtime::cpu::CpuRuntime;
///
/// let device = CpuRuntime::default_device();
/// let ptr = CpuRuntime::allocate(1024, &device).unwrap();
/// CpuRuntime::deallocate(ptr, 1024, &device);
/// ```
pub trait Runtime: Clone + Send + Sync + 'static {
    /// Device identifier type
    type Device: Device;

    /// Client for dispatching operations
    type Client: RuntimeClient<Self>;

    /// Raw handle for custom kernel launching
    type RawHandle: Send + Sync;

    /// Human-readable name of this runtime
    fn name() -> &'static str;

    /// Allocate zero-initialized device memory
    ///
    /// Returns `Err(OutOfMemory)` if allocation fails.
    fn allocate(size_bytes: usize, device: &Self::Device) -> Result<u64>;

    /// Deallocate device memory
    fn deallocate(ptr: u64, size_bytes: usize, device: &Self::Device);

    /// Copy data from host to device
    fn copy_to_device(src: &[u8], dst: u64, device: &Self::Device) -> Result<()>;

    /// Copy data from device to host
    fn copy_from_device(src: u64, dst: &mut [u8], device: &Self::Device) -> Result<()>;

    /// Copy strided data into a contiguous buffer
    ///
    /// `strides` are in elements; `src_byte_offset` is in bytes.
    fn copy_strided(
        src_handle: u64,
        src_byte_offset: usize,
        dst_handle: u64,
        shape: &[usize],
        strides: &[isize],
        elem_size: usize,
        device: &Self::Device,
    ) -> Result<()>;

    /// Get the default device
    fn default_device() -> Self::Device;

    /// Get the default client for a device
    fn default_client(device: &Self::Device) -> Self::Client;

    /// Get the raw handle from a client
    fn raw_handle(client: &Self::Client) -> &Self::RawHandle;
}

/// Trait for device identification
pub trait Device: Clone + Send + Sync + 'static {
    /// Unique identifier for this device
    fn id(&self) -> usize;

    /// Check if two devices are the same
    fn is_same(&self, other: &Self) -> bool {
        self.id() == other.id()
    }

    /// Human-readable name
    fn name(&self) -> String {
        format!("Device({})", self.id())
    }
}

/// Trait for runtime clients that handle operation dispatch
pub trait RuntimeClient<R: Runtime>: Clone + Send + Sync {
    /// Get the device this client operates on
    fn device(&self) -> &R::Device;

    /// Wait for all pending operations to complete
    fn synchronize(&self);

    /// Whether operations may write into an operand's storage
    ///
    /// Clients that record work for deferred execution return `false`, and
    /// in-place operations refuse to run on them.
    fn supports_aliasing(&self) -> bool {
        true
    }
}
