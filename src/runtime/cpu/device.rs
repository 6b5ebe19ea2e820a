//! CPU device

use crate::runtime::Device;
use std::fmt;

/// The host CPU
///
/// There is a single CPU device; every instance compares equal.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct CpuDevice {
    id: usize,
}

impl CpuDevice {
    /// Handle to the host CPU
    pub const fn new() -> Self {
        Self { id: 0 }
    }
}

impl Device for CpuDevice {
    fn id(&self) -> usize {
        self.id
    }

    fn name(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for CpuDevice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "cpu:{}", self.id)
    }
}
