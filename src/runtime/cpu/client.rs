//! CPU client and its execution configuration

use super::device::CpuDevice;
use super::runtime::CpuRuntime;
use crate::error::{Error, Result};
use crate::runtime::RuntimeClient;
#[cfg(feature = "rayon")]
use std::sync::Arc;

/// How the caller intends to run operations issued through a client
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum ExecutionMode {
    /// Operations run immediately; in-place writes are allowed
    #[default]
    Eager,
    /// Operations are recorded by an outer engine; storage must not be aliased
    Deferred,
}

/// Thread usage for slice-parallel kernels
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct ParallelismConfig {
    /// Dedicated pool size; `None` shares rayon's global pool
    pub num_threads: Option<usize>,
    /// Minimum lanes handed to one rayon task
    pub min_len: usize,
}

impl Default for ParallelismConfig {
    fn default() -> Self {
        Self {
            num_threads: None,
            min_len: 64,
        }
    }
}

/// Configuration for [`CpuClient`]
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct CpuClientConfig {
    /// Execution mode, which decides aliasing support
    pub execution: ExecutionMode,
    /// Parallel kernel settings
    pub parallelism: ParallelismConfig,
}

impl CpuClientConfig {
    /// Set the execution mode
    pub fn with_execution(mut self, execution: ExecutionMode) -> Self {
        self.execution = execution;
        self
    }

    /// Use a dedicated pool of `n` threads
    pub fn with_num_threads(mut self, n: usize) -> Self {
        self.parallelism.num_threads = Some(n);
        self
    }

    /// Set the minimum number of lanes per rayon task
    pub fn with_min_len(mut self, min_len: usize) -> Self {
        self.parallelism.min_len = min_len;
        self
    }
}

/// CPU client for operation dispatch
#[derive(Clone, Debug)]
pub struct CpuClient {
    pub(crate) device: CpuDevice,
    config: CpuClientConfig,
    #[cfg(feature = "rayon")]
    pool: Option<Arc<rayon::ThreadPool>>,
}

impl CpuClient {
    /// Create a new CPU client with the default configuration
    pub fn new(device: CpuDevice) -> Self {
        Self {
            device,
            config: CpuClientConfig::default(),
            #[cfg(feature = "rayon")]
            pool: None,
        }
    }

    /// Create a CPU client from an explicit configuration
    ///
    /// Builds a dedicated rayon pool when `num_threads` is set.
    pub fn with_config(device: CpuDevice, config: CpuClientConfig) -> Result<Self> {
        if config.parallelism.num_threads == Some(0) {
            return Err(Error::invalid_argument(
                "num_threads",
                "thread pool needs at least one thread",
            ));
        }

        #[cfg(feature = "rayon")]
        let pool = match config.parallelism.num_threads {
            Some(n) => Some(Arc::new(
                rayon::ThreadPoolBuilder::new()
                    .num_threads(n)
                    .thread_name(|i| format!("seekr-cpu-{i}"))
                    .build()
                    .map_err(|e| Error::ThreadPool(e.to_string()))?,
            )),
            None => None,
        };

        tracing::debug!(
            execution = ?config.execution,
            num_threads = ?config.parallelism.num_threads,
            min_len = config.parallelism.min_len,
            "cpu client configured"
        );

        Ok(Self {
            device,
            config,
            #[cfg(feature = "rayon")]
            pool,
        })
    }

    /// The configuration this client was built with
    pub fn config(&self) -> &CpuClientConfig {
        &self.config
    }

    /// Minimum lanes per rayon task (at least 1)
    #[inline]
    pub fn rayon_min_len(&self) -> usize {
        self.config.parallelism.min_len.max(1)
    }

    /// Run `f` inside this client's thread pool
    #[cfg(feature = "rayon")]
    pub fn install_parallelism<F, T>(&self, f: F) -> T
    where
        F: FnOnce() -> T + Send,
        T: Send,
    {
        match &self.pool {
            Some(pool) => pool.install(f),
            None => f(),
        }
    }
}

impl RuntimeClient<CpuRuntime> for CpuClient {
    fn device(&self) -> &CpuDevice {
        &self.device
    }

    fn synchronize(&self) {
        // CPU operations are synchronous, nothing to do
    }

    fn supports_aliasing(&self) -> bool {
        self.config.execution == ExecutionMode::Eager
    }
}
