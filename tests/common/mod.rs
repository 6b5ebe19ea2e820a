//! Common test utilities
#![allow(dead_code)]

use approx::relative_eq;
use seekr::runtime::Runtime;
use seekr::runtime::cpu::{CpuClient, CpuClientConfig, CpuDevice, CpuRuntime};

/// Install a tracing subscriber once; honours `RUST_LOG`
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Create a CPU client and device for testing
pub fn create_cpu_client() -> (CpuClient, CpuDevice) {
    init_tracing();
    let device = CpuDevice::new();
    let client = CpuRuntime::default_client(&device);
    (client, device)
}

/// CPU client that hands every lane to its own rayon task
pub fn create_fine_grained_client() -> (CpuClient, CpuDevice) {
    init_tracing();
    let device = CpuDevice::new();
    let config = CpuClientConfig::default().with_num_threads(4).with_min_len(1);
    let client = CpuClient::with_config(device, config).expect("client config");
    (client, device)
}

/// Assert two f64 slices are close within tolerance
pub fn assert_allclose_f64(a: &[f64], b: &[f64], rtol: f64, atol: f64, msg: &str) {
    assert_eq!(a.len(), b.len(), "{}: length mismatch", msg);
    for (i, (x, y)) in a.iter().zip(b.iter()).enumerate() {
        assert!(
            relative_eq!(*x, *y, epsilon = atol, max_relative = rtol),
            "{}: element {} differs: {} vs {}",
            msg,
            i,
            x,
            y
        );
    }
}

/// Assert two f32 slices are close within tolerance
pub fn assert_allclose_f32(a: &[f32], b: &[f32], rtol: f32, atol: f32, msg: &str) {
    assert_eq!(a.len(), b.len(), "{}: length mismatch", msg);
    for (i, (x, y)) in a.iter().zip(b.iter()).enumerate() {
        assert!(
            relative_eq!(*x, *y, epsilon = atol, max_relative = rtol),
            "{}: element {} differs: {} vs {}",
            msg,
            i,
            x,
            y
        );
    }
}
