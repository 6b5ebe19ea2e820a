//! Integration tests for searchsorted and bucketize

mod common;

use common::{create_cpu_client, create_fine_grained_client};
use seekr::prelude::*;

#[test]
fn test_searchsorted_left_and_right() {
    let (client, device) = create_cpu_client();
    let seq = Tensor::<CpuRuntime>::from_slice(&[1i64, 3, 5, 7, 9, 11], &[6], &device);
    let values = Tensor::<CpuRuntime>::from_slice(&[3i64, 6, 9, 10], &[4], &device);

    let left = client.searchsorted(&seq, &values, false, false).unwrap();
    assert_eq!(left.dtype(), DType::I64);
    assert_eq!(left.to_vec::<i64>(), [1, 3, 4, 5]);

    let right = client.searchsorted(&seq, &values, false, true).unwrap();
    assert_eq!(right.to_vec::<i64>(), [2, 3, 5, 5]);
}

#[test]
fn test_searchsorted_batched_rows() {
    let (client, device) = create_cpu_client();
    let seq = Tensor::<CpuRuntime>::from_slice(
        &[1.0f32, 3.0, 5.0, 7.0, 9.0, 11.0, 2.0, 4.0, 6.0, 8.0, 10.0, 12.0],
        &[2, 6],
        &device,
    );
    let values = Tensor::<CpuRuntime>::from_slice(
        &[3.0f32, 6.0, 9.0, 10.0, 3.0, 6.0, 9.0, 10.0],
        &[2, 4],
        &device,
    );

    let left = client.searchsorted(&seq, &values, true, false).unwrap();
    assert_eq!(left.dtype(), DType::I32);
    assert_eq!(left.shape(), &[2, 4]);
    assert_eq!(left.to_vec::<i32>(), [1, 3, 4, 5, 1, 2, 4, 4]);

    let right = client.searchsorted(&seq, &values, true, true).unwrap();
    assert_eq!(right.to_vec::<i32>(), [2, 3, 5, 5, 1, 3, 4, 5]);
}

#[test]
fn test_searchsorted_values_keep_their_shape() {
    let (client, device) = create_cpu_client();
    let seq = Tensor::<CpuRuntime>::from_slice(&[0.0f64, 1.0, 2.0], &[3], &device);
    let values = Tensor::<CpuRuntime>::from_slice(
        &[-1.0f64, 0.5, 1.0, 2.0, 3.0, 1.5],
        &[2, 3],
        &device,
    );

    let out = client.searchsorted(&seq, &values, false, false).unwrap();
    assert_eq!(out.shape(), &[2, 3]);
    assert_eq!(out.to_vec::<i64>(), [0, 1, 1, 2, 3, 2]);
}

#[test]
fn test_searchsorted_mixed_dtypes() {
    let (client, device) = create_cpu_client();

    // Integer boundaries with float queries compare as f64
    let seq = Tensor::<CpuRuntime>::from_slice(&[1i64, 3, 5, 7], &[4], &device);
    let values = Tensor::<CpuRuntime>::from_slice(&[2.5f32, 6.0], &[2], &device);
    let out = client.searchsorted(&seq, &values, false, false).unwrap();
    assert_eq!(out.to_vec::<i64>(), [1, 3]);

    let values = Tensor::<CpuRuntime>::from_slice(&[3.0f64, f64::NAN], &[2], &device);
    let out = client.searchsorted(&seq, &values, true, true).unwrap();
    assert_eq!(out.to_vec::<i32>(), [2, 4]);

    // Two index types compare as i64
    let seq = Tensor::<CpuRuntime>::from_slice(&[10i32, 20, 30], &[3], &device);
    let values = Tensor::<CpuRuntime>::from_slice(&[20i64, 5_000_000_000], &[2], &device);
    let out = client.searchsorted(&seq, &values, false, false).unwrap();
    assert_eq!(out.to_vec::<i64>(), [1, 3]);

    // Float boundaries, batched, with integer queries
    let seq = Tensor::<CpuRuntime>::from_slice(
        &[0.5f32, 1.5, 2.5, 10.0, 20.0, 30.0],
        &[2, 3],
        &device,
    );
    let values = Tensor::<CpuRuntime>::from_slice(&[2i32, 25], &[2, 1], &device);
    let out = client.searchsorted(&seq, &values, false, false).unwrap();
    assert_eq!(out.to_vec::<i64>(), [2, 2]);

    let x = Tensor::<CpuRuntime>::from_slice(&[1.0f64, 4.0], &[2], &device);
    let bounds = Tensor::<CpuRuntime>::from_slice(&[2i32, 4], &[2], &device);
    let out = client.bucketize(&x, &bounds, false, true).unwrap();
    assert_eq!(out.to_vec::<i64>(), [0, 2]);
}

#[test]
fn test_searchsorted_non_finite() {
    let (client, device) = create_cpu_client();

    let seq = Tensor::<CpuRuntime>::from_slice(&[1.0f64, 2.0, 3.0], &[3], &device);
    let values = Tensor::<CpuRuntime>::from_slice(
        &[f64::NAN, f64::INFINITY, f64::NEG_INFINITY],
        &[3],
        &device,
    );
    let out = client.searchsorted(&seq, &values, false, false).unwrap();
    assert_eq!(out.to_vec::<i64>(), [3, 3, 0]);

    // A row with a non-finite boundary reports its length for every query
    let seq = Tensor::<CpuRuntime>::from_slice(
        &[1.0f32, f32::INFINITY, 1.0, 2.0],
        &[2, 2],
        &device,
    );
    let values = Tensor::<CpuRuntime>::from_slice(&[0.0f32, 1.5], &[2, 1], &device);
    let out = client.searchsorted(&seq, &values, false, false).unwrap();
    assert_eq!(out.to_vec::<i64>(), [2, 1]);
}

#[test]
fn test_searchsorted_empty_inputs() {
    let (client, device) = create_cpu_client();

    let seq = Tensor::<CpuRuntime>::from_slice::<i32>(&[], &[0], &device);
    let values = Tensor::<CpuRuntime>::from_slice(&[5i32, -5], &[2], &device);
    let out = client.searchsorted(&seq, &values, false, false).unwrap();
    assert_eq!(out.to_vec::<i64>(), [0, 0]);

    let seq = Tensor::<CpuRuntime>::from_slice(&[1i32, 2], &[2], &device);
    let none = Tensor::<CpuRuntime>::from_slice::<i32>(&[], &[0], &device);
    let out = client.searchsorted(&seq, &none, false, false).unwrap();
    assert_eq!(out.shape(), &[0]);
}

#[test]
fn test_searchsorted_parallel_matches_serial() {
    let (serial, device) = create_cpu_client();
    let (parallel, _) = create_fine_grained_client();

    let seq: Vec<i64> = (0..500).map(|i| i * 2).collect();
    let queries: Vec<i64> = (0..2000).map(|i| (i * 7919) % 1003 - 1).collect();
    let seq = Tensor::<CpuRuntime>::from_slice(&seq, &[500], &device);
    let queries = Tensor::<CpuRuntime>::from_slice(&queries, &[2000], &device);

    for right in [false, true] {
        let a = serial.searchsorted(&seq, &queries, false, right).unwrap();
        let b = parallel.searchsorted(&seq, &queries, false, right).unwrap();
        assert_eq!(a.to_vec::<i64>(), b.to_vec::<i64>());
    }
}

#[test]
fn test_searchsorted_errors() {
    let (client, device) = create_cpu_client();
    let seq = Tensor::<CpuRuntime>::from_slice(&[1.0f32, 2.0, 3.0, 4.0], &[2, 2], &device);

    let mismatched = Tensor::<CpuRuntime>::from_slice(&[1.0f32, 2.0, 3.0], &[3, 1], &device);
    let err = client
        .searchsorted(&seq, &mismatched, false, false)
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Shape);

    let unsupported = Tensor::<CpuRuntime>::from_slice(&[1i16, 2], &[2, 1], &device);
    let err = client
        .searchsorted(&seq, &unsupported, false, false)
        .unwrap_err();
    assert!(matches!(err, Error::UnsupportedDType { dtype: DType::I16, .. }));
    assert_eq!(err.kind(), ErrorKind::Type);

    let scalar_seq = Tensor::<CpuRuntime>::from_slice(&[1.0f32], &[], &device);
    let values = Tensor::<CpuRuntime>::from_slice(&[1.0f32], &[1], &device);
    let err = client
        .searchsorted(&scalar_seq, &values, false, false)
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Shape);
}

// ============================================================================
// bucketize
// ============================================================================

#[test]
fn test_bucketize() {
    let (client, device) = create_cpu_client();
    let seq = Tensor::<CpuRuntime>::from_slice(&[2i64, 4, 8, 16], &[4], &device);
    let x = Tensor::<CpuRuntime>::from_slice(&[0i64, 8, 4, 16, -1, 2, 8, 4], &[2, 4], &device);

    let left = client.bucketize(&x, &seq, false, false).unwrap();
    assert_eq!(left.shape(), &[2, 4]);
    assert_eq!(left.to_vec::<i64>(), [0, 2, 1, 3, 0, 0, 2, 1]);

    let right = client.bucketize(&x, &seq, true, true).unwrap();
    assert_eq!(right.to_vec::<i32>(), [0, 3, 2, 4, 0, 1, 3, 2]);
}

#[test]
fn test_bucketize_requires_1d_boundaries() {
    let (client, device) = create_cpu_client();
    let seq = Tensor::<CpuRuntime>::from_slice(&[1i64, 2, 3, 4], &[2, 2], &device);
    let x = Tensor::<CpuRuntime>::from_slice(&[1i64, 2], &[2, 1], &device);

    let err = client.bucketize(&x, &seq, false, false).unwrap_err();
    assert!(matches!(
        err,
        Error::RankMismatch {
            arg: "sorted_sequence",
            expected: 1,
            got: 2
        }
    ));
    assert_eq!(err.kind(), ErrorKind::Shape);
}
