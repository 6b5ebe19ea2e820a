//! Integration tests for index and mask operations

mod common;

use common::create_cpu_client;
use seekr::dtype::Complex64;
use seekr::prelude::*;

fn matrix_3x4(device: &CpuDevice) -> Tensor<CpuRuntime> {
    let data: Vec<f32> = (1..=12).map(|v| v as f32).collect();
    Tensor::<CpuRuntime>::from_slice(&data, &[3, 4], device)
}

// ============================================================================
// index_select
// ============================================================================

#[test]
fn test_index_select_rows_and_columns() {
    let (client, device) = create_cpu_client();
    let x = matrix_3x4(&device);
    let index = Tensor::<CpuRuntime>::from_slice(&[0i32, 1, 1], &[3], &device);

    let rows = client.index_select(&x, 0, &index).unwrap();
    assert_eq!(rows.shape(), &[3, 4]);
    assert_eq!(
        rows.to_vec::<f32>(),
        [1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 5.0, 6.0, 7.0, 8.0]
    );

    let cols = client.index_select(&x, -1, &index).unwrap();
    assert_eq!(cols.shape(), &[3, 3]);
    assert_eq!(
        cols.to_vec::<f32>(),
        [1.0, 2.0, 2.0, 5.0, 6.0, 6.0, 9.0, 10.0, 10.0]
    );
}

#[test]
fn test_index_select_complex_and_empty_index() {
    let (client, device) = create_cpu_client();

    let data = [Complex64::new(1.0, -1.0), Complex64::new(2.0, 0.5)];
    let x = Tensor::<CpuRuntime>::from_slice(&data, &[2], &device);
    let index = Tensor::<CpuRuntime>::from_slice(&[1i64, 0, 1], &[3], &device);
    let out = client.index_select(&x, 0, &index).unwrap();
    assert_eq!(out.to_vec::<Complex64>(), [data[1], data[0], data[1]]);

    let none = Tensor::<CpuRuntime>::from_slice::<i64>(&[], &[0], &device);
    let out = client.index_select(&x, 0, &none).unwrap();
    assert_eq!(out.shape(), &[0]);
}

#[test]
fn test_index_select_errors() {
    let (client, device) = create_cpu_client();
    let x = matrix_3x4(&device);

    let oob = Tensor::<CpuRuntime>::from_slice(&[0i64, 3], &[2], &device);
    let err = client.index_select(&x, 0, &oob).unwrap_err();
    assert!(matches!(err, Error::IndexOutOfBounds { index: 3, size: 3 }));
    assert_eq!(err.kind(), ErrorKind::Shape);

    let float_index = Tensor::<CpuRuntime>::from_slice(&[0.0f32], &[1], &device);
    let err = client.index_select(&x, 0, &float_index).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Type);

    let matrix_index = Tensor::<CpuRuntime>::from_slice(&[0i64, 1], &[1, 2], &device);
    let err = client.index_select(&x, 0, &matrix_index).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Shape);
}

// ============================================================================
// index_sample
// ============================================================================

#[test]
fn test_index_sample_rows() {
    let (client, device) = create_cpu_client();
    let x = matrix_3x4(&device);
    let index =
        Tensor::<CpuRuntime>::from_slice(&[0i64, 1, 2, 1, 2, 3, 0, 0, 0], &[3, 3], &device);

    let out = client.index_sample(&x, &index).unwrap();
    assert_eq!(out.shape(), &[3, 3]);
    assert_eq!(
        out.to_vec::<f32>(),
        [1.0, 2.0, 3.0, 6.0, 7.0, 8.0, 9.0, 9.0, 9.0]
    );
}

#[test]
fn test_index_sample_errors() {
    let (client, device) = create_cpu_client();
    let x = matrix_3x4(&device);

    let wrong_batch = Tensor::<CpuRuntime>::from_slice(&[0i32, 1], &[2, 1], &device);
    let err = client.index_sample(&x, &wrong_batch).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Shape);

    let oob = Tensor::<CpuRuntime>::from_slice(&[0i32, 4, 1], &[3, 1], &device);
    let err = client.index_sample(&x, &oob).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Shape);

    let flat = Tensor::<CpuRuntime>::from_slice(&[1.0f32, 2.0], &[2], &device);
    let index = Tensor::<CpuRuntime>::from_slice(&[0i32], &[1, 1], &device);
    let err = client.index_sample(&flat, &index).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Shape);
}

// ============================================================================
// masked_select
// ============================================================================

#[test]
fn test_masked_select() {
    let (client, device) = create_cpu_client();
    let x = matrix_3x4(&device);
    let mask = Tensor::<CpuRuntime>::from_bools(
        &[
            true, false, false, false, true, true, false, false, true, false, false, false,
        ],
        &[3, 4],
        &device,
    );

    let out = client.masked_select(&x, &mask).unwrap();
    assert_eq!(out.shape(), &[4]);
    assert_eq!(out.to_vec::<f32>(), [1.0, 5.0, 6.0, 9.0]);
}

#[test]
fn test_masked_select_broadcasts_both_ways() {
    let (client, device) = create_cpu_client();

    // x [2, 1], mask [3] -> broadcast shape [2, 3]
    let x = Tensor::<CpuRuntime>::from_slice(&[10i64, 20], &[2, 1], &device);
    let mask = Tensor::<CpuRuntime>::from_bools(&[true, false, true], &[3], &device);
    let out = client.masked_select(&x, &mask).unwrap();
    assert_eq!(out.to_vec::<i64>(), [10, 10, 20, 20]);
}

#[test]
fn test_masked_select_errors() {
    let (client, device) = create_cpu_client();
    let x = matrix_3x4(&device);

    let int_mask = Tensor::<CpuRuntime>::from_slice(&[1i32; 12], &[3, 4], &device);
    assert_eq!(
        client.masked_select(&x, &int_mask).unwrap_err().kind(),
        ErrorKind::Type
    );

    let bad_shape = Tensor::<CpuRuntime>::from_bools(&[true, false, true], &[3], &device);
    assert_eq!(
        client.masked_select(&x, &bad_shape).unwrap_err().kind(),
        ErrorKind::Shape
    );
}

// ============================================================================
// nonzero
// ============================================================================

#[test]
fn test_nonzero_diagonal() {
    let (client, device) = create_cpu_client();
    let x = Tensor::<CpuRuntime>::from_slice(
        &[1.0f64, 0.0, 0.0, 0.0, 2.0, 0.0, 0.0, 0.0, 3.0],
        &[3, 3],
        &device,
    );

    let nz = client.nonzero(&x).unwrap();
    assert_eq!(nz.shape(), &[3, 2]);
    assert_eq!(nz.to_vec::<i64>(), [0, 0, 1, 1, 2, 2]);

    let tuple = client.nonzero_tuple(&x).unwrap();
    assert_eq!(tuple.len(), 2);
    for t in &tuple {
        assert_eq!(t.shape(), &[3, 1]);
        assert_eq!(t.to_vec::<i64>(), [0, 1, 2]);
    }
}

#[test]
fn test_nonzero_rank1_and_bool() {
    let (client, device) = create_cpu_client();

    let x = Tensor::<CpuRuntime>::from_slice(&[0i16, 3, 0, -1], &[4], &device);
    let tuple = client.nonzero_tuple(&x).unwrap();
    assert_eq!(tuple.len(), 1);
    assert_eq!(tuple[0].shape(), &[2, 1]);
    assert_eq!(tuple[0].to_vec::<i64>(), [1, 3]);

    let mask = Tensor::<CpuRuntime>::from_bools(&[false, true, true, false], &[2, 2], &device);
    let nz = client.nonzero(&mask).unwrap();
    assert_eq!(nz.to_vec::<i64>(), [0, 1, 1, 0]);
}

#[test]
fn test_nonzero_scalar_and_all_zero() {
    let (client, device) = create_cpu_client();

    let s = Tensor::<CpuRuntime>::from_slice(&[4.0f32], &[], &device);
    let nz = client.nonzero(&s).unwrap();
    assert_eq!(nz.shape(), &[1, 1]);
    assert_eq!(nz.to_vec::<i64>(), [0]);

    let z = Tensor::<CpuRuntime>::from_slice(&[0i32; 6], &[2, 3], &device);
    let nz = client.nonzero(&z).unwrap();
    assert_eq!(nz.shape(), &[0, 2]);

    let u8s = Tensor::<CpuRuntime>::from_slice(&[1u8], &[1], &device);
    assert_eq!(client.nonzero(&u8s).unwrap_err().kind(), ErrorKind::Type);
}
