//! Integration tests for selection operations (argmax/argmin, topk, kthvalue, mode)

mod common;

use common::{create_cpu_client, create_fine_grained_client};
use seekr::prelude::*;

fn sample_matrix(device: &CpuDevice) -> Tensor<CpuRuntime> {
    // [[5, 8, 9, 5], [0, 0, 1, 7], [6, 9, 2, 4]]
    Tensor::<CpuRuntime>::from_slice(
        &[5.0f32, 8.0, 9.0, 5.0, 0.0, 0.0, 1.0, 7.0, 6.0, 9.0, 2.0, 4.0],
        &[3, 4],
        device,
    )
}

// ============================================================================
// argmax / argmin
// ============================================================================

#[test]
fn test_argmax_flatten_and_axes() {
    let (client, device) = create_cpu_client();
    let x = sample_matrix(&device);

    let flat = client.argmax(&x, None, false, Some(DType::I64)).unwrap();
    assert_eq!(flat.shape(), &[] as &[usize]);
    assert_eq!(flat.item::<i64>().unwrap(), 2);

    let ax0 = client.argmax(&x, Some(0), false, Some(DType::I64)).unwrap();
    assert_eq!(ax0.to_vec::<i64>(), [2, 2, 0, 1]);

    let ax1 = client.argmax(&x, Some(1), false, Some(DType::I64)).unwrap();
    assert_eq!(ax1.to_vec::<i64>(), [2, 3, 1]);

    let keep = client.argmax(&x, Some(-1), true, Some(DType::I32)).unwrap();
    assert_eq!(keep.shape(), &[3, 1]);
    assert_eq!(keep.dtype(), DType::I32);
    assert_eq!(keep.to_vec::<i32>(), [2, 3, 1]);
}

#[test]
fn test_argmin_flatten_and_axes() {
    let (client, device) = create_cpu_client();
    let x = sample_matrix(&device);

    let flat = client.argmin(&x, None, true, Some(DType::I64)).unwrap();
    assert_eq!(flat.shape(), &[1, 1]);
    assert_eq!(flat.to_vec::<i64>(), [4]);

    let ax0 = client.argmin(&x, Some(0), false, Some(DType::I64)).unwrap();
    assert_eq!(ax0.to_vec::<i64>(), [1, 1, 1, 2]);

    let ax1 = client.argmin(&x, Some(1), false, Some(DType::I64)).unwrap();
    assert_eq!(ax1.to_vec::<i64>(), [0, 0, 2]);
}

#[test]
fn test_argmax_first_occurrence_and_gather() {
    let (client, device) = create_cpu_client();

    let x = Tensor::<CpuRuntime>::from_slice(&[5i32, 5, 3], &[3], &device);
    let idx = client.argmax(&x, Some(0), false, Some(DType::I64)).unwrap();
    assert_eq!(idx.item::<i64>().unwrap(), 0);

    let data = [3u8, 200, 17, 200, 9, 1];
    let x = Tensor::<CpuRuntime>::from_slice(&data, &[2, 3], &device);
    let idx = client.argmax(&x, Some(1), false, Some(DType::I64)).unwrap();
    let idx = idx.to_vec::<i64>();
    for (row, &i) in idx.iter().enumerate() {
        let lane = &data[row * 3..row * 3 + 3];
        assert_eq!(lane[i as usize], *lane.iter().max().unwrap());
    }
}

#[test]
fn test_arg_reduce_nan_is_extremum() {
    let (client, device) = create_cpu_client();

    let x = Tensor::<CpuRuntime>::from_slice(&[1.0f64, f64::NAN, 7.0, f64::NAN], &[4], &device);
    let max = client.argmax(&x, None, false, Some(DType::I64)).unwrap();
    let min = client.argmin(&x, None, false, Some(DType::I64)).unwrap();
    assert_eq!(max.item::<i64>().unwrap(), 1);
    assert_eq!(min.item::<i64>().unwrap(), 1);
}

#[test]
fn test_arg_reduce_errors() {
    let (client, device) = create_cpu_client();
    let x = sample_matrix(&device);

    let err = client.argmax(&x, Some(0), false, None).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Value);

    let err = client.argmin(&x, Some(0), false, Some(DType::F32)).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Type);

    let err = client.argmax(&x, Some(2), false, Some(DType::I64)).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Shape);

    let empty = Tensor::<CpuRuntime>::from_slice::<f32>(&[], &[0, 3], &device);
    let err = client.argmax(&empty, Some(0), false, Some(DType::I64)).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Shape);

    let i8s = Tensor::<CpuRuntime>::from_slice(&[1i8, 2], &[2], &device);
    let err = client.argmax(&i8s, None, false, Some(DType::I64)).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Type);
}

// ============================================================================
// topk
// ============================================================================

#[test]
fn test_topk_1d_and_2d() {
    let (client, device) = create_cpu_client();

    let x = Tensor::<CpuRuntime>::from_slice(&[1i64, 3, 5, 7], &[4], &device);
    let (v, i) = client.topk(&x, 1usize, -1, true, true).unwrap();
    assert_eq!(v.to_vec::<i64>(), [7]);
    assert_eq!(i.to_vec::<i64>(), [3]);

    // [[1, 4, 5, 7], [2, 6, 2, 5]]
    let x = Tensor::<CpuRuntime>::from_slice(
        &[1.0f32, 4.0, 5.0, 7.0, 2.0, 6.0, 2.0, 5.0],
        &[2, 4],
        &device,
    );
    let (v, i) = client.topk(&x, 1usize, -1, true, true).unwrap();
    assert_eq!(v.shape(), &[2, 1]);
    assert_eq!(v.to_vec::<f32>(), [7.0, 6.0]);
    assert_eq!(i.to_vec::<i64>(), [3, 1]);

    let (v, i) = client.topk(&x, 1usize, 0, false, true).unwrap();
    assert_eq!(v.shape(), &[1, 4]);
    assert_eq!(v.to_vec::<f32>(), [1.0, 4.0, 2.0, 5.0]);
    assert_eq!(i.to_vec::<i64>(), [0, 0, 1, 1]);
}

#[test]
fn test_topk_matches_descending_sort_prefix() {
    let (client, device) = create_cpu_client();

    let data: Vec<f64> = (0..50).map(|i| ((i * 13) % 17) as f64).collect();
    let x = Tensor::<CpuRuntime>::from_slice(&data, &[50], &device);

    let (v, i) = client.topk(&x, 10usize, 0, true, true).unwrap();
    let (sv, si) = client.sort_with_indices(&x, 0, true, true).unwrap();
    assert_eq!(v.to_vec::<f64>(), sv.to_vec::<f64>()[..10]);
    assert_eq!(i.to_vec::<i64>(), si.to_vec::<i64>()[..10]);
}

#[test]
fn test_topk_unsorted_keeps_position_order() {
    let (client, device) = create_cpu_client();

    let x = Tensor::<CpuRuntime>::from_slice(&[4i32, 1, 9, 3, 8], &[5], &device);
    let (v, i) = client.topk(&x, 3usize, 0, true, false).unwrap();
    assert_eq!(i.to_vec::<i64>(), [0, 2, 4]);
    assert_eq!(v.to_vec::<i32>(), [4, 9, 8]);
}

#[test]
fn test_topk_dynamic_k() {
    let (client, device) = create_cpu_client();

    let x = Tensor::<CpuRuntime>::from_slice(&[2.0f32, 9.0, 4.0, 7.0], &[4], &device);
    let k = Tensor::<CpuRuntime>::from_slice(&[2i32], &[1], &device);
    let (v, i) = client.topk(&x, &k, 0, true, true).unwrap();
    assert_eq!(v.to_vec::<f32>(), [9.0, 7.0]);
    assert_eq!(i.to_vec::<i64>(), [1, 3]);

    let negative = Tensor::<CpuRuntime>::from_slice(&[-1i64], &[1], &device);
    let err = client.topk(&x, negative, 0, true, true).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Range);

    let float_k = Tensor::<CpuRuntime>::from_slice(&[2.0f32], &[1], &device);
    let err = client.topk(&x, float_k, 0, true, true).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Type);
}

#[test]
fn test_topk_edges() {
    let (client, device) = create_cpu_client();
    let x = Tensor::<CpuRuntime>::from_slice(&[1.0f64, 2.0, 3.0], &[3], &device);

    let err = client.topk(&x, 4usize, 0, true, true).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Range);

    let (v, i) = client.topk(&x, 0usize, 0, true, true).unwrap();
    assert_eq!(v.shape(), &[0]);
    assert_eq!(i.numel(), 0);

    let (v, i) = client.topk(&x, 3usize, 0, false, true).unwrap();
    assert_eq!(v.to_vec::<f64>(), [1.0, 2.0, 3.0]);
    assert_eq!(i.to_vec::<i64>(), [0, 1, 2]);

    let s = Tensor::<CpuRuntime>::from_slice(&[5.0f32], &[], &device);
    let (v, i) = client.topk(&s, 1usize, 0, true, true).unwrap();
    assert_eq!(v.item::<f32>().unwrap(), 5.0);
    assert_eq!(i.item::<i64>().unwrap(), 0);

    let i16s = Tensor::<CpuRuntime>::from_slice(&[1i16, 2], &[2], &device);
    let err = client.topk(&i16s, 1usize, 0, true, true).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Type);
}

// ============================================================================
// kthvalue
// ============================================================================

#[test]
fn test_kthvalue_axes() {
    let (client, device) = create_cpu_client();

    // [[3, 1, 2], [0, 5, 0]]
    let x = Tensor::<CpuRuntime>::from_slice(&[3i64, 1, 2, 0, 5, 0], &[2, 3], &device);

    let (v, i) = client.kthvalue(&x, 2, 1, false).unwrap();
    assert_eq!(v.to_vec::<i64>(), [2, 0]);
    assert_eq!(i.to_vec::<i64>(), [2, 2]);

    let (v, i) = client.kthvalue(&x, 1, 0, true).unwrap();
    assert_eq!(v.shape(), &[1, 3]);
    assert_eq!(v.to_vec::<i64>(), [0, 1, 0]);
    assert_eq!(i.to_vec::<i64>(), [1, 0, 1]);
}

#[test]
fn test_kthvalue_ties_lowest_index_and_nan_last() {
    let (client, device) = create_cpu_client();

    let x = Tensor::<CpuRuntime>::from_slice(&[f32::NAN, 4.0, 1.0, 4.0], &[4], &device);
    let (v, i) = client.kthvalue(&x, 2, 0, false).unwrap();
    assert_eq!(v.item::<f32>().unwrap(), 4.0);
    assert_eq!(i.item::<i64>().unwrap(), 1);

    let (v, i) = client.kthvalue(&x, 4, 0, false).unwrap();
    assert!(v.item::<f32>().unwrap().is_nan());
    assert_eq!(i.item::<i64>().unwrap(), 0);
}

#[test]
fn test_kthvalue_range_errors() {
    let (client, device) = create_cpu_client();
    let x = Tensor::<CpuRuntime>::from_slice(&[1.0f64, 2.0], &[2], &device);

    assert_eq!(client.kthvalue(&x, 0, 0, false).unwrap_err().kind(), ErrorKind::Range);
    assert_eq!(client.kthvalue(&x, 3, 0, false).unwrap_err().kind(), ErrorKind::Range);
}

// ============================================================================
// mode
// ============================================================================

#[test]
fn test_mode_3d_runs() {
    let (client, device) = create_cpu_client();

    let x = Tensor::<CpuRuntime>::from_slice(
        &[1.0f32, 2.0, 2.0, 2.0, 3.0, 3.0, 0.0, 5.0, 5.0, 9.0, 9.0, 0.0],
        &[2, 2, 3],
        &device,
    );
    let (v, i) = client.mode(&x, 2, false).unwrap();
    assert_eq!(v.shape(), &[2, 2]);
    assert_eq!(v.to_vec::<f32>(), [2.0, 3.0, 5.0, 9.0]);
    assert_eq!(i.to_vec::<i64>(), [2, 2, 2, 1]);

    let (v, _) = client.mode(&x, -1, true).unwrap();
    assert_eq!(v.shape(), &[2, 2, 1]);
}

#[test]
fn test_mode_ties_pick_largest_value() {
    let (client, device) = create_cpu_client();

    let x = Tensor::<CpuRuntime>::from_slice(&[4i32, 1, 1, 4, 2], &[5], &device);
    let (v, i) = client.mode(&x, 0, false).unwrap();
    assert_eq!(v.item::<i32>().unwrap(), 4);
    assert_eq!(i.item::<i64>().unwrap(), 3);
}

#[test]
fn test_mode_empty_axis_is_shape_error() {
    let (client, device) = create_cpu_client();
    let x = Tensor::<CpuRuntime>::from_slice::<f64>(&[], &[3, 0], &device);
    assert_eq!(client.mode(&x, 1, false).unwrap_err().kind(), ErrorKind::Shape);
}

#[test]
fn test_selection_parallel_matches_serial() {
    let (serial, device) = create_cpu_client();
    let (parallel, _) = create_fine_grained_client();

    let data: Vec<i64> = (0..1200).map(|i| (i * 7919) % 23).collect();
    let x = Tensor::<CpuRuntime>::from_slice(&data, &[40, 30], &device);

    let (a, b) = (
        serial.topk(&x, 5usize, 1, true, true).unwrap(),
        parallel.topk(&x, 5usize, 1, true, true).unwrap(),
    );
    assert_eq!(a.0.to_vec::<i64>(), b.0.to_vec::<i64>());
    assert_eq!(a.1.to_vec::<i64>(), b.1.to_vec::<i64>());

    let (a, b) = (
        serial.mode(&x, 0, false).unwrap(),
        parallel.mode(&x, 0, false).unwrap(),
    );
    assert_eq!(a.0.to_vec::<i64>(), b.0.to_vec::<i64>());
    assert_eq!(a.1.to_vec::<i64>(), b.1.to_vec::<i64>());

    let a = serial.argmin(&x, Some(0), false, Some(DType::I32)).unwrap();
    let b = parallel.argmin(&x, Some(0), false, Some(DType::I32)).unwrap();
    assert_eq!(a.to_vec::<i32>(), b.to_vec::<i32>());
}
