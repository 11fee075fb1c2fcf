use approx::assert_abs_diff_eq;
use ndarray::{Array2, array};

use super::line_data;
use crate::errors::{Operator, OptimError};
use crate::optim::compute_cost;
use crate::optim::cost::mean_gradient;

#[test]
fn test_cost_at_zero_theta() {
    // Σy² = 1 + 9 + 25 + 49 = 84，J = 84 / (2·4) = 10.5
    let data = line_data();
    let cost = compute_cost(data.design(), data.target(), &data.zero_theta()).unwrap();
    assert_abs_diff_eq!(cost, 10.5, epsilon = 1e-6);
}

#[test]
fn test_cost_at_exact_solution() {
    let data = line_data();
    let cost = compute_cost(data.design(), data.target(), &array![[1.0], [2.0]]).unwrap();
    assert_abs_diff_eq!(cost, 0.0, epsilon = 1e-6);
}

#[test]
fn test_cost_is_idempotent() {
    let data = line_data();
    let theta = array![[0.3], [-1.7]];
    let first = compute_cost(data.design(), data.target(), &theta).unwrap();
    let second = compute_cost(data.design(), data.target(), &theta).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_cost_shape_mismatch() {
    let data = line_data();
    let (x, y) = (data.design(), data.target());

    // θ 行数与 X 列数不符
    assert_eq!(
        compute_cost(x, y, &Array2::zeros((3, 1))),
        Err(OptimError::ShapeMismatch {
            operator: Operator::MatMul,
            left_shape: vec![4, 2],
            right_shape: vec![3, 1],
        })
    );
    // θ 不是列向量
    assert!(matches!(
        compute_cost(x, y, &Array2::zeros((2, 2))),
        Err(OptimError::ShapeMismatch {
            operator: Operator::Cost,
            ..
        })
    ));
    // y 行数与 X 行数不符
    assert!(matches!(
        compute_cost(x, &Array2::zeros((3, 1)), &Array2::zeros((2, 1))),
        Err(OptimError::ShapeMismatch {
            operator: Operator::Sub,
            ..
        })
    ));
}

#[test]
fn test_cost_keeps_non_finite_value() {
    let data = line_data();
    let theta = array![[f32::INFINITY], [0.0]];
    let cost = compute_cost(data.design(), data.target(), &theta).unwrap();
    assert!(!cost.is_finite());
}

#[test]
fn test_mean_gradient() {
    // 1/4 · Xᵀ(0 - y) = [-(1+3+5+7)/4, -(0+3+10+21)/4] = [-4, -8.5]
    let data = line_data();
    let gradient = mean_gradient(data.design(), data.target(), &data.zero_theta());
    assert_abs_diff_eq!(gradient[[0, 0]], -4.0, epsilon = 1e-6);
    assert_abs_diff_eq!(gradient[[1, 0]], -8.5, epsilon = 1e-6);
}
