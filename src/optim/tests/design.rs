use ndarray::{Array2, array};

use crate::errors::{Operator, OptimError};
use crate::optim::{RegressionData, add_intercept};

#[test]
fn test_add_intercept() {
    let features = array![[2.0, 3.0], [4.0, 5.0], [6.0, 7.0]];
    let design = add_intercept(&features);
    let expected: Array2<f32> = array![[1.0, 2.0, 3.0], [1.0, 4.0, 5.0], [1.0, 6.0, 7.0]];
    assert_eq!(design, expected);
}

#[test]
fn test_with_intercept() {
    let data =
        RegressionData::with_intercept(&array![[0.5], [1.5]], array![[1.0], [2.0]]).unwrap();
    assert_eq!(data.samples(), 2);
    assert_eq!(data.params(), 2);
    assert_eq!(data.zero_theta(), Array2::<f32>::zeros((2, 1)));
}

#[test]
fn test_missing_intercept_column() {
    let err = RegressionData::new(array![[1.0, 2.0], [0.5, 3.0]], array![[1.0], [2.0]]);
    assert_eq!(
        err,
        Err(OptimError::MissingIntercept { row: 1, value: 0.5 })
    );
}

#[test]
fn test_target_shape_mismatch() {
    let err = RegressionData::new(array![[1.0, 2.0], [1.0, 3.0]], array![[1.0], [2.0], [3.0]]);
    assert_eq!(
        err,
        Err(OptimError::ShapeMismatch {
            operator: Operator::Sub,
            left_shape: vec![2, 1],
            right_shape: vec![3, 1],
        })
    );
}

#[test]
fn test_empty_data() {
    let design = Array2::<f32>::zeros((0, 2));
    let target = Array2::<f32>::zeros((0, 1));
    assert_eq!(
        RegressionData::new(design, target),
        Err(OptimError::EmptyData { shape: vec![0, 2] })
    );
}
