use crate::errors::{ComparisonOperator, OptimError};
use crate::optim::Hyperparameters;

#[test]
fn test_default_hyperparameters() {
    let hp = Hyperparameters::default();
    assert_eq!(hp.learning_rate, 0.01);
    assert_eq!(hp.epochs, 200);
    assert_eq!(hp.batch_size, 32);
    assert_eq!(hp.momentum, 0.9);
}

#[test]
fn test_builder() {
    let hp = Hyperparameters::new(0.1, 50).batch_size(8).momentum(0.5);
    assert_eq!(hp.learning_rate, 0.1);
    assert_eq!(hp.epochs, 50);
    assert_eq!(hp.batch_size, 8);
    assert_eq!(hp.momentum, 0.5);
}

#[test]
fn test_deserialize_partial_json() {
    let hp: Hyperparameters = serde_json::from_str(r#"{"learning_rate": 0.05}"#).unwrap();
    assert_eq!(hp.learning_rate, 0.05);
    assert_eq!(hp.epochs, 200);
    assert_eq!(hp.batch_size, 32);
}

#[test]
fn test_zero_learning_rate_is_valid() {
    assert!(Hyperparameters::new(0.0, 1).validate().is_ok());
}

#[test]
fn test_invalid_common_hyperparameters() {
    assert_eq!(
        Hyperparameters::new(-0.1, 10).validate(),
        Err(OptimError::InvalidHyperparameter {
            name: "learning_rate".to_string(),
            operator: ComparisonOperator::GreaterOrEqual,
            threshold: "0".to_string(),
            value: "-0.1".to_string(),
        })
    );
    assert!(matches!(
        Hyperparameters::new(f32::NAN, 10).validate(),
        Err(OptimError::NonFiniteHyperparameter { .. })
    ));
    assert!(matches!(
        Hyperparameters::new(0.1, 0).validate(),
        Err(OptimError::InvalidHyperparameter { ref name, .. }) if name == "epochs"
    ));
}

#[test]
fn test_error_message() {
    let err = Hyperparameters::new(0.1, 0).validate().unwrap_err();
    assert_eq!(err.to_string(), "超参数epochs须≥1，实际为0");
}
