use super::housing_table;
use crate::data::{DataError, EncoderSet, LabelEncoder};

#[test]
fn test_label_encoder_sorted_classes() {
    let encoder = LabelEncoder::fit(&["yes", "no", "yes", "maybe"]);
    assert_eq!(encoder.classes(), &["maybe", "no", "yes"]);
    assert_eq!(encoder.encode("maybe"), Some(0));
    assert_eq!(encoder.encode("yes"), Some(2));
    assert_eq!(encoder.encode("unknown"), None);
}

#[test]
fn test_label_encoder_transform() {
    let encoder = LabelEncoder::fit(&["furnished", "semi-furnished", "unfurnished"]);
    let codes = encoder
        .transform("furnishingstatus", &["unfurnished", "furnished", "semi-furnished"])
        .unwrap();
    assert_eq!(codes, vec![2.0, 0.0, 1.0]);
}

#[test]
fn test_label_encoder_unknown_category() {
    let encoder = LabelEncoder::fit(&["yes", "no"]);
    match encoder.transform("mainroad", &["yes", "perhaps"]) {
        Err(DataError::UnknownCategory { column, value }) => {
            assert_eq!(column, "mainroad");
            assert_eq!(value, "perhaps");
        }
        other => panic!("期望未知类别错误，实际 {:?}", other),
    }
}

#[test]
fn test_label_encoder_inverse_transform() {
    let encoder = LabelEncoder::fit(&["yes", "no"]);
    assert_eq!(encoder.inverse_transform(&[1, 0, 1]).unwrap(), vec!["yes", "no", "yes"]);
    assert!(matches!(
        encoder.inverse_transform(&[2]),
        Err(DataError::CodeOutOfRange { code: 2, classes: 2 })
    ));
}

#[test]
fn test_encoder_set_fit() {
    let table = housing_table();
    let columns = vec!["mainroad".to_string(), "furnishingstatus".to_string()];
    let set = EncoderSet::fit(&table, &columns).unwrap();

    assert_eq!(set.len(), 2);
    assert!(set.contains("mainroad"));
    assert!(!set.contains("area"));
    assert_eq!(
        set.get("furnishingstatus").unwrap().classes(),
        &["furnished", "semi-furnished", "unfurnished"]
    );
}

#[test]
fn test_encoder_set_missing_column() {
    let table = housing_table();
    assert!(matches!(
        EncoderSet::fit(&table, &["stories".to_string()]),
        Err(DataError::MissingColumn(_))
    ));
}
