use thiserror::Error;
mod ops;
pub use self::ops::*;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum OptimError {
    // 矩阵运算
    #[error(
        "形状不一致，故无法{operator}：左侧形状为{left_shape:?}，右侧形状为{right_shape:?}"
    )]
    ShapeMismatch {
        operator: Operator,
        left_shape: Vec<usize>,
        right_shape: Vec<usize>,
    },

    // 超参数校验
    #[error("超参数{name}须{operator}{threshold}，实际为{value}")]
    InvalidHyperparameter {
        name: String,
        operator: ComparisonOperator,
        threshold: String,
        value: String,
    },
    #[error("超参数{name}须为有限数值，实际为{value}")]
    NonFiniteHyperparameter { name: String, value: f32 },

    // 输入数据约定
    #[error("数据集为空：样本数与特征数均须≥1，实际形状为{shape:?}")]
    EmptyData { shape: Vec<usize> },
    #[error("设计矩阵第0列须全为1（截距列），但第{row}行为{value}")]
    MissingIntercept { row: usize, value: f32 },
}

impl OptimError {
    pub(crate) fn hyperparameter(
        name: &str,
        operator: ComparisonOperator,
        threshold: impl ToString,
        value: impl ToString,
    ) -> Self {
        Self::InvalidHyperparameter {
            name: name.to_string(),
            operator,
            threshold: threshold.to_string(),
            value: value.to_string(),
        }
    }
}
