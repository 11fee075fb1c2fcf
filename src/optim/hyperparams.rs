//! 一次训练（或一次对比）所用的超参数

use serde::{Deserialize, Serialize};

use crate::errors::{ComparisonOperator, OptimError};

/// 超参数
///
/// - `learning_rate`: 学习率 α，须为有限值且 ≥ 0（α = 0 合法，参数保持不变）
/// - `epochs`: 轮数，≥ 1
/// - `batch_size`: 小批量大小，仅小批量梯度下降使用，须在 [1, m]
/// - `momentum`: 动量系数 β，仅动量梯度下降使用，须在 [0, 1)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Hyperparameters {
    pub learning_rate: f32,
    pub epochs: usize,
    pub batch_size: usize,
    pub momentum: f32,
}

impl Default for Hyperparameters {
    fn default() -> Self {
        Self {
            learning_rate: 0.01,
            epochs: 200,
            batch_size: 32,
            momentum: 0.9,
        }
    }
}

impl Hyperparameters {
    pub fn new(learning_rate: f32, epochs: usize) -> Self {
        Self {
            learning_rate,
            epochs,
            ..Self::default()
        }
    }

    /// 设置小批量大小
    pub fn batch_size(mut self, batch_size: usize) -> Self {
        self.batch_size = batch_size;
        self
    }

    /// 设置动量系数
    pub fn momentum(mut self, momentum: f32) -> Self {
        self.momentum = momentum;
        self
    }

    /// 校验所有变体共用的超参数（学习率与轮数）
    pub fn validate(&self) -> Result<(), OptimError> {
        if !self.learning_rate.is_finite() {
            return Err(OptimError::NonFiniteHyperparameter {
                name: "learning_rate".to_string(),
                value: self.learning_rate,
            });
        }
        if self.learning_rate < 0.0 {
            return Err(OptimError::hyperparameter(
                "learning_rate",
                ComparisonOperator::GreaterOrEqual,
                0,
                self.learning_rate,
            ));
        }
        if self.epochs < 1 {
            return Err(OptimError::hyperparameter(
                "epochs",
                ComparisonOperator::GreaterOrEqual,
                1,
                self.epochs,
            ));
        }
        Ok(())
    }
}

/// 校验小批量大小：1 ≤ batch_size ≤ samples
pub(crate) fn validate_batch_size(batch_size: usize, samples: usize) -> Result<(), OptimError> {
    if batch_size < 1 {
        return Err(OptimError::hyperparameter(
            "batch_size",
            ComparisonOperator::GreaterOrEqual,
            1,
            batch_size,
        ));
    }
    if batch_size > samples {
        return Err(OptimError::hyperparameter(
            "batch_size",
            ComparisonOperator::LessOrEqual,
            samples,
            batch_size,
        ));
    }
    Ok(())
}

/// 校验动量系数：0 ≤ β < 1
pub(crate) fn validate_momentum(beta: f32) -> Result<(), OptimError> {
    if !beta.is_finite() {
        return Err(OptimError::NonFiniteHyperparameter {
            name: "momentum".to_string(),
            value: beta,
        });
    }
    if beta < 0.0 {
        return Err(OptimError::hyperparameter(
            "momentum",
            ComparisonOperator::GreaterOrEqual,
            0,
            beta,
        ));
    }
    if beta >= 1.0 {
        return Err(OptimError::hyperparameter(
            "momentum",
            ComparisonOperator::LessThan,
            1,
            beta,
        ));
    }
    Ok(())
}
