//! # 优化核心
//!
//! 线性回归的均方误差代价，以及四种一阶优化算法的收敛对比。
//!
//! # 主要组件
//!
//! - [`compute_cost`]: 均方误差代价 J(θ) = 1/(2m)·Σ(Xθ - y)²
//! - [`UpdateRule`]: 每轮参数更新的统一接口，四种实现见 [`UpdateRuleEnum`]
//! - [`Optimizer`]: 按固定轮数驱动更新规则并记录代价轨迹
//! - [`ComparisonRunner`]: 用同一份初值与超参数依次训练四种变体
//! - [`RegressionData`]: 经过校验的输入（设计矩阵含截距列 + 目标列向量）
//!
//! # 使用示例
//!
//! ```ignore
//! use gd_compare::optim::{ComparisonRunner, Hyperparameters, RegressionData};
//!
//! let data = RegressionData::with_intercept(&features, target)?;
//! let comparison = ComparisonRunner::new(Hyperparameters::default())
//!     .seed(Some(42))
//!     .run(&data, &data.zero_theta())?;
//! ```

mod comparison;
mod cost;
mod design;
mod float_serde;
mod hyperparams;
mod optimizer;
pub mod rule;

#[cfg(test)]
mod tests;

pub use comparison::{Comparison, ComparisonRunner, CostSeries, VariantRun};
pub use cost::{check_shapes, compute_cost};
pub use design::{RegressionData, add_intercept};
pub use hyperparams::Hyperparameters;
pub use optimizer::{CostHistory, MONOTONE_RELATIVE_TOLERANCE, Optimizer, TrainingRun};
pub use rule::{
    BatchUpdate, MiniBatchUpdate, MomentumUpdate, StochasticUpdate, UpdateRule, UpdateRuleEnum,
    Variant,
};
