/*
 * @Author       : 老董
 * @Date         : 2026-10-14
 * @Description  : 优化器：按固定轮数驱动某个更新规则，并逐轮记录代价
 */

use log::{info, trace, warn};
use ndarray::Array2;
use serde::{Deserialize, Serialize};

use super::cost::{check_shapes, compute_cost};
use super::float_serde;
use super::design::RegressionData;
use super::rule::{UpdateRule, UpdateRuleEnum};
use super::Hyperparameters;
use crate::errors::{Operator, OptimError};

/// 预分配的上限；轮数更多时由 Vec 自行增长
const MAX_PREALLOCATED_EPOCHS: usize = 1 << 16;

/// 单调性判断允许的相对误差（f32 在平台期会有 1ulp 级别的抖动）
pub const MONOTONE_RELATIVE_TOLERANCE: f32 = 1e-6;

/// 代价轨迹：每轮追加一个代价值，只增不改
///
/// 序列化时非有限值写为字符串 `"NaN"`、`"inf"`、`"-inf"`，可无损读回。
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CostHistory(#[serde(with = "float_serde::values")] Vec<f32>);

impl CostHistory {
    pub(crate) fn with_capacity(epochs: usize) -> Self {
        Self(Vec::with_capacity(epochs.min(MAX_PREALLOCATED_EPOCHS)))
    }

    pub(crate) fn push(&mut self, cost: f32) {
        self.0.push(cost);
    }

    pub fn as_slice(&self) -> &[f32] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn first(&self) -> Option<f32> {
        self.0.first().copied()
    }

    pub fn last(&self) -> Option<f32> {
        self.0.last().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = &f32> {
        self.0.iter()
    }

    /// 第一个非有限代价所在的轮次（发散检测）
    pub fn first_non_finite(&self) -> Option<usize> {
        self.0.iter().position(|c| !c.is_finite())
    }

    /// 相邻两轮的代价是否都不上升（容许 [`MONOTONE_RELATIVE_TOLERANCE`] 的舍入抖动）
    pub fn is_non_increasing(&self) -> bool {
        self.is_non_increasing_within(MONOTONE_RELATIVE_TOLERANCE)
    }

    /// 相邻两轮满足 c[t+1] ≤ c[t] + |c[t]|·rel + f32::EPSILON；出现 NaN 时为 false
    pub fn is_non_increasing_within(&self, relative_tolerance: f32) -> bool {
        self.0
            .windows(2)
            .all(|w| w[1] <= w[0] + w[0].abs() * relative_tolerance + f32::EPSILON)
    }

    /// 前 `epochs` 轮的代价是否严格下降
    pub fn is_strictly_decreasing_for(&self, epochs: usize) -> bool {
        let end = epochs.min(self.0.len());
        self.0[..end].windows(2).all(|w| w[1] < w[0])
    }
}

/// 一次训练的结果：最终参数与代价轨迹
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrainingRun {
    #[serde(with = "float_serde::matrix")]
    pub theta: Array2<f32>,
    pub cost_history: CostHistory,
}

impl TrainingRun {
    /// 用最终参数预测：Xθ
    pub fn predict(&self, x: &Array2<f32>) -> Result<Array2<f32>, OptimError> {
        if x.ncols() != self.theta.nrows() {
            return Err(OptimError::ShapeMismatch {
                operator: Operator::MatMul,
                left_shape: x.shape().to_vec(),
                right_shape: self.theta.shape().to_vec(),
            });
        }
        Ok(x.dot(&self.theta))
    }

    pub fn final_cost(&self) -> Option<f32> {
        self.cost_history.last()
    }
}

/// 优化器
///
/// # 使用示例
/// ```ignore
/// let optimizer = Optimizer::new(Hyperparameters::new(0.1, 500));
/// let mut rule: UpdateRuleEnum = BatchUpdate.into();
/// let run = optimizer.run(&data, &data.zero_theta(), &mut rule)?;
/// assert_eq!(run.cost_history.len(), 500);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Optimizer {
    hyperparams: Hyperparameters,
}

impl Optimizer {
    pub fn new(hyperparams: Hyperparameters) -> Self {
        Self { hyperparams }
    }

    pub fn hyperparams(&self) -> &Hyperparameters {
        &self.hyperparams
    }

    /// 校验超参数与形状（任何一轮开始之前）
    pub fn validate(
        &self,
        data: &RegressionData,
        theta0: &Array2<f32>,
        rule: &UpdateRuleEnum,
    ) -> Result<(), OptimError> {
        self.hyperparams.validate()?;
        rule.validate(data.samples())?;
        check_shapes(data.design(), data.target(), theta0)
    }

    /// 训练 `epochs` 轮
    ///
    /// 每轮：调用一次更新规则，再对更新后的 θ 计算一次代价并追加到轨迹。
    /// `theta0` 只被克隆，不会被修改，因此可用同一份初值多次训练。
    /// 代价变为非有限值时只记录警告，训练照常跑完。
    pub fn run(
        &self,
        data: &RegressionData,
        theta0: &Array2<f32>,
        rule: &mut UpdateRuleEnum,
    ) -> Result<TrainingRun, OptimError> {
        self.validate(data, theta0, rule)?;

        let Hyperparameters {
            learning_rate,
            epochs,
            ..
        } = self.hyperparams;
        let (x, y) = (data.design(), data.target());

        info!(
            "{} 开始训练: 样本数={}, 参数数={}, epochs={}, lr={}",
            rule.name(),
            data.samples(),
            data.params(),
            epochs,
            learning_rate
        );

        rule.reset(theta0.dim());
        let mut theta = theta0.clone();
        let mut cost_history = CostHistory::with_capacity(epochs);
        let mut diverged = false;

        for epoch in 0..epochs {
            rule.update(x, y, &mut theta, learning_rate);
            let cost = compute_cost(x, y, &theta)?;
            trace!("{} epoch {}: cost={}", rule.name(), epoch, cost);

            if !cost.is_finite() && !diverged {
                diverged = true;
                warn!(
                    "{} 在第 {} 轮发散（cost={}），学习率可能过大",
                    rule.name(),
                    epoch,
                    cost
                );
            }
            cost_history.push(cost);
        }

        info!(
            "{} 训练结束: 最终 cost={:?}",
            rule.name(),
            cost_history.last()
        );
        Ok(TrainingRun {
            theta,
            cost_history,
        })
    }
}
