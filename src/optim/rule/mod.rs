/*
 * @Author       : 老董
 * @Date         : 2026-10-14
 * @Description  : 参数更新规则：批量、随机、小批量、动量四种梯度下降
 *
 * 四种规则是封闭集合，用 enum_dispatch 静态分发；
 * 每个规则只持有自己需要的状态（动量规则持有速度，小批量规则持有随机源）。
 */

mod batch;
mod mini_batch;
mod momentum;
mod stochastic;

pub use batch::BatchUpdate;
pub use mini_batch::MiniBatchUpdate;
pub use momentum::MomentumUpdate;
pub use stochastic::StochasticUpdate;

use enum_dispatch::enum_dispatch;
use ndarray::Array2;
use serde::{Deserialize, Serialize};
use std::fmt::{self, Display};

use super::Hyperparameters;
use crate::errors::OptimError;

/// 一轮（epoch）参数更新的统一接口
#[enum_dispatch(UpdateRuleEnum)]
pub trait UpdateRule {
    /// 规则名称（用于日志与图例）
    fn name(&self) -> &'static str;

    /// 校验本规则特有的超参数（如小批量大小、动量系数）
    fn validate(&self, samples: usize) -> Result<(), OptimError> {
        let _ = samples;
        Ok(())
    }

    /// 训练开始前清空本规则的内部状态
    fn reset(&mut self, theta_dim: (usize, usize)) {
        let _ = theta_dim;
    }

    /// 执行一轮更新，原地修改 `theta`
    ///
    /// 批量/动量规则每轮只更新一次；随机/小批量规则在一轮内遍历全部样本、多次更新。
    fn update(
        &mut self,
        x: &Array2<f32>,
        y: &Array2<f32>,
        theta: &mut Array2<f32>,
        learning_rate: f32,
    );
}

#[enum_dispatch]
#[derive(Debug, Clone)]
pub enum UpdateRuleEnum {
    BatchUpdate,
    StochasticUpdate,
    MiniBatchUpdate,
    MomentumUpdate,
}

/// 梯度下降变体（对比时的固定顺序：批量、随机、小批量、动量）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Variant {
    Batch,
    Stochastic,
    MiniBatch,
    Momentum,
}

impl Variant {
    pub const ALL: [Variant; 4] = [
        Variant::Batch,
        Variant::Stochastic,
        Variant::MiniBatch,
        Variant::Momentum,
    ];

    /// 图例/报表中的名称
    pub const fn label(self) -> &'static str {
        match self {
            Variant::Batch => "Batch GD",
            Variant::Stochastic => "Stochastic GD",
            Variant::MiniBatch => "Mini-Batch GD",
            Variant::Momentum => "Momentum GD",
        }
    }

    /// 按超参数构建对应的更新规则
    ///
    /// `seed` 只影响小批量规则的打乱顺序；为 `None` 时使用系统熵。
    pub fn build(self, hyperparams: &Hyperparameters, seed: Option<u64>) -> UpdateRuleEnum {
        match self {
            Variant::Batch => BatchUpdate.into(),
            Variant::Stochastic => StochasticUpdate.into(),
            Variant::MiniBatch => MiniBatchUpdate::new(hyperparams.batch_size, seed).into(),
            Variant::Momentum => MomentumUpdate::new(hyperparams.momentum).into(),
        }
    }
}

impl Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}
