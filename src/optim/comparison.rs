/*
 * @Author       : 老董
 * @Date         : 2026-10-14
 * @Description  : 四种梯度下降的对比运行
 *
 * 四次训练共享同一份 θ₀ 快照和超参数，彼此之间没有可变共享状态：
 * 每次训练有自己的 θ 副本、自己的速度、自己的随机源，因此可以并行。
 */

use log::info;
use ndarray::Array2;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use super::design::RegressionData;
use super::optimizer::{Optimizer, TrainingRun};
use super::rule::{UpdateRule, UpdateRuleEnum, Variant};
use super::Hyperparameters;
use crate::errors::OptimError;

/// 单个变体的对比结果
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VariantRun {
    pub variant: Variant,
    pub run: TrainingRun,
}

impl VariantRun {
    pub fn label(&self) -> &'static str {
        self.variant.label()
    }
}

/// 交给可视化的一条命名代价曲线（只读借用）
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CostSeries<'a> {
    pub name: &'a str,
    pub costs: &'a [f32],
}

/// 对比结果：按批量、随机、小批量、动量的顺序排列
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Comparison {
    pub hyperparams: Hyperparameters,
    pub runs: Vec<VariantRun>,
}

impl Comparison {
    pub fn get(&self, variant: Variant) -> Option<&TrainingRun> {
        self.runs
            .iter()
            .find(|r| r.variant == variant)
            .map(|r| &r.run)
    }

    /// 轮数（所有曲线共享的横轴长度）
    pub fn epochs(&self) -> usize {
        self.hyperparams.epochs
    }

    /// 各变体的命名代价曲线，横轴为轮次 0..epochs
    pub fn series(&self) -> Vec<CostSeries<'_>> {
        self.runs
            .iter()
            .map(|r| CostSeries {
                name: r.label(),
                costs: r.run.cost_history.as_slice(),
            })
            .collect()
    }
}

/// 对比运行器
///
/// # 使用示例
/// ```ignore
/// let comparison = ComparisonRunner::new(Hyperparameters::default())
///     .seed(Some(42))
///     .parallel(true)
///     .run(&data, &data.zero_theta())?;
/// for series in comparison.series() {
///     println!("{}: {:?}", series.name, series.costs.last());
/// }
/// ```
#[derive(Debug, Clone)]
pub struct ComparisonRunner {
    hyperparams: Hyperparameters,
    seed: Option<u64>,
    parallel: bool,
}

impl ComparisonRunner {
    pub fn new(hyperparams: Hyperparameters) -> Self {
        Self {
            hyperparams,
            seed: None,
            parallel: false,
        }
    }

    /// 设置随机种子（只影响小批量规则的打乱顺序）
    pub fn seed(mut self, seed: Option<u64>) -> Self {
        self.seed = seed;
        self
    }

    /// 设置是否在 rayon 线程池上并行运行四个变体
    pub fn parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// 依次（或并行）训练四个变体
    ///
    /// 所有变体的超参数与形状都先校验完，任何一个不合法则一轮都不跑。
    pub fn run(
        &self,
        data: &RegressionData,
        theta0: &Array2<f32>,
    ) -> Result<Comparison, OptimError> {
        let optimizer = Optimizer::new(self.hyperparams);
        let mut rules = Variant::ALL
            .iter()
            .map(|&variant| (variant, variant.build(&self.hyperparams, self.seed)))
            .collect::<Vec<_>>();
        for (_, rule) in &rules {
            optimizer.validate(data, theta0, rule)?;
        }

        info!(
            "开始对比 {} 个变体（{}）",
            rules.len(),
            if self.parallel { "并行" } else { "串行" }
        );

        let train = |(variant, rule): &mut (Variant, UpdateRuleEnum)| {
            optimizer.run(data, theta0, rule).map(|run| {
                info!("{} 完成，最终 cost={:?}", rule.name(), run.final_cost());
                VariantRun {
                    variant: *variant,
                    run,
                }
            })
        };
        let runs = if self.parallel {
            rules.par_iter_mut().map(train).collect::<Result<Vec<_>, _>>()?
        } else {
            rules.iter_mut().map(train).collect::<Result<Vec<_>, _>>()?
        };

        Ok(Comparison {
            hyperparams: self.hyperparams,
            runs,
        })
    }
}
