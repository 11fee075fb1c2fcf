//! 可视化模块单元测试


use ndarray::array;

use crate::optim::{
    Comparison, ComparisonRunner, CostHistory, Hyperparameters, RegressionData, TrainingRun,
    Variant, VariantRun,
};

/// 在直线 y = 1 + 2x 上跑一次短的四变体对比
fn small_comparison() -> Comparison {
    let data = RegressionData::new(
        array![[1.0, 0.0], [1.0, 1.0], [1.0, 2.0], [1.0, 3.0]],
        array![[1.0], [3.0], [5.0], [7.0]],
    )
    .unwrap();
    let hp = Hyperparameters::new(0.05, 30).batch_size(2).momentum(0.5);
    ComparisonRunner::new(hp)
        .seed(Some(7))
        .run(&data, &data.zero_theta())
        .unwrap()
}

/// 手工构造只有一个变体的结果
fn manual_comparison(variant: Variant, costs: &[f32]) -> Comparison {
    let mut cost_history = CostHistory::with_capacity(costs.len());
    for &c in costs {
        cost_history.push(c);
    }
    Comparison {
        hyperparams: Hyperparameters::new(0.1, costs.len()),
        runs: vec![VariantRun {
            variant,
            run: TrainingRun {
                theta: array![[0.0], [0.0]],
                cost_history,
            },
        }],
    }
}

fn temp_path(name: &str) -> std::path::PathBuf {
    std::env::temp_dir().join(format!("gd_compare_{}_{}", std::process::id(), name))
}
