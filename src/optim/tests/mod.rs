/*
 * @Author       : 老董
 * @Date         : 2026-10-14
 * @Description  : 优化核心单元测试
 *
 * 测试按功能分组：
 * - design: 回归数据的构造与校验
 * - cost: 代价与梯度
 * - hyperparams: 超参数默认值与校验
 * - rules: 四种更新规则的单轮行为
 * - optimizer: 多轮训练、收敛与边界情况
 * - comparison: 四变体对比
 */

mod cost;
mod design;
mod hyperparams;
mod rules;

use ndarray::{Array2, array};

use super::RegressionData;

/// 恰好落在直线 y = 1 + 2x 上的 4 个样本
fn line_data() -> RegressionData {
    RegressionData::new(
        array![[1.0, 0.0], [1.0, 1.0], [1.0, 2.0], [1.0, 3.0]],
        array![[1.0], [3.0], [5.0], [7.0]],
    )
    .unwrap()
}

/// 5 个带噪声的样本（5 不能被 2 整除，用于检验短尾批次）
fn noisy_data() -> RegressionData {
    RegressionData::new(
        array![
            [1.0, -1.2, 0.3],
            [1.0, -0.4, -0.8],
            [1.0, 0.1, 1.1],
            [1.0, 0.7, -0.2],
            [1.0, 1.5, 0.6]
        ],
        array![[-1.9], [0.2], [2.4], [1.3], [3.8]],
    )
    .unwrap()
}

fn assert_theta_eq(a: &Array2<f32>, b: &Array2<f32>, epsilon: f32) {
    assert_eq!(a.dim(), b.dim());
    for (x, y) in a.iter().zip(b.iter()) {
        approx::assert_abs_diff_eq!(*x, *y, epsilon = epsilon);
    }
}
