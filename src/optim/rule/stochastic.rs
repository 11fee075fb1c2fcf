use ndarray::{Array2, s};

use super::UpdateRule;
use crate::optim::cost::mean_gradient;

/// 随机梯度下降：按下标顺序 0..m 逐样本更新，不打乱
///
/// gᵢ = xᵢᵀ(xᵢθ - yᵢ)，θ ← θ - α·gᵢ，每轮共 m 次更新。
/// 与小批量规则不同，这里刻意保持固定顺序。
#[derive(Debug, Clone, Copy, Default)]
pub struct StochasticUpdate;

impl UpdateRule for StochasticUpdate {
    fn name(&self) -> &'static str {
        "Stochastic GD"
    }

    fn update(
        &mut self,
        x: &Array2<f32>,
        y: &Array2<f32>,
        theta: &mut Array2<f32>,
        learning_rate: f32,
    ) {
        for i in 0..x.nrows() {
            let xi = x.slice(s![i..i + 1, ..]);
            let yi = y.slice(s![i..i + 1, ..]);
            let gradient = mean_gradient(&xi, &yi, theta);
            theta.scaled_add(-learning_rate, &gradient);
        }
    }
}
