use ndarray::Array2;

use super::UpdateRule;
use crate::optim::cost::mean_gradient;

/// 批量梯度下降：每轮用全部样本算一次梯度
///
/// g = 1/m · Xᵀ(Xθ - y)，θ ← θ - α·g
#[derive(Debug, Clone, Copy, Default)]
pub struct BatchUpdate;

impl UpdateRule for BatchUpdate {
    fn name(&self) -> &'static str {
        "Batch GD"
    }

    fn update(
        &mut self,
        x: &Array2<f32>,
        y: &Array2<f32>,
        theta: &mut Array2<f32>,
        learning_rate: f32,
    ) {
        let gradient = mean_gradient(x, y, theta);
        theta.scaled_add(-learning_rate, &gradient);
    }
}
