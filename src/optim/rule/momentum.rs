use ndarray::Array2;

use super::UpdateRule;
use crate::errors::OptimError;
use crate::optim::cost::mean_gradient;
use crate::optim::hyperparams::validate_momentum;

/// 动量梯度下降
///
/// g = 1/m · Xᵀ(Xθ - y)（全部样本）
/// v ← β·v + α·g
/// θ ← θ - v
///
/// 速度 v 在一次训练内跨轮累积，只在 `reset` 时清零。β = 0 时与批量规则完全一致。
#[derive(Debug, Clone)]
pub struct MomentumUpdate {
    beta: f32,
    velocity: Array2<f32>,
}

impl MomentumUpdate {
    pub fn new(beta: f32) -> Self {
        Self {
            beta,
            velocity: Array2::zeros((0, 1)),
        }
    }

    pub fn beta(&self) -> f32 {
        self.beta
    }

    /// 当前速度（只读）
    pub fn velocity(&self) -> &Array2<f32> {
        &self.velocity
    }
}

impl UpdateRule for MomentumUpdate {
    fn name(&self) -> &'static str {
        "Momentum GD"
    }

    fn validate(&self, _samples: usize) -> Result<(), OptimError> {
        validate_momentum(self.beta)
    }

    fn reset(&mut self, theta_dim: (usize, usize)) {
        self.velocity = Array2::zeros(theta_dim);
    }

    fn update(
        &mut self,
        x: &Array2<f32>,
        y: &Array2<f32>,
        theta: &mut Array2<f32>,
        learning_rate: f32,
    ) {
        if self.velocity.dim() != theta.dim() {
            self.velocity = Array2::zeros(theta.dim());
        }
        let gradient = mean_gradient(x, y, theta);
        let beta = self.beta;
        self.velocity.mapv_inplace(|v| beta * v);
        self.velocity.scaled_add(learning_rate, &gradient);
        *theta -= &self.velocity;
    }
}
