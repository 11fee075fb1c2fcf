use ndarray::{Array2, Axis};
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;

use super::UpdateRule;
use crate::errors::OptimError;
use crate::optim::cost::mean_gradient;
use crate::optim::hyperparams::validate_batch_size;

/// 小批量梯度下降
///
/// 每轮开始时用自带的随机源重新打乱 0..m，按 `batch_size` 切成连续的块
/// （m 不能整除时最后一块较短），每块：
/// g = 1/|块| · X_bᵀ(X_bθ - y_b)，θ ← θ - α·g。
/// 每个样本每轮恰好参与一次。
#[derive(Debug, Clone)]
pub struct MiniBatchUpdate {
    batch_size: usize,
    rng: StdRng,
}

impl MiniBatchUpdate {
    /// 创建小批量规则；`seed` 为 `None` 时使用系统熵
    pub fn new(batch_size: usize, seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self::with_rng(batch_size, rng)
    }

    /// 使用外部注入的随机源创建
    pub fn with_rng(batch_size: usize, rng: StdRng) -> Self {
        Self { batch_size, rng }
    }

    pub fn batch_size(&self) -> usize {
        self.batch_size
    }

    /// 打乱 0..samples 并切成本轮的各个小批量
    pub(crate) fn epoch_batches(&mut self, samples: usize) -> Vec<Vec<usize>> {
        let mut indices: Vec<usize> = (0..samples).collect();
        indices.shuffle(&mut self.rng);
        indices
            .chunks(self.batch_size.max(1))
            .map(<[usize]>::to_vec)
            .collect()
    }
}

impl UpdateRule for MiniBatchUpdate {
    fn name(&self) -> &'static str {
        "Mini-Batch GD"
    }

    fn validate(&self, samples: usize) -> Result<(), OptimError> {
        validate_batch_size(self.batch_size, samples)
    }

    fn update(
        &mut self,
        x: &Array2<f32>,
        y: &Array2<f32>,
        theta: &mut Array2<f32>,
        learning_rate: f32,
    ) {
        for batch in self.epoch_batches(x.nrows()) {
            let x_batch = x.select(Axis(0), &batch);
            let y_batch = y.select(Axis(0), &batch);
            let gradient = mean_gradient(&x_batch, &y_batch, theta);
            theta.scaled_add(-learning_rate, &gradient);
        }
    }
}
