//! 特征标准化（Z-score）
//!
//! 对批量/动量梯度下降而言，各特征量纲一致是共用一个学习率还能稳定收敛的前提。

use ndarray::{Array1, Array2, Axis};
use serde::{Deserialize, Serialize};

use super::error::DataError;

/// 逐列标准化器：x' = (x - mean) / std
///
/// std 为总体标准差（除以 n）；方差为 0 的列 std 记为 1.0，标准化后整列为 0。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StandardScaler {
    means: Array1<f32>,
    stds: Array1<f32>,
}

impl StandardScaler {
    /// 拟合各列的均值与标准差
    pub fn fit(features: &Array2<f32>) -> Result<Self, DataError> {
        let means = features
            .mean_axis(Axis(0))
            .ok_or(DataError::EmptyTable)?;
        let stds = features
            .std_axis(Axis(0), 0.0)
            .mapv(|s| if s > f32::EPSILON { s } else { 1.0 });
        Ok(Self { means, stds })
    }

    pub fn means(&self) -> &Array1<f32> {
        &self.means
    }

    pub fn stds(&self) -> &Array1<f32> {
        &self.stds
    }

    pub fn n_features(&self) -> usize {
        self.means.len()
    }

    /// 标准化
    pub fn transform(&self, features: &Array2<f32>) -> Result<Array2<f32>, DataError> {
        self.check(features)?;
        Ok((features - &self.means) / &self.stds)
    }

    /// 逆标准化
    pub fn inverse_transform(&self, features: &Array2<f32>) -> Result<Array2<f32>, DataError> {
        self.check(features)?;
        Ok(features * &self.stds + &self.means)
    }

    pub fn fit_transform(features: &Array2<f32>) -> Result<(Self, Array2<f32>), DataError> {
        let scaler = Self::fit(features)?;
        let scaled = scaler.transform(features)?;
        Ok((scaler, scaled))
    }

    fn check(&self, features: &Array2<f32>) -> Result<(), DataError> {
        if features.ncols() != self.n_features() {
            return Err(DataError::ShapeMismatch {
                expected: vec![features.nrows(), self.n_features()],
                got: features.shape().to_vec(),
            });
        }
        Ok(())
    }
}
