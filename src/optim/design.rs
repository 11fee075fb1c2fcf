/*
 * @Author       : 老董
 * @Date         : 2026-10-14
 * @Description  : 回归数据（设计矩阵 + 目标列向量），优化核心唯一接受的输入形式
 */

use ndarray::{Array2, s};

use crate::errors::{Operator, OptimError};

/// 经过校验的回归数据
///
/// - `design`: 设计矩阵 X，形状 [m, n]，第0列恒为 1.0（截距列）
/// - `target`: 目标列向量 y，形状 [m, 1]，与 X 按行对齐
///
/// 构造后只读，训练期间被优化器与代价函数共同借用。
#[derive(Debug, Clone, PartialEq)]
pub struct RegressionData {
    design: Array2<f32>,
    target: Array2<f32>,
}

impl RegressionData {
    /// 用已含截距列的设计矩阵创建回归数据
    ///
    /// # 错误
    /// - `EmptyData`: m 或 n 为 0
    /// - `ShapeMismatch`: y 不是 [m, 1]
    /// - `MissingIntercept`: X 第0列存在非 1.0 的元素
    pub fn new(design: Array2<f32>, target: Array2<f32>) -> Result<Self, OptimError> {
        let (m, n) = design.dim();
        if m == 0 || n == 0 {
            return Err(OptimError::EmptyData {
                shape: vec![m, n],
            });
        }
        if target.dim() != (m, 1) {
            return Err(OptimError::ShapeMismatch {
                operator: Operator::Sub,
                left_shape: vec![m, 1],
                right_shape: target.shape().to_vec(),
            });
        }
        if let Some((row, &value)) = design
            .column(0)
            .iter()
            .enumerate()
            .find(|&(_, &v)| v != 1.0)
        {
            return Err(OptimError::MissingIntercept { row, value });
        }
        Ok(Self { design, target })
    }

    /// 在特征矩阵 [m, k] 最左侧补一列 1.0，得到 [m, k+1] 的设计矩阵后再创建
    pub fn with_intercept(features: &Array2<f32>, target: Array2<f32>) -> Result<Self, OptimError> {
        Self::new(add_intercept(features), target)
    }

    /// 设计矩阵 X
    pub fn design(&self) -> &Array2<f32> {
        &self.design
    }

    /// 目标列向量 y
    pub fn target(&self) -> &Array2<f32> {
        &self.target
    }

    /// 样本数 m
    pub fn samples(&self) -> usize {
        self.design.nrows()
    }

    /// 参数个数 n（含截距）
    pub fn params(&self) -> usize {
        self.design.ncols()
    }

    /// 形状为 [n, 1] 的全零参数向量
    pub fn zero_theta(&self) -> Array2<f32> {
        Array2::zeros((self.params(), 1))
    }
}

/// 在最左侧补一列 1.0（截距项）
pub fn add_intercept(features: &Array2<f32>) -> Array2<f32> {
    let mut design = Array2::<f32>::ones((features.nrows(), features.ncols() + 1));
    design.slice_mut(s![.., 1..]).assign(features);
    design
}
