/*
 * @Author       : 老董
 * @Date         : 2026-10-14
 * @Description  : 均方误差代价及其梯度
 */

use ndarray::{Array2, ArrayBase, Data, Ix2};

use crate::errors::{Operator, OptimError};

/// 均方误差代价：J(θ) = 1/(2m) · Σ(Xθ - y)²
///
/// 无副作用；相同输入必得相同输出。
/// 结果可能为非有限值（学习率过大导致发散时），此时原样返回。
///
/// # 错误
/// X、y、θ 的形状不兼容时返回 `ShapeMismatch`
pub fn compute_cost(
    x: &Array2<f32>,
    y: &Array2<f32>,
    theta: &Array2<f32>,
) -> Result<f32, OptimError> {
    check_shapes(x, y, theta)?;
    let m = x.nrows() as f32;
    let residual = x.dot(theta) - y;
    Ok(residual.mapv(|r| r * r).sum() / (2.0 * m))
}

/// 校验 X[m, n]、y[m, 1]、θ[n, 1] 三者形状
pub fn check_shapes(
    x: &Array2<f32>,
    y: &Array2<f32>,
    theta: &Array2<f32>,
) -> Result<(), OptimError> {
    if x.nrows() == 0 || x.ncols() == 0 {
        return Err(OptimError::EmptyData {
            shape: x.shape().to_vec(),
        });
    }
    if x.ncols() != theta.nrows() {
        return Err(OptimError::ShapeMismatch {
            operator: Operator::MatMul,
            left_shape: x.shape().to_vec(),
            right_shape: theta.shape().to_vec(),
        });
    }
    // 只支持单输出：θ 必须为列向量
    if theta.ncols() != 1 {
        return Err(OptimError::ShapeMismatch {
            operator: Operator::Cost,
            left_shape: theta.shape().to_vec(),
            right_shape: vec![x.ncols(), 1],
        });
    }
    if y.dim() != (x.nrows(), 1) {
        return Err(OptimError::ShapeMismatch {
            operator: Operator::Sub,
            left_shape: vec![x.nrows(), 1],
            right_shape: y.shape().to_vec(),
        });
    }
    Ok(())
}

/// 一组样本上的平均梯度：1/rows · Xᵀ(Xθ - y)
///
/// rows 为 1 时即单样本梯度 xᵢᵀ(xᵢθ - yᵢ)。调用方负责形状一致。
pub(crate) fn mean_gradient<S1, S2>(
    x: &ArrayBase<S1, Ix2>,
    y: &ArrayBase<S2, Ix2>,
    theta: &Array2<f32>,
) -> Array2<f32>
where
    S1: Data<Elem = f32>,
    S2: Data<Elem = f32>,
{
    let rows = x.nrows() as f32;
    let residual = x.dot(theta) - y;
    x.t().dot(&residual) / rows
}
