/*
 * @Author       : 老董
 * @Date         : 2026-10-14
 * @Description  : 本模块负责对比结果的呈现：代价曲线图、文本汇总表与文件导出。
 *                 只读借用优化核心产出的曲线，不修改任何结果。
 */

mod chart;
pub mod error;
pub mod export;
mod summary;

#[cfg(test)]
mod tests;

pub use chart::{CostChart, PALETTE, TITLE, X_LABEL, Y_LABEL};
pub use error::VisualError;
pub use summary::summary_table;

use crate::optim::CostSeries;

/// 检查曲线非空且等长，返回公共长度（轮数）
fn check_series(series: &[CostSeries<'_>]) -> Result<usize, VisualError> {
    let first = series.first().ok_or(VisualError::EmptySeries)?;
    let epochs = first.costs.len();
    if epochs == 0 {
        return Err(VisualError::EmptySeries);
    }
    for s in series {
        if s.costs.len() != epochs {
            return Err(VisualError::LengthMismatch {
                name: s.name.to_string(),
                expected: epochs,
                got: s.costs.len(),
            });
        }
    }
    Ok(epochs)
}
