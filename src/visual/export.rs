//! 对比结果导出
//!
//! - CSV：`epoch,<变体名>...`，每轮一行
//! - npy：形状为 [epochs, 变体数] 的代价矩阵
//! - JSON：完整的 [`Comparison`]（超参数、各变体最终参数与代价轨迹）

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use ndarray::Array2;

use super::check_series;
use super::error::VisualError;
use crate::optim::{Comparison, CostSeries};

/// 把各曲线写成 CSV 文本
pub fn write_csv_to(series: &[CostSeries<'_>], mut writer: impl Write) -> Result<(), VisualError> {
    let epochs = check_series(series)?;

    write!(writer, "epoch")?;
    for s in series {
        write!(writer, ",{}", s.name)?;
    }
    writeln!(writer)?;

    for epoch in 0..epochs {
        write!(writer, "{}", epoch)?;
        for s in series {
            write!(writer, ",{}", s.costs[epoch])?;
        }
        writeln!(writer)?;
    }
    writer.flush()?;
    Ok(())
}

/// 把各曲线写入 CSV 文件
pub fn write_csv(series: &[CostSeries<'_>], path: impl AsRef<Path>) -> Result<(), VisualError> {
    let file = File::create(path.as_ref())?;
    write_csv_to(series, BufWriter::new(file))
}

/// 代价矩阵：第 i 行第 j 列为第 j 条曲线第 i 轮的代价
pub fn cost_matrix(series: &[CostSeries<'_>]) -> Result<Array2<f32>, VisualError> {
    let epochs = check_series(series)?;
    Ok(Array2::from_shape_fn((epochs, series.len()), |(i, j)| {
        series[j].costs[i]
    }))
}

/// 把代价矩阵写为 .npy
pub fn write_npy(series: &[CostSeries<'_>], path: impl AsRef<Path>) -> Result<(), VisualError> {
    let matrix = cost_matrix(series)?;
    ndarray_npy::write_npy(path, &matrix)?;
    Ok(())
}

/// 把完整对比结果写为格式化 JSON
pub fn write_report(comparison: &Comparison, path: impl AsRef<Path>) -> Result<(), VisualError> {
    let mut writer = BufWriter::new(File::create(path.as_ref())?);
    serde_json::to_writer_pretty(&mut writer, comparison)?;
    writer.flush()?;
    Ok(())
}

/// 读回 JSON 对比结果
pub fn read_report(path: impl AsRef<Path>) -> Result<Comparison, VisualError> {
    let file = File::open(path.as_ref())?;
    Ok(serde_json::from_reader(std::io::BufReader::new(file))?)
}
