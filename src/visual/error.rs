//! 可视化与导出错误类型定义

use thiserror::Error;

/// 绘图与结果导出相关错误
#[derive(Debug, Error)]
pub enum VisualError {
    /// 图像编码或写入失败
    #[error("图像错误: {0}")]
    Image(#[from] image::ImageError),

    /// IO 错误
    #[error("IO 错误: {0}")]
    Io(#[from] std::io::Error),

    /// plotters 绘图失败
    #[error("绘图错误: {0}")]
    Plot(String),

    /// npy 写入失败
    #[error("npy 写入错误: {0}")]
    Npy(#[from] ndarray_npy::WriteNpyError),

    /// JSON 序列化失败
    #[error("JSON 错误: {0}")]
    Json(#[from] serde_json::Error),

    /// 没有可绘制/导出的曲线，或某条曲线为空
    #[error("代价曲线为空")]
    EmptySeries,

    /// 各曲线长度不一致
    #[error("曲线 {name} 的长度为 {got}，应与其余曲线一致为 {expected}")]
    LengthMismatch {
        name: String,
        expected: usize,
        got: usize,
    },
}
