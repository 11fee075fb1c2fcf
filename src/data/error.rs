//! 数据准备错误类型定义

use std::path::PathBuf;
use thiserror::Error;

use crate::errors::OptimError;

/// 数据读取与预处理相关错误
#[derive(Debug, Error)]
pub enum DataError {
    /// 文件未找到
    #[error("文件未找到: {0}")]
    FileNotFound(PathBuf),

    /// IO 错误
    #[error("IO 错误: {0}")]
    IoError(#[from] std::io::Error),

    /// CSV 格式错误
    #[error("格式错误（第 {line} 行）: {message}")]
    FormatError { line: usize, message: String },

    /// 列不存在
    #[error("列不存在: {0}")]
    MissingColumn(String),

    /// 数值列中出现无法解析的单元格
    #[error("列 {column} 的值 {value:?}（第 {line} 行）不是数值")]
    NotNumeric {
        column: String,
        /// 文件中的行号（从 1 开始，表头为第 1 行）
        line: usize,
        value: String,
    },

    /// 编码器未见过的类别
    #[error("列 {column} 中出现未拟合过的类别 {value:?}")]
    UnknownCategory { column: String, value: String },

    /// 编码值越界
    #[error("编码值 {code} 超出类别数 {classes}")]
    CodeOutOfRange { code: usize, classes: usize },

    /// 形状不匹配
    #[error("形状不匹配: 期望 {expected:?}, 实际 {got:?}")]
    ShapeMismatch {
        expected: Vec<usize>,
        got: Vec<usize>,
    },

    /// 没有任何数据行
    #[error("表中没有数据行")]
    EmptyTable,

    /// 不满足优化核心的输入约定
    #[error(transparent)]
    Contract(#[from] OptimError),
}
