//! 数据准备模块
//!
//! 把 CSV 表格转换为优化核心接受的 [`RegressionData`](crate::optim::RegressionData)。
//!
//! # 主要组件
//!
//! - [`Table`]: 极简 CSV 表格
//! - [`LabelEncoder`] / [`EncoderSet`]: 类别列的标签编码
//! - [`StandardScaler`]: 逐列 Z-score 标准化
//! - [`Preprocessor`] / [`FittedPreprocessor`]: 编码、标准化、补截距列的完整流水线
//! - [`DataError`]: 数据准备错误类型
//!
//! # 使用示例
//!
//! ```ignore
//! use gd_compare::data::{Preprocessor, Table};
//!
//! let table = Table::read_csv("data/Housing.csv")?;
//! let (fitted, data) = Preprocessor::new("price")
//!     .categorical(&["mainroad", "furnishingstatus"])
//!     .fit_transform(&table)?;
//! println!("{} 个样本, {} 个参数", data.samples(), data.params());
//! ```

mod encoding;
pub mod error;
mod pipeline;
mod scaler;
mod table;

#[cfg(test)]
mod tests;

// Re-exports
pub use encoding::{EncoderSet, LabelEncoder};
pub use error::DataError;
pub use pipeline::{FittedPreprocessor, Preprocessor};
pub use scaler::StandardScaler;
pub use table::Table;
