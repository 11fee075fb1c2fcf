//! # gd_compare
//!
//! `gd_compare`在线性回归的均方误差目标上，对比批量、随机、小批量与动量四种梯度下降的收敛过程。
//!
//! - [`optim`]: 优化核心（代价函数、四种更新规则、优化器与对比运行器）
//! - [`data`]: 从 CSV 表格到回归数据的预处理
//! - [`visual`]: 代价曲线图、汇总表与结果导出
//! - [`config`]: 运行配置
//! - [`errors`]: 优化核心的错误类型
//!

pub mod config;
pub mod data;
pub mod errors;
pub mod optim;
pub mod visual;
