/*
 * @Author       : 老董
 * @Date         : 2026-10-14
 * @Description  : 运行配置：数据来源、预处理、超参数与输出位置
 *
 * 从 JSON 文件读取，所有字段都可省略，省略时使用房价数据集的默认设置。
 */

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::data::Preprocessor;
use crate::optim::Hyperparameters;


/// 配置读取与校验错误
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("无法读取配置文件 {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("配置文件格式错误: {0}")]
    Json(#[from] serde_json::Error),

    #[error("配置项 {field} 不合法: {reason}")]
    InvalidValue { field: &'static str, reason: String },
}

/// 一次对比运行的全部配置
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RunConfig {
    /// CSV 数据文件
    pub data_path: PathBuf,
    /// 目标列
    pub target_column: String,
    /// 需要标签编码的类别列
    pub categorical_columns: Vec<String>,
    /// 是否标准化目标列
    pub standardize_target: bool,
    pub hyperparams: Hyperparameters,
    /// 小批量打乱用的随机种子，None 则每次运行不同
    pub seed: Option<u64>,
    /// 是否并行运行四个变体
    pub parallel: bool,
    /// 图表与导出文件的目录
    pub output_dir: PathBuf,
    /// 图表纵轴是否用对数刻度
    pub log_scale: bool,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            data_path: PathBuf::from("data/Housing.csv"),
            target_column: "price".to_string(),
            categorical_columns: [
                "mainroad",
                "guestroom",
                "basement",
                "hotwaterheating",
                "airconditioning",
                "prefarea",
                "furnishingstatus",
            ]
            .iter()
            .map(|c| c.to_string())
            .collect(),
            standardize_target: false,
            hyperparams: Hyperparameters::default(),
            seed: None,
            parallel: false,
            output_dir: PathBuf::from("output"),
            log_scale: false,
        }
    }
}

impl RunConfig {
    /// 从 JSON 文件读取并校验
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_json(&text)?;
        log::debug!("已读取配置 {:?}", path);
        Ok(config)
    }

    /// 从 JSON 文本解析并校验
    pub fn from_json(text: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// 只检查与数据无关的部分；超参数的取值范围由优化器在训练前校验
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.target_column.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "target_column",
                reason: "不能为空".to_string(),
            });
        }
        if self.categorical_columns.contains(&self.target_column) {
            return Err(ConfigError::InvalidValue {
                field: "categorical_columns",
                reason: format!("目标列 {} 不能作为类别列", self.target_column),
            });
        }
        Ok(())
    }

    /// 按配置构造预处理器
    pub fn preprocessor(&self) -> Preprocessor {
        Preprocessor::new(self.target_column.clone())
            .categorical(&self.categorical_columns)
            .standardize_target(self.standardize_target)
    }
}
