//! 类别编码
//!
//! 把字符串类别映射为整数编码：类别按字典序排序后，编码即其下标。
//! 拟合结果保存在显式的编码器对象里，由调用方持有并传递。

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::error::DataError;
use super::table::Table;

/// 单列的类别编码器
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LabelEncoder {
    /// 已排序、去重的类别
    classes: Vec<String>,
}

impl LabelEncoder {
    /// 用一列取值拟合
    pub fn fit<S: AsRef<str>>(values: &[S]) -> Self {
        let mut classes: Vec<String> = values.iter().map(|v| v.as_ref().to_string()).collect();
        classes.sort();
        classes.dedup();
        Self { classes }
    }

    pub fn classes(&self) -> &[String] {
        &self.classes
    }

    /// 单个类别的编码
    pub fn encode(&self, value: &str) -> Option<usize> {
        self.classes
            .binary_search_by(|c| c.as_str().cmp(value))
            .ok()
    }

    /// 整列编码；`column` 仅用于报错信息
    pub fn transform<S: AsRef<str>>(&self, column: &str, values: &[S]) -> Result<Vec<f32>, DataError> {
        values
            .iter()
            .map(|v| {
                let v = v.as_ref();
                self.encode(v)
                    .map(|code| code as f32)
                    .ok_or_else(|| DataError::UnknownCategory {
                        column: column.to_string(),
                        value: v.to_string(),
                    })
            })
            .collect()
    }

    /// 编码还原为类别
    pub fn inverse_transform(&self, codes: &[usize]) -> Result<Vec<&str>, DataError> {
        codes
            .iter()
            .map(|&code| {
                self.classes
                    .get(code)
                    .map(String::as_str)
                    .ok_or(DataError::CodeOutOfRange {
                        code,
                        classes: self.classes.len(),
                    })
            })
            .collect()
    }
}

/// 列名 → 已拟合编码器
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EncoderSet {
    encoders: BTreeMap<String, LabelEncoder>,
}

impl EncoderSet {
    /// 对表中给定的各列分别拟合编码器
    pub fn fit(table: &Table, columns: &[String]) -> Result<Self, DataError> {
        let mut encoders = BTreeMap::new();
        for name in columns {
            let encoder = LabelEncoder::fit(&table.column(name)?);
            log::debug!("列 {} 的类别: {:?}", name, encoder.classes());
            encoders.insert(name.clone(), encoder);
        }
        Ok(Self { encoders })
    }

    pub fn get(&self, column: &str) -> Option<&LabelEncoder> {
        self.encoders.get(column)
    }

    pub fn contains(&self, column: &str) -> bool {
        self.encoders.contains_key(column)
    }

    pub fn len(&self) -> usize {
        self.encoders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.encoders.is_empty()
    }
}
