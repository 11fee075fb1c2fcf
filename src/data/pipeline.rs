/*
 * @Author       : 老董
 * @Date         : 2026-10-14
 * @Description  : 从表格到回归数据的预处理流水线
 *
 * 步骤：
 * 1. 除目标列外的所有列按文件中的顺序作为特征
 * 2. 类别列做标签编码，其余列按数值解析
 * 3. 特征逐列标准化
 * 4. 最左侧补截距列
 * 5. （可选）目标列标准化
 */

use ndarray::Array2;

use super::encoding::EncoderSet;
use super::error::DataError;
use super::scaler::StandardScaler;
use super::table::Table;
use crate::optim::RegressionData;

/// 预处理配置（尚未拟合）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Preprocessor {
    target_column: String,
    categorical_columns: Vec<String>,
    standardize_target: bool,
}

impl Preprocessor {
    pub fn new(target_column: impl Into<String>) -> Self {
        Self {
            target_column: target_column.into(),
            categorical_columns: Vec::new(),
            standardize_target: false,
        }
    }

    /// 指定需要标签编码的类别列
    pub fn categorical<S: AsRef<str>>(mut self, columns: &[S]) -> Self {
        self.categorical_columns = columns.iter().map(|c| c.as_ref().to_string()).collect();
        self
    }

    /// 是否对目标列做标准化（默认否）
    pub fn standardize_target(mut self, standardize: bool) -> Self {
        self.standardize_target = standardize;
        self
    }

    pub fn target_column(&self) -> &str {
        &self.target_column
    }

    pub fn categorical_columns(&self) -> &[String] {
        &self.categorical_columns
    }

    /// 在表上拟合编码器与标准化器
    pub fn fit(&self, table: &Table) -> Result<FittedPreprocessor, DataError> {
        table.column_index(&self.target_column)?;
        for name in &self.categorical_columns {
            table.column_index(name)?;
        }

        let feature_names: Vec<String> = table
            .headers()
            .iter()
            .filter(|h| **h != self.target_column)
            .cloned()
            .collect();
        let encoders = EncoderSet::fit(table, &self.categorical_columns)?;
        let raw = raw_features(table, &feature_names, &encoders)?;
        let scaler = StandardScaler::fit(&raw)?;

        let target_stats = if self.standardize_target {
            let y = StandardScaler::fit(&raw_target(table, &self.target_column)?)?;
            Some((y.means()[0], y.stds()[0]))
        } else {
            None
        };

        log::debug!(
            "预处理拟合完成: {} 个特征（其中 {} 个类别列），目标列 {}",
            feature_names.len(),
            encoders.len(),
            self.target_column
        );

        Ok(FittedPreprocessor {
            feature_names,
            target_column: self.target_column.clone(),
            encoders,
            scaler,
            target_stats,
        })
    }

    /// 拟合并立即转换同一张表
    pub fn fit_transform(
        &self,
        table: &Table,
    ) -> Result<(FittedPreprocessor, RegressionData), DataError> {
        let fitted = self.fit(table)?;
        let data = fitted.transform(table)?;
        Ok((fitted, data))
    }
}

/// 已拟合的预处理状态
#[derive(Debug, Clone, PartialEq)]
pub struct FittedPreprocessor {
    feature_names: Vec<String>,
    target_column: String,
    encoders: EncoderSet,
    scaler: StandardScaler,
    /// 目标列的（均值, 标准差），未标准化目标时为 None
    target_stats: Option<(f32, f32)>,
}

impl FittedPreprocessor {
    /// 特征列名，顺序与设计矩阵第1列起一致
    pub fn feature_names(&self) -> &[String] {
        &self.feature_names
    }

    pub fn target_column(&self) -> &str {
        &self.target_column
    }

    pub fn encoders(&self) -> &EncoderSet {
        &self.encoders
    }

    pub fn scaler(&self) -> &StandardScaler {
        &self.scaler
    }

    pub fn target_stats(&self) -> Option<(f32, f32)> {
        self.target_stats
    }

    /// 用已拟合的状态把表格转换为回归数据
    pub fn transform(&self, table: &Table) -> Result<RegressionData, DataError> {
        let raw = raw_features(table, &self.feature_names, &self.encoders)?;
        let features = self.scaler.transform(&raw)?;

        let mut target = raw_target(table, &self.target_column)?;
        if let Some((mean, std)) = self.target_stats {
            target.mapv_inplace(|v| (v - mean) / std);
        }

        Ok(RegressionData::with_intercept(&features, target)?)
    }

    /// 把（可能已标准化的）预测值还原到目标列的原始尺度
    pub fn restore_target(&self, predictions: &Array2<f32>) -> Array2<f32> {
        match self.target_stats {
            Some((mean, std)) => predictions.mapv(|v| v * std + mean),
            None => predictions.clone(),
        }
    }
}

fn raw_features(
    table: &Table,
    names: &[String],
    encoders: &EncoderSet,
) -> Result<Array2<f32>, DataError> {
    let columns = names
        .iter()
        .map(|name| match encoders.get(name) {
            Some(encoder) => encoder.transform(name, &table.column(name)?),
            None => table.numeric_column(name),
        })
        .collect::<Result<Vec<_>, _>>()?;
    Ok(Array2::from_shape_fn((table.len(), names.len()), |(i, j)| {
        columns[j][i]
    }))
}

fn raw_target(table: &Table, name: &str) -> Result<Array2<f32>, DataError> {
    let values = table.numeric_column(name)?;
    let rows = values.len();
    Array2::from_shape_vec((rows, 1), values).map_err(|_| DataError::ShapeMismatch {
        expected: vec![rows, 1],
        got: vec![rows],
    })
}
