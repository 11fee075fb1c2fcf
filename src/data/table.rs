/*
 * @Author       : 老董
 * @Date         : 2026-10-14
 * @Description  : 极简 CSV 表格读取
 *
 * 只处理本项目需要的子集：
 * - 首行为表头
 * - 逗号分隔；双引号包裹的单元格内可以含逗号，`""` 表示一个双引号
 * - 单元格两端的空白会被去掉
 * - 空行跳过
 * - 列数与表头不一致的行视为格式错误
 */

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use super::error::DataError;

/// 按行存储的字符串表格
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Table {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
    /// 每个数据行在文件中的行号（从 1 开始）
    lines: Vec<usize>,
}

impl Table {
    /// 从 CSV 文件读取
    pub fn read_csv(path: impl AsRef<Path>) -> Result<Self, DataError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|_| DataError::FileNotFound(path.to_path_buf()))?;
        let table = Self::parse(BufReader::new(file))?;
        log::debug!(
            "读取 {:?}: {} 行 × {} 列",
            path,
            table.len(),
            table.headers.len()
        );
        Ok(table)
    }

    /// 从任意按行读取的来源解析
    pub fn parse(reader: impl BufRead) -> Result<Self, DataError> {
        let mut headers: Option<Vec<String>> = None;
        let mut rows = Vec::new();
        let mut lines = Vec::new();

        for (idx, line) in reader.lines().enumerate() {
            let line_no = idx + 1;
            let line = line?;
            let line = line.trim();

            // 跳过空行
            if line.is_empty() {
                continue;
            }

            let cells = split_line(line).ok_or_else(|| DataError::FormatError {
                line: line_no,
                message: "双引号未闭合".to_string(),
            })?;
            match &headers {
                None => headers = Some(cells),
                Some(h) if cells.len() != h.len() => {
                    return Err(DataError::FormatError {
                        line: line_no,
                        message: format!("应有 {} 列，实际 {} 列", h.len(), cells.len()),
                    });
                }
                Some(_) => {
                    rows.push(cells);
                    lines.push(line_no);
                }
            }
        }

        let headers = headers.ok_or_else(|| DataError::FormatError {
            line: 0,
            message: "缺少表头".to_string(),
        })?;
        if rows.is_empty() {
            return Err(DataError::EmptyTable);
        }
        Ok(Self {
            headers,
            rows,
            lines,
        })
    }

    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    /// 数据行数（不含表头）
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// 列名对应的下标
    pub fn column_index(&self, name: &str) -> Result<usize, DataError> {
        self.headers
            .iter()
            .position(|h| h == name)
            .ok_or_else(|| DataError::MissingColumn(name.to_string()))
    }

    /// 按列名取出整列
    pub fn column(&self, name: &str) -> Result<Vec<&str>, DataError> {
        let idx = self.column_index(name)?;
        Ok(self.rows.iter().map(|row| row[idx].as_str()).collect())
    }

    /// 第 `row` 个数据行在文件中的行号
    pub fn line_of(&self, row: usize) -> Option<usize> {
        self.lines.get(row).copied()
    }

    /// 按列名取出整列并解析为数值（NaN、inf 视为非数值）
    pub fn numeric_column(&self, name: &str) -> Result<Vec<f32>, DataError> {
        self.column(name)?
            .into_iter()
            .zip(&self.lines)
            .map(|(value, &line)| match value.parse::<f32>() {
                Ok(v) if v.is_finite() => Ok(v),
                _ => Err(DataError::NotNumeric {
                    column: name.to_string(),
                    line,
                    value: value.to_string(),
                }),
            })
            .collect()
    }
}

/// 按逗号切分一行；引号未闭合时返回 None
fn split_line(line: &str) -> Option<Vec<String>> {
    let mut cells = Vec::new();
    let mut cell = String::new();
    let mut quoted = false;
    let mut chars = line.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '"' if quoted && chars.peek() == Some(&'"') => {
                cell.push('"');
                chars.next();
            }
            '"' => quoted = !quoted,
            ',' if !quoted => cells.push(std::mem::take(&mut cell).trim().to_string()),
            _ => cell.push(c),
        }
    }
    if quoted {
        return None;
    }
    cells.push(cell.trim().to_string());
    Some(cells)
}
