//! f32 的无损 JSON 表示
//!
//! JSON 没有 NaN/∞，serde_json 会把它们写成 `null` 且无法读回。
//! 这里有限值照常写为数字，非有限值写为字符串 `"NaN"`、`"inf"`、`"-inf"`；
//! 读取时同时接受数字、这三个字符串以及 `null`（视为 NaN）。

use serde::{Deserialize, Deserializer, Serialize, Serializer};

#[derive(Serialize, Deserialize)]
#[serde(untagged)]
enum JsonFloat {
    Number(f32),
    Text(String),
}

impl From<f32> for JsonFloat {
    fn from(value: f32) -> Self {
        if value.is_finite() {
            JsonFloat::Number(value)
        } else if value.is_nan() {
            JsonFloat::Text("NaN".to_string())
        } else if value > 0.0 {
            JsonFloat::Text("inf".to_string())
        } else {
            JsonFloat::Text("-inf".to_string())
        }
    }
}

fn decode<E: serde::de::Error>(value: Option<JsonFloat>) -> Result<f32, E> {
    match value {
        None => Ok(f32::NAN),
        Some(JsonFloat::Number(v)) => Ok(v),
        Some(JsonFloat::Text(text)) => match text.as_str() {
            "NaN" | "nan" => Ok(f32::NAN),
            "inf" | "+inf" | "Infinity" => Ok(f32::INFINITY),
            "-inf" | "-Infinity" => Ok(f32::NEG_INFINITY),
            other => Err(E::custom(format!("无法识别的浮点数 {:?}", other))),
        },
    }
}

/// `Vec<f32>` 字段
pub(crate) mod values {
    use super::*;

    pub(crate) fn serialize<S: Serializer>(values: &[f32], serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(values.iter().map(|&v| JsonFloat::from(v)))
    }

    pub(crate) fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<f32>, D::Error> {
        Vec::<Option<JsonFloat>>::deserialize(deserializer)?
            .into_iter()
            .map(decode)
            .collect()
    }
}

/// `Array2<f32>` 字段，写为 `{ "dim": [行, 列], "data": [...] }`（行优先）
pub(crate) mod matrix {
    use ndarray::Array2;

    use super::*;

    #[derive(Serialize, Deserialize)]
    struct Matrix {
        dim: [usize; 2],
        #[serde(with = "super::values")]
        data: Vec<f32>,
    }

    pub(crate) fn serialize<S: Serializer>(
        matrix: &Array2<f32>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        let (rows, cols) = matrix.dim();
        Matrix {
            dim: [rows, cols],
            data: matrix.iter().copied().collect(),
        }
        .serialize(serializer)
    }

    pub(crate) fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Array2<f32>, D::Error> {
        let Matrix { dim, data } = Matrix::deserialize(deserializer)?;
        Array2::from_shape_vec((dim[0], dim[1]), data).map_err(serde::de::Error::custom)
    }
}
