use serde::{Deserialize, Deserializer};
use serde_json::Value;

use crate::types::{Flag, SuffixDescription};

/// 将松散的 JSON / JS 值转换为后缀描述
///
/// 不支持的类型（`null`、布尔、数字）一律视为空描述，不报错。
impl From<&Value> for SuffixDescription {
    fn from(value: &Value) -> Self {
        match value {
            Value::Null | Value::Bool(_) | Value::Number(_) => SuffixDescription::Empty,
            Value::String(classes) => SuffixDescription::Classes(classes.clone()),
            Value::Array(items) => {
                SuffixDescription::List(items.iter().map(SuffixDescription::from).collect())
            }
            Value::Object(map) => SuffixDescription::Map(
                map.iter()
                    .map(|(key, flag)| (key.clone(), Flag::from(flag)))
                    .collect(),
            ),
        }
    }
}

impl From<Value> for SuffixDescription {
    fn from(value: Value) -> Self {
        SuffixDescription::from(&value)
    }
}

impl From<&Value> for Flag {
    fn from(value: &Value) -> Self {
        match value {
            Value::Null => Flag::Null,
            Value::Bool(b) => Flag::Bool(*b),
            // serde_json 无法表示 NaN，as_f64 对合法数字总是成功
            Value::Number(n) => Flag::Number(n.as_f64().unwrap_or(0.0)),
            Value::String(s) => Flag::Text(s.clone()),
            Value::Array(_) | Value::Object(_) => Flag::Object,
        }
    }
}

impl<'de> Deserialize<'de> for SuffixDescription {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Value::deserialize(deserializer).map(SuffixDescription::from)
    }
}
