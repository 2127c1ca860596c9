//! 反序列化辅助模块
//!
//! 原型期后端对坐标字段不做规范化：同一个字段在历史数据里
//! 可能是数字、字符串或 null。统一容忍地收成字符串。

use serde::{Deserialize, Deserializer};

/// 字符串、数字或 null 都接受，统一成字符串（null 变空串）
pub fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Text(String),
        Number(f64),
        Null,
    }

    Ok(match Raw::deserialize(deserializer)? {
        Raw::Text(s) => s,
        Raw::Number(v) => v.to_string(),
        Raw::Null => String::new(),
    })
}

#[cfg(test)]
mod tests {
    use serde::Deserialize;

    #[derive(Deserialize)]
    struct Probe {
        #[serde(default, deserialize_with = "super::string_or_number")]
        lat: String,
    }

    #[test]
    fn test_accepts_string_number_null_and_missing() {
        let cases = [
            (r#"{"lat": "16.8"}"#, "16.8"),
            (r#"{"lat": 16.8}"#, "16.8"),
            (r#"{"lat": null}"#, ""),
            (r#"{}"#, ""),
        ];
        for (json, expected) in cases {
            let probe: Probe = serde_json::from_str(json).unwrap();
            assert_eq!(probe.lat, expected, "input: {json}");
        }
    }
}
