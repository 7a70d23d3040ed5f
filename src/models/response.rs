//! 响应模型

use serde::Serialize;

/// 处理成功的响应体，字段名与对外接口保持一致
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProcessResponse {
    #[serde(rename = "ProcessedString")]
    pub processed_string: String,
    #[serde(rename = "CharacterCount")]
    pub character_count: Vec<String>,
    #[serde(rename = "LongestSubstring")]
    pub longest_substring: String,
    #[serde(rename = "SortString")]
    pub sort_string: String,
    #[serde(rename = "RemoveString")]
    pub remove_string: String,
}

/// 服务端错误响应体
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorBody {
    #[serde(rename = "ErrorMessage")]
    pub error_message: String,
}

/// 返回给调用方的通用服务端错误文本
pub const INTERNAL_ERROR_MESSAGE: &str = "Внутренняя ошибка сервера";

impl ErrorBody {
    pub fn internal() -> Self {
        Self {
            error_message: INTERNAL_ERROR_MESSAGE.to_string(),
        }
    }
}
