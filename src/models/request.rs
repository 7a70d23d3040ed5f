//! 请求模型

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// 排序算法选择
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum SortAlgorithm {
    /// 快速排序（Lomuto 分区）
    QuickSort = 1,
    /// 二叉搜索树排序
    #[default]
    TreeSort = 2,
}

impl SortAlgorithm {
    /// 获取算法代码
    pub fn code(self) -> u8 {
        self as u8
    }

    /// 获取标准名称
    pub fn name(self) -> &'static str {
        match self {
            SortAlgorithm::QuickSort => "QuickSort",
            SortAlgorithm::TreeSort => "TreeSort",
        }
    }

    /// 从代码解析算法
    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            1 => Some(SortAlgorithm::QuickSort),
            2 => Some(SortAlgorithm::TreeSort),
            _ => None,
        }
    }
}

impl fmt::Display for SortAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for SortAlgorithm {
    type Err = String;

    /// 支持 `QuickSort` / `Option1` / `1` 与 `TreeSort` / `Option2` / `2`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if let Ok(code) = s.parse::<u8>() {
            return Self::from_code(code).ok_or_else(|| format!("未知的排序算法代码: {}", code));
        }
        match s.to_ascii_lowercase().as_str() {
            "quicksort" | "option1" => Ok(SortAlgorithm::QuickSort),
            "treesort" | "option2" => Ok(SortAlgorithm::TreeSort),
            _ => Err(format!("未知的排序算法: {}", s)),
        }
    }
}

impl TryFrom<String> for SortAlgorithm {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<SortAlgorithm> for String {
    fn from(value: SortAlgorithm) -> Self {
        value.name().to_string()
    }
}

/// 处理请求
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProcessRequest {
    /// 原始输入（未校验）
    #[serde(default)]
    pub input_string: String,
    /// 排序算法
    #[serde(default, alias = "choiceAlgorithm")]
    pub algorithm_choice: SortAlgorithm,
}

impl ProcessRequest {
    pub fn new(input_string: impl Into<String>, algorithm_choice: SortAlgorithm) -> Self {
        Self {
            input_string: input_string.into(),
            algorithm_choice,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_algorithm_spellings() {
        assert_eq!("QuickSort".parse::<SortAlgorithm>(), Ok(SortAlgorithm::QuickSort));
        assert_eq!("option1".parse::<SortAlgorithm>(), Ok(SortAlgorithm::QuickSort));
        assert_eq!("1".parse::<SortAlgorithm>(), Ok(SortAlgorithm::QuickSort));
        assert_eq!("treesort".parse::<SortAlgorithm>(), Ok(SortAlgorithm::TreeSort));
        assert_eq!("Option2".parse::<SortAlgorithm>(), Ok(SortAlgorithm::TreeSort));
        assert_eq!("2".parse::<SortAlgorithm>(), Ok(SortAlgorithm::TreeSort));
        assert!("3".parse::<SortAlgorithm>().is_err());
        assert!("bubble".parse::<SortAlgorithm>().is_err());
    }

    #[test]
    fn test_request_deserialize_with_alias() {
        let request: ProcessRequest =
            serde_json::from_str(r#"{"inputString":"abc","choiceAlgorithm":"Option1"}"#).unwrap();
        assert_eq!(request, ProcessRequest::new("abc", SortAlgorithm::QuickSort));

        let request: ProcessRequest = serde_json::from_str(r#"{"inputString":"abc"}"#).unwrap();
        assert_eq!(request.algorithm_choice, SortAlgorithm::TreeSort);
    }
}
