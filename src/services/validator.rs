//! 输入校验 - 业务能力层
//!
//! 在任何变换之前对原始输入做检查：长度上限、字符集、黑名单

use crate::config::{Config, DEFAULT_MAX_INPUT_LENGTH};
use crate::error::ValidationError;
use regex::Regex;
use std::collections::HashSet;
use std::sync::OnceLock;
use tracing::debug;

fn invalid_char_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"[^a-z]").expect("静态正则必须合法"))
}

/// 输入校验器
///
/// 黑名单在构造时统一转为小写，之后只读
#[derive(Debug, Clone)]
pub struct Validator {
    blacklist: HashSet<String>,
    max_input_length: usize,
}

impl Default for Validator {
    fn default() -> Self {
        Self {
            blacklist: HashSet::new(),
            max_input_length: DEFAULT_MAX_INPUT_LENGTH,
        }
    }
}

impl Validator {
    /// 从配置创建
    pub fn new(config: &Config) -> Self {
        Self::with_blacklist(config.blacklist.iter()).with_max_length(config.max_input_length)
    }

    /// 使用自定义黑名单创建
    pub fn with_blacklist<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            blacklist: words
                .into_iter()
                .map(|w| w.as_ref().to_lowercase())
                .collect(),
            max_input_length: DEFAULT_MAX_INPUT_LENGTH,
        }
    }

    /// 设置长度上限（字符数）
    pub fn with_max_length(mut self, max_input_length: usize) -> Self {
        self.max_input_length = max_input_length;
        self
    }

    /// 先查长度，再查字符集，最后查黑名单
    pub fn validate(&self, input: &str) -> Result<(), ValidationError> {
        self.check_length(input)?;
        self.check_charset(input)?;
        self.check_blacklist(input)
    }

    /// 超长输入会让排序退化，必须在变换前拒绝
    pub fn check_length(&self, input: &str) -> Result<(), ValidationError> {
        let length = input.chars().count();
        if length > self.max_input_length {
            debug!("输入超出长度上限: {} > {}", length, self.max_input_length);
            Err(ValidationError::TooLong {
                length,
                max: self.max_input_length,
            })
        } else {
            Ok(())
        }
    }

    /// 只允许 a-z，空串合法
    pub fn check_charset(&self, input: &str) -> Result<(), ValidationError> {
        let invalid = invalid_characters(input);
        if invalid.is_empty() {
            Ok(())
        } else {
            debug!("输入包含非法字符: {:?}", invalid);
            Err(ValidationError::InvalidCharacters {
                characters: invalid,
            })
        }
    }

    /// 大小写不敏感的完全匹配
    pub fn check_blacklist(&self, input: &str) -> Result<(), ValidationError> {
        if self.blacklist.contains(&input.to_lowercase()) {
            debug!("输入命中黑名单: {}", input);
            Err(ValidationError::Blacklisted {
                input: input.to_string(),
            })
        } else {
            Ok(())
        }
    }
}

/// 收集非法字符，去重并保持首次出现顺序
pub fn invalid_characters(input: &str) -> String {
    let mut seen = String::new();
    for m in invalid_char_pattern().find_iter(input) {
        for c in m.as_str().chars() {
            if !seen.contains(c) {
                seen.push(c);
            }
        }
    }
    seen
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lowercase_and_empty_accepted() {
        let validator = Validator::default();
        assert!(validator.validate("hello").is_ok());
        assert!(validator.validate("").is_ok());
    }

    #[test]
    fn test_uppercase_rejected() {
        let validator = Validator::default();
        assert_eq!(
            validator.validate("Hello"),
            Err(ValidationError::InvalidCharacters {
                characters: "H".to_string()
            })
        );
    }

    #[test]
    fn test_invalid_characters_distinct_in_order() {
        assert_eq!(invalid_characters("a1b2 1Z!z"), "12 Z!");
        assert_eq!(invalid_characters("привет"), "привет");
        assert_eq!(invalid_characters("abc"), "");
    }

    #[test]
    fn test_blacklist_case_insensitive_exact() {
        let validator = Validator::with_blacklist(["Forbidden", "secret"]);

        assert_eq!(
            validator.validate("forbidden"),
            Err(ValidationError::Blacklisted {
                input: "forbidden".to_string()
            })
        );
        assert!(validator.validate("secret").is_err());
        // 子串不算命中
        assert!(validator.validate("secrets").is_ok());
        assert!(validator.validate("forbid").is_ok());
    }

    #[test]
    fn test_length_limit_inclusive() {
        let validator = Validator::default().with_max_length(5);

        assert!(validator.validate("abcde").is_ok());
        assert_eq!(
            validator.validate("abcdef"),
            Err(ValidationError::TooLong { length: 6, max: 5 })
        );
    }

    #[test]
    fn test_length_counts_chars_and_runs_first() {
        let validator = Validator::with_blacklist(["abcdef"]).with_max_length(3);

        // 按字符而不是字节计数
        assert!(validator.check_length("жжж").is_ok());
        assert!(matches!(
            validator.validate("ABCDEF"),
            Err(ValidationError::TooLong { length: 6, max: 3 })
        ));
        assert!(matches!(
            validator.validate("abcdef"),
            Err(ValidationError::TooLong { .. })
        ));
    }

    #[test]
    fn test_config_limit_applied() {
        let config = Config {
            max_input_length: 2,
            ..Config::default()
        };
        assert!(Validator::new(&config).validate("abc").is_err());
        assert!(Validator::new(&Config::default()).validate(&"a".repeat(DEFAULT_MAX_INPUT_LENGTH)).is_ok());
    }

    #[test]
    fn test_charset_checked_before_blacklist() {
        let validator = Validator::with_blacklist(["secret"]);
        assert!(matches!(
            validator.validate("SECRET"),
            Err(ValidationError::InvalidCharacters { .. })
        ));
        assert!(matches!(
            validator.check_blacklist("SECRET"),
            Err(ValidationError::Blacklisted { .. })
        ));
    }
}
