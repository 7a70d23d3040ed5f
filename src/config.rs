//! 程序配置
//!
//! 加载顺序：默认值 → TOML 文件（`STRING_SERVICE_CONFIG`，可选）→ 环境变量

use crate::error::{AppError, AppResult, ConfigError};
use serde::Deserialize;
use std::net::SocketAddr;
use std::path::Path;

/// 指向 TOML 配置文件的环境变量
pub const CONFIG_FILE_ENV: &str = "STRING_SERVICE_CONFIG";

/// 默认的输入长度上限（字符数）
pub const DEFAULT_MAX_INPUT_LENGTH: usize = 10_000;

/// 程序配置
#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct Config {
    /// 同时处理的请求数量（许可池容量）
    pub max_concurrent_requests: usize,
    /// 禁止输入的单词列表（大小写不敏感，完全匹配）
    pub blacklist: Vec<String>,
    /// 输入长度上限（字符数），超出直接拒绝
    pub max_input_length: usize,
    // --- 随机数服务配置 ---
    /// URL 前缀（上界之前的部分）
    pub random_api_url_prefix: String,
    /// URL 后缀（上界之后的部分）
    pub random_api_url_suffix: String,
    /// 外部调用超时（毫秒）
    pub random_api_timeout_ms: u64,
    /// 本地兜底随机数种子，None 时使用系统熵
    pub fallback_seed: Option<u64>,
    // --- HTTP 服务配置 ---
    /// 监听地址
    pub bind_address: String,
    /// 是否显示详细日志
    pub verbose_logging: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_concurrent_requests: 16,
            blacklist: Vec::new(),
            max_input_length: DEFAULT_MAX_INPUT_LENGTH,
            random_api_url_prefix: "https://www.random.org/integers/?num=1&min=0&max=".to_string(),
            random_api_url_suffix: "&col=1&base=10&format=plain&rnd=new".to_string(),
            random_api_timeout_ms: 3000,
            fallback_seed: None,
            bind_address: "127.0.0.1:8080".to_string(),
            verbose_logging: false,
        }
    }
}

impl Config {
    /// 只读环境变量，缺失的项使用默认值
    pub fn from_env() -> Self {
        Self::default().with_env_overrides()
    }

    /// 先读取可选的 TOML 文件，再用环境变量覆盖
    pub fn load() -> AppResult<Self> {
        let config = match std::env::var(CONFIG_FILE_ENV) {
            Ok(path) => Self::from_toml_file(Path::new(&path))?.with_env_overrides(),
            Err(_) => Self::from_env(),
        };
        config.validate()?;
        Ok(config)
    }

    /// 从 TOML 文件加载配置
    pub fn from_toml_file(path: &Path) -> AppResult<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| AppError::config_file_failed(path.display().to_string(), e))?;
        Self::from_toml_str(&content)
            .map_err(|e| AppError::config_file_failed(path.display().to_string(), e))
    }

    /// 从 TOML 文本解析配置
    pub fn from_toml_str(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    fn with_env_overrides(self) -> Self {
        Self {
            max_concurrent_requests: std::env::var("MAX_CONCURRENT_REQUESTS").ok().and_then(|v| v.parse().ok()).unwrap_or(self.max_concurrent_requests),
            blacklist: std::env::var("BLACKLIST_WORDS").ok().map(|v| parse_word_list(&v)).unwrap_or(self.blacklist),
            max_input_length: std::env::var("MAX_INPUT_LENGTH").ok().and_then(|v| v.parse().ok()).unwrap_or(self.max_input_length),
            random_api_url_prefix: std::env::var("RANDOM_API_URL_PREFIX").unwrap_or(self.random_api_url_prefix),
            random_api_url_suffix: std::env::var("RANDOM_API_URL_SUFFIX").unwrap_or(self.random_api_url_suffix),
            random_api_timeout_ms: std::env::var("RANDOM_API_TIMEOUT_MS").ok().and_then(|v| v.parse().ok()).unwrap_or(self.random_api_timeout_ms),
            fallback_seed: std::env::var("FALLBACK_SEED").ok().and_then(|v| v.parse().ok()).or(self.fallback_seed),
            bind_address: std::env::var("BIND_ADDRESS").unwrap_or(self.bind_address),
            verbose_logging: std::env::var("VERBOSE_LOGGING").ok().and_then(|v| v.parse().ok()).unwrap_or(self.verbose_logging),
        }
    }

    /// 校验配置，启动前调用
    pub fn validate(&self) -> AppResult<()> {
        if self.max_concurrent_requests == 0 {
            return Err(AppError::Config(ConfigError::InvalidValue {
                field: "max_concurrent_requests".to_string(),
                reason: "必须为正整数".to_string(),
            }));
        }
        if self.max_input_length == 0 {
            return Err(AppError::Config(ConfigError::InvalidValue {
                field: "max_input_length".to_string(),
                reason: "必须为正整数".to_string(),
            }));
        }
        if self.random_api_timeout_ms == 0 {
            return Err(AppError::Config(ConfigError::InvalidValue {
                field: "random_api_timeout_ms".to_string(),
                reason: "必须为正整数".to_string(),
            }));
        }
        self.socket_addr()?;
        Ok(())
    }

    /// 解析监听地址
    pub fn socket_addr(&self) -> AppResult<SocketAddr> {
        self.bind_address.parse().map_err(|_| {
            AppError::Config(ConfigError::InvalidValue {
                field: "bind_address".to_string(),
                reason: format!("无法解析地址 '{}'", self.bind_address),
            })
        })
    }
}

/// 逗号分隔的单词列表，忽略空项
fn parse_word_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|w| !w.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(Config::default().validate().is_ok());
    }

    #[test]
    fn test_zero_capacity_rejected() {
        let config = Config {
            max_concurrent_requests: 0,
            ..Config::default()
        };
        assert!(matches!(config.validate(), Err(AppError::Config(_))));
    }

    #[test]
    fn test_bad_bind_address_rejected() {
        let config = Config {
            bind_address: "not-an-address".to_string(),
            ..Config::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_toml_partial_uses_defaults() {
        let config = Config::from_toml_str(
            r#"
            max_concurrent_requests = 4
            blacklist = ["forbidden", "Secret"]
            "#,
        )
        .unwrap();

        assert_eq!(config.max_concurrent_requests, 4);
        assert_eq!(config.blacklist, vec!["forbidden", "Secret"]);
        assert_eq!(config.random_api_timeout_ms, 3000);
        assert_eq!(config.max_input_length, DEFAULT_MAX_INPUT_LENGTH);
        assert!(config.random_api_url_prefix.starts_with("https://www.random.org"));
    }

    #[test]
    fn test_zero_max_input_length_rejected() {
        let config = Config {
            max_input_length: 0,
            ..Config::default()
        };
        assert!(matches!(config.validate(), Err(AppError::Config(_))));
    }

    #[test]
    fn test_from_env_overrides_defaults() {
        // 本模块中只有这个测试读写该变量
        std::env::set_var("MAX_INPUT_LENGTH", "123");
        let config = Config::from_env();
        std::env::remove_var("MAX_INPUT_LENGTH");

        assert_eq!(config.max_input_length, 123);
        assert_eq!(config.random_api_timeout_ms, Config::default().random_api_timeout_ms);
    }

    #[test]
    fn test_parse_word_list() {
        assert_eq!(parse_word_list(" foo, bar ,,baz"), vec!["foo", "bar", "baz"]);
        assert!(parse_word_list("").is_empty());
    }
}
