//! 随机数服务 API 客户端
//!
//! 封装对外部随机数服务的 HTTP 调用，URL 由 前缀 + 上界 + 后缀 组成

use crate::config::Config;
use crate::error::{AppError, AppResult, RandomSourceError};
use std::time::Duration;
use tracing::debug;

/// 随机数服务客户端
#[derive(Debug, Clone)]
pub struct RandomOrgClient {
    http: reqwest::Client,
    url_prefix: String,
    url_suffix: String,
}

impl RandomOrgClient {
    /// 创建新的客户端，超时取自配置
    pub fn new(config: &Config) -> AppResult<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_millis(config.random_api_timeout_ms))
            .build()
            .map_err(|e| AppError::internal(format!("无法创建 HTTP 客户端: {}", e)))?;

        Ok(Self {
            http,
            url_prefix: config.random_api_url_prefix.clone(),
            url_suffix: config.random_api_url_suffix.clone(),
        })
    }

    /// 构建请求 URL
    pub fn build_url(&self, max_inclusive: usize) -> String {
        format!("{}{}{}", self.url_prefix, max_inclusive, self.url_suffix)
    }

    /// 请求一个 `[0, max_inclusive]` 内的整数
    ///
    /// # 返回
    /// 成功时返回服务给出的整数；超出范围也视为失败
    pub async fn fetch_integer(&self, max_inclusive: usize) -> Result<usize, RandomSourceError> {
        let url = self.build_url(max_inclusive);
        debug!("正在请求随机数服务: {}", url);

        let response = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(|source| RandomSourceError::RequestFailed {
                url: url.clone(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(RandomSourceError::BadStatus {
                url,
                status: status.as_u16(),
            });
        }

        let body = response
            .text()
            .await
            .map_err(|source| RandomSourceError::RequestFailed {
                url: url.clone(),
                source,
            })?;

        debug!("随机数服务返回: {:?}", body);

        parse_body(&body, max_inclusive)
    }
}

/// 解析纯文本整数响应并检查范围
pub fn parse_body(body: &str, max_inclusive: usize) -> Result<usize, RandomSourceError> {
    let value: i64 = body
        .trim()
        .parse()
        .map_err(|_| RandomSourceError::InvalidBody {
            body: body.to_string(),
        })?;

    match usize::try_from(value) {
        Ok(index) if index <= max_inclusive => Ok(index),
        _ => Err(RandomSourceError::OutOfRange {
            value,
            max: max_inclusive,
        }),
    }
}
