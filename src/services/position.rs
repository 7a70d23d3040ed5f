//! 随机删除位置 - 业务能力层
//!
//! 优先调用外部随机数服务，任何失败都回退到本地伪随机数，错误不向上传播

use crate::clients::RandomOrgClient;
use crate::config::Config;
use crate::error::{AppResult, RandomSourceError};
use async_trait::async_trait;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::sync::{Arc, Mutex};
use tracing::{debug, warn};

/// 可失败的随机整数来源
#[async_trait]
pub trait RandomSource: Send + Sync {
    /// 返回 `[0, max_inclusive]` 内的整数
    async fn next_index(&self, max_inclusive: usize) -> Result<usize, RandomSourceError>;

    fn name(&self) -> &'static str;
}

/// 基于外部 HTTP 服务的来源
pub struct HttpRandomSource {
    client: RandomOrgClient,
}

impl HttpRandomSource {
    pub fn new(client: RandomOrgClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl RandomSource for HttpRandomSource {
    async fn next_index(&self, max_inclusive: usize) -> Result<usize, RandomSourceError> {
        self.client.fetch_integer(max_inclusive).await
    }

    fn name(&self) -> &'static str {
        "random.org"
    }
}

/// 本地伪随机数（兜底），不会失败
pub struct LocalRandomSource {
    rng: Mutex<StdRng>,
}

impl LocalRandomSource {
    /// 固定种子时结果可复现
    pub fn new(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self {
            rng: Mutex::new(rng),
        }
    }

    /// 均匀生成 `[0, max_inclusive]` 内的整数
    pub fn generate(&self, max_inclusive: usize) -> usize {
        let mut rng = self.rng.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        rng.gen_range(0..=max_inclusive)
    }
}

#[async_trait]
impl RandomSource for LocalRandomSource {
    async fn next_index(&self, max_inclusive: usize) -> Result<usize, RandomSourceError> {
        Ok(self.generate(max_inclusive))
    }

    fn name(&self) -> &'static str {
        "local"
    }
}

/// 删除位置服务
///
/// 职责：
/// - 计算合法范围 `[0, len - 2]`
/// - 调用外部来源，失败时使用本地兜底
pub struct PositionService {
    primary: Arc<dyn RandomSource>,
    fallback: LocalRandomSource,
}

impl PositionService {
    /// 从配置创建（外部来源为随机数服务）
    pub fn new(config: &Config) -> AppResult<Self> {
        let client = RandomOrgClient::new(config)?;
        Ok(Self::with_source(
            Arc::new(HttpRandomSource::new(client)),
            config.fallback_seed,
        ))
    }

    /// 注入自定义外部来源
    pub fn with_source(primary: Arc<dyn RandomSource>, fallback_seed: Option<u64>) -> Self {
        Self {
            primary,
            fallback: LocalRandomSource::new(fallback_seed),
        }
    }

    /// 为长度为 `length` 的字符串选择删除位置
    ///
    /// # 返回
    /// `length < 2` 时没有合法位置，返回 None
    pub async fn next_removal_index(&self, length: usize) -> Option<usize> {
        let max_inclusive = length.checked_sub(2)?;

        match self.primary.next_index(max_inclusive).await {
            Ok(index) if index <= max_inclusive => {
                debug!("使用 {} 的随机位置: {}", self.primary.name(), index);
                Some(index)
            }
            Ok(index) => {
                warn!(
                    "{} 返回的位置 {} 超出范围 [0, {}]，使用本地随机数",
                    self.primary.name(),
                    index,
                    max_inclusive
                );
                Some(self.fallback.generate(max_inclusive))
            }
            Err(e) => {
                warn!("调用 {} 失败: {}，使用本地随机数", self.primary.name(), e);
                Some(self.fallback.generate(max_inclusive))
            }
        }
    }
}
