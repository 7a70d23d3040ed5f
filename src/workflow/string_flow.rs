//! 字符串处理流程 - 流程层
//!
//! 核心职责：定义"一个请求"的完整处理流程
//!
//! 流程顺序：
//! 校验 → 变换 → 分析 → 排序 → 选择删除位置 → 组装响应

use std::fmt;
use std::sync::Arc;
use tracing::{debug, info};

use crate::config::Config;
use crate::error::AppResult;
use crate::models::{ProcessRequest, ProcessResponse};
use crate::services::{analyzer, transform, PositionService, RandomSource, Validator};
use crate::utils::logging::truncate_text;
use crate::workflow::request_ctx::RequestCtx;

/// 单个请求经历的状态
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PipelineStage {
    Admitted,
    Validated,
    Transformed,
    Analyzed,
    Sorted,
    PositionResolved,
    Assembled,
    Released,
    /// 校验失败（终止）
    RejectedInput,
    /// 意外错误（终止）
    Faulted,
}

impl fmt::Display for PipelineStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

/// 字符串处理流程
///
/// - 编排完整的处理流程
/// - 不持有许可（由编排层负责）
/// - 只依赖业务能力（services）
pub struct StringFlow {
    validator: Validator,
    position_service: PositionService,
    verbose_logging: bool,
}

impl StringFlow {
    /// 从配置创建，外部随机数来源为 HTTP 服务
    pub fn new(config: &Config) -> AppResult<Self> {
        Ok(Self {
            validator: Validator::new(config),
            position_service: PositionService::new(config)?,
            verbose_logging: config.verbose_logging,
        })
    }

    /// 注入自定义随机数来源
    pub fn with_random_source(config: &Config, source: Arc<dyn RandomSource>) -> Self {
        Self {
            validator: Validator::new(config),
            position_service: PositionService::with_source(source, config.fallback_seed),
            verbose_logging: config.verbose_logging,
        }
    }

    pub async fn run(&self, request: &ProcessRequest, ctx: &RequestCtx) -> AppResult<ProcessResponse> {
        let input = request.input_string.as_str();

        // ========== 校验 ==========
        self.validator.validate(input)?;
        self.log_stage(ctx, PipelineStage::Validated);

        // ========== 变换 ==========
        let processed = transform::process(input);
        self.log_stage(ctx, PipelineStage::Transformed);

        // ========== 分析 ==========
        let character_count = analyzer::count_characters(&processed)
            .iter()
            .map(analyzer::CharacterCount::describe)
            .collect();
        let longest_substring = analyzer::find_longest_substring(&processed);
        self.log_stage(ctx, PipelineStage::Analyzed);

        // ========== 排序 ==========
        let sort_string = request.algorithm_choice.sort_str(&processed);
        self.log_stage(ctx, PipelineStage::Sorted);

        // ========== 删除位置 ==========
        let length = processed.chars().count();
        let position = self.position_service.next_removal_index(length).await;
        self.log_stage(ctx, PipelineStage::PositionResolved);

        let remove_string = match position {
            Some(index) => remove_char_at(&processed, index),
            None => processed.clone(),
        };

        info!(
            "{} ✓ 处理完成: 输入 {:?} (长度 {}), 算法 {}, 删除位置 {:?}",
            ctx,
            truncate_text(input, 32),
            ctx.input_len,
            request.algorithm_choice,
            position
        );

        Ok(ProcessResponse {
            processed_string: processed,
            character_count,
            longest_substring,
            sort_string,
            remove_string,
        })
    }

    fn log_stage(&self, ctx: &RequestCtx, stage: PipelineStage) {
        if self.verbose_logging {
            info!("{} → {}", ctx, stage);
        } else {
            debug!("{} → {}", ctx, stage);
        }
    }
}

/// 删除第 `index` 个字符
fn remove_char_at(input: &str, index: usize) -> String {
    input
        .chars()
        .enumerate()
        .filter(|(i, _)| *i != index)
        .map(|(_, c)| c)
        .collect()
}
