//! 请求处理器 - 编排层
//!
//! ## 职责
//!
//! 1. **准入控制**：每个请求先申请许可，池满时排队
//! 2. **隔离执行**：流程在独立任务中运行，任务持有许可守卫
//! 3. **错误收敛**：panic / 任务失败统一转换为内部错误
//!
//! 许可守卫随任务结束而 drop，调用方被取消时任务仍会执行完毕并归还许可。

use crate::config::Config;
use crate::error::{AppError, AppResult};
use crate::infrastructure::AdmissionController;
use crate::models::{ProcessRequest, ProcessResponse};
use crate::services::RandomSource;
use crate::workflow::{PipelineStage, RequestCtx, StringFlow};
use std::sync::Arc;
use tracing::{debug, error, info, warn};

/// 请求处理器
#[derive(Clone)]
pub struct RequestProcessor {
    admission: AdmissionController,
    flow: Arc<StringFlow>,
}

impl RequestProcessor {
    /// 从配置创建
    pub fn new(config: &Config) -> AppResult<Self> {
        Ok(Self {
            admission: AdmissionController::new(config.max_concurrent_requests)?,
            flow: Arc::new(StringFlow::new(config)?),
        })
    }

    /// 注入自定义随机数来源
    pub fn with_random_source(config: &Config, source: Arc<dyn RandomSource>) -> AppResult<Self> {
        Ok(Self {
            admission: AdmissionController::new(config.max_concurrent_requests)?,
            flow: Arc::new(StringFlow::with_random_source(config, source)),
        })
    }

    pub fn admission(&self) -> &AdmissionController {
        &self.admission
    }

    /// 处理一个请求
    pub async fn handle(&self, request: ProcessRequest) -> AppResult<ProcessResponse> {
        let ctx = RequestCtx::new(&request.input_string);
        let permit = self.admission.acquire().await?;
        debug!("{} → {}", ctx, PipelineStage::Admitted);

        let flow = self.flow.clone();
        let task_ctx = ctx.clone();
        let handle = tokio::spawn(async move {
            let _permit = permit;
            flow.run(&request, &task_ctx).await
        });

        let result = match handle.await {
            Ok(result) => result,
            Err(e) => {
                error!("{} ❌ 处理任务异常终止: {}", ctx, e);
                Err(AppError::internal(format!("处理任务异常终止: {}", e)))
            }
        };

        match &result {
            Ok(_) => info!("{} ✓ 请求完成 → {}", ctx, PipelineStage::Released),
            Err(e) if e.is_client_error() => {
                warn!("{} ⚠️ {}: {}", ctx, PipelineStage::RejectedInput, e);
            }
            Err(e) => {
                error!("{} ❌ {}: {}", ctx, PipelineStage::Faulted, e);
            }
        }

        result
    }
}
