//! 路由配置
//!
//! ```text
//! /
//! ├── /process   - 字符串处理（GET，query 参数）
//! └── /health    - 健康检查
//! ```

use axum::routing::get;
use axum::Router;

use crate::api::handlers;
use crate::orchestrator::RequestProcessor;

/// 构建完整的路由
pub fn build_router(processor: RequestProcessor) -> Router {
    Router::new()
        .route("/process", get(handlers::process))
        .route("/health", get(handlers::health))
        .with_state(processor)
}
