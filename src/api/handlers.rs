//! HTTP 处理函数
//!
//! 只做参数提取和错误映射，不包含业务逻辑

use axum::extract::rejection::QueryRejection;
use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

use crate::error::{AppError, ValidationError};
use crate::models::{ErrorBody, ProcessRequest, ProcessResponse};
use crate::orchestrator::RequestProcessor;

/// `GET /process`
///
/// 查询参数解析失败也按校验错误返回 JSON 文本，而不是 axum 默认的纯文本
pub async fn process(
    State(processor): State<RequestProcessor>,
    query: Result<Query<ProcessRequest>, QueryRejection>,
) -> Result<Json<ProcessResponse>, AppError> {
    let Query(request) = query.map_err(|rejection| ValidationError::InvalidQuery {
        reason: rejection.body_text(),
    })?;
    processor.handle(request).await.map(Json)
}

/// 健康检查响应体
#[derive(Debug, Serialize)]
pub struct HealthStatus {
    pub status: &'static str,
    pub capacity: usize,
    pub available: usize,
}

/// `GET /health`
pub async fn health(State(processor): State<RequestProcessor>) -> Json<HealthStatus> {
    let admission = processor.admission();
    Json(HealthStatus {
        status: "ok",
        capacity: admission.capacity(),
        available: admission.available(),
    })
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            // 校验错误：把可读文本原样返回
            AppError::Validation(e) => (StatusCode::BAD_REQUEST, Json(e.to_string())).into_response(),
            // 其他错误细节已在编排层记录，这里只返回通用文本
            _ => (StatusCode::INTERNAL_SERVER_ERROR, Json(ErrorBody::internal())).into_response(),
        }
    }
}
