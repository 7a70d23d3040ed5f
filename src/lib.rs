//! # String Processor
//!
//! 对小写字母字符串做确定性变换并返回若干派生结果的 HTTP 服务
//!
//! ## 架构设计
//!
//! ### ① 基础设施层（Infrastructure）
//! - `infrastructure/` - 持有稀缺资源（许可池），只暴露能力
//! - `AdmissionController` - 唯一的许可池 owner，提供 acquire() 能力
//!
//! ### ② 业务能力层（Services / Clients）
//! - `services/` - 描述"我能做什么"，只处理单个请求
//! - `Validator` - 字符集 / 黑名单校验
//! - `transform` / `analyzer` / `sort` - 纯计算
//! - `PositionService` - 随机删除位置（外部服务 + 本地兜底）
//! - `clients/RandomOrgClient` - 随机数服务 HTTP 客户端
//!
//! ### ③ 流程层（Workflow）
//! - `StringFlow` - 流程编排（validate → transform → analyze → sort → position）
//!
//! ### ④ 编排层（Orchestration）
//! - `RequestProcessor` - 申请许可，在独立任务中运行流程
//!
//! ### ⑤ 接口层（API）
//! - `api/` - axum 路由与错误映射

pub mod api;
pub mod app;
pub mod clients;
pub mod config;
pub mod error;
pub mod infrastructure;
pub mod models;
pub mod orchestrator;
pub mod services;
pub mod utils;
pub mod workflow;

// 重新导出常用类型
pub use app::App;
pub use config::Config;
pub use error::{AppError, AppResult};
pub use infrastructure::AdmissionController;
pub use models::{ProcessRequest, ProcessResponse, SortAlgorithm};
pub use orchestrator::RequestProcessor;
pub use workflow::{RequestCtx, StringFlow};
