//! 编排层（Orchestration Layer）
//!
//! ## 层次关系
//!
//! ```text
//! api (HTTP 入口)
//!     ↓
//! orchestrator::RequestProcessor (许可 + 任务隔离)
//!     ↓
//! workflow::StringFlow (处理单个请求)
//!     ↓
//! services (能力层：validate / transform / analyze / sort / position)
//!     ↓
//! infrastructure / clients (许可池、随机数服务)
//! ```

pub mod request_processor;

pub use request_processor::RequestProcessor;
