//! API 模块
//!
//! 负责对外提供的 HTTP 接口

pub mod handlers;
pub mod router;

pub use router::build_router;
