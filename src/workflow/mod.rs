pub mod request_ctx;
pub mod string_flow;

pub use request_ctx::RequestCtx;
pub use string_flow::{PipelineStage, StringFlow};
