//! 请求处理上下文
//!
//! 封装"我正在处理哪一个请求"这一信息，用于日志

use std::fmt::Display;
use std::sync::atomic::{AtomicU64, Ordering};

static NEXT_REQUEST_ID: AtomicU64 = AtomicU64::new(1);

/// 请求处理上下文
#[derive(Debug, Clone)]
pub struct RequestCtx {
    /// 进程内自增的请求编号
    pub request_id: u64,

    /// 原始输入长度（字符数）
    pub input_len: usize,
}

impl RequestCtx {
    /// 分配新的请求编号
    pub fn new(input: &str) -> Self {
        Self {
            request_id: NEXT_REQUEST_ID.fetch_add(1, Ordering::Relaxed),
            input_len: input.chars().count(),
        }
    }
}

impl Display for RequestCtx {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[请求 #{}]", self.request_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_are_unique() {
        let a = RequestCtx::new("abc");
        let b = RequestCtx::new("abcd");
        assert_ne!(a.request_id, b.request_id);
        assert_eq!(a.input_len, 3);
        assert_eq!(format!("{}", a), format!("[请求 #{}]", a.request_id));
    }
}
