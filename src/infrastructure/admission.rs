//! 准入控制 - 基础设施层
//!
//! 持有唯一的许可池（Semaphore），只暴露"申请许可"的能力。
//! 许可以 RAII 守卫的形式发放，守卫被 drop 时归还，
//! 因此成功、校验失败、内部错误、panic 或取消都会恰好归还一次。

use crate::error::{AppError, AppResult, ConfigError};
use std::sync::atomic::{AtomicU64, AtomicUsize, Ordering};
use std::sync::Arc;
use tokio::sync::{OwnedSemaphorePermit, Semaphore};
use tracing::debug;

/// 许可计数
#[derive(Debug, Default)]
pub struct AdmissionStats {
    acquired: AtomicU64,
    released: AtomicU64,
    in_flight: AtomicUsize,
    peak_in_flight: AtomicUsize,
}

impl AdmissionStats {
    pub fn acquired(&self) -> u64 {
        self.acquired.load(Ordering::SeqCst)
    }

    pub fn released(&self) -> u64 {
        self.released.load(Ordering::SeqCst)
    }

    pub fn in_flight(&self) -> usize {
        self.in_flight.load(Ordering::SeqCst)
    }

    /// 历史最大并发数
    pub fn peak_in_flight(&self) -> usize {
        self.peak_in_flight.load(Ordering::SeqCst)
    }

    fn on_acquire(&self) {
        self.acquired.fetch_add(1, Ordering::SeqCst);
        let current = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
        self.peak_in_flight.fetch_max(current, Ordering::SeqCst);
    }

    fn on_release(&self) {
        self.in_flight.fetch_sub(1, Ordering::SeqCst);
        self.released.fetch_add(1, Ordering::SeqCst);
    }
}

/// 准入控制器
///
/// 容量在创建时固定；tokio 的 Semaphore 按 FIFO 公平排队，等待不占用线程
#[derive(Debug, Clone)]
pub struct AdmissionController {
    semaphore: Arc<Semaphore>,
    capacity: usize,
    stats: Arc<AdmissionStats>,
}

impl AdmissionController {
    /// 创建容量为 `capacity` 的控制器
    pub fn new(capacity: usize) -> AppResult<Self> {
        if capacity == 0 {
            return Err(AppError::Config(ConfigError::InvalidValue {
                field: "max_concurrent_requests".to_string(),
                reason: "必须为正整数".to_string(),
            }));
        }
        Ok(Self {
            semaphore: Arc::new(Semaphore::new(capacity)),
            capacity,
            stats: Arc::new(AdmissionStats::default()),
        })
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// 当前空闲许可数
    pub fn available(&self) -> usize {
        self.semaphore.available_permits()
    }

    pub fn stats(&self) -> &AdmissionStats {
        &self.stats
    }

    /// 申请一个许可，池满时挂起等待
    pub async fn acquire(&self) -> AppResult<AdmissionPermit> {
        let permit = self
            .semaphore
            .clone()
            .acquire_owned()
            .await
            .map_err(|e| AppError::internal(format!("许可池已关闭: {}", e)))?;

        self.stats.on_acquire();
        debug!(
            "获得许可，当前并发 {}/{}",
            self.stats.in_flight(),
            self.capacity
        );

        Ok(AdmissionPermit {
            _permit: permit,
            stats: self.stats.clone(),
        })
    }
}

/// 许可守卫，drop 时归还
#[derive(Debug)]
pub struct AdmissionPermit {
    _permit: OwnedSemaphorePermit,
    stats: Arc<AdmissionStats>,
}

impl Drop for AdmissionPermit {
    fn drop(&mut self) {
        self.stats.on_release();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;
    use tokio_test::{assert_err, assert_ok, assert_pending, assert_ready_ok, task};

    #[test]
    fn test_capacity_must_be_positive() {
        let err = assert_err!(AdmissionController::new(0));
        assert!(matches!(err, AppError::Config(ConfigError::InvalidValue { .. })));
        assert_ok!(AdmissionController::new(1));
    }

    #[tokio::test]
    async fn test_permit_released_on_drop() {
        let controller = AdmissionController::new(2).unwrap();

        let first = controller.acquire().await.unwrap();
        let second = controller.acquire().await.unwrap();
        assert_eq!(controller.available(), 0);
        assert_eq!(controller.stats().in_flight(), 2);

        drop(first);
        assert_eq!(controller.available(), 1);
        drop(second);

        assert_eq!(controller.available(), 2);
        assert_eq!(controller.stats().acquired(), 2);
        assert_eq!(controller.stats().released(), 2);
    }

    #[tokio::test]
    async fn test_acquire_waits_when_saturated() {
        let controller = AdmissionController::new(1).unwrap();
        let held = controller.acquire().await.unwrap();

        let mut waiting = task::spawn(controller.acquire());
        assert_pending!(waiting.poll());

        drop(held);
        assert!(waiting.is_woken());
        let permit = assert_ready_ok!(waiting.poll());
        drop(permit);

        assert_eq!(controller.stats().acquired(), 2);
        assert_eq!(controller.stats().released(), 2);
    }

    #[tokio::test]
    async fn test_permit_released_when_task_panics() {
        let controller = AdmissionController::new(1).unwrap();
        let permit = controller.acquire().await.unwrap();

        let handle = tokio::spawn(async move {
            let _permit = permit;
            panic!("模拟内部错误");
        });
        assert!(handle.await.is_err());

        assert_eq!(controller.available(), 1);
        assert_eq!(controller.stats().released(), 1);
    }

    #[tokio::test]
    async fn test_never_exceeds_capacity() {
        let controller = AdmissionController::new(3).unwrap();
        let mut handles = Vec::new();

        for _ in 0..20 {
            let controller = controller.clone();
            handles.push(tokio::spawn(async move {
                let _permit = controller.acquire().await.unwrap();
                assert!(controller.stats().in_flight() <= 3);
                tokio::time::sleep(Duration::from_millis(5)).await;
            }));
        }
        for handle in handles {
            handle.await.unwrap();
        }

        assert!(controller.stats().peak_in_flight() <= 3);
        assert_eq!(controller.stats().acquired(), 20);
        assert_eq!(controller.stats().released(), 20);
        assert_eq!(controller.stats().in_flight(), 0);
    }
}
