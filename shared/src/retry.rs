//! 统一的有界重试策略
//!
//! 取代散落在各页面里的 ad hoc 重试：固定的最大次数与间隔，
//! 可重试性由 [`ApiError::is_retryable`] 判定（网络失败或 5xx）。
//! 睡眠由调用方注入——浏览器里是 setTimeout 包装的 future，
//! 测试里是空操作。

use std::future::Future;

use crate::error::ApiError;

/// 重试参数。`max_retries` 不含首次尝试。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    pub max_retries: u32,
    pub delay_ms: u32,
}

impl Default for RetryPolicy {
    /// 默认：最多重试两次，固定 800ms 间隔
    fn default() -> Self {
        Self {
            max_retries: 2,
            delay_ms: 800,
        }
    }
}

impl RetryPolicy {
    pub const fn new(max_retries: u32, delay_ms: u32) -> Self {
        Self {
            max_retries,
            delay_ms,
        }
    }
}

/// 按策略执行 `op`，直到成功、错误不可重试、或次数用尽。
///
/// `sleep(ms)` 在两次尝试之间等待；最后一次失败后不再等待。
pub async fn with_retry<T, Op, Fut, Sleep, SleepFut>(
    policy: RetryPolicy,
    mut op: Op,
    sleep: Sleep,
) -> Result<T, ApiError>
where
    Op: FnMut() -> Fut,
    Fut: Future<Output = Result<T, ApiError>>,
    Sleep: Fn(u32) -> SleepFut,
    SleepFut: Future<Output = ()>,
{
    let mut attempt = 0;
    loop {
        match op().await {
            Ok(value) => return Ok(value),
            Err(err) if err.is_retryable() && attempt < policy.max_retries => {
                attempt += 1;
                sleep(policy.delay_ms).await;
            }
            Err(err) => return Err(err),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::{Cell, RefCell};

    async fn no_sleep(_ms: u32) {}

    /// 依次弹出预置结果的伪操作
    fn scripted(
        results: Vec<Result<&'static str, ApiError>>,
    ) -> (
        impl FnMut() -> std::future::Ready<Result<&'static str, ApiError>>,
        std::rc::Rc<Cell<u32>>,
    ) {
        let calls = std::rc::Rc::new(Cell::new(0));
        let counter = calls.clone();
        let queue = RefCell::new(results);
        let op = move || {
            counter.set(counter.get() + 1);
            std::future::ready(queue.borrow_mut().remove(0))
        };
        (op, calls)
    }

    #[tokio::test]
    async fn succeeds_on_third_attempt_after_two_500s() {
        let (op, calls) = scripted(vec![
            Err(ApiError::from_status_body(500, "")),
            Err(ApiError::from_status_body(500, "")),
            Ok("job"),
        ]);
        let result = with_retry(RetryPolicy::default(), op, no_sleep).await;
        assert_eq!(result, Ok("job"));
        assert_eq!(calls.get(), 3);
    }

    #[tokio::test]
    async fn network_errors_are_retried() {
        let (op, calls) = scripted(vec![Err(ApiError::network("offline")), Ok("job")]);
        let result = with_retry(RetryPolicy::default(), op, no_sleep).await;
        assert_eq!(result, Ok("job"));
        assert_eq!(calls.get(), 2);
    }

    #[tokio::test]
    async fn four_xx_fails_immediately() {
        let (op, calls) = scripted(vec![Err(ApiError::from_status_body(404, ""))]);
        let result = with_retry(RetryPolicy::default(), op, no_sleep).await;
        assert_eq!(result.unwrap_err().status, Some(404));
        assert_eq!(calls.get(), 1);
    }

    #[tokio::test]
    async fn gives_up_after_budget_is_exhausted() {
        let (op, calls) = scripted(vec![
            Err(ApiError::from_status_body(500, "")),
            Err(ApiError::from_status_body(502, "")),
            Err(ApiError::from_status_body(503, "")),
        ]);
        let result = with_retry(RetryPolicy::default(), op, no_sleep).await;
        assert_eq!(result.unwrap_err().status, Some(503));
        assert_eq!(calls.get(), 3); // 首次 + 两次重试
    }

    #[tokio::test]
    async fn sleeps_between_attempts_with_fixed_delay() {
        let slept = RefCell::new(Vec::new());
        let (op, _) = scripted(vec![
            Err(ApiError::from_status_body(500, "")),
            Err(ApiError::from_status_body(500, "")),
            Ok("job"),
        ]);
        let _ = with_retry(RetryPolicy::new(2, 250), op, |ms| {
            slept.borrow_mut().push(ms);
            std::future::ready(())
        })
        .await;
        assert_eq!(*slept.borrow(), vec![250, 250]);
    }
}
