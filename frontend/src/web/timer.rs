//! 定时器封装模块
//!
//! 使用 `web_sys` 的原生定时器 API 替代 `gloo-timers`。
//! 提供一次性定时器（RAII，drop 即取消）、单定时器防抖和
//! 可 await 的 sleep。

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;

/// 一次性定时器
///
/// 封装 `setTimeout` API。当 `Timeout` 被 drop 时，自动清除定时器，
/// 因此被替换掉的回调绝不会迟到触发。
pub struct Timeout {
    handle: i32,
    #[allow(dead_code)]
    closure: Closure<dyn Fn()>,
}

impl Timeout {
    /// 创建新的一次性定时器
    ///
    /// # Panics
    /// 如果无法获取 window 对象或设置定时器失败
    pub fn new<F>(millis: u32, callback: F) -> Self
    where
        F: Fn() + 'static,
    {
        let closure = Closure::new(callback);
        let window = web_sys::window().expect("no window object");

        let handle = window
            .set_timeout_with_callback_and_timeout_and_arguments_0(
                closure.as_ref().unchecked_ref(),
                millis as i32,
            )
            .expect("failed to set timeout");

        Self { handle, closure }
    }

    /// 取消定时器。通常不需要手动调用，drop 时会自动清除。
    pub fn cancel(&self) {
        if let Some(window) = web_sys::window() {
            window.clear_timeout_with_handle(self.handle);
        }
    }
}

impl Drop for Timeout {
    fn drop(&mut self) {
        self.cancel();
    }
}

/// 单定时器防抖
///
/// 每次 `fire` 都会取消尚未触发的回调并重新计时：输入静默满
/// `window_ms` 毫秒后才真正执行。是单个可重置的定时器，不是队列。
#[derive(Clone)]
pub struct Debounce {
    window_ms: u32,
    pending: Rc<RefCell<Option<Timeout>>>,
}

impl Debounce {
    pub fn new(window_ms: u32) -> Self {
        Self {
            window_ms,
            pending: Rc::new(RefCell::new(None)),
        }
    }

    /// 重置计时并安排回调
    pub fn fire<F>(&self, callback: F)
    where
        F: Fn() + 'static,
    {
        // 旧的 Timeout 在这里被 drop，随之取消
        *self.pending.borrow_mut() = Some(Timeout::new(self.window_ms, callback));
    }

    /// 丢弃尚未触发的回调
    pub fn cancel(&self) {
        *self.pending.borrow_mut() = None;
    }
}

/// 可 await 的延时，用于重试间隔
pub async fn sleep(millis: u32) {
    let promise = js_sys::Promise::new(&mut |resolve, _reject| {
        if let Some(window) = web_sys::window() {
            let _ = window
                .set_timeout_with_callback_and_timeout_and_arguments_0(&resolve, millis as i32);
        }
    });
    let _ = wasm_bindgen_futures::JsFuture::from(promise).await;
}
