//! LocalStorage 封装模块
//!
//! 使用 `web_sys::Storage` 替代 `gloo-storage`。按浏览器同源策略
//! 持久化，刷新后仍在。作为 `KeyValueStore` 的浏览器实现注入给
//! 共享层的 `SessionStore`，测试里则替换为内存实现。

use cvalign_shared::session::KeyValueStore;

/// 本地存储操作封装
#[derive(Clone, Copy, Default)]
pub struct LocalStorage;

impl LocalStorage {
    /// 获取 LocalStorage 实例
    fn storage() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok()?
    }
}

impl KeyValueStore for LocalStorage {
    /// 获取存储的字符串值；键不存在或发生错误时返回 None
    fn get(&self, key: &str) -> Option<String> {
        Self::storage()?.get_item(key).ok()?
    }

    /// 设置存储值，返回操作是否成功
    fn set(&self, key: &str, value: &str) -> bool {
        Self::storage()
            .and_then(|s| s.set_item(key, value).ok())
            .is_some()
    }

    /// 删除键值对，返回操作是否成功
    fn remove(&self, key: &str) -> bool {
        Self::storage()
            .and_then(|s| s.remove_item(key).ok())
            .is_some()
    }
}
