//! 会话与路由守卫模块
//!
//! 会话 = JWT + 缓存的用户信息，唯一属主是 [`SessionStore`]。
//! 存储后端通过 [`KeyValueStore`] 注入：浏览器里是 LocalStorage，
//! 测试里是内存 HashMap。过期不在存储层清除，而是在读取时计算
//! （`is_authenticated`），解码失败一律视为未认证（fail closed）。

use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use serde::{Deserialize, Serialize};

use crate::{Role, STORAGE_TOKEN_KEY, STORAGE_USER_KEY, User};

/// 键值存储抽象，浏览器实现为 LocalStorage
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str) -> bool;
    fn remove(&self, key: &str) -> bool;
}

/// 客户端持有的认证凭据：令牌 + 缓存的用户档案
#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    pub token: String,
    pub user: User,
}

/// 我们关心的 JWT payload 字段。
/// 客户端只解码、不验签——签名校验是后端的职责。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JwtClaims {
    #[serde(default)]
    pub sub: Option<String>,
    pub exp: i64,
}

/// 解码 JWT 的 payload 段。
///
/// 任何一步失败（段数不对、base64 非法、JSON 非法、缺 exp）
/// 都返回 None，绝不 panic。
pub fn decode_claims(token: &str) -> Option<JwtClaims> {
    let payload = token.split('.').nth(1)?;
    let bytes = URL_SAFE_NO_PAD.decode(payload).ok()?;
    serde_json::from_slice(&bytes).ok()
}

/// 令牌在 `now_ms`（Unix 毫秒）时刻是否仍然有效
pub fn is_token_live(token: &str, now_ms: i64) -> bool {
    match decode_claims(token) {
        Some(claims) => claims.exp.saturating_mul(1000) > now_ms,
        None => false,
    }
}

/// 会话存储，固定键 `token` / `user`
pub struct SessionStore<S> {
    store: S,
}

impl<S: KeyValueStore> SessionStore<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn token(&self) -> Option<String> {
        self.store.get(STORAGE_TOKEN_KEY)
    }

    /// 缓存的用户档案，JSON 损坏时视为不存在
    pub fn user(&self) -> Option<User> {
        let raw = self.store.get(STORAGE_USER_KEY)?;
        serde_json::from_str(&raw).ok()
    }

    /// 令牌与用户都在时才算有会话
    pub fn get(&self) -> Option<Session> {
        Some(Session {
            token: self.token()?,
            user: self.user()?,
        })
    }

    pub fn set_token(&self, token: &str) -> bool {
        self.store.set(STORAGE_TOKEN_KEY, token)
    }

    pub fn set_user(&self, user: &User) -> bool {
        match serde_json::to_string(user) {
            Ok(json) => self.store.set(STORAGE_USER_KEY, &json),
            Err(_) => false,
        }
    }

    pub fn set(&self, token: &str, user: &User) -> bool {
        self.set_token(token) && self.set_user(user)
    }

    /// 登出或强制重新认证时显式清除
    pub fn clear(&self) {
        self.store.remove(STORAGE_TOKEN_KEY);
        self.store.remove(STORAGE_USER_KEY);
    }

    /// 路由守卫谓词：存储的令牌在 `now_ms` 时刻有效才算已认证。
    /// 过期令牌即使仍在存储中也视为不存在。
    pub fn is_authenticated(&self, now_ms: i64) -> bool {
        match self.token() {
            Some(token) => is_token_live(&token, now_ms),
            None => false,
        }
    }

    /// 能力检查：对固定角色枚举的集合成员测试
    pub fn has_role(&self, required: &[Role]) -> bool {
        match self.user() {
            Some(user) => required.contains(&user.role),
            None => false,
        }
    }
}

#[cfg(test)]
mod tests;
