use super::*;
use std::cell::RefCell;
use std::collections::HashMap;

// =========================================================
// 辅助：内存版 KeyValueStore
// =========================================================

#[derive(Default)]
struct MemoryStore {
    map: RefCell<HashMap<String, String>>,
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.map.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> bool {
        self.map
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        true
    }

    fn remove(&self, key: &str) -> bool {
        self.map.borrow_mut().remove(key).is_some()
    }
}

fn make_token(exp_secs: i64) -> String {
    let header = URL_SAFE_NO_PAD.encode(r#"{"alg":"HS256","typ":"JWT"}"#);
    let payload = URL_SAFE_NO_PAD.encode(format!(r#"{{"sub":"a@b.com","exp":{}}}"#, exp_secs));
    format!("{}.{}.signature", header, payload)
}

fn make_user(role: Role) -> User {
    User {
        id: 1,
        email: "a@b.com".to_string(),
        full_name: "Ada Lovelace".to_string(),
        role,
        company_id: 7,
        is_active: true,
        created_at: "2025-01-01T00:00:00".to_string(),
    }
}

const NOW_MS: i64 = 1_750_000_000_000; // 2025-06-15 前后

// =========================================================
// decode / is_authenticated
// =========================================================

#[test]
fn live_token_is_authenticated() {
    let store = SessionStore::new(MemoryStore::default());
    store.set(&make_token(NOW_MS / 1000 + 3600), &make_user(Role::Recruiter));
    assert!(store.is_authenticated(NOW_MS));
}

#[test]
fn expired_token_is_not_authenticated() {
    let store = SessionStore::new(MemoryStore::default());
    store.set(&make_token(NOW_MS / 1000 - 60), &make_user(Role::Recruiter));
    assert!(!store.is_authenticated(NOW_MS));
}

#[test]
fn exp_exactly_now_is_not_authenticated() {
    // 比较是严格大于
    assert!(!is_token_live(&make_token(NOW_MS / 1000), NOW_MS));
}

#[test]
fn malformed_tokens_never_authenticate() {
    for bad in [
        "",
        "not-a-jwt",
        "only.one-dot",
        "a.!!!invalid-base64!!!.c",
        "a.bm90LWpzb24.c", // payload 解码后不是 JSON
    ] {
        assert!(!is_token_live(bad, NOW_MS), "token {:?} should fail closed", bad);
        assert!(decode_claims(bad).is_none());
    }
}

#[test]
fn missing_token_is_not_authenticated() {
    let store = SessionStore::new(MemoryStore::default());
    assert!(!store.is_authenticated(NOW_MS));
}

#[test]
fn claims_carry_subject() {
    let claims = decode_claims(&make_token(123)).unwrap();
    assert_eq!(claims.sub.as_deref(), Some("a@b.com"));
    assert_eq!(claims.exp, 123);
}

// =========================================================
// has_role
// =========================================================

#[test]
fn has_role_is_set_membership() {
    let store = SessionStore::new(MemoryStore::default());
    store.set(&make_token(NOW_MS), &make_user(Role::Admin));

    assert!(store.has_role(&[Role::Admin]));
    assert!(store.has_role(&[Role::Admin, Role::Recruiter]));
    assert!(!store.has_role(&[Role::Recruiter, Role::HiringManager]));
}

#[test]
fn has_role_without_user_is_false() {
    let store = SessionStore::new(MemoryStore::default());
    assert!(!store.has_role(&[Role::Admin]));
}

#[test]
fn corrupt_user_json_is_treated_as_absent() {
    let backing = MemoryStore::default();
    backing.set(crate::STORAGE_USER_KEY, "{not json");
    let store = SessionStore::new(backing);
    assert!(store.user().is_none());
    assert!(!store.has_role(&[Role::Admin]));
}

// =========================================================
// 存取生命周期
// =========================================================

#[test]
fn set_then_get_round_trips() {
    let store = SessionStore::new(MemoryStore::default());
    let user = make_user(Role::HiringManager);
    let token = make_token(NOW_MS / 1000 + 10);
    assert!(store.set(&token, &user));

    let session = store.get().unwrap();
    assert_eq!(session.token, token);
    assert_eq!(session.user, user);
}

#[test]
fn clear_removes_both_keys() {
    let store = SessionStore::new(MemoryStore::default());
    store.set(&make_token(1), &make_user(Role::Recruiter));
    store.clear();
    assert!(store.get().is_none());
    assert!(store.token().is_none());
    assert!(store.user().is_none());
}
