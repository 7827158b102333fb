//! 表单字段校验
//!
//! 登录 / 注册 / 改密表单的逐字段校验，blur 和提交时都会跑。
//! 返回 `Some(错误文案)` 表示不通过。这些只是第一道闸，
//! 服务端校验仍然是权威。

/// 邮箱形状检查：`本地部分@域名.后缀`，任何位置不允许空白。
/// 与原始客户端的正则 `^[^\s@]+@[^\s@]+\.[^\s@]+$` 等价。
pub fn validate_email(value: &str) -> Option<&'static str> {
    if value.is_empty() {
        return Some("Email is required");
    }
    let mut parts = value.splitn(2, '@');
    let local = parts.next().unwrap_or("");
    let domain = parts.next().unwrap_or("");

    let clean = |s: &str| !s.is_empty() && !s.chars().any(|c| c.is_whitespace() || c == '@');
    let domain_ok = match domain.rsplit_once('.') {
        Some((name, tld)) => clean(name) && clean(tld),
        None => false,
    };
    if clean(local) && domain_ok {
        None
    } else {
        Some("Please enter a valid email address")
    }
}

/// 登录密码：仅要求最短长度
pub fn validate_login_password(value: &str) -> Option<&'static str> {
    if value.is_empty() {
        Some("Password is required")
    } else if value.len() < 6 {
        Some("Password must be at least 6 characters")
    } else {
        None
    }
}

/// 新密码（注册 / 重置 / 修改）：长度 + 大小写字母和数字的组合
pub fn validate_new_password(value: &str) -> Option<&'static str> {
    if value.is_empty() {
        return Some("Password is required");
    }
    if value.len() < 8 {
        return Some("Password must be at least 8 characters");
    }
    let has_lower = value.chars().any(|c| c.is_ascii_lowercase());
    let has_upper = value.chars().any(|c| c.is_ascii_uppercase());
    let has_digit = value.chars().any(|c| c.is_ascii_digit());
    if has_lower && has_upper && has_digit {
        None
    } else {
        Some("Password must contain at least one uppercase letter, one lowercase letter, and one number")
    }
}

pub fn validate_confirm_password(password: &str, confirm: &str) -> Option<&'static str> {
    if confirm.is_empty() {
        Some("Please confirm your password")
    } else if confirm != password {
        Some("Passwords do not match")
    } else {
        None
    }
}

pub fn validate_full_name(value: &str) -> Option<&'static str> {
    if value.is_empty() {
        Some("Full name is required")
    } else if value.chars().count() < 2 {
        Some("Full name must be at least 2 characters")
    } else {
        None
    }
}

/// 注册时公司必选（下拉框空值）
pub fn validate_company_choice(value: &str) -> Option<&'static str> {
    if value.is_empty() {
        Some("Company is required")
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn email_shapes() {
        assert!(validate_email("user@example.com").is_none());
        assert!(validate_email("a.b+c@sub.domain.io").is_none());

        assert!(validate_email("").is_some());
        assert!(validate_email("plainaddress").is_some());
        assert!(validate_email("no@dot").is_some());
        assert!(validate_email("sp ace@x.com").is_some());
        assert!(validate_email("two@@x.com").is_some());
        assert!(validate_email("@x.com").is_some());
        assert!(validate_email("user@.com").is_some());
        assert!(validate_email("user@x.").is_some());
    }

    #[test]
    fn login_password_minimum() {
        assert!(validate_login_password("").is_some());
        assert!(validate_login_password("12345").is_some());
        assert!(validate_login_password("123456").is_none());
    }

    #[test]
    fn new_password_composition() {
        assert!(validate_new_password("Short1a").is_some()); // 7 字符
        assert!(validate_new_password("alllowercase1").is_some());
        assert!(validate_new_password("ALLUPPERCASE1").is_some());
        assert!(validate_new_password("NoDigitsHere").is_some());
        assert!(validate_new_password("GoodPass1").is_none());
    }

    #[test]
    fn confirm_password_must_match() {
        assert!(validate_confirm_password("abc", "").is_some());
        assert!(validate_confirm_password("abc", "abd").is_some());
        assert!(validate_confirm_password("abc", "abc").is_none());
    }

    #[test]
    fn full_name_length() {
        assert!(validate_full_name("").is_some());
        assert!(validate_full_name("A").is_some());
        assert!(validate_full_name("Al").is_none());
    }

    #[test]
    fn company_required() {
        assert!(validate_company_choice("").is_some());
        assert!(validate_company_choice("3").is_none());
    }
}
