// Copyright (c) 2026 shaneyale (shaneyale86@gmail.com)
// All rights reserved.

//! # 标头比较模块
//!
//! 将客户端发送的 `If-None-Match` 列表与服务端指纹比较。采用弱比较语义：
//! `W/"x"` 与 `"x"` 视为相等。

use crate::param::{WEAK_PREFIX, WILDCARD};

/// 去掉弱前缀（大小写不敏感）和两侧引号，得到不透明标识。
pub fn normalize(tag: &str) -> &str {
    let tag = tag.trim();
    let tag = match tag.get(..WEAK_PREFIX.len()) {
        Some(prefix) if prefix.eq_ignore_ascii_case(WEAK_PREFIX) => &tag[WEAK_PREFIX.len()..],
        _ => tag,
    };
    tag.trim_matches('"')
}

/// 单个标签与服务端指纹比较。
pub fn matches(client_tag: &str, server_tag: &str) -> bool {
    let client_tag = client_tag.trim();
    if client_tag.is_empty() {
        return false;
    }
    if client_tag == WILDCARD {
        return true;
    }
    normalize(client_tag) == normalize(server_tag)
}

/// 逗号分隔的列表中任意一项匹配即返回 `true`。空列表不匹配。
pub fn any_matches(client_raw: &str, server_tag: &str) -> bool {
    client_raw
        .split(',')
        .any(|client_tag| matches(client_tag, server_tag))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize() {
        assert_eq!(normalize("\"abc\""), "abc");
        assert_eq!(normalize("W/\"abc\""), "abc");
        assert_eq!(normalize("w/\"abc\""), "abc");
        assert_eq!(normalize("  \"abc\"  "), "abc");
        assert_eq!(normalize("abc"), "abc");
    }

    #[test]
    fn test_weak_strong_symmetry() {
        assert!(any_matches("\"x\"", "W/\"x\""));
        assert!(any_matches("W/\"x\"", "\"x\""));
        assert!(any_matches("w/\"x\"", "\"x\""));
    }

    #[test]
    fn test_wildcard() {
        assert!(any_matches("*", "\"anything\""));
        assert!(any_matches(" * ", "W/\"anything\""));
        assert!(any_matches("\"a\", *", "\"b\""));
    }

    #[test]
    fn test_empty_never_matches() {
        assert!(!any_matches("", "\"x\""));
        assert!(!any_matches("   ", "\"x\""));
        assert!(!any_matches(",,", "\"x\""));
        assert!(!any_matches("", "\"\""));
    }

    #[test]
    fn test_list_form() {
        assert!(any_matches("\"a\", \"b\"", "\"b\""));
        assert!(!any_matches("\"a\", \"b\"", "\"c\""));
        assert!(any_matches("\"a\",W/\"b\"", "\"b\""));
    }

    #[test]
    fn test_exact_identifier() {
        assert!(!any_matches("\"abc\"", "\"ABC\""));
        assert!(!any_matches("\"ab\"", "\"abc\""));
    }

    #[test]
    fn test_unicode_does_not_panic() {
        assert!(!any_matches("é", "\"x\""));
        assert!(!any_matches("W", "\"x\""));
    }
}
