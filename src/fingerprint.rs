// Copyright (c) 2026 shaneyale (shaneyale86@gmail.com)
// All rights reserved.

//! # 指纹（ETag）生成模块
//!
//! 对已经定稿的响应体做摘要，得到 `"<hex>"`（强）或 `W/"<hex>"`（弱）形式的 ETag。
//! 相同的字节内容、算法和强度总是得到相同的指纹。

use std::fmt;

use md5::Md5;
use sha1::Sha1;
use sha2::{Digest, Sha256};

use crate::param::{Algorithm, Strength, WEAK_PREFIX};

/// 响应指纹，即 `ETag` 标头的完整取值（含引号与弱前缀）。
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Fingerprint(String);

impl Fingerprint {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_weak(&self) -> bool {
        self.0.starts_with(WEAK_PREFIX)
    }
}

impl fmt::Display for Fingerprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<Fingerprint> for String {
    fn from(fingerprint: Fingerprint) -> Self {
        fingerprint.0
    }
}

/// 计算 `body` 的摘要并以小写十六进制返回。
pub fn digest_hex(body: &[u8], algorithm: Algorithm) -> String {
    match algorithm {
        Algorithm::Sha256 => hex::encode(Sha256::digest(body)),
        Algorithm::Sha1 => hex::encode(Sha1::digest(body)),
        Algorithm::Md5 => hex::encode(Md5::digest(body)),
    }
}

/// 由响应体生成指纹。空响应体同样得到合法指纹（空内容的摘要）。
pub fn generate(body: &[u8], algorithm: Algorithm, strength: Strength) -> Fingerprint {
    let hex = digest_hex(body, algorithm);
    match strength {
        Strength::Strong => Fingerprint(format!("\"{}\"", hex)),
        Strength::Weak => Fingerprint(format!("{}\"{}\"", WEAK_PREFIX, hex)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sha256_strong_hello() {
        let etag = generate(b"hello", Algorithm::Sha256, Strength::Strong);
        assert_eq!(
            etag.as_str(),
            "\"2cf24dba5fb0a30e26e83b2ac5b9e29e1b161e5c1fa7425e73043362938b9824\""
        );
        assert!(!etag.is_weak());
    }

    #[test]
    fn test_sha256_weak_hello() {
        let etag = generate(b"hello", Algorithm::Sha256, Strength::Weak);
        assert_eq!(
            etag.as_str(),
            "W/\"2cf24dba5fb0a30e26e83b2ac5b9e29e1b161e5c1fa7425e73043362938b9824\""
        );
        assert!(etag.is_weak());
    }

    #[test]
    fn test_md5_hello() {
        assert_eq!(
            digest_hex(b"hello", Algorithm::Md5),
            "5d41402abc4b2a76b9719d911017c592"
        );
    }

    #[test]
    fn test_sha1_hello() {
        assert_eq!(
            digest_hex(b"hello", Algorithm::Sha1),
            "aaf4c61ddcc5e8a2dabede0f3b482cd9aea9434d"
        );
    }

    #[test]
    fn test_empty_body() {
        let etag = generate(b"", Algorithm::Sha256, Strength::Strong);
        assert_eq!(
            etag.as_str(),
            "\"e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855\""
        );
    }

    #[test]
    fn test_same_content_same_etag() {
        let a = generate(b"hello", Algorithm::Md5, Strength::Weak);
        let b = generate(b"hello", Algorithm::Md5, Strength::Weak);
        assert_eq!(a, b);
    }

    #[test]
    fn test_different_content_different_etag() {
        let a = generate(b"hello", Algorithm::Sha256, Strength::Strong);
        let b = generate(b"world", Algorithm::Sha256, Strength::Strong);
        assert_ne!(a, b);
    }

    #[test]
    fn test_hex_is_lowercase() {
        let hex = digest_hex(b"\xff\xfe", Algorithm::Sha1);
        assert_eq!(hex, hex.to_lowercase());
    }
}
