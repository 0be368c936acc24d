// Copyright (c) 2026 shaneyale (shaneyale86@gmail.com)
// All rights reserved.

//! # Exception 模块
//!
//! 该模块定义了条件请求校验组件可能产生的错误。
//!
//! ## 设计意图
//! - **只在构造期失败**：所有变体都发生在读取配置、构造校验器的阶段，组件拒绝启动。
//! - **请求期不报错**：日期格式非法、校验头缺失等情况在请求处理中被就地吸收，退化为 `Continue`，
//!   因此不在此处出现。

use thiserror::Error;

/// 构造校验组件时可能发生的异常。
#[derive(Debug, Error)]
pub enum Exception {
    /// 配置了不支持的哈希算法名称（例如 `sha512`）。
    #[error("Unsupported hash algorithm: {0}")]
    UnsupportedAlgorithm(String),
    /// 配置了既不是 `strong` 也不是 `weak` 的 ETag 强度。
    #[error("Unsupported etag strength: {0}")]
    UnsupportedStrength(String),
    /// 无法读取配置文件。
    #[error("Couldn't read config file {path}: {source}")]
    ConfigRead {
        path: String,
        #[source]
        source: std::io::Error,
    },
    /// 配置文件不是合法的 TOML，或某个配置节的结构不符合预期。
    #[error("Invalid config: {0}")]
    ConfigParse(#[from] toml::de::Error),
}

pub type Result<T> = std::result::Result<T, Exception>;
