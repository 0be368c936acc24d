// Copyright (c) 2026 shaneyale (shaneyale86@gmail.com)
// All rights reserved.

//! # HTTP 请求上下文模块
//!
//! 由外部管线构造的请求元数据。本组件只读取其中的方法和两个校验标头，
//! 不负责解析原始报文。

use crate::{
    headers::HeaderMap,
    param::{HttpRequestMethod, IF_MODIFIED_SINCE, IF_NONE_MATCH},
    validator::ValidatorSet,
};

/// 表示一个 HTTP 请求的元数据。
#[derive(Debug, Clone)]
pub struct Request {
    /// HTTP 请求方法（GET, POST 等）
    method: HttpRequestMethod,
    /// 请求的资源路径（包含查询字符串）
    path: String,
    headers: HeaderMap,
}

impl Request {
    pub fn new(method: HttpRequestMethod, path: &str) -> Self {
        Self {
            method,
            path: path.to_string(),
            headers: HeaderMap::new(),
        }
    }

    pub fn get(path: &str) -> Self {
        Self::new(HttpRequestMethod::Get, path)
    }

    pub fn with_header(mut self, name: &str, value: &str) -> Self {
        self.headers.insert(name, value);
        self
    }

    /// 在下游处理开始前拍下校验标头的快照。
    pub fn validators(&self) -> ValidatorSet {
        ValidatorSet::new(
            self.headers.get(IF_NONE_MATCH).map(str::to_string),
            self.headers.get(IF_MODIFIED_SINCE).map(str::to_string),
        )
    }
}

impl Request {
    pub fn method(&self) -> HttpRequestMethod {
        self.method
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_builder() {
        let request = Request::get("/index.html").with_header("If-None-Match", "\"abc\"");
        assert_eq!(request.method(), HttpRequestMethod::Get);
        assert_eq!(request.path(), "/index.html");
        assert_eq!(request.headers().get("if-none-match"), Some("\"abc\""));
    }

    #[test]
    fn test_validators_snapshot() {
        let request = Request::get("/")
            .with_header("if-none-match", "\"a\", \"b\"")
            .with_header("If-Modified-Since", "Wed, 01 Jan 2020 00:00:00 GMT");
        let validators = request.validators();
        assert_eq!(validators.if_none_match(), Some("\"a\", \"b\""));
        assert_eq!(
            validators.if_modified_since(),
            Some("Wed, 01 Jan 2020 00:00:00 GMT")
        );
    }

    #[test]
    fn test_validators_empty() {
        let validators = Request::get("/").validators();
        assert!(validators.if_none_match().is_none());
        assert!(validators.if_modified_since().is_none());
    }
}
