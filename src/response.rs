use crate::{headers::HeaderMap, param::*, util::format_http_date};

use bytes::Bytes;
use chrono::prelude::*;
use log::error;

#[derive(Debug, Clone)]
pub struct Response {
    status_code: u16,
    information: String,
    date: DateTime<Utc>,
    headers: HeaderMap,
    content: Bytes,
}

impl Response {
    pub fn new() -> Self {
        Self {
            status_code: 200,
            information: "OK".to_string(),
            date: Utc::now(),
            headers: HeaderMap::new(),
            content: Bytes::new(),
        }
    }

    pub fn with_status(mut self, code: u16) -> Self {
        self.set_code(code);
        self
    }

    /// 设置响应体，并同步 `Content-Length`。
    pub fn with_body(mut self, body: impl Into<Bytes>) -> Self {
        self.content = body.into();
        let length = self.content.len().to_string();
        self.headers.insert(CONTENT_LENGTH, &length);
        self
    }

    pub fn with_header(mut self, name: &str, value: &str) -> Self {
        self.headers.insert(name, value);
        self
    }

    pub fn set_code(&mut self, code: u16) -> &mut Self {
        self.status_code = code;
        self.information = match STATUS_CODES.get(&code) {
            Some(&info) => info.to_string(),
            None => {
                error!("未登记的状态码：{}，原因短语留空", code);
                String::new()
            }
        };
        self
    }

    pub fn set_header(&mut self, name: &str, value: &str) -> &mut Self {
        self.headers.insert(name, value);
        self
    }

    /// 将响应改写为空的 304：清空响应体，删除描述响应体的实体标头。
    pub fn not_modified(&mut self) -> &mut Self {
        self.set_code(304);
        self.content = Bytes::new();
        self.headers.remove(CONTENT_TYPE);
        self.headers.remove(CONTENT_LENGTH);
        self
    }

    /// 渲染为 HTTP/1.1 报文：状态行、标头、空行与响应体。
    pub fn as_bytes(&self) -> Vec<u8> {
        let mut header = format!(
            "HTTP/1.1 {} {}{}",
            self.status_code, self.information, CRLF
        );
        for (name, value) in self.headers.iter() {
            header.push_str(&[name, ": ", value, CRLF].concat());
        }
        if !self.headers.contains("Date") {
            header.push_str(&["Date: ", &format_http_date(&self.date), CRLF].concat());
        }
        header.push_str(CRLF);
        [header.as_bytes(), &self.content[..]].concat()
    }
}

impl Default for Response {
    fn default() -> Self {
        Self::new()
    }
}

impl Response {
    pub fn status_code(&self) -> u16 {
        self.status_code
    }

    pub fn information(&self) -> &str {
        &self.information
    }

    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    pub fn body(&self) -> &Bytes {
        &self.content
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status_code)
    }
}
