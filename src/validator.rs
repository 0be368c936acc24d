// Copyright (c) 2026 shaneyale (shaneyale86@gmail.com)
// All rights reserved.

//! # 条件请求校验引擎
//!
//! 对每个符合条件的响应执行一次同步判定：
//! 1. 由定稿的响应体生成指纹，无论是否命中都写入 `ETag`。
//! 2. `If-None-Match` 命中则直接返回 `NotModified`，优先于日期比较。
//! 3. 否则在双方日期都能解析时比较 `Last-Modified <= If-Modified-Since`。
//! 4. 其余情况返回 `Continue`。
//!
//! 引擎不持有任何跨请求的可变状态，配置通过 `Arc` 只读共享。

use std::sync::Arc;

use log::{debug, log_enabled, Level};

use crate::{
    comparator::any_matches,
    config::ValidationConfig,
    fingerprint::{generate, Fingerprint},
    headers::HeaderMap,
    param::{HttpRequestMethod, ETAG, LAST_MODIFIED},
    response::Response,
    util::parse_http_date,
};

/// 请求携带的校验标头快照。
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidatorSet {
    if_none_match: Option<String>,
    if_modified_since: Option<String>,
}

impl ValidatorSet {
    pub fn new(if_none_match: Option<String>, if_modified_since: Option<String>) -> Self {
        Self {
            if_none_match,
            if_modified_since,
        }
    }

    pub fn if_none_match(&self) -> Option<&str> {
        self.if_none_match.as_deref()
    }

    pub fn if_modified_since(&self) -> Option<&str> {
        self.if_modified_since.as_deref()
    }
}

/// 校验结果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// 没有校验器命中，调用方照常返回完整响应。
    Continue,
    /// 调用方必须把响应改写为空的 304。
    NotModified,
}

/// 只有 GET/HEAD、2xx、响应体非空且尚无 `ETag` 的响应才参与校验。
pub fn is_eligible(method: HttpRequestMethod, response: &Response) -> bool {
    method.is_cacheable_read()
        && response.is_success()
        && !response.body().is_empty()
        && !response.headers().contains(ETAG)
}

#[derive(Debug, Clone)]
pub struct Validator {
    config: Arc<ValidationConfig>,
}

impl Validator {
    pub fn new(config: Arc<ValidationConfig>) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ValidationConfig {
        &self.config
    }

    /// 核心判定函数。
    ///
    /// `eligible` 为 `false` 时不生成指纹，直接返回 `(None, Continue)`。
    /// `headers` 是下游处理完成后的响应标头，用于读取 `Last-Modified`。
    pub fn evaluate(
        &self,
        eligible: bool,
        validators: &ValidatorSet,
        body: &[u8],
        headers: &HeaderMap,
    ) -> (Option<Fingerprint>, Outcome) {
        if !eligible {
            return (None, Outcome::Continue);
        }

        let fingerprint = generate(body, self.config.algorithm(), self.config.strength());

        if let Some(if_none_match) = validators.if_none_match() {
            if any_matches(if_none_match, fingerprint.as_str()) {
                debug!("If-None-Match命中：{}", fingerprint);
                return (Some(fingerprint), Outcome::NotModified);
            }
            if self.config.strict() {
                return (Some(fingerprint), Outcome::Continue);
            }
        }

        let outcome = match (headers.get(LAST_MODIFIED), validators.if_modified_since()) {
            (Some(last_modified), Some(if_modified_since)) => {
                Self::compare_dates(last_modified, if_modified_since)
            }
            _ => Outcome::Continue,
        };
        (Some(fingerprint), outcome)
    }

    /// 日期任意一方无法解析时都视为不匹配。
    fn compare_dates(last_modified: &str, if_modified_since: &str) -> Outcome {
        match (
            parse_http_date(last_modified),
            parse_http_date(if_modified_since),
        ) {
            (Some(lm), Some(ims)) if lm <= ims => {
                debug!("资源自{}以来未修改", if_modified_since);
                Outcome::NotModified
            }
            _ => Outcome::Continue,
        }
    }

    /// 在响应上执行完整的校验流程：判定资格、写入 `ETag`，必要时改写为 304。
    pub fn apply(
        &self,
        method: HttpRequestMethod,
        validators: &ValidatorSet,
        response: &mut Response,
    ) -> Outcome {
        let eligible = is_eligible(method, response);
        if !eligible && log_enabled!(Level::Debug) {
            debug!(
                "响应不参与ETag校验：method={}, status={}, body={}B, has_etag={}",
                method,
                response.status_code(),
                response.body().len(),
                response.headers().contains(ETAG)
            );
        }

        let (fingerprint, outcome) =
            self.evaluate(eligible, validators, response.body(), response.headers());
        if let Some(fingerprint) = fingerprint {
            response.set_header(ETAG, fingerprint.as_str());
        }
        if outcome == Outcome::NotModified {
            response.not_modified();
        }
        outcome
    }
}
