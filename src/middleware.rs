// Copyright (c) 2026 shaneyale (shaneyale86@gmail.com)
// All rights reserved.

//! # 条件 GET 管线步骤
//!
//! 在下游处理器生成响应体之后、响应写出之前调用校验引擎。

use std::sync::Arc;

use log::debug;

use crate::{
    config::ValidationConfig,
    request::Request,
    response::Response,
    validator::{Outcome, Validator},
};

/// 下游处理器：根据请求生成完整的响应。
#[cfg_attr(test, mockall::automock)]
pub trait Handler {
    fn handle(&self, request: &Request) -> Response;
}

#[derive(Debug, Clone)]
pub struct ConditionalGet {
    validator: Validator,
}

impl ConditionalGet {
    pub fn new(config: Arc<ValidationConfig>) -> Self {
        Self {
            validator: Validator::new(config),
        }
    }

    pub fn validator(&self) -> &Validator {
        &self.validator
    }

    pub fn process(&self, request: &Request, handler: &dyn Handler) -> Response {
        // 校验标头必须在下游处理之前取出
        let validators = request.validators();

        let mut response = handler.handle(request);

        let outcome = self
            .validator
            .apply(request.method(), &validators, &mut response);
        if outcome == Outcome::NotModified {
            debug!("{} {} -> 304 Not Modified", request.method(), request.path());
        }
        response
    }
}
