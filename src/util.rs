use chrono::{DateTime, Utc};
use log::{debug, log_enabled, Level};

/// 解析 HTTP 日期（IMF-fixdate、RFC 850、asctime 三种格式）。
///
/// 解析失败返回 `None`，调用方应将其视为“不匹配”，而不是错误。
pub fn parse_http_date(value: &str) -> Option<DateTime<Utc>> {
    match httpdate::parse_http_date(value.trim()) {
        Ok(time) => Some(DateTime::<Utc>::from(time)),
        Err(_) => {
            if log_enabled!(Level::Debug) {
                debug!("无法解析的HTTP日期：{:?}，跳过日期比较", value);
            }
            None
        }
    }
}

/// 按 IMF-fixdate 格式化日期，例如 `Wed, 01 Jan 2020 00:00:00 GMT`。
/// 1970 年之前的时间同样可以格式化。
pub fn format_http_date(date: &DateTime<Utc>) -> String {
    date.format("%a, %d %b %Y %H:%M:%S GMT").to_string()
}
