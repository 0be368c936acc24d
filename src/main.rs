// Copyright (c) 2026 shaneyale (shaneyale86@gmail.com)
// All rights reserved.

//! # ETag 校验命令行工具
//!
//! 将一个本地文件当作 200 响应，让它经过条件 GET 管线，打印最终的响应头。
//! 适合在部署前检查某份配置下生成的 ETag 以及客户端校验标头的效果。

use std::{
    fs, io,
    path::{Path, PathBuf},
    process::ExitCode,
    sync::Arc,
};

use chrono::{DateTime, Utc};
use clap::Parser;
use etag_validator::{
    param::{IF_MODIFIED_SINCE, IF_NONE_MATCH, LAST_MODIFIED},
    util::format_http_date,
    Config, ConditionalGet, Exception, Handler, HttpRequestMethod, Request, Response,
    ValidationConfig,
};
use log::{debug, error, info, LevelFilter};
use log4rs::{
    append::console::ConsoleAppender,
    config::{Appender, Root},
};
use serde_json::json;

#[derive(Parser, Debug)]
#[command(version, about = "Check ETag / Last-Modified validation for a file")]
struct Cli {
    /// 作为响应体的文件
    file: PathBuf,

    /// 配置文件路径（TOML，读取其中的 [etag] 配置节）
    #[arg(long, default_value = "config/development.toml")]
    config: String,

    /// log4rs 配置文件路径
    #[arg(long, default_value = "config/log4rs.yaml")]
    log_config: String,

    #[arg(long, default_value = "GET")]
    method: HttpRequestMethod,

    #[arg(long)]
    if_none_match: Option<String>,

    #[arg(long)]
    if_modified_since: Option<String>,

    /// 覆盖响应的 Last-Modified，默认取文件的修改时间
    #[arg(long)]
    last_modified: Option<String>,

    /// 以 JSON 输出结果
    #[arg(long)]
    json: bool,
}

/// 把文件内容原样作为响应返回的处理器。
struct FileHandler {
    content: Vec<u8>,
    last_modified: Option<String>,
}

impl Handler for FileHandler {
    fn handle(&self, _request: &Request) -> Response {
        let mut response = Response::new()
            .with_body(self.content.clone())
            .with_header("Content-Type", "application/octet-stream");
        if let Some(last_modified) = &self.last_modified {
            response.set_header(LAST_MODIFIED, last_modified);
        }
        response
    }
}

fn fallback_log_config() -> Result<log4rs::Config, log4rs::config::runtime::ConfigErrors> {
    let stdout = ConsoleAppender::builder().build();
    log4rs::config::Config::builder()
        .appender(Appender::builder().build("stdout", Box::new(stdout)))
        .build(Root::builder().appender("stdout").build(LevelFilter::Info))
}

/// 初始化日志。日志配置文件不可用时退回到控制台输出，
/// 此时日志系统尚未就绪，失败信息只能写到标准错误。
fn init_logging(path: &str) {
    if log4rs::init_file(path, Default::default()).is_ok() {
        return;
    }
    match fallback_log_config() {
        Ok(config) => {
            if let Err(e) = log4rs::init_config(config) {
                eprintln!("无法初始化日志：{}", e);
            }
        }
        Err(e) => eprintln!("无法构建默认日志配置：{}", e),
    }
}

/// 读取 `[etag]` 配置节。配置文件不存在时使用默认配置，文件无效时返回错误。
fn load_config(path: &str) -> Result<ValidationConfig, Exception> {
    let config = match Config::from_toml(path) {
        Ok(config) => config,
        Err(Exception::ConfigRead { .. }) => {
            info!("未找到配置文件{}，使用默认ETag配置", path);
            Config::new()
        }
        Err(e) => return Err(e),
    };
    config.section::<ValidationConfig>()
}

fn file_last_modified(path: &Path) -> Option<String> {
    let modified: DateTime<Utc> = fs::metadata(path).ok()?.modified().ok()?.into();
    Some(format_http_date(&modified))
}

/// 读取文件，按命令行给出的校验标头构造请求，让它经过条件 GET 管线。
fn serve(cli: &Cli, config: Arc<ValidationConfig>) -> io::Result<Response> {
    let content = fs::read(&cli.file)?;
    debug!("已读取{}，共{}字节", cli.file.display(), content.len());

    let handler = FileHandler {
        content,
        last_modified: cli
            .last_modified
            .clone()
            .or_else(|| file_last_modified(&cli.file)),
    };

    let mut request = Request::new(cli.method, &cli.file.to_string_lossy());
    if let Some(value) = &cli.if_none_match {
        request = request.with_header(IF_NONE_MATCH, value);
    }
    if let Some(value) = &cli.if_modified_since {
        request = request.with_header(IF_MODIFIED_SINCE, value);
    }

    Ok(ConditionalGet::new(config).process(&request, &handler))
}

fn json_report(response: &Response) -> serde_json::Value {
    let headers: serde_json::Map<String, serde_json::Value> = response
        .headers()
        .iter()
        .map(|(k, v)| (k.to_string(), json!(v)))
        .collect();
    json!({
        "status": response.status_code(),
        "not_modified": response.status_code() == 304,
        "headers": headers,
        "body_length": response.body().len(),
    })
}

fn render(response: &Response, as_json: bool) -> String {
    if as_json {
        return json_report(response).to_string() + "\n";
    }
    let bytes = response.as_bytes();
    let head_len = bytes.len() - response.body().len();
    String::from_utf8_lossy(&bytes[..head_len]).into_owned()
}

fn run(cli: &Cli) -> ExitCode {
    let config = match load_config(&cli.config) {
        Ok(config) => Arc::new(config),
        Err(e) => {
            error!("ETag配置无效，拒绝启动：{}", e);
            return ExitCode::FAILURE;
        }
    };

    let response = match serve(cli, config) {
        Ok(response) => response,
        Err(e) => {
            error!("无法读取文件{}：{}", cli.file.display(), e);
            return ExitCode::FAILURE;
        }
    };

    print!("{}", render(&response, cli.json));
    ExitCode::SUCCESS
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(&cli.log_config);
    run(&cli)
}
