use serde::de::DeserializeOwned;
use serde_derive::Deserialize;

use log::{info, warn};
use std::{fs, str::FromStr};

use crate::{
    exception::{Exception, Result},
    param::{Algorithm, Strength},
};

/// 可以从配置文件中按键名取出的配置节。
pub trait ConfigSection: Sized {
    /// 配置节在 TOML 中的表名，例如 `etag`。
    const KEY: &'static str;

    fn from_table(table: toml::Table) -> Result<Self>;
}

/// 只读的配置文档。
///
/// 各组件通过 [`Config::section`] 取出自己的那一节，而不是直接读取文件。
#[derive(Debug, Clone, Default)]
pub struct Config {
    table: toml::Table,
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_toml(filename: &str) -> Result<Self> {
        let str_val = fs::read_to_string(filename).map_err(|e| Exception::ConfigRead {
            path: filename.to_string(),
            source: e,
        })?;
        str_val.parse()
    }

    /// 取出一个配置节。配置节缺失时按空表处理，由各配置节自行填充默认值。
    pub fn section<T: ConfigSection>(&self) -> Result<T> {
        let table = match self.table.get(T::KEY) {
            Some(toml::Value::Table(t)) => t.clone(),
            Some(_) => {
                warn!("配置项[{}]不是一个表，将使用默认配置", T::KEY);
                toml::Table::new()
            }
            None => toml::Table::new(),
        };
        T::from_table(table)
    }

    /// 反序列化辅助函数，供 [`ConfigSection::from_table`] 的实现使用。
    pub fn deserialize_table<T: DeserializeOwned>(table: toml::Table) -> Result<T> {
        Ok(toml::Value::Table(table).try_into::<T>()?)
    }
}

impl FromStr for Config {
    type Err = Exception;

    fn from_str(str_val: &str) -> Result<Self> {
        let table: toml::Table = toml::from_str(str_val)?;
        Ok(Config { table })
    }
}

#[derive(Deserialize, Debug)]
struct RawValidationConfig {
    #[serde(default = "default_strength")]
    strength: String,
    #[serde(default = "default_algorithm")]
    algorithm: String,
    #[serde(default)]
    strict: bool,
}

fn default_strength() -> String {
    "strong".to_string()
}

fn default_algorithm() -> String {
    "sha256".to_string()
}

/// ETag 校验配置。启动时构建一次，之后只读共享。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ValidationConfig {
    strength: Strength,
    algorithm: Algorithm,
    strict: bool,
}

impl ValidationConfig {
    pub fn new(strength: Strength, algorithm: Algorithm) -> Self {
        Self {
            strength,
            algorithm,
            strict: false,
        }
    }

    /// 开启后，只要请求携带了 `If-None-Match`，就不再回退到 `If-Modified-Since`。
    pub fn with_strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }
}

impl ValidationConfig {
    pub fn strength(&self) -> Strength {
        self.strength
    }

    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    pub fn strict(&self) -> bool {
        self.strict
    }
}

impl ConfigSection for ValidationConfig {
    const KEY: &'static str = "etag";

    fn from_table(table: toml::Table) -> Result<Self> {
        let raw: RawValidationConfig = Config::deserialize_table(table)?;
        let config = Self {
            strength: raw.strength.parse()?,
            algorithm: raw.algorithm.parse()?,
            strict: raw.strict,
        };
        info!(
            "ETag配置已载入：strength={}, algorithm={}, strict={}",
            config.strength, config.algorithm, config.strict
        );
        Ok(config)
    }
}
