use crate::config::config::{AppConfig, UpstreamConfig};
use figment::{
    Figment,
    providers::{Env, Format, Toml},
};
use std::path::{Path, PathBuf};

/// 环境变量前缀
pub const ENV_PREFIX: &str = "MODELBOARD_";

/// 配置加载器
pub struct ConfigLoader;

impl ConfigLoader {
    /// 从默认路径加载配置
    ///
    /// 搜索路径：
    /// 1. ./config.toml
    /// 2. 环境变量（MODELBOARD_ 前缀，`__` 分隔层级）
    pub fn load() -> Result<AppConfig, figment::Error> {
        Self::load_from(default_config_path())
    }

    /// 从指定路径加载配置
    pub fn load_from(path: impl AsRef<Path>) -> Result<AppConfig, figment::Error> {
        Figment::new()
            .merge(Toml::file(path.as_ref()))
            .merge(Env::prefixed(ENV_PREFIX).split("__"))
            .extract()
    }

    /// 验证配置
    pub fn validate(config: &AppConfig) -> Result<(), ConfigValidationError> {
        if config.server.port == 0 {
            return Err(ConfigValidationError::InvalidPort);
        }

        Self::validate_upstream(&config.upstream)
    }

    fn validate_upstream(upstream: &UpstreamConfig) -> Result<(), ConfigValidationError> {
        if upstream.base_url.trim().is_empty() {
            return Err(ConfigValidationError::MissingBaseUrl);
        }

        match reqwest::Url::parse(&upstream.base_url) {
            Ok(url) if matches!(url.scheme(), "http" | "https") => Ok(()),
            Ok(url) => Err(ConfigValidationError::InvalidBaseUrl(format!(
                "unsupported scheme: {}",
                url.scheme()
            ))),
            Err(e) => Err(ConfigValidationError::InvalidBaseUrl(e.to_string())),
        }
    }
}

/// 配置验证错误
#[derive(thiserror::Error, Debug)]
pub enum ConfigValidationError {
    #[error("服务端口无效，必须大于 0")]
    InvalidPort,

    #[error("上游 API 地址未配置")]
    MissingBaseUrl,

    #[error("上游 API 地址无效: {0}")]
    InvalidBaseUrl(String),
}

/// 获取默认配置文件路径
pub fn default_config_path() -> PathBuf {
    PathBuf::from("config.toml")
}
