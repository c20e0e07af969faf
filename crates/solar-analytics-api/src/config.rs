use anyhow::{anyhow, Result};
use config::{Config, Environment, File, FileFormat};
use serde::Deserialize;
use std::path::Path;

/// 应用配置
#[derive(Debug, Deserialize, Clone, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub storage: StorageConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

/// 存储后端
#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum StorageBackend {
    /// 内存存储（进程退出即丢失）
    #[default]
    Memory,
    /// SeaORM 数据库
    Database,
}

#[derive(Debug, Deserialize, Clone)]
pub struct StorageConfig {
    #[serde(default)]
    pub backend: StorageBackend,
    #[serde(default = "default_database_url")]
    pub url: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
}

// 默认值函数
fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_database_url() -> String {
    "sqlite::memory:".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

// Default trait 实现
impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            backend: StorageBackend::default(),
            url: default_database_url(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

impl AppConfig {
    /// 加载配置
    ///
    /// 配置文件不存在时使用默认值，`SOLAR__` 前缀的环境变量覆盖文件配置，
    /// 例如 `SOLAR__SERVER__PORT=9090`。
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let mut builder = Config::builder();

        if path.exists() {
            builder = builder.add_source(File::new(
                path.to_str().ok_or_else(|| anyhow!("Invalid config path"))?,
                FileFormat::Toml,
            ));
        }

        let config = builder
            .add_source(
                Environment::with_prefix("SOLAR")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        let app_config: AppConfig = config.try_deserialize()?;
        app_config.validate()?;

        Ok(app_config)
    }

    /// 验证配置
    pub fn validate(&self) -> Result<()> {
        if self.server.port == 0 {
            return Err(anyhow!("server.port must be greater than 0"));
        }

        if self.storage.backend == StorageBackend::Database && self.storage.url.trim().is_empty() {
            return Err(anyhow!("storage.url is required for the database backend"));
        }

        Ok(())
    }

    /// 监听地址
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_load_default_config() {
        let temp_dir = tempdir().unwrap();
        let config = AppConfig::load(temp_dir.path().join("missing.toml")).unwrap();

        assert_eq!(config.server.port, 8080);
        assert_eq!(config.storage.backend, StorageBackend::Memory);
        assert_eq!(config.logging.level, "info");
        assert_eq!(config.bind_address(), "127.0.0.1:8080");
    }

    #[test]
    fn test_load_config_from_file() {
        let temp_dir = tempdir().unwrap();
        let config_path = temp_dir.path().join("config.toml");
        let config_content = r#"
[server]
host = "0.0.0.0"
port = 3000

[storage]
backend = "database"
url = "sqlite://solar.db?mode=rwc"

[logging]
level = "debug"
"#;
        fs::write(&config_path, config_content).unwrap();

        let config = AppConfig::load(&config_path).unwrap();
        assert_eq!(config.bind_address(), "0.0.0.0:3000");
        assert_eq!(config.storage.backend, StorageBackend::Database);
        assert_eq!(config.storage.url, "sqlite://solar.db?mode=rwc");
        assert_eq!(config.logging.level, "debug");
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let temp_dir = tempdir().unwrap();
        let config_path = temp_dir.path().join("config.toml");
        fs::write(&config_path, "[server]\nport = 9000\n").unwrap();

        let config = AppConfig::load(&config_path).unwrap();
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.port, 9000);
        assert_eq!(config.storage.backend, StorageBackend::Memory);
    }

    #[test]
    fn test_validate_config() {
        let mut config = AppConfig::default();
        assert!(config.validate().is_ok());

        config.server.port = 0;
        assert!(config.validate().is_err());

        let mut config = AppConfig::default();
        config.storage.backend = StorageBackend::Database;
        config.storage.url = String::new();
        assert!(config.validate().is_err());
    }
}
