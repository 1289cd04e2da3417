use serde::Deserialize;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub calculator: CalculatorConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Каталог со сборкой frontend
    #[serde(default = "default_static_dir")]
    pub static_dir: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    pub dir: String,
    /// Фильтр по умолчанию, если не задан RUST_LOG
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            dir: "target/logs".into(),
            level: "info".into(),
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct CalculatorConfig {
    /// Максимум товаров в одном пакетном расчете
    pub max_batch_size: usize,
}

impl Default for CalculatorConfig {
    fn default() -> Self {
        Self {
            max_batch_size: 500,
        }
    }
}

fn default_static_dir() -> String {
    "dist".into()
}

impl ServerConfig {
    pub fn socket_addr(&self) -> anyhow::Result<SocketAddr> {
        format!("{}:{}", self.host, self.port)
            .parse::<SocketAddr>()
            .map_err(|e| anyhow::anyhow!("invalid server address {}:{}: {e}", self.host, self.port))
    }
}

/// Откуда загружена конфигурация
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigSource {
    File(PathBuf),
    Embedded,
}

/// Default configuration embedded in the binary
const DEFAULT_CONFIG: &str = r#"
[server]
host = "0.0.0.0"
port = 3000
static_dir = "dist"

[logging]
dir = "target/logs"
level = "info"

[calculator]
max_batch_size = 500
"#;

/// Load configuration from config.toml file
///
/// Search order:
/// 1. Next to the executable (for production)
/// 2. Falls back to embedded default config
///
/// Вызывается до инициализации tracing, поэтому источник возвращается
/// вызывающему для логирования.
pub fn load_config() -> anyhow::Result<(Config, ConfigSource)> {
    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            let config_path = exe_dir.join("config.toml");
            if config_path.exists() {
                let config = load_from_path(&config_path)?;
                return Ok((config, ConfigSource::File(config_path)));
            }
        }
    }

    Ok((parse_config(DEFAULT_CONFIG)?, ConfigSource::Embedded))
}

pub fn load_from_path(path: &Path) -> anyhow::Result<Config> {
    let contents = std::fs::read_to_string(path)?;
    parse_config(&contents)
        .map_err(|e| anyhow::anyhow!("failed to parse {}: {e}", path.display()))
}

fn parse_config(contents: &str) -> anyhow::Result<Config> {
    let config: Config = toml::from_str(contents)?;
    if config.calculator.max_batch_size == 0 {
        anyhow::bail!("calculator.max_batch_size must be greater than zero");
    }
    Ok(config)
}

/// Каталог логов. Относительный путь считается от текущего каталога.
pub fn get_log_dir(config: &Config) -> PathBuf {
    PathBuf::from(&config.logging.dir)
}
