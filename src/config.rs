use serde::Deserialize;
use std::path::{Path, PathBuf};

const DEFAULT_PORT: u16 = 5000;
const DEFAULT_STORE: &str = "dramas.csv";
const DEFAULT_DRAMAS_DIR: &str = "Dramas";
const CONFIG_FILE_NAME: &str = "dramalist.toml";

/// On-disk config. Every key is optional; unknown keys are ignored.
#[derive(Deserialize, Default, Debug)]
pub struct FileConfig {
    pub port: Option<u16>,
    pub store: Option<PathBuf>,
    pub dramas_dir: Option<PathBuf>,
    pub localhost: Option<bool>,
}

#[derive(Debug)]
pub struct Config {
    pub port: u16,
    pub store: PathBuf,
    pub dramas_dir: PathBuf,
    pub localhost: bool,
}

impl Config {
    /// CLI beats config file beats built-in default.
    pub fn resolve(file: Option<FileConfig>, args: &crate::cli::Args) -> Self {
        let file = file.unwrap_or_default();
        Config {
            port: args.port.or(file.port).unwrap_or(DEFAULT_PORT),
            store: args
                .store
                .clone()
                .or(file.store)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_STORE)),
            dramas_dir: args
                .dramas_dir
                .clone()
                .or(file.dramas_dir)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_DRAMAS_DIR)),
            localhost: args.localhost || file.localhost.unwrap_or(false),
        }
    }

    pub fn bind_addr(&self) -> String {
        let host = if self.localhost { "127.0.0.1" } else { "0.0.0.0" };
        format!("{}:{}", host, self.port)
    }
}

pub fn find_config_file(explicit: Option<&Path>) -> Option<PathBuf> {
    if let Some(path) = explicit {
        return Some(path.to_owned());
    }
    let cwd_config = PathBuf::from(CONFIG_FILE_NAME);
    if cwd_config.exists() {
        return Some(cwd_config);
    }
    if let Some(config_dir) = dirs::config_dir() {
        let xdg_config = config_dir.join("dramalist").join("config.toml");
        if xdg_config.exists() {
            return Some(xdg_config);
        }
    }
    None
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),
}

pub fn load_config(path: &Path) -> Result<FileConfig, ConfigError> {
    let content = std::fs::read_to_string(path)?;
    let config: FileConfig = toml::from_str(&content)?;
    Ok(config)
}
