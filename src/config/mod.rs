use crate::errors::{AppError, AppResult};
use crate::models::ListOrder;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Environment variable pointing at an alternative config file.
pub const CONFIG_ENV: &str = "KAJILOG_CONFIG";

/// Display names of the two household members.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Members {
    #[serde(default = "default_member_a")]
    pub a: String,
    #[serde(default = "default_member_b")]
    pub b: String,
}

fn default_member_a() -> String {
    "ぴちゃん".to_string()
}
fn default_member_b() -> String {
    "みちゃん".to_string()
}

impl Default for Members {
    fn default() -> Self {
        Self {
            a: default_member_a(),
            b: default_member_b(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_database")]
    pub database: String,
    #[serde(default)]
    pub list_order: ListOrder,
    #[serde(default = "default_require_duration")]
    pub require_duration: bool,
    /// Person code ("A"/"B") used when `add` is called without `--person`.
    #[serde(default)]
    pub default_person: Option<String>,
    #[serde(default)]
    pub members: Members,
}

fn default_database() -> String {
    Config::database_file().to_string_lossy().to_string()
}
fn default_require_duration() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database: default_database(),
            list_order: ListOrder::default(),
            require_duration: default_require_duration(),
            default_person: None,
            members: Members::default(),
        }
    }
}

impl Config {
    /// Return the configuration directory (`~/.kajilog`)
    pub fn config_dir() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".kajilog")
    }

    /// Return the full path of the config file (`KAJILOG_CONFIG` overrides it)
    pub fn config_file() -> PathBuf {
        match std::env::var_os(CONFIG_ENV) {
            Some(p) if !p.is_empty() => PathBuf::from(p),
            _ => Self::config_dir().join("kajilog.conf"),
        }
    }

    /// Return the default path of the SQLite database
    pub fn database_file() -> PathBuf {
        Self::config_dir().join("kaji.sqlite")
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load() -> AppResult<Self> {
        Self::load_from(&Self::config_file())
    }

    pub fn load_from(path: &Path) -> AppResult<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)?;
        serde_yaml::from_str(&content)
            .map_err(|e| AppError::Config(format!("{}: {}", path.display(), e)))
    }

    pub fn to_yaml(&self) -> AppResult<String> {
        Ok(serde_yaml::to_string(self)?)
    }

    /// Initialize configuration directory, config file and database path.
    /// Returns the database path written into the configuration.
    pub fn init_all(custom_db: Option<&str>, is_test: bool) -> AppResult<PathBuf> {
        // Test mode: the database path is used as given, nothing is written.
        if is_test {
            return Ok(custom_db.map(PathBuf::from).unwrap_or_else(Self::database_file));
        }

        let dir = Self::config_dir();
        let db_path = match custom_db {
            Some(name) if Path::new(name).is_absolute() => PathBuf::from(name),
            Some(name) => dir.join(name),
            None => Self::database_file(),
        };

        fs::create_dir_all(&dir)?;
        let file = Self::config_file();
        if let Some(parent) = file.parent() {
            fs::create_dir_all(parent)?;
        }

        // Keep existing settings; only the database path is (re)written.
        let mut config = Self::load_from(&file)?;
        config.database = db_path.to_string_lossy().to_string();
        fs::write(&file, config.to_yaml()?)?;

        Ok(db_path)
    }
}
