mod types;

pub use types::*;

use crate::error::ConfigError;
use crate::ui::themes::ThemePresets;
use std::fs;
use std::path::{Path, PathBuf};

pub enum InitResult {
    Created(PathBuf),
    AlreadyExists(PathBuf),
}

impl Config {
    /// 配置文件路径: ~/.config/promptline/config.toml
    pub fn config_path() -> Result<PathBuf, ConfigError> {
        let home = dirs::home_dir().ok_or(ConfigError::NoHomeDir)?;
        Ok(home.join(".config").join("promptline").join("config.toml"))
    }

    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from_file(Self::config_path()?)
    }

    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<(), ConfigError> {
        if let Some(parent) = path.as_ref().parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, toml::to_string_pretty(self)?)?;
        Ok(())
    }

    pub fn init() -> Result<InitResult, ConfigError> {
        Self::init_at(Self::config_path()?)
    }

    pub fn init_at(path: PathBuf) -> Result<InitResult, ConfigError> {
        if path.exists() {
            return Ok(InitResult::AlreadyExists(path));
        }
        Self::default().save_to_file(&path)?;
        Ok(InitResult::Created(path))
    }

    pub fn print(&self) -> Result<(), ConfigError> {
        println!("{}", toml::to_string_pretty(self)?);
        Ok(())
    }

    pub fn check(&self) -> Result<(), ConfigError> {
        if self.modules.is_empty() {
            return Err(ConfigError::Invalid("modules must not be empty".to_string()));
        }

        for (i, id) in self.modules.iter().enumerate() {
            if self.modules[..i].contains(id) {
                return Err(ConfigError::Invalid(format!("duplicate module: {:?}", id)));
            }
        }

        if !ThemePresets::is_known(&self.theme) {
            return Err(ConfigError::Invalid(format!(
                "unknown theme '{}', expected one of: {}",
                self.theme,
                ThemePresets::names().join(", ")
            )));
        }

        if self.path_aliases.keys().any(|k| k.trim_matches('/').is_empty()) {
            return Err(ConfigError::Invalid(
                "path alias keys must not be empty".to_string(),
            ));
        }

        Ok(())
    }
}
