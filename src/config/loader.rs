use super::defaults::DEFAULT_CONFIG;
use super::types::Config;
use crate::debug_println;
use std::fs;
use std::path::PathBuf;

impl Config {
    /// Load configuration from the default location
    ///
    /// A missing file is not an error; it yields the defaults. A file that
    /// exists but fails to parse is.
    pub fn load() -> Result<Config, Box<dyn std::error::Error>> {
        let config_path = Self::config_path();

        if !config_path.exists() {
            debug_println!("No config at {}, using defaults", config_path.display());
            return Ok(Config::default());
        }

        let content = fs::read_to_string(config_path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Save configuration to the default location
    pub fn save(&self) -> Result<(), Box<dyn std::error::Error>> {
        let config_path = Self::config_path();

        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)?;
        fs::write(config_path, content)?;
        Ok(())
    }

    /// Default config file path (~/.config/ratecard/config.toml)
    fn config_path() -> PathBuf {
        if let Some(home) = dirs::home_dir() {
            home.join(".config").join("ratecard").join("config.toml")
        } else {
            PathBuf::from(".config/ratecard/config.toml")
        }
    }

    /// Create the config file with baseline defaults if it does not exist
    pub fn init() -> Result<(), Box<dyn std::error::Error>> {
        let config_path = Self::config_path();

        if !config_path.exists() {
            DEFAULT_CONFIG.save()?;
            println!("Created config at {}", config_path.display());
        } else {
            println!("Config already exists at {}", config_path.display());
        }

        Ok(())
    }

    /// Print configuration as TOML
    pub fn print(&self) -> Result<(), Box<dyn std::error::Error>> {
        let content = toml::to_string_pretty(self)?;
        println!("{}", content);
        Ok(())
    }
}
