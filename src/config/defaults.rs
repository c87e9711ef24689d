use super::types::{Config, OutputFormat};
use crate::core::Locale;

pub const DEFAULT_CONFIG: Config = Config {
    locale: Locale::En,
    format: OutputFormat::Table,
    color: true,
};

impl Default for Config {
    fn default() -> Self {
        let color = std::env::var("RATECARD_NO_COLOR").is_err();
        Config {
            locale: Locale::En,
            format: OutputFormat::Table,
            color,
        }
    }
}
