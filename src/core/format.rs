//! Locale-aware number formatting for table cells.

use serde::{Deserialize, Serialize};

/// Currency prefix for rate cells; pricing is quoted in USD
pub const CURRENCY_PREFIX: &str = "$";

/// Fractional digits shown for per-log rates
pub const RATE_DECIMALS: usize = 7;

/// Digit-grouping locale for the band columns
///
/// Rates always render in USD with a fixed fraction, so the locale only
/// drives the thousands separator of the bound columns.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    En,
    De,
    Fr,
    Es,
    Ja,
    Zh,
}

impl Locale {
    /// Thousands separator used by this locale
    pub fn separator(self) -> char {
        match self {
            Locale::De | Locale::Fr | Locale::Es => '.',
            Locale::En | Locale::Ja | Locale::Zh => ',',
        }
    }

    pub fn as_tag(self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::De => "de",
            Locale::Fr => "fr",
            Locale::Es => "es",
            Locale::Ja => "ja",
            Locale::Zh => "zh",
        }
    }

    /// Parse a locale tag; "us" is accepted as an alias for "en"
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag.to_ascii_lowercase().as_str() {
            "en" | "us" => Some(Locale::En),
            "de" => Some(Locale::De),
            "fr" => Some(Locale::Fr),
            "es" => Some(Locale::Es),
            "ja" => Some(Locale::Ja),
            "zh" => Some(Locale::Zh),
            _ => None,
        }
    }

    /// All supported tags, for CLI error messages
    pub fn tags() -> [&'static str; 6] {
        ["en", "de", "fr", "es", "ja", "zh"]
    }
}

/// Format a volume with the locale's thousands separator
pub fn group_digits(n: u64, locale: Locale) -> String {
    let digits = n.to_string();
    let len = digits.len();
    if len <= 3 {
        return digits;
    }

    let sep = locale.separator();
    let mut result = String::with_capacity(len + len / 3);

    let head = len % 3;
    if head > 0 {
        result.push_str(&digits[..head]);
        result.push(sep);
    }
    for (i, ch) in digits[head..].chars().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push(sep);
        }
        result.push(ch);
    }

    result
}

/// Format a per-log rate as a USD amount with a fixed fraction
pub fn format_rate(rate: f64) -> String {
    format!("{}{:.*}", CURRENCY_PREFIX, RATE_DECIMALS, rate)
}
