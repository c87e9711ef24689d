pub mod format;
pub mod row;
pub mod table;

pub use format::{format_rate, group_digits, Locale};
pub use row::{format_tier, PricingRow};
pub use table::{RateCard, RateCardExport, COLUMN_HEADERS};
