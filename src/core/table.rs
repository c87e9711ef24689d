use super::format::Locale;
use super::row::{format_tier, PricingRow, FREE_LABEL};
use crate::pricing::{PricingTier, TierTable};
use chrono::{DateTime, Utc};
use serde::Serialize;

/// Column headers, in display order
pub const COLUMN_HEADERS: [&str; 3] = ["Lower Band", "Upper Band", "Rate per log"];

/// Gap between columns in text output
const COLUMN_GAP: &str = "  ";

/// A fully formatted rate card: one row per tier, in table order
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RateCard {
    rows: Vec<PricingRow>,
}

impl RateCard {
    /// Format every tier of `table`, in table order
    ///
    /// Deterministic: the same table and locale always produce the same card.
    pub fn build(table: &TierTable, locale: Locale) -> Self {
        let rows = table
            .tiers()
            .iter()
            .enumerate()
            .map(|(index, tier)| format_tier(index, tier, locale))
            .collect();

        Self { rows }
    }

    /// Formatted rows, one per tier
    pub fn rows(&self) -> &[PricingRow] {
        &self.rows
    }

    /// Render as an aligned plain-text table
    ///
    /// Cells are padded before any styling is applied, so ANSI codes never
    /// skew the alignment. The last column is left unpadded to keep lines
    /// free of trailing spaces.
    pub fn render_text(&self, color: bool) -> String {
        let widths = self.column_widths();
        let mut out = String::new();

        out.push_str(&style_header(
            &format!("{:<w$}", COLUMN_HEADERS[0], w = widths[0]),
            color,
        ));
        out.push_str(COLUMN_GAP);
        out.push_str(&style_header(
            &format!("{:<w$}", COLUMN_HEADERS[1], w = widths[1]),
            color,
        ));
        out.push_str(COLUMN_GAP);
        out.push_str(&style_header(COLUMN_HEADERS[2], color));
        out.push('\n');

        let rule: Vec<String> = widths.iter().map(|width| "-".repeat(*width)).collect();
        out.push_str(&rule.join(COLUMN_GAP));

        for row in &self.rows {
            let rate = if row.rate == FREE_LABEL {
                style_free(&row.rate, color)
            } else {
                row.rate.clone()
            };

            out.push('\n');
            out.push_str(&format!(
                "{:<w0$}{gap}{:<w1$}{gap}{}",
                row.lower,
                row.upper,
                rate,
                w0 = widths[0],
                w1 = widths[1],
                gap = COLUMN_GAP
            ));
        }

        out
    }

    fn column_widths(&self) -> [usize; 3] {
        let mut widths = [
            COLUMN_HEADERS[0].chars().count(),
            COLUMN_HEADERS[1].chars().count(),
            COLUMN_HEADERS[2].chars().count(),
        ];
        for row in &self.rows {
            widths[0] = widths[0].max(row.lower.chars().count());
            widths[1] = widths[1].max(row.upper.chars().count());
            widths[2] = widths[2].max(row.rate.chars().count());
        }
        widths
    }
}

#[cfg(feature = "color")]
fn style_header(cell: &str, color: bool) -> String {
    if color {
        ansi_term::Style::new().bold().paint(cell).to_string()
    } else {
        cell.to_string()
    }
}

#[cfg(not(feature = "color"))]
fn style_header(cell: &str, _color: bool) -> String {
    cell.to_string()
}

#[cfg(feature = "color")]
fn style_free(cell: &str, color: bool) -> String {
    if color {
        ansi_term::Colour::Green.paint(cell).to_string()
    } else {
        cell.to_string()
    }
}

#[cfg(not(feature = "color"))]
fn style_free(cell: &str, _color: bool) -> String {
    cell.to_string()
}

/// Machine-readable export envelope for the JSON output mode
///
/// Carries both the raw tier data and the formatted rows so downstream
/// consumers can pick whichever view they need. `generated_at` stamps the
/// export; the card itself stays a pure function of the tier table.
#[derive(Debug, Serialize)]
pub struct RateCardExport<'a> {
    pub generated_at: DateTime<Utc>,
    pub columns: [&'static str; 3],
    pub tiers: &'a [PricingTier],
    pub rows: &'a [PricingRow],
}

impl<'a> RateCardExport<'a> {
    pub fn new(table: &'a TierTable, card: &'a RateCard) -> Self {
        Self {
            generated_at: Utc::now(),
            columns: COLUMN_HEADERS,
            tiers: table.tiers(),
            rows: card.rows(),
        }
    }
}
