//! # Configuration State
//!
//! Display and session settings loaded when the editor opens.
//!
//! ## Configuration Sources (Priority Order)
//! 1. Environment variables (`PROPOSAL_*`)
//! 2. Defaults (this file)
//!
//! Configuration is read-only after initialization, so no mutex needed.

use proposal_core::{Money, DEFAULT_ITEM_CATEGORY};
use serde::{Deserialize, Serialize};

/// Editor configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EditorConfig {
    /// Currency symbol (for display)
    pub currency_symbol: String,

    /// Decimal places shown in formatted amounts, at most 2
    pub currency_decimals: u8,

    /// Category given to items whose form left the category blank
    pub default_item_category: String,

    /// Load the Bronze/Silver/Gold template into every new empty session
    pub seed_default_tiers: bool,
}

impl Default for EditorConfig {
    /// ## Default Values
    /// - Currency: `$`, two decimals
    /// - Item category: "General"
    /// - Tier seeding: off
    fn default() -> Self {
        EditorConfig {
            currency_symbol: "$".to_string(),
            currency_decimals: 2,
            default_item_category: DEFAULT_ITEM_CATEGORY.to_string(),
            seed_default_tiers: false,
        }
    }
}

impl EditorConfig {
    /// Creates a new EditorConfig from environment variables and defaults.
    ///
    /// ## Environment Variables
    /// - `PROPOSAL_CURRENCY_SYMBOL`: Override currency symbol
    /// - `PROPOSAL_CURRENCY_DECIMALS`: Decimal places, `0` to `2`
    /// - `PROPOSAL_DEFAULT_CATEGORY`: Override default item category
    /// - `PROPOSAL_SEED_TIERS`: `1`, `true` or `yes` to seed new sessions
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`EditorConfig::from_env`], reading variables through `lookup`.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = EditorConfig::default();

        if let Some(symbol) = lookup("PROPOSAL_CURRENCY_SYMBOL") {
            config.currency_symbol = symbol;
        }

        if let Some(decimals) = lookup("PROPOSAL_CURRENCY_DECIMALS") {
            if let Ok(decimals) = decimals.trim().parse::<u8>() {
                config.currency_decimals = decimals.min(2);
            }
        }

        if let Some(category) = lookup("PROPOSAL_DEFAULT_CATEGORY") {
            if !category.trim().is_empty() {
                config.default_item_category = category;
            }
        }

        if let Some(flag) = lookup("PROPOSAL_SEED_TIERS") {
            config.seed_default_tiers = matches!(
                flag.trim().to_ascii_lowercase().as_str(),
                "1" | "true" | "yes"
            );
        }

        config
    }

    /// Formats an amount with thousands separators.
    ///
    /// ## Example
    /// ```rust
    /// use proposal_core::Money;
    /// use proposal_editor::state::EditorConfig;
    ///
    /// let config = EditorConfig::default();
    /// assert_eq!(config.format_currency(Money::from_cents(123456)), "$1,234.56");
    /// ```
    pub fn format_currency(&self, amount: Money) -> String {
        let decimals = u32::from(self.currency_decimals.min(2));
        let cents = amount.cents().unsigned_abs();

        // Round half away from zero when showing fewer than two decimals.
        let scale = 10_u64.pow(2 - decimals);
        let scaled = cents / scale + u64::from(cents % scale >= scale / 2 && scale > 1);
        let unit = 10_u64.pow(decimals);
        let whole = group_thousands(scaled / unit);

        format!(
            "{}{}{}",
            if amount.is_negative() && scaled != 0 { "-" } else { "" },
            self.currency_symbol,
            if decimals > 0 {
                format!(
                    "{}.{:0width$}",
                    whole,
                    scaled % unit,
                    width = decimals as usize
                )
            } else {
                whole
            }
        )
    }
}

/// `1234567` → `"1,234,567"`.
fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);

    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    grouped
}
