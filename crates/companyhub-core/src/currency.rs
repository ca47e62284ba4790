//! Money display formatting
//!
//! The single policy every money value is routed through before it reaches
//! the screen. The policy (symbol, decimal places, digit grouping) comes from
//! the `currency` section of the configuration.

use companyhub_config::{CurrencyConfig, Grouping, SymbolPosition};
use companyhub_utils::{format_number, format_number_indian};
use rust_decimal::Decimal;

/// Format a money amount according to the currency policy
///
/// With the default policy (INR, zero decimal places, Indian grouping):
/// `104500 -> "₹1,04,500"`. Negative values carry the sign before the symbol.
pub fn format_currency(amount: Decimal, config: &CurrencyConfig) -> String {
    let rounded = amount.round_dp(config.decimal_places);
    let negative = rounded.is_sign_negative() && !rounded.is_zero();
    let abs = rounded.abs();

    let places = config.decimal_places as usize;
    let text = format!("{:.*}", places, abs);
    let (int_part, frac_part) = match text.split_once('.') {
        Some((int, frac)) => (int, Some(frac)),
        None => (text.as_str(), None),
    };

    let mut value = match config.grouping {
        Grouping::Indian => format_number_indian(int_part),
        Grouping::Western => format_number(int_part),
    };
    if let Some(frac) = frac_part {
        value.push('.');
        value.push_str(frac);
    }

    let formatted = match config.symbol_position {
        SymbolPosition::Before => format!("{}{}", config.symbol, value),
        SymbolPosition::After => format!("{} {}", value, config.symbol),
    };

    if negative {
        format!("-{}", formatted)
    } else {
        formatted
    }
}

// ==================== Tests ====================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_default_policy() {
        let config = CurrencyConfig::default();
        assert_eq!(format_currency(Decimal::from(104500), &config), "₹1,04,500");
        assert_eq!(format_currency(Decimal::from(150000), &config), "₹1,50,000");
        assert_eq!(format_currency(Decimal::from(999), &config), "₹999");
        assert_eq!(format_currency(Decimal::ZERO, &config), "₹0");
    }

    #[test]
    fn test_format_negative() {
        let config = CurrencyConfig::default();
        assert_eq!(
            format_currency(Decimal::from(-45500), &config),
            "-₹45,500"
        );
    }

    #[test]
    fn test_format_rounds_to_policy_places() {
        let config = CurrencyConfig::default();
        // zero decimal places: fractional paise round to the nearest rupee
        assert_eq!(
            format_currency(Decimal::new(1045005, 1), &config), // 104500.5
            "₹1,04,501"
        );
    }

    #[test]
    fn test_format_western_grouping_with_decimals() {
        let config = CurrencyConfig {
            currency: "USD".to_string(),
            symbol: "$".to_string(),
            decimal_places: 2,
            grouping: Grouping::Western,
            symbol_position: SymbolPosition::Before,
        };
        assert_eq!(format_currency(Decimal::from(104500), &config), "$104,500.00");
        assert_eq!(
            format_currency(Decimal::new(123456, 1), &config), // 12345.6
            "$12,345.60"
        );
    }

    #[test]
    fn test_format_symbol_after() {
        let config = CurrencyConfig {
            currency: "EUR".to_string(),
            symbol: "€".to_string(),
            decimal_places: 0,
            grouping: Grouping::Western,
            symbol_position: SymbolPosition::After,
        };
        assert_eq!(format_currency(Decimal::from(104500), &config), "104,500 €");
    }
}
