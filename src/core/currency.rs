use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Currency everything converts into
pub const TARGET_CURRENCY: &str = "LKR";

/// Code used when none is given or the given one is unknown
pub const FALLBACK_CURRENCY: &str = "USD";

/// Demo rates, LKR per unit
pub const DEFAULT_RATES: [(&str, f64); 10] = [
    ("USD", 307.50),
    ("EUR", 328.10),
    ("GBP", 390.25),
    ("JPY", 2.05),
    ("AUD", 202.40),
    ("CAD", 227.30),
    ("SGD", 226.90),
    ("INR", 3.70),
    ("CNY", 42.80),
    ("AED", 83.70),
];

/// Outcome of a conversion
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Conversion {
    pub code: String,
    pub amount: f64,
    pub rate: f64,
    pub result: f64,
}

impl Conversion {
    /// "Rs. 3,075.00"
    pub fn result_label(&self) -> String {
        format!("Rs. {}", format_grouped(self.result))
    }

    /// "1 USD = Rs. 307.50"
    pub fn rate_label(&self) -> String {
        format!("1 {} = Rs. {}", self.code, format_grouped(self.rate))
    }
}

/// Fixed-table converter into LKR
#[derive(Debug, Clone)]
pub struct CurrencyConverter {
    rates: BTreeMap<String, f64>,
}

impl CurrencyConverter {
    pub fn new(rates: BTreeMap<String, f64>) -> Self {
        let mut rates: BTreeMap<String, f64> = rates
            .into_iter()
            .map(|(code, rate)| (code.trim().to_uppercase(), rate))
            .collect();
        // Unknown codes resolve to the fallback rate, so it must exist
        if !rates.contains_key(FALLBACK_CURRENCY) {
            tracing::warn!("Rate table has no {} entry, using the built-in rate", FALLBACK_CURRENCY);
            rates.insert(FALLBACK_CURRENCY.to_string(), DEFAULT_RATES[0].1);
        }
        Self { rates }
    }

    pub fn rates(&self) -> &BTreeMap<String, f64> {
        &self.rates
    }

    pub fn supported_codes(&self) -> Vec<&str> {
        self.rates.keys().map(String::as_str).collect()
    }

    /// Convert `amount` of `code` into LKR
    ///
    /// An empty code means USD. An unknown code keeps its name in the result
    /// but uses the USD rate.
    pub fn convert(&self, code: &str, amount: f64) -> Conversion {
        let code = match code.trim() {
            "" => FALLBACK_CURRENCY.to_string(),
            other => other.to_uppercase(),
        };
        let rate = match self.rates.get(&code) {
            Some(rate) => *rate,
            None => {
                tracing::debug!("No rate for {}, falling back to {}", code, FALLBACK_CURRENCY);
                self.rates[FALLBACK_CURRENCY]
            }
        };

        Conversion {
            code,
            amount,
            rate,
            result: amount * rate,
        }
    }
}

impl Default for CurrencyConverter {
    fn default() -> Self {
        Self::new(
            DEFAULT_RATES
                .iter()
                .map(|(code, rate)| (code.to_string(), *rate))
                .collect(),
        )
    }
}

/// Parse a user-entered amount, treating anything unparseable as zero
pub fn parse_amount(raw: &str) -> f64 {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .unwrap_or(0.0)
}

/// Two decimals with comma thousands separators
pub fn format_grouped(value: f64) -> String {
    let formatted = format!("{:.2}", value.abs());
    let (whole, frac) = formatted.split_once('.').unwrap_or((formatted.as_str(), "00"));

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, ch) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let sign = if value < 0.0 && formatted != "0.00" { "-" } else { "" };
    format!("{}{}.{}", sign, grouped, frac)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_convert_known_code() {
        let converter = CurrencyConverter::default();
        let c = converter.convert("eur", 10.0);
        assert_eq!(c.code, "EUR");
        assert_eq!(c.rate, 328.10);
        assert!((c.result - 3281.0).abs() < 1e-9);
    }

    #[test]
    fn test_unknown_code_uses_usd_rate() {
        let converter = CurrencyConverter::default();
        let c = converter.convert("XYZ", 2.0);
        assert_eq!(c.code, "XYZ");
        assert_eq!(c.rate, 307.50);
    }

    #[test]
    fn test_empty_code_is_usd() {
        let converter = CurrencyConverter::default();
        assert_eq!(converter.convert("  ", 1.0).code, "USD");
    }

    #[test]
    fn test_parse_amount() {
        assert_eq!(parse_amount(" 12.5 "), 12.5);
        assert_eq!(parse_amount("abc"), 0.0);
        assert_eq!(parse_amount(""), 0.0);
        assert_eq!(parse_amount("NaN"), 0.0);
    }

    #[test]
    fn test_format_grouped() {
        assert_eq!(format_grouped(0.0), "0.00");
        assert_eq!(format_grouped(307.5), "307.50");
        assert_eq!(format_grouped(3075.0), "3,075.00");
        assert_eq!(format_grouped(1234567.891), "1,234,567.89");
        assert_eq!(format_grouped(-1500.0), "-1,500.00");
    }

    #[test]
    fn test_labels() {
        let converter = CurrencyConverter::default();
        let c = converter.convert("USD", 10.0);
        assert_eq!(c.result_label(), "Rs. 3,075.00");
        assert_eq!(c.rate_label(), "1 USD = Rs. 307.50");
    }

    #[test]
    fn test_missing_fallback_is_restored() {
        let mut rates = BTreeMap::new();
        rates.insert("eur".to_string(), 300.0);
        let converter = CurrencyConverter::new(rates);
        assert_eq!(converter.supported_codes(), vec!["EUR", "USD"]);
        assert_eq!(converter.convert("GBP", 1.0).rate, 307.50);
    }
}
