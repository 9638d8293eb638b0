use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// One token holding as returned by the data provider.
///
/// The provider is loose about numeric fields: `usd_value` and
/// `portfolio_percentage` may arrive as a JSON number, a numeric string,
/// null, or not at all. Both are coerced to a finite `f64` at
/// deserialization time so downstream code never re-parses them.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TokenBalance {
    pub symbol: Option<String>,
    pub name: Option<String>,
    pub token_address: Option<String>,
    pub decimals: Option<u8>,
    pub balance: Option<String>,
    pub balance_formatted: Option<String>,
    #[serde(default, deserialize_with = "coerce_f64")]
    pub usd_value: f64,
    #[serde(default, deserialize_with = "coerce_f64")]
    pub portfolio_percentage: f64,
    pub possible_spam: Option<bool>,
    pub verified_contract: Option<bool>,
    pub native_token: Option<bool>,
}

impl TokenBalance {
    /// Ticker for display: falls back to "UNKNOWN" when the provider sent
    /// no symbol or an empty one.
    pub fn display_symbol(&self) -> &str {
        match self.symbol.as_deref() {
            Some(s) if !s.is_empty() => s,
            _ => "UNKNOWN",
        }
    }

    /// Balance for display: human-scaled value when present and non-empty,
    /// else the raw smallest-unit balance, else empty.
    pub fn display_balance(&self) -> &str {
        match self.balance_formatted.as_deref() {
            Some(s) if !s.is_empty() => s,
            _ => self.balance.as_deref().unwrap_or(""),
        }
    }
}

/// Successful provider response for the wallet-tokens endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct WalletTokensResponse {
    /// Holdings for the page; the provider may omit the field entirely.
    #[serde(default)]
    pub result: Vec<TokenBalance>,
    /// Opaque block identifier, displayed verbatim.
    #[serde(default, deserialize_with = "coerce_display_string")]
    pub block_number: String,
}

/// Derived per-invocation summary. Constructed once, never mutated.
#[derive(Debug, Clone, Serialize)]
pub struct PortfolioSummary {
    pub wallet_address: String,
    pub chain: String,
    pub block_number: String,
    pub token_count: usize,
    /// Sum over ALL returned tokens, not just the ranked top slice.
    pub total_usd_value: f64,
    /// At most five holdings, descending by `usd_value`.
    pub top_holdings: Vec<TokenBalance>,
}

/// Coerce a loosely-typed provider value to a finite `f64`.
///
/// Numbers pass through unchanged, numeric strings are parsed, and
/// everything else (null, absent, garbage, non-finite) becomes `0.0`.
pub fn coerce_numeric(value: &Value) -> f64 {
    let parsed = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    };
    parsed.filter(|f| f.is_finite()).unwrap_or(0.0)
}

fn coerce_f64<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(coerce_numeric(&value))
}

/// Block numbers arrive as either a JSON string or a bare number.
fn coerce_display_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::String(s) => Ok(s),
        Value::Number(n) => Ok(n.to_string()),
        _ => Ok(String::new()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn coerce_passes_numbers_through() {
        assert_eq!(coerce_numeric(&json!(1000.5)), 1000.5);
        assert_eq!(coerce_numeric(&json!(0)), 0.0);
        assert_eq!(coerce_numeric(&json!(-3.25)), -3.25);
    }

    #[test]
    fn coerce_parses_numeric_strings() {
        assert_eq!(coerce_numeric(&json!("1500.75")), 1500.75);
        assert_eq!(coerce_numeric(&json!(" 42 ")), 42.0);
    }

    #[test]
    fn coerce_falls_back_to_zero() {
        assert_eq!(coerce_numeric(&Value::Null), 0.0);
        assert_eq!(coerce_numeric(&json!("not a number")), 0.0);
        assert_eq!(coerce_numeric(&json!("")), 0.0);
        assert_eq!(coerce_numeric(&json!({"nested": true})), 0.0);
        assert_eq!(coerce_numeric(&json!(["1"])), 0.0);
    }

    #[test]
    fn coerce_is_idempotent_on_coerced_output() {
        let once = coerce_numeric(&json!("123.45"));
        let twice = coerce_numeric(&json!(once));
        assert_eq!(once, twice);
    }

    #[test]
    fn token_deserializes_with_string_usd_value() {
        let token: TokenBalance = serde_json::from_value(json!({
            "symbol": "USDC",
            "balance": "2500000",
            "balance_formatted": "2.5",
            "usd_value": "2.50",
            "portfolio_percentage": "0.12"
        }))
        .unwrap();

        assert_eq!(token.usd_value, 2.5);
        assert_eq!(token.portfolio_percentage, 0.12);
    }

    #[test]
    fn token_deserializes_with_missing_numeric_fields() {
        let token: TokenBalance = serde_json::from_value(json!({
            "symbol": "DUST",
            "balance": "1"
        }))
        .unwrap();

        assert_eq!(token.usd_value, 0.0);
        assert_eq!(token.portfolio_percentage, 0.0);
    }

    #[test]
    fn token_deserializes_with_null_usd_value() {
        let token: TokenBalance = serde_json::from_value(json!({
            "symbol": "X",
            "usd_value": null
        }))
        .unwrap();

        assert_eq!(token.usd_value, 0.0);
    }

    #[test]
    fn display_symbol_falls_back_to_unknown() {
        let mut token = TokenBalance::default();
        assert_eq!(token.display_symbol(), "UNKNOWN");

        token.symbol = Some(String::new());
        assert_eq!(token.display_symbol(), "UNKNOWN");

        token.symbol = Some("ETH".to_string());
        assert_eq!(token.display_symbol(), "ETH");
    }

    #[test]
    fn display_balance_prefers_formatted() {
        let token = TokenBalance {
            balance: Some("1000000000000000000".to_string()),
            balance_formatted: Some("1.0".to_string()),
            ..Default::default()
        };
        assert_eq!(token.display_balance(), "1.0");
    }

    #[test]
    fn display_balance_falls_back_to_raw_then_empty() {
        let token = TokenBalance {
            balance: Some("123".to_string()),
            balance_formatted: Some(String::new()),
            ..Default::default()
        };
        assert_eq!(token.display_balance(), "123");

        assert_eq!(TokenBalance::default().display_balance(), "");
    }

    #[test]
    fn response_treats_missing_result_as_empty() {
        let response: WalletTokensResponse =
            serde_json::from_value(json!({ "block_number": "21034567" })).unwrap();

        assert!(response.result.is_empty());
        assert_eq!(response.block_number, "21034567");
    }

    #[test]
    fn response_accepts_numeric_block_number() {
        let response: WalletTokensResponse = serde_json::from_value(json!({
            "result": [],
            "block_number": 21034567
        }))
        .unwrap();

        assert_eq!(response.block_number, "21034567");
    }
}
