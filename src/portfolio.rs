use std::cmp::Ordering;

use crate::types::{PortfolioSummary, TokenBalance};

/// How many ranked holdings a summary keeps.
pub const TOP_HOLDINGS: usize = 5;

/// Reduce a provider page to a ranked portfolio summary.
///
/// Pure function: no I/O, no logging, never errors. The total is computed
/// over the full input before ranking, so it reflects every returned token
/// and not just the top slice. Ranking is a stable descending sort on
/// `usd_value`; order among equal values follows provider order and is
/// otherwise unspecified.
pub fn summarize(
    tokens: Vec<TokenBalance>,
    wallet_address: &str,
    chain: &str,
    block_number: &str,
) -> PortfolioSummary {
    let token_count = tokens.len();
    let total_usd_value: f64 = tokens.iter().map(|t| t.usd_value).sum();

    let mut ranked = tokens;
    // usd_value is always finite after coercion, so the comparison is total.
    ranked.sort_by(|a, b| {
        b.usd_value
            .partial_cmp(&a.usd_value)
            .unwrap_or(Ordering::Equal)
    });
    ranked.truncate(TOP_HOLDINGS);

    PortfolioSummary {
        wallet_address: wallet_address.to_string(),
        chain: chain.to_string(),
        block_number: block_number.to_string(),
        token_count,
        total_usd_value,
        top_holdings: ranked,
    }
}

/// Render one ranked holding. Rank is 1-based.
pub fn format_holding_line(rank: usize, token: &TokenBalance) -> String {
    format!(
        "{}. {} — {} (≈ ${:.2} | {:.2}%)",
        rank,
        token.display_symbol(),
        token.display_balance(),
        token.usd_value,
        token.portfolio_percentage
    )
}
