mod config;
mod error;
mod portfolio;
mod provider;
mod types;

pub use config::{Config, API_KEY_VAR, DEFAULT_ADDRESS, DEFAULT_CHAIN};
pub use error::{ConfigError, ProviderError};
pub use portfolio::{format_holding_line, summarize, TOP_HOLDINGS};
pub use provider::{FetchParams, MoralisProvider, TokenDataProvider};
pub use types::{coerce_numeric, PortfolioSummary, TokenBalance, WalletTokensResponse};

/// Fetch a wallet's token balances from a provider and reduce them to a
/// ranked summary. The one suspension point is the provider call; the
/// reduction itself is pure and never errors.
pub async fn fetch_portfolio(
    provider: &dyn TokenDataProvider,
    address: &str,
    chain: &str,
) -> Result<PortfolioSummary, ProviderError> {
    let response = provider.fetch_wallet_tokens(address, chain).await?;
    Ok(summarize(
        response.result,
        address,
        chain,
        &response.block_number,
    ))
}
