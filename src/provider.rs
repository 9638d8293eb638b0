use async_trait::async_trait;
use reqwest::header::ACCEPT;
use tracing::debug;

use crate::error::ProviderError;
use crate::types::WalletTokensResponse;

const MORALIS_BASE_URL: &str = "https://deep-index.moralis.io/api/v2.2";

/// Query parameters for the wallet-tokens endpoint.
#[derive(Debug, Clone)]
pub struct FetchParams {
    /// Page size; no pagination is performed beyond this single page.
    pub limit: u32,
    /// Ask the provider to drop holdings it flags as spam.
    pub exclude_spam: bool,
    /// Ask the provider to drop holdings from unverified contracts.
    pub exclude_unverified_contracts: bool,
}

impl Default for FetchParams {
    fn default() -> Self {
        Self {
            limit: 25,
            exclude_spam: true,
            exclude_unverified_contracts: true,
        }
    }
}

/// Seam between the aggregator and whatever serves token balances.
/// Implement this to back the summary with a different data source.
#[async_trait]
pub trait TokenDataProvider: Send + Sync {
    /// Fetch one page of native + ERC20 balances for a wallet on a chain.
    async fn fetch_wallet_tokens(
        &self,
        address: &str,
        chain: &str,
    ) -> Result<WalletTokensResponse, ProviderError>;
}

/// Moralis-backed provider issuing a single authenticated GET per call.
pub struct MoralisProvider {
    client: reqwest::Client,
    api_key: String,
    base_url: String,
    params: FetchParams,
}

impl MoralisProvider {
    pub fn new(api_key: String, params: FetchParams) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_key,
            base_url: MORALIS_BASE_URL.to_string(),
            params,
        }
    }
}

#[async_trait]
impl TokenDataProvider for MoralisProvider {
    async fn fetch_wallet_tokens(
        &self,
        address: &str,
        chain: &str,
    ) -> Result<WalletTokensResponse, ProviderError> {
        let url = format!("{}/wallets/{}/tokens", self.base_url, address);
        let limit = self.params.limit.to_string();

        debug!("GET {} chain={} limit={}", url, chain, limit);

        let response = self
            .client
            .get(&url)
            .query(&[
                ("chain", chain),
                ("limit", limit.as_str()),
                ("exclude_spam", bool_param(self.params.exclude_spam)),
                (
                    "exclude_unverified_contracts",
                    bool_param(self.params.exclude_unverified_contracts),
                ),
            ])
            .header(ACCEPT, "application/json")
            .header("X-API-Key", &self.api_key)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ProviderError::Status {
                status: status.as_u16(),
                reason: status.canonical_reason().unwrap_or("").to_string(),
                body,
            });
        }

        let parsed = response.json::<WalletTokensResponse>().await?;
        debug!(
            "provider returned {} holdings at block {}",
            parsed.result.len(),
            parsed.block_number
        );
        Ok(parsed)
    }
}

fn bool_param(value: bool) -> &'static str {
    if value {
        "true"
    } else {
        "false"
    }
}
