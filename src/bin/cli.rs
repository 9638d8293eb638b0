use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use portfolio_checker::{
    fetch_portfolio, format_holding_line, Config, FetchParams, MoralisProvider, PortfolioSummary,
    ProviderError, DEFAULT_ADDRESS, DEFAULT_CHAIN,
};

#[derive(Parser, Debug)]
#[command(name = "portfolio-checker")]
#[command(about = "Summarize a wallet's token holdings and top positions by USD value", long_about = None)]
struct Args {
    /// Wallet address to query
    #[arg(short, long, default_value = DEFAULT_ADDRESS)]
    address: String,

    /// Chain to query (eth, polygon, bsc, ...)
    #[arg(short, long, default_value = DEFAULT_CHAIN)]
    chain: String,

    /// Page size requested from the provider
    #[arg(long, default_value_t = 25)]
    limit: u32,

    /// Keep holdings the provider flags as spam
    #[arg(long)]
    include_spam: bool,

    /// Keep holdings from unverified contracts
    #[arg(long)]
    include_unverified: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_target(false)
        .init();
    dotenvy::dotenv().ok();

    let args = Args::parse();

    // Refuse to run without a credential; no request is made.
    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    let provider = MoralisProvider::new(
        config.api_key,
        FetchParams {
            limit: args.limit,
            exclude_spam: !args.include_spam,
            exclude_unverified_contracts: !args.include_unverified,
        },
    );

    info!("Querying token balances for {} on {}", args.address, args.chain);

    match fetch_portfolio(&provider, &args.address, &args.chain).await {
        Ok(summary) => print_report(&summary),
        Err(ProviderError::Status {
            status,
            reason,
            body,
        }) => {
            // Non-2xx is reported with the raw body, no summary is printed.
            error!("Provider rejected the request: {} {}", status, reason);
            eprintln!("{}", body);
            std::process::exit(1);
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }

    Ok(())
}

fn print_report(summary: &PortfolioSummary) {
    println!("{}", "=".repeat(60));
    println!("Wallet: {}", summary.wallet_address);
    println!("Chain:  {}", summary.chain);
    println!("Block:  {}", summary.block_number);
    println!("Tokens found: {}", summary.token_count);
    println!(
        "Estimated portfolio value: ${:.2}",
        summary.total_usd_value
    );
    println!("{}", "=".repeat(60));
    println!();

    for (i, token) in summary.top_holdings.iter().enumerate() {
        println!("{}", format_holding_line(i + 1, token));
    }
}
