use std::fs::File;
use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::{Context, Result};
use till::bank::Bank;
use till::server::{self, accounts_csv};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

const DEFAULT_PORT: u16 = 4567;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "till=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let mut args = std::env::args().skip(1);
    let filename = args
        .next()
        .context("Expected an accounts CSV file as the first argument")?;
    let port = match args.next() {
        Some(text) => text
            .parse()
            .with_context(|| format!("Invalid port `{text}`"))?,
        None => DEFAULT_PORT,
    };

    let file = File::open(&filename).with_context(|| format!("Failed to open `{filename}`"))?;
    let accounts = accounts_csv::load_accounts(file)?;
    let bank = Bank::new(accounts)?;

    server::serve(Arc::new(bank), SocketAddr::from(([0, 0, 0, 0], port))).await
}
