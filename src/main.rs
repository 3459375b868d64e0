use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, EnvFilter};

use lightbnb::components::{create_listing, ListingCard};
use lightbnb::properties::DEFAULT_LIMIT;
use lightbnb::{PropertySearch, Settings, Store};

#[derive(Parser, Debug)]
#[command(name = "lightbnb", version, about = "Browse LightBnB listings")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Search reviewed properties, cheapest first
    Properties {
        #[arg(long)]
        city: Option<String>,
        #[arg(long)]
        owner_id: Option<i32>,
        /// Minimum nightly price in dollars (needs --max-price)
        #[arg(long)]
        min_price: Option<i32>,
        /// Maximum nightly price in dollars (needs --min-price)
        #[arg(long)]
        max_price: Option<i32>,
        #[arg(long, default_value_t = DEFAULT_LIMIT)]
        limit: i64,
    },
    /// List a guest's reservations
    Reservations {
        #[arg(long)]
        guest_id: i32,
        /// Accepted, but at most 10 reservations are returned
        #[arg(long, default_value_t = DEFAULT_LIMIT)]
        limit: i64,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt().with_env_filter(env_filter).with_writer(std::io::stderr).init();

    let cli = Cli::parse();

    let settings = Settings::from_env().context("invalid configuration")?;
    let store = Store::open(&settings).context("failed to open store")?;

    let result = run(&store, cli.command).await;
    store.close();
    result
}

async fn run(store: &Store, command: Command) -> anyhow::Result<()> {
    match command {
        Command::Properties {
            city,
            owner_id,
            min_price,
            max_price,
            limit,
        } => {
            let search = PropertySearch {
                owner_id,
                minimum_price_per_night: min_price,
                maximum_price_per_night: max_price,
                city,
            };
            let listings = store
                .get_all_properties(&search, limit)
                .await
                .context("property search failed")?;

            for listing in &listings {
                println!("{}", create_listing(&ListingCard::from(listing), false)?);
            }
            tracing::info!(count = listings.len(), "Rendered properties");
        }
        Command::Reservations { guest_id, limit } => {
            let reservations = store
                .get_all_reservations(guest_id, limit)
                .await
                .context("reservation lookup failed")?;

            for reservation in &reservations {
                println!("{}", create_listing(&ListingCard::from(reservation), true)?);
            }
            tracing::info!(count = reservations.len(), guest_id, "Rendered reservations");
        }
    }
    Ok(())
}
