// ABOUTME: Command-line tool exercising the forex gateway end to end
// ABOUTME: One subcommand per remote operation, plus the geo lookup
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Forex Gateway Project

//! Usage:
//! ```bash
//! # List all price records
//! forex-cli list
//!
//! # Fetch one record
//! forex-cli get 1
//!
//! # Create and update records
//! forex-cli create --name EURUSD --value 1.08
//! forex-cli update 1 --name EURUSD --value 1.10
//!
//! # Submit auth calls
//! forex-cli register --username alice --password hunter2
//! forex-cli login --username alice --password hunter2
//!
//! # Locate the caller (landing-page collaborator)
//! forex-cli geo
//!
//! # Point at a different backend
//! forex-cli --base-url http://10.0.0.2:8081 list
//! ```

use clap::{Parser, Subcommand};
use forex_gateway::config::GatewayConfig;
use forex_gateway::gateway::ApiGateway;
use forex_gateway::geo::GeoLocator;
use forex_gateway::logging::init_logging;
use forex_gateway::models::{Credentials, PriceRecord};

#[derive(Parser)]
#[command(
    name = "forex-cli",
    about = "Forex price backend client",
    long_about = "Command-line client for the forex price backend: price CRUD, auth submission, and visitor geolocation."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Backend base URL override (falls back to GATEWAY_BASE_URL, then the default)
    #[arg(long, global = true)]
    base_url: Option<String>,
}

#[derive(Subcommand)]
enum Command {
    /// List all price records
    List,
    /// Fetch a single price record by id
    Get {
        /// Record id
        id: i64,
    },
    /// Create a price record
    Create {
        /// Symbol or display name, e.g. EURUSD
        #[arg(long)]
        name: String,
        /// Quoted value
        #[arg(long)]
        value: f64,
    },
    /// Replace a price record wholesale
    Update {
        /// Record id
        id: i64,
        /// Symbol or display name, resupplied in full
        #[arg(long)]
        name: String,
        /// Quoted value
        #[arg(long)]
        value: f64,
    },
    /// Submit a registration
    Register {
        /// Account name
        #[arg(long)]
        username: String,
        /// Password
        #[arg(long)]
        password: String,
    },
    /// Submit a login
    Login {
        /// Account name
        #[arg(long)]
        username: String,
        /// Password
        #[arg(long)]
        password: String,
    },
    /// Look up the caller's coarse location
    Geo,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_logging("info");

    let cli = Cli::parse();
    let config = match cli.base_url {
        Some(url) => GatewayConfig::with_base_url(url)?,
        None => GatewayConfig::from_env()?,
    };
    let gateway = ApiGateway::with_config(&config);

    match cli.command {
        Command::List => {
            let prices = gateway.try_list_prices().await?;
            if prices.is_empty() {
                println!("no price records");
            }
            for record in prices {
                print_record(&record);
            }
        }
        Command::Get { id } => {
            let record = gateway.try_get_price_by_id(id).await?;
            print_record(&record);
        }
        Command::Create { name, value } => {
            gateway
                .try_create_price(&PriceRecord::new(0, name, value))
                .await?;
            println!("created");
        }
        Command::Update { id, name, value } => {
            gateway
                .try_update_price(id, &PriceRecord::new(id, name, value))
                .await?;
            println!("updated {id}");
        }
        Command::Register { username, password } => {
            gateway
                .try_register(&Credentials::new(username, password))
                .await?;
            println!("registered");
        }
        Command::Login { username, password } => {
            gateway
                .try_login(&Credentials::new(username, password))
                .await?;
            println!("logged in");
        }
        Command::Geo => {
            let location = GeoLocator::new().lookup().await?;
            let city = location.city.unwrap_or_else(|| "unknown city".to_owned());
            let country = location
                .country_name
                .unwrap_or_else(|| "unknown country".to_owned());
            println!("{} - {city}, {country}", location.ip);
        }
    }

    Ok(())
}

fn print_record(record: &PriceRecord) {
    println!("{:>6}  {:<12} {}", record.id, record.name, record.value);
}
