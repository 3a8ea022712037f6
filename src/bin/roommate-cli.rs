use std::path::PathBuf;
use std::sync::Arc;

use clap::{Parser, Subcommand};
use serde::Serialize;
use uuid::Uuid;

use roommate_client::api::filter_stations;
use roommate_client::config::load_config_with_endpoint;
use roommate_client::host::feedback::launch;
use roommate_client::host::{poll_until_ready, HostSlot, StaticHostRuntime};
use roommate_client::loaders::{
    contact_match, like_listing, load_candidates, load_liked_listings, load_listings, load_listings_near,
    load_match_listings, load_matches, load_profile, Contact, Coordinates, PriceFilter,
};
use roommate_client::observability::logging;
use roommate_client::RequestClient;

#[derive(Parser)]
#[command(name = "roommate-cli")]
#[command(about = "Command-line client for the roommate matching backend", long_about = None)]
struct Cli {
    /// TOML configuration file.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Base endpoint, overriding the configuration.
    #[arg(short, long)]
    url: Option<String>,

    /// Raw session data to authenticate with.
    #[arg(long, env = "ROOMMATE_INIT_DATA", hide_env_values = true)]
    init_data: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Wait for the host runtime and show the credential state requests would use
    AuthStatus,
    /// Show the current user's profile
    Me,
    /// List candidate profiles
    Candidates {
        #[arg(short, long)]
        limit: Option<u32>,
    },
    /// Like a user
    LikeUser { user_id: Uuid },
    /// List mutual matches
    Matches,
    /// Listings liked by a matched user
    MatchListings { user_id: Uuid },
    /// Open a chat with a matched user, or show their contact summary
    Contact { user_id: Uuid },
    /// Listings for the current user, falling back to an unfiltered search
    Listings,
    /// Listings around a point
    Nearby {
        #[arg(long)]
        lat: Option<f64>,
        #[arg(long)]
        lon: Option<f64>,
        /// Radius in meters
        #[arg(long)]
        radius: Option<u32>,
        #[arg(long)]
        price_min: Option<u32>,
        #[arg(long)]
        price_max: Option<u32>,
    },
    /// Like a listing
    LikeListing { listing_id: Uuid },
    /// Listings the current user liked
    Liked,
    /// Metro stations, optionally filtered
    Stations { query: Option<String> },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let config = load_config_with_endpoint(cli.config.as_deref(), cli.url)?;
    logging::init(&config.observability.log_level);

    let slot = HostSlot::empty();
    if let Some(init_data) = cli.init_data {
        slot.install(Arc::new(StaticHostRuntime::new(Some(init_data))));
    }
    launch(&slot);

    let client = RequestClient::from_config(&config, Arc::new(slot))?;
    let loading = &config.loading;

    match cli.command {
        Commands::AuthStatus => {
            let readiness = poll_until_ready(client.host(), config.host.poll_interval(), config.host.ready_timeout()).await;
            println!("base endpoint: {}", client.base_endpoint());
            println!("host runtime: {:?}", readiness);
            println!("credential state: {}", client.credential_state().name());
        }
        Commands::Me => match load_profile(&client).await?.into_inner() {
            Some(profile) => print_json(&profile)?,
            None => println!("No profile yet"),
        },
        Commands::Candidates { limit } => {
            let candidates = load_candidates(&client, limit.unwrap_or(loading.candidate_limit)).await?;
            print_json(&candidates.data)?;
        }
        Commands::LikeUser { user_id } => print_json(&client.users().like(user_id).await?)?,
        Commands::Matches => print_json(&load_matches(&client).await?.data)?,
        Commands::MatchListings { user_id } => print_json(&load_match_listings(&client, user_id).await.data)?,
        Commands::Contact { user_id } => {
            let matches = load_matches(&client).await?.into_inner();
            match matches.iter().find(|m| m.user.id == user_id) {
                Some(found) => match contact_match(&client, &found.user) {
                    Contact::Chat(url) => println!("{}", url),
                    Contact::Summary(summary) => println!("{}", summary),
                },
                None => println!("No match with user {}", user_id),
            }
        }
        Commands::Listings => {
            let loaded = load_listings(&client, loading.listings_fallback_limit).await?;
            tracing::info!(source = ?loaded.source, count = loaded.data.len(), "Listings loaded");
            print_json(&loaded.data)?;
        }
        Commands::Nearby { lat, lon, radius, price_min, price_max } => {
            let fallback = Coordinates::from(&config.geolocation);
            let at = Coordinates {
                lat: lat.unwrap_or(fallback.lat),
                lon: lon.unwrap_or(fallback.lon),
            };
            let price = PriceFilter { min: price_min, max: price_max };
            let loaded = load_listings_near(
                &client,
                at,
                radius.unwrap_or(loading.map_radius_m),
                price,
                loading.map_fallback_limit,
            )
            .await?;
            print_json(&loaded.data)?;
        }
        Commands::LikeListing { listing_id } => print_json(&like_listing(&client, listing_id).await?)?,
        Commands::Liked => print_json(&load_liked_listings(&client).await?.data)?,
        Commands::Stations { query } => {
            let stations = client.metro().stations().await?;
            let names = filter_stations(&stations, query.as_deref().unwrap_or(""), stations.len());
            print_json(&names)?;
        }
    }

    Ok(())
}

fn print_json<T: Serialize>(value: &T) -> Result<(), serde_json::Error> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
