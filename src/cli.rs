use std::net::IpAddr;

use anyhow::Result;
use clap::Parser;

use pintpass_core::{
    entities::{BadgeKind, BadgeTier},
    repositories::{BadgeRepo as _, NewBadge},
};

const DEFAULT_DB_URL: &str = "pintpass.db";
const DB_POOL_SIZE: u32 = 8;

// name, description, threshold, tier
const DEFAULT_BADGE_CATALOG: &[(&str, &str, u64, BadgeTier)] = &[
    ("First Sip", "Complete your first check-in", 1, BadgeTier::Bronze),
    ("Brew Explorer", "Check in 5 times", 5, BadgeTier::Bronze),
    ("Enthusiast", "Check in 10 times", 10, BadgeTier::Silver),
    ("Connoisseur", "Check in 25 times", 25, BadgeTier::Gold),
];

#[derive(Debug, Parser)]
#[command(name = "pintpass", version, about = "Venue check-in passport server")]
struct Args {
    /// URL to the database
    #[arg(
        long = "db-url",
        value_name = "DATABASE_URL",
        env = "DATABASE_URL",
        default_value = DEFAULT_DB_URL
    )]
    db_url: String,

    /// The address to listen on
    #[arg(long, value_name = "ADDRESS", default_value = "127.0.0.1")]
    address: IpAddr,

    /// The port to listen on
    #[arg(short, long, value_name = "PORT", default_value_t = 6767)]
    port: u16,
}

pub fn run() -> Result<()> {
    dotenvy::dotenv().ok();
    env_logger::init();
    let args = Args::parse();

    let connections = pintpass_db_sqlite::Connections::init(&args.db_url, DB_POOL_SIZE)?;
    pintpass_db_sqlite::run_embedded_database_migrations(connections.exclusive()?);
    seed_badge_catalog(&connections)?;

    info!(
        "Starting pintpass v{} on {}:{}",
        env!("CARGO_PKG_VERSION"),
        args.address,
        args.port
    );
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;
    runtime.block_on(pintpass_webserver::run(
        connections,
        args.address,
        args.port,
        env!("CARGO_PKG_VERSION"),
    ));
    Ok(())
}

// Badges are reference data administered out of band; a fresh database
// starts from the built-in catalog.
fn seed_badge_catalog(connections: &pintpass_db_sqlite::Connections) -> Result<()> {
    let db = connections.exclusive()?;
    if db.count_badges()? > 0 {
        return Ok(());
    }
    info!("Seeding the default badge catalog");
    for &(name, description, threshold, tier) in DEFAULT_BADGE_CATALOG {
        db.create_badge(NewBadge {
            name: name.into(),
            description: description.into(),
            icon_url: format!(
                "https://img.pintpass.example/badges/{}.png",
                name.replace(' ', "-").to_lowercase()
            ),
            threshold,
            kind: BadgeKind::Checkins,
            tier,
        })?;
    }
    Ok(())
}
