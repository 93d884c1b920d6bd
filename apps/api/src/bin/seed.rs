//! # Seed Data Generator
//!
//! Creates the admin account and a starter catalog of bikes and scooters.
//!
//! ## Usage
//! ```bash
//! # Use DATABASE_URL / ADMIN_EMAIL / ADMIN_PASSWORD from the environment or .env
//! cargo run -p ridehub-api --bin seed
//!
//! # Point at another database
//! cargo run -p ridehub-api --bin seed -- --db sqlite://data/dev.db
//! ```
//!
//! Running it twice is harmless: an existing admin account is kept and the
//! catalog is only filled when it is empty.

use std::env;

use anyhow::{bail, Context};

use ridehub_api::auth::hash_password;
use ridehub_api::ApiConfig;
use ridehub_core::{Money, NewUser, NewVehicle};
use ridehub_db::{Database, DbConfig};

/// Password used for the admin account when none is given.
const DEFAULT_ADMIN_PASSWORD: &str = "admin-change-me";

/// (name, vehicle_type, description, price per hour in cents)
const CATALOG: &[(&str, &str, &str, i64)] = &[
    ("City Bike", "bike", "Step-through frame, 3 gears, front basket", 500),
    ("Road Bike", "bike", "Lightweight aluminium frame, 18 gears", 800),
    ("Mountain Bike", "bike", "Front suspension, wide tyres", 900),
    ("E-Bike", "bike", "Pedal assist up to 25 km/h, 60 km range", 1200),
    ("Kick Scooter", "scooter", "Foldable, adult size", 300),
    ("E-Scooter", "scooter", "25 km/h top speed, 30 km range", 1000),
    ("Cargo Bike", "bike", "Front box for up to 80 kg", 1500),
];

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();

    let args: Vec<String> = env::args().collect();
    let mut config = ApiConfig::load().context("invalid configuration")?;
    let mut admin_password =
        env::var("ADMIN_PASSWORD").unwrap_or_else(|_| DEFAULT_ADMIN_PASSWORD.to_string());

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--db" | "-d" => {
                let Some(url) = args.get(i + 1) else {
                    bail!("--db needs a connection string");
                };
                config.database_url = url.clone();
                i += 1;
            }
            "--admin-password" => {
                let Some(password) = args.get(i + 1) else {
                    bail!("--admin-password needs a value");
                };
                admin_password = password.clone();
                i += 1;
            }
            "--help" | "-h" => {
                println!("RideHub Seed Data Generator");
                println!();
                println!("Usage: seed [OPTIONS]");
                println!();
                println!("Options:");
                println!("  -d, --db <URL>              Database URL (default: $DATABASE_URL)");
                println!("      --admin-password <PW>   Admin password (default: $ADMIN_PASSWORD)");
                println!("  -h, --help                  Show this help message");
                return Ok(());
            }
            other => bail!("unknown argument: {}", other),
        }
        i += 1;
    }

    println!("🌱 RideHub Seed Data Generator");
    println!("==============================");
    println!("Database: {}", config.database_url);
    println!();

    let db = Database::new(DbConfig::from_url(config.database_url.clone()))
        .await
        .context("cannot open database")?;

    println!("✓ Connected to database");
    println!("✓ Migrations applied");

    // Admin account
    let users = db.users();
    match users.get_by_email(&config.admin_email).await? {
        Some(admin) => println!("• Admin account already exists (id {})", admin.id),
        None => {
            if admin_password == DEFAULT_ADMIN_PASSWORD {
                println!("⚠ ADMIN_PASSWORD not set, using the development default");
            }
            let admin = users
                .insert(&NewUser {
                    username: "admin".to_string(),
                    email: config.admin_email.clone(),
                    full_name: Some("Administrator".to_string()),
                    password_hash: hash_password(&admin_password)?,
                })
                .await
                .context("cannot create admin account")?;
            println!("✓ Created admin account {} (id {})", admin.email, admin.id);
        }
    }

    // Catalog
    let vehicles = db.vehicles();
    let existing = vehicles.list().await?.len();
    if existing > 0 {
        println!("• Catalog already has {} vehicles, skipping", existing);
    } else {
        for (name, vehicle_type, description, cents) in CATALOG {
            vehicles
                .insert(&NewVehicle {
                    name: name.to_string(),
                    vehicle_type: vehicle_type.to_string(),
                    description: Some(description.to_string()),
                    price_per_hour: Money::from_cents(*cents),
                    available: true,
                })
                .await
                .with_context(|| format!("cannot insert {}", name))?;
            println!("  + {} ({}/h)", name, Money::from_cents(*cents));
        }
        println!("✓ Added {} vehicles", CATALOG.len());
    }

    db.close().await;
    println!();
    println!("Done.");
    Ok(())
}
