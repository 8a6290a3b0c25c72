use anyhow::{anyhow, Context};
use mongodb::{bson::doc, Client, Database};
use tracing::info;
use std::time::Duration;

use crate::settings::AppConfig;

/// Connects and picks the working database. The driver connects lazily,
/// so a ping with exponential backoff is what actually proves the
/// deployment is reachable before the server starts taking requests.
pub async fn connect(config: &AppConfig) -> anyhow::Result<Database> {
    let client = Client::with_uri_str(&config.mongodb_uri)
        .await
        .context("Invalid MongoDB connection string")?;

    let db = match &config.database_name {
        Some(name) => client.database(name),
        None => client.default_database().ok_or_else(|| {
            anyhow!("No database in the connection string and no database_name configured")
        })?,
    };

    let max_retries = 5;
    let mut retry_count = 0;
    let mut wait_seconds = 2;

    loop {
        match db.run_command(doc! {"ping": 1}).await {
            Ok(_) => {
                info!("Database connection established.");
                return Ok(db);
            }
            Err(e) if retry_count < max_retries => {
                retry_count += 1;
                info!(
                    "Failed to connect to database (attempt {}/{}): {}. Retrying in {}s...",
                    retry_count, max_retries, e, wait_seconds);

                tokio::time::sleep(Duration::from_secs(wait_seconds)).await;

                wait_seconds *= 2; // Exponential backoff
            }
            Err(e) => return Err(e.into()),
        }
    }
}
