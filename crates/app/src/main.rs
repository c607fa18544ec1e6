use std::time::Duration;

use migration::{Migrator, MigratorTrait};
use server::TokenService;
use settings::{DEFAULT_BIND, DEFAULT_REQUEST_TIMEOUT_SECS};

mod settings;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let settings = settings::Settings::new()?;

    tracing_subscriber::fmt()
        .with_env_filter(format!(
            "tavola={level},server={level},engine={level},migration={level}",
            level = settings.app.level
        ))
        .init();

    let Some(server) = settings.server else {
        tracing::warn!("No server settings found, nothing to run");
        return Ok(());
    };

    tracing::info!("Found server settings...");
    let db = connect(&server.database).await?;

    let timeout = Duration::from_secs(
        server
            .request_timeout_secs
            .unwrap_or(DEFAULT_REQUEST_TIMEOUT_SECS),
    );
    let engine = engine::Engine::builder()
        .database(db)
        .request_timeout(timeout)
        .build()
        .await?;

    let tokens = TokenService::new(
        server.token_secret,
        ttl_hours(
            server
                .token_ttl_hours
                .unwrap_or(server::DEFAULT_TOKEN_TTL_HOURS),
            "token_ttl_hours",
        )?,
        ttl_hours(
            server
                .refresh_token_ttl_hours
                .unwrap_or(server::DEFAULT_REFRESH_TOKEN_TTL_HOURS),
            "refresh_token_ttl_hours",
        )?,
    );

    let bind = server.bind.unwrap_or_else(|| DEFAULT_BIND.to_string());
    server::run(engine, tokens, &bind, server.port).await;

    Ok(())
}

fn ttl_hours(hours: i64, key: &str) -> Result<chrono::Duration, String> {
    if hours <= 0 {
        return Err(format!("server.{key} must be > 0, got {hours}"));
    }
    chrono::Duration::try_hours(hours)
        .ok_or_else(|| format!("server.{key} is out of range: {hours}"))
}

async fn connect(
    config: &settings::Database,
) -> Result<sea_orm::DatabaseConnection, Box<dyn std::error::Error + Send + Sync>> {
    let database = sea_orm::Database::connect(config.url()).await?;
    Migrator::up(&database, None).await?;
    Ok(database)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ttl_in_range() {
        assert_eq!(ttl_hours(24, "token_ttl_hours"), Ok(chrono::Duration::hours(24)));
    }

    #[test]
    fn absurd_ttl_is_a_config_error() {
        assert!(ttl_hours(i64::MAX, "token_ttl_hours").is_err());
        assert!(ttl_hours(0, "refresh_token_ttl_hours").is_err());
    }
}
