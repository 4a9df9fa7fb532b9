use std::time::Duration;

use mongodb::{Client, Database, bson::doc};
use tokio::time::sleep;
use tracing::{debug, info, warn};

use super::{
    config::MongoConfig,
    error::{MongoDaoError, MongoResult},
};

/// Pings attempted before the football database is reported unreachable.
const PING_ATTEMPTS: u32 = 10;
const FIRST_PING_DELAY: Duration = Duration::from_millis(250);
const MAX_PING_DELAY: Duration = Duration::from_secs(5);

/// Pause before ping number `attempt + 1`, doubling up to [`MAX_PING_DELAY`].
fn ping_delay(attempt: u32) -> Duration {
    FIRST_PING_DELAY
        .saturating_mul(1 << attempt.saturating_sub(1).min(16))
        .min(MAX_PING_DELAY)
}

/// Open a client on the configured matchday database and wait until it answers `ping`.
pub async fn establish_connection(config: &MongoConfig) -> MongoResult<(Client, Database)> {
    let client = Client::with_options(config.options.clone())
        .map_err(|source| MongoDaoError::ClientConstruction { source })?;
    let database = client.database(&config.database_name);

    let mut attempt = 0;
    loop {
        attempt += 1;
        match database.run_command(doc! { "ping": 1 }).await {
            Ok(_) => {
                info!(
                    backend = "mongodb",
                    database = %config.database_name,
                    attempt,
                    "football store reachable"
                );
                return Ok((client, database));
            }
            Err(err) if attempt >= PING_ATTEMPTS => {
                warn!(
                    backend = "mongodb",
                    database = %config.database_name,
                    attempts = attempt,
                    error = %err,
                    "football store unreachable; giving up"
                );
                return Err(MongoDaoError::InitialPing {
                    attempts: attempt,
                    source: err,
                });
            }
            Err(err) => {
                let delay = ping_delay(attempt);
                debug!(
                    backend = "mongodb",
                    database = %config.database_name,
                    attempt,
                    retry_in_ms = delay.as_millis() as u64,
                    error = %err,
                    "football store ping failed; retrying"
                );
                sleep(delay).await;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ping_delay_doubles_then_caps() {
        assert_eq!(ping_delay(1), Duration::from_millis(250));
        assert_eq!(ping_delay(2), Duration::from_millis(500));
        assert_eq!(ping_delay(3), Duration::from_millis(1000));
        assert_eq!(ping_delay(6), MAX_PING_DELAY);
        assert_eq!(ping_delay(PING_ATTEMPTS), MAX_PING_DELAY);
    }
}
