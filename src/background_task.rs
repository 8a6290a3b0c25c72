use tokio::time::{interval, Duration};

use crate::repositories::{mongo_repo::MongoUserRepo, user::UserRepository};

pub async fn start_db_probe(repo: MongoUserRepo) {
    let mut interval = interval(Duration::from_secs(60));

    loop {
        interval.tick().await;

        match repo.check_connection().await {
            Ok(()) => tracing::debug!("Database probe ok"),
            Err(e) => tracing::warn!("Database probe failed: {}", e)
        }
    }
}
