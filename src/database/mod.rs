use mongodb::bson::doc;
use mongodb::{Client, Collection, Database};
use std::error::Error;

use crate::utils::config::AppConfig;

#[derive(Clone)]
pub struct MongoDB {
    db: Database,
}

impl MongoDB {
    pub async fn new(config: &AppConfig) -> Result<Self, Box<dyn Error>> {
        log::info!("Connecting to MongoDB at {}", config.mongodb_uri);

        let mut client_options = mongodb::options::ClientOptions::parse(&config.mongodb_uri).await?;

        // Connection pool
        client_options.max_pool_size = Some(20);
        client_options.min_pool_size = Some(5);
        client_options.max_idle_time = Some(std::time::Duration::from_secs(300));

        client_options.connect_timeout = Some(std::time::Duration::from_secs(5));
        client_options.server_selection_timeout = Some(std::time::Duration::from_secs(5));
        client_options.app_name = Some("placement-service".to_string());

        let client = Client::with_options(client_options)?;
        let db = client.database(&config.database_name);

        // Test connection
        db.list_collection_names().await?;

        log::info!(
            "Successfully connected to MongoDB database: {}",
            config.database_name
        );

        Ok(Self { db })
    }

    pub fn collection<T: Send + Sync>(&self, name: &str) -> Collection<T> {
        self.db.collection(name)
    }

    /// Check if the connection is healthy
    pub async fn health_check(&self) -> bool {
        match self.db.run_command(doc! { "ping": 1 }).await {
            Ok(_) => true,
            Err(e) => {
                log::warn!("⚠️  MongoDB ping failed: {}", e);
                false
            }
        }
    }
}
