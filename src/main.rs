mod api;
mod database;
mod middleware;
mod models;
mod repository;
mod services;
mod utils;

use actix_cors::Cors;
use actix_web::{middleware::{Compress, Logger}, web, App, HttpServer};
use dotenv::dotenv;
use std::sync::Arc;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::repository::{MongoUserRepository, UserRepository};
use crate::utils::config::AppConfig;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load environment variables
    dotenv().ok();

    // Initialize logger
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let config = AppConfig::from_env().map_err(|e| std::io::Error::other(e.to_string()))?;

    log::info!("🚀 Starting Placement Service...");
    log::info!("📊 Database: {} ({})", config.mongodb_uri, config.database_name);

    // Initialize MongoDB connection
    let db = database::MongoDB::new(&config)
        .await
        .map_err(|e| std::io::Error::other(format!("Failed to connect to MongoDB: {}", e)))?;

    log::info!("✅ MongoDB connected successfully");

    let repository: Arc<dyn UserRepository> = Arc::new(MongoUserRepository::new(db));
    let repo_data = web::Data::from(repository);

    let bind_address = config.bind_address();
    log::info!("🌐 Server starting on {}", bind_address);
    log::info!("📚 Swagger UI available at: http://{}/swagger-ui/", bind_address);
    log::info!("📄 OpenAPI spec at: http://{}/api-docs/openapi.json", bind_address);

    // Start HTTP server
    HttpServer::new(move || {
        // Qualquer origem pode chamar a API
        let cors = Cors::default()
            .allow_any_origin()
            .allow_any_method()
            .allow_any_header()
            .max_age(3600);

        let openapi = api::swagger::ApiDoc::openapi();

        App::new()
            .app_data(repo_data.clone())
            .wrap(cors)
            .wrap(middleware::RequestMetrics)
            .wrap(Compress::default())
            .wrap(Logger::default())
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}")
                    .url("/api-docs/openapi.json", openapi)
            )
            .configure(api::configure)
    })
    .bind(bind_address)?
    .run()
    .await
}
