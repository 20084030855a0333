pub mod health;
pub mod metrics;
pub mod swagger;
pub mod users;

use actix_web::{error::InternalError, web};

use crate::utils::error::AppError;

/// Body JSON inválido vira 400 no mesmo formato de erro da API
fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, _req| {
        let response = AppError::InvalidRequest(err.to_string()).to_response();
        InternalError::from_response(err, response).into()
    })
}

/// Route table. Legacy routes go before `/{id}` so they aren't captured as ids.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        // Health check
        .route("/health", web::get().to(health::health_check))
        // Metrics
        .route("/metrics", web::get().to(metrics::get_metrics))
        // Users: CRUD + rotas legadas
        .service(
            web::scope("/api/users")
                .app_data(json_config())
                .route("", web::post().to(users::create_user))
                .route("", web::get().to(users::list_users))
                .route("/addUser", web::post().to(users::add_user))
                .route("/getAllUser", web::get().to(users::get_all_user))
                .route("/{id}", web::get().to(users::get_user))
                .route("/{id}", web::put().to(users::update_user))
                .route("/{id}", web::delete().to(users::delete_user))
        );
}
