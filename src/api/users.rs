use actix_web::{web, HttpResponse, Responder};
use crate::{
    models::{UpdateUserRequest, User},
    repository::UserRepository,
    services::user_service,
};

/// POST /api/users - Cria novo usuário (userId do body é ignorado)
#[utoipa::path(
    post,
    path = "/api/users",
    tag = "Users",
    request_body = User,
    responses(
        (status = 201, description = "User created", body = User),
        (status = 400, description = "Malformed JSON body")
    )
)]
pub async fn create_user(
    repo: web::Data<dyn UserRepository>,
    body: web::Json<User>,
) -> impl Responder {
    log::info!("📝 POST /api/users - Creating user {:?}", body.name);

    match user_service::create_user(repo.get_ref(), body.into_inner()).await {
        Ok(user) => {
            log::info!("✅ User created: {}", user.user_id.as_deref().unwrap_or_default());
            HttpResponse::Created().json(user)
        }
        Err(e) => {
            log::error!("❌ Error creating user: {}", e);
            e.to_response()
        }
    }
}

/// GET /api/users - Lista todos os usuários
#[utoipa::path(
    get,
    path = "/api/users",
    tag = "Users",
    responses(
        (status = 200, description = "All stored users", body = Vec<User>)
    )
)]
pub async fn list_users(repo: web::Data<dyn UserRepository>) -> impl Responder {
    match user_service::list_users(repo.get_ref()).await {
        Ok(users) => {
            log::info!("📋 Listed {} users", users.len());
            HttpResponse::Ok().json(users)
        }
        Err(e) => {
            log::error!("❌ Error listing users: {}", e);
            e.to_response()
        }
    }
}

/// GET /api/users/{id} - Busca usuário específico
#[utoipa::path(
    get,
    path = "/api/users/{id}",
    tag = "Users",
    params(("id" = String, Path, description = "User ID (ObjectId hex or custom string)")),
    responses(
        (status = 200, description = "User found", body = User),
        (status = 404, description = "User not found")
    )
)]
pub async fn get_user(
    repo: web::Data<dyn UserRepository>,
    user_id: web::Path<String>,
) -> impl Responder {
    match user_service::get_user(repo.get_ref(), &user_id).await {
        Ok(user) => HttpResponse::Ok().json(user),
        Err(e) => {
            log::warn!("⚠️ GET /api/users/{} failed: {}", user_id, e);
            e.to_response()
        }
    }
}

/// PUT /api/users/{id} - Atualização parcial (só campos não-nulos)
#[utoipa::path(
    put,
    path = "/api/users/{id}",
    tag = "Users",
    params(("id" = String, Path, description = "User ID (ObjectId hex or custom string)")),
    request_body = UpdateUserRequest,
    responses(
        (status = 200, description = "Merged and persisted user", body = User),
        (status = 404, description = "User not found")
    )
)]
pub async fn update_user(
    repo: web::Data<dyn UserRepository>,
    user_id: web::Path<String>,
    body: web::Json<UpdateUserRequest>,
) -> impl Responder {
    log::info!("🔧 PUT /api/users/{} - Updating user", user_id);

    match user_service::update_user(repo.get_ref(), &user_id, body.into_inner()).await {
        Ok(user) => {
            log::info!("✅ User updated: {}", user_id);
            HttpResponse::Ok().json(user)
        }
        Err(e) => {
            log::warn!("⚠️ Failed to update user {}: {}", user_id, e);
            e.to_response()
        }
    }
}

/// DELETE /api/users/{id} - Remove usuário
#[utoipa::path(
    delete,
    path = "/api/users/{id}",
    tag = "Users",
    params(("id" = String, Path, description = "User ID (ObjectId hex or custom string)")),
    responses(
        (status = 204, description = "User deleted"),
        (status = 404, description = "User not found")
    )
)]
pub async fn delete_user(
    repo: web::Data<dyn UserRepository>,
    user_id: web::Path<String>,
) -> impl Responder {
    log::info!("🗑️  DELETE /api/users/{} - Removing user", user_id);

    match user_service::delete_user(repo.get_ref(), &user_id).await {
        Ok(()) => {
            log::info!("✅ User deleted: {}", user_id);
            HttpResponse::NoContent().finish()
        }
        Err(e) => {
            log::warn!("⚠️ Failed to delete user {}: {}", user_id, e);
            e.to_response()
        }
    }
}

// ==================== LEGACY ROUTES ====================

/// POST /api/users/addUser - Rota antiga, responde 200 com o registro salvo
#[utoipa::path(
    post,
    path = "/api/users/addUser",
    tag = "Users (legacy)",
    request_body = User,
    responses(
        (status = 200, description = "User saved", body = User)
    )
)]
pub async fn add_user(
    repo: web::Data<dyn UserRepository>,
    body: web::Json<User>,
) -> impl Responder {
    match user_service::add_user_legacy(repo.get_ref(), body.into_inner()).await {
        Ok(user) => HttpResponse::Ok().json(user),
        Err(e) => {
            log::error!("❌ Error saving user (addUser): {}", e);
            e.to_response()
        }
    }
}

/// GET /api/users/getAllUser - Rota antiga de listagem
#[utoipa::path(
    get,
    path = "/api/users/getAllUser",
    tag = "Users (legacy)",
    responses(
        (status = 200, description = "All stored users", body = Vec<User>)
    )
)]
pub async fn get_all_user(repo: web::Data<dyn UserRepository>) -> impl Responder {
    list_users(repo).await
}
