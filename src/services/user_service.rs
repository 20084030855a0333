// ==================== USER MANAGEMENT ====================
// Regras entre os handlers HTTP e o repositório de usuários

use crate::{
    models::{UpdateUserRequest, User},
    repository::UserRepository,
    utils::error::AppError,
};

/// POST /api/users - cria sempre um registro novo (userId do body é ignorado)
pub async fn create_user(repo: &dyn UserRepository, mut user: User) -> Result<User, AppError> {
    user.user_id = None;
    repo.save(user).await
}

/// POST /api/users/addUser - repassa o body direto para o `save`
pub async fn add_user_legacy(repo: &dyn UserRepository, user: User) -> Result<User, AppError> {
    repo.save(user).await
}

pub async fn list_users(repo: &dyn UserRepository) -> Result<Vec<User>, AppError> {
    repo.find_all().await
}

pub async fn get_user(repo: &dyn UserRepository, user_id: &str) -> Result<User, AppError> {
    repo.find_by_id(user_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("User {}", user_id)))
}

/// Merge campo a campo: só valores não-nulos do patch sobrescrevem
pub async fn update_user(
    repo: &dyn UserRepository,
    user_id: &str,
    patch: UpdateUserRequest,
) -> Result<User, AppError> {
    let mut existing = get_user(repo, user_id).await?;
    patch.apply_to(&mut existing);

    // Replace sem upsert: um delete concorrente não é desfeito
    repo.update(existing)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("User {}", user_id)))
}

pub async fn delete_user(repo: &dyn UserRepository, user_id: &str) -> Result<(), AppError> {
    if !repo.exists_by_id(user_id).await? {
        return Err(AppError::NotFound(format!("User {}", user_id)));
    }
    repo.delete_by_id(user_id).await
}
