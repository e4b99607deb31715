use std::sync::Arc;

use crate::{
    auth::password::{hash_password, verify_password},
    errors::{AppError, AppResult},
    models::{domain::User, dto::request::RegistrationRequest},
    repositories::UserRepository,
};

pub struct UserService {
    repository: Arc<dyn UserRepository>,
}

impl UserService {
    pub fn new(repository: Arc<dyn UserRepository>) -> Self {
        Self { repository }
    }

    /// Persists a new, not yet enabled user.
    pub async fn save_user(&self, request: RegistrationRequest) -> AppResult<User> {
        if self
            .repository
            .exists_by_username_or_email(&request.username, &request.email)
            .await?
        {
            return Err(AppError::AlreadyExists(format!(
                "User '{}' or email '{}' is already registered",
                request.username, request.email
            )));
        }

        let password_hash = hash_password(&request.password)?;
        let user = User::new(&request.username, &request.email, &password_hash);
        self.repository.create(user).await
    }

    pub async fn find(&self, id: &str) -> AppResult<User> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("User with id '{}' not found", id)))
    }

    pub async fn enable_user(&self, mut user: User) -> AppResult<User> {
        user.enabled = true;
        self.repository.update(user).await
    }

    pub async fn is_user_enabled(&self, id: &str) -> AppResult<bool> {
        Ok(self.find(id).await?.enabled)
    }

    /// Checks credentials for login. Unknown users, wrong passwords and
    /// unfinished registrations are all rejected as unauthorized.
    pub async fn authenticate(&self, username: &str, password: &str) -> AppResult<User> {
        let user = self
            .repository
            .find_by_username(username)
            .await?
            .ok_or_else(|| AppError::Unauthorized("Invalid username or password".to_string()))?;

        if !verify_password(password, &user.password_hash)? {
            return Err(AppError::Unauthorized(
                "Invalid username or password".to_string(),
            ));
        }

        if !user.enabled {
            return Err(AppError::Unauthorized(format!(
                "Registration of '{}' is not completed",
                user.username
            )));
        }

        Ok(user)
    }
}
