use std::{sync::Arc, time::Duration};

use actix_web::rt;
use uuid::Uuid;

use crate::{
    errors::{AppError, AppResult},
    models::domain::{registration_token::hash_token, RegistrationToken, TokenType, User},
    repositories::RegistrationTokenRepository,
};

/// Issues and consumes single-use registration tokens. Only the SHA-256 of a
/// token is stored; the plain value exists only in the delivered message.
pub struct RegistrationTokenService {
    repository: Arc<dyn RegistrationTokenRepository>,
    expiration_hours: i64,
}

impl RegistrationTokenService {
    pub fn new(repository: Arc<dyn RegistrationTokenRepository>, expiration_hours: i64) -> Self {
        Self {
            repository,
            expiration_hours,
        }
    }

    pub async fn generate_token_for_user(&self, user: &User) -> AppResult<String> {
        let token = Uuid::new_v4().simple().to_string();
        let record = RegistrationToken::new(&user.id, hash_token(&token), self.expiration_hours);
        self.repository.create(record).await?;
        Ok(token)
    }

    /// Validates `token` for `user` and invalidates it in the same datastore
    /// operation, so concurrent callers cannot both succeed. Unknown, used,
    /// foreign and wrongly typed tokens are `InvalidToken`; a token past its
    /// expiry is `TokenExpired` and is gone afterwards as well.
    pub async fn validate_token_for_user(&self, user: &User, token: &str) -> AppResult<()> {
        let record = self
            .repository
            .consume(&hash_token(token), &user.id, TokenType::RegistrationMail)
            .await?
            .ok_or_else(|| {
                AppError::InvalidToken("Unknown or already used registration token".to_string())
            })?;

        if record.is_expired() {
            return Err(AppError::TokenExpired);
        }

        Ok(())
    }

    pub async fn purge_expired(&self) -> AppResult<u64> {
        let removed = self.repository.delete_expired().await?;
        if removed > 0 {
            log::info!("Purged {} expired registration tokens", removed);
        }
        Ok(removed)
    }

    /// Runs `purge_expired` every `period` on the current actix runtime,
    /// starting immediately, until the returned handle is aborted.
    pub fn spawn_purge_task(self: Arc<Self>, period: Duration) -> rt::task::JoinHandle<()> {
        rt::spawn(async move {
            let mut ticker = rt::time::interval(period);
            loop {
                ticker.tick().await;
                if let Err(e) = self.purge_expired().await {
                    log::warn!("Failed to purge expired registration tokens: {}", e);
                }
            }
        })
    }
}
