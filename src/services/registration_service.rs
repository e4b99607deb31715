use std::sync::Arc;

use crate::{
    errors::AppResult,
    models::{
        domain::{TokenType, User},
        dto::request::RegistrationRequest,
    },
    services::{RegistrationTokenService, TokenDelivery, UserService},
};

/// Mail based registration: a user starts out disabled and is enabled once
/// the token sent to them comes back.
pub struct RegistrationService {
    user_service: Arc<UserService>,
    token_service: Arc<RegistrationTokenService>,
    token_delivery: Arc<dyn TokenDelivery>,
}

impl RegistrationService {
    pub fn new(
        user_service: Arc<UserService>,
        token_service: Arc<RegistrationTokenService>,
        token_delivery: Arc<dyn TokenDelivery>,
    ) -> Self {
        Self {
            user_service,
            token_service,
            token_delivery,
        }
    }

    pub async fn start_registration(&self, request: RegistrationRequest) -> AppResult<User> {
        let user = self.user_service.save_user(request).await?;

        let token = self.token_service.generate_token_for_user(&user).await?;

        self.token_delivery
            .send_token_to_user(&token, &user, TokenType::RegistrationMail)
            .await?;

        log::info!("Registration started for user '{}'", user.username);
        Ok(user)
    }

    /// Enables the user once the token is consumed. The token is spent
    /// before the user changes, so only one of several concurrent calls
    /// with the same token gets here.
    pub async fn continue_registration(&self, user_id: &str, token: &str) -> AppResult<User> {
        let user = self.user_service.find(user_id).await?;
        self.token_service.validate_token_for_user(&user, token).await?;

        let user = self.user_service.enable_user(user).await?;

        log::info!("Registration completed for user '{}'", user.username);
        Ok(user)
    }

    pub async fn is_registration_completed(&self, user_id: &str) -> AppResult<bool> {
        self.user_service.is_user_enabled(user_id).await
    }
}
