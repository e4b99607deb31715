use async_trait::async_trait;

use crate::{
    errors::AppResult,
    models::domain::{TokenType, User},
};

/// Channel that hands a freshly generated token to its user.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TokenDelivery: Send + Sync {
    async fn send_token_to_user(
        &self,
        token: &str,
        user: &User,
        token_type: TokenType,
    ) -> AppResult<()>;
}

/// Writes the verification link to the application log instead of mailing
/// it. Used until an SMTP transport is configured.
pub struct LogTokenDelivery {
    public_base_url: String,
}

impl LogTokenDelivery {
    pub fn new(public_base_url: &str) -> Self {
        Self {
            public_base_url: public_base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn link_for(&self, token: &str, user: &User, token_type: TokenType) -> String {
        match token_type {
            TokenType::RegistrationMail => format!(
                "{}/users/{}/registration?token={}",
                self.public_base_url, user.id, token
            ),
            TokenType::ForgotPassword => format!(
                "{}/users/{}/password?token={}",
                self.public_base_url, user.id, token
            ),
        }
    }
}

#[async_trait]
impl TokenDelivery for LogTokenDelivery {
    async fn send_token_to_user(
        &self,
        token: &str,
        user: &User,
        token_type: TokenType,
    ) -> AppResult<()> {
        log::info!(
            "[{}] mail to {} <{}>: {}",
            token_type,
            user.username,
            user.email,
            self.link_for(token, user, token_type)
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registration_link() {
        let delivery = LogTokenDelivery::new("http://localhost:8080/");
        let user = User::new("johndoe", "john@example.com", "hash");

        let link = delivery.link_for("abc", &user, TokenType::RegistrationMail);

        assert_eq!(
            link,
            format!("http://localhost:8080/users/{}/registration?token=abc", user.id)
        );
    }

    #[actix_rt::test]
    async fn test_log_delivery_succeeds() {
        let delivery = LogTokenDelivery::new("http://localhost:8080");
        let user = User::new("johndoe", "john@example.com", "hash");

        assert!(delivery
            .send_token_to_user("abc", &user, TokenType::RegistrationMail)
            .await
            .is_ok());
    }
}
