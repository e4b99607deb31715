use crate::{
    auth::Claims,
    errors::{AppError, AppResult},
};

/// A resource with a single owning user.
pub trait Owned {
    fn owner_id(&self) -> &str;
}

/// The authenticated user a request acts on behalf of.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Principal {
    pub user_id: String,
    pub username: String,
}

impl Principal {
    pub fn new(user_id: &str, username: &str) -> Self {
        Self {
            user_id: user_id.to_string(),
            username: username.to_string(),
        }
    }
}

impl From<Claims> for Principal {
    fn from(claims: Claims) -> Self {
        Self {
            user_id: claims.sub,
            username: claims.username,
        }
    }
}

pub fn check_ownership<R: Owned + ?Sized>(principal: &Principal, resource: &R) -> AppResult<()> {
    if resource.owner_id() != principal.user_id {
        return Err(AppError::Unauthorized(format!(
            "User '{}' does not own this resource",
            principal.username
        )));
    }
    Ok(())
}
