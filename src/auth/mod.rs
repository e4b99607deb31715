pub mod access;
pub mod claims;
pub mod extractor;
pub mod jwt;
pub mod password;

pub use access::{check_ownership, Owned, Principal};
pub use claims::Claims;
pub use extractor::AuthenticatedUser;
pub use jwt::JwtService;
