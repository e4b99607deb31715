pub mod question;
pub mod quiz;
pub mod registration_token;
pub mod user;
pub use question::{Answer, Question};
pub use quiz::Quiz;
pub use registration_token::{RegistrationToken, TokenType};
pub use user::User;
