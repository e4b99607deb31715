pub mod question_service;
pub mod quiz_service;
pub mod registration_service;
pub mod registration_token_service;
pub mod token_delivery;
pub mod user_service;

pub use question_service::QuestionService;
pub use quiz_service::QuizService;
pub use registration_service::RegistrationService;
pub use registration_token_service::RegistrationTokenService;
pub use token_delivery::{LogTokenDelivery, TokenDelivery};
pub use user_service::UserService;
