pub mod question_repository;
pub mod quiz_repository;
pub mod registration_token_repository;
pub mod user_repository;

pub use question_repository::{MongoQuestionRepository, QuestionRepository};
pub use quiz_repository::{MongoQuizRepository, QuizRepository};
pub use registration_token_repository::{
    MongoRegistrationTokenRepository, RegistrationTokenRepository,
};
pub use user_repository::{MongoUserRepository, UserRepository};

#[cfg(test)]
pub use question_repository::MockQuestionRepository;
#[cfg(test)]
pub use quiz_repository::MockQuizRepository;
#[cfg(test)]
pub use registration_token_repository::MockRegistrationTokenRepository;
#[cfg(test)]
pub use user_repository::MockUserRepository;
