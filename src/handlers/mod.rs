pub mod health_handler;
pub mod question_handler;
pub mod quiz_handler;
pub mod registration_handler;

use actix_web::web;

use crate::errors::AppError;

pub use health_handler::{health_check, health_check_ready};
pub use question_handler::{
    create_question, delete_question, get_question, list_answers, update_question,
};
pub use quiz_handler::{
    create_quiz, delete_quiz, get_quiz, list_quiz_questions, list_quizzes, update_quiz,
};
pub use registration_handler::{
    continue_registration, login, registration_status, start_registration,
};

/// Registers every route plus body/query parsers that report malformed
/// input as 400 through `AppError`.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(
        web::JsonConfig::default()
            .error_handler(|err, _req| AppError::BadRequest(err.to_string()).into()),
    )
    .app_data(
        web::QueryConfig::default()
            .error_handler(|err, _req| AppError::BadRequest(err.to_string()).into()),
    )
    .service(health_check)
    .service(health_check_ready)
    .service(list_quizzes)
    .service(create_quiz)
    .service(get_quiz)
    .service(update_quiz)
    .service(delete_quiz)
    .service(list_quiz_questions)
    .service(create_question)
    .service(get_question)
    .service(update_question)
    .service(delete_question)
    .service(list_answers)
    .service(start_registration)
    .service(continue_registration)
    .service(registration_status)
    .service(login);
}
