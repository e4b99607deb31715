use actix_web::{delete, get, post, web, HttpResponse};
use validator::Validate;

use crate::{
    app_state::AppState,
    auth::AuthenticatedUser,
    errors::AppError,
    models::dto::request::{QuestionRequest, QuizIdQuery},
};

#[post("/questions")]
pub async fn create_question(
    state: web::Data<AppState>,
    auth: AuthenticatedUser,
    query: web::Query<QuizIdQuery>,
    request: web::Json<QuestionRequest>,
) -> Result<HttpResponse, AppError> {
    let request = request.into_inner();
    request.validate()?;

    let quiz = state.quiz_service.find(&query.quiz_id).await?;
    let question = state
        .question_service
        .save(request, &quiz, auth.principal())
        .await?;
    Ok(HttpResponse::Created().json(question))
}

#[get("/questions/{question_id}")]
pub async fn get_question(
    state: web::Data<AppState>,
    question_id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let question = state.question_service.find(&question_id).await?;
    Ok(HttpResponse::Ok().json(question))
}

#[post("/questions/{question_id}")]
pub async fn update_question(
    state: web::Data<AppState>,
    auth: AuthenticatedUser,
    question_id: web::Path<String>,
    request: web::Json<QuestionRequest>,
) -> Result<HttpResponse, AppError> {
    let request = request.into_inner();
    request.validate()?;

    let question = state
        .question_service
        .update(&question_id, request, auth.principal())
        .await?;
    Ok(HttpResponse::Ok().json(question))
}

#[delete("/questions/{question_id}")]
pub async fn delete_question(
    state: web::Data<AppState>,
    auth: AuthenticatedUser,
    question_id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    state
        .question_service
        .delete(&question_id, auth.principal())
        .await?;
    Ok(HttpResponse::Ok().finish())
}

#[get("/questions/{question_id}/answers")]
pub async fn list_answers(
    state: web::Data<AppState>,
    question_id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let answers = state
        .question_service
        .find_answers_by_question(&question_id)
        .await?;
    Ok(HttpResponse::Ok().json(answers))
}
