use actix_web::{delete, get, post, web, HttpResponse};
use validator::Validate;

use crate::{
    app_state::AppState,
    auth::AuthenticatedUser,
    errors::AppError,
    models::dto::request::{PageParams, QuizRequest},
};

#[get("/quizzes")]
pub async fn list_quizzes(
    state: web::Data<AppState>,
    query: web::Query<PageParams>,
) -> Result<HttpResponse, AppError> {
    let params = query.into_inner();
    params.validate()?;

    let page = state.quiz_service.find_all(params).await?;
    Ok(HttpResponse::Ok().json(page))
}

#[post("/quizzes")]
pub async fn create_quiz(
    state: web::Data<AppState>,
    auth: AuthenticatedUser,
    request: web::Json<QuizRequest>,
) -> Result<HttpResponse, AppError> {
    let request = request.into_inner();
    request.validate()?;

    let quiz = state.quiz_service.save(request, auth.principal()).await?;
    Ok(HttpResponse::Created().json(quiz))
}

#[get("/quizzes/{quiz_id}")]
pub async fn get_quiz(
    state: web::Data<AppState>,
    quiz_id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let quiz = state.quiz_service.find(&quiz_id).await?;
    Ok(HttpResponse::Ok().json(quiz))
}

#[post("/quizzes/{quiz_id}")]
pub async fn update_quiz(
    state: web::Data<AppState>,
    auth: AuthenticatedUser,
    quiz_id: web::Path<String>,
    request: web::Json<QuizRequest>,
) -> Result<HttpResponse, AppError> {
    let request = request.into_inner();
    request.validate()?;

    let quiz = state
        .quiz_service
        .update(&quiz_id, request, auth.principal())
        .await?;
    Ok(HttpResponse::Ok().json(quiz))
}

#[delete("/quizzes/{quiz_id}")]
pub async fn delete_quiz(
    state: web::Data<AppState>,
    auth: AuthenticatedUser,
    quiz_id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    state.quiz_service.delete(&quiz_id, auth.principal()).await?;
    Ok(HttpResponse::Ok().finish())
}

#[get("/quizzes/{quiz_id}/questions")]
pub async fn list_quiz_questions(
    state: web::Data<AppState>,
    quiz_id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let questions = state.quiz_service.find_questions_by_quiz(&quiz_id).await?;
    Ok(HttpResponse::Ok().json(questions))
}
