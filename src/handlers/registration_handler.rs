use actix_web::{get, post, web, HttpResponse};
use validator::Validate;

use crate::{
    app_state::AppState,
    errors::AppError,
    models::dto::{
        request::{LoginRequest, RegistrationRequest, TokenQuery},
        response::{AuthResponse, RegistrationStarted, RegistrationStatus, UserDto},
    },
};

#[post("/users/registration")]
pub async fn start_registration(
    state: web::Data<AppState>,
    request: web::Json<RegistrationRequest>,
) -> Result<HttpResponse, AppError> {
    let request = request.into_inner();
    request.validate()?;

    let user = state.registration_service.start_registration(request).await?;
    Ok(HttpResponse::Created().json(RegistrationStarted { user_id: user.id }))
}

#[get("/users/{user_id}/registration")]
pub async fn continue_registration(
    state: web::Data<AppState>,
    user_id: web::Path<String>,
    query: web::Query<TokenQuery>,
) -> Result<HttpResponse, AppError> {
    let user = state
        .registration_service
        .continue_registration(&user_id, &query.token)
        .await?;
    Ok(HttpResponse::Ok().json(UserDto::from(user)))
}

#[get("/users/{user_id}/registration/status")]
pub async fn registration_status(
    state: web::Data<AppState>,
    user_id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let user_id = user_id.into_inner();
    let completed = state
        .registration_service
        .is_registration_completed(&user_id)
        .await?;
    Ok(HttpResponse::Ok().json(RegistrationStatus { user_id, completed }))
}

#[post("/auth/login")]
pub async fn login(
    state: web::Data<AppState>,
    request: web::Json<LoginRequest>,
) -> Result<HttpResponse, AppError> {
    let request = request.into_inner();
    request.validate()?;

    let user = state
        .user_service
        .authenticate(&request.username, &request.password)
        .await?;
    let token = state.jwt_service.create_token(&user)?;

    log::info!("User '{}' logged in", user.username);
    Ok(HttpResponse::Ok().json(AuthResponse {
        token,
        user_id: user.id,
        username: user.username,
    }))
}
