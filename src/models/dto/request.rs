use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::errors::{AppError, AppResult};

pub const MAX_PAGE_SIZE: u64 = 100;
pub const MAX_PAGE: u64 = 1_000_000;

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct QuizRequest {
    #[validate(length(min = 1, max = 100, message = "Quiz name must be 1-100 characters"))]
    pub name: String,

    #[validate(length(max = 500))]
    pub description: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct QuestionRequest {
    #[validate(length(min = 1, max = 500, message = "Question text must be 1-500 characters"))]
    pub text: String,

    #[validate(range(min = 0))]
    pub order: Option<i32>,

    #[serde(default)]
    #[validate(nested)]
    pub answers: Vec<AnswerRequest>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct AnswerRequest {
    #[validate(length(min = 1, max = 200, message = "Answer text must be 1-200 characters"))]
    pub text: String,

    #[serde(default)]
    pub correct: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RegistrationRequest {
    #[validate(length(min = 3, max = 50))]
    pub username: String,

    #[validate(email(message = "Invalid email format"))]
    pub email: String,

    #[validate(length(min = 8, max = 128, message = "Password must be 8-128 characters"))]
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(length(min = 1))]
    pub username: String,

    #[validate(length(min = 1))]
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuizIdQuery {
    pub quiz_id: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenQuery {
    pub token: String,
}

/// Zero-based page request.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, Validate)]
pub struct PageParams {
    #[validate(range(max = 1_000_000))]
    pub page: Option<u64>,

    #[validate(range(min = 1, max = 100))]
    pub size: Option<u64>,
}

impl PageParams {
    pub fn new(page: u64, size: u64) -> Self {
        Self {
            page: Some(page),
            size: Some(size),
        }
    }

    pub fn page(&self) -> u64 {
        self.page.unwrap_or(0)
    }

    pub fn size_or(&self, default_size: u64) -> u64 {
        self.size.unwrap_or(default_size).clamp(1, MAX_PAGE_SIZE)
    }
}

/// Items to skip before `page`. Offsets past `i64::MAX` are rejected since
/// the datastore counts with signed 64-bit integers.
pub fn page_offset(page: u64, size: u64) -> AppResult<u64> {
    page.checked_mul(size)
        .filter(|offset| *offset <= i64::MAX as u64)
        .ok_or_else(|| AppError::BadRequest(format!("Page {} is out of range", page)))
}
