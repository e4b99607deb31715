use std::sync::Arc;

use crate::{
    auth::{check_ownership, Principal},
    errors::{AppError, AppResult},
    models::{
        domain::{Question, Quiz},
        dto::{
            request::{PageParams, QuizRequest},
            response::Page,
        },
    },
    repositories::{QuestionRepository, QuizRepository},
};

pub struct QuizService {
    quiz_repository: Arc<dyn QuizRepository>,
    question_repository: Arc<dyn QuestionRepository>,
    default_page_size: u64,
}

impl QuizService {
    pub fn new(
        quiz_repository: Arc<dyn QuizRepository>,
        question_repository: Arc<dyn QuestionRepository>,
        default_page_size: u64,
    ) -> Self {
        Self {
            quiz_repository,
            question_repository,
            default_page_size,
        }
    }

    pub async fn find(&self, id: &str) -> AppResult<Quiz> {
        self.quiz_repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Quiz with id '{}' not found", id)))
    }

    pub async fn find_all(&self, params: PageParams) -> AppResult<Page<Quiz>> {
        self.quiz_repository
            .find_all(params.page(), params.size_or(self.default_page_size))
            .await
    }

    /// Creates a quiz owned by `requester`.
    pub async fn save(&self, request: QuizRequest, requester: &Principal) -> AppResult<Quiz> {
        let quiz = Quiz::from_request(request, &requester.user_id);
        let saved = self.quiz_repository.create(quiz).await?;
        log::info!("Quiz '{}' created by {}", saved.id, requester.username);
        Ok(saved)
    }

    pub async fn update(
        &self,
        id: &str,
        changes: QuizRequest,
        requester: &Principal,
    ) -> AppResult<Quiz> {
        let mut quiz = self.find(id).await?;
        check_ownership(requester, &quiz)?;

        quiz.apply(changes);
        self.quiz_repository.update(quiz).await
    }

    /// Removes the quiz together with its questions.
    pub async fn delete(&self, id: &str, requester: &Principal) -> AppResult<()> {
        let quiz = self.find(id).await?;
        check_ownership(requester, &quiz)?;

        // Children first, so a failure never leaves questions without a quiz
        let removed = self.question_repository.delete_by_quiz(&quiz.id).await?;
        self.quiz_repository.delete(&quiz.id).await?;
        log::info!(
            "Quiz '{}' deleted by {} ({} questions removed)",
            quiz.id,
            requester.username,
            removed
        );
        Ok(())
    }

    pub async fn find_questions_by_quiz(&self, quiz_id: &str) -> AppResult<Vec<Question>> {
        let quiz = self.find(quiz_id).await?;
        self.question_repository.find_by_quiz(&quiz.id).await
    }
}
