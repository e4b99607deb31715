use std::sync::Arc;

use crate::{
    auth::{check_ownership, Principal},
    errors::{AppError, AppResult},
    models::{
        domain::{Answer, Question, Quiz},
        dto::request::QuestionRequest,
    },
    repositories::QuestionRepository,
};

pub struct QuestionService {
    repository: Arc<dyn QuestionRepository>,
}

impl QuestionService {
    pub fn new(repository: Arc<dyn QuestionRepository>) -> Self {
        Self { repository }
    }

    pub async fn find(&self, id: &str) -> AppResult<Question> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Question with id '{}' not found", id)))
    }

    /// Adds a question to `quiz`. Only the quiz owner may add questions.
    pub async fn save(
        &self,
        request: QuestionRequest,
        quiz: &Quiz,
        requester: &Principal,
    ) -> AppResult<Question> {
        check_ownership(requester, quiz)?;

        let question = Question::for_quiz(quiz, request);
        let saved = self.repository.create(question).await?;
        log::info!("Question '{}' added to quiz '{}'", saved.id, quiz.id);
        Ok(saved)
    }

    pub async fn update(
        &self,
        id: &str,
        changes: QuestionRequest,
        requester: &Principal,
    ) -> AppResult<Question> {
        let mut question = self.find(id).await?;
        check_ownership(requester, &question)?;

        question.apply(changes);
        self.repository.update(question).await
    }

    pub async fn delete(&self, id: &str, requester: &Principal) -> AppResult<()> {
        let question = self.find(id).await?;
        check_ownership(requester, &question)?;

        self.repository.delete(&question.id).await
    }

    pub async fn find_answers_by_question(&self, id: &str) -> AppResult<Vec<Answer>> {
        let question = self.find(id).await?;
        Ok(question.sorted_answers())
    }
}
