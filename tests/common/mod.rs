#![allow(dead_code)]

use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use quizzz_server::{
    app_state::{AppState, Repositories},
    config::Config,
    errors::{AppError, AppResult},
    models::{
        domain::{Question, Quiz, RegistrationToken, TokenType, User},
        dto::{request::page_offset, response::Page},
    },
    repositories::{QuestionRepository, QuizRepository, RegistrationTokenRepository, UserRepository},
    services::TokenDelivery,
};

#[derive(Default)]
pub struct InMemoryQuizRepository {
    quizzes: RwLock<Vec<Quiz>>,
}

#[async_trait]
impl QuizRepository for InMemoryQuizRepository {
    async fn find_by_id(&self, id: &str) -> AppResult<Option<Quiz>> {
        let quizzes = self.quizzes.read().await;
        Ok(quizzes.iter().find(|q| q.id == id).cloned())
    }

    async fn find_all(&self, page: u64, size: u64) -> AppResult<Page<Quiz>> {
        let offset = page_offset(page, size)?;
        let quizzes = self.quizzes.read().await;
        let content = quizzes
            .iter()
            .skip(usize::try_from(offset).unwrap_or(usize::MAX))
            .take(size as usize)
            .cloned()
            .collect();
        Ok(Page::new(content, page, size, quizzes.len() as u64))
    }

    async fn create(&self, quiz: Quiz) -> AppResult<Quiz> {
        let mut quizzes = self.quizzes.write().await;
        if quizzes.iter().any(|q| q.id == quiz.id) {
            return Err(AppError::AlreadyExists(format!(
                "Quiz with id '{}' already exists",
                quiz.id
            )));
        }
        quizzes.push(quiz.clone());
        Ok(quiz)
    }

    async fn update(&self, quiz: Quiz) -> AppResult<Quiz> {
        let mut quizzes = self.quizzes.write().await;
        let slot = quizzes
            .iter_mut()
            .find(|q| q.id == quiz.id)
            .ok_or_else(|| AppError::NotFound(format!("Quiz with id '{}' not found", quiz.id)))?;
        *slot = quiz.clone();
        Ok(quiz)
    }

    async fn delete(&self, id: &str) -> AppResult<()> {
        let mut quizzes = self.quizzes.write().await;
        let before = quizzes.len();
        quizzes.retain(|q| q.id != id);
        if quizzes.len() == before {
            return Err(AppError::NotFound(format!("Quiz with id '{}' not found", id)));
        }
        Ok(())
    }

    async fn ensure_indexes(&self) -> AppResult<()> {
        Ok(())
    }
}

#[derive(Default)]
pub struct InMemoryQuestionRepository {
    questions: RwLock<Vec<Question>>,
}

#[async_trait]
impl QuestionRepository for InMemoryQuestionRepository {
    async fn find_by_id(&self, id: &str) -> AppResult<Option<Question>> {
        let questions = self.questions.read().await;
        Ok(questions.iter().find(|q| q.id == id).cloned())
    }

    async fn find_by_quiz(&self, quiz_id: &str) -> AppResult<Vec<Question>> {
        let questions = self.questions.read().await;
        let mut items: Vec<Question> = questions
            .iter()
            .filter(|q| q.quiz_id == quiz_id)
            .cloned()
            .collect();
        // Stable sort keeps insertion order among equal positions
        items.sort_by_key(|q| q.order);
        Ok(items)
    }

    async fn create(&self, question: Question) -> AppResult<Question> {
        let mut questions = self.questions.write().await;
        questions.push(question.clone());
        Ok(question)
    }

    async fn update(&self, question: Question) -> AppResult<Question> {
        let mut questions = self.questions.write().await;
        let slot = questions
            .iter_mut()
            .find(|q| q.id == question.id)
            .ok_or_else(|| {
                AppError::NotFound(format!("Question with id '{}' not found", question.id))
            })?;
        *slot = question.clone();
        Ok(question)
    }

    async fn delete(&self, id: &str) -> AppResult<()> {
        let mut questions = self.questions.write().await;
        let before = questions.len();
        questions.retain(|q| q.id != id);
        if questions.len() == before {
            return Err(AppError::NotFound(format!(
                "Question with id '{}' not found",
                id
            )));
        }
        Ok(())
    }

    async fn delete_by_quiz(&self, quiz_id: &str) -> AppResult<u64> {
        let mut questions = self.questions.write().await;
        let before = questions.len();
        questions.retain(|q| q.quiz_id != quiz_id);
        Ok((before - questions.len()) as u64)
    }

    async fn ensure_indexes(&self) -> AppResult<()> {
        Ok(())
    }
}

#[derive(Default)]
pub struct InMemoryUserRepository {
    users: RwLock<Vec<User>>,
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn create(&self, user: User) -> AppResult<User> {
        let mut users = self.users.write().await;
        if users
            .iter()
            .any(|u| u.username == user.username || u.email == user.email)
        {
            return Err(AppError::AlreadyExists(format!(
                "User '{}' already exists",
                user.username
            )));
        }
        users.push(user.clone());
        Ok(user)
    }

    async fn find_by_id(&self, id: &str) -> AppResult<Option<User>> {
        let users = self.users.read().await;
        Ok(users.iter().find(|u| u.id == id).cloned())
    }

    async fn find_by_username(&self, username: &str) -> AppResult<Option<User>> {
        let users = self.users.read().await;
        Ok(users.iter().find(|u| u.username == username).cloned())
    }

    async fn exists_by_username_or_email(&self, username: &str, email: &str) -> AppResult<bool> {
        let users = self.users.read().await;
        Ok(users
            .iter()
            .any(|u| u.username == username || u.email == email))
    }

    async fn update(&self, user: User) -> AppResult<User> {
        let mut users = self.users.write().await;
        let slot = users
            .iter_mut()
            .find(|u| u.id == user.id)
            .ok_or_else(|| AppError::NotFound(format!("User with id '{}' not found", user.id)))?;
        *slot = user.clone();
        Ok(user)
    }

    async fn ensure_indexes(&self) -> AppResult<()> {
        Ok(())
    }
}

#[derive(Default)]
pub struct InMemoryRegistrationTokenRepository {
    tokens: RwLock<Vec<RegistrationToken>>,
}

impl InMemoryRegistrationTokenRepository {
    pub async fn contains(&self, hash: &str) -> bool {
        self.tokens.read().await.iter().any(|t| t.token_hash == hash)
    }
}

#[async_trait]
impl RegistrationTokenRepository for InMemoryRegistrationTokenRepository {
    async fn create(&self, token: RegistrationToken) -> AppResult<RegistrationToken> {
        let mut tokens = self.tokens.write().await;
        tokens.push(token.clone());
        Ok(token)
    }

    async fn consume(
        &self,
        hash: &str,
        user_id: &str,
        token_type: TokenType,
    ) -> AppResult<Option<RegistrationToken>> {
        // Lookup and removal share one write guard
        let mut tokens = self.tokens.write().await;
        let position = tokens.iter().position(|t| {
            t.token_hash == hash && t.user_id == user_id && t.token_type == token_type
        });
        Ok(position.map(|index| tokens.remove(index)))
    }

    async fn delete_expired(&self) -> AppResult<u64> {
        let mut tokens = self.tokens.write().await;
        let before = tokens.len();
        tokens.retain(|t| !t.is_expired());
        Ok((before - tokens.len()) as u64)
    }

    async fn ensure_indexes(&self) -> AppResult<()> {
        Ok(())
    }
}

/// Keeps every delivered token so tests can play the user's mailbox.
#[derive(Default)]
pub struct RecordingTokenDelivery {
    sent: RwLock<Vec<(String, String, TokenType)>>,
}

impl RecordingTokenDelivery {
    pub async fn last_token_for(&self, user_id: &str) -> Option<String> {
        let sent = self.sent.read().await;
        sent.iter()
            .rev()
            .find(|(_, id, _)| id == user_id)
            .map(|(token, _, _)| token.clone())
    }

    pub async fn sent_count(&self) -> usize {
        self.sent.read().await.len()
    }
}

#[async_trait]
impl TokenDelivery for RecordingTokenDelivery {
    async fn send_token_to_user(
        &self,
        token: &str,
        user: &User,
        token_type: TokenType,
    ) -> AppResult<()> {
        let mut sent = self.sent.write().await;
        sent.push((token.to_string(), user.id.clone(), token_type));
        Ok(())
    }
}

pub struct TestContext {
    pub state: AppState,
    pub delivery: Arc<RecordingTokenDelivery>,
}

pub fn test_context() -> TestContext {
    let repositories = Repositories {
        quizzes: Arc::new(InMemoryQuizRepository::default()),
        questions: Arc::new(InMemoryQuestionRepository::default()),
        users: Arc::new(InMemoryUserRepository::default()),
        registration_tokens: Arc::new(InMemoryRegistrationTokenRepository::default()),
    };
    let delivery = Arc::new(RecordingTokenDelivery::default());
    let state = AppState::from_repositories(Config::test_config(), repositories, delivery.clone());

    TestContext { state, delivery }
}
