use std::sync::Arc;

use crate::{
    auth::JwtService,
    config::Config,
    db::Database,
    errors::AppResult,
    repositories::{
        MongoQuestionRepository, MongoQuizRepository, MongoRegistrationTokenRepository,
        MongoUserRepository, QuestionRepository, QuizRepository, RegistrationTokenRepository,
        UserRepository,
    },
    services::{
        LogTokenDelivery, QuestionService, QuizService, RegistrationService,
        RegistrationTokenService, TokenDelivery, UserService,
    },
};

/// Repository handles the services are wired from.
#[derive(Clone)]
pub struct Repositories {
    pub quizzes: Arc<dyn QuizRepository>,
    pub questions: Arc<dyn QuestionRepository>,
    pub users: Arc<dyn UserRepository>,
    pub registration_tokens: Arc<dyn RegistrationTokenRepository>,
}

#[derive(Clone)]
pub struct AppState {
    pub quiz_service: Arc<QuizService>,
    pub question_service: Arc<QuestionService>,
    pub user_service: Arc<UserService>,
    pub registration_service: Arc<RegistrationService>,
    pub registration_token_service: Arc<RegistrationTokenService>,
    pub jwt_service: Arc<JwtService>,
    pub config: Arc<Config>,
    pub db: Option<Database>,
}

impl AppState {
    pub async fn new(config: Config) -> AppResult<Self> {
        let db = Database::connect(&config).await?;

        let quizzes = Arc::new(MongoQuizRepository::new(&db));
        quizzes.ensure_indexes().await?;
        let questions = Arc::new(MongoQuestionRepository::new(&db));
        questions.ensure_indexes().await?;
        let users = Arc::new(MongoUserRepository::new(&db));
        users.ensure_indexes().await?;
        let registration_tokens = Arc::new(MongoRegistrationTokenRepository::new(&db));
        registration_tokens.ensure_indexes().await?;

        let repositories = Repositories {
            quizzes,
            questions,
            users,
            registration_tokens,
        };
        let token_delivery = Arc::new(LogTokenDelivery::new(&config.public_base_url));

        let mut state = Self::from_repositories(config, repositories, token_delivery);
        state.db = Some(db);
        Ok(state)
    }

    /// Wires every service from already constructed repositories, with no
    /// database handle attached.
    pub fn from_repositories(
        config: Config,
        repositories: Repositories,
        token_delivery: Arc<dyn TokenDelivery>,
    ) -> Self {
        let quiz_service = Arc::new(QuizService::new(
            repositories.quizzes,
            repositories.questions.clone(),
            config.default_page_size,
        ));
        let question_service = Arc::new(QuestionService::new(repositories.questions));
        let user_service = Arc::new(UserService::new(repositories.users));
        let registration_token_service = Arc::new(RegistrationTokenService::new(
            repositories.registration_tokens,
            config.registration_token_expiration_hours,
        ));
        let registration_service = Arc::new(RegistrationService::new(
            user_service.clone(),
            registration_token_service.clone(),
            token_delivery,
        ));
        let jwt_service = Arc::new(JwtService::new(
            &config.jwt_secret,
            config.jwt_expiration_hours,
        ));

        Self {
            quiz_service,
            question_service,
            user_service,
            registration_service,
            registration_token_service,
            jwt_service,
            config: Arc::new(config),
            db: None,
        }
    }
}
