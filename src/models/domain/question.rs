use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{
    auth::access::Owned,
    models::{
        domain::Quiz,
        dto::request::{AnswerRequest, QuestionRequest},
    },
};

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct Question {
    pub id: String,
    pub quiz_id: String,
    pub created_by_user_id: String, // Copied from the parent quiz
    pub text: String,
    pub order: i32,
    pub answers: Vec<Answer>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modified_at: Option<DateTime<Utc>>,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct Answer {
    pub id: String,
    pub text: String,
    pub order: i32,
    pub correct: bool,
}

impl Answer {
    pub fn new(text: &str, order: i32, correct: bool) -> Self {
        Answer {
            id: Uuid::new_v4().to_string(),
            text: text.to_string(),
            order,
            correct,
        }
    }
}

fn answers_from_requests(requests: Vec<AnswerRequest>) -> Vec<Answer> {
    requests
        .into_iter()
        .enumerate()
        .map(|(i, a)| Answer::new(&a.text, i as i32, a.correct))
        .collect()
}

impl Question {
    /// Builds a question attached to `quiz`; ownership follows the quiz.
    pub fn for_quiz(quiz: &Quiz, request: QuestionRequest) -> Self {
        let now = Utc::now();
        Question {
            id: Uuid::new_v4().to_string(),
            quiz_id: quiz.id.clone(),
            created_by_user_id: quiz.created_by_user_id.clone(),
            text: request.text,
            order: request.order.unwrap_or(0),
            answers: answers_from_requests(request.answers),
            created_at: Some(now),
            modified_at: Some(now),
        }
    }

    pub fn apply(&mut self, changes: QuestionRequest) {
        self.text = changes.text;
        if let Some(order) = changes.order {
            self.order = order;
        }
        self.answers = answers_from_requests(changes.answers);
        self.modified_at = Some(Utc::now());
    }

    pub fn sorted_answers(&self) -> Vec<Answer> {
        let mut answers = self.answers.clone();
        answers.sort_by_key(|a| a.order);
        answers
    }
}

impl Owned for Question {
    fn owner_id(&self) -> &str {
        &self.created_by_user_id
    }
}
