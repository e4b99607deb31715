use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{auth::access::Owned, models::dto::request::QuizRequest};

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct Quiz {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    pub created_by_user_id: String, // Owner, the only user allowed to mutate
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modified_at: Option<DateTime<Utc>>,
}

impl Quiz {
    pub fn new(name: &str, description: Option<&str>, created_by_user_id: &str) -> Self {
        let now = Utc::now();
        Quiz {
            id: Uuid::new_v4().to_string(),
            name: name.to_string(),
            description: description.map(str::to_string),
            created_by_user_id: created_by_user_id.to_string(),
            created_at: Some(now),
            modified_at: Some(now),
        }
    }

    pub fn from_request(request: QuizRequest, created_by_user_id: &str) -> Self {
        Quiz::new(
            &request.name,
            request.description.as_deref(),
            created_by_user_id,
        )
    }

    /// Copies the mutable fields of `changes` onto this quiz. Identity and
    /// ownership are left untouched.
    pub fn apply(&mut self, changes: QuizRequest) {
        self.name = changes.name;
        self.description = changes.description;
        self.modified_at = Some(Utc::now());
    }
}

impl Owned for Quiz {
    fn owner_id(&self) -> &str {
        &self.created_by_user_id
    }
}
