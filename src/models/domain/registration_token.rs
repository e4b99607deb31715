use chrono::{DateTime, Duration, Utc};
use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

/// Purpose of a token handed to the delivery channel.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TokenType {
    RegistrationMail,
    ForgotPassword,
}

impl std::fmt::Display for TokenType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TokenType::RegistrationMail => write!(f, "registration_mail"),
            TokenType::ForgotPassword => write!(f, "forgot_password"),
        }
    }
}

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct RegistrationToken {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub user_id: String,
    pub token_hash: String,
    pub token_type: TokenType,
    #[serde(with = "bson_datetime")]
    pub expires_at: DateTime<Utc>,
    #[serde(with = "bson_datetime")]
    pub created_at: DateTime<Utc>,
}

/// Stores chrono timestamps as native BSON dates so range queries compare
/// instants instead of strings.
mod bson_datetime {
    use chrono::{DateTime, Utc};
    use mongodb::bson;
    use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

    pub fn serialize<S: Serializer>(value: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error> {
        bson::DateTime::from_millis(value.timestamp_millis()).serialize(serializer)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<DateTime<Utc>, D::Error> {
        let millis = bson::DateTime::deserialize(deserializer)?.timestamp_millis();
        DateTime::<Utc>::from_timestamp_millis(millis)
            .ok_or_else(|| de::Error::custom(format!("timestamp {} out of range", millis)))
    }
}

impl RegistrationToken {
    pub fn new(user_id: &str, token_hash: String, expiration_hours: i64) -> Self {
        let now = Utc::now();
        Self {
            id: None,
            user_id: user_id.to_string(),
            token_hash,
            token_type: TokenType::RegistrationMail,
            expires_at: now + Duration::hours(expiration_hours),
            created_at: now,
        }
    }

    pub fn is_expired(&self) -> bool {
        self.expires_at <= Utc::now()
    }
}

pub fn hash_token(token: &str) -> String {
    use sha2::{Digest, Sha256};
    let mut hasher = Sha256::new();
    hasher.update(token.as_bytes());
    format!("{:x}", hasher.finalize())
}
