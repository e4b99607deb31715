use async_trait::async_trait;
use log::info;
use mongodb::{
    bson::{self, doc, DateTime as BsonDateTime},
    options::IndexOptions,
    Collection, IndexModel,
};

use crate::{
    db::{Database, REGISTRATION_TOKENS_COLLECTION},
    errors::AppResult,
    models::domain::{RegistrationToken, TokenType},
};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RegistrationTokenRepository: Send + Sync {
    async fn create(&self, token: RegistrationToken) -> AppResult<RegistrationToken>;
    /// Removes and returns, in one step, the token matching hash, user and
    /// type. A second call with the same arguments finds nothing.
    async fn consume(
        &self,
        hash: &str,
        user_id: &str,
        token_type: TokenType,
    ) -> AppResult<Option<RegistrationToken>>;
    async fn delete_expired(&self) -> AppResult<u64>;
    async fn ensure_indexes(&self) -> AppResult<()>;
}

pub struct MongoRegistrationTokenRepository {
    collection: Collection<RegistrationToken>,
}

impl MongoRegistrationTokenRepository {
    pub fn new(db: &Database) -> Self {
        let collection = db.get_collection(REGISTRATION_TOKENS_COLLECTION);
        Self { collection }
    }
}

#[async_trait]
impl RegistrationTokenRepository for MongoRegistrationTokenRepository {
    async fn create(&self, token: RegistrationToken) -> AppResult<RegistrationToken> {
        self.collection.insert_one(&token).await?;
        Ok(token)
    }

    async fn consume(
        &self,
        hash: &str,
        user_id: &str,
        token_type: TokenType,
    ) -> AppResult<Option<RegistrationToken>> {
        let filter = doc! {
            "token_hash": hash,
            "user_id": user_id,
            "token_type": bson::to_bson(&token_type)?,
        };
        let token = self.collection.find_one_and_delete(filter).await?;
        Ok(token)
    }

    async fn delete_expired(&self) -> AppResult<u64> {
        let now = BsonDateTime::now();
        let result = self
            .collection
            .delete_many(doc! { "expires_at": { "$lt": now } })
            .await?;

        Ok(result.deleted_count)
    }

    async fn ensure_indexes(&self) -> AppResult<()> {
        let token_hash_options = IndexOptions::builder().unique(true).build();
        let token_hash_model = IndexModel::builder()
            .keys(doc! { "token_hash": 1 })
            .options(token_hash_options)
            .build();
        self.collection.create_index(token_hash_model).await?;
        info!("Created unique index on registration_tokens.token_hash");

        let user_id_model = IndexModel::builder().keys(doc! { "user_id": 1 }).build();
        self.collection.create_index(user_id_model).await?;
        info!("Created index on registration_tokens.user_id");

        let expires_at_model = IndexModel::builder().keys(doc! { "expires_at": 1 }).build();
        self.collection.create_index(expires_at_model).await?;
        info!("Created index on registration_tokens.expires_at");

        Ok(())
    }
}
