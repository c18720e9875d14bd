use async_trait::async_trait;
use mockall_double::double;
use mongodb::bson::doc;
use mongodb::error::{ErrorKind, Result as MongoResult, WriteFailure};
use mongodb::options::UpdateOptions;

use crate::{
    config::MongoConfig,
    constants::*,
    models::{NewUser, OtpRecord, User},
    store::{duplicate_mobile, AuthStore, StoreError},
    utils::get_seq_nxt_val,
};

pub mod client;

#[double]
use client::DbClient;

/// mongodb backed `AuthStore`
pub struct AppDatabase {
    client: DbClient,
}

impl AppDatabase {
    pub async fn new(config: &MongoConfig) -> MongoResult<Self> {
        let client = DbClient::new(config).await?;
        Ok(Self { client })
    }

    /// Create the unique indexes backing the store invariants.
    /// Creating an index that already exists is a no-op in mongodb.
    pub async fn ensure_schema(&self) -> MongoResult<()> {
        self.client.create_unique_index(COLL_USERS, "mobile").await?;
        self.client.create_unique_index(COLL_USERS, "id").await?;
        self.client.create_unique_index(COLL_OTP, "mobile").await?;
        tracing::info!("Database indexes are in place");
        Ok(())
    }

    async fn upsert_otp_once(&self, record: &OtpRecord) -> MongoResult<()> {
        let filter = doc! {"mobile": &record.mobile};
        let update = doc! {"$set": {"otp": &record.otp, "createdAt": record.created_at as i64}};
        let options = UpdateOptions::builder().upsert(true).build();
        self.client
            .update_one(COLL_OTP, filter, update, Some(options))
            .await
    }
}

/// Name of the unique index a duplicate key error was raised on.
/// `Some("")` when the server message does not name the index.
fn duplicate_key_index(err: &mongodb::error::Error) -> Option<&str> {
    match err.kind.as_ref() {
        ErrorKind::Write(WriteFailure::WriteError(write_err))
            if write_err.code == MONGO_DUPLICATE_KEY_CODE =>
        {
            Some(index_name(&write_err.message).unwrap_or_default())
        }
        _ => None,
    }
}

// "E11000 duplicate key error collection: db.users index: mobile_1 dup key: { ... }"
fn index_name(message: &str) -> Option<&str> {
    let (_, rest) = message.split_once("index: ")?;
    rest.split_whitespace().next()
}

impl From<mongodb::error::Error> for StoreError {
    fn from(err: mongodb::error::Error) -> Self {
        Self::Backend(err.into())
    }
}

#[async_trait]
impl AuthStore for AppDatabase {
    async fn insert_user(&self, user: NewUser) -> Result<User, StoreError> {
        let id = get_seq_nxt_val(USER_ID_SEQ, &self.client).await?;
        let user = user.into_user(id);
        let err = match self.client.insert_one::<User>(COLL_USERS, &user).await {
            Ok(()) => return Ok(user),
            Err(err) => err,
        };
        match duplicate_key_index(&err) {
            Some(MOBILE_INDEX) => Err(duplicate_mobile(&user.mobile)),
            Some(index) => {
                tracing::error!("Duplicate key on users index `{index}` for id {}", user.id);
                Err(err.into())
            }
            None => Err(err.into()),
        }
    }

    async fn find_user_by_mobile(&self, mobile: &str) -> Result<Option<User>, StoreError> {
        let filter = Some(doc! {"mobile": mobile});
        let user = self.client.find_one::<User>(COLL_USERS, filter, None).await?;
        Ok(user)
    }

    async fn upsert_otp(&self, record: &OtpRecord) -> Result<(), StoreError> {
        match self.upsert_otp_once(record).await {
            Ok(()) => Ok(()),
            // two concurrent upserts can both miss and race on the unique index,
            // the retry then matches the document the other one inserted
            Err(err) if duplicate_key_index(&err).is_some() => {
                tracing::debug!("Retrying otp upsert after duplicate key race");
                self.upsert_otp_once(record).await?;
                Ok(())
            }
            Err(err) => Err(err.into()),
        }
    }

    async fn find_otp(&self, mobile: &str, otp: &str) -> Result<Option<OtpRecord>, StoreError> {
        let filter = Some(doc! {"mobile": mobile, "otp": otp});
        let record = self.client.find_one::<OtpRecord>(COLL_OTP, filter, None).await?;
        Ok(record)
    }

    async fn delete_otp(&self, mobile: &str, otp: &str) -> Result<bool, StoreError> {
        let filter = doc! {"mobile": mobile, "otp": otp};
        let deleted = self.client.delete_one(COLL_OTP, filter).await?;
        Ok(deleted > 0)
    }
}
