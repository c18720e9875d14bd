use mongodb::bson::Document;
use mongodb::error::Result as MongoResult;
use mongodb::options::{FindOneAndUpdateOptions, FindOneOptions, IndexOptions, UpdateOptions};
use mongodb::{options::ClientOptions, Client, Database, IndexModel};
use serde::{de::DeserializeOwned, Serialize};
use std::time::Duration;

use crate::{config::MongoConfig, constants::*};

#[cfg(test)]
use mockall::automock;

/// Thin wrapper over the mongodb database handle.
/// Store logic lives in `AppDatabase` and calls through these helpers.
pub struct DbClient(Database);

#[cfg_attr(test, automock)]
impl DbClient {
    pub async fn new(config: &MongoConfig) -> MongoResult<Self> {
        let timeout = Duration::from_secs(MONGO_CONN_TIMEOUT);
        // create the mongodb client options
        let mut client_options = ClientOptions::parse(&config.uri).await?;
        client_options.max_pool_size = Some(config.max_pool_size);
        client_options.min_pool_size = Some(config.min_pool_size);
        client_options.connect_timeout = Some(timeout);
        // create the client and return Result object
        let client = Client::with_options(client_options)?;
        let db_client = Self(client.database(&config.db_name));
        Ok(db_client)
    }

    pub async fn create_unique_index(&self, coll: &str, field: &str) -> MongoResult<()> {
        let mut keys = Document::new();
        keys.insert(field, 1);
        let options = IndexOptions::builder().unique(true).build();
        let index = IndexModel::builder().keys(keys).options(options).build();
        self.0
            .collection::<Document>(coll)
            .create_index(index, None)
            .await?;
        Ok(())
    }

    pub async fn find_one<T>(
        &self,
        coll: &str,
        filter: Option<Document>,
        options: Option<FindOneOptions>,
    ) -> MongoResult<Option<T>>
    where
        T: DeserializeOwned + Unpin + Send + Sync + 'static,
    {
        let coll = self.0.collection::<T>(coll);
        coll.find_one(filter, options).await
    }

    pub async fn insert_one<T>(&self, coll: &str, data: &T) -> MongoResult<()>
    where
        T: Serialize + Send + Sync + 'static,
    {
        let coll = self.0.collection::<T>(coll);
        coll.insert_one(data, None).await?;
        Ok(())
    }

    pub async fn update_one(
        &self,
        coll: &str,
        filter: Document,
        update: Document,
        options: Option<UpdateOptions>,
    ) -> MongoResult<()> {
        let coll = self.0.collection::<Document>(coll);
        coll.update_one(filter, update, options).await?;
        Ok(())
    }

    pub async fn delete_one(&self, coll: &str, filter: Document) -> MongoResult<u64> {
        let coll = self.0.collection::<Document>(coll);
        let result = coll.delete_one(filter, None).await?;
        Ok(result.deleted_count)
    }

    pub async fn find_one_and_update<T>(
        &self,
        coll: &str,
        filter: Document,
        update: Document,
        options: Option<FindOneAndUpdateOptions>,
    ) -> MongoResult<Option<T>>
    where
        T: DeserializeOwned + Unpin + Send + Sync + 'static,
    {
        let coll = self.0.collection::<T>(coll);
        coll.find_one_and_update(filter, update, options).await
    }
}
