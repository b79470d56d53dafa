//! Database module for handling document-store connections and operations
//!
//! This module provides configuration, a tagged connection handle, and the
//! generic document operations (insert, query, lookup, atomic set append)
//! used by the services.

use crate::error::{DatabaseError, DatabaseResult};
use futures::stream::TryStreamExt;
use mongodb::{
    Client, Database,
    bson::{Bson, Document, doc, oid::ObjectId},
};
use std::env;

/// Database configuration struct
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    /// Database connection URL, e.g. `mongodb://localhost:27017`
    pub database_url: Option<String>,
    /// Name of the database holding the collections
    pub database_name: Option<String>,
}

impl DatabaseConfig {
    /// Create a new DatabaseConfig from environment variables
    ///
    /// Both parameters are optional; a missing one leaves storage
    /// unconfigured rather than failing startup.
    pub fn from_env() -> Self {
        Self {
            database_url: env::var("DATABASE_URL").ok(),
            database_name: env::var("DATABASE_NAME").ok(),
        }
    }

    /// Whether both connection parameters are present
    pub fn is_configured(&self) -> bool {
        self.database_url.is_some() && self.database_name.is_some()
    }
}

/// Handle to the document store, established once at process start
///
/// The handle is tagged rather than nullable: every operation on an
/// [`DocumentStore::Unavailable`] handle fails with
/// [`DatabaseError::Unconfigured`], so call sites cannot forget the
/// unconfigured case.
#[derive(Clone)]
pub enum DocumentStore {
    /// Live handle to a named database
    Connected(Database),
    /// Storage was never configured
    Unavailable,
}

impl DocumentStore {
    /// Connect according to the given configuration
    ///
    /// Returns [`DocumentStore::Unavailable`] when either connection
    /// parameter is missing. The driver connects lazily, so a successful
    /// return does not imply the server is reachable; use [`Self::ping`]
    /// to probe.
    pub async fn connect(config: &DatabaseConfig) -> DatabaseResult<Self> {
        let (Some(url), Some(name)) = (&config.database_url, &config.database_name) else {
            tracing::warn!("DATABASE_URL or DATABASE_NAME not set, storage is unavailable");
            return Ok(Self::Unavailable);
        };

        let client = Client::with_uri_str(url)
            .await
            .map_err(DatabaseError::Connection)?;

        Ok(Self::Connected(client.database(name)))
    }

    /// Whether a database handle exists
    pub fn is_connected(&self) -> bool {
        matches!(self, Self::Connected(_))
    }

    fn database(&self) -> DatabaseResult<&Database> {
        match self {
            Self::Connected(db) => Ok(db),
            Self::Unavailable => Err(DatabaseError::Unconfigured),
        }
    }

    /// Round-trip to the server to verify connectivity
    pub async fn ping(&self) -> DatabaseResult<()> {
        self.database()?
            .run_command(doc! { "ping": 1 })
            .await
            .map_err(DatabaseError::Query)?;

        Ok(())
    }

    /// Insert a single document and return its new identifier in hex form
    pub async fn create_document(
        &self,
        collection: &str,
        document: Document,
    ) -> DatabaseResult<String> {
        let result = self
            .database()?
            .collection::<Document>(collection)
            .insert_one(document)
            .await
            .map_err(DatabaseError::Query)?;

        let id = match result.inserted_id {
            Bson::ObjectId(oid) => oid.to_hex(),
            other => other.to_string(),
        };

        Ok(id)
    }

    /// Fetch up to `limit` documents matching `filter`, in storage order
    ///
    /// An empty collection yields an empty vector, not an error.
    pub async fn get_documents(
        &self,
        collection: &str,
        filter: Document,
        limit: i64,
    ) -> DatabaseResult<Vec<Document>> {
        let cursor = self
            .database()?
            .collection::<Document>(collection)
            .find(filter)
            .limit(limit)
            .await
            .map_err(DatabaseError::Query)?;

        cursor.try_collect().await.map_err(DatabaseError::Query)
    }

    /// Look up one document by its identifier
    pub async fn find_document_by_id(
        &self,
        collection: &str,
        id: ObjectId,
    ) -> DatabaseResult<Option<Document>> {
        self.database()?
            .collection::<Document>(collection)
            .find_one(doc! { "_id": id })
            .await
            .map_err(DatabaseError::Query)
    }

    /// Count all documents in a collection
    pub async fn count_documents(&self, collection: &str) -> DatabaseResult<u64> {
        self.database()?
            .collection::<Document>(collection)
            .count_documents(doc! {})
            .await
            .map_err(DatabaseError::Query)
    }

    /// Atomically append `value` to an array field, skipping duplicates
    ///
    /// Issues a single `$addToSet` update, never a read-then-write round
    /// trip, so concurrent calls against the same document cannot lose
    /// entries. Returns whether a document matched `id`.
    pub async fn add_to_set(
        &self,
        collection: &str,
        id: ObjectId,
        field: &str,
        value: Bson,
    ) -> DatabaseResult<bool> {
        let result = self
            .database()?
            .collection::<Document>(collection)
            .update_one(doc! { "_id": id }, doc! { "$addToSet": { field: value } })
            .await
            .map_err(DatabaseError::Query)?;

        Ok(result.matched_count > 0)
    }

    /// List the collection names present in the database
    pub async fn collection_names(&self) -> DatabaseResult<Vec<String>> {
        self.database()?
            .list_collection_names()
            .await
            .map_err(DatabaseError::Query)
    }
}
