//! Persistence seam for users and pending otps.
//!
//! Handlers only ever talk to an [`AuthStore`]. Uniqueness of a user's mobile
//! and the single live otp per mobile are enforced by the store itself, so
//! several service instances can share one backend.

use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

use crate::models::{NewUser, OtpRecord, User};

#[cfg(test)]
use mockall::automock;

pub mod memory;

pub use memory::MemoryStore;

#[derive(Debug, Error)]
pub enum StoreError {
    /// A unique constraint rejected the write
    #[error("{0}")]
    Conflict(String),
    #[error("Store failure: {0}")]
    Backend(#[from] anyhow::Error),
}

#[cfg_attr(test, automock)]
#[async_trait]
pub trait AuthStore: Send + Sync {
    /// Insert a user and assign its id. Fails with `Conflict` when the mobile
    /// is already registered.
    async fn insert_user(&self, user: NewUser) -> Result<User, StoreError>;

    async fn find_user_by_mobile(&self, mobile: &str) -> Result<Option<User>, StoreError>;

    /// Insert or overwrite the otp keyed by `record.mobile`, code and
    /// timestamp both.
    async fn upsert_otp(&self, record: &OtpRecord) -> Result<(), StoreError>;

    /// Find the otp matching both the mobile and the exact code
    async fn find_otp(&self, mobile: &str, otp: &str) -> Result<Option<OtpRecord>, StoreError>;

    /// Delete the otp matching both the mobile and the exact code.
    /// Returns false when nothing matched.
    async fn delete_otp(&self, mobile: &str, otp: &str) -> Result<bool, StoreError>;
}

pub type SharedStore = Arc<dyn AuthStore>;

pub(crate) fn duplicate_mobile(mobile: &str) -> StoreError {
    StoreError::Conflict(format!("User already exists with same mobile: {mobile}"))
}
