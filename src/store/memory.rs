//! In-process [`AuthStore`] for tests and local runs. Data is lost on restart.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use super::{duplicate_mobile, AuthStore, StoreError};
use crate::models::{NewUser, OtpRecord, User};

#[derive(Debug, Default)]
struct Tables {
    // both keyed by mobile
    users: HashMap<String, User>,
    otps: HashMap<String, OtpRecord>,
    last_user_id: u32,
}

#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    tables: Arc<RwLock<Tables>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn user_count(&self) -> usize {
        self.tables.read().await.users.len()
    }

    pub async fn otp_count(&self) -> usize {
        self.tables.read().await.otps.len()
    }

    /// Current otp for a mobile regardless of its code
    pub async fn otp_for(&self, mobile: &str) -> Option<OtpRecord> {
        self.tables.read().await.otps.get(mobile).cloned()
    }
}

#[async_trait]
impl AuthStore for MemoryStore {
    async fn insert_user(&self, user: NewUser) -> Result<User, StoreError> {
        let mut tables = self.tables.write().await;
        if tables.users.contains_key(&user.mobile) {
            return Err(duplicate_mobile(&user.mobile));
        }
        tables.last_user_id += 1;
        let user = user.into_user(tables.last_user_id);
        tables.users.insert(user.mobile.clone(), user.clone());
        Ok(user)
    }

    async fn find_user_by_mobile(&self, mobile: &str) -> Result<Option<User>, StoreError> {
        Ok(self.tables.read().await.users.get(mobile).cloned())
    }

    async fn upsert_otp(&self, record: &OtpRecord) -> Result<(), StoreError> {
        let mut tables = self.tables.write().await;
        tables.otps.insert(record.mobile.clone(), record.clone());
        Ok(())
    }

    async fn find_otp(&self, mobile: &str, otp: &str) -> Result<Option<OtpRecord>, StoreError> {
        let tables = self.tables.read().await;
        Ok(tables.otps.get(mobile).filter(|r| r.otp == otp).cloned())
    }

    async fn delete_otp(&self, mobile: &str, otp: &str) -> Result<bool, StoreError> {
        let mut tables = self.tables.write().await;
        let matches = tables.otps.get(mobile).is_some_and(|r| r.otp == otp);
        if matches {
            tables.otps.remove(mobile);
        }
        Ok(matches)
    }
}
