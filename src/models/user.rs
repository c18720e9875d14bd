use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// User record as persisted in the `users` collection
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct User {
    pub id: u32,
    pub name: String,
    pub mobile: String,
    pub address: String,
    pub fingerprint: String,
}

/// User fields accepted at registration, before an id is assigned
#[derive(Debug, Clone, PartialEq)]
pub struct NewUser {
    pub name: String,
    pub mobile: String,
    pub address: String,
    pub fingerprint: String,
}

impl NewUser {
    pub fn into_user(self, id: u32) -> User {
        User {
            id,
            name: self.name,
            mobile: self.mobile,
            address: self.address,
            fingerprint: self.fingerprint,
        }
    }
}

/// The only user shape returned to clients. Never carries the fingerprint.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, ToSchema)]
pub struct PublicUser {
    #[schema(example = 1)]
    pub id: u32,
    #[schema(example = "John Doe")]
    pub name: String,
    #[schema(example = "9999999999")]
    pub mobile: String,
    #[schema(example = "221B Baker Street")]
    pub address: String,
}

impl From<User> for PublicUser {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            name: user.name,
            mobile: user.mobile,
            address: user.address,
        }
    }
}
