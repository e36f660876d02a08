//! Account Records

use std::fmt::{Display, Formatter, Result as FmtResult};

use jiff::Timestamp;
use uuid::Uuid;

/// User primary key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct UserUuid(Uuid);

impl UserUuid {
    /// A fresh time-ordered identifier.
    #[must_use]
    pub fn generate() -> Self {
        Self(Uuid::now_v7())
    }

    #[must_use]
    pub const fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    #[must_use]
    pub const fn into_uuid(self) -> Uuid {
        self.0
    }
}

impl Display for UserUuid {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        Display::fmt(&self.0, f)
    }
}

impl From<Uuid> for UserUuid {
    fn from(value: Uuid) -> Self {
        Self::from_uuid(value)
    }
}

/// User Record
#[derive(Debug, Clone, PartialEq)]
pub struct UserRecord {
    pub uuid: UserUuid,
    pub email: String,

    /// PHC-format Argon2id hash.
    pub password_hash: String,

    pub created_at: Timestamp,
}
