//! Session entity - Opaque bearer tokens for admin access.
//!
//! Replaces an implicit always-present token lookup with an explicit record
//! that knows when it expires. Expired rows are rejected at verification
//! time rather than garbage-collected eagerly.

use chrono::Utc;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Admin session database model
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "sessions")]
pub struct Model {
    /// Unique identifier
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Opaque bearer token handed to the client at login
    #[sea_orm(unique)]
    pub token: String,
    /// Email of the admin this session belongs to
    pub admin_email: String,
    /// When the session was issued
    pub created_at: DateTimeUtc,
    /// Hard expiry; the session is invalid from this instant on
    pub expires_at: DateTimeUtc,
}

impl Model {
    /// Typed expiry check used by the admin middleware.
    #[must_use]
    pub fn is_expired(&self) -> bool {
        self.expires_at <= Utc::now()
    }
}

/// Sessions have no relationships with other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn test_expiry_check() {
        let base = Model {
            id: 1,
            token: "tok".to_string(),
            admin_email: "admin@mill.example".to_string(),
            created_at: Utc::now(),
            expires_at: Utc::now() + Duration::minutes(60),
        };
        assert!(!base.is_expired());

        let expired = Model {
            expires_at: Utc::now() - Duration::seconds(1),
            ..base
        };
        assert!(expired.is_expired());
    }
}
