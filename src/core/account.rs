//! Account business logic - admin and customer registration, login, and
//! admin sessions.
//!
//! Passwords are hashed with argon2 and never stored or logged in the
//! clear. Admin logins mint an opaque bearer token persisted with a hard
//! expiry; verification rejects unknown and expired tokens identically so a
//! probing client learns nothing from the difference.

use crate::{
    entities::{
        Admin, AdminColumn, Customer, CustomerColumn, Session, SessionColumn, admin, customer,
        session,
    },
    errors::{Error, Result},
};
use argon2::{
    Argon2,
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString, rand_core::OsRng},
};
use chrono::{Duration, Utc};
use sea_orm::{Set, prelude::*};

/// Hashes a password for storage.
pub fn hash_password(password: &str) -> Result<String> {
    let salt = SaltString::generate(&mut OsRng);
    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| Error::PasswordHash {
            message: e.to_string(),
        })
}

/// Verifies a password against a stored hash. A malformed stored hash is an
/// error; a wrong password is just `false`.
pub fn verify_password(password: &str, stored_hash: &str) -> Result<bool> {
    let parsed = PasswordHash::new(stored_hash).map_err(|e| Error::PasswordHash {
        message: e.to_string(),
    })?;
    Ok(Argon2::default()
        .verify_password(password.as_bytes(), &parsed)
        .is_ok())
}

fn require_credentials(email: &str, password: &str) -> Result<()> {
    if email.trim().is_empty() || !email.contains('@') {
        return Err(Error::Validation {
            message: "A valid email is required".to_string(),
        });
    }
    if password.len() < 6 {
        return Err(Error::Validation {
            message: "Password must be at least 6 characters".to_string(),
        });
    }
    Ok(())
}

/// Registers a back-office admin account.
pub async fn register_admin(
    db: &DatabaseConnection,
    email: &str,
    password: &str,
) -> Result<admin::Model> {
    require_credentials(email, password)?;

    let existing = Admin::find()
        .filter(AdminColumn::Email.eq(email))
        .one(db)
        .await?;
    if existing.is_some() {
        return Err(Error::EmailTaken {
            email: email.to_string(),
        });
    }

    let model = admin::ActiveModel {
        email: Set(email.to_string()),
        password_hash: Set(hash_password(password)?),
        ..Default::default()
    };
    model.insert(db).await.map_err(Into::into)
}

/// Logs an admin in, minting a fresh session token with the given lifetime.
/// Unknown email and wrong password both come back as invalid credentials.
pub async fn login_admin(
    db: &DatabaseConnection,
    email: &str,
    password: &str,
    ttl_minutes: i64,
) -> Result<session::Model> {
    let admin = Admin::find()
        .filter(AdminColumn::Email.eq(email))
        .one(db)
        .await?
        .ok_or(Error::InvalidCredentials)?;

    if !verify_password(password, &admin.password_hash)? {
        return Err(Error::InvalidCredentials);
    }

    let now = Utc::now();
    let model = session::ActiveModel {
        token: Set(uuid::Uuid::new_v4().to_string()),
        admin_email: Set(admin.email),
        created_at: Set(now),
        expires_at: Set(now + Duration::minutes(ttl_minutes)),
        ..Default::default()
    };
    model.insert(db).await.map_err(Into::into)
}

/// Resolves a bearer token to its session. Unknown and expired tokens both
/// fail as unauthorized.
pub async fn verify_session(db: &DatabaseConnection, token: &str) -> Result<session::Model> {
    let session = Session::find()
        .filter(SessionColumn::Token.eq(token))
        .one(db)
        .await?
        .ok_or(Error::Unauthorized)?;

    if session.is_expired() {
        return Err(Error::Unauthorized);
    }

    Ok(session)
}

/// Revokes a session token. Revoking a token that is already gone succeeds
/// quietly; logout is idempotent.
pub async fn revoke_session(db: &DatabaseConnection, token: &str) -> Result<()> {
    Session::delete_many()
        .filter(SessionColumn::Token.eq(token))
        .exec(db)
        .await?;
    Ok(())
}

/// Registers a storefront customer account.
pub async fn register_customer(
    db: &DatabaseConnection,
    name: &str,
    phone: &str,
    email: &str,
    password: &str,
) -> Result<customer::Model> {
    require_credentials(email, password)?;
    if name.trim().is_empty() {
        return Err(Error::Validation {
            message: "Customer name is required".to_string(),
        });
    }

    let existing = Customer::find()
        .filter(CustomerColumn::Email.eq(email))
        .one(db)
        .await?;
    if existing.is_some() {
        return Err(Error::EmailTaken {
            email: email.to_string(),
        });
    }

    let model = customer::ActiveModel {
        name: Set(name.trim().to_string()),
        phone: Set(phone.to_string()),
        email: Set(email.to_string()),
        password_hash: Set(hash_password(password)?),
        ..Default::default()
    };
    model.insert(db).await.map_err(Into::into)
}

/// Logs a storefront customer in, returning their profile. Customers carry
/// no server-side session; the storefront keeps the profile client-side.
pub async fn login_customer(
    db: &DatabaseConnection,
    email: &str,
    password: &str,
) -> Result<customer::Model> {
    let customer = Customer::find()
        .filter(CustomerColumn::Email.eq(email))
        .one(db)
        .await?
        .ok_or(Error::InvalidCredentials)?;

    if !verify_password(password, &customer.password_hash)? {
        return Err(Error::InvalidCredentials);
    }

    Ok(customer)
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use crate::test_utils::*;

    #[test]
    fn test_password_round_trip() -> Result<()> {
        let hash = hash_password("loom-weave-42")?;
        assert_ne!(hash, "loom-weave-42");
        assert!(verify_password("loom-weave-42", &hash)?);
        assert!(!verify_password("wrong", &hash)?);
        Ok(())
    }

    #[test]
    fn test_malformed_stored_hash_is_an_error() {
        let result = verify_password("anything", "not-a-phc-string");
        assert!(matches!(result, Err(Error::PasswordHash { .. })));
    }

    #[tokio::test]
    async fn test_register_admin_rejects_duplicates() -> Result<()> {
        let db = setup_test_db().await?;

        register_admin(&db, "admin@mill.example", "loom-weave-42").await?;
        let result = register_admin(&db, "admin@mill.example", "other-secret").await;
        assert!(matches!(result, Err(Error::EmailTaken { .. })));

        Ok(())
    }

    #[tokio::test]
    async fn test_register_admin_validates_credentials() -> Result<()> {
        let db = setup_test_db().await?;

        let result = register_admin(&db, "not-an-email", "loom-weave-42").await;
        assert!(matches!(result, Err(Error::Validation { .. })));

        let result = register_admin(&db, "admin@mill.example", "short").await;
        assert!(matches!(result, Err(Error::Validation { .. })));

        Ok(())
    }

    #[tokio::test]
    async fn test_login_admin_mints_session() -> Result<()> {
        let db = setup_test_db().await?;
        register_admin(&db, "admin@mill.example", "loom-weave-42").await?;

        let session = login_admin(&db, "admin@mill.example", "loom-weave-42", 60).await?;
        assert_eq!(session.admin_email, "admin@mill.example");
        assert!(!session.is_expired());

        let verified = verify_session(&db, &session.token).await?;
        assert_eq!(verified.id, session.id);

        Ok(())
    }

    #[tokio::test]
    async fn test_login_admin_bad_credentials() -> Result<()> {
        let db = setup_test_db().await?;
        register_admin(&db, "admin@mill.example", "loom-weave-42").await?;

        let result = login_admin(&db, "admin@mill.example", "wrong-pass", 60).await;
        assert!(matches!(result, Err(Error::InvalidCredentials)));

        let result = login_admin(&db, "nobody@mill.example", "loom-weave-42", 60).await;
        assert!(matches!(result, Err(Error::InvalidCredentials)));

        Ok(())
    }

    #[tokio::test]
    async fn test_expired_session_is_unauthorized() -> Result<()> {
        let db = setup_test_db().await?;
        register_admin(&db, "admin@mill.example", "loom-weave-42").await?;

        // A zero-minute lifetime expires immediately
        let session = login_admin(&db, "admin@mill.example", "loom-weave-42", 0).await?;
        let result = verify_session(&db, &session.token).await;
        assert!(matches!(result, Err(Error::Unauthorized)));

        Ok(())
    }

    #[tokio::test]
    async fn test_unknown_token_is_unauthorized() -> Result<()> {
        let db = setup_test_db().await?;

        let result = verify_session(&db, "no-such-token").await;
        assert!(matches!(result, Err(Error::Unauthorized)));

        Ok(())
    }

    #[tokio::test]
    async fn test_revoke_session_is_idempotent() -> Result<()> {
        let db = setup_test_db().await?;
        register_admin(&db, "admin@mill.example", "loom-weave-42").await?;
        let session = login_admin(&db, "admin@mill.example", "loom-weave-42", 60).await?;

        revoke_session(&db, &session.token).await?;
        assert!(matches!(
            verify_session(&db, &session.token).await,
            Err(Error::Unauthorized)
        ));

        // Second revoke is a quiet no-op
        revoke_session(&db, &session.token).await?;

        Ok(())
    }

    #[tokio::test]
    async fn test_customer_register_and_login() -> Result<()> {
        let db = setup_test_db().await?;

        let customer = register_customer(
            &db,
            "Asha Rao",
            "9876543210",
            "asha@example.com",
            "weft-and-warp",
        )
        .await?;
        assert_eq!(customer.email, "asha@example.com");
        assert_ne!(customer.password_hash, "weft-and-warp");

        let logged_in = login_customer(&db, "asha@example.com", "weft-and-warp").await?;
        assert_eq!(logged_in.id, customer.id);

        let result = login_customer(&db, "asha@example.com", "wrong").await;
        assert!(matches!(result, Err(Error::InvalidCredentials)));

        let result = register_customer(
            &db,
            "Other",
            "9000000000",
            "asha@example.com",
            "weft-and-warp",
        )
        .await;
        assert!(matches!(result, Err(Error::EmailTaken { .. })));

        Ok(())
    }
}
