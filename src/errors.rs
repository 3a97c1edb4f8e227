//! Unified error types and result handling.
//!
//! Every fallible operation in the crate returns [`Result`]. Domain rule
//! violations get their own variants so the API layer can map them to the
//! status codes clients rely on; everything else funnels into the
//! infrastructure variants at the bottom.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// Input failed validation before any database work was attempted.
    #[error("Validation error: {message}")]
    Validation { message: String },

    /// Order lookup failed. The cancellation-request flow surfaces this as a
    /// distinct 404 with its own user-facing message.
    #[error("Order not found: {id}")]
    OrderNotFound { id: i64 },

    /// Cancellation was requested with an email that does not match the one
    /// stored on the order. Deliberately distinct from [`Error::OrderNotFound`].
    #[error("Email does not match order {order_id}")]
    EmailMismatch { order_id: i64 },

    /// An invoice already exists for this order. At most one invoice may ever
    /// be generated per order.
    #[error("Order {order_id} already has an invoice")]
    InvoiceExists { order_id: i64 },

    /// Generic record-by-id lookup failure for everything that does not need
    /// its own variant.
    #[error("{entity} not found: {id}")]
    NotFound { entity: &'static str, id: i64 },

    /// Registration attempted with an email that is already on file.
    #[error("Email already registered: {email}")]
    EmailTaken { email: String },

    /// Login with an unknown email or wrong password.
    #[error("Invalid email or password")]
    InvalidCredentials,

    /// Missing, unknown, or expired admin session token.
    #[error("Not authenticated")]
    Unauthorized,

    /// A monetary amount was negative, NaN, or infinite.
    #[error("Invalid amount: {amount}")]
    InvalidAmount { amount: f64 },

    /// Password hashing or verification failed.
    #[error("Password hashing error: {message}")]
    PasswordHash { message: String },

    /// Outbound mail could not be handed to the mailer.
    #[error("Mail error: {message}")]
    Mail { message: String },

    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Database error: {0}")]
    Database(#[from] sea_orm::DbErr),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Environment variable error: {0}")]
    EnvVar(#[from] std::env::VarError),
}

// Convenience `Result` type
pub type Result<T> = std::result::Result<T, Error>;
