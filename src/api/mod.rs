//! HTTP layer - axum router, shared state, auth middleware, and the error
//! mapping clients depend on.
//!
//! Handlers stay thin: decode the request, call into [`crate::core`], encode
//! the result. Domain errors map to status codes here and nowhere else, and
//! every error body is `{"detail": ...}` so the storefront and dashboard can
//! surface messages uniformly. Admin routes sit behind a bearer-session
//! middleware; everything else is public.

use crate::{
    config::AppConfig,
    core::{account, events::PaymentEvents},
    email::Mailer,
    errors::{Error, Result},
};
use axum::{
    Json, Router, async_trait,
    extract::{FromRequestParts, Request, State},
    http::{Method, StatusCode, header, request::Parts},
    middleware::{Next, from_fn_with_state},
    response::{IntoResponse, Response},
    routing::{delete, get, post, put},
};
use sea_orm::DatabaseConnection;
use serde_json::json;
use std::sync::Arc;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

mod auth;
mod dashboard;
mod invoices;
mod orders;
mod sales;
mod shop;
mod vendor_payments;
mod vendors;

/// Shared application state handed to every handler.
#[derive(Clone)]
pub struct AppState {
    pub db: Arc<DatabaseConnection>,
    pub events: Arc<PaymentEvents>,
    pub mailer: Arc<dyn Mailer>,
    pub config: Arc<AppConfig>,
}

impl AppState {
    #[must_use]
    pub fn new(
        db: DatabaseConnection,
        events: PaymentEvents,
        mailer: Arc<dyn Mailer>,
        config: AppConfig,
    ) -> Self {
        Self {
            db: Arc::new(db),
            events: Arc::new(events),
            mailer,
            config: Arc::new(config),
        }
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let status = match &self {
            Self::Validation { .. } | Self::InvalidAmount { .. } => StatusCode::UNPROCESSABLE_ENTITY,
            Self::OrderNotFound { .. } | Self::NotFound { .. } => StatusCode::NOT_FOUND,
            Self::EmailMismatch { .. } => StatusCode::FORBIDDEN,
            Self::InvoiceExists { .. } | Self::EmailTaken { .. } => StatusCode::CONFLICT,
            Self::InvalidCredentials | Self::Unauthorized => StatusCode::UNAUTHORIZED,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };

        let detail = if status == StatusCode::INTERNAL_SERVER_ERROR {
            tracing::error!(error = %self, "request failed");
            "Internal server error".to_string()
        } else {
            self.to_string()
        };

        (status, Json(json!({ "detail": detail }))).into_response()
    }
}

fn bearer_token(headers: &axum::http::HeaderMap) -> Result<&str> {
    headers
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.strip_prefix("Bearer "))
        .ok_or(Error::Unauthorized)
}

/// Extractor form of the admin gate, for admin-only routes that share a
/// path with public ones (order deletion lives under `/api/orders/{id}`).
pub struct AdminSession(pub crate::entities::SessionModel);

#[async_trait]
impl FromRequestParts<AppState> for AdminSession {
    type Rejection = Error;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self> {
        let token = bearer_token(&parts.headers)?;
        let session = account::verify_session(&state.db, token).await?;
        Ok(Self(session))
    }
}

/// Bearer-session gate for admin routes. CORS preflights pass through;
/// everything else needs a live session token.
async fn require_admin(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Result<Response> {
    if request.method() == Method::OPTIONS {
        return Ok(next.run(request).await);
    }

    let token = bearer_token(request.headers())?;
    account::verify_session(&state.db, token).await?;

    Ok(next.run(request).await)
}

/// Assembles the full application router.
#[must_use]
pub fn router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // The storefront calls both spellings of the collection path
    let public = Router::new()
        .route("/api/orders", post(orders::create_order))
        .route(
            "/api/orders/",
            get(orders::list_orders).post(orders::create_order),
        )
        .route(
            "/api/orders/:id",
            get(orders::get_order).delete(orders::delete_order),
        )
        .route(
            "/api/orders/:id/request-cancellation",
            post(orders::request_cancellation),
        )
        .route("/api/invoices/", get(invoices::list_invoices))
        .route("/api/invoices/generate", post(invoices::generate_invoice))
        .route("/api/invoices/:id", get(invoices::get_invoice))
        .route("/api/invoices/:id/status", put(invoices::set_status))
        .route("/api/invoices/order/:order_id", get(invoices::for_order))
        .route(
            "/api/vendors/",
            get(vendors::list_vendors).post(vendors::create_vendor),
        )
        .route(
            "/api/vendors/:id",
            get(vendors::get_vendor)
                .put(vendors::update_vendor)
                .delete(vendors::delete_vendor),
        )
        .route(
            "/api/vendor-payments/",
            get(vendor_payments::list_payments).post(vendor_payments::create_payment),
        )
        .route(
            "/api/vendor-payments/:id",
            get(vendor_payments::get_payment)
                .put(vendor_payments::save_payment)
                .delete(vendor_payments::delete_payment),
        )
        .route(
            "/api/vendor-payments/vendor/:vendor_id",
            get(vendor_payments::for_vendor),
        )
        .route("/api/sales/", get(sales::list_sales))
        .route("/api/sales/analytics", get(sales::analytics))
        .route("/api/readymade-products", get(shop::list_products))
        .route("/api/readymade-products/cat/all", get(shop::catalogue))
        .route("/api/readymade-products/:id", get(shop::get_product))
        .route("/auth/register", post(auth::admin_register))
        .route("/auth/login", post(auth::admin_login))
        .route("/users/register", post(auth::customer_register))
        .route("/users/login", post(auth::customer_login))
        .route("/users/enquiry", post(auth::submit_enquiry));

    let admin = Router::new()
        .route(
            "/admin/products",
            get(dashboard::list_products).post(dashboard::create_product),
        )
        .route(
            "/admin/products/:id",
            put(dashboard::update_product).delete(dashboard::delete_product),
        )
        .route(
            "/admin/fabrics",
            get(dashboard::list_fabrics).post(dashboard::create_fabric),
        )
        .route(
            "/admin/fabrics/:id",
            put(dashboard::update_fabric).delete(dashboard::delete_fabric),
        )
        .route(
            "/admin/employees",
            get(dashboard::list_employees).post(dashboard::create_employee),
        )
        .route(
            "/admin/employees/:id",
            put(dashboard::update_employee).delete(dashboard::delete_employee),
        )
        .route("/admin/billing", get(dashboard::billing))
        .route("/admin/send-email", post(dashboard::send_email))
        .route("/admin/enquiries", get(dashboard::list_enquiries))
        .route("/admin/enquiries/:id", delete(dashboard::delete_enquiry))
        .layer(from_fn_with_state(state.clone(), require_admin));

    public
        .merge(admin)
        .with_state(state)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}

/// Binds the listener and serves until the process is stopped.
///
/// # Errors
/// Returns an error if the port cannot be bound or the server fails.
pub async fn run_server(state: AppState) -> Result<()> {
    let port = state.config.port;
    let app = router(state);

    let addr = std::net::SocketAddr::from(([0, 0, 0, 0], port));
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(%addr, "listening");

    axum::serve(listener, app).await?;
    Ok(())
}
