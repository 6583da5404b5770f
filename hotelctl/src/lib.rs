//! # hotelctl: Hotel availability for event ticket holders
//!
//! `hotelctl` serves the hotel catalogue of an event platform. Attendees whose ticket includes
//! accommodation can list the partner hotels and look at the rooms each one offers. Everyone else
//! is told why they can't: no enrollment or ticket yet (`404`), or a ticket that doesn't pay for a
//! hotel (`402`).
//!
//! ## Architecture
//!
//! The application is built on [Axum](https://github.com/tokio-rs/axum) for the HTTP layer and
//! uses PostgreSQL for persistence. Enrollments, tickets and hotels are written by other parts of
//! the platform; this service only reads them.
//!
//! ### Request Flow
//!
//! A request to `/hotels` first passes through the [`CurrentUser`](api::models::users::CurrentUser)
//! extractor, which verifies the bearer JWT and checks that its session is still stored. The
//! handler then asks [`services::HotelService`] for the data. The service re-checks eligibility on
//! every call (enrollment, then ticket, then ticket type and payment status) before reading
//! hotels through the [`db::store::Storage`] traits.
//!
//! ### Core Components
//!
//! - [`api`]: route handlers and response models
//! - [`auth`]: session tokens and the authentication extractor
//! - [`services`]: eligibility rules and response shaping
//! - [`db`]: repositories, storage traits, PostgreSQL and in-memory stores
//! - [`config`]: YAML + environment configuration
//! - [`telemetry`]: tracing setup
//!
//! ## Quick Start
//!
//! ```no_run
//! use clap::Parser;
//! use hotelctl::{Application, Config};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let args = hotelctl::config::Args::parse();
//!     let config = Config::load(&args)?;
//!
//!     hotelctl::telemetry::init_telemetry(config.log_format)?;
//!
//!     let app = Application::new(config).await?;
//!     app.serve(async {
//!         tokio::signal::ctrl_c().await.expect("Failed to listen for Ctrl+C");
//!     }).await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Database Setup
//!
//! Migrations run on startup unless `database.run_migrations` is false:
//!
//! ```no_run
//! # use sqlx::PgPool;
//! # async fn example(pool: PgPool) -> Result<(), sqlx::migrate::MigrateError> {
//! hotelctl::migrator().run(&pool).await?;
//! # Ok(())
//! # }
//! ```
pub mod api;
pub mod auth;
pub mod config;
pub mod db;
pub mod errors;
pub mod openapi;
pub mod services;
pub mod telemetry;
#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;
mod types;

use std::{sync::Arc, time::Duration};

use axum::{
    Json, Router,
    http::{self, HeaderValue},
    routing::get,
};
use bon::Builder;
pub use config::Config;
use config::{CorsOrigin, PoolSettings};
use db::store::{PgStore, Storage};
use sqlx::{PgPool, postgres::PgPoolOptions};
use tokio::net::TcpListener;
use tower_http::{
    cors::{AllowOrigin, CorsLayer},
    trace::{DefaultMakeSpan, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::{Level, debug, info, instrument};
use utoipa::OpenApi;
use utoipa_scalar::{Scalar, Servable};

use crate::openapi::ApiDoc;

pub use types::{HotelId, RoomId, TicketStatus, UserId};

/// Application state shared across all request handlers.
///
/// ```ignore
/// let state = AppState::builder()
///     .config(config)
///     .storage(Arc::new(PgStore::new(pool)))
///     .build();
/// ```
#[derive(Clone, Builder)]
pub struct AppState {
    pub config: Config,
    pub storage: Arc<dyn Storage>,
}

/// Get the hotelctl database migrator
pub fn migrator() -> sqlx::migrate::Migrator {
    sqlx::migrate!("./migrations")
}

fn pool_options(settings: &PoolSettings) -> PgPoolOptions {
    let mut options = PgPoolOptions::new()
        .max_connections(settings.max_connections)
        .min_connections(settings.min_connections)
        .acquire_timeout(Duration::from_secs(settings.acquire_timeout_secs));

    // 0 means "never"
    options = options.idle_timeout((settings.idle_timeout_secs > 0).then(|| Duration::from_secs(settings.idle_timeout_secs)));
    options.max_lifetime((settings.max_lifetime_secs > 0).then(|| Duration::from_secs(settings.max_lifetime_secs)))
}

/// Connect to PostgreSQL and, if configured, bring the schema up to date.
async fn setup_database(config: &Config) -> anyhow::Result<PgPool> {
    let pool = pool_options(&config.database.pool).connect(&config.database.url).await?;

    if config.database.run_migrations {
        info!("Running database migrations...");
        migrator().run(&pool).await?;
    }

    Ok(pool)
}

fn create_cors_layer(config: &Config) -> anyhow::Result<CorsLayer> {
    let cors_config = &config.auth.cors;

    let allow_origin = if cors_config.allowed_origins.contains(&CorsOrigin::Wildcard) {
        anyhow::ensure!(!cors_config.allow_credentials, "CORS credentials cannot be allowed for a '*' origin");
        AllowOrigin::any()
    } else {
        let mut origins = Vec::new();
        for origin in &cors_config.allowed_origins {
            if let CorsOrigin::Url(url) = origin {
                // Origins are compared byte-for-byte; `Url` always adds a trailing slash
                origins.push(url.as_str().trim_end_matches('/').parse::<HeaderValue>()?);
            }
        }
        AllowOrigin::list(origins)
    };

    let mut cors = CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_methods([http::Method::GET])
        .allow_headers([http::header::AUTHORIZATION, http::header::CONTENT_TYPE])
        .allow_credentials(cors_config.allow_credentials);

    if let Some(max_age) = cors_config.max_age {
        cors = cors.max_age(Duration::from_secs(max_age));
    }

    Ok(cors)
}

async fn healthz() -> &'static str {
    "OK"
}

async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

/// Build the application router: hotel routes, health check, API docs, CORS and tracing.
///
/// # Errors
///
/// Returns an error if a CORS origin is not a valid header value, or if credentials are allowed for
/// a `*` origin.
#[instrument(skip_all)]
pub fn build_router(state: &AppState) -> anyhow::Result<Router> {
    let router = Router::new()
        .route("/hotels", get(api::handlers::hotels::list_hotels))
        .route("/hotels/{hotel_id}", get(api::handlers::hotels::get_hotel))
        .route("/healthz", get(healthz))
        .route("/api-docs/openapi.json", get(openapi_json))
        .with_state(state.clone())
        .merge(Scalar::with_url("/docs", ApiDoc::openapi()));

    let router = router.layer(create_cors_layer(&state.config)?);

    // Add tracing layer
    let router = router.layer(
        TraceLayer::new_for_http()
            .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
            .on_request(DefaultOnRequest::new().level(Level::INFO))
            .on_response(DefaultOnResponse::new().level(Level::INFO)),
    );

    Ok(router)
}

/// The assembled server: router, state, and the pool it owns (if any).
pub struct Application {
    router: Router,
    config: Config,
    pool: Option<PgPool>,
}

impl Application {
    /// Create a new application instance backed by PostgreSQL
    pub async fn new(config: Config) -> anyhow::Result<Self> {
        debug!("Starting hotelctl with configuration: {:#?}", config);

        let pool = setup_database(&config).await?;
        let storage: Arc<dyn Storage> = Arc::new(PgStore::new(pool.clone()));

        let mut app = Self::with_storage(config, storage)?;
        app.pool = Some(pool);
        Ok(app)
    }

    /// Create an application over an arbitrary storage backend. No database is connected.
    pub fn with_storage(config: Config, storage: Arc<dyn Storage>) -> anyhow::Result<Self> {
        let app_state = AppState::builder().config(config.clone()).storage(storage).build();
        let router = build_router(&app_state)?;

        Ok(Self {
            router,
            config,
            pool: None,
        })
    }

    /// Convert application into a test server (for tests)
    #[cfg(test)]
    pub fn into_test_server(self) -> axum_test::TestServer {
        axum_test::TestServer::new(self.router.into_make_service()).expect("Failed to create test server")
    }

    /// Start serving the application
    pub async fn serve<F>(self, shutdown: F) -> anyhow::Result<()>
    where
        F: std::future::Future<Output = ()> + Send + 'static,
    {
        let bind_addr = self.config.bind_address();
        let listener = TcpListener::bind(&bind_addr).await?;
        info!("hotelctl listening on http://{}, docs at http://localhost:{}/docs", bind_addr, self.config.port);

        // Run the server with graceful shutdown
        axum::serve(listener, self.router.into_make_service())
            .with_graceful_shutdown(shutdown)
            .await?;

        if let Some(pool) = self.pool {
            info!("Closing database connections...");
            pool.close().await;
        }

        Ok(())
    }
}
