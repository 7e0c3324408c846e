//! Casa Marquito storefront API
//!
//! Catalog, coupons, checkout and order administration for a small home-goods
//! shop. Uses hexagonal (ports & adapters) architecture: PostgreSQL when it is
//! reachable at startup, an in-memory store otherwise.

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use axum::{
    middleware,
    routing::{get, patch, post},
    Router,
};
use tower_governor::governor::GovernorConfigBuilder;
use tower_governor::key_extractor::PeerIpKeyExtractor;
use tower_governor::GovernorLayer;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod adapters;
mod app;
mod auth;
mod config;
mod domain;
mod entity;
mod error;
mod handlers;

#[cfg(test)]
mod test_utils;


use adapters::{
    postgres, LogNotifier, MemoryStore, PostgresOrderRepository, PostgresProductRepository,
    SmtpNotifier,
};
use app::{CatalogService, OrderService};
use config::Config;
use domain::ports::{Notifier, OrderRepository, ProductRepository};

/// Which backend is serving orders
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageMode {
    Postgres,
    /// In-memory fallback; data is lost on restart
    Memory,
}

impl StorageMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            StorageMode::Postgres => "postgresql",
            StorageMode::Memory => "fallback",
        }
    }
}

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<CatalogService>,
    pub orders: Arc<OrderService>,
    pub storage: StorageMode,
    pub config: Config,
}

/// Build the HTTP router
pub fn router(state: AppState) -> anyhow::Result<Router> {
    let mut place_order = post(handlers::place_order);
    let mut validate_coupon = post(handlers::validate_coupon);

    if state.config.rate_limit_enabled {
        // 2 req/sec sustained, burst of 5, keyed by peer IP
        let governor_config = Arc::new(
            GovernorConfigBuilder::default()
                .key_extractor(PeerIpKeyExtractor)
                .per_second(2)
                .burst_size(5)
                .finish()
                .context("Invalid rate limit configuration")?,
        );
        place_order = place_order.layer(GovernorLayer {
            config: governor_config.clone(),
        });
        validate_coupon = validate_coupon.layer(GovernorLayer {
            config: governor_config,
        });
    }

    let admin = middleware::from_fn_with_state(state.clone(), auth::admin_middleware);

    let app = Router::new()
        // Catalog (public)
        .route("/api/products", get(handlers::list_products))
        .route(
            "/api/products/recommendations",
            get(handlers::recommendations),
        )
        .route("/api/products/:id", get(handlers::get_product))
        // Checkout (public)
        .route("/api/coupons/validate", validate_coupon)
        .route("/api/checkout/quote", post(handlers::quote))
        // Orders: placing is public, the rest needs the admin key when configured
        .route(
            "/api/orders",
            place_order.merge(get(handlers::list_orders).route_layer(admin.clone())),
        )
        .route(
            "/api/orders/:id",
            get(handlers::get_order).route_layer(admin.clone()),
        )
        .route(
            "/api/orders/:id/status",
            patch(handlers::update_status).route_layer(admin),
        )
        .route("/api/status", get(handlers::status))
        // Middleware
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    Ok(app)
}

/// Repositories for whichever backend is available
async fn open_storage(
    config: &Config,
) -> (
    Arc<dyn ProductRepository>,
    Arc<dyn OrderRepository>,
    StorageMode,
) {
    let connected = async {
        let db = postgres::connect(&config.database_url, config.db_connect_timeout).await?;
        postgres::ensure_schema(&db).await?;
        Ok::<_, error::DomainError>(db)
    }
    .await;

    match connected {
        Ok(db) => {
            tracing::info!("Database connected");
            (
                Arc::new(PostgresProductRepository::new(db.clone())),
                Arc::new(PostgresOrderRepository::new(db)),
                StorageMode::Postgres,
            )
        }
        Err(e) => {
            tracing::warn!(error = %e, "PostgreSQL unavailable, using in-memory store");
            let store = MemoryStore::new();
            (
                Arc::new(store.products()),
                Arc::new(store.orders()),
                StorageMode::Memory,
            )
        }
    }
}

fn build_notifier(config: &Config) -> Arc<dyn Notifier> {
    match &config.smtp {
        Some(smtp) => match SmtpNotifier::new(smtp) {
            Ok(notifier) => {
                tracing::info!(host = %smtp.host, port = smtp.port, "SMTP notifications enabled");
                Arc::new(notifier)
            }
            Err(e) => {
                tracing::warn!(error = %e, "SMTP setup failed, notifications will only be logged");
                Arc::new(LogNotifier)
            }
        },
        None => {
            tracing::info!("SMTP not configured, notifications will only be logged");
            Arc::new(LogNotifier)
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,storefront_api=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting storefront API...");

    // Load configuration
    let config = Config::from_env();

    tracing::info!("Connecting to database...");
    let (products, orders, storage) = open_storage(&config).await;
    let notifier = build_notifier(&config);

    // Create application services
    let catalog = Arc::new(CatalogService::new(products.clone()));
    let seeded = catalog.seed().await.context("Failed to seed catalog")?;
    tracing::info!(products = seeded, "Catalog seeded");

    let orders = Arc::new(OrderService::new(products, orders, notifier));

    let state = AppState {
        catalog,
        orders,
        storage,
        config: config.clone(),
    };
    let app = router(state)?;

    // Start server
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    tracing::info!(mode = storage.as_str(), "Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await
    .context("Server error")?;

    Ok(())
}
