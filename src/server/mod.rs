//! HTTP server for the contacts API.
//!
//! # Route Structure
//!
//! ```text
//! GET    /health          - Liveness check
//! GET    /contacts        - Sorted, paginated listing
//! POST   /contacts        - Create a contact
//! GET    /contacts/{id}   - Fetch one contact
//! PUT    /contacts/{id}   - Merge changes into a contact
//! DELETE /contacts/{id}   - Remove a contact
//! ```
//!
//! `/contacts/` with a trailing slash is served the same as `/contacts`.

pub mod error;
pub mod handlers;
pub mod state;

pub use error::ApiError;
pub use state::AppState;

use anyhow::Result;
use axum::routing::get;
use axum::Router;
use std::net::SocketAddr;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

/// Contact routes, rooted at `/contacts`.
pub fn contact_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/contacts",
            get(handlers::list_contacts).post(handlers::create_contact),
        )
        .route(
            "/contacts/",
            get(handlers::list_contacts).post(handlers::create_contact),
        )
        .route(
            "/contacts/{id}",
            get(handlers::get_contact)
                .put(handlers::update_contact)
                .delete(handlers::delete_contact),
        )
}

/// The complete application router.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health))
        .merge(contact_routes())
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Serve `router` on `addr` until Ctrl-C or SIGTERM.
pub async fn run_server(router: Router, addr: SocketAddr) -> Result<()> {
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(%addr, "Server is listening");

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl-C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
