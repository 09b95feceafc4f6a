// rest/mod.rs — Public REST API server.
//
// Axum HTTP server, local only unless a different bind address is configured.
//
// Endpoints:
//   GET    /api/health
//   GET    /api/tasks
//   POST   /api/tasks
//   GET    /api/tasks/{id}
//   PUT    /api/tasks/{id}
//   DELETE /api/tasks/{id}

pub mod error;
pub mod routes;

use anyhow::Result;
use axum::{routing::get, Router};
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::AppContext;

pub async fn start_rest_server(ctx: Arc<AppContext>) -> Result<()> {
    let bind = format!("{}:{}", ctx.config.bind_address, ctx.config.port);
    let addr: SocketAddr = bind.parse()?;

    let router = build_router(ctx);

    info!("REST API listening on http://{}", addr);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, router).await?;
    Ok(())
}

pub fn build_router(ctx: Arc<AppContext>) -> Router {
    Router::new()
        .route("/api/health", get(routes::health::health))
        .route(
            "/api/tasks",
            get(routes::tasks::list_tasks).post(routes::tasks::create_task),
        )
        .route(
            "/api/tasks/{id}",
            get(routes::tasks::get_task)
                .put(routes::tasks::update_task)
                .delete(routes::tasks::delete_task),
        )
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer())
        .with_state(ctx)
}

/// Permissive CORS so a browser UI served from another origin can call the API.
fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any)
}
