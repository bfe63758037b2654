use std::{net::SocketAddr, sync::Arc};

use {
    axum::{Json, Router, http::HeaderValue, response::IntoResponse, routing::get},
    tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer},
    tracing::{info, warn},
};

use {
    flowwisper_config::Settings,
    flowwisper_sessions::{PlaceholderSessionStore, SessionStore},
};

use crate::{sessions::session_routes, state::AppState};

// ── Router construction ──────────────────────────────────────────────────────

/// Build the gateway router (shared between production startup and tests).
pub fn build_app(settings: Arc<Settings>, store: Arc<dyn SessionStore>) -> Router {
    let cors = cors_layer(&settings);
    let state = AppState::new(Arc::clone(&settings), store);

    Router::new()
        .route("/healthz", get(health_handler))
        .nest(&settings.api_prefix(), session_routes())
        .layer(cors)
        .with_state(state)
}

/// Global CORS policy: configured origins only, credentials allowed,
/// methods and headers mirrored from the request.
fn cors_layer(settings: &Settings) -> CorsLayer {
    let origins: Vec<HeaderValue> = settings
        .allow_origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                warn!(%origin, "ignoring origin that is not a valid header value");
                None
            },
        })
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_credentials(true)
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request())
}

// ── Server startup ───────────────────────────────────────────────────────────

/// Start the gateway HTTP server with the placeholder session store.
pub async fn start_gateway(bind: &str, port: u16, settings: Settings) -> anyhow::Result<()> {
    let settings = Arc::new(settings);

    if settings.auth_required {
        warn!("auth_required is set, but authentication enforcement is not implemented yet");
    }

    let store: Arc<dyn SessionStore> = Arc::new(PlaceholderSessionStore);
    let app = build_app(Arc::clone(&settings), store);

    let addr: SocketAddr = format!("{bind}:{port}").parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;

    // Startup banner.
    let lines = [
        format!("flowwisper gateway v{}", env!("CARGO_PKG_VERSION")),
        format!("listening on {addr}"),
        format!("api prefix {}", settings.api_prefix()),
        format!("{} allowed origin(s)", settings.allow_origins.len()),
    ];
    let width = lines.iter().map(|l| l.len()).max().unwrap_or(0) + 4;
    info!("┌{}┐", "─".repeat(width));
    for line in &lines {
        info!("│  {:<w$}│", line, w = width - 2);
    }
    info!("└{}┘", "─".repeat(width));

    axum::serve(listener, app).await?;
    Ok(())
}

// ── Handlers ─────────────────────────────────────────────────────────────────

/// Lightweight liveness probe; performs no dependency checks.
async fn health_handler() -> impl IntoResponse {
    Json(serde_json::json!({ "status": "ok" }))
}
