use anyhow::{Context, Result};
use std::sync::Arc;
use std::time::Duration;

use tracing::{error, info};

use axum::{
    extract::{Path, Query, State},
    http::{header, StatusCode},
    middleware,
    response::{Html, IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};

use super::{http_cache, log_requests, state::*, ServerConfig};
use crate::cache::DashboardCache;
use crate::editorial::Editorial;
use crate::export::{export_csv, ExportError};
use crate::page::{render_insights, render_landing, Tab};
use crate::summary::BundleOutcome;

#[derive(Serialize)]
struct HealthStats {
    pub uptime: String,
    pub bundle_loaded: bool,
    pub platform_stats: &'static str,
}

#[derive(Deserialize, Debug)]
struct InsightsQuery {
    pub tab: Option<String>,
}

fn format_uptime(duration: Duration) -> String {
    let total_seconds = duration.as_secs();

    let days = total_seconds / 86_400;
    let hours = (total_seconds % 86_400) / 3600;
    let minutes = (total_seconds % 3600) / 60;
    let seconds = total_seconds % 60;

    format!("{}d {:02}:{:02}:{:02}", days, hours, minutes, seconds)
}

async fn health(State(state): State<ServerState>) -> impl IntoResponse {
    let platform_stats = if state.cache.platform_stats().is_fallback() {
        "fallback"
    } else {
        "loaded"
    };
    let stats = HealthStats {
        uptime: format_uptime(state.start_time.elapsed()),
        bundle_loaded: matches!(state.cache.bundle(), BundleOutcome::Loaded(_)),
        platform_stats,
    };
    Json(stats)
}

async fn landing(
    State(cache): State<GuardedDashboardCache>,
    State(editorial): State<SharedEditorial>,
) -> Html<String> {
    Html(render_landing(cache.platform_stats().stats(), &editorial))
}

async fn insights(
    State(cache): State<GuardedDashboardCache>,
    State(editorial): State<SharedEditorial>,
    Query(query): Query<InsightsQuery>,
) -> Html<String> {
    let tab = Tab::from_slug(query.tab.as_deref());
    Html(render_insights(&cache, &editorial, tab))
}

async fn export(
    State(cache): State<GuardedDashboardCache>,
    Path(file_name): Path<String>,
) -> Response {
    match export_csv(&cache, &file_name) {
        Ok(csv) => (
            StatusCode::OK,
            [
                (header::CONTENT_TYPE, "text/csv; charset=utf-8".to_owned()),
                (header::CONTENT_DISPOSITION, csv.content_disposition()),
            ],
            csv.bytes,
        )
            .into_response(),
        Err(ExportError::UnknownFile(_)) => StatusCode::NOT_FOUND.into_response(),
        Err(ExportError::NoData(message)) => {
            (StatusCode::SERVICE_UNAVAILABLE, message).into_response()
        }
        Err(err) => {
            error!("Export failed: {}", err);
            (StatusCode::INTERNAL_SERVER_ERROR, format!("{}", err)).into_response()
        }
    }
}

async fn get_visualization_image(
    State(cache): State<GuardedDashboardCache>,
    Path(path): Path<String>,
) -> Response {
    match cache.embedder().read_image(&path) {
        Some(image) => (
            StatusCode::OK,
            [(header::CONTENT_TYPE, image.mime_type)],
            image.bytes,
        )
            .into_response(),
        None => StatusCode::NOT_FOUND.into_response(),
    }
}

pub fn make_app(
    config: ServerConfig,
    cache: Arc<DashboardCache>,
    editorial: Arc<Editorial>,
) -> Result<Router> {
    let state = ServerState::new(config.clone(), cache, editorial);

    let content_routes: Router = Router::new()
        .route("/", get(landing))
        .route("/insights", get(insights))
        .route("/export/{file_name}", get(export))
        .route("/visualizations/{*path}", get(get_visualization_image))
        .layer(middleware::from_fn_with_state(
            config.content_cache_age_sec,
            http_cache,
        ))
        .with_state(state.clone());

    let app: Router = Router::new()
        .route("/health", get(health))
        .with_state(state.clone())
        .merge(content_routes)
        .layer(middleware::from_fn_with_state(state, log_requests));

    Ok(app)
}

pub async fn run_server(
    config: ServerConfig,
    cache: Arc<DashboardCache>,
    editorial: Arc<Editorial>,
) -> Result<()> {
    let address = format!("{}:{}", config.bind_address, config.port);
    let app = make_app(config, cache, editorial)?;

    let listener = tokio::net::TcpListener::bind(&address)
        .await
        .with_context(|| format!("Failed to bind {}", address))?;
    info!("Ready to serve at {}", address);

    Ok(axum::serve(listener, app).await?)
}
