//! HTTP surface: the listing page and two read-only catalog endpoints.

use std::sync::Arc;

use axum::Router;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Json, Response};
use axum::routing::get;
use serde::Deserialize;
use serde_json::json;

use fabla_core::SeedSource;
use fabla_frontend::HtmlPage;
use fabla_scraper::{CatalogApi, EnrichOptions, Resolution, ScrapeError};

pub(crate) struct AppState<C> {
    pub client: C,
    pub seed: SeedSource,
    pub page: HtmlPage,
    pub enrich: EnrichOptions,
}

#[derive(Deserialize)]
struct SearchQuery {
    q: Option<String>,
}

pub(crate) fn router<C: CatalogApi + 'static>(state: Arc<AppState<C>>) -> Router {
    Router::new()
        .route("/", get(index::<C>))
        .route("/api/rawg/game/:slug", get(game::<C>))
        .route("/api/rawg/search", get(search::<C>))
        .with_state(state)
}

/// Serve `app` on `bind` until ctrl-c.
pub(crate) async fn serve(bind: &str, app: Router) -> std::io::Result<()> {
    let listener = tokio::net::TcpListener::bind(bind).await?;
    log::info!("Listening on http://{}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            if tokio::signal::ctrl_c().await.is_ok() {
                log::info!("Shutting down");
            }
        })
        .await
}

/// The seed list is re-read and enriched on every request.
async fn index<C: CatalogApi + 'static>(State(state): State<Arc<AppState<C>>>) -> Response {
    let seeds = match state.seed.load() {
        Ok(seeds) => seeds,
        Err(e) => {
            log::error!("Failed to load {}: {}", state.seed, e);
            let message = fabla_frontend::escape_html(&e.to_string());
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Html(format!("<h1>Seed error</h1><p>{}</p>", message)),
            )
                .into_response();
        }
    };

    let result = fabla_scraper::enrich_with_log(&state.client, &seeds, &state.enrich).await;
    let summary = result.log.summary();
    if summary.failed > 0 {
        log::warn!(
            "{} of {} entries rendered without catalog data",
            summary.failed,
            summary.total()
        );
    }

    Html(state.page.render(&result.views)).into_response()
}

async fn game<C: CatalogApi + 'static>(
    State(state): State<Arc<AppState<C>>>,
    Path(slug): Path<String>,
) -> Response {
    match fabla_scraper::resolve(&state.client, &slug).await {
        Ok(Resolution::Found {
            record,
            screenshots,
        }) => Json(json!({ "game": record, "screenshots": screenshots })).into_response(),
        Ok(Resolution::NotFound(nf)) => Json(json!({
            "game": nf.sentinel,
            "screenshots": [],
            "error": { "message": nf.message, "details": nf.details },
        }))
        .into_response(),
        Err(e) => error_response(e),
    }
}

async fn search<C: CatalogApi + 'static>(
    State(state): State<Arc<AppState<C>>>,
    Query(params): Query<SearchQuery>,
) -> Response {
    let query = params.q.unwrap_or_default();
    match fabla_scraper::search(&state.client, &query).await {
        Ok(results) => Json(json!({ "results": results })).into_response(),
        Err(e) => error_response(e),
    }
}

/// Map a catalog error to its status code and a `{ error, details? }` body.
fn error_response(err: ScrapeError) -> Response {
    let status = match &err {
        ScrapeError::MissingApiKey | ScrapeError::Config(_) => StatusCode::INTERNAL_SERVER_ERROR,
        ScrapeError::InvalidQuery => StatusCode::BAD_REQUEST,
        ScrapeError::Upstream { status, .. } => {
            StatusCode::from_u16(*status).unwrap_or(StatusCode::BAD_GATEWAY)
        }
        _ => StatusCode::BAD_GATEWAY,
    };

    if status.is_server_error() {
        log::warn!("{}", err);
    }

    let body = match &err {
        ScrapeError::Upstream { details, .. } => {
            json!({ "error": err.to_string(), "details": details })
        }
        _ => json!({ "error": err.to_string() }),
    };
    (status, Json(body)).into_response()
}

#[cfg(test)]
#[path = "tests/server_tests.rs"]
mod tests;
