//! HTTP surface.
//!
//! Every page request is rendered server-side from the visitor's session.
//! State-changing links (`/navigate/...`, `/language/...`) create or update the
//! session and redirect back to `/`, which renders whatever is now active.

use crate::config::Config;
use crate::contact::{ContactForm, ContactView};
use crate::error::AppError;
use crate::i18n::{Language, MetricsReport, ResolutionMetrics, TranslationTable};
use crate::pages;
use crate::router::PageId;
use crate::scheduler;
use crate::security::{api_key_allows, API_KEY_HEADER};
use crate::session::{SessionHandle, SessionStore, SESSION_COOKIE};
use anyhow::{Context, Result};
use axum::extract::{Path, State};
use axum::http::{header, HeaderMap, HeaderValue};
use axum::response::{Html, IntoResponse, Redirect, Response};
use axum::routing::{get, post};
use axum::{Form, Json, Router};
use serde::Serialize;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub sessions: Arc<SessionStore>,
}

impl AppState {
    pub fn new(config: Config, table: TranslationTable) -> Self {
        let sessions = SessionStore::new(
            Arc::new(table),
            Arc::new(ResolutionMetrics::new()),
            config.default_language,
        );

        Self {
            config: Arc::new(config),
            sessions: Arc::new(sessions),
        }
    }
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/navigate/:page", get(navigate))
        .route("/language/:code", get(switch_language))
        .route("/contact", post(submit_contact))
        .route("/health", get(health))
        .route("/metrics", get(metrics))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Bind, start the session sweeper and serve until the process exits.
pub async fn serve(config: Config, table: TranslationTable) -> Result<()> {
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let ttl = config.session_ttl();
    let state = AppState::new(config, table);

    let _scheduler = scheduler::start_session_sweeper(Arc::clone(&state.sessions), ttl).await?;

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    info!("Listening on http://{}", addr);

    axum::serve(listener, build_router(state))
        .await
        .context("Server error")?;

    Ok(())
}

/// Value of the session cookie, if the request carries one.
fn session_id(headers: &HeaderMap) -> Option<&str> {
    headers
        .get_all(header::COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(|value| value.split(';'))
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(name, _)| *name == SESSION_COOKIE)
        .map(|(_, value)| value)
}

async fn session_for(state: &AppState, headers: &HeaderMap) -> SessionHandle {
    state.sessions.get_or_create(session_id(headers)).await
}

/// Attach `Set-Cookie` when the session was just created.
fn with_session_cookie(handle: &SessionHandle, response: impl IntoResponse) -> Result<Response, AppError> {
    let mut response = response.into_response();

    if handle.is_new {
        let cookie = format!("{}={}; Path=/; HttpOnly; SameSite=Lax", SESSION_COOKIE, handle.id);
        let value = HeaderValue::from_str(&cookie).context("Invalid session cookie value")?;
        response.headers_mut().insert(header::SET_COOKIE, value);
    }

    Ok(response)
}

/// Render the visitor's session. Visitors without one get the defaults and no
/// cookie; sessions are only created by the state-changing routes.
async fn index(State(state): State<AppState>, headers: HeaderMap) -> Html<String> {
    let stored = match session_id(&headers) {
        Some(id) => state.sessions.get(id).await,
        None => None,
    };

    let html = match stored {
        Some(session) => pages::render_session(&session, None),
        None => pages::render_session(&state.sessions.transient(), None),
    };
    Html(html)
}

async fn navigate(
    State(state): State<AppState>,
    Path(page): Path<String>,
    headers: HeaderMap,
) -> Result<Response, AppError> {
    let handle = session_for(&state, &headers).await;
    handle.session.router.navigate(&page);
    with_session_cookie(&handle, Redirect::to("/"))
}

async fn switch_language(
    State(state): State<AppState>,
    Path(code): Path<String>,
    headers: HeaderMap,
) -> Result<Response, AppError> {
    let handle = session_for(&state, &headers).await;

    match Language::from_code(&code) {
        Ok(language) => handle.session.language.set_active_language(language),
        Err(e) => warn!("Ignoring language switch: {}", e),
    }

    with_session_cookie(&handle, Redirect::to("/"))
}

async fn submit_contact(
    State(state): State<AppState>,
    headers: HeaderMap,
    Form(form): Form<ContactForm>,
) -> Result<Response, AppError> {
    let handle = session_for(&state, &headers).await;
    let language = handle.session.language.get_active_language();
    handle.session.router.navigate_to(PageId::Contact);

    let view = match form.validate(language) {
        Ok(submission) => {
            info!(
                name = %submission.name,
                email = %submission.email,
                company = submission.company.as_deref().unwrap_or("-"),
                service = submission.service.map(|s| s.as_str()).unwrap_or("-"),
                language = submission.language,
                received_at = %submission.received_at,
                "Contact inquiry received"
            );
            ContactView::acknowledged()
        }
        Err(errors) => {
            info!(errors = errors.len(), "Contact form rejected");
            ContactView::rejected(form, errors)
        }
    };

    let html = pages::render_session(&handle.session, Some(&view));
    with_session_cookie(&handle, Html(html))
}

async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "ok" }))
}

#[derive(Debug, Serialize)]
struct MetricsResponse {
    translations: MetricsReport,
    sessions: usize,
}

async fn metrics(State(state): State<AppState>, headers: HeaderMap) -> Result<Json<MetricsResponse>, AppError> {
    let presented = headers.get(API_KEY_HEADER).and_then(|v| v.to_str().ok());
    if !api_key_allows(state.config.admin_api_key.as_deref(), presented) {
        warn!("Rejected /metrics request with missing or invalid API key");
        return Err(AppError::Unauthorized);
    }

    Ok(Json(MetricsResponse {
        translations: state.sessions.metrics().report(),
        sessions: state.sessions.len().await,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_id_from_cookie_header() {
        let mut headers = HeaderMap::new();
        headers.insert(
            header::COOKIE,
            HeaderValue::from_static("theme=dark; sib_session=abc-123; other=1"),
        );

        assert_eq!(session_id(&headers), Some("abc-123"));
    }

    #[test]
    fn test_session_id_absent() {
        let mut headers = HeaderMap::new();
        assert_eq!(session_id(&headers), None);

        headers.insert(header::COOKIE, HeaderValue::from_static("sib_session_old=x"));
        assert_eq!(session_id(&headers), None);
    }
}
