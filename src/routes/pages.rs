//! Handlers for the fixed content pages and the course detail page.

use axum::{
    extract::{OriginalUri, Path, State},
    http::{header::CACHE_CONTROL, StatusCode},
    response::{Html, IntoResponse, Response},
};
use tracing::instrument;

use super::{Page, PAGES};
use crate::config::CACHE_CONTROL_ERROR;
use crate::error::AppError;
use crate::state::AppState;

/// Context shared by every template: site settings, navigation and the
/// course list (the header and landing page both show it).
fn base_context(state: &AppState, title: &str, path: &str) -> tera::Context {
    let mut context = tera::Context::new();
    context.insert("config", &state.config.ui);
    context.insert("nav", PAGES);
    context.insert("title", title);
    context.insert("path", path);
    context.insert("courses", state.assets.catalog().courses());
    context
}

/// Render one entry of the page table.
#[instrument(name = "pages::show", skip(state, page), fields(path = page.path))]
pub async fn show(state: AppState, page: &'static Page) -> Result<Html<String>, AppError> {
    let context = base_context(&state, page.title, page.path);
    let html = state.assets.render(page.template, &context)?;
    Ok(Html(html))
}

/// Course detail page; unknown slugs get the regular 404 page.
#[instrument(name = "pages::course", skip(state, uri))]
pub async fn course(
    State(state): State<AppState>,
    OriginalUri(uri): OriginalUri,
    Path(slug): Path<String>,
) -> Result<Response, AppError> {
    let Some(course) = state.assets.catalog().find(&slug) else {
        tracing::debug!(%slug, "Unknown course");
        return Ok(render_not_found(&state, uri.path()));
    };

    let mut context = base_context(&state, &course.title, uri.path());
    context.insert("course", course);
    let html = state.assets.render("course.html", &context)?;
    Ok(Html(html).into_response())
}

/// Router fallback for paths outside the route table.
pub async fn not_found(State(state): State<AppState>, OriginalUri(uri): OriginalUri) -> Response {
    render_not_found(&state, uri.path())
}

/// Render `not_found.html` with status 404.
///
/// Falls back to the inline error page if the template cannot be rendered.
pub fn render_not_found(state: &AppState, path: &str) -> Response {
    let context = base_context(state, "Page not found", path);
    match state.assets.render("not_found.html", &context) {
        Ok(html) => (
            StatusCode::NOT_FOUND,
            [(CACHE_CONTROL, CACHE_CONTROL_ERROR)],
            Html(html),
        )
            .into_response(),
        Err(e) => {
            tracing::error!(error = %e, "Failed to render not_found.html");
            AppError::NotFound(path.to_string()).into_response()
        }
    }
}
