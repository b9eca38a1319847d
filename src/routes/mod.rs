//! HTTP route handlers for the web interface.
//!
//! The route set is fixed at startup: the page table below, the course detail
//! route, a health probe and the static file tree. Every response depends only
//! on the request path and the asset store, so pages carry a public
//! Cache-Control header.
//!
//! Request tracing is enabled via middleware that assigns a request ID to
//! each incoming request, allowing correlation of all logs within a request.

pub mod health;
pub mod pages;

use axum::{extract::State, middleware, routing::get, Router};
use http::header::{HeaderValue, CACHE_CONTROL};
use serde::Serialize;
use tower_http::set_header::SetResponseHeaderLayer;

use crate::config::CACHE_CONTROL_PAGE;
use crate::http::static_files::{create_static_service, static_cache_control};
use crate::middleware::request_id_layer;
use crate::state::AppState;

/// A GET route that renders a single template.
#[derive(Debug, Serialize)]
pub struct Page {
    pub path: &'static str,
    pub template: &'static str,
    /// Page title, also used as the navigation label
    pub title: &'static str,
}

/// Pages served by the site, in navigation order.
pub const PAGES: &[Page] = &[
    Page {
        path: "/",
        template: "index.html",
        title: "Home",
    },
    Page {
        path: "/courses",
        template: "courses.html",
        title: "Courses",
    },
    Page {
        path: "/about",
        template: "about.html",
        title: "About",
    },
    Page {
        path: "/contact",
        template: "contact.html",
        title: "Contact",
    },
];

/// Creates the Axum router with all routes and cache headers.
pub fn create_router(state: AppState) -> Router {
    let mut page_routes: Router<AppState> = Router::new();
    for page in PAGES {
        page_routes = page_routes.route(
            page.path,
            get(move |State(state): State<AppState>| pages::show(state, page)),
        );
    }

    let page_routes = page_routes
        .route("/courses/{slug}", get(pages::course))
        .layer(SetResponseHeaderLayer::if_not_present(
            CACHE_CONTROL,
            HeaderValue::from_static(CACHE_CONTROL_PAGE),
        ));

    // Static files - long cache for hits, short for misses
    let static_routes: Router<AppState> = Router::new()
        .nest_service("/static", create_static_service(state.assets.static_dir()))
        .layer(middleware::map_response(static_cache_control));

    // Health check - no caching, always fresh for probes
    let health_routes: Router<AppState> = Router::new().route("/health", get(health::health));

    Router::new()
        .merge(page_routes)
        .merge(health_routes)
        .merge(static_routes)
        .fallback(pages::not_found)
        .with_state(state)
        // Request ID middleware - creates root span with request_id for correlation
        .layer(middleware::from_fn(request_id_layer))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::templates::REQUIRED_TEMPLATES;

    #[test]
    fn test_page_templates_are_required_at_startup() {
        for page in PAGES {
            assert!(
                REQUIRED_TEMPLATES.contains(&page.template),
                "{} renders {} which is not checked at startup",
                page.path,
                page.template
            );
        }
    }

    #[test]
    fn test_page_paths_are_unique() {
        let mut paths: Vec<_> = PAGES.iter().map(|p| p.path).collect();
        paths.sort_unstable();
        paths.dedup();
        assert_eq!(paths.len(), PAGES.len());
    }

    #[test]
    fn test_landing_and_courses_registered() {
        assert!(PAGES.iter().any(|p| p.path == "/"));
        assert!(PAGES.iter().any(|p| p.path == "/courses"));
    }
}
