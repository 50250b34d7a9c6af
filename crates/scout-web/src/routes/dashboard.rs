//! Page route handler.
//!
//! Renders the research chat page. Styles and script are loaded from `/static`.

use askama::Template;
use axum::{extract::State, response::Html};

use scout_core::ScoutError;

use crate::error::ApiError;
use crate::state::AppState;

#[derive(Template)]
#[template(path = "index.html")]
struct IndexTemplate {
    title: &'static str,
    debug: bool,
}

/// GET / - Serve the research page.
pub async fn index(State(state): State<AppState>) -> Result<Html<String>, ApiError> {
    let page = IndexTemplate {
        title: "AI Research Assistant",
        debug: state.config.debug,
    };
    let html = page
        .render()
        .map_err(|e| ScoutError::template(e.to_string()))?;
    Ok(Html(html))
}
