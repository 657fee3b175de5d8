//! Landing page served outside the API prefix.

use axum::response::{Html, Redirect};

const INDEX_HTML: &str = include_str!("../../static/index.html");

/// `GET /` redirects to the landing page.
pub async fn root() -> Redirect {
    Redirect::to("/index.html")
}

/// `GET /index.html`
pub async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}
