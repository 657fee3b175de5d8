//! HTTP endpoint layer.
//!
//! Routes:
//! - `GET    /api/contacts`       list, paginated, json/xml/csv/text
//! - `POST   /api/contacts`       create, json/xml
//! - `GET    /api/contacts/{id}`  fetch, json/xml/csv/text
//! - `PUT    /api/contacts/{id}`  full replace, json/xml
//! - `DELETE /api/contacts/{id}`  remove
//! - `GET    /`                   redirect to `/index.html`

mod body;
mod error;
mod handlers;
mod landing;

use axum::{routing::get, Router};
use contacts_core::ContactService;
use tower_http::trace::TraceLayer;

pub use body::ContactBody;
pub use error::ApiError;
pub use handlers::{FormatParams, ListParams};

/// Base path of the contact API
pub const API_BASE: &str = "/api/contacts";

/// Shared state handed to every handler.
#[derive(Debug, Clone)]
pub struct AppState {
    pub service: ContactService,
}

/// Build the application router around a service.
pub fn router(service: ContactService) -> Router {
    let state = AppState { service };

    Router::new()
        .route(
            API_BASE,
            get(handlers::list_contacts).post(handlers::create_contact),
        )
        .route(
            &format!("{API_BASE}/:id"),
            get(handlers::get_contact)
                .put(handlers::update_contact)
                .delete(handlers::delete_contact),
        )
        .route("/", get(landing::root))
        .route("/index.html", get(landing::index))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
