//! Page handlers for the counter surface.
//!
//! # Responsibility
//! - Redirect the root route to the counter page.
//! - Render the counter page with the current value filled in.

use actix_web::http::header::{ContentType, LOCATION};
use actix_web::{web, HttpResponse};
use log::error;

use crate::error::WebError;
use crate::state::AppState;

const PAGE_TEMPLATE: &str = include_str!("page.html");
const VALUE_SLOT: &str = "{{value}}";

/// `GET /`: unconditional redirect to the counter page.
pub async fn index() -> HttpResponse {
    HttpResponse::SeeOther()
        .insert_header((LOCATION, "/counter"))
        .finish()
}

/// `GET /counter`: the counter page with the server-rendered value.
pub async fn counter_page(state: web::Data<AppState>) -> Result<HttpResponse, WebError> {
    let value = state
        .with_store(|store| store.current_value(None))
        .map_err(|err| {
            error!("event=page_render module=web status=error route=/counter error={err}");
            WebError::from(err)
        })?;

    let body = PAGE_TEMPLATE.replace(VALUE_SLOT, &value.to_string());
    Ok(HttpResponse::Ok()
        .content_type(ContentType::html())
        .body(body))
}
