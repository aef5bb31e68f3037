//! JSON API for counter reads and mutations.
//!
//! # Responsibility
//! - Expose the store operations the page script calls.
//! - Log every action outcome at the HTTP boundary.
//!
//! # Invariants
//! - All routes operate on the default counter.
//! - Responses carry the full persisted record, so clients re-render from
//!   committed state.

use actix_web::{web, HttpResponse};
use log::{error, info};
use tally_core::RepoError;

use crate::error::WebError;
use crate::state::AppState;

pub async fn current(state: web::Data<AppState>) -> Result<HttpResponse, WebError> {
    let counter = state
        .with_store(|store| store.get_or_create(None))
        .map_err(|err| surface("read", err))?;
    Ok(HttpResponse::Ok().json(counter))
}

pub async fn increment(state: web::Data<AppState>) -> Result<HttpResponse, WebError> {
    let counter = state
        .with_store(|store| store.increment(None))
        .map_err(|err| surface("increment", err))?;
    info!(
        "event=counter_action module=web status=ok action=increment id={} value={}",
        counter.id, counter.value
    );
    Ok(HttpResponse::Ok().json(counter))
}

pub async fn decrement(state: web::Data<AppState>) -> Result<HttpResponse, WebError> {
    let counter = state
        .with_store(|store| store.decrement(None))
        .map_err(|err| surface("decrement", err))?;
    info!(
        "event=counter_action module=web status=ok action=decrement id={} value={}",
        counter.id, counter.value
    );
    Ok(HttpResponse::Ok().json(counter))
}

pub async fn reset(state: web::Data<AppState>) -> Result<HttpResponse, WebError> {
    let counter = state
        .with_store(|store| store.reset(None))
        .map_err(|err| surface("reset", err))?;
    info!(
        "event=counter_action module=web status=ok action=reset id={} value={}",
        counter.id, counter.value
    );
    Ok(HttpResponse::Ok().json(counter))
}

/// Liveness probe.
pub async fn health() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "ok",
        "service": "tally-web",
        "core": tally_core::core_version(),
    }))
}

fn surface(action: &'static str, err: RepoError) -> WebError {
    error!("event=counter_action module=web status=error action={action} error={err}");
    WebError::from(err)
}
