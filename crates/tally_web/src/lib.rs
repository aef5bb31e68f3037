//! HTTP shell for the Tally counter.
//!
//! # Responsibility
//! - Wire routes to counter store operations.
//! - Convert store failures into HTTP responses at one boundary.
//!
//! # Invariants
//! - All store access goes through `state::AppState`.
//! - Route wiring is shared between the binary and endpoint tests.

use actix_web::web;

pub mod api;
pub mod config;
pub mod error;
pub mod pages;
pub mod state;

/// Registers every route served by the application.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(pages::index))
        .route("/counter", web::get().to(pages::counter_page))
        .route("/health", web::get().to(api::health))
        .route("/api/counter", web::get().to(api::current))
        .route("/api/counter/increment", web::post().to(api::increment))
        .route("/api/counter/decrement", web::post().to(api::decrement))
        .route("/api/counter/reset", web::post().to(api::reset));
}
