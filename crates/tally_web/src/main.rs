//! Server entry point.
//!
//! # Responsibility
//! - Load configuration, bring up logging and storage, serve routes.

use actix_web::{web, App, HttpServer};
use log::info;
use tally_web::config::ServerConfig;
use tally_web::state::AppState;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    let config = ServerConfig::from_env();

    let log_dir = config.log_dir.to_string_lossy();
    tally_core::init_logging(&config.log_level, &log_dir).map_err(std::io::Error::other)?;

    let conn = tally_core::db::open_db(&config.db_path)
        .map_err(|err| std::io::Error::other(format!("failed to open database: {err}")))?;
    let state = web::Data::new(AppState::new(conn));

    info!(
        "event=server_start module=web status=ok addr={}:{} db={}",
        config.host,
        config.port,
        config.db_path.display()
    );

    HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .configure(tally_web::configure)
    })
    .bind(config.bind_addr())?
    .run()
    .await
}
