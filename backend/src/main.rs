//! API service entry point.
//!
//! Connects to the store first (retrying forever with a fixed delay) and
//! only then binds the HTTP listener, so requests arriving before the
//! first successful connection are refused at the TCP level.

use std::path::Path;
use std::sync::Arc;

use actix_web::{web, App, HttpServer};
use tracing::{info, warn};
use tracing_subscriber::{fmt, EnvFilter};

use backend::inbound::http;
use backend::inbound::http::state::HttpState;
use backend::middleware::request_log::{ensure_log_dir, REQUEST_LOG_PATH};
use backend::outbound::persistence::bootstrap::RETRY_DELAY;
use backend::outbound::persistence::{connect_with_retry, DieselUserRepository};
use backend::server::config::{StoreSettings, BIND_ADDR};
use backend::RequestLog;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    ensure_log_dir(Path::new(REQUEST_LOG_PATH))?;

    let settings = StoreSettings::default();
    let pool = connect_with_retry(&settings.url(), RETRY_DELAY).await;
    info!("connected to store");

    let state = web::Data::new(HttpState::new(Arc::new(DieselUserRepository::new(pool))));

    let server = HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .wrap(RequestLog::new(REQUEST_LOG_PATH))
            .configure(http::configure)
    })
    .bind(BIND_ADDR)?;

    info!(host = BIND_ADDR.0, port = BIND_ADDR.1, "listening");
    server.run().await
}
