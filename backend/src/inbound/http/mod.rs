//! HTTP inbound adapter exposing the REST endpoints.

pub mod state;
pub mod users;

use actix_web::web;

/// Register every route on the given service config.
///
/// Shared between the production server and the endpoint tests so both
/// exercise the same routing table.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(users::list_users)
        .service(users::create_user)
        .service(users::delete_user);
}
