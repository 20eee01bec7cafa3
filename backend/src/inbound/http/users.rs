//! Users API handlers.
//!
//! ```text
//! GET /users
//! POST /users {"name":"Ada"}
//! DELETE /users/{id}
//! ```

use actix_web::{delete, get, post, web, HttpResponse};
use serde::Deserialize;
use tracing::error;

use crate::inbound::http::state::HttpState;

/// Create request body for `POST /users`.
#[derive(Debug, Deserialize)]
pub struct CreateUserRequest {
    /// Name of the user to create. Stored verbatim; emptiness and
    /// whitespace are not rejected here.
    pub name: String,
}

/// List all users in store order.
///
/// Store failures collapse to a generic 500 text body.
#[get("/users")]
pub async fn list_users(state: web::Data<HttpState>) -> HttpResponse {
    match state.users().list().await {
        Ok(users) => HttpResponse::Ok().json(users),
        Err(error) => {
            error!(%error, "listing users failed");
            HttpResponse::InternalServerError().body("Error fetching users")
        }
    }
}

/// Create a user from the supplied name.
///
/// The store assigns the identifier; the response carries no body beyond
/// an acknowledgement.
#[post("/users")]
pub async fn create_user(
    state: web::Data<HttpState>,
    payload: web::Json<CreateUserRequest>,
) -> HttpResponse {
    match state.users().create(&payload.name).await {
        Ok(()) => HttpResponse::Created().body("User added"),
        Err(error) => {
            error!(%error, "adding user failed");
            HttpResponse::InternalServerError().body("Error adding user")
        }
    }
}

/// Delete the user with the given identifier.
///
/// Responds with success even when no record matched.
#[delete("/users/{id}")]
pub async fn delete_user(state: web::Data<HttpState>, path: web::Path<i32>) -> HttpResponse {
    let id = path.into_inner();
    match state.users().delete(id).await {
        Ok(()) => HttpResponse::Ok().body("User deleted"),
        Err(error) => {
            error!(%error, id, "deleting user failed");
            // TODO: this returns the raw store error while list/create
            // return generic messages; align the bodies once nothing
            // depends on the current shape.
            HttpResponse::InternalServerError().body(error.to_string())
        }
    }
}
