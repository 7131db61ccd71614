pub mod docs;
pub mod teams;
pub mod users;

use axum::Router;
use axum::routing::get;

use crate::state::SharedState;

pub fn api_routes() -> Router<SharedState> {
    Router::new()
        // Users
        .route("/api/users", get(users::list).post(users::create))
        .route(
            "/api/users/{id}",
            get(users::get).put(users::update).delete(users::delete),
        )
        // Teams
        .route("/api/teams", get(teams::list).post(teams::create))
        .route(
            "/api/teams/{id}",
            get(teams::get).put(teams::update).delete(teams::delete),
        )
        // Docs
        .route("/api-docs/openapi.json", get(docs::openapi))
}
