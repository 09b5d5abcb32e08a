// src/candidats/routes.rs

use super::handlers;
use axum::{routing::get, Router};

/// Creates the candidats router with the CRUD routes
pub fn candidats_routes() -> Router {
    Router::new()
        .route(
            "/api/candidats",
            get(handlers::get_all_candidats)
                .post(handlers::create_candidat)
                .put(handlers::update_candidat),
        )
        .route(
            "/api/candidats/:id",
            get(handlers::get_candidat).delete(handlers::delete_candidat),
        )
}
