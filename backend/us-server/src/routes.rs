use crate::{
    AppState, create_user, delete_user, get_user, health, update_user, update_user_email,
};

use axum::{
    Router,
    routing::{get, post},
};

/// Build the application router with all endpoints
pub fn build_router(state: AppState) -> Router {
    Router::new()
        // User endpoints
        .route("/users", post(create_user))
        .route(
            "/users/{id}",
            get(get_user)
                .put(update_user)
                .patch(update_user_email)
                .delete(delete_user),
        )
        // Liveness probe
        .route("/live", get(health::liveness))
        .with_state(state)
}
