pub mod api;
pub mod app_state;
pub mod cli;
pub mod error;
pub mod health;
pub mod logger;
pub mod routes;
pub mod server;
pub mod shutdown_coordinator;
pub mod shutdown_guard;

#[cfg(test)]
mod tests;

pub use api::{
    error::ApiError,
    error::Result as ApiResult,
    users::{
        create_user_request::CreateUserRequest,
        create_user_response::CreateUserResponse,
        update_email_request::UpdateEmailRequest,
        update_user_request::UpdateUserRequest,
        users::{create_user, delete_user, get_user, update_user, update_user_email},
    },
};
pub use app_state::AppState;
pub use cli::Cli;
pub use error::{Result as ServerResult, ServerError};
pub use routes::build_router;
pub use server::Server;
pub use shutdown_coordinator::ShutdownCoordinator;
pub use shutdown_guard::ShutdownGuard;
