pub mod controller;
pub mod error;
pub mod models;
pub mod repository;

#[cfg(test)]
mod tests;

pub use controller::UserController;
pub use error::{Result, UserError, UserErrorKind, UserField};
pub use models::new_user::NewUser;
pub use models::user::User;
pub use repository::UserRepository;
