pub mod create_user_request;
pub mod create_user_response;
pub mod update_email_request;
pub mod update_user_request;
pub mod users;
