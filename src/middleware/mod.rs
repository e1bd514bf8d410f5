mod auth;
mod error_handler;

pub use auth::attach_bearer;
pub use error_handler::inspect_status;
