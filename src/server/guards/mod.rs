pub mod auth;

pub use auth::{RequireAdmin, SESSION_COOKIE};
