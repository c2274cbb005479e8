pub mod auth;
pub mod config;
pub mod db;
pub mod error;
pub mod mail;
pub mod sections;
pub mod server;

pub use error::VitrineError;
pub use sections::{ContentUpdates, Sections};
