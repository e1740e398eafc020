// Library root for the hello service

pub mod app;
pub mod config;
pub mod db;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod models;

// Re-export commonly used types
pub use config::{Config, DatabaseConfig};
pub use error::{ProbeError, StartupError};
pub use models::Greeting;
