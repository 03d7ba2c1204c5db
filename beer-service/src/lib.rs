pub mod api;
pub mod bootstrap;
pub mod config;
pub mod docs;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod logging;
pub mod server;

pub use error::{AppError, AppResult};
pub use server::{create_app, AppState};
