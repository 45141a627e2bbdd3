pub mod cli;
pub mod collaborators;
pub mod config;
pub mod error;
pub mod logging;
pub mod routes;
pub mod server;
pub mod state;
pub mod utils;

pub use config::ServerConfig;
pub use server::build_router;
pub use state::{AppState, SharedState};
