mod api;
mod config;
mod error;
mod logging;
mod store;

pub use api::server::create_app;
pub use api::server::start_server;
pub use api::server::AppState;
pub use config::Args;
pub use config::Environment;
pub use error::ApiError;
pub use logging::setup_logging;
pub use store::core::MemoryStore;
pub use store::core::StoreContext;
