pub mod catalog_handlers;
pub mod config;
pub mod contact_handlers;
pub mod error;
pub mod feedback_handlers;
pub mod handlers;
pub mod observability;
pub mod routes;
pub mod state;
pub mod store;
pub mod uploads;
pub mod validation;

pub use config::Config;
pub use routes::app;
pub use state::AppState;
