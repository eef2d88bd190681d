//! Shared utilities for the Fabrica master data system: configuration
//! loading, logging initialization, the domain error taxonomy, and
//! validation helpers.

pub mod config;
pub mod error;
pub mod logging;
pub mod validation;

pub use config::{AppConfig, LoggingConfig, SeedConfig, ServerConfig};
pub use error::{ErrorResponse, MasterDataError, MasterDataResult};
pub use logging::init_logging;
pub use validation::{format_validation_errors, validate_model};
