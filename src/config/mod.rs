//! Configuration loading and management for the timesheet service.
//!
//! This module loads the server settings and the employee roster from YAML
//! files in a configuration directory.
//!
//! # Example
//!
//! ```no_run
//! use timesheet_engine::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/default").unwrap();
//! println!("Listening on {}", config.server().bind_address);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{RosterConfig, ServerConfig, ServiceConfig};
