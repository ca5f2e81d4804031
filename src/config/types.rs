//! Configuration types for the timesheet service.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from YAML configuration files.

use serde::Deserialize;

use crate::models::{Category, Employee};

/// HTTP server and logging settings from server.yaml.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// Socket address the API listens on (e.g., "127.0.0.1:8080").
    pub bind_address: String,
    /// Default `tracing` filter directive, overridden by `RUST_LOG`.
    #[serde(default = "default_log_filter")]
    pub log_filter: String,
    /// Name reported in startup logs.
    #[serde(default = "default_service_name")]
    pub service_name: String,
}

fn default_log_filter() -> String {
    "info".to_string()
}

fn default_service_name() -> String {
    "timesheet-engine".to_string()
}

/// Roster configuration file structure.
#[derive(Debug, Clone, Deserialize)]
pub struct RosterConfig {
    /// Employee categories.
    pub categories: Vec<Category>,
    /// Every employee known to the service, active or not.
    pub employees: Vec<Employee>,
}

/// The complete service configuration loaded from YAML files.
#[derive(Debug, Clone)]
pub struct ServiceConfig {
    server: ServerConfig,
    categories: Vec<Category>,
    employees: Vec<Employee>,
}

impl ServiceConfig {
    /// Creates a new ServiceConfig from its component parts.
    ///
    /// Employees are kept sorted by name, the order the roster is listed in.
    pub fn new(server: ServerConfig, roster: RosterConfig) -> Self {
        let mut employees = roster.employees;
        employees.sort_by(|a, b| a.name.cmp(&b.name));
        Self {
            server,
            categories: roster.categories,
            employees,
        }
    }

    /// Returns the server settings.
    pub fn server(&self) -> &ServerConfig {
        &self.server
    }

    /// Returns all categories.
    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    /// Returns all employees, sorted by name.
    pub fn employees(&self) -> &[Employee] {
        &self.employees
    }
}
