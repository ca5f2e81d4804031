//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading the service
//! configuration from YAML files.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use crate::error::{EngineError, EngineResult};
use crate::models::{Category, Employee};

use super::types::{RosterConfig, ServerConfig, ServiceConfig};

/// Loads and provides access to the service configuration.
///
/// # Directory Structure
///
/// ```text
/// config/default/
/// ├── server.yaml   # Bind address, log filter, service name
/// └── roster.yaml   # Categories and employees
/// ```
///
/// # Example
///
/// ```no_run
/// use timesheet_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/default").unwrap();
///
/// let employee = loader.get_employee("emp_001").unwrap();
/// println!("Employee: {}", employee.name);
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: ServiceConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the configuration directory (e.g., "./config/default")
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` instance on success, or an error if:
    /// - Any required file is missing
    /// - Any file contains invalid YAML
    /// - An employee references an unknown category or an id is repeated
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        let server = Self::load_yaml::<ServerConfig>(&path.join("server.yaml"))?;

        let roster_path = path.join("roster.yaml");
        let roster = Self::load_yaml::<RosterConfig>(&roster_path)?;
        Self::validate_roster(&roster, &roster_path)?;

        Ok(Self {
            config: ServiceConfig::new(server, roster),
        })
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    fn validate_roster(roster: &RosterConfig, path: &Path) -> EngineResult<()> {
        let parse_error = |message: String| EngineError::ConfigParseError {
            path: path.display().to_string(),
            message,
        };

        let category_ids: HashSet<&str> = roster.categories.iter().map(|c| c.id.as_str()).collect();
        let mut employee_ids = HashSet::new();

        for employee in &roster.employees {
            if !employee_ids.insert(employee.id.as_str()) {
                return Err(parse_error(format!("duplicate employee id '{}'", employee.id)));
            }
            if !category_ids.contains(employee.category_id.as_str()) {
                return Err(parse_error(format!(
                    "employee '{}' references unknown category '{}'",
                    employee.id, employee.category_id
                )));
            }
        }

        Ok(())
    }

    /// Returns the underlying service configuration.
    pub fn config(&self) -> &ServiceConfig {
        &self.config
    }

    /// Returns the server settings.
    pub fn server(&self) -> &ServerConfig {
        self.config.server()
    }

    /// Returns every employee on the roster, sorted by name.
    pub fn employees(&self) -> &[Employee] {
        self.config.employees()
    }

    /// Gets an employee by id.
    ///
    /// # Returns
    ///
    /// Returns the employee if found, or `EmployeeNotFound` error.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use timesheet_engine::config::ConfigLoader;
    ///
    /// let loader = ConfigLoader::load("./config/default")?;
    /// let employee = loader.get_employee("emp_001")?;
    /// println!("Category: {}", employee.category_id);
    /// # Ok::<(), timesheet_engine::error::EngineError>(())
    /// ```
    pub fn get_employee(&self, id: &str) -> EngineResult<&Employee> {
        self.config
            .employees()
            .iter()
            .find(|e| e.id == id)
            .ok_or_else(|| EngineError::EmployeeNotFound { id: id.to_string() })
    }

    /// Gets a category by id.
    pub fn get_category(&self, id: &str) -> Option<&Category> {
        self.config.categories().iter().find(|c| c.id == id)
    }

    /// Lists the employees in a category, in roster order.
    pub fn employees_in_category(&self, category_id: &str) -> Vec<&Employee> {
        self.config
            .employees()
            .iter()
            .filter(|e| e.category_id == category_id)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Role;
    use std::path::PathBuf;

    fn config_path() -> &'static str {
        "./config/default"
    }

    fn scratch_dir(name: &str, server: &str, roster: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!(
            "timesheet-engine-{}-{}",
            name,
            uuid::Uuid::new_v4()
        ));
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join("server.yaml"), server).unwrap();
        fs::write(dir.join("roster.yaml"), roster).unwrap();
        dir
    }

    const SERVER: &str = "bind_address: \"127.0.0.1:0\"\n";

    #[test]
    fn test_load_valid_configuration() {
        let result = ConfigLoader::load(config_path());
        assert!(result.is_ok(), "Failed to load config: {:?}", result.err());

        let loader = result.unwrap();
        assert_eq!(loader.server().service_name, "timesheet-engine");
        assert!(!loader.employees().is_empty());
    }

    #[test]
    fn test_get_employee() {
        let loader = ConfigLoader::load(config_path()).unwrap();

        let employee = loader.get_employee("emp_001").unwrap();
        assert_eq!(employee.name, "ANA SOUZA");
        assert_eq!(employee.category_id, "store");
        assert!(employee.active);
    }

    #[test]
    fn test_get_employee_unknown_returns_error() {
        let loader = ConfigLoader::load(config_path()).unwrap();

        match loader.get_employee("unknown") {
            Err(EngineError::EmployeeNotFound { id }) => {
                assert_eq!(id, "unknown");
            }
            _ => panic!("Expected EmployeeNotFound error"),
        }
    }

    #[test]
    fn test_employees_sorted_by_name() {
        let loader = ConfigLoader::load(config_path()).unwrap();
        let names: Vec<&str> = loader.employees().iter().map(|e| e.name.as_str()).collect();
        let mut sorted = names.clone();
        sorted.sort();
        assert_eq!(names, sorted);
    }

    #[test]
    fn test_employees_in_category() {
        let loader = ConfigLoader::load(config_path()).unwrap();

        let warehouse = loader.employees_in_category("warehouse");
        assert!(!warehouse.is_empty());
        assert!(warehouse.iter().all(|e| e.category_id == "warehouse"));
        assert!(loader.employees_in_category("nowhere").is_empty());
    }

    #[test]
    fn test_get_category() {
        let loader = ConfigLoader::load(config_path()).unwrap();
        assert_eq!(loader.get_category("store").unwrap().name, "Store");
        assert!(loader.get_category("nowhere").is_none());
    }

    #[test]
    fn test_admin_role_loaded() {
        let loader = ConfigLoader::load(config_path()).unwrap();
        let admin = loader.get_employee("adm_001").unwrap();
        assert_eq!(admin.role, Role::Admin);
    }

    #[test]
    fn test_load_missing_directory_returns_error() {
        match ConfigLoader::load("/nonexistent/path") {
            Err(EngineError::ConfigNotFound { path }) => {
                assert!(path.contains("server.yaml"));
            }
            _ => panic!("Expected ConfigNotFound error"),
        }
    }

    #[test]
    fn test_invalid_yaml_returns_parse_error() {
        let dir = scratch_dir("invalid", SERVER, "categories: [unclosed");

        match ConfigLoader::load(&dir) {
            Err(EngineError::ConfigParseError { path, .. }) => {
                assert!(path.contains("roster.yaml"));
            }
            other => panic!("Expected ConfigParseError, got {:?}", other),
        }
        fs::remove_dir_all(dir).ok();
    }

    #[test]
    fn test_unknown_category_rejected() {
        let roster = r#"
categories:
  - id: store
    name: Store
employees:
  - id: emp_001
    name: ANA
    category_id: office
"#;
        let dir = scratch_dir("category", SERVER, roster);

        match ConfigLoader::load(&dir) {
            Err(EngineError::ConfigParseError { message, .. }) => {
                assert!(message.contains("unknown category 'office'"));
            }
            other => panic!("Expected ConfigParseError, got {:?}", other),
        }
        fs::remove_dir_all(dir).ok();
    }

    #[test]
    fn test_duplicate_employee_rejected() {
        let roster = r#"
categories:
  - id: store
    name: Store
employees:
  - id: emp_001
    name: ANA
    category_id: store
  - id: emp_001
    name: BRUNO
    category_id: store
"#;
        let dir = scratch_dir("duplicate", SERVER, roster);

        match ConfigLoader::load(&dir) {
            Err(EngineError::ConfigParseError { message, .. }) => {
                assert!(message.contains("duplicate employee id 'emp_001'"));
            }
            other => panic!("Expected ConfigParseError, got {:?}", other),
        }
        fs::remove_dir_all(dir).ok();
    }

    #[test]
    fn test_server_defaults_applied() {
        let roster = "categories: []\nemployees: []\n";
        let dir = scratch_dir("defaults", SERVER, roster);

        let loader = ConfigLoader::load(&dir).unwrap();
        assert_eq!(loader.server().bind_address, "127.0.0.1:0");
        assert_eq!(loader.server().log_filter, "info");
        assert_eq!(loader.server().service_name, "timesheet-engine");
        fs::remove_dir_all(dir).ok();
    }
}
