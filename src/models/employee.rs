//! Employee roster model and related types.
//!
//! Employees and their categories come from the roster configuration file.

use serde::{Deserialize, Serialize};

/// What a roster member may do in the dashboard.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    /// Regular employee: sees their own timesheet.
    #[default]
    Employee,
    /// Administrator: edits every timesheet and saves balances.
    Admin,
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Role::Employee => write!(f, "employee"),
            Role::Admin => write!(f, "admin"),
        }
    }
}

/// A group of employees (store, warehouse, former staff, ...).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    /// Unique identifier for the category.
    pub id: String,
    /// Display name.
    pub name: String,
}

/// Represents an employee whose punches are tracked.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    /// Unique identifier for the employee.
    pub id: String,
    /// Display name, stored upper-cased.
    pub name: String,
    /// Contact email, when known.
    #[serde(default)]
    pub email: Option<String>,
    /// The category the employee belongs to.
    pub category_id: String,
    /// Dashboard role.
    #[serde(default)]
    pub role: Role,
    /// Inactive employees are kept for history but hidden from editing.
    #[serde(default = "default_active")]
    pub active: bool,
}

fn default_active() -> bool {
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_employee_defaults_when_deserializing() {
        let yaml = "id: emp_001\nname: JOAO\ncategory_id: store\n";
        let employee: Employee = serde_yaml::from_str(yaml).unwrap();

        assert_eq!(employee.role, Role::Employee);
        assert!(employee.active);
        assert_eq!(employee.email, None);
    }

    #[test]
    fn test_role_serialization() {
        assert_eq!(serde_json::to_string(&Role::Admin).unwrap(), "\"admin\"");
        assert_eq!(Role::Employee.to_string(), "employee");
    }
}
