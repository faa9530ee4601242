//! Employee Model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

fn default_enabled() -> bool {
    true
}

/// Employee entity
///
/// `password` is write-only: it rides along on create/update payloads and
/// the backend never echoes it back in a retrievable form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    /// Server-assigned UUID, absent until persisted
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub name: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    #[serde(default)]
    pub role: Option<String>,
    #[serde(default)]
    pub about: Option<String>,
    #[serde(default)]
    pub profile_pic: Option<String>,
    #[serde(default)]
    pub phone_number: Option<String>,
    /// Status flag, owned by the backend; read-only for the frontend
    #[serde(default = "default_enabled")]
    pub is_enabled: bool,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Employee {
    /// Status column text for the roster table
    pub fn status_label(&self) -> &'static str {
        if self.is_enabled { "Active" } else { "Inactive" }
    }

    /// Optional display fields fall back to "N/A"
    pub fn display_or_na(value: Option<&str>) -> &str {
        match value {
            Some(v) if !v.trim().is_empty() => v,
            _ => "N/A",
        }
    }
}

/// Create employee payload
///
/// Carries no id; the backend assigns one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeCreate {
    pub name: String,
    pub email: String,
    pub password: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub about: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile_pic: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
}

/// Update employee payload
///
/// All fields optional; an absent password means "unchanged".
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeUpdate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub about: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile_pic: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_employee_wire_names_are_camel_case() {
        let json = serde_json::json!({
            "id": "e-1",
            "name": "Ann",
            "email": "a@x.com",
            "phoneNumber": "555-0101",
            "profilePic": "ann.png",
            "isEnabled": false
        });

        let employee: Employee = serde_json::from_value(json).unwrap();
        assert_eq!(employee.phone_number.as_deref(), Some("555-0101"));
        assert_eq!(employee.profile_pic.as_deref(), Some("ann.png"));
        assert!(!employee.is_enabled);
        assert_eq!(employee.status_label(), "Inactive");

        let back = serde_json::to_value(&employee).unwrap();
        assert!(back.get("phoneNumber").is_some());
        assert!(back.get("isEnabled").is_some());
    }

    #[test]
    fn test_employee_defaults_enabled_when_absent() {
        let employee: Employee =
            serde_json::from_value(serde_json::json!({"name": "Bo", "email": "b@x.com"})).unwrap();
        assert!(employee.is_enabled);
        assert_eq!(employee.status_label(), "Active");
    }

    #[test]
    fn test_update_skips_absent_fields() {
        let update = EmployeeUpdate {
            name: Some("Ann".to_string()),
            email: Some("a@x.com".to_string()),
            ..Default::default()
        };

        let value = serde_json::to_value(&update).unwrap();
        let object = value.as_object().unwrap();
        assert_eq!(object.len(), 2);
        assert!(!object.contains_key("password"));
    }

    #[test]
    fn test_display_or_na() {
        assert_eq!(Employee::display_or_na(Some("Manager")), "Manager");
        assert_eq!(Employee::display_or_na(Some("  ")), "N/A");
        assert_eq!(Employee::display_or_na(None), "N/A");
    }
}
