//! Form working copy

use shared::models::{Employee, EmployeeCreate, EmployeeUpdate};

use crate::intent::Field;

/// Form mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormMode {
    Creating,
    Editing,
}

/// In-progress, not-yet-persisted form representation of an employee
///
/// Every input is kept as the raw string the user typed; validation happens
/// on submit, conversion to a wire payload in [`EmployeeDraft::to_create`] /
/// [`EmployeeDraft::to_update`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EmployeeDraft {
    /// Persisted id while editing, `None` while creating
    pub id: Option<String>,
    pub name: String,
    pub email: String,
    pub password: String,
    pub role: String,
    pub about: String,
    pub phone_number: String,
    pub profile_pic: String,
}

impl EmployeeDraft {
    /// Pre-populate from an existing employee for editing
    pub fn from_employee(employee: &Employee) -> Self {
        Self {
            id: employee.id.clone(),
            name: employee.name.clone(),
            email: employee.email.clone(),
            // write-only on the wire; the form starts blank and a blank
            // stays "unchanged" on submit
            password: String::new(),
            role: employee.role.clone().unwrap_or_default(),
            about: employee.about.clone().unwrap_or_default(),
            phone_number: employee.phone_number.clone().unwrap_or_default(),
            profile_pic: employee.profile_pic.clone().unwrap_or_default(),
        }
    }

    /// Merge a single field edit into the draft
    pub fn set_field(&mut self, field: Field, value: String) {
        match field {
            Field::Name => self.name = value,
            Field::Email => self.email = value,
            Field::Password => self.password = value,
            Field::Role => self.role = value,
            Field::About => self.about = value,
            Field::PhoneNumber => self.phone_number = value,
            Field::ProfilePic => self.profile_pic = value,
        }
    }

    /// Names of required fields still blank for the given mode
    pub fn missing_required(&self, mode: FormMode) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.name.trim().is_empty() {
            missing.push("name");
        }
        if self.email.trim().is_empty() {
            missing.push("email");
        }
        if mode == FormMode::Creating && self.password.trim().is_empty() {
            missing.push("password");
        }
        missing
    }

    /// Build the create payload; the draft id is never transmitted
    pub fn to_create(&self) -> EmployeeCreate {
        EmployeeCreate {
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
            password: self.password.clone(),
            role: opt(&self.role),
            about: opt(&self.about),
            profile_pic: opt(&self.profile_pic),
            phone_number: opt(&self.phone_number),
        }
    }

    /// Build the update payload; a blank password means "unchanged" and is
    /// omitted from the wire
    pub fn to_update(&self) -> EmployeeUpdate {
        EmployeeUpdate {
            name: Some(self.name.trim().to_string()),
            email: Some(self.email.trim().to_string()),
            password: opt(&self.password),
            role: opt(&self.role),
            about: opt(&self.about),
            profile_pic: opt(&self.profile_pic),
            phone_number: opt(&self.phone_number),
        }
    }
}

/// Blank form inputs map to absent wire fields
fn opt(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}
