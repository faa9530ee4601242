//! Shared types for the Krill roster frontend
//!
//! Data models and notification payloads shared between the resource
//! client, the desk controller, and whatever shell renders them.

pub mod models;
pub mod notification;

// Re-exports
pub use models::{Employee, EmployeeCreate, EmployeeUpdate};
pub use notification::{Notification, NotificationLevel};
