//! Krill Desk - list-and-form controller for the roster page
//!
//! Owns the employee collection, the add/edit draft, and the reconciliation
//! loop against the roster backend. A rendering surface (Tauri, TUI, web)
//! reads [`DeskState`], feeds [`Intent`]s into [`Desk::handle`], and listens
//! on the notification channel; it never touches the network itself.

pub mod desk;
pub mod effect;
pub mod form;
pub mod intent;
pub mod state;

pub use desk::{Desk, step};
pub use effect::Effect;
pub use form::{EmployeeDraft, FormMode};
pub use intent::{Field, Intent};
pub use state::{DeskState, FormState, ListState};

// Re-exports for rendering surfaces
pub use shared::models::Employee;
pub use shared::notification::{Notification, NotificationLevel};
