//! Side effects requested by state transitions
//!
//! Transitions stay pure; anything touching the network or the notification
//! channel is described here and executed by [`crate::Desk`].

use shared::models::{EmployeeCreate, EmployeeUpdate};
use shared::notification::Notification;

/// Work the orchestrator performs after a transition
#[derive(Debug)]
pub enum Effect {
    /// Fetch the collection
    FetchList,
    /// POST a new employee
    CreateEmployee(EmployeeCreate),
    /// PUT an existing employee
    UpdateEmployee { id: String, data: EmployeeUpdate },
    /// DELETE an employee
    DeleteEmployee { id: String },
    /// Publish a notification to the toast channel
    Notify(Notification),
}
