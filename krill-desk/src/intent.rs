//! User intents and operation outcomes feeding the desk state machine

use krill_client::ClientError;
use shared::models::Employee;

/// Form input targeted by a field edit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Email,
    Password,
    Role,
    About,
    PhoneNumber,
    ProfilePic,
}

/// Everything that can happen to the roster page
///
/// UI-originated intents come from the rendering surface; `*Finished`
/// intents are fed back by the orchestrator when a dispatched operation
/// completes.
#[derive(Debug)]
pub enum Intent {
    /// Initial or manual fetch of the collection
    Load,
    LoadFinished(Result<Vec<Employee>, ClientError>),
    /// "Add employee" button
    AddClicked,
    /// Edit button on a row
    EditClicked(String),
    /// Single form input changed
    FieldChanged(Field, String),
    /// Form submit button
    Submit,
    SubmitFinished(Result<Employee, ClientError>),
    /// Form cancel button
    CancelForm,
    /// Delete button on a row; only records the id pending confirmation
    DeleteClicked(String),
    /// Confirmation dialog accepted
    ConfirmDelete,
    /// Confirmation dialog dismissed
    DismissDelete,
    DeleteFinished(Result<(), ClientError>),
}
