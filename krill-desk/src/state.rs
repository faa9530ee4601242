//! Desk state handed to the rendering surface

use shared::models::Employee;

use crate::form::{EmployeeDraft, FormMode};

/// List half of the page state
#[derive(Debug, Clone, Default, PartialEq)]
pub enum ListState {
    /// Nothing fetched yet
    #[default]
    Idle,
    /// Initial fetch in flight
    Loading,
    /// Collection as the backend last reported it, in server order
    Ready(Vec<Employee>),
    /// Page-blocking fetch failure
    Failed(String),
}

impl ListState {
    /// Employees currently on screen (empty unless `Ready`)
    pub fn employees(&self) -> &[Employee] {
        match self {
            Self::Ready(employees) => employees,
            _ => &[],
        }
    }
}

/// Add/edit form layered over the list
#[derive(Debug, Clone, PartialEq)]
pub struct FormState {
    pub mode: FormMode,
    pub draft: EmployeeDraft,
}

impl FormState {
    /// Fresh empty form in Creating mode
    pub fn creating() -> Self {
        Self {
            mode: FormMode::Creating,
            draft: EmployeeDraft::default(),
        }
    }

    /// Form pre-populated from an existing employee
    pub fn editing(employee: &Employee) -> Self {
        Self {
            mode: FormMode::Editing,
            draft: EmployeeDraft::from_employee(employee),
        }
    }
}

/// Full desk state consumed by the rendering surface
///
/// The list state, the form, and the pending-delete confirmation are
/// orthogonal: the form may be open in any list state.
#[derive(Debug, Clone, Default)]
pub struct DeskState {
    pub list: ListState,
    /// Present while the add/edit form is open
    pub form: Option<FormState>,
    /// Employee id awaiting delete confirmation
    pub pending_delete: Option<String>,
    /// Toast seq of the mutation currently on the wire
    pub(crate) inflight: Option<u64>,
    pub(crate) seq: u64,
}

impl DeskState {
    pub fn form_open(&self) -> bool {
        self.form.is_some()
    }

    /// A mutation is on the wire; further submits/deletes are dropped
    pub fn is_busy(&self) -> bool {
        self.inflight.is_some()
    }

    pub fn find_employee(&self, id: &str) -> Option<&Employee> {
        self.list
            .employees()
            .iter()
            .find(|e| e.id.as_deref() == Some(id))
    }

    /// Allocate the next toast seq
    pub(crate) fn next_seq(&mut self) -> u64 {
        self.seq += 1;
        self.seq
    }

    /// Seq the current mutation's outcome toast resolves; falls back to a
    /// fresh one if nothing was marked in flight
    pub(crate) fn take_inflight_seq(&mut self) -> u64 {
        match self.inflight.take() {
            Some(seq) => seq,
            None => self.next_seq(),
        }
    }
}
