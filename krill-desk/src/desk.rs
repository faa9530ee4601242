//! Desk controller: pure transitions plus the effect-running orchestrator

use std::collections::VecDeque;

use krill_client::{ClientConfig, EmployeeApi};
use shared::notification::Notification;
use tokio::sync::broadcast;
use tracing::{debug, error, info, warn};

use crate::effect::Effect;
use crate::form::FormMode;
use crate::intent::Intent;
use crate::state::{DeskState, FormState, ListState};

/// Page-blocking message shown when the collection cannot be fetched
pub const FETCH_FAILED: &str =
    "Failed to fetch employees; verify the backend service is reachable.";

const NOTIFICATION_CAPACITY: usize = 32;

/// Apply one intent to the desk state
///
/// Pure: no I/O happens here. Returned effects are executed by
/// [`Desk::handle`], whose completion intents come back through this same
/// function until the machine settles.
pub fn step(mut state: DeskState, intent: Intent) -> (DeskState, Vec<Effect>) {
    let mut effects = Vec::new();

    match intent {
        Intent::Load => {
            state.list = ListState::Loading;
            effects.push(Effect::FetchList);
        }
        Intent::LoadFinished(Ok(employees)) => {
            debug!(count = employees.len(), "employee list refreshed");
            state.list = ListState::Ready(employees);
        }
        Intent::LoadFinished(Err(err)) => {
            error!(error = %err, "employee fetch failed");
            state.list = ListState::Failed(FETCH_FAILED.to_string());
            let seq = state.next_seq();
            effects.push(Effect::Notify(Notification::error(seq, FETCH_FAILED)));
        }

        Intent::AddClicked => {
            state.form = Some(FormState::creating());
        }
        Intent::EditClicked(id) => {
            let form = state.find_employee(&id).map(FormState::editing);
            match form {
                Some(form) => state.form = Some(form),
                None => warn!(%id, "edit requested for unknown employee"),
            }
        }
        Intent::FieldChanged(field, value) => match state.form.as_mut() {
            Some(form) => form.draft.set_field(field, value),
            None => debug!(?field, "field edit with no open form"),
        },

        Intent::Submit => {
            if state.is_busy() {
                debug!("submit dropped, mutation already in flight");
            } else if let Some(form) = state.form.clone() {
                let missing = form.draft.missing_required(form.mode);
                if !missing.is_empty() {
                    // rejected locally, nothing goes on the wire
                    let seq = state.next_seq();
                    effects.push(Effect::Notify(Notification::error(
                        seq,
                        format!("Missing required fields: {}", missing.join(", ")),
                    )));
                } else {
                    match form.mode {
                        FormMode::Creating => {
                            let seq = state.next_seq();
                            state.inflight = Some(seq);
                            effects.push(Effect::Notify(Notification::pending(
                                seq,
                                "Saving employee...",
                            )));
                            // the draft id, stale or not, never reaches a create
                            effects.push(Effect::CreateEmployee(form.draft.to_create()));
                        }
                        FormMode::Editing => match form.draft.id.clone() {
                            Some(id) => {
                                let seq = state.next_seq();
                                state.inflight = Some(seq);
                                effects.push(Effect::Notify(Notification::pending(
                                    seq,
                                    "Saving employee...",
                                )));
                                effects.push(Effect::UpdateEmployee {
                                    id,
                                    data: form.draft.to_update(),
                                });
                            }
                            None => warn!("editing draft has no id, submit dropped"),
                        },
                    }
                }
            } else {
                warn!("submit with no open form");
            }
        }
        Intent::SubmitFinished(Ok(employee)) => {
            let seq = state.take_inflight_seq();
            let verb = match state.form.as_ref().map(|f| f.mode) {
                Some(FormMode::Creating) => "created",
                _ => "updated",
            };
            info!(id = ?employee.id, name = %employee.name, "employee {}", verb);
            state.form = None;
            effects.push(Effect::Notify(Notification::success(
                seq,
                format!("Employee {verb}"),
            )));
            effects.push(Effect::FetchList);
        }
        Intent::SubmitFinished(Err(err)) => {
            let seq = state.take_inflight_seq();
            warn!(error = %err, "employee save failed");
            // form stays open with the draft intact for correction
            effects.push(Effect::Notify(Notification::error(
                seq,
                format!("Failed to save employee: {err}"),
            )));
        }
        Intent::CancelForm => {
            if state.form.take().is_some() {
                let seq = state.next_seq();
                effects.push(Effect::Notify(Notification::info(seq, "Changes discarded")));
            }
        }

        Intent::DeleteClicked(id) => {
            state.pending_delete = Some(id);
        }
        Intent::DismissDelete => {
            state.pending_delete = None;
        }
        Intent::ConfirmDelete => {
            if state.is_busy() {
                debug!("delete dropped, mutation already in flight");
            } else if let Some(id) = state.pending_delete.take() {
                let seq = state.next_seq();
                state.inflight = Some(seq);
                effects.push(Effect::Notify(Notification::pending(
                    seq,
                    "Deleting employee...",
                )));
                effects.push(Effect::DeleteEmployee { id });
            }
        }
        Intent::DeleteFinished(Ok(())) => {
            let seq = state.take_inflight_seq();
            info!("employee deleted");
            effects.push(Effect::Notify(Notification::success(seq, "Employee deleted")));
            effects.push(Effect::FetchList);
        }
        Intent::DeleteFinished(Err(err)) => {
            let seq = state.take_inflight_seq();
            warn!(error = %err, "employee delete failed");
            // collection untouched, so no refresh
            effects.push(Effect::Notify(Notification::error(
                seq,
                format!("Failed to delete employee: {err}"),
            )));
        }
    }

    (state, effects)
}

/// Desk controller
///
/// Owns the state and the resource client, executes effects sequentially,
/// and fans notifications out to subscribers. One desk serves one page; a
/// mutation runs to completion before the next intent is accepted.
pub struct Desk {
    api: EmployeeApi,
    state: DeskState,
    notifications: broadcast::Sender<Notification>,
}

impl Desk {
    /// Create a desk talking to the configured backend
    pub fn new(config: &ClientConfig) -> Self {
        Self::with_api(EmployeeApi::new(config))
    }

    /// Create a desk over an existing API client
    pub fn with_api(api: EmployeeApi) -> Self {
        let (notifications, _) = broadcast::channel(NOTIFICATION_CAPACITY);
        Self {
            api,
            state: DeskState::default(),
            notifications,
        }
    }

    /// Current state for the rendering surface
    pub fn state(&self) -> &DeskState {
        &self.state
    }

    /// Subscribe to outcome notifications
    pub fn subscribe(&self) -> broadcast::Receiver<Notification> {
        self.notifications.subscribe()
    }

    /// Apply a user intent and run every effect it triggers to completion
    ///
    /// Completion intents are fed back through [`step`] until the machine
    /// settles, so a single call covers e.g. submit -> create -> refresh.
    pub async fn handle(&mut self, intent: Intent) {
        let mut queue = VecDeque::from([intent]);
        while let Some(intent) = queue.pop_front() {
            let (state, effects) = step(std::mem::take(&mut self.state), intent);
            self.state = state;
            for effect in effects {
                if let Some(followup) = self.run_effect(effect).await {
                    queue.push_back(followup);
                }
            }
        }
    }

    async fn run_effect(&self, effect: Effect) -> Option<Intent> {
        match effect {
            Effect::FetchList => Some(Intent::LoadFinished(self.api.list().await)),
            Effect::CreateEmployee(data) => {
                Some(Intent::SubmitFinished(self.api.create(&data).await))
            }
            Effect::UpdateEmployee { id, data } => {
                Some(Intent::SubmitFinished(self.api.update(&id, &data).await))
            }
            Effect::DeleteEmployee { id } => {
                Some(Intent::DeleteFinished(self.api.delete(&id).await))
            }
            Effect::Notify(notification) => {
                // nobody listening is fine; the tracing line already
                // recorded the outcome
                let _ = self.notifications.send(notification);
                None
            }
        }
    }
}
