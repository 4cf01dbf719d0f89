// Pure decision functions for the asynchronous employee operations.
//
// Purpose
// - Check the current employees slice once the simulated request has completed and produce the
//   action to dispatch on success.
//
// Responsibilities
// - Creating: refuse an email another employee already owns.
// - Updating and deleting: refuse an id that is no longer in the list.
// - Never perform input or output.

use crate::core::employee::model::{EmployeeDetails, EmployeeUpdates};
use crate::core::store::action::{self, Action};
use crate::core::store::state::EmployeesState;
use chrono::{DateTime, Utc};

#[derive(Debug, thiserror::Error, Clone, PartialEq, Eq)]
pub enum DecideError {
    #[error("employee {0} not found")]
    NotFound(String),
    #[error("email {0} is already in use")]
    EmailTaken(String),
}

fn email_taken(state: &EmployeesState, email: &str, except_id: Option<&str>) -> bool {
    let email = email.trim().to_lowercase();
    state
        .list
        .iter()
        .filter(|e| except_id != Some(e.id.as_str()))
        .any(|e| e.email.to_lowercase() == email)
}

pub fn decide_add(
    state: &EmployeesState,
    details: EmployeeDetails,
    id: String,
    now: DateTime<Utc>,
) -> Result<Action, DecideError> {
    if email_taken(state, &details.email, None) {
        return Err(DecideError::EmailTaken(details.email));
    }
    Ok(action::add_employee(details, id, now))
}

pub fn decide_update(
    state: &EmployeesState,
    id: &str,
    updates: EmployeeUpdates,
    now: DateTime<Utc>,
) -> Result<Action, DecideError> {
    if !state.list.iter().any(|e| e.id == id) {
        return Err(DecideError::NotFound(id.to_string()));
    }
    if let Some(email) = &updates.email {
        if email_taken(state, email, Some(id)) {
            return Err(DecideError::EmailTaken(email.clone()));
        }
    }
    Ok(action::update_employee(id, updates, now))
}

pub fn decide_delete(state: &EmployeesState, id: &str) -> Result<Action, DecideError> {
    if !state.list.iter().any(|e| e.id == id) {
        return Err(DecideError::NotFound(id.to_string()));
    }
    Ok(action::delete_employee(id))
}
