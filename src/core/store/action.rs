// Actions and their creators.
//
// Purpose
// - Express every intent the store understands as plain data.
//
// Responsibilities
// - Creators stamp ids and timestamps so the reducers stay pure.
// - Serialize as `{ "type": "ADD_EMPLOYEE", "payload": ... }`.

use crate::core::employee::model::{Department, Employee, EmployeeDetails, EmployeeUpdates, Position};
use crate::core::route::Route;
use crate::core::store::state::{Language, ViewMode};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "payload", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Action {
    AddEmployee(Employee),
    UpdateEmployee { id: String, updates: EmployeeUpdates },
    DeleteEmployee { id: String },
    SetEmployees(Vec<Employee>),
    SetLoading(bool),
    SetError(String),
    ClearError,
    SetViewMode(ViewMode),
    SetCurrentRoute(Route),
    SetSearchFilter(String),
    SetDepartmentFilter(Option<Department>),
    SetPositionFilter(Option<Position>),
    ClearFilters,
    SetCurrentPage(usize),
    SetItemsPerPage(usize),
    SetLanguage(Language),
}

impl Action {
    /// The action type as it appears in serialized form.
    pub fn kind(&self) -> &'static str {
        match self {
            Action::AddEmployee(_) => "ADD_EMPLOYEE",
            Action::UpdateEmployee { .. } => "UPDATE_EMPLOYEE",
            Action::DeleteEmployee { .. } => "DELETE_EMPLOYEE",
            Action::SetEmployees(_) => "SET_EMPLOYEES",
            Action::SetLoading(_) => "SET_LOADING",
            Action::SetError(_) => "SET_ERROR",
            Action::ClearError => "CLEAR_ERROR",
            Action::SetViewMode(_) => "SET_VIEW_MODE",
            Action::SetCurrentRoute(_) => "SET_CURRENT_ROUTE",
            Action::SetSearchFilter(_) => "SET_SEARCH_FILTER",
            Action::SetDepartmentFilter(_) => "SET_DEPARTMENT_FILTER",
            Action::SetPositionFilter(_) => "SET_POSITION_FILTER",
            Action::ClearFilters => "CLEAR_FILTERS",
            Action::SetCurrentPage(_) => "SET_CURRENT_PAGE",
            Action::SetItemsPerPage(_) => "SET_ITEMS_PER_PAGE",
            Action::SetLanguage(_) => "SET_LANGUAGE",
        }
    }
}

pub fn add_employee(details: EmployeeDetails, id: impl Into<String>, now: DateTime<Utc>) -> Action {
    Action::AddEmployee(details.into_employee(id.into(), now))
}

pub fn update_employee(id: impl Into<String>, updates: EmployeeUpdates, now: DateTime<Utc>) -> Action {
    Action::UpdateEmployee {
        id: id.into(),
        updates: EmployeeUpdates {
            updated_at: Some(now),
            ..updates
        },
    }
}

pub fn delete_employee(id: impl Into<String>) -> Action {
    Action::DeleteEmployee { id: id.into() }
}

pub fn set_employees(employees: Vec<Employee>) -> Action {
    Action::SetEmployees(employees)
}

pub fn set_loading(loading: bool) -> Action {
    Action::SetLoading(loading)
}

pub fn set_error(message: impl Into<String>) -> Action {
    Action::SetError(message.into())
}

pub fn clear_error() -> Action {
    Action::ClearError
}

pub fn set_view_mode(mode: ViewMode) -> Action {
    Action::SetViewMode(mode)
}

pub fn set_current_route(route: Route) -> Action {
    Action::SetCurrentRoute(route)
}

pub fn set_search_filter(term: impl Into<String>) -> Action {
    Action::SetSearchFilter(term.into())
}

pub fn set_department_filter(department: Option<Department>) -> Action {
    Action::SetDepartmentFilter(department)
}

pub fn set_position_filter(position: Option<Position>) -> Action {
    Action::SetPositionFilter(position)
}

pub fn clear_filters() -> Action {
    Action::ClearFilters
}

pub fn set_current_page(page: usize) -> Action {
    Action::SetCurrentPage(page)
}

pub fn set_items_per_page(items_per_page: usize) -> Action {
    Action::SetItemsPerPage(items_per_page)
}

pub fn set_language(language: Language) -> Action {
    Action::SetLanguage(language)
}
