// Logical routes of the application.
//
// `/` and every unknown path redirect to the employee list.

use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(into = "String", from = "String")]
pub enum Route {
    #[default]
    Employees,
    AddEmployee,
    EditEmployee(String),
}

impl Route {
    pub fn path(&self) -> String {
        match self {
            Route::Employees => "/employees".to_string(),
            Route::AddEmployee => "/add-employee".to_string(),
            Route::EditEmployee(id) => format!("/edit-employee/{id}"),
        }
    }

    pub fn from_path(path: &str) -> Route {
        let trimmed = path.trim().trim_end_matches('/');
        match trimmed.trim_start_matches('/').split('/').collect::<Vec<_>>().as_slice() {
            ["employees"] => Route::Employees,
            ["add-employee"] => Route::AddEmployee,
            ["edit-employee", id] if !id.is_empty() => Route::EditEmployee((*id).to_string()),
            _ => Route::Employees,
        }
    }

    /// Employee id injected into the edit flow, if any.
    pub fn employee_id(&self) -> Option<&str> {
        match self {
            Route::EditEmployee(id) => Some(id),
            _ => None,
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}

impl From<Route> for String {
    fn from(route: Route) -> Self {
        route.path()
    }
}

impl From<String> for Route {
    fn from(path: String) -> Self {
        Route::from_path(&path)
    }
}
