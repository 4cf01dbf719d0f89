// Application state: the `employees` slice and the `ui` slice.
//
// Purpose
// - EmployeesState owns the employee collection. No other component holds a mutable copy.
// - UiState holds ephemeral view state and always starts from defaults.
// - PersistedState is the durable snapshot, which carries the employees slice only.
//
// Notes
// - Field names serialize in camelCase to keep the stored JSON shape stable.

use crate::core::employee::model::{Department, Employee, Position};
use crate::core::route::Route;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub const DEFAULT_ITEMS_PER_PAGE: usize = 10;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeesState {
    pub list: Vec<Employee>,
    pub loading: bool,
    pub error: Option<String>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewMode {
    #[default]
    Table,
    List,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    Tr,
}

impl Language {
    pub const ALL: [Language; 2] = [Language::En, Language::Tr];

    pub fn code(&self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Tr => "tr",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unsupported value: {0}")]
pub struct UnsupportedValue(pub String);

impl FromStr for Language {
    type Err = UnsupportedValue;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // Accept region tags like `tr-TR`.
        let primary = s.trim().split(['-', '_']).next().unwrap_or_default();
        Language::ALL
            .into_iter()
            .find(|l| l.code().eq_ignore_ascii_case(primary))
            .ok_or_else(|| UnsupportedValue(s.to_string()))
    }
}

impl FromStr for ViewMode {
    type Err = UnsupportedValue;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "table" => Ok(ViewMode::Table),
            "list" => Ok(ViewMode::List),
            _ => Err(UnsupportedValue(s.to_string())),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Filters {
    pub search: String,
    pub department: Option<Department>,
    pub position: Option<Position>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    pub current_page: usize,
    pub items_per_page: usize,
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            current_page: 1,
            items_per_page: DEFAULT_ITEMS_PER_PAGE,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UiState {
    pub view_mode: ViewMode,
    pub current_route: Route,
    pub language: Language,
    pub filters: Filters,
    pub pagination: Pagination,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppState {
    pub employees: EmployeesState,
    pub ui: UiState,
}

impl AppState {
    /// Start from a persisted snapshot; the ui slice always resets.
    pub fn preloaded(persisted: Option<PersistedState>) -> Self {
        Self {
            employees: persisted.map(|p| p.employees).unwrap_or_default(),
            ui: UiState::default(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersistedState {
    pub employees: EmployeesState,
}

impl From<&AppState> for PersistedState {
    fn from(state: &AppState) -> Self {
        Self {
            employees: state.employees.clone(),
        }
    }
}

#[cfg(test)]
mod app_state_tests {
    use super::*;
    use crate::test_support::fixtures::employees::make_employee;
    use rstest::rstest;

    #[rstest]
    fn it_should_create_the_default_state() {
        let state = AppState::default();
        assert!(state.employees.list.is_empty());
        assert!(!state.employees.loading);
        assert_eq!(state.employees.error, None);
        assert_eq!(state.ui.view_mode, ViewMode::Table);
        assert_eq!(state.ui.current_route, Route::Employees);
        assert_eq!(state.ui.language, Language::En);
        assert_eq!(state.ui.filters, Filters::default());
        assert_eq!(state.ui.pagination.current_page, 1);
        assert_eq!(state.ui.pagination.items_per_page, 10);
    }

    #[rstest]
    #[case("en", Language::En)]
    #[case("TR", Language::Tr)]
    #[case("tr-TR", Language::Tr)]
    #[case("en_US", Language::En)]
    fn it_should_parse_languages(#[case] raw: &str, #[case] expected: Language) {
        assert_eq!(raw.parse::<Language>(), Ok(expected));
    }

    #[rstest]
    fn it_should_reject_unsupported_languages() {
        assert!("de".parse::<Language>().is_err());
    }

    #[rstest]
    fn it_should_preload_only_the_employees_slice() {
        let persisted = PersistedState {
            employees: EmployeesState {
                list: vec![make_employee("1", "a@x.com")],
                loading: false,
                error: Some("boom".into()),
            },
        };
        let state = AppState::preloaded(Some(persisted.clone()));
        assert_eq!(state.employees, persisted.employees);
        assert_eq!(state.ui, UiState::default());
        assert_eq!(AppState::preloaded(None), AppState::default());
    }

    #[rstest]
    fn it_should_serialize_the_persisted_shape() {
        let persisted = PersistedState::default();
        let json = serde_json::to_value(&persisted).unwrap();
        assert_eq!(json, serde_json::json!({ "employees": { "list": [], "loading": false, "error": null } }));
    }
}
