// Shared test fixture for employee form drafts, parsed from a JSON file the way the form
// would receive it.

use crate::core::employee::model::{Department, EmployeeDetails, EmployeeDraft, Position};
use chrono::NaiveDate;
use std::fs;

pub struct EmployeeDraftBuilder {
    inner: EmployeeDraft,
}

impl Default for EmployeeDraftBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[allow(dead_code)]
impl EmployeeDraftBuilder {
    pub fn new() -> Self {
        let json_str = fs::read_to_string("./src/test_support/fixtures/json/employee_draft.json").unwrap();
        let inner: EmployeeDraft = serde_json::from_str(&json_str).unwrap();
        Self { inner }
    }

    pub fn first_name(mut self, v: impl Into<String>) -> Self {
        self.inner.first_name = v.into();
        self
    }

    pub fn last_name(mut self, v: impl Into<String>) -> Self {
        self.inner.last_name = v.into();
        self
    }

    pub fn email(mut self, v: impl Into<String>) -> Self {
        self.inner.email = v.into();
        self
    }

    pub fn phone(mut self, v: impl Into<String>) -> Self {
        self.inner.phone = v.into();
        self
    }

    pub fn date_of_birth(mut self, v: impl Into<String>) -> Self {
        self.inner.date_of_birth = v.into();
        self
    }

    pub fn date_of_employment(mut self, v: impl Into<String>) -> Self {
        self.inner.date_of_employment = v.into();
        self
    }

    pub fn department(mut self, v: impl Into<String>) -> Self {
        self.inner.department = v.into();
        self
    }

    pub fn position(mut self, v: impl Into<String>) -> Self {
        self.inner.position = v.into();
        self
    }

    pub fn build(self) -> EmployeeDraft {
        self.inner
    }
}

/// The details a valid default draft converts into.
pub fn make_details() -> EmployeeDetails {
    EmployeeDetails {
        first_name: "Ada".to_string(),
        last_name: "Lovelace".to_string(),
        email: "ada.lovelace@example.com".to_string(),
        phone: "+90 532 123 45 67".to_string(),
        date_of_birth: NaiveDate::from_ymd_opt(1990, 5, 17).unwrap(),
        date_of_employment: NaiveDate::from_ymd_opt(2020, 1, 6).unwrap(),
        department: Department::Tech,
        position: Position::Senior,
    }
}
