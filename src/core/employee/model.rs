// Employee record and the shapes that feed it.
//
// Purpose
// - Employee: the stored record, serialized in the camelCase shape used by durable storage.
// - EmployeeDraft: raw form values, the input of validation.
// - EmployeeDetails: a validated draft, the payload of the add action creator.
// - EmployeeUpdates: a partial update merged into an existing record.
//
// Boundaries
// - No input or output. Timestamps and ids are handed in by callers.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Department {
    Tech,
    Analytics,
}

impl Department {
    pub const ALL: [Department; 2] = [Department::Tech, Department::Analytics];

    pub fn as_str(&self) -> &'static str {
        match self {
            Department::Tech => "Tech",
            Department::Analytics => "Analytics",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Position {
    Junior,
    Medior,
    Senior,
}

impl Position {
    pub const ALL: [Position; 3] = [Position::Junior, Position::Medior, Position::Senior];

    pub fn as_str(&self) -> &'static str {
        match self {
            Position::Junior => "Junior",
            Position::Medior => "Medior",
            Position::Senior => "Senior",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown {kind}: {value}")]
pub struct UnknownVariant {
    pub kind: &'static str,
    pub value: String,
}

impl FromStr for Department {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Department::ALL
            .into_iter()
            .find(|d| d.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| UnknownVariant {
                kind: "department",
                value: s.to_string(),
            })
    }
}

impl FromStr for Position {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Position::ALL
            .into_iter()
            .find(|p| p.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| UnknownVariant {
                kind: "position",
                value: s.to_string(),
            })
    }
}

impl fmt::Display for Department {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub date_of_birth: NaiveDate,
    pub date_of_employment: NaiveDate,
    pub department: Department,
    pub position: Position,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Employee {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Shallow merge: only the fields present in `updates` are overwritten.
    pub fn merge(mut self, updates: &EmployeeUpdates) -> Self {
        if let Some(v) = &updates.first_name {
            self.first_name = v.clone();
        }
        if let Some(v) = &updates.last_name {
            self.last_name = v.clone();
        }
        if let Some(v) = &updates.email {
            self.email = v.clone();
        }
        if let Some(v) = &updates.phone {
            self.phone = v.clone();
        }
        if let Some(v) = updates.date_of_birth {
            self.date_of_birth = v;
        }
        if let Some(v) = updates.date_of_employment {
            self.date_of_employment = v;
        }
        if let Some(v) = updates.department {
            self.department = v;
        }
        if let Some(v) = updates.position {
            self.position = v;
        }
        if let Some(v) = updates.updated_at {
            self.updated_at = v;
        }
        self
    }
}

/// Validated employee fields, without identity or timestamps.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeDetails {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub date_of_birth: NaiveDate,
    pub date_of_employment: NaiveDate,
    pub department: Department,
    pub position: Position,
}

impl EmployeeDetails {
    pub fn into_employee(self, id: String, now: DateTime<Utc>) -> Employee {
        Employee {
            id,
            first_name: self.first_name,
            last_name: self.last_name,
            email: self.email,
            phone: self.phone,
            date_of_birth: self.date_of_birth,
            date_of_employment: self.date_of_employment,
            department: self.department,
            position: self.position,
            created_at: now,
            updated_at: now,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeUpdates {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_of_birth: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_of_employment: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub department: Option<Department>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<Position>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl From<EmployeeDetails> for EmployeeUpdates {
    fn from(details: EmployeeDetails) -> Self {
        Self {
            first_name: Some(details.first_name),
            last_name: Some(details.last_name),
            email: Some(details.email),
            phone: Some(details.phone),
            date_of_birth: Some(details.date_of_birth),
            date_of_employment: Some(details.date_of_employment),
            department: Some(details.department),
            position: Some(details.position),
            updated_at: None,
        }
    }
}

/// Form fields in the order the form renders and validates them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Field {
    FirstName,
    LastName,
    DateOfEmployment,
    DateOfBirth,
    Phone,
    Email,
    Department,
    Position,
}

impl Field {
    pub const ALL: [Field; 8] = [
        Field::FirstName,
        Field::LastName,
        Field::DateOfEmployment,
        Field::DateOfBirth,
        Field::Phone,
        Field::Email,
        Field::Department,
        Field::Position,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Field::FirstName => "firstName",
            Field::LastName => "lastName",
            Field::DateOfEmployment => "dateOfEmployment",
            Field::DateOfBirth => "dateOfBirth",
            Field::Phone => "phone",
            Field::Email => "email",
            Field::Department => "department",
            Field::Position => "position",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Raw form values as typed by the user.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeDraft {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub date_of_birth: String,
    pub date_of_employment: String,
    pub department: String,
    pub position: String,
}

impl EmployeeDraft {
    pub fn value(&self, field: Field) -> &str {
        match field {
            Field::FirstName => &self.first_name,
            Field::LastName => &self.last_name,
            Field::DateOfEmployment => &self.date_of_employment,
            Field::DateOfBirth => &self.date_of_birth,
            Field::Phone => &self.phone,
            Field::Email => &self.email,
            Field::Department => &self.department,
            Field::Position => &self.position,
        }
    }

    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        let value = value.into();
        match field {
            Field::FirstName => self.first_name = value,
            Field::LastName => self.last_name = value,
            Field::DateOfEmployment => self.date_of_employment = value,
            Field::DateOfBirth => self.date_of_birth = value,
            Field::Phone => self.phone = value,
            Field::Email => self.email = value,
            Field::Department => self.department = value,
            Field::Position => self.position = value,
        }
    }
}

impl From<&Employee> for EmployeeDraft {
    fn from(employee: &Employee) -> Self {
        Self {
            first_name: employee.first_name.clone(),
            last_name: employee.last_name.clone(),
            email: employee.email.clone(),
            phone: employee.phone.clone(),
            date_of_birth: employee.date_of_birth.format("%Y-%m-%d").to_string(),
            date_of_employment: employee.date_of_employment.format("%Y-%m-%d").to_string(),
            department: employee.department.to_string(),
            position: employee.position.to_string(),
        }
    }
}
