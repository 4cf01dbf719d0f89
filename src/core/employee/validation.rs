// Field level validation of the employee form.
//
// Purpose
// - Check each raw form value against its format and business rules.
// - Aggregate per field results into a single error map for the whole form.
//
// Responsibilities
// - First failing rule wins per field, except the date of birth where the future date check runs last.
// - Email uniqueness is checked case-insensitively against every other known employee.
// - Never embed user facing text. Errors map to translation keys.
//
// Boundaries
// - No input or output. "Today" is handed in through the context.

use crate::core::employee::model::{Department, Employee, EmployeeDetails, EmployeeDraft, Field, Position};
use crate::core::ports::Translator;
use crate::core::store::state::Language;
use chrono::{DateTime, Datelike, NaiveDate};
use regex::Regex;
use std::collections::BTreeMap;
use std::sync::LazyLock;

static NAME_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-zA-ZÀ-ÿ\s]+$").expect("name pattern compiles"));
static EMAIL_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern compiles"));
static PHONE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\+?[\d\s\-()]{10,}$").expect("phone pattern compiles"));

pub const MIN_AGE: i32 = 16;
pub const MAX_AGE: i32 = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("must be at least two characters")]
    TooShort,
    #[error("may only contain letters and spaces")]
    InvalidChars,
    #[error("is required")]
    Required,
    #[error("is invalid")]
    Invalid,
    #[error("is already in use")]
    Exists,
    #[error("implies an age outside the accepted range")]
    AgeInvalid,
    #[error("lies in the future")]
    FutureDate,
    #[error("requires a selection")]
    SelectionRequired,
}

impl ValidationError {
    /// Translation key for this error on the given field.
    pub fn message_key(&self, field: Field) -> &'static str {
        match (self, field) {
            (ValidationError::TooShort, _) => "validation.nameMinLength",
            (ValidationError::InvalidChars, _) => "validation.nameInvalidChars",
            (ValidationError::Required, Field::Email) => "validation.emailRequired",
            (ValidationError::Required, Field::Phone) => "validation.phoneRequired",
            (ValidationError::Required, _) => "validation.dateRequired",
            (ValidationError::Invalid, Field::Email) => "validation.emailInvalid",
            (ValidationError::Invalid, Field::Phone) => "validation.phoneInvalid",
            (ValidationError::Invalid, _) => "validation.dateInvalid",
            (ValidationError::Exists, _) => "validation.emailExists",
            (ValidationError::AgeInvalid, _) => "validation.ageInvalid",
            (ValidationError::FutureDate, _) => "validation.dateBirthFuture",
            (ValidationError::SelectionRequired, _) => "validation.selectionRequired",
        }
    }
}

/// Field to error map; empty when the checked values are valid.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors(BTreeMap<Field, ValidationError>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn get(&self, field: Field) -> Option<ValidationError> {
        self.0.get(&field).copied()
    }

    pub fn insert(&mut self, field: Field, error: ValidationError) {
        self.0.insert(field, error);
    }

    pub fn remove(&mut self, field: Field) -> Option<ValidationError> {
        self.0.remove(&field)
    }

    pub fn merge(&mut self, other: FieldErrors) {
        self.0.extend(other.0);
    }

    pub fn iter(&self) -> impl Iterator<Item = (Field, ValidationError)> + '_ {
        self.0.iter().map(|(f, e)| (*f, *e))
    }

    /// Render every error through the translator.
    pub fn messages(&self, translator: &dyn Translator, language: Language) -> BTreeMap<Field, String> {
        self.iter()
            .map(|(field, error)| (field, translator.translate(language, error.message_key(field), &[])))
            .collect()
    }
}

/// What the rules need to know beyond the value itself.
#[derive(Debug, Clone, Copy)]
pub struct ValidationContext<'a> {
    pub employees: &'a [Employee],
    pub editing_id: Option<&'a str>,
    pub today: NaiveDate,
}

impl<'a> ValidationContext<'a> {
    pub fn for_create(employees: &'a [Employee], today: NaiveDate) -> Self {
        Self {
            employees,
            editing_id: None,
            today,
        }
    }

    pub fn for_edit(employees: &'a [Employee], editing_id: &'a str, today: NaiveDate) -> Self {
        Self {
            employees,
            editing_id: Some(editing_id),
            today,
        }
    }
}

/// Accepts `YYYY-MM-DD` and RFC 3339 date-times.
pub fn parse_date(value: &str) -> Option<NaiveDate> {
    let value = value.trim();
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .ok()
        .or_else(|| DateTime::parse_from_rfc3339(value).ok().map(|d| d.date_naive()))
}

fn check_name(value: &str) -> Option<ValidationError> {
    let value = value.trim();
    if value.chars().count() < 2 {
        Some(ValidationError::TooShort)
    } else if !NAME_PATTERN.is_match(value) {
        Some(ValidationError::InvalidChars)
    } else {
        None
    }
}

fn check_email(value: &str, ctx: &ValidationContext<'_>) -> Option<ValidationError> {
    let value = value.trim();
    if value.is_empty() {
        return Some(ValidationError::Required);
    }
    if !EMAIL_PATTERN.is_match(value) {
        return Some(ValidationError::Invalid);
    }
    let wanted = value.to_lowercase();
    let taken = ctx
        .employees
        .iter()
        .filter(|e| ctx.editing_id != Some(e.id.as_str()))
        .any(|e| e.email.to_lowercase() == wanted);
    taken.then_some(ValidationError::Exists)
}

fn check_phone(value: &str) -> Option<ValidationError> {
    let value = value.trim();
    if value.is_empty() {
        Some(ValidationError::Required)
    } else if !PHONE_PATTERN.is_match(value) {
        Some(ValidationError::Invalid)
    } else {
        None
    }
}

fn check_employment_date(value: &str) -> Option<ValidationError> {
    if value.trim().is_empty() {
        Some(ValidationError::Required)
    } else if parse_date(value).is_none() {
        Some(ValidationError::Invalid)
    } else {
        None
    }
}

fn check_birth_date(value: &str, today: NaiveDate) -> Option<ValidationError> {
    if value.trim().is_empty() {
        return Some(ValidationError::Required);
    }
    let Some(date) = parse_date(value) else {
        return Some(ValidationError::Invalid);
    };
    let mut error = None;
    // Calendar years only; a birthday later this year still counts.
    let age = today.year() - date.year();
    if !(MIN_AGE..=MAX_AGE).contains(&age) {
        error = Some(ValidationError::AgeInvalid);
    }
    if date > today {
        error = Some(ValidationError::FutureDate);
    }
    error
}

fn check_selection(value: &str) -> Option<ValidationError> {
    value.trim().is_empty().then_some(ValidationError::SelectionRequired)
}

fn check_department(value: &str) -> Option<ValidationError> {
    check_selection(value).or_else(|| value.parse::<Department>().err().map(|_| ValidationError::SelectionRequired))
}

fn check_position(value: &str) -> Option<ValidationError> {
    check_selection(value).or_else(|| value.parse::<Position>().err().map(|_| ValidationError::SelectionRequired))
}

pub fn validate_field(field: Field, value: &str, ctx: &ValidationContext<'_>) -> FieldErrors {
    let error = match field {
        Field::FirstName | Field::LastName => check_name(value),
        Field::Email => check_email(value, ctx),
        Field::Phone => check_phone(value),
        Field::DateOfEmployment => check_employment_date(value),
        Field::DateOfBirth => check_birth_date(value, ctx.today),
        Field::Department => check_department(value),
        Field::Position => check_position(value),
    };
    let mut errors = FieldErrors::new();
    if let Some(error) = error {
        errors.insert(field, error);
    }
    errors
}

pub fn validate_form(draft: &EmployeeDraft, ctx: &ValidationContext<'_>) -> FieldErrors {
    let mut errors = FieldErrors::new();
    for field in Field::ALL {
        errors.merge(validate_field(field, draft.value(field), ctx));
    }
    errors
}

impl EmployeeDraft {
    /// Validate the whole form and convert it into typed details.
    pub fn validate(&self, ctx: &ValidationContext<'_>) -> Result<EmployeeDetails, FieldErrors> {
        let errors = validate_form(self, ctx);
        if !errors.is_empty() {
            return Err(errors);
        }
        let (Some(date_of_birth), Some(date_of_employment), Ok(department), Ok(position)) = (
            parse_date(&self.date_of_birth),
            parse_date(&self.date_of_employment),
            self.department.parse::<Department>(),
            self.position.parse::<Position>(),
        ) else {
            return Err(errors);
        };
        Ok(EmployeeDetails {
            first_name: self.first_name.trim().to_string(),
            last_name: self.last_name.trim().to_string(),
            email: self.email.trim().to_string(),
            phone: self.phone.trim().to_string(),
            date_of_birth,
            date_of_employment,
            department,
            position,
        })
    }
}
