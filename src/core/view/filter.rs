// Derived filtering of the employee list.
//
// Order is preserved; filtering never re-sorts.

use crate::core::employee::model::Employee;
use crate::core::store::state::Filters;

fn matches_term(employee: &Employee, needle: &str) -> bool {
    [
        employee.first_name.as_str(),
        employee.last_name.as_str(),
        employee.full_name().as_str(),
        employee.email.as_str(),
        employee.phone.as_str(),
        employee.department.as_str(),
        employee.position.as_str(),
    ]
    .iter()
    .any(|haystack| haystack.to_lowercase().contains(needle))
}

/// Case-insensitive substring search over name, email, phone, department and position.
pub fn filter_employees<'a>(list: &'a [Employee], term: &str) -> Vec<&'a Employee> {
    let needle = term.trim().to_lowercase();
    if needle.is_empty() {
        return list.iter().collect();
    }
    list.iter().filter(|e| matches_term(e, &needle)).collect()
}

/// Search term plus the exact department and position filters.
pub fn apply_filters<'a>(list: &'a [Employee], filters: &Filters) -> Vec<&'a Employee> {
    filter_employees(list, &filters.search)
        .into_iter()
        .filter(|e| filters.department.is_none_or(|d| e.department == d))
        .filter(|e| filters.position.is_none_or(|p| e.position == p))
        .collect()
}
