// This module groups the employee domain components.
//
// Structure
// - model.rs: the stored record, form draft, validated details, partial updates
// - validation.rs: field level and whole form validation rules
// - decide.rs: pure checks run before an asynchronous mutation is dispatched

pub mod decide;
pub mod model;
pub mod validation;
