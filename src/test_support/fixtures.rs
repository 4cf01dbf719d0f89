// Shared test fixtures, compiled only for unit tests.

pub mod drafts;
pub mod employees;
