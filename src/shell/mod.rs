// Composition root for the employee directory.
//
// Responsibilities
// - Read config from the environment.
// - Instantiate concrete adapters and hydrate the store from the last snapshot.
// - Wire the store, workflow and search debouncer together for the console binary.

pub mod app;
pub mod config;
pub mod console;
