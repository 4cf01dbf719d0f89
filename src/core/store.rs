// This module groups the state machine behind the store.
//
// Structure
// - state.rs: the `employees` and `ui` slices
// - action.rs: the closed set of actions and their creators
// - evolve.rs: pure reducers, one per slice, plus the root reducer

pub mod action;
pub mod evolve;
pub mod state;
