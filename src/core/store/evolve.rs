// Reducers: combine a prior state with an action to produce the next state.
//
// Purpose
// - Define deterministic transitions for each action, one function per slice.
//
// Boundaries
// - No input or output. No side effects.
// - Each slice ignores the actions it does not own.
//
// Testing guidance
// - Folding a sequence of actions should yield an expected state.

use crate::core::store::action::Action;
use crate::core::store::state::{AppState, EmployeesState, Filters, UiState};

pub fn evolve_employees(state: EmployeesState, action: &Action) -> EmployeesState {
    match action {
        Action::SetEmployees(list) => EmployeesState {
            list: list.clone(),
            ..state
        },
        Action::AddEmployee(employee) => {
            let mut list = state.list;
            list.push(employee.clone());
            EmployeesState {
                list,
                error: None,
                ..state
            }
        }
        Action::UpdateEmployee { id, updates } => EmployeesState {
            list: state
                .list
                .into_iter()
                .map(|e| if &e.id == id { e.merge(updates) } else { e })
                .collect(),
            error: None,
            ..state
        },
        Action::DeleteEmployee { id } => EmployeesState {
            list: state.list.into_iter().filter(|e| &e.id != id).collect(),
            error: None,
            ..state
        },
        Action::SetLoading(loading) => EmployeesState {
            loading: *loading,
            ..state
        },
        Action::SetError(message) => EmployeesState {
            error: Some(message.clone()),
            loading: false,
            ..state
        },
        Action::ClearError => EmployeesState { error: None, ..state },
        _ => state,
    }
}

pub fn evolve_ui(state: UiState, action: &Action) -> UiState {
    let first_page = |mut ui: UiState| {
        ui.pagination.current_page = 1;
        ui
    };
    match action {
        Action::SetViewMode(mode) => UiState {
            view_mode: *mode,
            ..state
        },
        Action::SetCurrentRoute(route) => UiState {
            current_route: route.clone(),
            ..state
        },
        Action::SetLanguage(language) => UiState {
            language: *language,
            ..state
        },
        Action::SetSearchFilter(term) => {
            let mut next = state;
            next.filters.search = term.clone();
            first_page(next)
        }
        Action::SetDepartmentFilter(department) => {
            let mut next = state;
            next.filters.department = *department;
            first_page(next)
        }
        Action::SetPositionFilter(position) => {
            let mut next = state;
            next.filters.position = *position;
            first_page(next)
        }
        Action::ClearFilters => first_page(UiState {
            filters: Filters::default(),
            ..state
        }),
        Action::SetCurrentPage(page) => {
            let mut next = state;
            next.pagination.current_page = *page;
            next
        }
        Action::SetItemsPerPage(items_per_page) => {
            let mut next = state;
            next.pagination.items_per_page = *items_per_page;
            first_page(next)
        }
        _ => state,
    }
}

/// Root reducer.
pub fn evolve(state: AppState, action: &Action) -> AppState {
    AppState {
        employees: evolve_employees(state.employees, action),
        ui: evolve_ui(state.ui, action),
    }
}

#[cfg(test)]
mod store_evolve_tests {
    use super::*;
    use crate::core::employee::model::{Department, EmployeeUpdates, Position};
    use crate::core::route::Route;
    use crate::core::store::action::*;
    use crate::core::store::state::{Language, Pagination, ViewMode};
    use crate::test_support::fixtures::employees::make_employee;
    use chrono::{TimeZone, Utc};
    use rstest::{fixture, rstest};

    #[fixture]
    fn populated() -> EmployeesState {
        EmployeesState {
            list: vec![make_employee("1", "a@x.com"), make_employee("2", "b@x.com")],
            loading: true,
            error: Some("previous failure".into()),
        }
    }

    #[fixture]
    fn paged_ui() -> UiState {
        UiState {
            pagination: Pagination {
                current_page: 4,
                items_per_page: 10,
            },
            ..UiState::default()
        }
    }

    #[rstest]
    fn it_should_append_on_add_and_clear_the_error(populated: EmployeesState) {
        let added = make_employee("3", "c@x.com");
        let next = evolve_employees(populated, &Action::AddEmployee(added.clone()));
        assert_eq!(next.list.len(), 3);
        assert_eq!(next.list[2], added);
        assert_eq!(next.error, None);
        assert!(next.loading, "add leaves loading untouched");
    }

    #[rstest]
    fn it_should_merge_updates_into_the_matching_employee(populated: EmployeesState) {
        let now = Utc.with_ymd_and_hms(2026, 1, 2, 3, 4, 5).unwrap();
        let updates = EmployeeUpdates {
            first_name: Some("Grace".into()),
            department: Some(Department::Analytics),
            ..Default::default()
        };
        let next = evolve_employees(populated.clone(), &update_employee("2", updates, now));
        assert_eq!(next.list[0], populated.list[0]);
        assert_eq!(next.list[1].first_name, "Grace");
        assert_eq!(next.list[1].department, Department::Analytics);
        assert_eq!(next.list[1].last_name, populated.list[1].last_name);
        assert_eq!(next.list[1].updated_at, now);
        assert_eq!(next.list[1].created_at, populated.list[1].created_at);
        assert_eq!(next.error, None);
    }

    #[rstest]
    fn it_should_leave_the_list_alone_when_updating_an_unknown_id(populated: EmployeesState) {
        let now = Utc.with_ymd_and_hms(2026, 1, 2, 3, 4, 5).unwrap();
        let next = evolve_employees(populated.clone(), &update_employee("9", EmployeeUpdates::default(), now));
        assert_eq!(next.list, populated.list);
    }

    #[rstest]
    fn it_should_remove_on_delete(populated: EmployeesState) {
        let next = evolve_employees(populated, &delete_employee("1"));
        assert_eq!(next.list.len(), 1);
        assert_eq!(next.list[0].id, "2");
        assert_eq!(next.error, None);
    }

    #[rstest]
    fn it_should_replace_the_list_wholesale(populated: EmployeesState) {
        let replacement = vec![make_employee("7", "z@x.com")];
        let next = evolve_employees(populated, &set_employees(replacement.clone()));
        assert_eq!(next.list, replacement);
        assert_eq!(next.error.as_deref(), Some("previous failure"));
    }

    #[rstest]
    fn it_should_force_loading_off_when_an_error_is_set(populated: EmployeesState) {
        let next = evolve_employees(populated, &set_error("offline"));
        assert_eq!(next.error.as_deref(), Some("offline"));
        assert!(!next.loading);
    }

    #[rstest]
    fn it_should_clear_the_error_without_touching_loading(populated: EmployeesState) {
        let next = evolve_employees(populated, &clear_error());
        assert_eq!(next.error, None);
        assert!(next.loading);
    }

    #[rstest]
    fn it_should_set_the_loading_flag() {
        let next = evolve_employees(EmployeesState::default(), &set_loading(true));
        assert!(next.loading);
        let next = evolve_employees(next, &set_loading(false));
        assert!(!next.loading);
    }

    #[rstest]
    fn it_should_ignore_ui_actions_in_the_employees_slice(populated: EmployeesState) {
        let next = evolve_employees(populated.clone(), &set_view_mode(ViewMode::List));
        assert_eq!(next, populated);
    }

    #[rstest]
    #[case(set_search_filter("ada"))]
    #[case(set_items_per_page(25))]
    #[case(set_department_filter(Some(Department::Tech)))]
    #[case(set_position_filter(Some(Position::Senior)))]
    #[case(clear_filters())]
    fn it_should_reset_to_the_first_page(paged_ui: UiState, #[case] action: Action) {
        let next = evolve_ui(paged_ui, &action);
        assert_eq!(next.pagination.current_page, 1);
    }

    #[rstest]
    fn it_should_set_the_page_without_resetting_anything(paged_ui: UiState) {
        let with_search = evolve_ui(paged_ui, &set_search_filter("ada"));
        let next = evolve_ui(with_search, &set_current_page(3));
        assert_eq!(next.pagination.current_page, 3);
        assert_eq!(next.filters.search, "ada");
        assert_eq!(next.pagination.items_per_page, 10);
    }

    #[rstest]
    fn it_should_update_each_ui_slot(paged_ui: UiState) {
        let next = evolve_ui(paged_ui.clone(), &set_view_mode(ViewMode::List));
        assert_eq!(next.view_mode, ViewMode::List);
        assert_eq!(next.pagination, paged_ui.pagination);

        let next = evolve_ui(next, &set_current_route(Route::EditEmployee("2".into())));
        assert_eq!(next.current_route, Route::EditEmployee("2".into()));

        let next = evolve_ui(next, &set_language(Language::Tr));
        assert_eq!(next.language, Language::Tr);

        let next = evolve_ui(next, &set_items_per_page(20));
        assert_eq!(next.pagination.items_per_page, 20);
        assert_eq!(next.pagination.current_page, 1);
    }

    #[rstest]
    fn it_should_clear_every_filter(paged_ui: UiState) {
        let next = [
            set_search_filter("ada"),
            set_department_filter(Some(Department::Analytics)),
            set_position_filter(Some(Position::Junior)),
            clear_filters(),
        ]
        .iter()
        .fold(paged_ui, evolve_ui);
        assert_eq!(next.filters, Filters::default());
    }

    #[rstest]
    fn it_should_route_actions_to_both_slices() {
        let actions = [
            Action::AddEmployee(make_employee("1", "a@x.com")),
            set_search_filter("ada"),
            set_current_page(2),
        ];
        let state = actions.iter().fold(AppState::default(), evolve);
        assert_eq!(state.employees.list.len(), 1);
        assert_eq!(state.ui.filters.search, "ada");
        assert_eq!(state.ui.pagination.current_page, 2);
    }
}
