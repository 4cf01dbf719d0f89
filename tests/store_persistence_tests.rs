// Store, persistence middleware and hydration against real files.
//
// Responsibilities
// - A dispatch through the store leaves the employees slice on disk.
// - A second application instance over the same directory starts from that slice and default ui.
// - The chosen language is the one ui setting that survives a restart.
// - A corrupt snapshot starts an empty directory instead of failing.

mod support;

use employee_directory::adapters::file::file_storage::FileStorage;
use employee_directory::application::employee_workflow::FormMode;
use employee_directory::core::ports::StateStorage;
use employee_directory::core::store::action::{
    set_current_page, set_items_per_page, set_language, set_search_filter, set_view_mode,
};
use employee_directory::core::store::state::{Language, UiState, ViewMode};
use employee_directory::core::view::paginate::select_page;
use rstest::rstest;
use std::sync::Arc;
use support::{build_app, draft, instant_config};

#[rstest]
#[tokio::test]
async fn it_should_restore_employees_but_not_the_ui_on_restart() {
    let dir = tempfile::tempdir().unwrap();
    let config = instant_config();

    {
        let (app, _) = build_app(&config, Arc::new(FileStorage::new(dir.path()))).await;
        for (i, last_name) in ["Hopper", "Lovelace", "Turing"].iter().enumerate() {
            let email = format!("person{i}@example.com");
            app.workflow
                .submit(&FormMode::Create, &draft("Grace", last_name, &email))
                .await
                .unwrap();
        }
        app.store.dispatch(set_view_mode(ViewMode::List)).await;
        app.store.dispatch(set_search_filter("turing")).await;
    }

    assert!(dir.path().join("employeeApp.json").exists());

    let (restarted, _) = build_app(&config, Arc::new(FileStorage::new(dir.path()))).await;
    let state = restarted.store.get_state().await;
    assert_eq!(
        state.employees.list.iter().map(|e| e.last_name.as_str()).collect::<Vec<_>>(),
        vec!["Hopper", "Lovelace", "Turing"]
    );
    assert!(!state.employees.loading);
    assert_eq!(state.ui, UiState::default());
}

#[rstest]
#[tokio::test]
async fn it_should_restore_the_language_but_not_the_rest_of_the_ui() {
    let dir = tempfile::tempdir().unwrap();
    let config = instant_config();

    {
        let (app, _) = build_app(&config, Arc::new(FileStorage::new(dir.path()))).await;
        app.store.dispatch(set_language(Language::Tr)).await;
        app.store.dispatch(set_view_mode(ViewMode::List)).await;
        app.store.dispatch(set_items_per_page(5)).await;
        app.store.dispatch(set_search_filter("turing")).await;
    }

    assert!(dir.path().join("app-language.json").exists());

    let (restarted, _) = build_app(&config, Arc::new(FileStorage::new(dir.path()))).await;
    let ui = restarted.store.select(|s| s.ui.clone()).await;
    assert_eq!(
        ui,
        UiState {
            language: Language::Tr,
            ..UiState::default()
        }
    );
}

#[rstest]
#[tokio::test]
async fn it_should_use_the_configured_storage_key() {
    let dir = tempfile::tempdir().unwrap();
    let mut config = instant_config();
    config.storage_key = "staging".into();

    let storage = Arc::new(FileStorage::new(dir.path()));
    let (app, _) = build_app(&config, storage.clone()).await;
    app.store.dispatch(set_current_page(2)).await;

    assert!(storage.read("staging").await.unwrap().is_some());
    assert_eq!(storage.read("employeeApp").await.unwrap(), None);
}

#[rstest]
#[tokio::test]
async fn it_should_start_empty_from_a_corrupt_snapshot() {
    let dir = tempfile::tempdir().unwrap();
    let storage = Arc::new(FileStorage::new(dir.path()));
    storage.write("employeeApp", "{\"employees\": [").await.unwrap();

    let (app, _) = build_app(&instant_config(), storage).await;
    let state = app.store.get_state().await;
    assert!(state.employees.list.is_empty());
    assert_eq!(select_page(&state).window.total_pages, 0);
}
