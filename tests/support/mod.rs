// Shared helpers for the integration tests.

#![allow(dead_code)]

use employee_directory::adapters::in_memory::in_memory_notifier::InMemoryNotifier;
use employee_directory::core::employee::model::EmployeeDraft;
use employee_directory::core::ports::StateStorage;
use employee_directory::shell::app::App;
use employee_directory::shell::config::AppConfig;
use std::sync::Arc;
use std::time::Duration;

pub fn draft(first_name: &str, last_name: &str, email: &str) -> EmployeeDraft {
    EmployeeDraft {
        first_name: first_name.into(),
        last_name: last_name.into(),
        email: email.into(),
        phone: "+90 532 123 45 67".into(),
        date_of_birth: "1990-05-17".into(),
        date_of_employment: "2020-01-06".into(),
        department: "Analytics".into(),
        position: "Medior".into(),
    }
}

/// Default settings without any simulated latency.
pub fn instant_config() -> AppConfig {
    AppConfig {
        create_delay: Duration::ZERO,
        update_delay: Duration::ZERO,
        delete_delay: Duration::ZERO,
        ..AppConfig::default()
    }
}

pub async fn build_app(config: &AppConfig, storage: Arc<dyn StateStorage>) -> (App, Arc<InMemoryNotifier>) {
    let notifier = Arc::new(InMemoryNotifier::new());
    let app = App::build(config, storage, notifier.clone())
        .await
        .expect("built-in catalogs parse");
    (app, notifier)
}
