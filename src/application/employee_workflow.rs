// Employee form and list flows, wired to the UI collaborators.
//
// Purpose
// - Submit the employee form in create or edit mode.
// - Delete an employee after the user confirmed it.
// - Prefill the edit form from the employee id carried by the route.
//
// Responsibilities
// - Validate against the live store state before any request starts.
// - Report outcomes through the notifier using translation keys only.
// - Navigate back to the list once a create or update has completed.

use crate::application::command_handlers::add_employee_handler::AddEmployeeHandler;
use crate::application::command_handlers::delete_employee_handler::DeleteEmployeeHandler;
use crate::application::command_handlers::update_employee_handler::UpdateEmployeeHandler;
use crate::application::errors::ApplicationError;
use crate::application::store::Store;
use crate::core::employee::decide::DecideError;
use crate::core::employee::model::{Employee, EmployeeDraft, EmployeeUpdates, Field};
use crate::core::employee::validation::{FieldErrors, ValidationContext, validate_field};
use crate::core::ports::{Clock, EmployeeGateway, Navigator, Notifier, Translator};
use crate::core::route::Route;
use crate::core::store::action::set_current_route;
use crate::core::store::state::Language;
use crate::core::view::paginate::find_employee;
use std::sync::Arc;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormMode {
    Create,
    Edit { employee_id: String },
}

impl FormMode {
    pub fn editing_id(&self) -> Option<&str> {
        match self {
            FormMode::Create => None,
            FormMode::Edit { employee_id } => Some(employee_id),
        }
    }
}

/// The UI collaborators the workflow reports to.
#[derive(Clone)]
pub struct Collaborators {
    pub notifier: Arc<dyn Notifier>,
    pub translator: Arc<dyn Translator>,
    pub navigator: Arc<dyn Navigator>,
}

pub struct EmployeeWorkflow<TGateway, TClock>
where
    TGateway: EmployeeGateway,
    TClock: Clock,
{
    store: Arc<Store>,
    clock: Arc<TClock>,
    add: AddEmployeeHandler<TGateway, TClock>,
    update: UpdateEmployeeHandler<TGateway, TClock>,
    delete: DeleteEmployeeHandler<TGateway>,
    collaborators: Collaborators,
}

impl<TGateway, TClock> EmployeeWorkflow<TGateway, TClock>
where
    TGateway: EmployeeGateway,
    TClock: Clock,
{
    pub fn new(store: Arc<Store>, gateway: Arc<TGateway>, clock: Arc<TClock>, collaborators: Collaborators) -> Self {
        Self {
            add: AddEmployeeHandler::new(store.clone(), gateway.clone(), clock.clone()),
            update: UpdateEmployeeHandler::new(store.clone(), gateway.clone(), clock.clone()),
            delete: DeleteEmployeeHandler::new(store.clone(), gateway),
            store,
            clock,
            collaborators,
        }
    }

    fn t(&self, language: Language, key: &str, params: &[(&str, &str)]) -> String {
        self.collaborators.translator.translate(language, key, params)
    }

    pub async fn open(&self, route: Route) {
        self.store.dispatch(set_current_route(route.clone())).await;
        self.collaborators.navigator.navigate(&route);
    }

    /// Check a single field as the user leaves it.
    pub async fn check_field(&self, mode: &FormMode, field: Field, value: &str) -> FieldErrors {
        let today = self.clock.today();
        self.store
            .select(|state| {
                let ctx = ValidationContext {
                    employees: &state.employees.list,
                    editing_id: mode.editing_id(),
                    today,
                };
                validate_field(field, value, &ctx)
            })
            .await
    }

    /// The employee behind an edit route, as a prefilled draft.
    pub async fn load_for_edit(&self, employee_id: &str) -> Result<EmployeeDraft, ApplicationError> {
        self.store
            .select(|state| find_employee(state, employee_id).map(EmployeeDraft::from))
            .await
            .ok_or_else(|| DecideError::NotFound(employee_id.to_string()).into())
    }

    pub async fn submit(&self, mode: &FormMode, draft: &EmployeeDraft) -> Result<(), ApplicationError> {
        let today = self.clock.today();
        let (validated, language) = self
            .store
            .select(|state| {
                let ctx = ValidationContext {
                    employees: &state.employees.list,
                    editing_id: mode.editing_id(),
                    today,
                };
                (draft.validate(&ctx), state.ui.language)
            })
            .await;
        let details = validated.map_err(ApplicationError::Invalid)?;

        let (outcome, success_key, failure_key) = match mode {
            FormMode::Create => (
                self.add.handle(details).await.map(|_: Employee| ()),
                "toast.employeeCreated",
                "toast.createError",
            ),
            FormMode::Edit { employee_id } => (
                self.update.handle(employee_id, EmployeeUpdates::from(details)).await,
                "toast.employeeUpdated",
                "toast.updateError",
            ),
        };

        match outcome {
            Ok(()) => {
                self.collaborators.notifier.success(&self.t(language, success_key, &[]));
                self.open(Route::Employees).await;
                Ok(())
            }
            Err(error) => {
                let message = error.to_string();
                self.collaborators
                    .notifier
                    .error(&self.t(language, failure_key, &[("error", &message)]));
                Err(error)
            }
        }
    }

    pub async fn delete(&self, employee_id: &str) -> Result<(), ApplicationError> {
        let language = self.store.select(|state| state.ui.language).await;
        match self.delete.handle(employee_id).await {
            Ok(()) => {
                self.collaborators
                    .notifier
                    .success(&self.t(language, "toast.employeeDeleted", &[]));
                Ok(())
            }
            Err(error) => {
                let message = error.to_string();
                self.collaborators
                    .notifier
                    .error(&self.t(language, "toast.deleteError", &[("error", &message)]));
                Err(error)
            }
        }
    }
}

#[cfg(test)]
mod employee_workflow_tests {
    use super::*;
    use crate::adapters::in_memory::catalog_translator::CatalogTranslator;
    use crate::adapters::in_memory::in_memory_navigator::InMemoryNavigator;
    use crate::adapters::in_memory::in_memory_notifier::{InMemoryNotifier, Notification};
    use crate::adapters::simulated::simulated_gateway::SimulatedGateway;
    use crate::adapters::system::clock::FixedClock;
    use crate::core::employee::validation::ValidationError;
    use crate::core::store::state::AppState;
    use crate::test_support::fixtures::drafts::EmployeeDraftBuilder;
    use crate::test_support::fixtures::employees::make_employee;
    use chrono::{TimeZone, Utc};
    use rstest::{fixture, rstest};

    struct Harness {
        store: Arc<Store>,
        gateway: Arc<SimulatedGateway>,
        notifier: Arc<InMemoryNotifier>,
        navigator: Arc<InMemoryNavigator>,
        workflow: EmployeeWorkflow<SimulatedGateway, FixedClock>,
    }

    #[fixture]
    fn harness() -> Harness {
        let mut initial = AppState::default();
        initial.employees.list = vec![make_employee("1", "a@x.com"), make_employee("2", "b@x.com")];
        let store = Arc::new(Store::new(initial));
        let gateway = Arc::new(SimulatedGateway::default());
        let clock = Arc::new(FixedClock::new(Utc.with_ymd_and_hms(2026, 10, 16, 8, 0, 0).unwrap()));
        let notifier = Arc::new(InMemoryNotifier::new());
        let navigator = Arc::new(InMemoryNavigator::new());
        let translator = CatalogTranslator::new()
            .with_catalog(
                Language::En,
                serde_json::json!({
                    "toast": {
                        "employeeCreated": "Employee created",
                        "employeeUpdated": "Employee updated",
                        "employeeDeleted": "Employee deleted",
                        "createError": "Could not create employee: {{error}}",
                        "deleteError": "Could not delete employee: {{error}}"
                    }
                }),
            );
        let collaborators = Collaborators {
            notifier: notifier.clone(),
            translator: Arc::new(translator),
            navigator: navigator.clone(),
        };
        let workflow = EmployeeWorkflow::new(store.clone(), gateway.clone(), clock, collaborators);
        Harness {
            store,
            gateway,
            notifier,
            navigator,
            workflow,
        }
    }

    #[rstest]
    #[tokio::test(start_paused = true)]
    async fn it_should_create_notify_and_navigate_back(harness: Harness) {
        let draft = EmployeeDraftBuilder::new().build();
        harness.workflow.submit(&FormMode::Create, &draft).await.expect("submit should succeed");

        let state = harness.store.get_state().await;
        assert_eq!(state.employees.list.len(), 3);
        assert_eq!(state.employees.list[2].email, draft.email);
        assert_eq!(state.ui.current_route, Route::Employees);
        assert_eq!(
            harness.notifier.notifications(),
            vec![Notification::Success("Employee created".into())]
        );
        assert_eq!(harness.navigator.history(), vec![Route::Employees]);
    }

    #[rstest]
    #[tokio::test(start_paused = true)]
    async fn it_should_not_start_a_request_for_an_invalid_form(harness: Harness) {
        let draft = EmployeeDraftBuilder::new().email("B@X.com").phone("12").build();
        let result = harness.workflow.submit(&FormMode::Create, &draft).await;

        let Err(ApplicationError::Invalid(errors)) = result else {
            panic!("expected validation errors");
        };
        assert_eq!(errors.get(Field::Email), Some(ValidationError::Exists));
        assert_eq!(errors.get(Field::Phone), Some(ValidationError::Invalid));
        assert!(harness.notifier.notifications().is_empty());
        assert!(!harness.store.get_state().await.employees.loading);
    }

    #[rstest]
    #[tokio::test(start_paused = true)]
    async fn it_should_update_an_employee_keeping_its_own_email(harness: Harness) {
        let mut draft = harness.workflow.load_for_edit("2").await.unwrap();
        assert_eq!(draft.email, "b@x.com");
        draft.set(Field::Email, "B@X.com");
        draft.set(Field::Position, "Junior");

        let mode = FormMode::Edit {
            employee_id: "2".into(),
        };
        harness.workflow.submit(&mode, &draft).await.expect("update should succeed");

        let state = harness.store.get_state().await;
        assert_eq!(state.employees.list[1].email, "B@X.com");
        assert_eq!(state.employees.list[1].position.as_str(), "Junior");
        assert_eq!(
            harness.notifier.notifications(),
            vec![Notification::Success("Employee updated".into())]
        );
    }

    #[rstest]
    #[tokio::test(start_paused = true)]
    async fn it_should_report_a_missing_employee_for_edit(harness: Harness) {
        let result = harness.workflow.load_for_edit("404").await;
        assert!(matches!(result, Err(ApplicationError::Domain(DecideError::NotFound(_)))));
    }

    #[rstest]
    #[tokio::test(start_paused = true)]
    async fn it_should_check_a_single_field(harness: Harness) {
        let create = harness.workflow.check_field(&FormMode::Create, Field::Email, "a@X.com").await;
        assert_eq!(create.get(Field::Email), Some(ValidationError::Exists));

        let edit = FormMode::Edit {
            employee_id: "1".into(),
        };
        assert!(harness.workflow.check_field(&edit, Field::Email, "a@X.com").await.is_empty());
    }

    #[rstest]
    #[tokio::test(start_paused = true)]
    async fn it_should_notify_a_failed_creation(harness: Harness) {
        harness.gateway.set_offline(true);
        let draft = EmployeeDraftBuilder::new().build();
        let result = harness.workflow.submit(&FormMode::Create, &draft).await;

        assert!(matches!(result, Err(ApplicationError::Gateway(_))));
        assert_eq!(
            harness.notifier.notifications(),
            vec![Notification::Error(
                "Could not create employee: employee service unavailable".into()
            )]
        );
        assert!(harness.navigator.history().is_empty());
    }

    #[rstest]
    #[tokio::test(start_paused = true)]
    async fn it_should_delete_and_notify(harness: Harness) {
        harness.workflow.delete("1").await.unwrap();
        let result = harness.workflow.delete("1").await;

        assert_eq!(harness.store.get_state().await.employees.list.len(), 1);
        assert!(result.is_err());
        assert_eq!(
            harness.notifier.notifications(),
            vec![
                Notification::Success("Employee deleted".into()),
                Notification::Error("Could not delete employee: employee 1 not found".into()),
            ]
        );
    }
}
