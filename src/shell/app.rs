// Wiring of one running application instance.

use crate::adapters::in_memory::catalog_translator::{CatalogError, CatalogTranslator};
use crate::adapters::in_memory::in_memory_navigator::InMemoryNavigator;
use crate::adapters::simulated::simulated_gateway::SimulatedGateway;
use crate::adapters::system::clock::SystemClock;
use crate::application::employee_workflow::{Collaborators, EmployeeWorkflow};
use crate::application::persistence::{
    LanguagePersistence, PersistenceMiddleware, load_language, load_persisted_state,
};
use crate::application::search_debouncer::SearchDebouncer;
use crate::application::store::Store;
use crate::core::ports::{Notifier, StateStorage};
use crate::core::store::state::{AppState, Language};
use crate::shell::config::AppConfig;
use std::sync::Arc;

const BUILT_IN_EN: &str = include_str!("../../locales/en.json");
const BUILT_IN_TR: &str = include_str!("../../locales/tr.json");

pub struct App {
    pub store: Arc<Store>,
    pub gateway: Arc<SimulatedGateway>,
    pub translator: Arc<CatalogTranslator>,
    pub navigator: Arc<InMemoryNavigator>,
    pub workflow: EmployeeWorkflow<SimulatedGateway, SystemClock>,
    pub search: SearchDebouncer,
}

impl App {
    pub async fn build(
        config: &AppConfig,
        storage: Arc<dyn StateStorage>,
        notifier: Arc<dyn Notifier>,
    ) -> Result<Self, CatalogError> {
        let translator = Arc::new(match &config.locales_dir {
            Some(dir) => CatalogTranslator::load_dir(dir).await?,
            None => built_in_catalogs()?,
        });

        let persisted = load_persisted_state(storage.as_ref(), &config.storage_key).await;
        let mut initial = AppState::preloaded(persisted);
        initial.ui.language = load_language(storage.as_ref(), &config.language_key)
            .await
            .unwrap_or_default();
        tracing::info!(
            employees = initial.employees.list.len(),
            language = %initial.ui.language,
            "store hydrated"
        );

        let store = Arc::new(
            Store::new(initial)
                .with_middleware(Arc::new(PersistenceMiddleware::new(
                    storage.clone(),
                    config.storage_key.clone(),
                )))
                .with_middleware(Arc::new(LanguagePersistence::new(storage, config.language_key.clone()))),
        );
        let gateway = Arc::new(SimulatedGateway::new(
            config.create_delay,
            config.update_delay,
            config.delete_delay,
        ));
        let navigator = Arc::new(InMemoryNavigator::new());
        let collaborators = Collaborators {
            notifier,
            translator: translator.clone(),
            navigator: navigator.clone(),
        };

        Ok(Self {
            workflow: EmployeeWorkflow::new(store.clone(), gateway.clone(), Arc::new(SystemClock), collaborators),
            search: SearchDebouncer::new(store.clone(), config.search_debounce),
            store,
            gateway,
            translator,
            navigator,
        })
    }
}

/// The English and Turkish catalogs compiled into the binary.
pub fn built_in_catalogs() -> Result<CatalogTranslator, CatalogError> {
    let parse = |language: Language, raw: &str| {
        serde_json::from_str(raw).map_err(|source| CatalogError::Parse {
            path: format!("built-in {language}.json"),
            source,
        })
    };
    Ok(CatalogTranslator::new()
        .with_catalog(Language::En, parse(Language::En, BUILT_IN_EN)?)
        .with_catalog(Language::Tr, parse(Language::Tr, BUILT_IN_TR)?))
}
