use metrics_exporter_prometheus::PrometheusHandle;
use meq30::config::InterpretationConfig;
use meq30::error::AppError;
use meq30::interpretation::{Interpreter, TextRepository};
use meq30::submission::{ExperienceId, ExperienceRecord, ExperienceStore, StoreError};
use std::collections::HashMap;
use std::sync::atomic::AtomicBool;
use std::sync::{Arc, Mutex, MutexGuard};
use tracing::info;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

#[derive(Default, Clone)]
pub(crate) struct InMemoryExperienceStore {
    records: Arc<Mutex<HashMap<ExperienceId, ExperienceRecord>>>,
}

impl InMemoryExperienceStore {
    fn lock(
        &self,
    ) -> Result<MutexGuard<'_, HashMap<ExperienceId, ExperienceRecord>>, StoreError> {
        self.records
            .lock()
            .map_err(|_| StoreError::Unavailable("experience store lock poisoned".to_string()))
    }
}

impl ExperienceStore for InMemoryExperienceStore {
    fn insert(&self, record: ExperienceRecord) -> Result<ExperienceRecord, StoreError> {
        let mut guard = self.lock()?;
        if guard.contains_key(&record.id) {
            return Err(StoreError::Conflict);
        }
        guard.insert(record.id.clone(), record.clone());
        Ok(record)
    }

    fn update(&self, record: ExperienceRecord) -> Result<(), StoreError> {
        let mut guard = self.lock()?;
        if guard.contains_key(&record.id) {
            guard.insert(record.id.clone(), record);
            Ok(())
        } else {
            Err(StoreError::NotFound)
        }
    }

    fn fetch(&self, id: &ExperienceId) -> Result<Option<ExperienceRecord>, StoreError> {
        let guard = self.lock()?;
        Ok(guard.get(id).cloned())
    }
}

/// Loads the configured text repository, or the built-in one, and applies the
/// default-locale override.
pub(crate) fn build_interpreter(config: &InterpretationConfig) -> Result<Interpreter, AppError> {
    let mut repository = match &config.text_repository {
        Some(path) => TextRepository::from_path(path)?,
        None => TextRepository::builtin()?,
    };

    if let Some(locale) = &config.default_locale {
        repository.set_default_locale(locale)?;
    }

    info!(
        repo_id = %repository.repo_id,
        version = %repository.version,
        default_locale = %repository.default_locale,
        "text repository loaded"
    );

    Ok(Interpreter::new(Arc::new(repository)))
}
