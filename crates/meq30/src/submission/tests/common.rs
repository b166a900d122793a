use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use axum::response::Response;
use serde_json::Value;

use crate::interpretation::{Interpreter, TextRepository};
use crate::questionnaire::{AnswerSet, Subscale};
use crate::submission::domain::{ExperienceId, ExperienceRecord, SubmitRequest};
use crate::submission::store::{ExperienceStore, StoreError};
use crate::submission::{meq30_router, SubmissionService};

pub(super) fn interpreter() -> Interpreter {
    Interpreter::new(Arc::new(
        TextRepository::builtin().expect("builtin repository parses"),
    ))
}

pub(super) fn submit_request() -> SubmitRequest {
    SubmitRequest {
        experience_id: None,
        title: "  Retreat, day three ".to_string(),
        date: Some("2025-06-14".to_string()),
        notes: Some("   ".to_string()),
        answers: AnswerSet::uniform(4),
        language: "en".to_string(),
    }
}

/// Mystical items maxed, every other item at zero.
pub(super) fn mystical_only_answers() -> AnswerSet {
    let mut answers = AnswerSet::uniform(0);
    for id in Subscale::Mystical.canonical_ids() {
        answers.insert(*id, 5);
    }
    answers
}

#[derive(Default, Clone)]
pub(super) struct MemoryStore {
    records: Arc<Mutex<HashMap<ExperienceId, ExperienceRecord>>>,
    fetches: Arc<AtomicUsize>,
}

impl MemoryStore {
    pub(super) fn len(&self) -> usize {
        self.records.lock().expect("store mutex poisoned").len()
    }

    pub(super) fn fetch_count(&self) -> usize {
        self.fetches.load(Ordering::SeqCst)
    }
}

impl ExperienceStore for MemoryStore {
    fn insert(&self, record: ExperienceRecord) -> Result<ExperienceRecord, StoreError> {
        let mut guard = self.records.lock().expect("store mutex poisoned");
        if guard.contains_key(&record.id) {
            return Err(StoreError::Conflict);
        }
        guard.insert(record.id.clone(), record.clone());
        Ok(record)
    }

    fn update(&self, record: ExperienceRecord) -> Result<(), StoreError> {
        let mut guard = self.records.lock().expect("store mutex poisoned");
        if guard.contains_key(&record.id) {
            guard.insert(record.id.clone(), record);
            Ok(())
        } else {
            Err(StoreError::NotFound)
        }
    }

    fn fetch(&self, id: &ExperienceId) -> Result<Option<ExperienceRecord>, StoreError> {
        self.fetches.fetch_add(1, Ordering::SeqCst);
        let guard = self.records.lock().expect("store mutex poisoned");
        Ok(guard.get(id).cloned())
    }
}

pub(super) struct UnavailableStore;

impl ExperienceStore for UnavailableStore {
    fn insert(&self, _record: ExperienceRecord) -> Result<ExperienceRecord, StoreError> {
        Err(StoreError::Unavailable("database offline".to_string()))
    }

    fn update(&self, _record: ExperienceRecord) -> Result<(), StoreError> {
        Err(StoreError::Unavailable("database offline".to_string()))
    }

    fn fetch(&self, _id: &ExperienceId) -> Result<Option<ExperienceRecord>, StoreError> {
        Err(StoreError::Unavailable("database offline".to_string()))
    }
}

pub(super) fn build_service() -> (SubmissionService<MemoryStore>, Arc<MemoryStore>) {
    let store = Arc::new(MemoryStore::default());
    let service = SubmissionService::new(store.clone(), interpreter());
    (service, store)
}

pub(super) fn router_with_service(service: SubmissionService<MemoryStore>) -> axum::Router {
    meq30_router(Arc::new(service))
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
