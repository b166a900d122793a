use super::domain::{ExperienceId, ExperienceRecord};

/// Persistence seam for experiences; the host application supplies the backend.
pub trait ExperienceStore: Send + Sync {
    fn insert(&self, record: ExperienceRecord) -> Result<ExperienceRecord, StoreError>;
    fn update(&self, record: ExperienceRecord) -> Result<(), StoreError>;
    fn fetch(&self, id: &ExperienceId) -> Result<Option<ExperienceRecord>, StoreError>;
}

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("experience not found")]
    NotFound,
    #[error("experience already exists")]
    Conflict,
    #[error("experience store unavailable: {0}")]
    Unavailable(String),
}
