use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("{entity} not found: {id}")]
    NotFound { entity: &'static str, id: Uuid },

    #[error("{entity} not found for child {child_id}")]
    NotFoundForChild {
        entity: &'static str,
        child_id: Uuid,
    },

    #[error("child {child_id} already has an active assignment")]
    ActiveAssignmentExists { child_id: Uuid },

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl StoreError {
    pub fn not_found(entity: &'static str, id: Uuid) -> Self {
        StoreError::NotFound { entity, id }
    }
}
