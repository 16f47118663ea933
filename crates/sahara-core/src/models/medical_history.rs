use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

/// Medical-history background form (items A1–A4), one per child.
///
/// `requires_specialist` is derived: true when any of the four flags is set.
/// The write path recomputes it on every save; callers cannot set it.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct MedicalHistory {
    pub id: Uuid,
    pub child_id: Uuid,

    /// A1: infection during pregnancy.
    pub pregnancy_infection: bool,
    pub pregnancy_infection_desc: Option<String>,

    /// A2: complications at birth.
    pub birth_complications: bool,
    pub birth_complications_desc: Option<String>,

    /// A3: brain injury in the first year.
    pub brain_injury_first_year: bool,
    pub brain_injury_desc: Option<String>,

    /// A4: autism in the immediate family.
    pub family_autism_history: bool,

    pub requires_specialist: bool,

    pub created_at: jiff::Timestamp,
    pub updated_at: jiff::Timestamp,
}
