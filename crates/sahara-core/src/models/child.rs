use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Gender {
    Male,
    Female,
    Other,
}

/// A registered child. Root of ownership: every screening, history,
/// assignment, video, and report hangs off a child and is deleted with it.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Child {
    pub id: Uuid,
    /// The parent account that registered this child.
    pub parent_id: Uuid,
    pub full_name: String,
    pub date_of_birth: jiff::civil::Date,
    pub age_years: u8,
    pub age_months: u8,
    pub gender: Gender,
    pub created_at: jiff::Timestamp,
    pub updated_at: jiff::Timestamp,
}
