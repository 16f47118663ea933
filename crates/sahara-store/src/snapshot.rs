//! JSON snapshot of the whole store, for demo seeding and for persisting
//! state between runs. Collections are serialized as plain vectors; the
//! active-assignment index is rebuilt on load and revalidated, so a tampered
//! snapshot with two active assignments for one child is rejected.

use serde::{Deserialize, Serialize};

use sahara_core::models::assessment::{AssessmentCase, ObservationVideo};
use sahara_core::models::assignment::{
    AssignmentStatus, CheckpointReview, CurriculumAssignment, DailyProgressEntry,
};
use sahara_core::models::child::Child;
use sahara_core::models::curriculum::{Curriculum, CurriculumTask};
use sahara_core::models::medical_history::MedicalHistory;
use sahara_core::models::report::DiagnosisReport;
use sahara_core::models::screening::ScreeningResponse;

use crate::error::StoreError;
use crate::store::{Collections, RecordStore};

#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct StoreSnapshot {
    pub children: Vec<Child>,
    pub screenings: Vec<ScreeningResponse>,
    pub histories: Vec<MedicalHistory>,
    pub curricula: Vec<Curriculum>,
    pub tasks: Vec<CurriculumTask>,
    pub assignments: Vec<CurriculumAssignment>,
    pub progress: Vec<DailyProgressEntry>,
    pub reviews: Vec<CheckpointReview>,
    pub cases: Vec<AssessmentCase>,
    pub videos: Vec<ObservationVideo>,
    pub reports: Vec<DiagnosisReport>,
}

impl RecordStore {
    pub fn snapshot(&self) -> StoreSnapshot {
        self.with_collections(|inner| StoreSnapshot {
            children: inner.children.values().cloned().collect(),
            screenings: inner.screenings.values().cloned().collect(),
            histories: inner.histories.values().cloned().collect(),
            curricula: inner.curricula.values().cloned().collect(),
            tasks: inner.tasks.values().cloned().collect(),
            assignments: inner.assignments.values().cloned().collect(),
            progress: inner.progress.values().cloned().collect(),
            reviews: inner.reviews.clone(),
            cases: inner.cases.values().cloned().collect(),
            videos: inner.videos.values().cloned().collect(),
            reports: inner.reports.values().cloned().collect(),
        })
    }

    pub fn from_snapshot(snapshot: StoreSnapshot) -> Result<Self, StoreError> {
        let mut inner = Collections::default();

        for child in snapshot.children {
            inner.children.insert(child.id, child);
        }
        for screening in snapshot.screenings {
            inner.screenings.insert(screening.child_id, screening);
        }
        for history in snapshot.histories {
            inner.histories.insert(history.child_id, history);
        }
        for curriculum in snapshot.curricula {
            inner.curricula.insert(curriculum.id, curriculum);
        }
        for task in snapshot.tasks {
            inner.tasks.insert(task.id, task);
        }
        for assignment in snapshot.assignments {
            if assignment.status == AssignmentStatus::Active
                && inner
                    .active_assignments
                    .insert(assignment.child_id, assignment.id)
                    .is_some()
            {
                return Err(StoreError::ActiveAssignmentExists {
                    child_id: assignment.child_id,
                });
            }
            inner.assignments.insert(assignment.id, assignment);
        }
        for entry in snapshot.progress {
            inner
                .progress
                .insert((entry.assignment_id, entry.task_id, entry.date), entry);
        }
        inner.reviews = snapshot.reviews;
        for case in snapshot.cases {
            inner.cases.insert(case.child_id, case);
        }
        for video in snapshot.videos {
            inner.videos.insert(video.id, video);
        }
        for report in snapshot.reports {
            inner.reports.insert(report.id, report);
        }

        Ok(RecordStore::from_collections(inner))
    }

    pub fn to_json(&self) -> Result<Vec<u8>, StoreError> {
        Ok(serde_json::to_vec_pretty(&self.snapshot())?)
    }

    pub fn from_json(bytes: &[u8]) -> Result<Self, StoreError> {
        let snapshot: StoreSnapshot = serde_json::from_slice(bytes)?;
        Self::from_snapshot(snapshot)
    }
}
