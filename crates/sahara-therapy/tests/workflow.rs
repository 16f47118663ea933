use jiff::civil::date;
use uuid::Uuid;

use sahara_core::models::assessment::{CaseStatus, VideoKind};
use sahara_core::models::assignment::{AssignmentStatus, ProgressStatus};
use sahara_core::models::child::Gender;
use sahara_core::models::curriculum::CurriculumKind;
use sahara_core::models::report::Spectrum;
use sahara_core::models::screening::RiskLevel;
use sahara_screening::mchat::AnswerSheet;
use sahara_store::RecordStore;
use sahara_therapy::{cases, curriculum, diagnosis, intake, progress, review, seed, TherapyError};

fn new_child(store: &RecordStore) -> Uuid {
    intake::register_child(
        store,
        intake::NewChild {
            parent_id: Uuid::new_v4(),
            full_name: "Aarav".to_string(),
            date_of_birth: date(2023, 6, 12),
            age_years: 2,
            age_months: 2,
            gender: Gender::Male,
        },
    )
    .unwrap()
    .id
}

fn small_curriculum(store: &RecordStore, duration_days: u16) -> Uuid {
    let c = curriculum::register_curriculum(
        store,
        curriculum::NewCurriculum {
            title: format!("{duration_days}-Day Test Program"),
            description: String::new(),
            duration_days,
            kind: CurriculumKind::General,
            spectrum_focus: None,
            created_by: None,
        },
    )
    .unwrap();
    curriculum::add_task(
        store,
        c.id,
        curriculum::NewTask {
            day_number: 1,
            title: "Eye Contact Practice".to_string(),
            why_description: "Foundation for social connection.".to_string(),
            instructions: "Sit at eye level and wait for a look.".to_string(),
            demo_video_url: None,
            order_index: 1,
        },
    )
    .unwrap();
    c.id
}

#[test]
fn screening_is_rescored_on_every_save() {
    let store = RecordStore::new();
    let child = new_child(&store);

    // Typical child: YES everywhere except the reverse-scored 2, 5, 12.
    let mut answers = [true; 20];
    for n in [2, 5, 12] {
        answers[n - 1] = false;
    }
    let first = intake::submit_screening(&store, child, &AnswerSheet::new(answers)).unwrap();
    assert_eq!(first.total_score, 0);
    assert_eq!(first.risk_level, RiskLevel::Low);

    // Resubmission overwrites the derived fields in place.
    let second =
        intake::submit_screening(&store, child, &AnswerSheet::new([false; 20])).unwrap();
    assert_eq!(second.id, first.id);
    assert_eq!(second.total_score, 17);
    assert_eq!(second.risk_level, RiskLevel::High);
    assert_eq!(store.screening_for(child).unwrap().total_score, 17);
}

#[test]
fn screening_rejects_unknown_child_and_incomplete_sheet() {
    let store = RecordStore::new();
    let err = intake::submit_screening(
        &store,
        Uuid::new_v4(),
        &AnswerSheet::new([true; 20]),
    )
    .unwrap_err();
    assert!(matches!(err, TherapyError::NotFound(_)));

    let incomplete = AnswerSheet::from_pairs((1..=19).map(|n| (n, true)));
    assert!(incomplete.is_err());
}

#[test]
fn specialist_flag_follows_the_form() {
    let store = RecordStore::new();
    let child = new_child(&store);

    let flagged = intake::submit_medical_history(
        &store,
        child,
        intake::MedicalHistoryDraft {
            family_autism_history: true,
            ..Default::default()
        },
    )
    .unwrap();
    assert!(flagged.requires_specialist);

    // Clearing the flags clears the derived field on resubmission.
    let cleared =
        intake::submit_medical_history(&store, child, intake::MedicalHistoryDraft::default())
            .unwrap();
    assert_eq!(cleared.id, flagged.id);
    assert!(!cleared.requires_specialist);
}

#[test]
fn second_assignment_for_child_conflicts() {
    let store = RecordStore::new();
    let child = new_child(&store);
    let c = small_curriculum(&store, 15);

    curriculum::assign(&store, child, c, None, date(2025, 3, 1)).unwrap();
    let err = curriculum::assign(&store, child, c, None, date(2025, 3, 2)).unwrap_err();
    assert!(matches!(err, TherapyError::Conflict(_)));
}

#[test]
fn fifteen_day_program_runs_to_completion() {
    let store = RecordStore::new();
    let child = new_child(&store);
    let c = small_curriculum(&store, 15);

    let assignment = curriculum::assign(&store, child, c, None, date(2025, 3, 1)).unwrap();
    assert_eq!(assignment.current_day, 1);
    assert_eq!(assignment.end_date, date(2025, 3, 16));

    // 14 advances reach day 15, still active.
    let mut current = assignment.clone();
    for _ in 0..14 {
        current = curriculum::advance_day(&store, assignment.id).unwrap();
    }
    assert_eq!(current.current_day, 15);
    assert_eq!(current.status, AssignmentStatus::Active);

    // The 15th advance completes without moving the day.
    let done = curriculum::advance_day(&store, assignment.id).unwrap();
    assert_eq!(done.status, AssignmentStatus::Completed);
    assert_eq!(done.current_day, 15);

    // Completed is terminal.
    let err = curriculum::advance_day(&store, assignment.id).unwrap_err();
    assert!(matches!(err, TherapyError::Conflict(_)));

    // The child's active slot is free again.
    curriculum::assign(&store, child, c, None, date(2025, 3, 20)).unwrap();
}

#[test]
fn advance_ignores_unfinished_tasks() {
    // Leniency by design: nothing was submitted for day 1, yet the day
    // advances. The warning lives in the human-facing layer.
    let store = RecordStore::new();
    let child = new_child(&store);
    let c = small_curriculum(&store, 15);
    let assignment = curriculum::assign(&store, child, c, None, date(2025, 3, 1)).unwrap();

    let advanced = curriculum::advance_day(&store, assignment.id).unwrap();
    assert_eq!(advanced.current_day, 2);
}

#[test]
fn paused_assignment_cannot_advance_until_resumed() {
    let store = RecordStore::new();
    let child = new_child(&store);
    let c = small_curriculum(&store, 15);
    let assignment = curriculum::assign(&store, child, c, None, date(2025, 3, 1)).unwrap();

    curriculum::pause(&store, assignment.id).unwrap();
    let err = curriculum::advance_day(&store, assignment.id).unwrap_err();
    assert!(matches!(err, TherapyError::Conflict(_)));

    curriculum::resume(&store, assignment.id).unwrap();
    let advanced = curriculum::advance_day(&store, assignment.id).unwrap();
    assert_eq!(advanced.current_day, 2);
}

#[test]
fn advancing_a_missing_assignment_is_not_found() {
    let store = RecordStore::new();
    let err = curriculum::advance_day(&store, Uuid::new_v4()).unwrap_err();
    assert!(matches!(err, TherapyError::NotFound(_)));
}

#[test]
fn progress_resubmission_overwrites() {
    let store = RecordStore::new();
    let child = new_child(&store);
    let c = small_curriculum(&store, 15);
    let assignment = curriculum::assign(&store, child, c, None, date(2025, 3, 1)).unwrap();
    let task = store.tasks_for(c)[0].clone();

    let (first, created) = progress::submit_progress(
        &store,
        assignment.id,
        progress::ProgressSubmission {
            task_id: task.id,
            date: date(2025, 3, 1),
            status: ProgressStatus::DoneWithHelp,
            video_url: None,
            parent_notes: Some("needed prompting".to_string()),
        },
    )
    .unwrap();
    assert!(created);

    let (second, created) = progress::submit_progress(
        &store,
        assignment.id,
        progress::ProgressSubmission {
            task_id: task.id,
            date: date(2025, 3, 1),
            status: ProgressStatus::DoneWithoutHelp,
            video_url: None,
            parent_notes: None,
        },
    )
    .unwrap();
    assert!(!created);
    assert_eq!(second.id, first.id);

    let history = progress::progress_history(&store, assignment.id).unwrap();
    assert_eq!(history.len(), 1);
    assert_eq!(history[0].entries.len(), 1);
    assert_eq!(history[0].entries[0].status, ProgressStatus::DoneWithoutHelp);

    let stats = progress::progress_stats(&store, assignment.id).unwrap();
    assert_eq!(stats.total_submitted, 1);
    assert_eq!(stats.done_without_help, 1);
    assert_eq!(stats.completion_rate, 100.0);
}

#[test]
fn progress_for_a_foreign_task_is_not_found() {
    let store = RecordStore::new();
    let child = new_child(&store);
    let c = small_curriculum(&store, 15);
    let other = small_curriculum(&store, 30);
    let assignment = curriculum::assign(&store, child, c, None, date(2025, 3, 1)).unwrap();
    let foreign_task = store.tasks_for(other)[0].clone();

    let err = progress::submit_progress(
        &store,
        assignment.id,
        progress::ProgressSubmission {
            task_id: foreign_task.id,
            date: date(2025, 3, 1),
            status: ProgressStatus::NotDone,
            video_url: None,
            parent_notes: None,
        },
    )
    .unwrap_err();
    assert!(matches!(err, TherapyError::NotFound(_)));
}

#[test]
fn today_tasks_mark_completion_per_date() {
    let store = RecordStore::new();
    let child = new_child(&store);
    let c = small_curriculum(&store, 15);
    let assignment = curriculum::assign(&store, child, c, None, date(2025, 3, 1)).unwrap();
    let task = store.tasks_for(c)[0].clone();

    progress::submit_progress(
        &store,
        assignment.id,
        progress::ProgressSubmission {
            task_id: task.id,
            date: date(2025, 3, 1),
            status: ProgressStatus::DoneWithHelp,
            video_url: None,
            parent_notes: None,
        },
    )
    .unwrap();

    let today = progress::today_tasks(&store, assignment.id, date(2025, 3, 1)).unwrap();
    assert_eq!(today.len(), 1);
    assert!(today[0].is_completed);

    // Nothing was logged for the next date, so the task shows fresh again.
    let other_day = progress::today_tasks(&store, assignment.id, date(2025, 3, 2)).unwrap();
    assert!(other_day[0].progress.is_none());
    assert!(!other_day[0].is_completed);
}

#[test]
fn checkpoint_reviews_survive_completion() {
    let store = RecordStore::new();
    let child = new_child(&store);
    let c = small_curriculum(&store, 1);
    let assignment = curriculum::assign(&store, child, c, None, date(2025, 3, 1)).unwrap();
    let doctor = Uuid::new_v4();

    curriculum::advance_day(&store, assignment.id).unwrap();
    assert_eq!(
        store.assignment(assignment.id).unwrap().status,
        AssignmentStatus::Completed
    );

    // Reviews are still allowed on a completed assignment.
    let r = review::add_checkpoint_review(
        &store,
        assignment.id,
        doctor,
        review::ReviewDraft {
            review_period: 15,
            observations: "Good engagement with day-1 tasks.".to_string(),
            recommendations: "Continue with the introductory program.".to_string(),
            spectrum_identified: None,
        },
    )
    .unwrap();
    assert_eq!(review::reviews_for(&store, assignment.id).unwrap()[0].id, r.id);

    let err = review::add_checkpoint_review(
        &store,
        Uuid::new_v4(),
        doctor,
        review::ReviewDraft {
            review_period: 15,
            observations: "x".to_string(),
            recommendations: "y".to_string(),
            spectrum_identified: None,
        },
    )
    .unwrap_err();
    assert!(matches!(err, TherapyError::NotFound(_)));
}

#[test]
fn case_pipeline_runs_submit_accept_diagnose() {
    let store = RecordStore::new();
    seed::seed_demo_curricula(&store).unwrap();
    let child = new_child(&store);
    let doctor = Uuid::new_v4();

    intake::attach_video(
        &store,
        child,
        VideoKind::Playing,
        "https://example.com/v/1".to_string(),
        None,
    )
    .unwrap();

    // Submission auto-assigns the pre-assessment program, doctor-less.
    let (case, auto) = cases::submit_for_review(&store, child, date(2025, 3, 1)).unwrap();
    assert_eq!(case.status, CaseStatus::Pending);
    let auto = auto.expect("pre-assessment program should be auto-assigned");
    assert_eq!(auto.assigned_by, None);
    assert_eq!(
        store.curriculum(auto.curriculum_id).unwrap().kind,
        CurriculumKind::Assessment
    );

    assert_eq!(cases::pending_cases(&store).len(), 1);

    let accepted = cases::accept_case(&store, child, doctor).unwrap();
    assert_eq!(accepted.status, CaseStatus::Accepted);
    assert_eq!(accepted.assigned_doctor, Some(doctor));

    // Accepting twice conflicts.
    let err = cases::accept_case(&store, child, Uuid::new_v4()).unwrap_err();
    assert!(matches!(err, TherapyError::Conflict(_)));

    // Only the assigned doctor may issue the diagnosis.
    let stranger = Uuid::new_v4();
    let err = diagnosis::issue_report(
        &store,
        child,
        stranger,
        sample_diagnosis(false),
    )
    .unwrap_err();
    assert!(matches!(err, TherapyError::Conflict(_)));

    let report = diagnosis::issue_report(&store, child, doctor, sample_diagnosis(true)).unwrap();
    assert!(report.shared_with_parent);
    assert_eq!(store.case_for(child).unwrap().status, CaseStatus::Completed);

    // Parents only see shared reports.
    assert_eq!(diagnosis::reports_for(&store, child, false).unwrap().len(), 1);
    let unshared = diagnosis::issue_report(&store, child, doctor, sample_diagnosis(false)).unwrap();
    assert!(!unshared.shared_with_parent);
    assert_eq!(diagnosis::reports_for(&store, child, false).unwrap().len(), 1);
    assert_eq!(diagnosis::reports_for(&store, child, true).unwrap().len(), 2);
}

fn sample_diagnosis(shared: bool) -> diagnosis::DiagnosisDraft {
    diagnosis::DiagnosisDraft {
        has_autism: true,
        spectrum: Spectrum::Mild,
        detailed_report: "Consistent with a mild presentation.".to_string(),
        next_steps: "Assign the communication-focus program.".to_string(),
        shared_with_parent: shared,
    }
}

#[test]
fn only_the_issuing_doctor_can_toggle_report_sharing() {
    let store = RecordStore::new();
    let child = new_child(&store);
    let doctor = Uuid::new_v4();

    cases::submit_for_review(&store, child, date(2025, 3, 1)).unwrap();
    cases::accept_case(&store, child, doctor).unwrap();
    let report = diagnosis::issue_report(&store, child, doctor, sample_diagnosis(false)).unwrap();
    assert!(diagnosis::reports_for(&store, child, false).unwrap().is_empty());

    // Another doctor cannot flip sharing on a report they did not write.
    let err = diagnosis::toggle_report_share(&store, report.id, Uuid::new_v4()).unwrap_err();
    assert!(matches!(err, TherapyError::Conflict(_)));

    // The issuing doctor shares it after the fact, and the parent sees it.
    let shared = diagnosis::toggle_report_share(&store, report.id, doctor).unwrap();
    assert!(shared.shared_with_parent);
    assert_eq!(diagnosis::reports_for(&store, child, false).unwrap().len(), 1);

    // Toggling again hides it.
    let hidden = diagnosis::toggle_report_share(&store, report.id, doctor).unwrap();
    assert!(!hidden.shared_with_parent);
    assert!(diagnosis::reports_for(&store, child, false).unwrap().is_empty());

    let err = diagnosis::toggle_report_share(&store, Uuid::new_v4(), doctor).unwrap_err();
    assert!(matches!(err, TherapyError::NotFound(_)));
}

#[test]
fn removing_a_video_is_scoped_to_its_child() {
    let store = RecordStore::new();
    let child = new_child(&store);
    let other_child = new_child(&store);

    let video = intake::attach_video(
        &store,
        child,
        VideoKind::Eating,
        "https://example.com/v/2".to_string(),
        None,
    )
    .unwrap();

    // Another child's id does not reach this video.
    let err = intake::remove_video(&store, other_child, video.id).unwrap_err();
    assert!(matches!(err, TherapyError::NotFound(_)));
    assert_eq!(store.videos_for(child).len(), 1);

    intake::remove_video(&store, child, video.id).unwrap();
    assert!(store.videos_for(child).is_empty());

    // Gone means gone.
    let err = intake::remove_video(&store, child, video.id).unwrap_err();
    assert!(matches!(err, TherapyError::NotFound(_)));
}

#[test]
fn resubmitting_a_case_keeps_its_doctor() {
    let store = RecordStore::new();
    let child = new_child(&store);
    let doctor = Uuid::new_v4();

    cases::submit_for_review(&store, child, date(2025, 3, 1)).unwrap();
    let accepted = cases::accept_case(&store, child, doctor).unwrap();

    // The parent resubmits; the case goes back to pending but stays on the
    // doctor's list.
    let (case, _) = cases::submit_for_review(&store, child, date(2025, 3, 5)).unwrap();
    assert_eq!(case.status, CaseStatus::Pending);
    assert_eq!(case.assigned_doctor, Some(doctor));
    assert_eq!(case.reviewed_at, accepted.reviewed_at);
    assert_eq!(cases::cases_for_doctor(&store, doctor).len(), 1);
}

#[test]
fn resubmitting_a_case_keeps_the_existing_assignment() {
    let store = RecordStore::new();
    seed::seed_demo_curricula(&store).unwrap();
    let child = new_child(&store);

    let (_, first) = cases::submit_for_review(&store, child, date(2025, 3, 1)).unwrap();
    let first = first.unwrap();

    // A second submission finds the active assignment and assigns nothing new.
    let (case, second) = cases::submit_for_review(&store, child, date(2025, 3, 2)).unwrap();
    assert_eq!(case.status, CaseStatus::Pending);
    assert!(second.is_none());
    assert_eq!(store.active_assignment_for(child).unwrap().id, first.id);
}
