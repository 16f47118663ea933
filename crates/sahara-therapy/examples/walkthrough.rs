//! End-to-end walkthrough of the platform workflow against a fresh store:
//! register a child, screen, submit the case, accept it as a doctor, run the
//! curriculum for a few days, review, and issue a diagnosis.
//!
//! Run with: cargo run -p sahara-therapy --example walkthrough

use jiff::civil::date;
use uuid::Uuid;

use sahara_core::models::child::Gender;
use sahara_core::models::report::Spectrum;
use sahara_screening::mchat::AnswerSheet;
use sahara_store::RecordStore;
use sahara_therapy::{cases, curriculum, diagnosis, intake, progress, review, seed, TherapyError};

fn main() -> Result<(), TherapyError> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let store = RecordStore::new();
    seed::seed_demo_curricula(&store)?;

    let parent = Uuid::new_v4();
    let doctor = Uuid::new_v4();

    let child = intake::register_child(
        &store,
        intake::NewChild {
            parent_id: parent,
            full_name: "Aarav Shrestha".to_string(),
            date_of_birth: date(2023, 6, 12),
            age_years: 2,
            age_months: 2,
            gender: Gender::Male,
        },
    )?;

    // M-CHAT: mostly typical answers with a few concerning ones.
    let mut answers = [true; 20];
    for n in [2u8, 5, 12] {
        answers[n as usize - 1] = false;
    }
    answers[9] = false; // q10: does not respond to name
    answers[13] = false; // q14: poor eye contact
    answers[7] = false; // q8: little interest in other children
    let screening = intake::submit_screening(&store, child.id, &AnswerSheet::new(answers))?;
    println!(
        "screening: score {} risk {:?}",
        screening.total_score, screening.risk_level
    );

    intake::submit_medical_history(
        &store,
        child.id,
        intake::MedicalHistoryDraft {
            family_autism_history: true,
            ..Default::default()
        },
    )?;

    let (_, auto) = cases::submit_for_review(&store, child.id, date(2025, 3, 1))?;
    let assignment = auto.expect("pre-assessment program seeded");
    println!(
        "auto-assigned pre-assessment program, day {}",
        assignment.current_day
    );

    cases::accept_case(&store, child.id, doctor)?;

    // The parent logs day 1 and moves on.
    for item in progress::today_tasks(&store, assignment.id, date(2025, 3, 1))? {
        progress::submit_progress(
            &store,
            assignment.id,
            progress::ProgressSubmission {
                task_id: item.task.id,
                date: date(2025, 3, 1),
                status: sahara_core::models::assignment::ProgressStatus::DoneWithHelp,
                video_url: None,
                parent_notes: None,
            },
        )?;
    }
    curriculum::advance_day(&store, assignment.id)?;

    review::add_checkpoint_review(
        &store,
        assignment.id,
        doctor,
        review::ReviewDraft {
            review_period: 15,
            observations: "Engages with prompting; limited joint attention.".to_string(),
            recommendations: "Move to the 30-day communication program.".to_string(),
            spectrum_identified: Some("mild".to_string()),
        },
    )?;

    let report = diagnosis::issue_report(
        &store,
        child.id,
        doctor,
        diagnosis::DiagnosisDraft {
            has_autism: true,
            spectrum: Spectrum::Mild,
            detailed_report: "Findings consistent with a mild presentation.".to_string(),
            next_steps: "Specialized communication curriculum.".to_string(),
            shared_with_parent: true,
        },
    )?;
    println!("diagnosis issued: spectrum {:?}", report.spectrum);

    let stats = progress::progress_stats(&store, assignment.id)?;
    println!(
        "progress: {}/{} done ({}%)",
        stats.done, stats.total_submitted, stats.completion_rate
    );
    Ok(())
}
