//! M-CHAT-R/F: 20-item autism screening questionnaire for toddlers
//! (16–30 months). Answers are YES/NO; each concerning answer scores 1 point.
//!
//! Scoring rules:
//! - Questions 2, 5, and 12 are reverse-scored: YES is concerning.
//! - Every other question: NO is concerning.
//! - Risk tiers: 0–2 low, 3–7 medium, 8–20 high.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use sahara_core::models::screening::RiskLevel;

use crate::error::ScreeningError;

pub const QUESTION_COUNT: usize = 20;

/// Questions where YES (true) is the concerning answer.
pub const REVERSE_SCORED: [u8; 3] = [2, 5, 12];

/// One questionnaire item, for rendering in frontends and reports.
#[derive(Debug, Clone, Serialize, TS)]
#[ts(export)]
pub struct Question {
    /// 1..=20.
    pub number: u8,
    pub prompt: &'static str,
    pub reverse_scored: bool,
}

/// The 20 M-CHAT-R/F items in order.
pub fn questions() -> &'static [Question] {
    static QUESTIONS: std::sync::LazyLock<Vec<Question>> = std::sync::LazyLock::new(|| {
        let prompts = [
            "Points & looks at what you point to",
            "Wondered if deaf",
            "Pretend play",
            "Likes climbing",
            "Unusual finger movements",
            "Points to ask for something",
            "Points to show something",
            "Interested in other children",
            "Shows things to share",
            "Responds to name",
            "Smiles back",
            "Upset by everyday noises",
            "Walks",
            "Eye contact",
            "Copies actions",
            "Follows gaze",
            "Seeks attention",
            "Understands commands",
            "Checks reactions",
            "Likes movement activities",
        ];

        prompts
            .iter()
            .enumerate()
            .map(|(i, prompt)| {
                let number = (i + 1) as u8;
                Question {
                    number,
                    prompt,
                    reverse_scored: REVERSE_SCORED.contains(&number),
                }
            })
            .collect()
    });
    &QUESTIONS
}

/// A complete set of 20 answers, true = YES.
///
/// Construction validates completeness, so scoring can never run on a partial
/// sheet. Partial scoring is not permitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnswerSheet([bool; QUESTION_COUNT]);

impl AnswerSheet {
    pub fn new(answers: [bool; QUESTION_COUNT]) -> Self {
        Self(answers)
    }

    /// Build a sheet from (question number, answer) pairs as submitted by the
    /// questionnaire form. Rejects out-of-range numbers, duplicates, and —
    /// naming the missing question numbers — incomplete sheets.
    pub fn from_pairs(
        pairs: impl IntoIterator<Item = (u8, bool)>,
    ) -> Result<Self, ScreeningError> {
        let mut answers = [None; QUESTION_COUNT];
        for (number, answer) in pairs {
            if number < 1 || number as usize > QUESTION_COUNT {
                return Err(ScreeningError::QuestionOutOfRange(number));
            }
            let slot = &mut answers[number as usize - 1];
            if slot.is_some() {
                return Err(ScreeningError::DuplicateAnswer(number));
            }
            *slot = Some(answer);
        }

        let missing: Vec<u8> = answers
            .iter()
            .enumerate()
            .filter(|(_, a)| a.is_none())
            .map(|(i, _)| (i + 1) as u8)
            .collect();
        if !missing.is_empty() {
            return Err(ScreeningError::Incomplete { missing });
        }

        Ok(Self(answers.map(|a| a.unwrap_or_default())))
    }

    /// The answer to a question, by its 1-based number.
    pub fn answer(&self, number: u8) -> Option<bool> {
        (1..=QUESTION_COUNT as u8)
            .contains(&number)
            .then(|| self.0[number as usize - 1])
    }

    pub fn as_array(&self) -> [bool; QUESTION_COUNT] {
        self.0
    }
}

impl From<[bool; QUESTION_COUNT]> for AnswerSheet {
    fn from(answers: [bool; QUESTION_COUNT]) -> Self {
        Self(answers)
    }
}

/// The derived result of scoring a sheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ScreeningOutcome {
    pub total_score: u8,
    pub risk_level: RiskLevel,
}

/// Score a complete sheet: one point per concerning answer.
pub fn score(sheet: &AnswerSheet) -> ScreeningOutcome {
    let total_score = sheet
        .as_array()
        .iter()
        .enumerate()
        .filter(|&(i, &answer)| {
            let number = (i + 1) as u8;
            if REVERSE_SCORED.contains(&number) {
                answer
            } else {
                !answer
            }
        })
        .count() as u8;

    ScreeningOutcome {
        total_score,
        risk_level: risk_level(total_score),
    }
}

/// Map a total score to its risk tier.
pub fn risk_level(total_score: u8) -> RiskLevel {
    match total_score {
        0..=2 => RiskLevel::Low,
        3..=7 => RiskLevel::Medium,
        _ => RiskLevel::High,
    }
}
