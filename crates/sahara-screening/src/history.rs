//! Specialist auto-flag from the medical-history background form.

use sahara_core::models::medical_history::MedicalHistory;

/// True when any of the four A1–A4 flags is set. The write path overwrites
/// `history.requires_specialist` with this on every save; the stored value is
/// never trusted as an input.
pub fn requires_specialist(history: &MedicalHistory) -> bool {
    history.pregnancy_infection
        || history.birth_complications
        || history.brain_injury_first_year
        || history.family_autism_history
}

#[cfg(test)]
mod tests {
    use super::*;
    use jiff::Timestamp;
    use uuid::Uuid;

    fn history(flags: [bool; 4]) -> MedicalHistory {
        MedicalHistory {
            id: Uuid::new_v4(),
            child_id: Uuid::new_v4(),
            pregnancy_infection: flags[0],
            pregnancy_infection_desc: None,
            birth_complications: flags[1],
            birth_complications_desc: None,
            brain_injury_first_year: flags[2],
            brain_injury_desc: None,
            family_autism_history: flags[3],
            requires_specialist: false,
            created_at: Timestamp::UNIX_EPOCH,
            updated_at: Timestamp::UNIX_EPOCH,
        }
    }

    #[test]
    fn all_clear_means_no_flag() {
        assert!(!requires_specialist(&history([false; 4])));
    }

    #[test]
    fn any_single_flag_triggers() {
        for i in 0..4 {
            let mut flags = [false; 4];
            flags[i] = true;
            assert!(requires_specialist(&history(flags)), "flag {i}");
        }
    }

    #[test]
    fn stored_value_is_ignored() {
        let mut h = history([false; 4]);
        h.requires_specialist = true;
        assert!(!requires_specialist(&h));
    }
}
