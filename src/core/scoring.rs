use crate::models::{Member, ScoreBreakdown, ScoringPoints};
use crate::core::signals::{
    has_same_birth_country, has_same_birth_period_and_place, has_same_last_name,
    has_same_nationality, shared_relatives,
};

/// Highest score a pair of members can reach
pub const MAX_SCORE: u8 = 100;

/// Calculate a match score (0-100) between a new member and an existing one
///
/// Scoring rules (all additive, then capped at 100):
/// ```text
///   +40  same last name AND at least one shared relative
///   +30  born within 5 years in the same city
///   +15  same nationality AND same birth country
///   +50  at least one shared relative
///   +10  same last name
///   +10  same nationality
/// ```
///
/// Returns the score along with the ids of the shared relatives.
pub fn calculate_match_score(
    new_member: &Member,
    existing: &Member,
    points: &ScoringPoints,
) -> (u8, Vec<String>) {
    let breakdown = score_breakdown(new_member, existing, points);
    (breakdown.score, breakdown.shared_relatives)
}

/// Evaluate every scoring signal for a pair and report how the score was reached
pub fn score_breakdown(
    new_member: &Member,
    existing: &Member,
    points: &ScoringPoints,
) -> ScoreBreakdown {
    let same_last_name = has_same_last_name(new_member, existing);
    let same_nationality = has_same_nationality(new_member, existing);
    let shared = shared_relatives(new_member, existing);
    let same_birth_period_and_place = has_same_birth_period_and_place(new_member, existing);
    let same_birth_country = has_same_birth_country(new_member, existing);
    let has_shared_relatives = !shared.is_empty();

    let mut total = 0u32;

    if same_last_name && has_shared_relatives {
        total = total.saturating_add(points.surname_and_relatives);
    }
    if same_birth_period_and_place {
        total = total.saturating_add(points.birth_period_and_place);
    }
    if same_nationality && same_birth_country {
        total = total.saturating_add(points.nationality_and_country);
    }
    if has_shared_relatives {
        total = total.saturating_add(points.shared_relatives);
    }
    if same_last_name {
        total = total.saturating_add(points.same_last_name);
    }
    if same_nationality {
        total = total.saturating_add(points.same_nationality);
    }

    ScoreBreakdown {
        same_last_name,
        same_nationality,
        same_birth_period_and_place,
        same_birth_country,
        shared_relatives: shared,
        raw_total: total,
        score: cap_score(total),
    }
}

#[inline]
fn cap_score(total: u32) -> u8 {
    total.min(MAX_SCORE as u32) as u8
}
