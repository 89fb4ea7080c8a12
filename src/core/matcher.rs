use crate::models::{Member, MatchResult, ScoringPoints};
use crate::core::{relation::classify_relation, scoring::calculate_match_score};

/// Scores at or below this value are not worth suggesting
pub const DEFAULT_MIN_SCORE: u8 = 30;

/// Ranks the existing members of a tree as relatives of a new member
///
/// # Pipeline Stages
/// 1. Exclude the new member itself
/// 2. Score and classify every remaining candidate
/// 3. Drop candidates scoring at or below the threshold
/// 4. Stable sort by score, highest first
#[derive(Debug, Clone)]
pub struct Suggester {
    points: ScoringPoints,
    min_score: u8,
}

impl Suggester {
    pub fn new(points: ScoringPoints, min_score: u8) -> Self {
        Self { points, min_score }
    }

    pub fn with_defaults() -> Self {
        Self::new(ScoringPoints::default(), DEFAULT_MIN_SCORE)
    }

    pub fn points(&self) -> &ScoringPoints {
        &self.points
    }

    pub fn min_score(&self) -> u8 {
        self.min_score
    }

    /// Suggest probable relatives of `new_member` among `members`
    ///
    /// `members` must already be scoped to one tree. The whole ranked list is
    /// returned; slicing is left to the caller. Candidates with equal scores
    /// keep their input order.
    pub fn suggest(&self, new_member: &Member, members: &[Member]) -> Vec<MatchResult> {
        let mut suggestions: Vec<MatchResult> = members
            .iter()
            .filter(|candidate| candidate.id != new_member.id)
            .filter_map(|candidate| {
                let (score, _) = calculate_match_score(new_member, candidate, &self.points);
                let relation = classify_relation(new_member, candidate);

                tracing::trace!(
                    "Candidate {} for {}: score={}, relation={:?}",
                    candidate.id,
                    new_member.id,
                    score,
                    relation
                );

                if score > self.min_score {
                    Some(MatchResult::new(candidate.clone(), score, relation))
                } else {
                    None
                }
            })
            .collect();

        // sort_by is stable, ties keep candidate order
        suggestions.sort_by(|a, b| b.score.cmp(&a.score));

        tracing::debug!(
            "Kept {} of {} candidates for member {}",
            suggestions.len(),
            members.len(),
            new_member.id
        );

        suggestions
    }
}

impl Default for Suggester {
    fn default() -> Self {
        Self::with_defaults()
    }
}
