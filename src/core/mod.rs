// Core algorithm exports
pub mod matcher;
pub mod relation;
pub mod scoring;
pub mod signals;

pub use matcher::{Suggester, DEFAULT_MIN_SCORE};
pub use relation::{infer_relation, classify_relation};
pub use scoring::{calculate_match_score, score_breakdown, MAX_SCORE};
pub use signals::{has_same_last_name, has_same_nationality, shared_relatives, has_same_birth_period_and_place, has_same_birth_country};
