// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{Member, BirthPlace, Relation, MatchResult, ScoringPoints, ScoreBreakdown, normalize_nationality, parse_birth_date};
pub use requests::{SuggestRequest, ClassifyRequest, ScoreRequest};
pub use responses::{SuggestResponse, ClassifyResponse, ScoreResponse, HealthResponse, ErrorResponse};
