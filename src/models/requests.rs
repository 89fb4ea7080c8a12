use serde::{Deserialize, Serialize};
use validator::Validate;
use crate::models::domain::Member;

/// Request to rank suggestions for a newly added member
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct SuggestRequest {
    #[validate(nested)]
    pub member: Member,
    #[serde(default)]
    pub members: Vec<Member>,
    #[validate(range(min = 1))]
    #[serde(default)]
    pub limit: Option<u16>,
}

/// Request to classify one pair of members
///
/// Either side may be omitted, in which case the relation is `unknown`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassifyRequest {
    #[serde(default)]
    pub member: Option<Member>,
    #[serde(default)]
    pub candidate: Option<Member>,
}

/// Request to score one pair of members
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ScoreRequest {
    #[validate(nested)]
    pub member: Member,
    #[validate(nested)]
    pub candidate: Member,
}
