//! Kin Algo - Relationship suggestion engine for family trees
//!
//! This library scores and classifies the existing members of a family tree
//! against a newly added member and ranks the probable relatives. Everything
//! in `core` is pure and works on snapshots supplied by the caller.

pub mod config;
pub mod core;
pub mod error;
pub mod models;
pub mod routes;

// Re-export commonly used types
pub use crate::core::{Suggester, calculate_match_score, infer_relation, classify_relation};
pub use crate::models::{Member, BirthPlace, Relation, MatchResult, ScoringPoints, ScoreBreakdown};
