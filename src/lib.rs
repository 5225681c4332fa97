//! Candidate/job skill matching and candidate-pool gap analysis.

pub mod config;
pub mod db;
pub mod gaps;
pub mod input;
pub mod matching;
pub mod models;
pub mod report;
pub mod skills;

pub use gaps::analyze_skill_gaps;
pub use matching::{calculate_skill_match, get_match_label, rank_candidates};
pub use models::{
    CandidateRecord, JobOrder, MatchLabel, MatchResult, PoolHealth, RankedCandidate, SkillGap,
    SkillGapReport,
};
pub use skills::{is_skill_matched, normalize, skills_match};
