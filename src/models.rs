use std::fmt;

use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CandidateRecord {
    pub id: String,
    pub name: Option<String>,
    pub skills: Option<Vec<String>>,
}

impl CandidateRecord {
    pub fn skills(&self) -> &[String] {
        self.skills.as_deref().unwrap_or(&[])
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JobOrder {
    pub id: String,
    pub title: String,
    pub required_skills: Option<Vec<String>>,
}

impl JobOrder {
    pub fn required_skills(&self) -> &[String] {
        self.required_skills.as_deref().unwrap_or(&[])
    }
}

/// Outcome of comparing one candidate against one job's required skills.
///
/// `matched_skills` and `missing_skills` partition the required skills and
/// keep their original order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchResult {
    pub match_percentage: u32,
    pub matched_skills: Vec<String>,
    pub missing_skills: Vec<String>,
    pub extra_skills: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum MatchLabel {
    Excellent,
    Good,
    Fair,
    Low,
}

impl MatchLabel {
    pub fn as_str(self) -> &'static str {
        match self {
            MatchLabel::Excellent => "Excellent",
            MatchLabel::Good => "Good",
            MatchLabel::Fair => "Fair",
            MatchLabel::Low => "Low",
        }
    }
}

impl fmt::Display for MatchLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RankedCandidate {
    pub id: String,
    pub name: Option<String>,
    pub label: MatchLabel,
    pub result: MatchResult,
}

impl RankedCandidate {
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or(&self.id)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SkillGap {
    pub skill: String,
    pub missing_count: usize,
    pub total_candidates: usize,
    pub percentage: u32,
}

/// Candidate ids grouped by match percentage (80/60/40 cut-offs).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PoolHealth {
    pub excellent: Vec<String>,
    pub good: Vec<String>,
    pub fair: Vec<String>,
    pub low: Vec<String>,
}

impl PoolHealth {
    pub fn bucket(&self, label: MatchLabel) -> &[String] {
        match label {
            MatchLabel::Excellent => &self.excellent,
            MatchLabel::Good => &self.good,
            MatchLabel::Fair => &self.fair,
            MatchLabel::Low => &self.low,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SkillGapReport {
    pub skill_gaps: Vec<SkillGap>,
    pub pool_health: PoolHealth,
    pub total_candidates: usize,
    pub recommendations: Vec<String>,
}
