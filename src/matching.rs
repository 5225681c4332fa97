use std::collections::HashSet;

use crate::models::{CandidateRecord, MatchLabel, MatchResult, RankedCandidate};
use crate::skills::skills_match;

/// Scores `candidate_skills` against `required_skills`.
///
/// Each required skill is satisfied by the first candidate skill that
/// [`skills_match`]es it. Consumption is tracked by value: once "React" is
/// consumed, every "React" entry in the candidate list is dropped from
/// `extra_skills`.
pub fn calculate_skill_match(candidate_skills: &[String], required_skills: &[String]) -> MatchResult {
    if required_skills.is_empty() {
        return MatchResult {
            match_percentage: 0,
            matched_skills: vec![],
            missing_skills: vec![],
            extra_skills: candidate_skills.to_vec(),
        };
    }

    let mut matched_skills = Vec::new();
    let mut missing_skills = Vec::new();
    let mut consumed: HashSet<&str> = HashSet::new();

    for required in required_skills {
        let hit = candidate_skills
            .iter()
            .find(|candidate| skills_match(candidate, required));

        match hit {
            Some(candidate) => {
                matched_skills.push(required.clone());
                consumed.insert(candidate.as_str());
            }
            None => missing_skills.push(required.clone()),
        }
    }

    let extra_skills = candidate_skills
        .iter()
        .filter(|skill| !consumed.contains(skill.as_str()))
        .cloned()
        .collect();

    MatchResult {
        match_percentage: percentage(matched_skills.len(), required_skills.len()),
        matched_skills,
        missing_skills,
        extra_skills,
    }
}

pub fn get_match_label(percentage: u32) -> MatchLabel {
    if percentage >= 80 {
        MatchLabel::Excellent
    } else if percentage >= 60 {
        MatchLabel::Good
    } else if percentage >= 40 {
        MatchLabel::Fair
    } else {
        MatchLabel::Low
    }
}

/// Matches every candidate against one requirement list, best first.
/// Equal percentages keep input order.
pub fn rank_candidates(
    candidates: &[CandidateRecord],
    required_skills: &[String],
) -> Vec<RankedCandidate> {
    let mut ranked: Vec<RankedCandidate> = candidates
        .iter()
        .map(|candidate| {
            let result = calculate_skill_match(candidate.skills(), required_skills);
            RankedCandidate {
                id: candidate.id.clone(),
                name: candidate.name.clone(),
                label: get_match_label(result.match_percentage),
                result,
            }
        })
        .collect();

    ranked.sort_by(|a, b| b.result.match_percentage.cmp(&a.result.match_percentage));
    ranked
}

/// `part / whole` as a whole-number percentage, halves rounded up.
/// Zero when `whole` is zero.
pub(crate) fn percentage(part: usize, whole: usize) -> u32 {
    if whole == 0 {
        return 0;
    }
    ((part as f64 / whole as f64) * 100.0).round() as u32
}
