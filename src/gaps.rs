use std::collections::{HashMap, HashSet};

use crate::matching::{calculate_skill_match, get_match_label, percentage};
use crate::models::{CandidateRecord, MatchLabel, PoolHealth, SkillGap, SkillGapReport};

const TOP_GAPS_CONSIDERED: usize = 3;
const SOURCING_GAP_PERCENTAGE: u32 = 50;
const MIN_QUALIFIED_SHARE: f64 = 0.3;

pub fn analyze_skill_gaps(candidates: &[CandidateRecord], required_skills: &[String]) -> SkillGapReport {
    let mut pool_health = PoolHealth::default();
    // Insertion order doubles as the tie-break order for the final sort.
    let mut missing_counts: Vec<(String, usize)> = Vec::new();
    let mut positions: HashMap<String, usize> = HashMap::new();

    for candidate in candidates {
        let result = calculate_skill_match(candidate.skills(), required_skills);

        let mut counted: HashSet<&str> = HashSet::new();
        for skill in &result.missing_skills {
            if !counted.insert(skill.as_str()) {
                continue;
            }
            match positions.get(skill) {
                Some(&index) => missing_counts[index].1 += 1,
                None => {
                    positions.insert(skill.clone(), missing_counts.len());
                    missing_counts.push((skill.clone(), 1));
                }
            }
        }

        let id = candidate.id.clone();
        match get_match_label(result.match_percentage) {
            MatchLabel::Excellent => pool_health.excellent.push(id),
            MatchLabel::Good => pool_health.good.push(id),
            MatchLabel::Fair => pool_health.fair.push(id),
            MatchLabel::Low => pool_health.low.push(id),
        }
    }

    let total_candidates = candidates.len();
    let mut skill_gaps: Vec<SkillGap> = missing_counts
        .into_iter()
        .map(|(skill, missing_count)| SkillGap {
            skill,
            missing_count,
            total_candidates,
            percentage: percentage(missing_count, total_candidates),
        })
        .collect();
    skill_gaps.sort_by(|a, b| b.missing_count.cmp(&a.missing_count));

    let recommendations = build_recommendations(&pool_health, &skill_gaps, total_candidates);

    SkillGapReport {
        skill_gaps,
        pool_health,
        total_candidates,
        recommendations,
    }
}

/// Recommendations in fixed order: ready-to-review matches, sourcing
/// targets, thin pool warning. Falls back to a single healthy-pool note.
pub fn build_recommendations(
    pool_health: &PoolHealth,
    skill_gaps: &[SkillGap],
    total_candidates: usize,
) -> Vec<String> {
    let mut recommendations = Vec::new();

    let excellent = pool_health.excellent.len();
    if excellent > 0 {
        let (subject, matches) = if excellent == 1 {
            ("candidate is an", "match")
        } else {
            ("candidates are", "matches")
        };
        recommendations.push(format!(
            "{excellent} {subject} excellent {matches} and ready for immediate review."
        ));
    }

    let critical: Vec<&str> = skill_gaps
        .iter()
        .take(TOP_GAPS_CONSIDERED)
        .filter(|gap| gap.percentage > SOURCING_GAP_PERCENTAGE)
        .map(|gap| gap.skill.as_str())
        .collect();
    if !critical.is_empty() {
        recommendations.push(format!(
            "Consider sourcing for {}; most of the pool is missing these skills.",
            critical.join(", ")
        ));
    }

    if total_candidates > 0 {
        let qualified = pool_health.excellent.len() + pool_health.good.len();
        if (qualified as f64 / total_candidates as f64) < MIN_QUALIFIED_SHARE {
            recommendations.push(
                "Fewer than 30% of candidates are good matches. Consider expanding the search."
                    .to_string(),
            );
        }
    }

    if recommendations.is_empty() {
        recommendations.push("Candidate pool looks healthy for this role.".to_string());
    }

    recommendations
}
