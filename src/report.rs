use std::fmt::Write;

use chrono::NaiveDate;

use crate::models::{MatchLabel, RankedCandidate, SkillGapReport};

pub fn build_report(
    job_label: Option<&str>,
    generated_on: NaiveDate,
    report: &SkillGapReport,
    ranked: &[RankedCandidate],
    top: usize,
) -> String {
    let mut output = String::new();
    let job_label = job_label.unwrap_or("ad-hoc requirements");

    let _ = writeln!(output, "# Skill Gap Report");
    let _ = writeln!(
        output,
        "Generated for {} on {} ({} candidates)",
        job_label, generated_on, report.total_candidates
    );
    let _ = writeln!(output);
    let _ = writeln!(output, "## Pool Health");

    for label in [
        MatchLabel::Excellent,
        MatchLabel::Good,
        MatchLabel::Fair,
        MatchLabel::Low,
    ] {
        let _ = writeln!(
            output,
            "- {}: {}",
            label,
            report.pool_health.bucket(label).len()
        );
    }

    let _ = writeln!(output);
    let _ = writeln!(output, "## Skill Gaps");

    if report.skill_gaps.is_empty() {
        let _ = writeln!(output, "No required skills are missing from the pool.");
    } else {
        for gap in &report.skill_gaps {
            let _ = writeln!(
                output,
                "- {}: missing for {} of {} candidates ({}%)",
                gap.skill, gap.missing_count, gap.total_candidates, gap.percentage
            );
        }
    }

    let _ = writeln!(output);
    let _ = writeln!(output, "## Top Matches");

    if ranked.is_empty() {
        let _ = writeln!(output, "No candidates in this pool.");
    } else {
        for candidate in ranked.iter().take(top) {
            let _ = write!(
                output,
                "- {} ({}) {}% {}",
                candidate.display_name(),
                candidate.id,
                candidate.result.match_percentage,
                candidate.label
            );
            if !candidate.result.missing_skills.is_empty() {
                let _ = write!(
                    output,
                    ", missing {}",
                    candidate.result.missing_skills.join(", ")
                );
            }
            let _ = writeln!(output);
        }
    }

    let _ = writeln!(output);
    let _ = writeln!(output, "## Recommendations");

    for recommendation in &report.recommendations {
        let _ = writeln!(output, "- {recommendation}");
    }

    output
}
