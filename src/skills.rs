//! Skill string comparison.
//!
//! Two skills are considered the same when their normalized forms are equal
//! or one contains the other. Containment is deliberately loose: "React"
//! satisfies "React Native" and "Java" satisfies "JavaScript". The relation
//! is symmetric but not transitive.

/// Reference list offered by autocomplete inputs.
pub const PREDEFINED_SKILLS: &[&str] = &[
    "Accounting",
    "Asset Management",
    "AWS",
    "Bloomberg Terminal",
    "Business Development",
    "C#",
    "Compliance",
    "CPA",
    "Credit Analysis",
    "Data Analysis",
    "Docker",
    "Due Diligence",
    "Equity Research",
    "Excel",
    "Financial Modeling",
    "FP&A",
    "Go",
    "Investment Banking",
    "Java",
    "JavaScript",
    "Kubernetes",
    "M&A",
    "Node.js",
    "Portfolio Management",
    "Private Equity",
    "Project Management",
    "Python",
    "React",
    "Risk Management",
    "Salesforce",
    "SQL",
    "Tableau",
    "TypeScript",
    "Valuation",
];

/// Reference list of candidate/job tags offered by autocomplete inputs.
pub const PREDEFINED_TAGS: &[&str] = &[
    "Contract",
    "Contract to Hire",
    "Executive",
    "Full Time",
    "Hot Candidate",
    "Hybrid",
    "Onsite",
    "Part Time",
    "Passive",
    "Relocation",
    "Remote",
    "Urgent",
];

/// Lower-cases, trims, then strips `.`, `-` and `_`.
pub fn normalize(skill: &str) -> String {
    skill
        .to_lowercase()
        .trim()
        .chars()
        .filter(|c| !matches!(c, '.' | '-' | '_'))
        .collect()
}

pub fn skills_match(a: &str, b: &str) -> bool {
    let a = normalize(a);
    let b = normalize(b);
    a == b || a.contains(&b) || b.contains(&a)
}

pub fn is_skill_matched(candidate_skill: &str, required_skills: &[String]) -> bool {
    required_skills
        .iter()
        .any(|required| skills_match(candidate_skill, required))
}

/// Autocomplete over [`PREDEFINED_SKILLS`]: prefix hits first, then
/// substring hits, each in list order.
pub fn suggest_skills(query: &str, limit: usize) -> Vec<&'static str> {
    let needle = normalize(query);
    if needle.is_empty() {
        return Vec::new();
    }

    let (prefix, infix): (Vec<&'static str>, Vec<&'static str>) = PREDEFINED_SKILLS
        .iter()
        .copied()
        .filter(|skill| normalize(skill).contains(&needle))
        .partition(|skill| normalize(skill).starts_with(&needle));

    prefix.into_iter().chain(infix).take(limit).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn owned(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    #[test]
    fn normalize_strips_case_whitespace_and_separators() {
        assert_eq!(normalize("  Node.js "), "nodejs");
        assert_eq!(normalize("CI_CD-Pipelines"), "cicdpipelines");
        assert_eq!(normalize("C#"), "c#");
        assert_eq!(normalize(""), "");
    }

    #[test]
    fn normalize_trims_before_stripping_separators() {
        assert_eq!(normalize(" - React"), " react");
    }

    #[test]
    fn exact_match_after_normalization() {
        assert!(skills_match("node.js", "NodeJS"));
        assert!(skills_match("react", "React"));
        assert!(!skills_match("Python", "Ruby"));
    }

    #[test]
    fn substring_match_is_bidirectional() {
        assert!(skills_match("React Native", "React"));
        assert!(skills_match("React", "React Native"));
    }

    #[test]
    fn substring_policy_produces_known_false_positive() {
        assert!(skills_match("Java", "JavaScript"));
        assert!(skills_match("Go", "Google Analytics"));
    }

    #[test]
    fn empty_strings_match_each_other_and_everything() {
        assert!(skills_match("", ""));
        assert!(skills_match("", "SQL"));
    }

    #[test]
    fn is_skill_matched_checks_any_requirement() {
        let required = owned(&["SQL", "Financial Modeling"]);
        assert!(is_skill_matched("FINANCIAL MODELING.", &required));
        assert!(!is_skill_matched("financial-modeling", &required));
        assert!(!is_skill_matched("Tableau", &required));
        assert!(!is_skill_matched("Tableau", &[]));
    }

    #[test]
    fn suggestions_prefer_prefix_hits() {
        let hits = suggest_skills("java", 5);
        assert_eq!(hits, vec!["Java", "JavaScript"]);

        let hits = suggest_skills("script", 5);
        assert_eq!(hits, vec!["JavaScript", "TypeScript"]);

        let hits = suggest_skills("man", 10);
        assert_eq!(hits[0], "Asset Management");
        assert!(hits.contains(&"Risk Management"));
    }

    #[test]
    fn suggestions_respect_limit_and_blank_query() {
        assert_eq!(suggest_skills("a", 3).len(), 3);
        assert!(suggest_skills("   ", 5).is_empty());
    }

    #[test]
    fn predefined_lists_have_no_duplicates() {
        for list in [PREDEFINED_SKILLS, PREDEFINED_TAGS] {
            let mut seen = std::collections::HashSet::new();
            for item in list {
                assert!(seen.insert(normalize(item)), "duplicate entry {item}");
            }
        }
    }
}
