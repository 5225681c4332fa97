use std::path::Path;

use anyhow::Context;
use serde::Deserialize;

use crate::models::CandidateRecord;

#[derive(Deserialize)]
struct CsvRow {
    id: String,
    name: Option<String>,
    skills: Option<String>,
}

/// Reads a candidate pool from a CSV with `id,name,skills` headers.
/// `skills` is `;`-separated; an empty cell means the candidate has no skill list.
pub fn load_candidates_csv(csv_path: &Path) -> anyhow::Result<Vec<CandidateRecord>> {
    let mut reader = csv::Reader::from_path(csv_path)
        .with_context(|| format!("failed to open {}", csv_path.display()))?;
    let mut candidates = Vec::new();

    for (index, result) in reader.deserialize::<CsvRow>().enumerate() {
        let row = result.with_context(|| format!("invalid candidate row {}", index + 1))?;
        let id = row.id.trim().to_string();
        anyhow::ensure!(!id.is_empty(), "candidate row {} has an empty id", index + 1);

        candidates.push(CandidateRecord {
            id,
            name: row
                .name
                .map(|name| name.trim().to_string())
                .filter(|name| !name.is_empty()),
            skills: row.skills.map(|raw| split_list(&raw, ';')),
        });
    }

    tracing::debug!(path = %csv_path.display(), count = candidates.len(), "loaded candidates");
    Ok(candidates)
}

/// Comma-separated skills from a CLI argument. Order and duplicates are kept.
pub fn parse_skill_list(raw: &str) -> Vec<String> {
    split_list(raw, ',')
}

fn split_list(raw: &str, separator: char) -> Vec<String> {
    raw.split(separator)
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(str::to_string)
        .collect()
}
