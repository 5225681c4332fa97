use anyhow::Context;
use sqlx::{PgPool, Row};
use uuid::Uuid;

use crate::models::{CandidateRecord, JobOrder};

const CANDIDATES_QUERY: &str = r#"
    SELECT id, first_name, last_name, skills
    FROM candidates
    ORDER BY id
    LIMIT $1
"#;

pub async fn fetch_job_order(pool: &PgPool, job_id: Uuid) -> anyhow::Result<JobOrder> {
    let row = sqlx::query(
        "SELECT id, title, required_skills FROM job_orders WHERE id = $1",
    )
    .bind(job_id)
    .fetch_optional(pool)
    .await
    .context("failed to query job_orders")?
    .with_context(|| format!("job order {job_id} not found"))?;

    let id: Uuid = row.get("id");
    Ok(JobOrder {
        id: id.to_string(),
        title: row.get("title"),
        required_skills: row.get("required_skills"),
    })
}

pub async fn fetch_candidates(pool: &PgPool, limit: i64) -> anyhow::Result<Vec<CandidateRecord>> {
    let records = sqlx::query(CANDIDATES_QUERY)
        .bind(limit.max(1))
        .fetch_all(pool)
        .await
        .context("failed to query candidates")?;

    let mut candidates = Vec::with_capacity(records.len());

    for row in records {
        let id: Uuid = row.get("id");
        let first_name: Option<String> = row.get("first_name");
        let last_name: Option<String> = row.get("last_name");
        candidates.push(CandidateRecord {
            id: id.to_string(),
            name: full_name(first_name.as_deref(), last_name.as_deref()),
            skills: row.get("skills"),
        });
    }

    tracing::debug!(count = candidates.len(), "fetched candidates");
    Ok(candidates)
}

fn full_name(first: Option<&str>, last: Option<&str>) -> Option<String> {
    let name = [first, last]
        .into_iter()
        .flatten()
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(" ");
    (!name.is_empty()).then_some(name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn candidates_query_only_uses_read_columns() {
        let select = CANDIDATES_QUERY
            .split("FROM")
            .next()
            .unwrap()
            .replace("SELECT", "");
        let columns: Vec<&str> = select.split(',').map(str::trim).collect();
        assert_eq!(columns, vec!["id", "first_name", "last_name", "skills"]);
        assert!(CANDIDATES_QUERY.contains("ORDER BY id"));
        assert!(!CANDIDATES_QUERY.contains("created_at"));
    }

    #[test]
    fn full_name_joins_present_parts() {
        assert_eq!(full_name(Some("Kiara"), Some("Patel")).as_deref(), Some("Kiara Patel"));
        assert_eq!(full_name(Some(" Kiara "), None).as_deref(), Some("Kiara"));
        assert_eq!(full_name(None, Some("")), None);
        assert_eq!(full_name(None, None), None);
    }
}
