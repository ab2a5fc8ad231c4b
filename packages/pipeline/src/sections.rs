//! Durable section records. Full replacement per document per run so a
//! previous numbering never lingers.

use sqlx::PgPool;

use crate::error::Result;
use crate::models::SectionRecord;

/// Replace all section rows for a document: delete-then-insert in one
/// transaction. Returns the number of rows deleted.
#[tracing::instrument(skip(pool, section_ids), fields(sections = section_ids.len()))]
pub async fn replace_sections(pool: &PgPool, source_id: &str, section_ids: &[i32]) -> Result<u64> {
    let mut tx = pool.begin().await?;

    let deleted = sqlx::query(r#"DELETE FROM legislation_sections WHERE source_id = $1"#)
        .bind(source_id)
        .execute(&mut *tx)
        .await?
        .rows_affected();

    for section_id in section_ids {
        sqlx::query(r#"INSERT INTO legislation_sections (source_id, section_id) VALUES ($1, $2)"#)
            .bind(source_id)
            .bind(section_id)
            .execute(&mut *tx)
            .await?;
    }

    tx.commit().await?;

    tracing::debug!(
        source_id,
        deleted,
        inserted = section_ids.len(),
        "replaced section rows"
    );
    Ok(deleted)
}

/// List section rows for a document in sequence order.
pub async fn list_sections(pool: &PgPool, source_id: &str) -> Result<Vec<SectionRecord>> {
    let rows = sqlx::query_as::<_, SectionRecord>(
        r#"SELECT * FROM legislation_sections WHERE source_id = $1 ORDER BY section_id"#,
    )
    .bind(source_id)
    .fetch_all(pool)
    .await?;

    Ok(rows)
}
