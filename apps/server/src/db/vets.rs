//! Postgres-backed vet repository

use super::VetRepository;
use crate::Result;
use async_trait::async_trait;
use petclinic_models::{Page, PageRequest, Specialty, Vet};
use sqlx::{postgres::PgRow, PgPool, Row};

#[derive(Clone)]
pub struct PostgresVetRepository {
    pool: PgPool,
}

impl PostgresVetRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn count(&self) -> Result<u64> {
        let total: i64 = sqlx::query_scalar("SELECT COUNT(*)::BIGINT FROM vets")
            .fetch_one(&self.pool)
            .await
            .map_err(crate::Error::Database)?;

        u64::try_from(total)
            .map_err(|_| crate::Error::Internal(format!("Negative vet count: {}", total)))
    }
}

#[async_trait]
impl VetRepository for PostgresVetRepository {
    async fn find_all(&self) -> Result<Vec<Vet>> {
        let rows = sqlx::query(
            r#"
            SELECT
                v.id,
                v.first_name,
                v.last_name,
                s.id AS specialty_id,
                s.name AS specialty_name
            FROM vets v
            LEFT JOIN vet_specialties vs ON vs.vet_id = v.id
            LEFT JOIN specialties s ON s.id = vs.specialty_id
            ORDER BY v.id, s.name
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(crate::Error::Database)?;

        collect_vets(rows)
    }

    async fn find_all_paged(&self, request: PageRequest) -> Result<Page<Vet>> {
        let total = self.count().await?;

        let limit = i64::try_from(request.page_size()).unwrap_or(i64::MAX);
        let offset = i64::try_from(request.offset()).unwrap_or(i64::MAX);

        let rows = sqlx::query(
            r#"
            WITH page AS (
                SELECT id, first_name, last_name
                FROM vets
                ORDER BY id
                LIMIT $1 OFFSET $2
            )
            SELECT
                p.id,
                p.first_name,
                p.last_name,
                s.id AS specialty_id,
                s.name AS specialty_name
            FROM page p
            LEFT JOIN vet_specialties vs ON vs.vet_id = p.id
            LEFT JOIN specialties s ON s.id = vs.specialty_id
            ORDER BY p.id, s.name
            "#,
        )
        .bind(limit)
        .bind(offset)
        .fetch_all(&self.pool)
        .await
        .map_err(crate::Error::Database)?;

        tracing::debug!(
            page_number = request.page_number(),
            page_size = request.page_size(),
            total,
            "Fetched vet page"
        );

        Ok(Page::new(collect_vets(rows)?, request, total))
    }
}

/// Folds one row per (vet, specialty) into vets. Rows must be ordered by vet id.
fn collect_vets(rows: Vec<PgRow>) -> Result<Vec<Vet>> {
    let mut vets: Vec<Vet> = Vec::new();

    for row in rows {
        let id: i32 = row.try_get("id")?;

        if vets.last().map(|v| v.id) != Some(id) {
            vets.push(Vet::new(
                id,
                row.try_get::<String, _>("first_name")?,
                row.try_get::<String, _>("last_name")?,
            ));
        }

        let specialty_id: Option<i32> = row.try_get("specialty_id")?;
        let specialty_name: Option<String> = row.try_get("specialty_name")?;
        if let (Some(sid), Some(name), Some(vet)) = (specialty_id, specialty_name, vets.last_mut())
        {
            vet.add_specialty(Specialty::new(sid, name));
        }
    }

    Ok(vets)
}
