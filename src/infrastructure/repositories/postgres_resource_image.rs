// src/infrastructure/repositories/postgres_resource_image.rs
use super::map_sqlx;
use crate::domain::catalog::{
    ImageId, ImagePatch, NewResourceImage, Position, ResourceId, ResourceImage,
    ResourceImageRepository, ResourceKind,
};
use crate::domain::errors::DomainResult;
use async_trait::async_trait;
use sqlx::{FromRow, PgPool, Postgres, QueryBuilder};
use uuid::Uuid;

/// Gallery rows of one resource kind, stored in `<kind>_images`.
#[derive(Clone)]
pub struct PostgresResourceImageRepository {
    pool: PgPool,
    kind: ResourceKind,
}

impl PostgresResourceImageRepository {
    pub fn new(pool: PgPool, kind: ResourceKind) -> Self {
        Self { pool, kind }
    }

    fn table(&self) -> String {
        format!("{}_images", self.kind.as_str())
    }
}

#[derive(Debug, FromRow)]
struct ImageRow {
    id: Uuid,
    filename: String,
    alt: String,
    position: i64,
}

impl From<ImageRow> for ResourceImage {
    fn from(row: ImageRow) -> Self {
        ResourceImage {
            id: ImageId::from(row.id),
            filename: row.filename,
            alt: row.alt,
            position: Position::new(row.position),
        }
    }
}

#[async_trait]
impl ResourceImageRepository for PostgresResourceImageRepository {
    async fn list(&self, owner: ResourceId) -> DomainResult<Vec<ResourceImage>> {
        let sql = format!(
            "SELECT id, filename, alt, position FROM {} WHERE {} = $1 ORDER BY position ASC, seq ASC",
            self.table(),
            self.kind.reference_column()
        );
        let rows = sqlx::query_as::<_, ImageRow>(&sql)
            .bind(owner.as_uuid())
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx)?;
        Ok(rows.into_iter().map(ResourceImage::from).collect())
    }

    async fn find(&self, owner: ResourceId, id: ImageId) -> DomainResult<Option<ResourceImage>> {
        let sql = format!(
            "SELECT id, filename, alt, position FROM {} WHERE {} = $1 AND id = $2",
            self.table(),
            self.kind.reference_column()
        );
        let row = sqlx::query_as::<_, ImageRow>(&sql)
            .bind(owner.as_uuid())
            .bind(id.as_uuid())
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?;
        Ok(row.map(ResourceImage::from))
    }

    async fn push(&self, owner: ResourceId, image: NewResourceImage) -> DomainResult<bool> {
        let sql = format!(
            "INSERT INTO {table} (id, {column}, filename, alt, position)
             SELECT $1::uuid, $2::uuid, $3::text, $4::text, $5::bigint
             WHERE EXISTS (SELECT 1 FROM {owners} WHERE id = $2::uuid)",
            table = self.table(),
            column = self.kind.reference_column(),
            owners = self.kind.collection(),
        );
        let result = sqlx::query(&sql)
            .bind(image.id.as_uuid())
            .bind(owner.as_uuid())
            .bind(image.filename.into_inner())
            .bind(image.alt)
            .bind(image.position.value())
            .execute(&self.pool)
            .await
            .map_err(map_sqlx)?;
        Ok(result.rows_affected() > 0)
    }

    async fn update(
        &self,
        owner: ResourceId,
        id: ImageId,
        patch: ImagePatch,
    ) -> DomainResult<bool> {
        if patch.is_empty() {
            return Ok(self.find(owner, id).await?.is_some());
        }

        let mut builder: QueryBuilder<Postgres> =
            QueryBuilder::new(format!("UPDATE {} SET ", self.table()));
        let mut fields = builder.separated(", ");
        if let Some(alt) = patch.alt {
            fields.push("alt = ");
            fields.push_bind_unseparated(alt);
        }
        if let Some(position) = patch.position {
            fields.push("position = ");
            fields.push_bind_unseparated(position.value());
        }

        builder.push(format!(" WHERE {} = ", self.kind.reference_column()));
        builder.push_bind(owner.as_uuid());
        builder.push(" AND id = ");
        builder.push_bind(id.as_uuid());

        let result = builder
            .build()
            .execute(&self.pool)
            .await
            .map_err(map_sqlx)?;
        Ok(result.rows_affected() > 0)
    }

    async fn pull(&self, owner: ResourceId, id: ImageId) -> DomainResult<bool> {
        let sql = format!(
            "DELETE FROM {} WHERE {} = $1 AND id = $2",
            self.table(),
            self.kind.reference_column()
        );
        let result = sqlx::query(&sql)
            .bind(owner.as_uuid())
            .bind(id.as_uuid())
            .execute(&self.pool)
            .await
            .map_err(map_sqlx)?;
        Ok(result.rows_affected() > 0)
    }
}
