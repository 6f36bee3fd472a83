// src/infrastructure/repositories/postgres_product_reference.rs
use super::map_sqlx;
use crate::domain::catalog::{DependentReferenceRepository, ResourceId, ResourceKind};
use crate::domain::errors::DomainResult;
use async_trait::async_trait;
use sqlx::PgPool;

/// Nullable `products.<kind>_id` references to a resource.
#[derive(Clone)]
pub struct PostgresProductReferenceRepository {
    pool: PgPool,
    kind: ResourceKind,
}

impl PostgresProductReferenceRepository {
    pub fn new(pool: PgPool, kind: ResourceKind) -> Self {
        Self { pool, kind }
    }
}

#[async_trait]
impl DependentReferenceRepository for PostgresProductReferenceRepository {
    async fn clear_references(&self, id: ResourceId) -> DomainResult<u64> {
        let column = self.kind.reference_column();
        let sql = format!("UPDATE products SET {column} = NULL WHERE {column} = $1");
        let result = sqlx::query(&sql)
            .bind(id.as_uuid())
            .execute(&self.pool)
            .await
            .map_err(map_sqlx)?;
        Ok(result.rows_affected())
    }
}
