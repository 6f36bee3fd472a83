// src/infrastructure/repositories/postgres_resource.rs
use super::map_sqlx;
use crate::domain::catalog::{
    NewResource, Position, Resource, ResourceFilter, ResourceId, ResourceKind, ResourcePatch,
    ResourceReadRepository, ResourceSlug, ResourceWriteRepository, SiteUrl,
};
use crate::domain::errors::{DomainError, DomainResult};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool, Postgres, QueryBuilder};
use uuid::Uuid;

const RESOURCE_COLUMNS: &str = "id, name, description, meta_description, meta_title, enabled, sort, position, slug, image, site_url, date_created, date_updated";

#[derive(Clone)]
pub struct PostgresResourceWriteRepository {
    pool: PgPool,
    kind: ResourceKind,
}

impl PostgresResourceWriteRepository {
    pub fn new(pool: PgPool, kind: ResourceKind) -> Self {
        Self { pool, kind }
    }
}

#[derive(Clone)]
pub struct PostgresResourceReadRepository {
    pool: PgPool,
    kind: ResourceKind,
}

impl PostgresResourceReadRepository {
    pub fn new(pool: PgPool, kind: ResourceKind) -> Self {
        Self { pool, kind }
    }
}

#[derive(Debug, FromRow)]
struct ResourceRow {
    id: Uuid,
    name: String,
    description: String,
    meta_description: String,
    meta_title: String,
    enabled: bool,
    sort: String,
    position: i64,
    slug: Option<String>,
    image: String,
    site_url: Option<String>,
    date_created: DateTime<Utc>,
    date_updated: Option<DateTime<Utc>>,
}

impl TryFrom<ResourceRow> for Resource {
    type Error = DomainError;

    fn try_from(row: ResourceRow) -> Result<Self, Self::Error> {
        Ok(Resource {
            id: ResourceId::new(row.id),
            name: row.name,
            description: row.description,
            meta_description: row.meta_description,
            meta_title: row.meta_title,
            enabled: row.enabled,
            sort: row.sort,
            position: Position::new(row.position),
            slug: row
                .slug
                .filter(|slug| !slug.is_empty())
                .map(ResourceSlug::new)
                .transpose()?,
            image: row.image,
            // Legacy rows may hold values that no longer validate.
            site_url: row.site_url.and_then(|url| SiteUrl::parse(&url).ok()),
            date_created: row.date_created,
            date_updated: row.date_updated,
        })
    }
}

#[async_trait]
impl ResourceWriteRepository for PostgresResourceWriteRepository {
    async fn insert(&self, resource: NewResource) -> DomainResult<Resource> {
        let NewResource {
            name,
            description,
            meta_description,
            meta_title,
            enabled,
            sort,
            position,
            slug,
            image,
            site_url,
            date_created,
        } = resource;

        let sql = format!(
            "INSERT INTO {table} (id, name, description, meta_description, meta_title, enabled, sort, position, slug, image, site_url, date_created, date_updated)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, NULL)
             RETURNING {RESOURCE_COLUMNS}",
            table = self.kind.collection(),
        );

        let row = sqlx::query_as::<_, ResourceRow>(&sql)
            .bind(Uuid::new_v4())
            .bind(name)
            .bind(description)
            .bind(meta_description)
            .bind(meta_title)
            .bind(enabled)
            .bind(sort)
            .bind(position.value())
            .bind(slug.map(String::from))
            .bind(image)
            .bind(site_url.map(SiteUrl::into_inner))
            .bind(date_created)
            .fetch_one(&self.pool)
            .await
            .map_err(map_sqlx)?;

        Resource::try_from(row)
    }

    async fn update(&self, patch: ResourcePatch) -> DomainResult<Option<Resource>> {
        let ResourcePatch {
            id,
            name,
            description,
            meta_description,
            meta_title,
            enabled,
            sort,
            position,
            slug,
            image,
            site_url,
            date_updated,
        } = patch;

        let mut builder: QueryBuilder<Postgres> =
            QueryBuilder::new(format!("UPDATE {} SET date_updated = ", self.kind.collection()));
        builder.push_bind(date_updated);

        for (column, value) in [
            ("name", name),
            ("description", description),
            ("meta_description", meta_description),
            ("meta_title", meta_title),
            ("sort", sort),
            ("image", image),
        ] {
            if let Some(value) = value {
                builder.push(format!(", {column} = "));
                builder.push_bind(value);
            }
        }

        if let Some(enabled) = enabled {
            builder.push(", enabled = ");
            builder.push_bind(enabled);
        }

        if let Some(position) = position {
            builder.push(", position = ");
            builder.push_bind(position.value());
        }

        if let Some(slug) = slug {
            builder.push(", slug = ");
            builder.push_bind(slug.map(String::from));
        }

        if let Some(site_url) = site_url {
            builder.push(", site_url = ");
            builder.push_bind(site_url.map(SiteUrl::into_inner));
        }

        builder.push(" WHERE id = ");
        builder.push_bind(id.as_uuid());
        builder.push(format!(" RETURNING {RESOURCE_COLUMNS}"));

        let maybe_row = builder
            .build_query_as::<ResourceRow>()
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?;

        maybe_row.map(Resource::try_from).transpose()
    }

    async fn delete(&self, id: ResourceId) -> DomainResult<bool> {
        let sql = format!("DELETE FROM {} WHERE id = $1", self.kind.collection());
        let result = sqlx::query(&sql)
            .bind(id.as_uuid())
            .execute(&self.pool)
            .await
            .map_err(map_sqlx)?;
        Ok(result.rows_affected() > 0)
    }
}

#[async_trait]
impl ResourceReadRepository for PostgresResourceReadRepository {
    async fn find_by_id(&self, id: ResourceId) -> DomainResult<Option<Resource>> {
        let sql = format!(
            "SELECT {RESOURCE_COLUMNS} FROM {} WHERE id = $1",
            self.kind.collection()
        );
        let row = sqlx::query_as::<_, ResourceRow>(&sql)
            .bind(id.as_uuid())
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?;

        row.map(Resource::try_from).transpose()
    }

    async fn list(&self, filter: &ResourceFilter) -> DomainResult<Vec<Resource>> {
        let mut builder: QueryBuilder<Postgres> = QueryBuilder::new(format!(
            "SELECT {RESOURCE_COLUMNS} FROM {} WHERE TRUE",
            self.kind.collection()
        ));

        if let Some(enabled) = filter.enabled {
            builder.push(" AND enabled = ");
            builder.push_bind(enabled);
        }

        if let Some(id) = filter.id {
            builder.push(" AND id = ");
            builder.push_bind(id.as_uuid());
        }

        builder.push(" ORDER BY position ASC, seq ASC");

        let rows = builder
            .build_query_as::<ResourceRow>()
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx)?;

        rows.into_iter().map(Resource::try_from).collect()
    }

    async fn slug_exists(
        &self,
        slug: &ResourceSlug,
        exclude: Option<ResourceId>,
    ) -> DomainResult<bool> {
        let sql = format!(
            "SELECT EXISTS (SELECT 1 FROM {} WHERE slug = $1 AND ($2::uuid IS NULL OR id <> $2))",
            self.kind.collection()
        );
        sqlx::query_scalar::<_, bool>(&sql)
            .bind(slug.as_str())
            .bind(exclude.map(|id| id.as_uuid()))
            .fetch_one(&self.pool)
            .await
            .map_err(map_sqlx)
    }

    async fn max_position(&self) -> DomainResult<Option<Position>> {
        let sql = format!("SELECT MAX(position) FROM {}", self.kind.collection());
        let max = sqlx::query_scalar::<_, Option<i64>>(&sql)
            .fetch_one(&self.pool)
            .await
            .map_err(map_sqlx)?;
        Ok(max.map(Position::new))
    }
}
