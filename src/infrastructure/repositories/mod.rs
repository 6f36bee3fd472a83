// src/infrastructure/repositories/mod.rs
mod error;
mod postgres_product_reference;
mod postgres_resource;
mod postgres_resource_image;

pub use error::map_sqlx;
pub use postgres_product_reference::PostgresProductReferenceRepository;
pub use postgres_resource::{PostgresResourceReadRepository, PostgresResourceWriteRepository};
pub use postgres_resource_image::PostgresResourceImageRepository;
