// src/application/queries/resources/mod.rs
mod get_by_id;
mod list;
mod service;
mod slug_exists;

pub use get_by_id::GetResourceByIdQuery;
pub use list::ListResourcesQuery;
pub use service::ResourceQueryService;
pub use slug_exists::SlugExistsQuery;
