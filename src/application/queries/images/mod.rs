// src/application/queries/images/mod.rs
mod list;
mod service;

pub use list::ListImagesQuery;
pub use service::ImageQueryService;
