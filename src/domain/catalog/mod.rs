// src/domain/catalog/mod.rs
pub mod entity;
pub mod image;
pub mod kind;
pub mod repository;
pub mod reserved;
pub mod services;
pub mod value_objects;

pub use entity::{NewResource, Resource, ResourceFilter, ResourcePatch};
pub use image::{ImageId, ImagePatch, NewResourceImage, ResourceImage};
pub use kind::ResourceKind;
pub use repository::{
    DependentReferenceRepository, ResourceImageRepository, ResourceReadRepository,
    ResourceWriteRepository,
};
pub use value_objects::{FileName, Position, ResourceId, ResourceSlug, SiteUrl};
