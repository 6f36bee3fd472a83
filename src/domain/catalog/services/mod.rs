// src/domain/catalog/services/mod.rs
mod position;
mod slug;

pub use position::PositionAllocator;
pub use slug::SlugResolver;
