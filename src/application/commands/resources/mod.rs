// src/application/commands/resources/mod.rs
mod create;
mod delete;
mod normalize;
mod primary_image;
mod service;
mod update;

pub use service::ResourceCommandService;

/// Attempts made when the slug unique index rejects a write that lost a race.
pub(crate) const MAX_SLUG_ATTEMPTS: usize = 3;
