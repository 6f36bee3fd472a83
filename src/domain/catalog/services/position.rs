// src/domain/catalog/services/position.rs
use std::sync::Arc;

use crate::domain::catalog::repository::ResourceReadRepository;
use crate::domain::catalog::value_objects::Position;
use crate::domain::errors::DomainResult;

/// Appends new resources after the current maximum position.
///
/// Two concurrent creations can receive the same position; positions are an
/// ordering hint, not a key.
pub struct PositionAllocator {
    read_repo: Arc<dyn ResourceReadRepository>,
}

impl PositionAllocator {
    pub fn new(read_repo: Arc<dyn ResourceReadRepository>) -> Self {
        Self { read_repo }
    }

    pub async fn next_position(&self) -> DomainResult<Position> {
        let max = self.read_repo.max_position().await?;
        Ok(Position::after(max))
    }

    /// Use the caller's position when it is non-negative, otherwise allocate.
    pub async fn resolve(&self, requested: Option<i64>) -> DomainResult<Position> {
        match requested.and_then(Position::explicit) {
            Some(position) => Ok(position),
            None => self.next_position().await,
        }
    }
}
