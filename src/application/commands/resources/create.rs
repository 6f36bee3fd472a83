// src/application/commands/resources/create.rs
use super::{MAX_SLUG_ATTEMPTS, ResourceCommandService};
use crate::{
    application::{
        dto::{CreateResourceInput, ResourceView},
        error::ApplicationResult,
    },
    domain::errors::DomainError,
};

impl ResourceCommandService {
    pub async fn create(&self, input: CreateResourceInput) -> ApplicationResult<ResourceView> {
        let mut attempt = 1;
        loop {
            let document = self.build_insert_document(&input).await?;
            match self.write_repo.insert(document).await {
                Ok(created) => {
                    tracing::info!(kind = %self.kind, id = %created.id, "resource created");
                    return Ok(ResourceView::present(&created, &self.links));
                }
                Err(DomainError::Conflict(reason)) if attempt < MAX_SLUG_ATTEMPTS => {
                    tracing::warn!(kind = %self.kind, attempt, %reason, "slug taken concurrently, retrying");
                    attempt += 1;
                }
                Err(err) => return Err(err.into()),
            }
        }
    }
}
