// src/application/commands/resources/update.rs
use super::{MAX_SLUG_ATTEMPTS, ResourceCommandService};
use crate::{
    application::{
        dto::{ResourceView, UpdateResourceInput},
        error::ApplicationResult,
    },
    domain::errors::DomainError,
};

impl ResourceCommandService {
    /// Returns `None` when no resource has the given id.
    pub async fn update(
        &self,
        id: &str,
        input: UpdateResourceInput,
    ) -> ApplicationResult<Option<ResourceView>> {
        let mut attempt = 1;
        loop {
            let patch = self.build_update_document(id, &input).await?;
            match self.write_repo.update(patch).await {
                Ok(updated) => {
                    if let Some(resource) = &updated {
                        tracing::info!(kind = %self.kind, id = %resource.id, "resource updated");
                    }
                    return Ok(updated.map(|resource| ResourceView::present(&resource, &self.links)));
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
