// src/application/commands/resources/delete.rs
use super::ResourceCommandService;
use crate::{application::error::ApplicationResult, domain::catalog::ResourceId};

impl ResourceCommandService {
    /// Remove a resource and run its cascade.
    ///
    /// The cascade (clearing product references, removing the upload
    /// directory) is best-effort and not atomic with the delete; failures are
    /// logged and the delete still reports success. Both steps are idempotent.
    pub async fn delete(&self, id: &str) -> ApplicationResult<bool> {
        let id = ResourceId::parse(id)?;

        if !self.write_repo.delete(id).await? {
            return Ok(false);
        }

        match self.references.clear_references(id).await {
            Ok(cleared) => {
                tracing::debug!(kind = %self.kind, %id, cleared, "cleared dependent references");
            }
            Err(err) => {
                tracing::warn!(kind = %self.kind, %id, error = %err, "failed to clear dependent references");
            }
        }

        if let Err(err) = self.storage.remove(self.kind, id).await {
            tracing::warn!(kind = %self.kind, %id, error = %err, "failed to remove upload directory");
        }

        tracing::info!(kind = %self.kind, %id, "resource deleted");
        Ok(true)
    }
}
