// src/application/commands/images/service.rs
use std::sync::Arc;

use crate::{
    application::{
        dto::PublicLinks,
        error::{ApplicationError, ApplicationResult},
        ports::storage::ImageStorage,
    },
    domain::catalog::{ResourceId, ResourceImageRepository, ResourceKind, ResourceReadRepository},
};

/// Gallery management for the resources of one kind.
pub struct ImageCommandService {
    pub(super) kind: ResourceKind,
    pub(super) owners: Arc<dyn ResourceReadRepository>,
    pub(super) images: Arc<dyn ResourceImageRepository>,
    pub(super) storage: Arc<dyn ImageStorage>,
    pub(super) links: PublicLinks,
}

impl ImageCommandService {
    pub fn new(
        kind: ResourceKind,
        owners: Arc<dyn ResourceReadRepository>,
        images: Arc<dyn ResourceImageRepository>,
        storage: Arc<dyn ImageStorage>,
        links: PublicLinks,
    ) -> Self {
        Self {
            kind,
            owners,
            images,
            storage,
            links,
        }
    }

    pub(super) async fn require_owner(&self, owner: ResourceId) -> ApplicationResult<()> {
        match self.owners.find_by_id(owner).await? {
            Some(_) => Ok(()),
            None => Err(ApplicationError::not_found(format!(
                "{} {owner} not found",
                self.kind
            ))),
        }
    }

    pub(super) async fn discard_file(&self, owner: ResourceId, filename: &str) {
        if let Err(err) = self.storage.remove_file(self.kind, owner, filename).await {
            tracing::warn!(kind = %self.kind, %owner, file = filename, error = %err, "failed to remove gallery file");
        }
    }
}
