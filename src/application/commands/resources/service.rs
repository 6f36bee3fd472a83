// src/application/commands/resources/service.rs
use std::sync::Arc;

use crate::{
    application::{dto::PublicLinks, ports::storage::ImageStorage, ports::time::Clock},
    domain::catalog::{
        DependentReferenceRepository, ResourceKind, ResourceReadRepository,
        ResourceWriteRepository,
        services::{PositionAllocator, SlugResolver},
    },
};

/// Write side of one resource collection (brands or stores).
pub struct ResourceCommandService {
    pub(super) kind: ResourceKind,
    pub(super) read_repo: Arc<dyn ResourceReadRepository>,
    pub(super) write_repo: Arc<dyn ResourceWriteRepository>,
    pub(super) references: Arc<dyn DependentReferenceRepository>,
    pub(super) storage: Arc<dyn ImageStorage>,
    pub(super) slug_resolver: Arc<SlugResolver>,
    pub(super) positions: Arc<PositionAllocator>,
    pub(super) links: PublicLinks,
    pub(super) clock: Arc<dyn Clock>,
}

impl ResourceCommandService {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        kind: ResourceKind,
        read_repo: Arc<dyn ResourceReadRepository>,
        write_repo: Arc<dyn ResourceWriteRepository>,
        references: Arc<dyn DependentReferenceRepository>,
        storage: Arc<dyn ImageStorage>,
        slug_resolver: Arc<SlugResolver>,
        positions: Arc<PositionAllocator>,
        links: PublicLinks,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            kind,
            read_repo,
            write_repo,
            references,
            storage,
            slug_resolver,
            positions,
            links,
            clock,
        }
    }
}
