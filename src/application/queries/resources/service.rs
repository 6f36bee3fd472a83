// src/application/queries/resources/service.rs
use std::sync::Arc;

use crate::{
    application::dto::PublicLinks,
    domain::catalog::{ResourceReadRepository, services::SlugResolver},
};

pub struct ResourceQueryService {
    pub(super) read_repo: Arc<dyn ResourceReadRepository>,
    pub(super) slug_resolver: Arc<SlugResolver>,
    pub(super) links: PublicLinks,
}

impl ResourceQueryService {
    pub fn new(
        read_repo: Arc<dyn ResourceReadRepository>,
        slug_resolver: Arc<SlugResolver>,
        links: PublicLinks,
    ) -> Self {
        Self {
            read_repo,
            slug_resolver,
            links,
        }
    }
}
