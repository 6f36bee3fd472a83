// src/application/queries/images/service.rs
use std::sync::Arc;

use crate::{
    application::dto::PublicLinks,
    domain::catalog::ResourceImageRepository,
};

pub struct ImageQueryService {
    pub(super) images: Arc<dyn ResourceImageRepository>,
    pub(super) links: PublicLinks,
}

impl ImageQueryService {
    pub fn new(images: Arc<dyn ResourceImageRepository>, links: PublicLinks) -> Self {
        Self { images, links }
    }
}
