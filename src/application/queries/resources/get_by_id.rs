// src/application/queries/resources/get_by_id.rs
use super::ResourceQueryService;
use crate::{
    application::{dto::ResourceView, error::ApplicationResult},
    domain::catalog::ResourceId,
};

pub struct GetResourceByIdQuery {
    pub id: String,
}

impl ResourceQueryService {
    /// `None` when the id is well formed but nothing matches.
    pub async fn get_resource_by_id(
        &self,
        query: GetResourceByIdQuery,
    ) -> ApplicationResult<Option<ResourceView>> {
        let id = ResourceId::parse(&query.id)?;
        let resource = self.read_repo.find_by_id(id).await?;
        Ok(resource.map(|resource| ResourceView::present(&resource, &self.links)))
    }
}
