// src/application/queries/resources/list.rs
use serde_json::Value;

use super::ResourceQueryService;
use crate::{
    application::{
        dto::{FieldSelection, ResourceView, input::lenient},
        error::{ApplicationError, ApplicationResult},
    },
    domain::catalog::{ResourceFilter, ResourceId},
};

/// Raw listing parameters as they arrive in the query string.
#[derive(Debug, Clone, Default)]
pub struct ListResourcesQuery {
    pub enabled: Option<String>,
    pub id: Option<String>,
    pub fields: Option<String>,
}

impl ListResourcesQuery {
    /// Unparseable filter values are ignored rather than rejected.
    pub fn filter(&self) -> ResourceFilter {
        ResourceFilter {
            enabled: self.enabled.as_deref().and_then(lenient::parse_bool),
            id: self
                .id
                .as_deref()
                .and_then(|raw| ResourceId::parse(raw).ok()),
        }
    }
}

impl ResourceQueryService {
    pub async fn list_resources(&self, query: ListResourcesQuery) -> ApplicationResult<Vec<Value>> {
        let selection = FieldSelection::parse(query.fields.as_deref());
        let resources = self.read_repo.list(&query.filter()).await?;

        resources
            .iter()
            .map(|resource| {
                selection
                    .project(&ResourceView::present(resource, &self.links))
                    .map_err(|err| ApplicationError::infrastructure(err.to_string()))
            })
            .collect()
    }
}
