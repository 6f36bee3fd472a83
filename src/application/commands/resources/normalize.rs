// src/application/commands/resources/normalize.rs
use super::ResourceCommandService;
use crate::{
    application::{
        dto::{CreateResourceInput, UpdateResourceInput, input::non_blank},
        error::ApplicationResult,
    },
    domain::{
        catalog::{FileName, NewResource, Position, ResourceId, ResourcePatch, ResourceSlug, SiteUrl},
        errors::DomainError,
    },
};

impl ResourceCommandService {
    /// Coerce a create payload into a complete insert document.
    ///
    /// Every field is defaulted on its own. The slug is resolved last and
    /// falls back to the name; with neither the resource is stored as a draft.
    pub async fn build_insert_document(
        &self,
        input: &CreateResourceInput,
    ) -> ApplicationResult<NewResource> {
        let position = self.positions.resolve(input.position.flatten()).await?;
        let slug = self
            .resolve_slug(input.slug.as_deref(), input.name.as_deref(), None)
            .await?;

        Ok(NewResource {
            name: input.name.clone().unwrap_or_default(),
            description: input.description.clone().unwrap_or_default(),
            meta_description: input.meta_description.clone().unwrap_or_default(),
            meta_title: input.meta_title.clone().unwrap_or_default(),
            enabled: input.enabled.flatten().unwrap_or(true),
            sort: input.sort.clone().unwrap_or_default(),
            position,
            slug,
            image: String::new(),
            site_url: input.site_url.as_deref().and_then(valid_site_url),
            date_created: self.clock.now(),
        })
    }

    /// Turn an update payload into a partial patch of the sent keys only.
    pub async fn build_update_document(
        &self,
        id: &str,
        input: &UpdateResourceInput,
    ) -> ApplicationResult<ResourcePatch> {
        let id = ResourceId::parse(id)?;
        if input.is_empty() {
            return Err(DomainError::EmptyUpdate.into());
        }

        let mut patch = ResourcePatch::new(id, self.clock.now());
        patch.name.clone_from(&input.name);
        patch.description.clone_from(&input.description);
        patch.meta_description.clone_from(&input.meta_description);
        patch.meta_title.clone_from(&input.meta_title);
        patch.sort.clone_from(&input.sort);
        patch.image = match input.image.as_deref().map(str::trim) {
            None => None,
            Some("") => Some(String::new()),
            Some(raw) => valid_image(raw),
        };
        patch.enabled = input.enabled.map(|enabled| enabled.unwrap_or(true));
        patch.position = input.position.flatten().and_then(Position::explicit);

        patch.site_url = match input.site_url.as_deref().map(str::trim) {
            None => None,
            Some("") => Some(None),
            Some(raw) => valid_site_url(raw).map(Some),
        };

        if input.slug.is_some() {
            patch.slug = Some(
                self.resolve_slug(input.slug.as_deref(), input.name.as_deref(), Some(id))
                    .await?,
            );
        }

        Ok(patch)
    }

    async fn resolve_slug(
        &self,
        slug: Option<&str>,
        name: Option<&str>,
        exclude: Option<ResourceId>,
    ) -> ApplicationResult<Option<ResourceSlug>> {
        match non_blank(slug).or_else(|| non_blank(name)) {
            Some(candidate) => Ok(Some(self.slug_resolver.resolve(candidate, exclude).await?)),
            None => Ok(None),
        }
    }
}

fn valid_site_url(raw: &str) -> Option<SiteUrl> {
    match SiteUrl::parse(raw) {
        Ok(url) => Some(url),
        Err(err) => {
            if !raw.trim().is_empty() {
                tracing::debug!(error = %err, "dropping invalid site_url");
            }
            None
        }
    }
}

fn valid_image(raw: &str) -> Option<String> {
    match FileName::sanitize(raw) {
        Ok(name) => Some(name.into_inner()),
        Err(err) => {
            tracing::debug!(error = %err, "dropping invalid image name");
            None
        }
    }
}
