// src/application/dto/links.rs
use url::Url;

use crate::domain::catalog::{ResourceId, ResourceKind, ResourceSlug};

/// Public addresses of the storefront, used to enrich outgoing views.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogLinks {
    pub domain: Url,
    pub brand_uploads: Url,
    pub store_uploads: Url,
}

impl CatalogLinks {
    /// Upload prefixes are resolved against `domain`, so they may be
    /// site-relative paths or absolute URLs of their own.
    pub fn new(
        domain: Url,
        brand_uploads: &str,
        store_uploads: &str,
    ) -> Result<Self, url::ParseError> {
        Ok(Self {
            brand_uploads: domain.join(brand_uploads)?,
            store_uploads: domain.join(store_uploads)?,
            domain,
        })
    }

    pub fn for_kind(&self, kind: ResourceKind) -> PublicLinks {
        let uploads = match kind {
            ResourceKind::Brand => &self.brand_uploads,
            ResourceKind::Store => &self.store_uploads,
        };
        PublicLinks {
            domain: self.domain.clone(),
            uploads: uploads.clone(),
        }
    }
}

/// Link builder for a single resource kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublicLinks {
    domain: Url,
    uploads: Url,
}

impl PublicLinks {
    /// Absolute storefront URL of a slugged resource.
    pub fn resource_url(&self, slug: &ResourceSlug) -> String {
        match self.domain.join(slug.as_str()) {
            Ok(url) => url.into(),
            Err(err) => {
                tracing::warn!(slug = slug.as_str(), error = %err, "cannot resolve resource url");
                self.resource_path(slug)
            }
        }
    }

    /// Site-relative path of a slugged resource.
    pub fn resource_path(&self, slug: &ResourceSlug) -> String {
        format!("/{}", slug.as_str())
    }

    /// Absolute URL of a file stored in the directory of `owner`. Both
    /// segments are percent-encoded.
    pub fn upload_url(&self, owner: ResourceId, filename: &str) -> String {
        let mut url = self.uploads.clone();
        if let Ok(mut segments) = url.path_segments_mut() {
            segments
                .pop_if_empty()
                .push(&owner.to_string())
                .push(filename);
        }
        url.into()
    }
}
