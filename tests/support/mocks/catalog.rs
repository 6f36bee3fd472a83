// tests/support/mocks/catalog.rs
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use catalog_core::domain::catalog::{
    DependentReferenceRepository, ImageId, ImagePatch, NewResource, NewResourceImage, Position,
    Resource, ResourceFilter, ResourceId, ResourceImage, ResourceImageRepository, ResourceKind,
    ResourcePatch, ResourceReadRepository, ResourceSlug, ResourceWriteRepository,
};
use catalog_core::domain::errors::{DomainError, DomainResult};
use uuid::Uuid;

/// Product rows shared by the brand and store doubles.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductRow {
    pub name: String,
    pub brand_id: Option<ResourceId>,
    pub store_id: Option<ResourceId>,
}

pub type SharedProducts = Arc<Mutex<Vec<ProductRow>>>;

#[derive(Default)]
struct CatalogState {
    rows: Vec<Resource>,
    images: HashMap<ResourceId, Vec<ResourceImage>>,
}

/// In-memory collection of one resource kind. Implements every catalog
/// repository trait so one value can be handed to all of them.
#[derive(Clone)]
pub struct InMemoryCatalog {
    kind: ResourceKind,
    state: Arc<Mutex<CatalogState>>,
    products: SharedProducts,
    injected_conflicts: Arc<AtomicUsize>,
    failing_image_writes: Arc<AtomicBool>,
}

impl InMemoryCatalog {
    pub fn new(kind: ResourceKind, products: SharedProducts) -> Self {
        Self {
            kind,
            state: Arc::new(Mutex::new(CatalogState::default())),
            products,
            injected_conflicts: Arc::new(AtomicUsize::new(0)),
            failing_image_writes: Arc::new(AtomicBool::new(false)),
        }
    }

    pub fn seed(&self, resource: Resource) -> Resource {
        self.state.lock().unwrap().rows.push(resource.clone());
        resource
    }

    pub fn seed_image(&self, owner: ResourceId, image: ResourceImage) {
        self.state
            .lock()
            .unwrap()
            .images
            .entry(owner)
            .or_default()
            .push(image);
    }

    pub fn get(&self, id: ResourceId) -> Option<Resource> {
        self.state
            .lock()
            .unwrap()
            .rows
            .iter()
            .find(|row| row.id == id)
            .cloned()
    }

    pub fn images_of(&self, owner: ResourceId) -> Vec<ResourceImage> {
        self.state
            .lock()
            .unwrap()
            .images
            .get(&owner)
            .cloned()
            .unwrap_or_default()
    }

    pub fn len(&self) -> usize {
        self.state.lock().unwrap().rows.len()
    }

    /// Make the next `count` writes fail as if the slug index fired.
    pub fn inject_slug_conflicts(&self, count: usize) {
        self.injected_conflicts.store(count, Ordering::SeqCst);
    }

    /// Make gallery appends fail the way a foreign key does once the owner
    /// row is deleted mid-upload.
    pub fn fail_image_writes(&self) {
        self.failing_image_writes.store(true, Ordering::SeqCst);
    }

    fn take_injected_conflict(&self) -> bool {
        self.injected_conflicts
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |left| left.checked_sub(1))
            .is_ok()
    }

    fn slug_taken(rows: &[Resource], slug: &ResourceSlug, exclude: Option<ResourceId>) -> bool {
        rows.iter()
            .any(|row| row.slug.as_ref() == Some(slug) && Some(row.id) != exclude)
    }

    fn conflict() -> DomainError {
        DomainError::Conflict("slug already exists".into())
    }
}

#[async_trait]
impl ResourceReadRepository for InMemoryCatalog {
    async fn find_by_id(&self, id: ResourceId) -> DomainResult<Option<Resource>> {
        Ok(self.get(id))
    }

    async fn list(&self, filter: &ResourceFilter) -> DomainResult<Vec<Resource>> {
        let state = self.state.lock().unwrap();
        let mut rows: Vec<Resource> = state
            .rows
            .iter()
            .filter(|row| filter.enabled.is_none_or(|enabled| row.enabled == enabled))
            .filter(|row| filter.id.is_none_or(|id| row.id == id))
            .cloned()
            .collect();
        rows.sort_by_key(|row| row.position);
        Ok(rows)
    }

    async fn slug_exists(
        &self,
        slug: &ResourceSlug,
        exclude: Option<ResourceId>,
    ) -> DomainResult<bool> {
        let state = self.state.lock().unwrap();
        Ok(Self::slug_taken(&state.rows, slug, exclude))
    }

    async fn max_position(&self) -> DomainResult<Option<Position>> {
        let state = self.state.lock().unwrap();
        Ok(state.rows.iter().map(|row| row.position).max())
    }
}

#[async_trait]
impl ResourceWriteRepository for InMemoryCatalog {
    async fn insert(&self, resource: NewResource) -> DomainResult<Resource> {
        if self.take_injected_conflict() {
            return Err(Self::conflict());
        }

        let mut state = self.state.lock().unwrap();
        if let Some(slug) = &resource.slug {
            if Self::slug_taken(&state.rows, slug, None) {
                return Err(Self::conflict());
            }
        }

        let created = Resource {
            id: ResourceId::new(Uuid::new_v4()),
            name: resource.name,
            description: resource.description,
            meta_description: resource.meta_description,
            meta_title: resource.meta_title,
            enabled: resource.enabled,
            sort: resource.sort,
            position: resource.position,
            slug: resource.slug,
            image: resource.image,
            site_url: resource.site_url,
            date_created: resource.date_created,
            date_updated: None,
        };
        state.rows.push(created.clone());
        Ok(created)
    }

    async fn update(&self, patch: ResourcePatch) -> DomainResult<Option<Resource>> {
        if self.take_injected_conflict() {
            return Err(Self::conflict());
        }

        let mut state = self.state.lock().unwrap();
        if let Some(Some(slug)) = &patch.slug {
            if Self::slug_taken(&state.rows, slug, Some(patch.id)) {
                return Err(Self::conflict());
            }
        }

        let Some(row) = state.rows.iter_mut().find(|row| row.id == patch.id) else {
            return Ok(None);
        };
        patch.apply_to(row);
        Ok(Some(row.clone()))
    }

    async fn delete(&self, id: ResourceId) -> DomainResult<bool> {
        let mut state = self.state.lock().unwrap();
        let before = state.rows.len();
        state.rows.retain(|row| row.id != id);
        state.images.remove(&id);
        Ok(state.rows.len() < before)
    }
}

#[async_trait]
impl DependentReferenceRepository for InMemoryCatalog {
    async fn clear_references(&self, id: ResourceId) -> DomainResult<u64> {
        let mut products = self.products.lock().unwrap();
        let mut cleared = 0;
        for product in products.iter_mut() {
            let reference = match self.kind {
                ResourceKind::Brand => &mut product.brand_id,
                ResourceKind::Store => &mut product.store_id,
            };
            if *reference == Some(id) {
                *reference = None;
                cleared += 1;
            }
        }
        Ok(cleared)
    }
}

#[async_trait]
impl ResourceImageRepository for InMemoryCatalog {
    async fn list(&self, owner: ResourceId) -> DomainResult<Vec<ResourceImage>> {
        let mut images = self.images_of(owner);
        images.sort_by_key(|image| image.position);
        Ok(images)
    }

    async fn find(&self, owner: ResourceId, id: ImageId) -> DomainResult<Option<ResourceImage>> {
        Ok(self
            .images_of(owner)
            .into_iter()
            .find(|image| image.id == id))
    }

    async fn push(&self, owner: ResourceId, image: NewResourceImage) -> DomainResult<bool> {
        if self.failing_image_writes.load(Ordering::SeqCst) {
            return Err(DomainError::NotFound(format!("{} {owner} was removed", self.kind)));
        }
        let mut state = self.state.lock().unwrap();
        if !state.rows.iter().any(|row| row.id == owner) {
            return Ok(false);
        }
        state
            .images
            .entry(owner)
            .or_default()
            .push(image.into_image());
        Ok(true)
    }

    async fn update(
        &self,
        owner: ResourceId,
        id: ImageId,
        patch: ImagePatch,
    ) -> DomainResult<bool> {
        let mut state = self.state.lock().unwrap();
        let Some(image) = state
            .images
            .get_mut(&owner)
            .and_then(|images| images.iter_mut().find(|image| image.id == id))
        else {
            return Ok(false);
        };
        if let Some(alt) = patch.alt {
            image.alt = alt;
        }
        if let Some(position) = patch.position {
            image.position = position;
        }
        Ok(true)
    }

    async fn pull(&self, owner: ResourceId, id: ImageId) -> DomainResult<bool> {
        let mut state = self.state.lock().unwrap();
        let Some(images) = state.images.get_mut(&owner) else {
            return Ok(false);
        };
        let before = images.len();
        images.retain(|image| image.id != id);
        Ok(images.len() < before)
    }
}
