use std::sync::Arc;

use crate::{
    application::{
        commands::{images::ImageCommandService, resources::ResourceCommandService},
        dto::CatalogLinks,
        ports::{storage::ImageStorage, time::Clock, util::SlugGenerator},
        queries::{images::ImageQueryService, resources::ResourceQueryService},
    },
    domain::catalog::{
        DependentReferenceRepository, ResourceImageRepository, ResourceKind,
        ResourceReadRepository, ResourceWriteRepository,
        services::{PositionAllocator, SlugResolver},
    },
};

/// Persistence adapters bound to one resource kind.
#[derive(Clone)]
pub struct ResourceRepositories {
    pub read: Arc<dyn ResourceReadRepository>,
    pub write: Arc<dyn ResourceWriteRepository>,
    pub references: Arc<dyn DependentReferenceRepository>,
}

/// Command and query side of one resource kind.
pub struct ResourceServices {
    pub commands: Arc<ResourceCommandService>,
    pub queries: Arc<ResourceQueryService>,
}

pub struct ApplicationServices {
    pub brands: ResourceServices,
    pub stores: ResourceServices,
    pub store_image_commands: Arc<ImageCommandService>,
    pub store_image_queries: Arc<ImageQueryService>,
}

impl ApplicationServices {
    pub fn new(
        brands: ResourceRepositories,
        stores: ResourceRepositories,
        store_images: Arc<dyn ResourceImageRepository>,
        storage: Arc<dyn ImageStorage>,
        clock: Arc<dyn Clock>,
        slugger: Arc<dyn SlugGenerator>,
        links: &CatalogLinks,
    ) -> Self {
        let store_links = links.for_kind(ResourceKind::Store);

        let store_image_commands = Arc::new(ImageCommandService::new(
            ResourceKind::Store,
            Arc::clone(&stores.read),
            Arc::clone(&store_images),
            Arc::clone(&storage),
            store_links.clone(),
        ));
        let store_image_queries = Arc::new(ImageQueryService::new(store_images, store_links));

        Self {
            brands: build_resource_services(
                ResourceKind::Brand,
                brands,
                &storage,
                &clock,
                &slugger,
                links,
            ),
            stores: build_resource_services(
                ResourceKind::Store,
                stores,
                &storage,
                &clock,
                &slugger,
                links,
            ),
            store_image_commands,
            store_image_queries,
        }
    }

    pub fn resources(&self, kind: ResourceKind) -> &ResourceServices {
        match kind {
            ResourceKind::Brand => &self.brands,
            ResourceKind::Store => &self.stores,
        }
    }
}

fn build_resource_services(
    kind: ResourceKind,
    repos: ResourceRepositories,
    storage: &Arc<dyn ImageStorage>,
    clock: &Arc<dyn Clock>,
    slugger: &Arc<dyn SlugGenerator>,
    links: &CatalogLinks,
) -> ResourceServices {
    let links = links.for_kind(kind);

    let slug_resolver = Arc::new(SlugResolver::new(
        kind,
        Arc::clone(&repos.read),
        Arc::clone(slugger),
    ));
    let positions = Arc::new(PositionAllocator::new(Arc::clone(&repos.read)));

    let commands = Arc::new(ResourceCommandService::new(
        kind,
        Arc::clone(&repos.read),
        repos.write,
        repos.references,
        Arc::clone(storage),
        Arc::clone(&slug_resolver),
        positions,
        links.clone(),
        Arc::clone(clock),
    ));
    let queries = Arc::new(ResourceQueryService::new(repos.read, slug_resolver, links));

    ResourceServices { commands, queries }
}
