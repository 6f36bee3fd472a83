use std::sync::Arc;

use catalog_core::application::dto::UpdateImageInput;
use catalog_core::application::error::ApplicationError;
use catalog_core::application::queries::images::ListImagesQuery;
use catalog_core::domain::errors::DomainError;

mod support;

use support::{FailingStorage, ResourceBuilder, build_catalog, build_catalog_with_storage, gallery_image};

#[tokio::test]
async fn primary_upload_stores_file_and_points_image_at_it() {
    let catalog = build_catalog();
    let brand = catalog.brands.seed(ResourceBuilder::new("Chien").build());
    let commands = &catalog.services.brands.commands;
    let id = brand.id.to_string();

    let mut upload = commands
        .begin_primary_image_upload(&id, "my photo.png")
        .await
        .unwrap();
    upload.write(b"abc").await.unwrap();
    upload.write(b"def").await.unwrap();
    let uploaded = commands.finish_primary_image_upload(upload).await.unwrap();

    assert_eq!(uploaded.file, "my-photo.png");
    assert_eq!(uploaded.size, 6);
    let path = catalog.brand_dir().join(&id).join("my-photo.png");
    assert_eq!(std::fs::read(path).unwrap(), b"abcdef");
    assert_eq!(catalog.brands.get(brand.id).unwrap().image, "my-photo.png");
}

#[tokio::test]
async fn replacing_primary_image_removes_previous_file_only() {
    let catalog = build_catalog();
    let store = catalog.stores.seed(ResourceBuilder::new("Market").image("old.png").build());
    let id = store.id.to_string();
    let directory = catalog.store_dir().join(&id);
    std::fs::create_dir_all(&directory).unwrap();
    std::fs::write(directory.join("old.png"), b"old").unwrap();
    std::fs::write(directory.join("gallery.jpg"), b"gallery").unwrap();
    let commands = &catalog.services.stores.commands;

    let mut upload = commands.begin_primary_image_upload(&id, "new.png").await.unwrap();
    upload.write(b"new").await.unwrap();
    commands.finish_primary_image_upload(upload).await.unwrap();

    assert!(!directory.join("old.png").exists());
    assert!(directory.join("new.png").exists());
    assert!(directory.join("gallery.jpg").exists());
}

#[tokio::test]
async fn primary_upload_for_missing_resource_is_not_found() {
    let catalog = build_catalog();
    let ghost = ResourceBuilder::new("Ghost").build();

    let err = catalog
        .services
        .brands
        .commands
        .begin_primary_image_upload(&ghost.id.to_string(), "photo.png")
        .await
        .unwrap_err();

    assert!(matches!(err, ApplicationError::NotFound(_)));
    assert!(!catalog.brand_dir().join(ghost.id.to_string()).exists());
}

#[tokio::test]
async fn abandoned_upload_leaves_no_file_behind() {
    let catalog = build_catalog();
    let brand = catalog.brands.seed(ResourceBuilder::new("Chien").build());
    let id = brand.id.to_string();

    {
        let mut upload = catalog
            .services
            .brands
            .commands
            .begin_primary_image_upload(&id, "photo.png")
            .await
            .unwrap();
        upload.write(b"partial").await.unwrap();
    }

    let directory = catalog.brand_dir().join(&id);
    let leftovers: Vec<_> = std::fs::read_dir(&directory).unwrap().collect();
    assert!(leftovers.is_empty());
    assert_eq!(catalog.brands.get(brand.id).unwrap().image, "");
}

#[tokio::test]
async fn deleting_brand_image_empties_its_directory() {
    let catalog = build_catalog();
    let brand = catalog.brands.seed(ResourceBuilder::new("Chien").image("logo.png").build());
    let id = brand.id.to_string();
    let directory = catalog.brand_dir().join(&id);
    std::fs::create_dir_all(&directory).unwrap();
    std::fs::write(directory.join("logo.png"), b"logo").unwrap();
    std::fs::write(directory.join("stale.png"), b"stale").unwrap();

    let found = catalog
        .services
        .brands
        .commands
        .delete_primary_image(&id)
        .await
        .unwrap();

    assert!(found);
    assert!(directory.exists());
    assert_eq!(std::fs::read_dir(&directory).unwrap().count(), 0);
    assert_eq!(catalog.brands.get(brand.id).unwrap().image, "");
}

#[tokio::test]
async fn deleting_store_image_keeps_gallery_files() {
    let catalog = build_catalog();
    let store = catalog.stores.seed(ResourceBuilder::new("Market").image("front.png").build());
    let id = store.id.to_string();
    let directory = catalog.store_dir().join(&id);
    std::fs::create_dir_all(&directory).unwrap();
    std::fs::write(directory.join("front.png"), b"front").unwrap();
    std::fs::write(directory.join("aisle.jpg"), b"aisle").unwrap();

    let found = catalog
        .services
        .stores
        .commands
        .delete_primary_image(&id)
        .await
        .unwrap();

    assert!(found);
    assert!(!directory.join("front.png").exists());
    assert!(directory.join("aisle.jpg").exists());
}

#[tokio::test]
async fn deleting_image_of_missing_resource_reports_false() {
    let catalog = build_catalog();
    let ghost = ResourceBuilder::new("Ghost").build();

    let found = catalog
        .services
        .brands
        .commands
        .delete_primary_image(&ghost.id.to_string())
        .await
        .unwrap();

    assert!(!found);
}

#[tokio::test]
async fn delete_image_clears_field_even_when_storage_fails() {
    let catalog = build_catalog_with_storage(Arc::new(FailingStorage));
    let brand = catalog.brands.seed(ResourceBuilder::new("Chien").image("logo.png").build());

    let found = catalog
        .services
        .brands
        .commands
        .delete_primary_image(&brand.id.to_string())
        .await
        .unwrap();

    assert!(found);
    assert_eq!(catalog.brands.get(brand.id).unwrap().image, "");
}

#[tokio::test]
async fn gallery_upload_appends_record_with_defaults() {
    let catalog = build_catalog();
    let store = catalog.stores.seed(ResourceBuilder::new("Market").build());
    let id = store.id.to_string();
    let commands = &catalog.services.store_image_commands;

    let mut upload = commands.begin_image_upload(&id, "aisle.jpg").await.unwrap();
    upload.write(b"jpeg").await.unwrap();
    let view = commands.add_image(upload).await.unwrap();

    assert_eq!(view.filename, "aisle.jpg");
    assert_eq!(view.alt, "");
    assert_eq!(view.position, 99);
    assert_eq!(
        view.url,
        format!("https://shop.test/images/stores/{id}/aisle.jpg")
    );
    assert!(catalog.store_dir().join(&id).join("aisle.jpg").exists());
    assert_eq!(catalog.stores.images_of(store.id).len(), 1);
}

#[tokio::test]
async fn failed_gallery_record_discards_committed_file() {
    let catalog = build_catalog();
    let store = catalog.stores.seed(ResourceBuilder::new("Market").build());
    let id = store.id.to_string();
    let commands = &catalog.services.store_image_commands;

    let mut upload = commands.begin_image_upload(&id, "aisle.jpg").await.unwrap();
    upload.write(b"jpeg").await.unwrap();
    catalog.stores.fail_image_writes();

    let err = commands.add_image(upload).await.unwrap_err();

    assert!(matches!(err, ApplicationError::Domain(DomainError::NotFound(_))));
    assert!(!catalog.store_dir().join(&id).join("aisle.jpg").exists());
    assert!(catalog.stores.images_of(store.id).is_empty());
}

#[tokio::test]
async fn gallery_upload_for_missing_store_is_not_found() {
    let catalog = build_catalog();
    let ghost = ResourceBuilder::new("Ghost").build();

    let err = catalog
        .services
        .store_image_commands
        .begin_image_upload(&ghost.id.to_string(), "aisle.jpg")
        .await
        .unwrap_err();

    assert!(matches!(err, ApplicationError::NotFound(_)));
}

#[tokio::test]
async fn gallery_is_listed_by_position() {
    let catalog = build_catalog();
    let store = catalog.stores.seed(ResourceBuilder::new("Market").build());
    catalog.stores.seed_image(store.id, gallery_image("c.jpg", "", 30));
    catalog.stores.seed_image(store.id, gallery_image("a.jpg", "", 10));
    catalog.stores.seed_image(store.id, gallery_image("b.jpg", "", 20));

    let images = catalog
        .services
        .store_image_queries
        .list_images(ListImagesQuery {
            owner: store.id.to_string(),
        })
        .await
        .unwrap();

    let names: Vec<&str> = images.iter().map(|image| image.filename.as_str()).collect();
    assert_eq!(names, ["a.jpg", "b.jpg", "c.jpg"]);
}

#[tokio::test]
async fn gallery_of_unknown_store_is_empty() {
    let catalog = build_catalog();
    let ghost = ResourceBuilder::new("Ghost").build();

    let images = catalog
        .services
        .store_image_queries
        .list_images(ListImagesQuery {
            owner: ghost.id.to_string(),
        })
        .await
        .unwrap();

    assert!(images.is_empty());
}

#[tokio::test]
async fn update_image_sets_alt_and_coerces_position() {
    let catalog = build_catalog();
    let store = catalog.stores.seed(ResourceBuilder::new("Market").build());
    let image = gallery_image("a.jpg", "", 99);
    catalog.stores.seed_image(store.id, image.clone());
    let commands = &catalog.services.store_image_commands;
    let (owner, image_id) = (store.id.to_string(), image.id.to_string());

    let input = UpdateImageInput {
        alt: Some("Front door".into()),
        position: Some(Some(3)),
    };
    let view = commands
        .update_image(&owner, &image_id, &input)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(view.alt, "Front door");
    assert_eq!(view.position, 3);

    let negative = UpdateImageInput {
        alt: None,
        position: Some(Some(-2)),
    };
    let view = commands
        .update_image(&owner, &image_id, &negative)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(view.position, 0);
    assert_eq!(view.alt, "Front door");
}

#[tokio::test]
async fn update_image_errors() {
    let catalog = build_catalog();
    let store = catalog.stores.seed(ResourceBuilder::new("Market").build());
    let owner = store.id.to_string();
    let commands = &catalog.services.store_image_commands;
    let missing = gallery_image("x.jpg", "", 1).id.to_string();

    let err = commands
        .update_image(&owner, &missing, &UpdateImageInput::default())
        .await
        .unwrap_err();
    assert!(matches!(err, ApplicationError::Domain(DomainError::EmptyUpdate)));

    let input = UpdateImageInput {
        alt: Some("x".into()),
        position: None,
    };
    assert!(commands.update_image(&owner, &missing, &input).await.unwrap().is_none());

    let err = commands
        .update_image(&owner, "nope", &input)
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        ApplicationError::Domain(DomainError::InvalidIdentifier(_))
    ));
}

#[tokio::test]
async fn delete_image_removes_file_and_record_and_is_idempotent() {
    let catalog = build_catalog();
    let store = catalog.stores.seed(ResourceBuilder::new("Market").build());
    let image = gallery_image("aisle.jpg", "", 1);
    catalog.stores.seed_image(store.id, image.clone());
    let owner = store.id.to_string();
    let directory = catalog.store_dir().join(&owner);
    std::fs::create_dir_all(&directory).unwrap();
    std::fs::write(directory.join("aisle.jpg"), b"jpeg").unwrap();
    let commands = &catalog.services.store_image_commands;

    assert!(commands.delete_image(&owner, &image.id.to_string()).await.unwrap());
    assert!(!directory.join("aisle.jpg").exists());
    assert!(catalog.stores.images_of(store.id).is_empty());

    assert!(commands.delete_image(&owner, &image.id.to_string()).await.unwrap());
}
