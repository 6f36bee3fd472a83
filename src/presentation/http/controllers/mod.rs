// src/presentation/http/controllers/mod.rs
pub mod brands;
pub mod resources;
pub mod store_images;
pub mod stores;
