pub mod images;
pub mod resources;
mod upload;

pub use upload::{StoredFile, UploadContext};
