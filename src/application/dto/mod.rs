pub mod images;
pub mod input;
pub mod links;
pub mod projection;
pub mod resources;
pub mod serde_time;

pub use images::ImageView;
pub use input::{CreateResourceInput, UpdateImageInput, UpdateResourceInput};
pub use links::{CatalogLinks, PublicLinks};
pub use projection::FieldSelection;
pub use resources::{ResourceView, UploadedFileDto};
