// src/domain/catalog/image.rs
use crate::domain::catalog::value_objects::{FileName, Position};
use crate::domain::errors::{DomainError, DomainResult};
use std::fmt;
use uuid::Uuid;

/// Position given to freshly uploaded gallery images.
pub const DEFAULT_IMAGE_POSITION: i64 = 99;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ImageId(Uuid);

impl ImageId {
    pub fn generate() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn parse(value: &str) -> DomainResult<Self> {
        Uuid::parse_str(value.trim())
            .map(Self)
            .map_err(|_| DomainError::InvalidIdentifier(value.to_string()))
    }

    pub fn as_uuid(&self) -> Uuid {
        self.0
    }
}

impl From<Uuid> for ImageId {
    fn from(value: Uuid) -> Self {
        Self(value)
    }
}

impl fmt::Display for ImageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.hyphenated())
    }
}

/// Gallery image owned by a store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceImage {
    pub id: ImageId,
    pub filename: String,
    pub alt: String,
    pub position: Position,
}

#[derive(Debug, Clone)]
pub struct NewResourceImage {
    pub id: ImageId,
    pub filename: FileName,
    pub alt: String,
    pub position: Position,
}

impl NewResourceImage {
    pub fn uploaded(filename: FileName) -> Self {
        Self {
            id: ImageId::generate(),
            filename,
            alt: String::new(),
            position: Position::new(DEFAULT_IMAGE_POSITION),
        }
    }

    pub fn into_image(self) -> ResourceImage {
        ResourceImage {
            id: self.id,
            filename: self.filename.into_inner(),
            alt: self.alt,
            position: self.position,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImagePatch {
    pub alt: Option<String>,
    pub position: Option<Position>,
}

impl ImagePatch {
    pub fn is_empty(&self) -> bool {
        self.alt.is_none() && self.position.is_none()
    }
}
