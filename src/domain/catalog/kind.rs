// src/domain/catalog/kind.rs
use std::fmt;

/// The kinds of catalog resources that share the slug/position machinery.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResourceKind {
    Brand,
    Store,
}

impl ResourceKind {
    /// Singular name, also used as the slug fallback token.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Brand => "brand",
            Self::Store => "store",
        }
    }

    /// Table holding resources of this kind.
    pub fn collection(self) -> &'static str {
        match self {
            Self::Brand => "brands",
            Self::Store => "stores",
        }
    }

    /// Column on `products` that points at a resource of this kind.
    pub fn reference_column(self) -> &'static str {
        match self {
            Self::Brand => "brand_id",
            Self::Store => "store_id",
        }
    }

    /// Whether the kind owns a positioned image gallery besides its primary image.
    pub fn has_gallery(self) -> bool {
        matches!(self, Self::Store)
    }
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
