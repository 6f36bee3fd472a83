// src/domain/catalog/value_objects.rs
use crate::domain::errors::{DomainError, DomainResult};
use std::fmt;
use url::Url;
use uuid::Uuid;

/// Store-assigned identifier of a brand or store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ResourceId(Uuid);

impl ResourceId {
    pub fn new(id: Uuid) -> Self {
        Self(id)
    }

    /// Parse the external string form. Anything that is not a UUID is rejected.
    pub fn parse(value: &str) -> DomainResult<Self> {
        Uuid::parse_str(value.trim())
            .map(Self)
            .map_err(|_| DomainError::InvalidIdentifier(value.to_string()))
    }

    pub fn as_uuid(&self) -> Uuid {
        self.0
    }
}

impl From<Uuid> for ResourceId {
    fn from(value: Uuid) -> Self {
        Self(value)
    }
}

impl From<ResourceId> for Uuid {
    fn from(value: ResourceId) -> Self {
        value.0
    }
}

impl fmt::Display for ResourceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.hyphenated())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ResourceSlug(String);

impl ResourceSlug {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(DomainError::Validation("slug cannot be empty".into()));
        }
        Ok(Self(value))
    }

    /// Append the numeric disambiguation suffix used by the slug resolver.
    pub fn with_suffix(&self, suffix: u64) -> Self {
        Self(format!("{}-{suffix}", self.0))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for ResourceSlug {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<ResourceSlug> for String {
    fn from(value: ResourceSlug) -> Self {
        value.0
    }
}

/// Ordering hint among siblings of the same kind. Not unique.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position(i64);

impl Position {
    pub const FIRST: Self = Self(1);

    pub fn new(value: i64) -> Self {
        Self(value)
    }

    /// Caller-supplied positions are honoured only when non-negative.
    pub fn explicit(value: i64) -> Option<Self> {
        (value >= 0).then_some(Self(value))
    }

    /// Position following the current maximum; legacy zero or negative
    /// maxima count as an empty collection.
    pub fn after(max: Option<Self>) -> Self {
        match max {
            Some(Self(max)) if max > 0 => Self(max.saturating_add(1)),
            _ => Self::FIRST,
        }
    }

    pub fn value(self) -> i64 {
        self.0
    }
}

impl From<Position> for i64 {
    fn from(value: Position) -> Self {
        value.0
    }
}

/// Absolute http(s) URL pointing at a brand or store website.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteUrl(String);

impl SiteUrl {
    pub fn parse(value: &str) -> DomainResult<Self> {
        let trimmed = value.trim();
        let url = Url::parse(trimmed)
            .map_err(|_| DomainError::Validation(format!("'{trimmed}' is not a valid URL")))?;

        let scheme_ok = matches!(url.scheme(), "http" | "https");
        let host_ok = url.host_str().is_some_and(|host| !host.is_empty());

        if scheme_ok && host_ok {
            Ok(Self(trimmed.to_string()))
        } else {
            Err(DomainError::Validation(format!(
                "'{trimmed}' is not an absolute URL"
            )))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for SiteUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

const UNSAFE_FILE_NAME_CHARS: &[char] = &[
    '*', '/', ':', ';', '&', '?', '@', '$', '(', ')', '<', '>', '#', '%', '{', '}', '|', '\\',
    '^', '~', '[', ']', '"', '\'',
];

/// Name of an uploaded file, reduced to a single safe path component.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FileName(String);

impl FileName {
    /// Keep only the last path component of a client-supplied name and
    /// replace whitespace and shell/URL-sensitive characters with `-`.
    pub fn sanitize(raw: &str) -> DomainResult<Self> {
        let base = raw
            .rsplit(['/', '\\'])
            .next()
            .unwrap_or_default()
            .trim();

        let cleaned: String = base
            .chars()
            .map(|c| {
                if c.is_whitespace() || c.is_control() || UNSAFE_FILE_NAME_CHARS.contains(&c) {
                    '-'
                } else {
                    c
                }
            })
            .collect();

        if cleaned.is_empty() || cleaned.chars().all(|c| c == '.') {
            return Err(DomainError::Validation(format!(
                "'{raw}' is not a usable file name"
            )));
        }

        Ok(Self(cleaned))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for FileName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
