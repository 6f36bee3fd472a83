// src/application/dto/input.rs
//! Allow-listed request payloads.
//!
//! Unknown keys are ignored. Every recognised key is coerced on its own: a
//! bad value in one field never rejects the payload. An absent key stays
//! `None`, so updates can tell "not sent" from "sent empty".
use serde::Deserialize;
use utoipa::ToSchema;

/// Payload accepted when creating a brand or store.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct CreateResourceInput {
    #[serde(default, deserialize_with = "lenient::string")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "lenient::string")]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "lenient::string")]
    pub meta_description: Option<String>,
    #[serde(default, deserialize_with = "lenient::string")]
    pub meta_title: Option<String>,
    #[serde(default, deserialize_with = "lenient::boolean")]
    #[schema(value_type = Option<bool>)]
    pub enabled: Option<Option<bool>>,
    #[serde(default, deserialize_with = "lenient::string")]
    pub sort: Option<String>,
    #[serde(default, deserialize_with = "lenient::integer")]
    #[schema(value_type = Option<i64>)]
    pub position: Option<Option<i64>>,
    #[serde(default, deserialize_with = "lenient::string")]
    pub site_url: Option<String>,
    #[serde(default, deserialize_with = "lenient::string")]
    pub slug: Option<String>,
}

/// Payload accepted when updating a brand or store. Only sent keys change.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct UpdateResourceInput {
    #[serde(default, deserialize_with = "lenient::string")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "lenient::string")]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "lenient::string")]
    pub meta_description: Option<String>,
    #[serde(default, deserialize_with = "lenient::string")]
    pub meta_title: Option<String>,
    #[serde(default, deserialize_with = "lenient::boolean")]
    #[schema(value_type = Option<bool>)]
    pub enabled: Option<Option<bool>>,
    #[serde(default, deserialize_with = "lenient::string")]
    pub sort: Option<String>,
    #[serde(default, deserialize_with = "lenient::integer")]
    #[schema(value_type = Option<i64>)]
    pub position: Option<Option<i64>>,
    #[serde(default, deserialize_with = "lenient::string")]
    pub site_url: Option<String>,
    #[serde(default, deserialize_with = "lenient::string")]
    pub slug: Option<String>,
    #[serde(default, deserialize_with = "lenient::string")]
    pub image: Option<String>,
}

impl UpdateResourceInput {
    /// True when no recognised key was sent.
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.description.is_none()
            && self.meta_description.is_none()
            && self.meta_title.is_none()
            && self.enabled.is_none()
            && self.sort.is_none()
            && self.position.is_none()
            && self.site_url.is_none()
            && self.slug.is_none()
            && self.image.is_none()
    }
}

/// Payload accepted when updating a gallery image.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct UpdateImageInput {
    #[serde(default, deserialize_with = "lenient::string")]
    pub alt: Option<String>,
    #[serde(default, deserialize_with = "lenient::integer")]
    #[schema(value_type = Option<i64>)]
    pub position: Option<Option<i64>>,
}

/// Returns the trimmed value when it carries any text.
pub(crate) fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

pub mod lenient {
    use serde::{Deserialize, Deserializer};
    use serde_json::Value;

    #[allow(clippy::unnecessary_wraps)]
    pub fn string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        Ok(Some(coerce_string(&value)))
    }

    pub fn boolean<'de, D>(deserializer: D) -> Result<Option<Option<bool>>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        Ok(Some(coerce_bool(&value)))
    }

    pub fn integer<'de, D>(deserializer: D) -> Result<Option<Option<i64>>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        Ok(Some(coerce_integer(&value)))
    }

    /// Scalars are rendered as text; null, arrays and objects become `""`.
    pub fn coerce_string(value: &Value) -> String {
        match value {
            Value::String(s) => s.clone(),
            Value::Number(n) => n.to_string(),
            Value::Bool(b) => b.to_string(),
            Value::Null | Value::Array(_) | Value::Object(_) => String::new(),
        }
    }

    /// Booleans and the strings `"true"` / `"false"` (any case).
    pub fn coerce_bool(value: &Value) -> Option<bool> {
        match value {
            Value::Bool(b) => Some(*b),
            Value::String(s) => parse_bool(s),
            _ => None,
        }
    }

    pub fn parse_bool(raw: &str) -> Option<bool> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "true" => Some(true),
            "false" => Some(false),
            _ => None,
        }
    }

    /// Numbers and numeric strings; fractional values are truncated.
    #[allow(clippy::cast_possible_truncation)]
    pub fn coerce_integer(value: &Value) -> Option<i64> {
        match value {
            Value::Number(n) => n
                .as_i64()
                .or_else(|| n.as_f64().filter(|f| f.is_finite()).map(|f| f.trunc() as i64)),
            Value::String(s) => {
                let s = s.trim();
                s.parse::<i64>().ok().or_else(|| {
                    s.parse::<f64>()
                        .ok()
                        .filter(|f| f.is_finite())
                        .map(|f| f.trunc() as i64)
                })
            }
            _ => None,
        }
    }
}
