// src/application/dto/projection.rs
use serde::Serialize;
use serde_json::{Map, Value};

/// Parsed `fields=a,b,c` selector. `id` is always kept.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldSelection(Option<Vec<String>>);

impl FieldSelection {
    pub fn parse(raw: Option<&str>) -> Self {
        let fields: Vec<String> = raw
            .unwrap_or_default()
            .split(',')
            .map(str::trim)
            .filter(|field| !field.is_empty())
            .map(str::to_string)
            .collect();

        if fields.is_empty() {
            Self(None)
        } else {
            Self(Some(fields))
        }
    }

    fn keeps(&self, key: &str) -> bool {
        match &self.0 {
            None => true,
            Some(fields) => key == "id" || fields.iter().any(|field| field == key),
        }
    }

    /// Serialize `item` and drop every top-level key not selected.
    pub fn project<T: Serialize>(&self, item: &T) -> serde_json::Result<Value> {
        let value = serde_json::to_value(item)?;
        Ok(match value {
            Value::Object(map) if self.0.is_some() => Value::Object(
                map.into_iter()
                    .filter(|(key, _)| self.keeps(key))
                    .collect::<Map<String, Value>>(),
            ),
            other => other,
        })
    }
}
