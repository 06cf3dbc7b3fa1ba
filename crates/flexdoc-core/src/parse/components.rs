use indexmap::IndexMap;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use super::schema::SchemaOrRef;
use super::security::SecurityScheme;

/// Reusable definitions. Only schemas and security schemes are read by the
/// viewer; everything else is kept verbatim.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Components {
    #[serde(
        default,
        skip_serializing_if = "IndexMap::is_empty",
        deserialize_with = "lenient_schemas"
    )]
    pub schemas: IndexMap<String, SchemaOrRef>,

    #[serde(
        rename = "securitySchemes",
        default,
        skip_serializing_if = "IndexMap::is_empty"
    )]
    pub security_schemes: IndexMap<String, SecurityScheme>,

    #[serde(flatten)]
    pub other: IndexMap<String, Value>,
}

/// A schema the viewer cannot read is dropped on its own instead of failing
/// the document.
fn lenient_schemas<'de, D>(deserializer: D) -> Result<IndexMap<String, SchemaOrRef>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = IndexMap::<String, Value>::deserialize(deserializer)?;
    Ok(raw
        .into_iter()
        .filter_map(|(name, value)| match SchemaOrRef::deserialize(&value) {
            Ok(schema) => Some((name, schema)),
            Err(e) => {
                log::debug!("skipping unreadable schema `{name}`: {e}");
                None
            }
        })
        .collect())
}
