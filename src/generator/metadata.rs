use std::collections::BTreeMap;

use anyhow::Context;
use serde::Deserialize;

/// Read-only metadata for one scaffoldable resource
///
/// Field lists drive the emitted TypeScript interface, ORM `data` objects and
/// SQL column lists. The registry is consumed as-is and never validated or
/// mutated by the generator.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourceMeta {
    /// ORM model name (Prisma client property), e.g. `gallery`
    pub model: String,
    /// SQL table name, e.g. `galleries`
    pub table: String,
    /// Field names in declaration order, excluding `id`
    #[serde(default)]
    pub fields: Vec<String>,
    /// Column used for single-record lookups
    #[serde(default = "default_unique_key")]
    pub unique_key: String,
    /// Relation names eligible for `include` blocks
    #[serde(default)]
    pub relations: Vec<String>,
}

fn default_unique_key() -> String {
    "id".to_string()
}

impl ResourceMeta {
    /// PascalCase TypeScript interface name for this resource
    pub fn type_name(&self) -> String {
        to_pascal_case(&self.model)
    }
}

/// Static resource/field-list registry
///
/// Parsed once from the embedded `metadata/resources.json` into an immutable
/// value that the orchestrator receives explicitly.
#[derive(Debug, Clone, Deserialize)]
pub struct MetadataRegistry {
    #[serde(flatten)]
    resources: BTreeMap<String, ResourceMeta>,
}

impl MetadataRegistry {
    /// Load the registry embedded at compile time
    ///
    /// # Errors
    ///
    /// Returns an error if the embedded JSON fails to parse.
    pub fn embedded() -> anyhow::Result<Self> {
        serde_json::from_str(include_str!("../../metadata/resources.json"))
            .context("failed to parse embedded metadata/resources.json")
    }

    /// Build a registry from a JSON document (used by tests)
    ///
    /// # Errors
    ///
    /// Returns an error if the document fails to parse.
    pub fn from_json(json: &str) -> anyhow::Result<Self> {
        serde_json::from_str(json).context("failed to parse resource metadata")
    }

    /// Look up a resource, falling back to derived defaults for names the
    /// registry does not know. The registry is unvalidated input, so an
    /// unknown resource is not an error.
    pub fn resource(&self, name: &str) -> ResourceMeta {
        self.resources
            .get(name)
            .cloned()
            .unwrap_or_else(|| fallback_meta(name))
    }
}

/// Derived metadata for resources absent from the registry
pub fn fallback_meta(resource: &str) -> ResourceMeta {
    ResourceMeta {
        model: singularize(&to_camel_ident(resource)),
        table: resource.replace('-', "_"),
        fields: Vec::new(),
        unique_key: default_unique_key(),
        relations: Vec::new(),
    }
}

/// `access-logs` / `access_logs` → `accessLogs`
pub fn to_camel_ident(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut upper_next = false;
    for ch in s.chars() {
        if ch == '-' || ch == '_' {
            upper_next = !out.is_empty();
        } else if upper_next {
            out.extend(ch.to_uppercase());
            upper_next = false;
        } else {
            out.push(ch);
        }
    }
    out
}

/// `accessLog` → `AccessLog`
pub fn to_pascal_case(s: &str) -> String {
    let camel = to_camel_ident(s);
    let mut chars = camel.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

/// Naive English singularization, good enough for table-style resource names
pub fn singularize(s: &str) -> String {
    if let Some(stem) = s.strip_suffix("ies") {
        format!("{stem}y")
    } else if s.ends_with("ss") || !s.ends_with('s') {
        s.to_string()
    } else {
        s[..s.len() - 1].to_string()
    }
}

/// TypeScript type for a field, by naming convention
pub fn ts_field_type(field: &str) -> &'static str {
    if field.ends_with("Count")
        || field.ends_with("Limit")
        || field.ends_with("Bytes")
        || field.ends_with("Size")
    {
        "number"
    } else {
        "string"
    }
}
