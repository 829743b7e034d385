use crate::bail_invalid;
use crate::error::Result;
use serde::Serialize;
use serde_json::Value;

/// A uniquely named vertex.
///
/// The name is fixed at construction. `description` is free text (the DOT
/// adapter uses it as the node label) and `tag` is an opaque payload the
/// library carries along but never inspects.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Node {
    name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tag: Option<Value>,
}

impl Node {
    pub fn new(name: impl Into<String>) -> Result<Self> {
        let name = name.into();
        if name.trim().is_empty() {
            bail_invalid!("node name must not be empty");
        }
        Ok(Node {
            name,
            description: None,
            tag: None,
        })
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_tag(mut self, tag: Value) -> Self {
        self.tag = Some(tag);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl std::fmt::Display for Node {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.name)
    }
}
