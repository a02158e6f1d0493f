use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PluginManifest {
    pub name: String,
    pub author: String,
    pub version: String,
    pub description: Option<String>,
}

impl PluginManifest {
    pub fn new(name: &str, author: &str, version: &str, description: &str) -> Self {
        Self {
            name: name.to_string(),
            author: author.to_string(),
            version: version.to_string(),
            description: Some(description.to_string()),
        }
    }
}
