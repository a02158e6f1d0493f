use crate::manifest::PluginManifest;
use crate::plugin::{run_startup, ServerPlugin};
use texstream_core::{BlobStore, ResolvePolicy, TextureConfig};

/// Creates texture_config.json when missing and otherwise leaves an
/// existing valid document untouched.
pub struct TextureOptimizer {
    manifest: PluginManifest,
}

impl TextureOptimizer {
    pub fn new() -> Self {
        Self {
            manifest: PluginManifest::new(
                "TextureOptimizer",
                "Jeremias",
                "0.2.0",
                "Creates and manages texture_config.json in the data directory",
            ),
        }
    }
}

impl Default for TextureOptimizer {
    fn default() -> Self {
        Self::new()
    }
}

impl ServerPlugin for TextureOptimizer {
    fn manifest(&self) -> &PluginManifest {
        &self.manifest
    }

    fn on_server_initialized(&self, store: &dyn BlobStore) -> TextureConfig {
        run_startup(
            "TextureOptimizer",
            ResolvePolicy::SkipRewriteOnValidLoad,
            store,
            "texture_config.json already exists, no changes made",
        )
    }
}
